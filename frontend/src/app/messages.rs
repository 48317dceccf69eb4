use chrono::NaiveDate;

use common::model::record::AbsenceRecord;
use common::model::teacher::Teacher;

use crate::components::absence_form::AbsenceDraft;

use super::state::Tab;

pub enum Msg {
    SetTab(Tab),
    /// Fetch both collections from the server.
    Refresh,
    Loaded {
        teachers: Vec<Teacher>,
        records: Vec<AbsenceRecord>,
    },
    AddRecord(AbsenceDraft),
    DeleteRecord(String),
    /// Adds a teacher with the given (already trimmed) name.
    AddTeacher(String),
    DeleteTeacher(String),
    SetSearchDate(Option<NaiveDate>),
}
