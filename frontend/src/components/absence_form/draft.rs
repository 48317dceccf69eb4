//! Raw form values and their validation.

use chrono::{DateTime, NaiveDate, Utc};

use common::model::record::AbsenceRecord;
use common::reasons::MAX_FORM_DAYS;

use crate::helpers::parse_input_date;

pub const MISSING_TEACHER: &str = "Sila pilih nama guru";
pub const MISSING_START_DATE: &str = "Sila pilih tarikh mula";
pub const MISSING_DAYS: &str = "Sila pilih bilangan hari";
pub const MISSING_REASON: &str = "Sila pilih sebab";

/// Values as typed into the form, before validation. Empty strings mean
/// "nothing chosen yet".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub teacher_id: String,
    pub start_date: String,
    pub days: String,
    pub reason: String,
    /// Defaults to "TIDAK".
    pub need_relief: bool,
    pub remarks: String,
}

/// A validated form, still missing the fields the owner assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsenceDraft {
    pub teacher_id: String,
    pub start_date: NaiveDate,
    pub days: u32,
    pub reason: String,
    pub need_relief: bool,
    pub remarks: Option<String>,
}

impl FormState {
    /// Checks teacher, start date, day count and reason in that order and
    /// returns the prompt for the first one missing.
    pub fn validate(&self) -> Result<AbsenceDraft, &'static str> {
        if self.teacher_id.is_empty() {
            return Err(MISSING_TEACHER);
        }
        let start_date = parse_input_date(&self.start_date).ok_or(MISSING_START_DATE)?;
        let days = self
            .days
            .parse::<u32>()
            .ok()
            .filter(|d| (1..=MAX_FORM_DAYS).contains(d))
            .ok_or(MISSING_DAYS)?;
        if self.reason.is_empty() {
            return Err(MISSING_REASON);
        }

        let remarks = self.remarks.trim();
        Ok(AbsenceDraft {
            teacher_id: self.teacher_id.clone(),
            start_date,
            days,
            reason: self.reason.clone(),
            need_relief: self.need_relief,
            remarks: (!remarks.is_empty()).then(|| self.remarks.clone()),
        })
    }
}

impl AbsenceDraft {
    pub fn into_record(
        self,
        id: String,
        teacher_name: String,
        created_at: DateTime<Utc>,
    ) -> AbsenceRecord {
        AbsenceRecord {
            id,
            teacher_id: self.teacher_id,
            teacher_name,
            start_date: self.start_date,
            days: self.days,
            reason: self.reason,
            need_relief: self.need_relief,
            remarks: self.remarks,
            created_at,
        }
    }
}
