//! In-memory mirror of the two server collections.
//!
//! The root component owns exactly one `DataCache` and hands slices of it to
//! the tabs. It changes only through the methods below: `replace_all` when a
//! poll lands, and the `add_*` / `remove_*` calls made optimistically right
//! after a local mutation is sent. There is no reconciliation; whatever the
//! next successful poll returns wins.

use common::model::record::AbsenceRecord;
use common::model::teacher::Teacher;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataCache {
    teachers: Vec<Teacher>,
    records: Vec<AbsenceRecord>,
}

impl DataCache {
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Records in server order (newest first), plus any optimistic additions
    /// at the front.
    pub fn records(&self) -> &[AbsenceRecord] {
        &self.records
    }

    /// Replaces both collections with a fresh server snapshot.
    pub fn replace_all(&mut self, teachers: Vec<Teacher>, records: Vec<AbsenceRecord>) {
        self.teachers = teachers;
        self.records = records;
    }

    pub fn add_record(&mut self, record: AbsenceRecord) {
        self.records.insert(0, record);
    }

    /// Returns whether a record was removed.
    pub fn remove_record(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn add_teacher(&mut self, teacher: Teacher) {
        self.teachers.push(teacher);
    }

    /// Returns whether a teacher was removed. Their records stay.
    pub fn remove_teacher(&mut self, id: &str) -> bool {
        let before = self.teachers.len();
        self.teachers.retain(|t| t.id != id);
        self.teachers.len() != before
    }

    /// Teachers in alphabetical order, ignoring case.
    pub fn teachers_sorted(&self) -> Vec<Teacher> {
        let mut sorted = self.teachers.clone();
        sorted.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        sorted
    }

    pub fn teacher_name(&self, id: &str) -> Option<&str> {
        self.teachers
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
    }
}
