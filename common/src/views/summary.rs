use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::active::{active_on, relief_needed};
use crate::model::record::AbsenceRecord;
use crate::model::teacher::Teacher;

/// Figures shown beside the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Teachers away on `today`.
    pub absent_today: usize,
    /// Of those, how many need a relief teacher.
    pub relief_needed_today: usize,
    pub registered_teachers: usize,
    pub total_records: usize,
}

pub fn dashboard_summary(
    teachers: &[Teacher],
    records: &[AbsenceRecord],
    today: NaiveDate,
) -> DashboardSummary {
    let active = active_on(records, today);
    DashboardSummary {
        absent_today: active.len(),
        relief_needed_today: relief_needed(&active).len(),
        registered_teachers: teachers.len(),
        total_records: records.len(),
    }
}
