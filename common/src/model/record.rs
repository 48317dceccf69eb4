//! The absence record: one teacher away for a contiguous run of days.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single absence event as stored by the backend and mirrored by the UI.
///
/// Field names are serialized in camelCase (`teacherId`, `startDate`, ...)
/// because that is the shape the HTTP API has always spoken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceRecord {
    /// Client-generated identifier, unique among records.
    pub id: String,

    /// Roster id of the absent teacher. Not checked against the roster, so it
    /// may dangle once the teacher is deleted.
    pub teacher_id: String,

    /// Name of the teacher at the moment the record was created. It is a
    /// snapshot and is never re-joined against the roster.
    pub teacher_name: String,

    /// First day of the absence (`YYYY-MM-DD`).
    pub start_date: NaiveDate,

    /// Number of consecutive calendar days covered, counting `start_date`.
    pub days: u32,

    /// One of [`crate::reasons::REASONS`]; stored verbatim.
    pub reason: String,

    /// Whether a relief (substitute) teacher has to cover the classes.
    pub need_relief: bool,

    #[serde(default)]
    pub remarks: Option<String>,

    /// Insertion time, used only to list the newest records first.
    pub created_at: DateTime<Utc>,
}

impl AbsenceRecord {
    /// Last day covered by the absence, inclusive.
    ///
    /// A record with `days == 0` is treated as a single-day absence so the
    /// interval is never inverted.
    pub fn end_date(&self) -> NaiveDate {
        let extra = u64::from(self.days.saturating_sub(1));
        self.start_date
            .checked_add_days(Days::new(extra))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Remarks for display, `-` when there are none.
    pub fn remarks_or_dash(&self) -> &str {
        match self.remarks.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => "-",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(start: &str, days: u32) -> AbsenceRecord {
        AbsenceRecord {
            id: "r1".to_string(),
            teacher_id: "t-1".to_string(),
            teacher_name: "Cg. Zalina binti Omar".to_string(),
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            days,
            reason: "CUTI SAKIT".to_string(),
            need_relief: true,
            remarks: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn end_date_is_inclusive() {
        let r = record("2024-03-30", 3);
        assert_eq!(r.end_date(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());

        let single = record("2024-03-30", 1);
        assert_eq!(single.end_date(), single.start_date);
    }

    #[test]
    fn zero_days_does_not_invert_interval() {
        let r = record("2024-03-30", 0);
        assert_eq!(r.end_date(), r.start_date);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(record("2024-03-30", 3)).unwrap();
        assert_eq!(json["teacherId"], "t-1");
        assert_eq!(json["teacherName"], "Cg. Zalina binti Omar");
        assert_eq!(json["startDate"], "2024-03-30");
        assert_eq!(json["needRelief"], true);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-03-01T08:00:00"));
    }

    #[test]
    fn accepts_browser_iso_timestamps_and_missing_remarks() {
        let body = r#"{
            "id": "abc123xyz",
            "teacherId": "t-4",
            "teacherName": "Cg. Anuar Ruddin bin Salleh",
            "startDate": "2024-05-02",
            "days": 2,
            "reason": "MESYUARAT",
            "needRelief": false,
            "createdAt": "2024-05-01T09:15:42.123Z"
        }"#;
        let parsed: AbsenceRecord = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.remarks, None);
        assert_eq!(parsed.remarks_or_dash(), "-");
        assert_eq!(parsed.end_date(), NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    }
}
