use chrono::{DateTime, NaiveDate, TimeZone};

use crate::model::record::AbsenceRecord;

/// Whether `date` falls inside the record's inclusive interval
/// `[start_date, start_date + days - 1]`.
pub fn is_active_on(record: &AbsenceRecord, date: NaiveDate) -> bool {
    record.start_date <= date && date <= record.end_date()
}

/// Records whose interval contains `date`, in their original order.
pub fn active_on(records: &[AbsenceRecord], date: NaiveDate) -> Vec<AbsenceRecord> {
    records
        .iter()
        .filter(|r| is_active_on(r, date))
        .cloned()
        .collect()
}

/// Records active at the start of the local day containing `now`.
pub fn active_today<Tz: TimeZone>(records: &[AbsenceRecord], now: &DateTime<Tz>) -> Vec<AbsenceRecord> {
    active_on(records, now.date_naive())
}

/// Subset of `records` that asked for a relief teacher.
pub fn relief_needed(records: &[AbsenceRecord]) -> Vec<AbsenceRecord> {
    records.iter().filter(|r| r.need_relief).cloned().collect()
}

/// Records shown by the records browser for the chosen search date.
///
/// No date means nothing is shown, not everything.
pub fn filter_by_date(records: &[AbsenceRecord], date: Option<NaiveDate>) -> Vec<AbsenceRecord> {
    match date {
        Some(date) => active_on(records, date),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(id: &str, start: &str, days: u32, need_relief: bool) -> AbsenceRecord {
        AbsenceRecord {
            id: id.to_string(),
            teacher_id: format!("t-{id}"),
            teacher_name: format!("Teacher {id}"),
            start_date: date(start),
            days,
            reason: "CUTI REHAT".to_string(),
            need_relief,
            remarks: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn boundary_days_are_included() {
        let r = record("a", "2024-06-10", 3, false);
        assert!(!is_active_on(&r, date("2024-06-09")));
        assert!(is_active_on(&r, date("2024-06-10")));
        assert!(is_active_on(&r, date("2024-06-11")));
        assert!(is_active_on(&r, date("2024-06-12")));
        assert!(!is_active_on(&r, date("2024-06-13")));
    }

    #[test]
    fn active_on_keeps_order() {
        let records = vec![
            record("a", "2024-06-10", 1, false),
            record("b", "2024-06-01", 20, false),
            record("c", "2024-06-11", 1, false),
            record("d", "2024-06-08", 3, false),
        ];
        let ids: Vec<_> = active_on(&records, date("2024-06-10"))
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["a", "b", "d"]);
    }

    #[test]
    fn active_today_uses_the_local_calendar_day() {
        let records = vec![record("a", "2024-06-10", 1, true)];
        // 23:30 on the 10th in UTC+8 is still the 10th locally.
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 6, 10, 23, 30, 0).unwrap();
        assert_eq!(active_today(&records, &now).len(), 1);

        let next_morning = tz.with_ymd_and_hms(2024, 6, 11, 0, 5, 0).unwrap();
        assert!(active_today(&records, &next_morning).is_empty());
    }

    #[test]
    fn relief_count_is_taken_from_the_active_subset() {
        let records = vec![
            record("a", "2024-06-10", 2, true),
            record("b", "2024-06-10", 2, false),
            record("c", "2024-05-01", 2, true),
        ];
        let today = active_on(&records, date("2024-06-11"));
        assert_eq!(today.len(), 2);
        let relief = relief_needed(&today);
        assert_eq!(relief.len(), 1);
        assert_eq!(relief[0].id, "a");
    }

    #[test]
    fn filter_without_date_is_empty() {
        let records = vec![record("a", "2024-06-10", 2, false)];
        assert!(filter_by_date(&records, None).is_empty());
        assert_eq!(filter_by_date(&records, Some(date("2024-06-10"))).len(), 1);
    }
}
