//! Chart aggregates: monthly day totals, top absentees, reason breakdown.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::record::AbsenceRecord;

/// Number of teachers kept by [`top_absentees`].
pub const TOP_N: usize = 10;

/// Absence days falling inside one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// 1-based month number.
    pub month: u32,
    /// Abbreviated English month name (`Jan`, `Feb`, ...).
    pub label: String,
    pub days: u32,
}

/// Cumulative absence days of one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherTotal {
    pub name: String,
    pub days: u32,
}

/// Number of records filed under one reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

impl ReasonCount {
    /// Share of `total` as a whole percentage, rounded to nearest.
    pub fn percent_of(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((self.count as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Which records feed the top-absentee ranking.
///
/// The ranking chart is titled as an annual figure but has always summed every
/// record ever filed. `AllTime` keeps that behaviour; `Year` restricts the sum
/// to the days that fall inside the given calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingScope {
    #[default]
    AllTime,
    Year(i32),
}

/// First and last day of `month` in `year`, or `None` for an impossible date.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

/// Days shared by the record's interval and the inclusive range `[from, to]`.
///
/// Computed as `max(0, min(end, to) - max(start, from) + 1)`.
pub fn overlap_days(record: &AbsenceRecord, from: NaiveDate, to: NaiveDate) -> u32 {
    let start = record.start_date.max(from);
    let end = record.end_date().min(to);
    if start > end {
        return 0;
    }
    u32::try_from((end - start).num_days() + 1).unwrap_or(u32::MAX)
}

/// Absence days per month of `year`, January through December.
///
/// A record crossing a month boundary is split between the months it
/// touches, so the twelve totals of a year add up to the days that fall in it.
pub fn monthly_totals(records: &[AbsenceRecord], year: i32) -> Vec<MonthlyTotal> {
    (1..=12)
        .map(|month| {
            let (days, label) = match month_bounds(year, month) {
                Some((first, last)) => (
                    records
                        .iter()
                        .map(|r| overlap_days(r, first, last))
                        .sum(),
                    first.format("%b").to_string(),
                ),
                None => (0, String::new()),
            };
            MonthlyTotal { month, label, days }
        })
        .collect()
}

/// The [`TOP_N`] teachers with the most absence days, highest first.
///
/// Totals are keyed by the snapshot `teacher_name`. Ties keep the order in
/// which the names first appear in `records`.
pub fn top_absentees(records: &[AbsenceRecord], scope: RankingScope) -> Vec<TeacherTotal> {
    let mut totals: Vec<TeacherTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let days = match scope {
            RankingScope::AllTime => record.days,
            RankingScope::Year(year) => match (
                NaiveDate::from_ymd_opt(year, 1, 1),
                NaiveDate::from_ymd_opt(year, 12, 31),
            ) {
                (Some(first), Some(last)) => overlap_days(record, first, last),
                _ => 0,
            },
        };
        if days == 0 && scope != RankingScope::AllTime {
            continue;
        }

        match index.get(record.teacher_name.as_str()) {
            Some(&i) => totals[i].days = totals[i].days.saturating_add(days),
            None => {
                index.insert(record.teacher_name.as_str(), totals.len());
                totals.push(TeacherTotal {
                    name: record.teacher_name.clone(),
                    days,
                });
            }
        }
    }

    // `sort_by` is stable, which is what keeps first-seen order on ties.
    totals.sort_by(|a, b| b.days.cmp(&a.days));
    totals.truncate(TOP_N);
    totals
}

/// Number of records per reason, in the order each reason first appears.
pub fn reason_breakdown(records: &[AbsenceRecord]) -> Vec<ReasonCount> {
    let mut counts: Vec<ReasonCount> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|c| c.reason == record.reason) {
            Some(entry) => entry.count += 1,
            None => counts.push(ReasonCount {
                reason: record.reason.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Year the monthly chart and a year-scoped ranking should use for `today`.
pub fn current_year(today: NaiveDate) -> i32 {
    today.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(name: &str, start: &str, days: u32, reason: &str) -> AbsenceRecord {
        AbsenceRecord {
            id: format!("{name}-{start}"),
            teacher_id: format!("id-{name}"),
            teacher_name: name.to_string(),
            start_date: date(start),
            days,
            reason: reason.to_string(),
            need_relief: false,
            remarks: None,
            created_at: Utc::now(),
        }
    }

    fn days_in(totals: &[MonthlyTotal], month: u32) -> u32 {
        totals.iter().find(|t| t.month == month).unwrap().days
    }

    #[test]
    fn month_bounds_handle_leap_february_and_december() {
        assert_eq!(
            month_bounds(2024, 2),
            Some((date("2024-02-01"), date("2024-02-29")))
        );
        assert_eq!(
            month_bounds(2023, 12),
            Some((date("2023-12-01"), date("2023-12-31")))
        );
        assert_eq!(month_bounds(2024, 13), None);
    }

    #[test]
    fn overlap_is_zero_when_disjoint() {
        let r = record("A", "2024-03-30", 3, "X");
        assert_eq!(overlap_days(&r, date("2024-05-01"), date("2024-05-31")), 0);
        assert_eq!(overlap_days(&r, date("2024-03-01"), date("2024-03-31")), 2);
        assert_eq!(overlap_days(&r, date("2024-04-01"), date("2024-04-30")), 1);
    }

    #[test]
    fn full_month_record_counts_month_length() {
        let totals = monthly_totals(&[record("A", "2024-02-01", 29, "X")], 2024);
        assert_eq!(totals.len(), 12);
        assert_eq!(days_in(&totals, 2), 29);
        assert_eq!(totals.iter().map(|t| t.days).sum::<u32>(), 29);
    }

    #[test]
    fn record_spanning_two_months_is_split() {
        let totals = monthly_totals(&[record("A", "2024-03-30", 3, "X")], 2024);
        assert_eq!(days_in(&totals, 3), 2);
        assert_eq!(days_in(&totals, 4), 1);
        assert_eq!(days_in(&totals, 3) + days_in(&totals, 4), 3);
        assert_eq!(totals[0].label, "Jan");
        assert_eq!(totals[11].label, "Dec");
    }

    #[test]
    fn records_outside_the_year_do_not_count() {
        let records = vec![
            record("A", "2023-12-30", 4, "X"),
            record("B", "2025-01-01", 2, "X"),
        ];
        let totals = monthly_totals(&records, 2024);
        assert_eq!(days_in(&totals, 1), 2);
        assert_eq!(totals.iter().map(|t| t.days).sum::<u32>(), 2);
    }

    #[test]
    fn top_absentees_sums_days_per_name() {
        let records = vec![
            record("A", "2024-01-01", 5, "X"),
            record("B", "2024-01-02", 3, "X"),
            record("A", "2024-01-03", 2, "X"),
        ];
        let top = top_absentees(&records, RankingScope::AllTime);
        assert_eq!(
            top,
            vec![
                TeacherTotal { name: "A".into(), days: 7 },
                TeacherTotal { name: "B".into(), days: 3 },
            ]
        );
    }

    #[test]
    fn top_absentees_ties_keep_first_seen_order_and_cap_at_ten() {
        let mut records: Vec<_> = (0..12)
            .map(|i| record(&format!("T{i:02}"), "2024-01-01", 1, "X"))
            .collect();
        records.push(record("T11", "2024-02-01", 1, "X"));

        let top = top_absentees(&records, RankingScope::AllTime);
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0], TeacherTotal { name: "T11".into(), days: 2 });
        let rest: Vec<_> = top[1..].iter().map(|t| t.name.as_str()).collect();
        assert_eq!(rest, ["T00", "T01", "T02", "T03", "T04", "T05", "T06", "T07", "T08"]);
    }

    #[test]
    fn year_scope_only_counts_days_inside_the_year() {
        let records = vec![
            record("A", "2023-05-01", 10, "X"),
            record("B", "2024-05-01", 4, "X"),
            record("A", "2024-12-30", 5, "X"),
        ];
        let all = top_absentees(&records, RankingScope::AllTime);
        assert_eq!(all[0], TeacherTotal { name: "A".into(), days: 15 });

        let year = top_absentees(&records, RankingScope::Year(2024));
        assert_eq!(
            year,
            vec![
                TeacherTotal { name: "B".into(), days: 4 },
                TeacherTotal { name: "A".into(), days: 2 },
            ]
        );
    }

    #[test]
    fn reason_breakdown_counts_records_in_first_seen_order() {
        let records = vec![
            record("A", "2024-01-01", 5, "X"),
            record("B", "2024-01-01", 1, "Y"),
            record("C", "2024-01-01", 9, "X"),
        ];
        let breakdown = reason_breakdown(&records);
        assert_eq!(
            breakdown,
            vec![
                ReasonCount { reason: "X".into(), count: 2 },
                ReasonCount { reason: "Y".into(), count: 1 },
            ]
        );
        assert_eq!(breakdown[0].percent_of(3), 67);
        assert_eq!(breakdown[1].percent_of(0), 0);
    }

    #[test]
    fn empty_input_gives_empty_charts() {
        assert!(top_absentees(&[], RankingScope::AllTime).is_empty());
        assert!(reason_breakdown(&[]).is_empty());
        assert!(monthly_totals(&[], 2024).iter().all(|t| t.days == 0));
        assert_eq!(current_year(date("2024-07-01")), 2024);
    }
}
