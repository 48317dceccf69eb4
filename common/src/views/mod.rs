//! Derived views over the record list.
//!
//! Everything here is a pure function of the records (and a reference date),
//! so the UI can recompute it on every refresh and the backend tests can use
//! it to check what the charts would show.

mod active;
mod aggregate;
mod summary;

pub use active::{active_on, active_today, filter_by_date, is_active_on, relief_needed};
pub use aggregate::{
    current_year, month_bounds, monthly_totals, overlap_days, reason_breakdown, top_absentees, MonthlyTotal,
    RankingScope, ReasonCount, TeacherTotal, TOP_N,
};
pub use summary::{dashboard_summary, DashboardSummary};
