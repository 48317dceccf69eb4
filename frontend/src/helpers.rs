//! Browser glue shared by the components: clock, ids, blocking dialogs and
//! date formatting for inputs and tables.

use chrono::{DateTime, NaiveDate, Utc};
use js_sys::Date;
use uuid::Uuid;

/// Format used by `<input type="date">`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when showing dates in tables.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Current instant, used as `createdAt` for new records.
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Date::now() as i64).unwrap_or_default()
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Blocking informational dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking yes/no dialog. Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).ok()
}

pub fn input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
