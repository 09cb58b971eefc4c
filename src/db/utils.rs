//! Database utility functions.

use chrono::Local;

use super::models::TASK_DATE_FORMAT;

/// Current local date in `YYYY-MM-DD` form, used to stamp new tasks.
pub fn current_date() -> String {
    Local::now().date_naive().format(TASK_DATE_FORMAT).to_string()
}

/// Whether `value` is a valid `YYYY-MM-DD` calendar date.
pub fn is_valid_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, TASK_DATE_FORMAT).is_ok()
}
