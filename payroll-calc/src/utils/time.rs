//! Date helpers
//!
//! Shift dates are plain calendar dates (`NaiveDate`): there is no time of day
//! and no time zone, so the displayed day can never drift.

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Date input format (`YYYY-MM-DD`)
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date display format (`MM-DD-YY`)
pub const DISPLAY_DATE_FORMAT: &str = "%m-%d-%y";

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        AppError::invalid_format(format!("Invalid date format: {}", date)).with_detail("input", date)
    })
}

/// Render a calendar date as `MM-DD-YY`
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Format an ISO date string as `MM-DD-YY`
///
/// Malformed input is a caller bug; it is reported rather than guessed at.
pub fn format_date(date: &str) -> AppResult<String> {
    parse_date(date).map(display_date)
}
