//! Date utility functions
//!
//! This module provides the date formatting and calendar-month arithmetic
//! used by the scheduling and accounting screens: zero-padded date strings,
//! month range boundaries, and month rollover across year ends.

use chrono::{Local, NaiveDate};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Standard time-of-day format used throughout the application
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Format numeric date components to a YYYY-MM-DD string
///
/// Inputs are trusted to be valid calendar components; no range checks are
/// performed, so out-of-range values (day 0, month 13) produce a
/// syntactically well-formed but semantically invalid string.
pub fn format_date(day: u32, month: u32, year: i32) -> String {
    format!("{}-{:02}-{:02}", year, month, day)
}

/// Format numeric time components to an HH:MM string
pub fn format_time(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// Date string for day 1 of the given month
pub fn first_day_of_month(month: u32, year: i32) -> String {
    format_date(1, month, year)
}

/// Date string for day 2 of the given month
///
/// Used as an inclusive range start by callers querying a month of bookings,
/// so the boundary day is never counted twice.
pub fn second_day_of_month(month: u32, year: i32) -> String {
    format_date(2, month, year)
}

/// Date string for day 1 of the month after the given one
///
/// December rolls over to January of the following year.
pub fn first_day_of_next_month(month: u32, year: i32) -> String {
    if month == 12 {
        format_date(1, 1, year + 1)
    } else {
        format_date(1, month + 1, year)
    }
}

/// Date string for the last calendar day of the given month
///
/// Computed as the first day of the following month minus one day, using
/// real calendar arithmetic so month lengths and leap-year Februaries
/// resolve correctly.
pub fn last_day_of_month(month: u32, year: i32) -> String {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|first| first.pred_opt()) {
        Some(last) => format_ymd(last),
        // Month out of range; fall back to a well-formed string like the
        // other formatters do for bad input
        None => format_date(1, month, year),
    }
}
