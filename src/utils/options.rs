//! Month and year option generation for selection controls

use chrono::{Datelike, Local};

use crate::constants::{FIRST_SELECTABLE_YEAR, YEAR_WINDOW_AHEAD};

/// A calendar month offered in month selection controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthOption {
    pub number: u32,
    pub name: &'static str,
}

/// The twelve calendar months, in order, for month selection controls
pub const MONTH_OPTIONS: [MonthOption; 12] = [
    MonthOption { number: 1, name: "January" },
    MonthOption { number: 2, name: "February" },
    MonthOption { number: 3, name: "March" },
    MonthOption { number: 4, name: "April" },
    MonthOption { number: 5, name: "May" },
    MonthOption { number: 6, name: "June" },
    MonthOption { number: 7, name: "July" },
    MonthOption { number: 8, name: "August" },
    MonthOption { number: 9, name: "September" },
    MonthOption { number: 10, name: "October" },
    MonthOption { number: 11, name: "November" },
    MonthOption { number: 12, name: "December" },
];

/// The ordered catalog of calendar months
pub fn month_options() -> &'static [MonthOption] {
    &MONTH_OPTIONS
}

/// Ascending list of selectable years, from the fixed first selectable
/// year through the year after the current one
///
/// Re-reads the wall clock on every call, so the window follows the
/// current year with no caching.
pub fn year_options() -> Vec<i32> {
    year_options_from(FIRST_SELECTABLE_YEAR)
}

/// Ascending list of selectable years anchored at `first_year`
///
/// The window end stays tied to the current year: the last entry is
/// `current_year + YEAR_WINDOW_AHEAD - 1`. Empty when `first_year` is
/// past the window end.
pub fn year_options_from(first_year: i32) -> Vec<i32> {
    let current_year = Local::now().year();
    (first_year..current_year + YEAR_WINDOW_AHEAD).collect()
}
