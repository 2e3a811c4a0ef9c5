//! Lesson-duration utilities
//!
//! Computes elapsed hours between two HH:MM times and owns the fixed
//! catalog of selectable lesson lengths. Times are same-day and have no
//! timezone; a finish time earlier than its start yields a negative
//! duration rather than wrapping across midnight.

use chrono::{Duration, NaiveTime, Timelike};

use crate::constants::{BOOKING_BOUNDARY_MINUTES, MINUTES_PER_HOUR};
use crate::utils::date::TIME_FORMAT;

/// Error types specific to duration calculations
#[derive(Debug, thiserror::Error)]
pub enum DurationError {
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),
}

/// A selectable lesson length: display label plus hour/minute offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationOption {
    pub label: &'static str,
    pub hours: u32,
    pub minutes: u32,
}

impl DurationOption {
    /// Total length in minutes
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

/// Fixed catalog of selectable lesson lengths: 30 and 45 minutes, then
/// 15-minute steps from 1 hr up to 5 hr. Order is ascending and stable.
pub const DURATION_OPTIONS: [DurationOption; 19] = [
    DurationOption { label: "30 min", hours: 0, minutes: 30 },
    DurationOption { label: "45 min", hours: 0, minutes: 45 },
    DurationOption { label: "1 hr", hours: 1, minutes: 0 },
    DurationOption { label: "1 hr 15 min", hours: 1, minutes: 15 },
    DurationOption { label: "1 hr 30 min", hours: 1, minutes: 30 },
    DurationOption { label: "1 hr 45 min", hours: 1, minutes: 45 },
    DurationOption { label: "2 hr", hours: 2, minutes: 0 },
    DurationOption { label: "2 hr 15 min", hours: 2, minutes: 15 },
    DurationOption { label: "2 hr 30 min", hours: 2, minutes: 30 },
    DurationOption { label: "2 hr 45 min", hours: 2, minutes: 45 },
    DurationOption { label: "3 hr", hours: 3, minutes: 0 },
    DurationOption { label: "3 hr 15 min", hours: 3, minutes: 15 },
    DurationOption { label: "3 hr 30 min", hours: 3, minutes: 30 },
    DurationOption { label: "3 hr 45 min", hours: 3, minutes: 45 },
    DurationOption { label: "4 hr", hours: 4, minutes: 0 },
    DurationOption { label: "4 hr 15 min", hours: 4, minutes: 15 },
    DurationOption { label: "4 hr 30 min", hours: 4, minutes: 30 },
    DurationOption { label: "4 hr 45 min", hours: 4, minutes: 45 },
    DurationOption { label: "5 hr", hours: 5, minutes: 0 },
];

/// The ordered catalog of selectable lesson lengths
pub fn duration_options() -> &'static [DurationOption] {
    &DURATION_OPTIONS
}

/// Parse an HH:MM string into (hour, minute) components
pub fn parse_hm(time_str: &str) -> Result<(u32, u32), DurationError> {
    let t = NaiveTime::parse_from_str(time_str, TIME_FORMAT)
        .map_err(|_| DurationError::InvalidTime(time_str.to_string()))?;
    Ok((t.hour(), t.minute()))
}

/// Elapsed hours between two HH:MM times, as a decimal
///
/// # Arguments
/// * `start_time` - Lesson start in HH:MM format
/// * `finish_time` - Lesson finish in HH:MM format, same day
///
/// # Returns
/// * `Result<f64, DurationError>` - Hours between the two times
///   (90 minutes -> 1.5); negative when the finish precedes the start
pub fn hours_between(start_time: &str, finish_time: &str) -> Result<f64, DurationError> {
    let (start_hour, start_minute) = parse_hm(start_time)?;
    let (finish_hour, finish_minute) = parse_hm(finish_time)?;

    let start_minutes = i64::from(start_hour) * 60 + i64::from(start_minute);
    let finish_minutes = i64::from(finish_hour) * 60 + i64::from(finish_minute);

    Ok((finish_minutes - start_minutes) as f64 / MINUTES_PER_HOUR)
}

/// Finish time for a lesson starting at `start_time` with the given length
///
/// One minute is subtracted from the computed finish so back-to-back
/// bookings never share a boundary minute (a 1 hr lesson at 14:00 ends at
/// 14:59, leaving 15:00 free for the next one).
pub fn finish_time(start_time: &str, hours: u32, minutes: u32) -> Result<String, DurationError> {
    let start = NaiveTime::parse_from_str(start_time, TIME_FORMAT)
        .map_err(|_| DurationError::InvalidTime(start_time.to_string()))?;

    let length = Duration::minutes(i64::from(hours) * 60 + i64::from(minutes));
    let finish = start + length - Duration::minutes(BOOKING_BOUNDARY_MINUTES);

    Ok(finish.format(TIME_FORMAT).to_string())
}
