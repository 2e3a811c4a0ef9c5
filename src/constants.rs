//! Constants used throughout the application
//!
//! This module centralizes business-policy values and validation bounds
//! to improve maintainability and consistency.

// Year Selection Policy
/// First year offered in year selection controls
pub const FIRST_SELECTABLE_YEAR: i32 = 2024;
/// Years offered beyond the current one; the last selectable year is
/// `current_year + YEAR_WINDOW_AHEAD - 1`
pub const YEAR_WINDOW_AHEAD: i32 = 2;

// Booking Policy
/// Minutes subtracted from a computed finish time so back-to-back bookings
/// do not share a boundary minute
pub const BOOKING_BOUNDARY_MINUTES: i64 = 1;
/// Default lesson length in minutes for new bookings
pub const DEFAULT_LESSON_MINUTES: u32 = 60;

// Duration Math
pub const MINUTES_PER_HOUR: f64 = 60.0;

// Configuration Validation Bounds
/// Earliest accepted value for `first_selectable_year`
pub const FIRST_YEAR_MIN: i32 = 2000;
/// Latest accepted value for `first_selectable_year`
pub const FIRST_YEAR_MAX: i32 = 2100;
/// Largest accepted year window
pub const YEAR_WINDOW_MAX: i32 = 10;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
