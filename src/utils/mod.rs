//! Utility modules for the Lessonist application.
//!
//! This module contains common utility functions and helpers that are used
//! throughout the application. These utilities provide functionality for
//! date/time handling, lesson durations and other cross-cutting concerns.
//!
//! # Available Utilities
//!
//! - [`date`] - Date and time formatting, parsing, and calendar-month arithmetic
//! - [`duration`] - Lesson-duration calculation and the duration-option catalog
//! - [`options`] - Month and year option generation for selection controls
//!
//! # Design Philosophy
//!
//! All utilities follow these principles:
//!
//! - **Pure functions** when possible - Avoid side effects for predictable behavior
//! - **Error handling** - Proper error types and handling for robust operation
//! - **Testability** - Easy to unit test with clear inputs and outputs

pub mod date;
pub mod duration;
pub mod options;
