//! Daily timetable generation.
//!
//! Turns a small configuration (a leading event, a school-start floor, a
//! period count with a uniform-or-varied duration policy, and named break
//! windows) into one ordered sequence of slots covering the day.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeOfDay`, `BreakWindow`,
//!   `ScheduleConfiguration`, `ScheduleSlot`
//! - **`scheduler`**: The slot generator and `DaySummary`
//! - **`validation`**: Data-quality checks for break lists and output
//! - **`error`**: `MalformedTimeError` and configuration I/O errors
//!
//! # Time Model
//!
//! Minute-resolution wall-clock times in canonical `h:mm AM/PM` form.
//! Arithmetic wraps at midnight.
//!
//! # Logging
//!
//! Emits through the `log` facade (`debug` per generation, `trace` per
//! slot, `warn` for late breaks and midnight wrap). No logger is installed.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, MalformedTimeError, Result};
