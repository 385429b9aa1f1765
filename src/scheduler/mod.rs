//! Timetable generation and day summaries.
//!
//! # Algorithm
//!
//! [`generate`] walks a single cursor through the day: the leading event,
//! then class periods from the school-start floor, with enabled breaks
//! interleaved as fixed wall-clock appointments once the cursor reaches
//! their start. Breaks that never come due trail the last period.
//!
//! # Summary
//!
//! [`DaySummary`] totals instructional, break, and leading-event minutes
//! and reports the day's bounds.

mod generator;
mod summary;

pub use generator::{generate, generate_from_json};
pub use summary::DaySummary;
