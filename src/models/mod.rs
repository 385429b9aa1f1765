//! Timetable domain models.
//!
//! Provides the time value, the generation input, and the generated rows.
//!
//! # Domain Mappings
//!
//! | u-timetable | School day | Conference | Clinic |
//! |-------------|-----------|------------|--------|
//! | Leading event | Assembly/Prayer | Keynote | Morning huddle |
//! | Class period | Lesson | Session | Appointment block |
//! | Break window | Lunch/Recess | Coffee break | Lunch |

mod config;
mod slot;
mod time;

pub use config::{BreakWindow, ScheduleConfiguration};
pub use slot::{ScheduleSlot, SlotKind, SlotLabel};
pub use time::{TimeOfDay, MINUTES_PER_DAY, TIME_FORMAT};
