//! Generated timetable rows.
//!
//! A slot is either the leading event, a numbered class period, or a break.
//! The rendering side keys per-day subject tables by the period ordinal, so
//! class slots carry a number while the others carry a name.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// What a slot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// The fixed activity that opens the day (assembly, prayer).
    #[serde(rename = "event")]
    LeadingEvent,
    /// An instructional period.
    #[serde(rename = "class")]
    ClassPeriod,
    /// A configured break window.
    #[serde(rename = "break")]
    Break,
}

/// Row label: a 1-based period ordinal or a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotLabel {
    /// Class period number.
    Period(u32),
    /// Event or break name.
    Named(String),
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotLabel::Period(n) => write!(f, "Period {n}"),
            SlotLabel::Named(name) => f.write_str(name),
        }
    }
}

/// One row of a generated timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    /// Period number or name.
    #[serde(rename = "period")]
    pub label: SlotLabel,
    /// Slot start.
    pub start_time: TimeOfDay,
    /// Slot end.
    pub end_time: TimeOfDay,
    /// Slot category.
    #[serde(rename = "type")]
    pub kind: SlotKind,
}

impl ScheduleSlot {
    /// Creates the leading event slot.
    pub fn leading_event(name: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            label: SlotLabel::Named(name.into()),
            start_time: start,
            end_time: end,
            kind: SlotKind::LeadingEvent,
        }
    }

    /// Creates a class period slot.
    pub fn class_period(ordinal: u32, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            label: SlotLabel::Period(ordinal),
            start_time: start,
            end_time: end,
            kind: SlotKind::ClassPeriod,
        }
    }

    /// Creates a break slot.
    pub fn break_window(name: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            label: SlotLabel::Named(name.into()),
            start_time: start,
            end_time: end,
            kind: SlotKind::Break,
        }
    }

    /// Slot length in minutes. Negative for a reversed slot.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.start_time.minutes_until(self.end_time)
    }

    /// Period ordinal, if this is a class slot.
    pub fn period_ordinal(&self) -> Option<u32> {
        match self.label {
            SlotLabel::Period(n) if self.kind == SlotKind::ClassPeriod => Some(n),
            _ => None,
        }
    }

    /// Whether this is a class period.
    #[inline]
    pub fn is_class(&self) -> bool {
        self.kind == SlotKind::ClassPeriod
    }

    /// Whether this is a break.
    #[inline]
    pub fn is_break(&self) -> bool {
        self.kind == SlotKind::Break
    }
}
