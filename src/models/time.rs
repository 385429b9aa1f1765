//! Wall-clock time of day.
//!
//! # Time Model
//! Minute resolution, anchored to a single reference day. Only the
//! time-of-day component is meaningful; there is no date.
//!
//! # Canonical Form
//! 12-hour clock, no leading zero on the hour, two-digit minutes, and an
//! upper-case marker: `"9:20 AM"`, `"12:05 PM"`. This is the wire format for
//! every start/end field in configuration and output.
//!
//! # Midnight
//! Arithmetic wraps modulo 24 hours: `11:50 PM + 20 min = 12:10 AM`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MalformedTimeError;

/// Canonical display/parse pattern (`h:mm AM`).
pub const TIME_FORMAT: &str = "%-I:%M %p";

/// Minutes in one reference day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day with minute resolution.
///
/// Totally ordered by minute-of-day. Serializes as its canonical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Midnight (`12:00 AM`).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(NaiveTime::MIN);

    /// Parses a canonical time string such as `"9:20 AM"`.
    ///
    /// The marker is matched case-insensitively and a zero-padded hour is
    /// accepted, so `"09:20 am"` parses to the same value as `"9:20 AM"`.
    pub fn parse(text: &str) -> Result<Self, MalformedTimeError> {
        NaiveTime::parse_from_str(text, TIME_FORMAT)
            .map(Self)
            .map_err(|e| MalformedTimeError::new(text, e))
    }

    /// Builds a time from a 24-hour clock reading.
    ///
    /// Returns `None` if `hour > 23` or `minute > 59`.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Builds a time from minutes since midnight, wrapping into one day.
    pub fn from_minute_of_day(minutes: i64) -> Self {
        Self::MIDNIGHT.add_minutes(minutes)
    }

    /// Formats in canonical form. Inverse of [`parse`](Self::parse).
    pub fn format(&self) -> String {
        self.0.format(TIME_FORMAT).to_string()
    }

    /// Adds `minutes` (negative moves backward), wrapping past midnight.
    pub fn add_minutes(self, minutes: i64) -> Self {
        // rem_euclid keeps the delta within one day, so the constructor
        // never sees an out-of-range value.
        let delta = TimeDelta::minutes(minutes.rem_euclid(MINUTES_PER_DAY));
        let (time, _) = self.0.overflowing_add_signed(delta);
        Self(time)
    }

    /// Minutes since midnight (0..1440).
    #[inline]
    pub fn minute_of_day(&self) -> i64 {
        i64::from(self.0.hour()) * 60 + i64::from(self.0.minute())
    }

    /// Signed minutes from `self` to `later` within the same day.
    #[inline]
    pub fn minutes_until(&self, later: TimeOfDay) -> i64 {
        later.minute_of_day() - self.minute_of_day()
    }

    /// Hour on the 24-hour clock.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute within the hour.
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for TimeOfDay {
    type Err = MalformedTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
