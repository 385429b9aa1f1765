//! Generation input: leading event, period policy, and break windows.
//!
//! Times are kept as the strings the user typed. They are parsed by the
//! generator, so a malformed value only surfaces when a timetable is built.
//!
//! # Persisted Shape
//! camelCase JSON. The key names of older saved settings
//! (`prayerStartTime`, `prayerDuration`, `schoolStartTime`) are accepted as
//! aliases on read.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A named, fixed wall-clock break (lunch, recess).
///
/// Breaks are appointments: the generator emits them with their own
/// start/end, never recomputed from the surrounding periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakWindow {
    /// Stable identifier.
    pub id: String,
    /// Display name (also the slot label).
    pub name: String,
    /// Start time, canonical `h:mm AM/PM`.
    pub start_time: String,
    /// End time, canonical `h:mm AM/PM`.
    pub end_time: String,
    /// Disabled breaks are ignored (and never parsed).
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl BreakWindow {
    /// Creates an enabled break.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            enabled: true,
        }
    }

    /// Marks the break as disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Everything the generator needs to lay out one day.
///
/// No cross-field invariant is enforced. Zero periods, a variation count
/// larger than the period count, or breaks before the leading event all
/// produce well-defined (if degenerate) output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfiguration {
    /// Label of the leading event slot.
    #[serde(default = "default_leading_event_name")]
    pub leading_event_name: String,
    /// Leading event start.
    #[serde(alias = "prayerStartTime")]
    pub leading_event_start: String,
    /// Leading event length (minutes).
    #[serde(alias = "prayerDuration")]
    pub leading_event_duration: i64,
    /// Earliest time the first period may start.
    #[serde(alias = "schoolStartTime")]
    pub school_start: String,
    /// Number of class periods to place.
    pub number_of_periods: u32,
    /// Default period length (minutes).
    pub uniform_period_duration: i64,
    /// Whether the trailing periods use `last_period_duration`.
    #[serde(default)]
    pub use_variation: bool,
    /// How many trailing periods are varied.
    #[serde(default)]
    pub last_periods_count: u32,
    /// Length of a varied period (minutes).
    #[serde(default)]
    pub last_period_duration: i64,
    /// Break windows, in the caller's order.
    #[serde(default)]
    pub breaks: Vec<BreakWindow>,
}

fn default_leading_event_name() -> String {
    "Prayer".to_string()
}

impl Default for ScheduleConfiguration {
    /// The stock school day: prayer 9:00-9:20 AM, eight periods from
    /// 9:20 AM (the last two shortened to 40 minutes), lunch 12:20-1:20 PM.
    fn default() -> Self {
        Self {
            leading_event_name: default_leading_event_name(),
            leading_event_start: "9:00 AM".into(),
            leading_event_duration: 20,
            school_start: "9:20 AM".into(),
            number_of_periods: 8,
            uniform_period_duration: 45,
            use_variation: true,
            last_periods_count: 2,
            last_period_duration: 40,
            breaks: vec![BreakWindow::new("lunch", "Lunch", "12:20 PM", "1:20 PM")],
        }
    }
}

impl ScheduleConfiguration {
    /// Creates a configuration with no breaks and no variation.
    pub fn new(
        leading_event_start: impl Into<String>,
        leading_event_duration: i64,
        school_start: impl Into<String>,
    ) -> Self {
        Self {
            leading_event_name: default_leading_event_name(),
            leading_event_start: leading_event_start.into(),
            leading_event_duration,
            school_start: school_start.into(),
            number_of_periods: 0,
            uniform_period_duration: 0,
            use_variation: false,
            last_periods_count: 0,
            last_period_duration: 0,
            breaks: Vec::new(),
        }
    }

    /// Renames the leading event.
    pub fn with_leading_event(mut self, name: impl Into<String>) -> Self {
        self.leading_event_name = name.into();
        self
    }

    /// Sets the school-start floor.
    pub fn with_school_start(mut self, school_start: impl Into<String>) -> Self {
        self.school_start = school_start.into();
        self
    }

    /// Sets the period count and uniform duration.
    pub fn with_periods(mut self, count: u32, duration_min: i64) -> Self {
        self.number_of_periods = count;
        self.uniform_period_duration = duration_min;
        self
    }

    /// Enables variation for the last `count` periods.
    pub fn with_variation(mut self, count: u32, duration_min: i64) -> Self {
        self.use_variation = true;
        self.last_periods_count = count;
        self.last_period_duration = duration_min;
        self
    }

    /// Disables variation (counts are kept for re-enabling).
    pub fn without_variation(mut self) -> Self {
        self.use_variation = false;
        self
    }

    /// Appends a break.
    pub fn with_break(mut self, window: BreakWindow) -> Self {
        self.breaks.push(window);
        self
    }

    /// Whether 1-based period `ordinal` uses the varied duration.
    ///
    /// Pure comparison with no clamping: a trailing count at or above
    /// `number_of_periods` makes every period varied.
    pub fn is_varied_period(&self, ordinal: u32) -> bool {
        self.use_variation
            && i64::from(ordinal)
                > i64::from(self.number_of_periods) - i64::from(self.last_periods_count)
    }

    /// Length of 1-based period `ordinal` in minutes.
    pub fn period_duration(&self, ordinal: u32) -> i64 {
        if self.is_varied_period(ordinal) {
            self.last_period_duration
        } else {
            self.uniform_period_duration
        }
    }

    /// Finds a break by id.
    pub fn break_by_id(&self, id: &str) -> Option<&BreakWindow> {
        self.breaks.iter().find(|b| b.id == id)
    }

    /// Finds a break by id for editing.
    pub fn break_by_id_mut(&mut self, id: &str) -> Option<&mut BreakWindow> {
        self.breaks.iter_mut().find(|b| b.id == id)
    }

    /// Toggles a break. Returns `false` if no break has that id.
    pub fn set_break_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.break_by_id_mut(id) {
            Some(b) => {
                b.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Removes a break by id, returning it.
    pub fn remove_break(&mut self, id: &str) -> Option<BreakWindow> {
        let idx = self.breaks.iter().position(|b| b.id == id)?;
        Some(self.breaks.remove(idx))
    }

    /// Reads a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the configuration as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_stock_day() {
        let cfg = ScheduleConfiguration::default();
        assert_eq!(cfg.leading_event_name, "Prayer");
        assert_eq!(cfg.number_of_periods, 8);
        assert_eq!(cfg.breaks.len(), 1);
        assert!(cfg.breaks[0].enabled);
    }

    #[test]
    fn test_variation_window() {
        let cfg = ScheduleConfiguration::new("9:00 AM", 20, "9:20 AM")
            .with_periods(4, 45)
            .with_variation(2, 30);

        assert_eq!(cfg.period_duration(1), 45);
        assert_eq!(cfg.period_duration(2), 45);
        assert_eq!(cfg.period_duration(3), 30);
        assert_eq!(cfg.period_duration(4), 30);

        let off = cfg.clone().without_variation();
        assert_eq!(off.period_duration(4), 45);
    }

    #[test]
    fn test_variation_count_exceeds_periods() {
        let cfg = ScheduleConfiguration::new("9:00 AM", 20, "9:20 AM")
            .with_periods(3, 45)
            .with_variation(10, 30);
        assert!((1..=3).all(|p| cfg.is_varied_period(p)));
    }

    #[test]
    fn test_variation_zero_count() {
        let cfg = ScheduleConfiguration::new("9:00 AM", 20, "9:20 AM")
            .with_periods(3, 45)
            .with_variation(0, 30);
        assert!(!(1..=3).any(|p| cfg.is_varied_period(p)));
    }

    #[test]
    fn test_break_editing() {
        let mut cfg = ScheduleConfiguration::default()
            .with_break(BreakWindow::new("recess", "Recess", "10:50 AM", "11:05 AM"));

        assert!(cfg.set_break_enabled("recess", false));
        assert!(!cfg.break_by_id("recess").unwrap().enabled);
        assert!(!cfg.set_break_enabled("missing", true));

        cfg.break_by_id_mut("lunch").unwrap().name = "Long Lunch".into();
        assert_eq!(cfg.break_by_id("lunch").unwrap().name, "Long Lunch");

        let removed = cfg.remove_break("recess").unwrap();
        assert_eq!(removed.name, "Recess");
        assert!(cfg.remove_break("recess").is_none());
        assert_eq!(cfg.breaks.len(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = ScheduleConfiguration::default();
        let json = cfg.to_json().unwrap();
        assert!(json.contains("\"leadingEventStart\":\"9:00 AM\""));
        assert!(json.contains("\"numberOfPeriods\":8"));

        let back = ScheduleConfiguration::from_json(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_json_accepts_saved_settings_keys() {
        let json = r#"{
            "prayerStartTime": "8:30 AM",
            "prayerDuration": 15,
            "schoolStartTime": "9:00 AM",
            "numberOfPeriods": 6,
            "uniformPeriodDuration": 40,
            "useVariation": false,
            "lastPeriodsCount": 2,
            "lastPeriodDuration": 35,
            "breaks": [
                { "id": "1", "name": "Lunch", "startTime": "12:00 PM", "endTime": "12:45 PM", "enabled": true }
            ]
        }"#;

        let cfg = ScheduleConfiguration::from_json(json).unwrap();
        assert_eq!(cfg.leading_event_name, "Prayer");
        assert_eq!(cfg.leading_event_start, "8:30 AM");
        assert_eq!(cfg.leading_event_duration, 15);
        assert_eq!(cfg.school_start, "9:00 AM");
        assert_eq!(cfg.breaks[0].end_time, "12:45 PM");
    }

    #[test]
    fn test_json_missing_optional_fields() {
        let json = r#"{
            "leadingEventStart": "9:00 AM",
            "leadingEventDuration": 20,
            "schoolStart": "9:20 AM",
            "numberOfPeriods": 2,
            "uniformPeriodDuration": 45,
            "breaks": [
                { "id": "b", "name": "Snack", "startTime": "10:00 AM", "endTime": "10:10 AM" }
            ]
        }"#;

        let cfg = ScheduleConfiguration::from_json(json).unwrap();
        assert!(!cfg.use_variation);
        assert!(cfg.breaks[0].enabled);
    }

    #[test]
    fn test_json_invalid() {
        let err = ScheduleConfiguration::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::error::Error::Json(_)));
    }
}
