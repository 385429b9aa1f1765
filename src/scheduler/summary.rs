//! Day-level totals for a generated timetable.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Day start | Earliest slot start |
//! | Day end | Latest slot end |
//! | Instructional minutes | Sum of class period lengths |
//! | Break minutes | Sum of break lengths |
//! | Leading event minutes | Length of the opening event |
//!
//! Reversed slots (end before start) count as zero minutes.

use crate::models::{ScheduleSlot, SlotKind, TimeOfDay};

/// Summary figures for one generated day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// Earliest slot start. `None` for an empty timetable.
    pub day_start: Option<TimeOfDay>,
    /// Latest slot end. `None` for an empty timetable.
    pub day_end: Option<TimeOfDay>,
    /// Number of class periods.
    pub period_count: usize,
    /// Number of break slots.
    pub break_count: usize,
    /// Total class time (minutes).
    pub instructional_minutes: i64,
    /// Total break time (minutes).
    pub break_minutes: i64,
    /// Leading event time (minutes).
    pub leading_event_minutes: i64,
}

impl DaySummary {
    /// Computes the summary of a slot sequence.
    pub fn calculate(slots: &[ScheduleSlot]) -> Self {
        let mut summary = Self {
            day_start: slots.iter().map(|s| s.start_time).min(),
            day_end: slots.iter().map(|s| s.end_time).max(),
            period_count: 0,
            break_count: 0,
            instructional_minutes: 0,
            break_minutes: 0,
            leading_event_minutes: 0,
        };

        for slot in slots {
            let minutes = slot.duration_min().max(0);
            match slot.kind {
                SlotKind::ClassPeriod => {
                    summary.period_count += 1;
                    summary.instructional_minutes += minutes;
                }
                SlotKind::Break => {
                    summary.break_count += 1;
                    summary.break_minutes += minutes;
                }
                SlotKind::LeadingEvent => summary.leading_event_minutes += minutes,
            }
        }

        summary
    }

    /// Whether the day finishes at or before `deadline`.
    ///
    /// An empty timetable always does.
    pub fn ends_by(&self, deadline: TimeOfDay) -> bool {
        self.day_end.map_or(true, |end| end <= deadline)
    }

    /// Minutes between day start and day end.
    pub fn span_minutes(&self) -> i64 {
        match (self.day_start, self.day_end) {
            (Some(start), Some(end)) => start.minutes_until(end),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakWindow, ScheduleConfiguration};
    use crate::scheduler::generate;

    fn t(text: &str) -> TimeOfDay {
        TimeOfDay::parse(text).unwrap()
    }

    #[test]
    fn test_summary_stock_day() {
        let slots = generate(&ScheduleConfiguration::default()).unwrap();
        let summary = DaySummary::calculate(&slots);

        assert_eq!(summary.day_start, Some(t("9:00 AM")));
        assert_eq!(summary.day_end, Some(t("4:10 PM")));
        assert_eq!(summary.period_count, 8);
        assert_eq!(summary.break_count, 1);
        // 6 * 45 + 2 * 40
        assert_eq!(summary.instructional_minutes, 350);
        assert_eq!(summary.break_minutes, 60);
        assert_eq!(summary.leading_event_minutes, 20);
        assert_eq!(summary.span_minutes(), 430);
    }

    #[test]
    fn test_summary_trailing_break_extends_day() {
        let config = ScheduleConfiguration::new("9:00 AM", 20, "9:20 AM")
            .with_periods(2, 45)
            .with_break(BreakWindow::new("l", "Lunch", "12:20 PM", "1:20 PM"));
        let summary = DaySummary::calculate(&generate(&config).unwrap());

        assert_eq!(summary.day_end, Some(t("1:20 PM")));
        assert!(summary.ends_by(t("1:20 PM")));
        assert!(!summary.ends_by(t("1:19 PM")));
    }

    #[test]
    fn test_summary_reversed_slot_counts_zero() {
        let slots = vec![
            ScheduleSlot::leading_event("Prayer", t("9:00 AM"), t("9:20 AM")),
            ScheduleSlot::break_window("Odd", t("10:00 AM"), t("9:50 AM")),
        ];
        let summary = DaySummary::calculate(&slots);
        assert_eq!(summary.break_count, 1);
        assert_eq!(summary.break_minutes, 0);
    }

    #[test]
    fn test_summary_empty() {
        let summary = DaySummary::calculate(&[]);
        assert_eq!(summary.day_start, None);
        assert_eq!(summary.day_end, None);
        assert_eq!(summary.period_count, 0);
        assert_eq!(summary.span_minutes(), 0);
        assert!(summary.ends_by(TimeOfDay::MIDNIGHT));
    }
}
