//! Single-pass timetable generator.
//!
//! # Algorithm
//!
//! 1. Emit the leading event and move the cursor to its end.
//! 2. Raise the cursor to the school-start floor (never lower it).
//! 3. Take the enabled breaks, stable-sorted by start time, as a private queue.
//! 4. Until every period is placed: if the head break starts at or before the
//!    cursor, emit it with its own times and move the cursor to
//!    `max(cursor, break.end)`; otherwise emit the next period from the cursor.
//! 5. Append the breaks that never came due, in queue order.
//!
//! Breaks are fixed appointments. A break whose start has already passed is
//! still emitted verbatim; no filler slot covers the difference.
//!
//! # Complexity
//! O(p + b log b) where p = periods, b = enabled breaks.

use log::{debug, trace, warn};

use crate::error::{self, MalformedTimeError};
use crate::models::{BreakWindow, ScheduleConfiguration, ScheduleSlot, TimeOfDay};

/// An enabled break with parsed times.
#[derive(Debug, Clone)]
struct QueuedBreak<'a> {
    name: &'a str,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl<'a> QueuedBreak<'a> {
    fn parse(window: &'a BreakWindow) -> Result<Self, MalformedTimeError> {
        Ok(Self {
            name: &window.name,
            start: TimeOfDay::parse(&window.start_time)?,
            end: TimeOfDay::parse(&window.end_time)?,
        })
    }

    fn to_slot(&self) -> ScheduleSlot {
        ScheduleSlot::break_window(self.name, self.start, self.end)
    }
}

/// Generates the ordered slot sequence for one day.
///
/// Pure: the configuration is only read, and equal inputs give equal output.
/// Only enabled breaks have their times parsed.
///
/// # Errors
/// [`MalformedTimeError`] if the leading event start, the school start, or
/// an enabled break's start/end is not a canonical `h:mm AM/PM` string.
///
/// # Example
///
/// ```
/// use u_timetable::models::{BreakWindow, ScheduleConfiguration, SlotKind};
/// use u_timetable::scheduler::generate;
///
/// let config = ScheduleConfiguration::new("9:00 AM", 20, "9:20 AM")
///     .with_periods(4, 45)
///     .with_break(BreakWindow::new("recess", "Recess", "10:50 AM", "11:05 AM"));
///
/// let slots = generate(&config).unwrap();
/// assert_eq!(slots.len(), 6);
/// assert_eq!(slots[3].kind, SlotKind::Break);
/// assert_eq!(slots[4].start_time.format(), "11:05 AM");
/// ```
pub fn generate(config: &ScheduleConfiguration) -> Result<Vec<ScheduleSlot>, MalformedTimeError> {
    let lead_start = TimeOfDay::parse(&config.leading_event_start)?;
    let lead_end = lead_start.add_minutes(config.leading_event_duration);
    let school_start = TimeOfDay::parse(&config.school_start)?;

    let mut queue = config
        .breaks
        .iter()
        .filter(|b| b.enabled)
        .map(QueuedBreak::parse)
        .collect::<Result<Vec<_>, _>>()?;
    // Stable: equal starts keep the caller's order.
    queue.sort_by_key(|b| b.start);

    debug!(
        "generating timetable: {} periods, {} enabled breaks",
        config.number_of_periods,
        queue.len()
    );

    let mut slots = Vec::with_capacity(1 + config.number_of_periods as usize + queue.len());

    slots.push(ScheduleSlot::leading_event(
        config.leading_event_name.as_str(),
        lead_start,
        lead_end,
    ));
    check_wrap(
        &config.leading_event_name,
        lead_start,
        lead_end,
        config.leading_event_duration,
    );

    let mut now = lead_end.max(school_start);
    let mut next_break = 0;
    let mut period = 1;

    while period <= config.number_of_periods {
        match queue.get(next_break) {
            Some(b) if b.start <= now => {
                if b.start < now {
                    warn!(
                        "break '{}' starts at {} but the day has already reached {}",
                        b.name, b.start, now
                    );
                }
                trace!("break '{}' {} - {}", b.name, b.start, b.end);
                slots.push(b.to_slot());
                now = now.max(b.end);
                next_break += 1;
            }
            _ => {
                let duration = config.period_duration(period);
                let end = now.add_minutes(duration);
                trace!("period {period} {now} - {end}");
                check_wrap(&format!("period {period}"), now, end, duration);
                slots.push(ScheduleSlot::class_period(period, now, end));
                now = end;
                period += 1;
            }
        }
    }

    for b in &queue[next_break..] {
        trace!("trailing break '{}' {} - {}", b.name, b.start, b.end);
        slots.push(b.to_slot());
    }

    Ok(slots)
}

/// Loads a JSON configuration and generates its timetable.
pub fn generate_from_json(json: &str) -> error::Result<Vec<ScheduleSlot>> {
    let config = ScheduleConfiguration::from_json(json)?;
    Ok(generate(&config)?)
}

fn check_wrap(what: &str, start: TimeOfDay, end: TimeOfDay, duration: i64) {
    if duration > 0 && end < start {
        warn!("{what} wraps past midnight ({start} - {end})");
    }
}
