//! Data-quality checks for break lists and generated timetables.
//!
//! The generator never rejects a logically odd configuration; it produces
//! degenerate but well-defined rows instead. These checks let a caller
//! detect that before displaying the result. Detects:
//! - Duplicate break IDs and unnamed breaks
//! - Slots whose end precedes their start
//! - Slots starting before the previous slot starts
//! - Slots starting before the previous slot ends

use std::collections::HashSet;

use crate::models::{BreakWindow, ScheduleSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two breaks share the same ID.
    DuplicateId,
    /// A break has an empty or blank name.
    EmptyName,
    /// A slot ends before it starts.
    ReversedInterval,
    /// A slot starts earlier than the slot before it.
    OutOfOrder,
    /// A slot starts before the previous slot has ended.
    Overlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a break list for identity problems.
///
/// Considers disabled breaks too; they stay editable.
pub fn validate_breaks(breaks: &[BreakWindow]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for b in breaks {
        if !ids.insert(b.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate break ID: {}", b.id),
            ));
        }
        if b.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Break '{}' has no name", b.id),
            ));
        }
    }

    finish(errors)
}

/// Checks a generated timetable for reversed, out-of-order, or
/// overlapping rows.
///
/// Each adjacent pair is reported at most once, as `OutOfOrder` if the
/// start went backward, otherwise as `Overlap`. All issues are collected.
pub fn validate_timetable(slots: &[ScheduleSlot]) -> ValidationResult {
    let mut errors = Vec::new();

    for slot in slots {
        if slot.end_time < slot.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReversedInterval,
                format!(
                    "'{}' ends at {} before it starts at {}",
                    slot.label, slot.end_time, slot.start_time
                ),
            ));
        }
    }

    for pair in slots.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start_time < prev.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfOrder,
                format!(
                    "'{}' starts at {}, before '{}' at {}",
                    next.label, next.start_time, prev.label, prev.start_time
                ),
            ));
        } else if next.start_time < prev.end_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::Overlap,
                format!(
                    "'{}' starts at {} while '{}' runs until {}",
                    next.label, next.start_time, prev.label, prev.end_time
                ),
            ));
        }
    }

    finish(errors)
}
