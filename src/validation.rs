//! Input validation for event data.
//!
//! The scheduler and aggregator assume trustworthy intervals and do no
//! checking of their own. This module is the boundary in front of them.
//! Detects:
//! - Missing fields in a submission
//! - Unparseable timestamps
//! - Inverted or empty intervals (`end_time <= start_time`)
//! - Blank names
//! - Duplicate IDs
//!
//! All checks run to completion so callers get every problem at once.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Event, EventDraft};
use crate::time::{parse_timestamp, Timestamp};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required submission field is absent or blank.
    MissingField,
    /// A timestamp could not be parsed.
    InvalidTimeFormat,
    /// `end_time` is not after `start_time`.
    InvertedInterval,
    /// An event has a blank name.
    EmptyName,
    /// Two events share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a submitted event.
///
/// Checks:
/// 1. `name`, `start_time` and `end_time` are present and non-blank
/// 2. Both timestamps parse
/// 3. `end_time` is strictly after `start_time`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_draft(draft: &EventDraft) -> ValidationResult {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            "Missing required field: name",
        ));
    }

    let start = check_time_field("start_time", &draft.start_time, &mut errors);
    let end = check_time_field("end_time", &draft.end_time, &mut errors);

    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                "End time must be after start time",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_time_field(
    field: &str,
    raw: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<Timestamp> {
    if raw.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingField,
            format!("Missing required field: {field}"),
        ));
        return None;
    }
    match parse_timestamp(raw) {
        Ok(ts) => Some(ts),
        Err(e) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeFormat,
                format!("Invalid time format for {field}: {e}"),
            ));
            None
        }
    }
}

/// Validates an already-built event list.
///
/// Checks:
/// 1. No blank names
/// 2. Every interval has `start_time < end_time`
/// 3. No duplicate IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_events(events: &[Event]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for event in events {
        if !ids.insert(event.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate event ID: {}", event.id),
            ));
        }

        if event.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Event {} has an empty name", event.id),
            ));
        }

        if !event.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                format!(
                    "Event {} ends at {} which is not after its start {}",
                    event.id,
                    event.end_time.to_rfc3339(),
                    event.start_time.to_rfc3339()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
