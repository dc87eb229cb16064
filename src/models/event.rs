//! Event model.
//!
//! An event is a named half-open interval `[start_time, end_time)` on the
//! absolute time line. Events are plain values: the scheduler and the
//! aggregator read them and never keep references past a call.
//!
//! # Well-formedness
//! `start_time < end_time` is expected but not enforced here. Use
//! [`EventDraft`] (or [`crate::validation::validate_events`]) at the
//! boundary to reject bad input.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::time::{self, HourBasis, Timestamp, TimeError};
use crate::validation::validate_draft;

/// A scheduled event.
///
/// # Identity
/// `id` is assigned by the caller and never checked for uniqueness by
/// the algorithms, which work on interval content only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Caller-assigned identifier.
    pub id: i64,
    /// Display label.
    pub name: String,
    /// Interval start (inclusive).
    #[serde(with = "time::timestamp")]
    pub start_time: Timestamp,
    /// Interval end (exclusive).
    #[serde(with = "time::timestamp")]
    pub end_time: Timestamp,
}

impl Event {
    /// Creates an event from parsed timestamps.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_time,
            end_time,
        }
    }

    /// Creates an event from ISO-8601 strings.
    ///
    /// Only parses; an inverted interval is accepted.
    pub fn parse(
        id: i64,
        name: impl Into<String>,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self, TimeError> {
        Ok(Self::new(
            id,
            name,
            time::parse_timestamp(start_time)?,
            time::parse_timestamp(end_time)?,
        ))
    }

    /// Length in fractional minutes (negative if inverted).
    #[inline]
    pub fn duration_minutes(&self) -> f64 {
        time::duration_minutes(&self.start_time, &self.end_time)
    }

    /// Hour of day (0-23) at which the event starts.
    #[inline]
    pub fn start_hour(&self, basis: HourBasis) -> u32 {
        basis.hour_of(&self.start_time)
    }

    /// Zero-length event (`start_time == end_time`).
    #[inline]
    pub fn is_point(&self) -> bool {
        self.start_time == self.end_time
    }

    /// Whether `start_time < end_time`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }

    /// Whether two events conflict.
    ///
    /// Back-to-back events (one ends exactly when the other starts) do not
    /// conflict.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end_time <= other.start_time || other.end_time <= self.start_time)
    }
}

/// Unvalidated event submission, as received from a form or API body.
///
/// Missing fields deserialize as empty strings so validation can report
/// all of them at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

impl EventDraft {
    /// Creates a draft.
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Validates the draft and builds an [`Event`] with the given id.
    ///
    /// # Errors
    /// [`Error::Validation`] with every problem found.
    pub fn into_event(self, id: i64) -> Result<Event> {
        validate_draft(&self).map_err(Error::Validation)?;
        Ok(Event::parse(
            id,
            self.name.trim(),
            &self.start_time,
            &self.end_time,
        )?)
    }
}
