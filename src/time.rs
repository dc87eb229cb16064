//! Timestamp parsing and interval arithmetic.
//!
//! # Time Model
//! A [`Timestamp`] is an absolute instant that keeps the UTC offset it was
//! written with. Ordering and durations always use the instant; the offset
//! only matters for display and for [`HourBasis::Recorded`].
//!
//! # Accepted Input
//! - RFC 3339 with an offset: `2024-03-01T09:00:00+02:00`, `2024-03-01T07:00:00Z`
//! - ISO-8601 with an offset but no seconds: `2024-03-01T09:00+02:00`,
//!   `2024-03-01T09:00Z`, `2024-03-01 09:00+0530`
//! - Naive date-times, read as UTC: `2024-03-01T09:00`, `2024-03-01T09:00:30`,
//!   `2024-03-01 09:00` (the `datetime-local` form format)

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An absolute instant with its original UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

const MILLIS_PER_MINUTE: f64 = 60_000.0;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// Largest accepted offset magnitude for [`HourBasis::Fixed`], exclusive.
pub const MAX_OFFSET_MINUTES: i32 = 24 * 60;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y-%m-%d %H:%M:%S%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Timestamp errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The input is not a recognised date-time.
    #[error("invalid timestamp '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A fixed hour offset outside (-24h, +24h).
    #[error("UTC offset of {0} minutes is out of range")]
    OffsetOutOfRange(i32),
}

/// Parses an ISO-8601 timestamp.
///
/// Offsets are preserved. Inputs without an offset are taken as UTC so the
/// result never depends on the machine's local timezone.
///
/// # Errors
/// [`TimeError::Parse`] carrying the RFC 3339 parser's diagnosis.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, TimeError> {
    let trimmed = input.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(ts) => return Ok(ts),
        Err(e) => e,
    };

    if let Some(ts) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Ok(ts);
    }

    // A trailing `Z` is UTC, the same clock naive inputs are read on.
    let naive = trimmed.strip_suffix(['Z', 'z']).unwrap_or(trimmed);
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| TimeError::Parse {
            input: input.to_string(),
            source: rfc3339_err,
        })
}

/// Signed length of `[start, end)` in fractional minutes.
///
/// Computed from whole milliseconds, so no drift accumulates when many
/// durations are summed. Negative when `end` precedes `start`.
#[inline]
pub fn duration_minutes(start: &Timestamp, end: &Timestamp) -> f64 {
    end.signed_duration_since(*start).num_milliseconds() as f64 / MILLIS_PER_MINUTE
}

/// Which clock "hour of day" is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HourBasis {
    /// Hour on the UTC clock.
    #[default]
    Utc,
    /// Hour on the wall clock of the timestamp's own offset.
    ///
    /// For naive inputs (read as UTC) this is the hour as typed.
    Recorded,
    /// Hour on a clock at a fixed offset east of UTC.
    Fixed { offset_minutes: i32 },
}

impl HourBasis {
    /// Creates a fixed-offset basis.
    ///
    /// # Errors
    /// [`TimeError::OffsetOutOfRange`] unless `|offset_minutes| < 24h`.
    pub fn fixed(offset_minutes: i32) -> Result<Self, TimeError> {
        let basis = Self::Fixed { offset_minutes };
        basis.check()?;
        Ok(basis)
    }

    /// Rejects out-of-range fixed offsets (e.g. from deserialized config).
    pub fn check(&self) -> Result<(), TimeError> {
        match *self {
            Self::Fixed { offset_minutes } if offset_minutes.abs() >= MAX_OFFSET_MINUTES => {
                Err(TimeError::OffsetOutOfRange(offset_minutes))
            }
            _ => Ok(()),
        }
    }

    /// Hour of day (0-23) of `ts` on this clock.
    pub fn hour_of(&self, ts: &Timestamp) -> u32 {
        match *self {
            Self::Utc => ts.with_timezone(&Utc).hour(),
            Self::Recorded => ts.hour(),
            Self::Fixed { offset_minutes } => {
                let local_secs = ts.timestamp() + i64::from(offset_minutes) * 60;
                (local_secs.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32
            }
        }
    }
}

/// Serde adapter: RFC 3339 out, any [`parse_timestamp`] form in.
///
/// Use with `#[serde(with = "crate::time::timestamp")]`.
pub mod timestamp {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_timestamp, Timestamp};

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
