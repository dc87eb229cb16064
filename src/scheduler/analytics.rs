//! Schedule summary analytics.
//!
//! Single-pass aggregate statistics over an event list.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total events | Number of input events |
//! | Average duration | Mean length in minutes, rounded to 0.1 |
//! | Peak start hour | Hour of day in which most events start |
//! | Optimized events | Size of the greedy non-overlapping selection |
//!
//! Peak ties go to the earliest hour: hours are scanned in ascending order
//! and only a strictly larger count replaces the current peak.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::GreedyScheduler;
use crate::config::AnalyticsConfig;
use crate::models::Event;
use crate::time::HourBasis;

/// Hours in a day.
pub const HOURS_PER_DAY: usize = 24;

/// Summary of an event list.
///
/// Serializes as
/// `{total_events, avg_duration_minutes, peak_start_hour, optimized_events}`
/// with `peak_start_hour: null` for an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    /// Number of input events.
    pub total_events: usize,
    /// Mean duration in minutes, rounded to one decimal place.
    pub avg_duration_minutes: f64,
    /// Hour of day (0-23) with the most starts. `None` for no events.
    pub peak_start_hour: Option<u32>,
    /// Number of events the greedy scheduler selects.
    pub optimized_events: usize,
}

impl Analytics {
    /// Analytics of an empty list.
    pub fn empty() -> Self {
        Self {
            total_events: 0,
            avg_duration_minutes: 0.0,
            peak_start_hour: None,
            optimized_events: 0,
        }
    }

    /// Computes analytics with the default configuration (UTC hours).
    pub fn calculate(events: &[Event]) -> Self {
        Self::calculate_with(events, &AnalyticsConfig::default())
    }

    /// Computes analytics.
    ///
    /// Inverted intervals are not rejected: their negative durations are
    /// averaged in like any other.
    pub fn calculate_with(events: &[Event], config: &AnalyticsConfig) -> Self {
        if events.is_empty() {
            return Self::empty();
        }

        let mut total_minutes = 0.0;
        let mut hour_counts = [0usize; HOURS_PER_DAY];

        for event in events {
            let minutes = event.duration_minutes();
            if minutes < 0.0 {
                warn!(
                    "event {} ({}) ends before it starts; averaging {minutes:.1} min",
                    event.id, event.name
                );
            }
            total_minutes += minutes;
            count_start_hour(&mut hour_counts, event, config.hour_basis);
        }

        let analytics = Self {
            total_events: events.len(),
            avg_duration_minutes: round_to_tenth(total_minutes / events.len() as f64),
            peak_start_hour: peak_hour(&hour_counts),
            optimized_events: GreedyScheduler::new().selected_indices(events).len(),
        };
        debug!("{analytics:?}");
        analytics
    }
}

/// Adds an event's start hour to a per-hour histogram.
#[inline]
pub fn count_start_hour(
    hour_counts: &mut [usize; HOURS_PER_DAY],
    event: &Event,
    basis: HourBasis,
) {
    hour_counts[event.start_hour(basis) as usize] += 1;
}

/// Earliest hour holding the largest count. `None` if every count is zero.
pub fn peak_hour(hour_counts: &[usize; HOURS_PER_DAY]) -> Option<u32> {
    let mut peak = None;
    let mut max_count = 0;
    for (hour, &count) in hour_counts.iter().enumerate() {
        if count > max_count {
            max_count = count;
            peak = Some(hour as u32);
        }
    }
    peak
}

/// Rounds half away from zero to one decimal place.
#[inline]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
