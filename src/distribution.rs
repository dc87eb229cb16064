//! Chart data for a schedule dashboard.
//!
//! Computes the series behind three charts: durations by range, starts by
//! hour of day, and events by name. Rendering is left to the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::models::Event;
use crate::scheduler::{count_start_hour, HOURS_PER_DAY};
use crate::time::HourBasis;

/// Label of the slice collecting names beyond the top entries.
pub const OTHERS_LABEL: &str = "Others";

/// Duration range. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationBucket {
    #[serde(rename = "0-30 min")]
    UpTo30Min,
    #[serde(rename = "30-60 min")]
    UpTo1Hour,
    #[serde(rename = "1-2 hours")]
    UpTo2Hours,
    #[serde(rename = "2-4 hours")]
    UpTo4Hours,
    #[serde(rename = "4+ hours")]
    Over4Hours,
}

impl DurationBucket {
    /// All buckets, shortest first.
    pub const ALL: [Self; 5] = [
        Self::UpTo30Min,
        Self::UpTo1Hour,
        Self::UpTo2Hours,
        Self::UpTo4Hours,
        Self::Over4Hours,
    ];

    /// Bucket holding a duration in minutes.
    pub fn for_minutes(minutes: f64) -> Self {
        if minutes <= 30.0 {
            Self::UpTo30Min
        } else if minutes <= 60.0 {
            Self::UpTo1Hour
        } else if minutes <= 120.0 {
            Self::UpTo2Hours
        } else if minutes <= 240.0 {
            Self::UpTo4Hours
        } else {
            Self::Over4Hours
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpTo30Min => "0-30 min",
            Self::UpTo1Hour => "30-60 min",
            Self::UpTo2Hours => "1-2 hours",
            Self::UpTo4Hours => "2-4 hours",
            Self::Over4Hours => "4+ hours",
        }
    }
}

/// Number of events in a duration range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBucketCount {
    #[serde(rename = "range")]
    pub bucket: DurationBucket,
    pub count: usize,
}

/// Number of events with a given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Counts events per duration range. Every range is present, in order.
pub fn duration_histogram(events: &[Event]) -> Vec<DurationBucketCount> {
    let mut counts = [0usize; DurationBucket::ALL.len()];
    for event in events {
        counts[DurationBucket::for_minutes(event.duration_minutes()) as usize] += 1;
    }
    DurationBucket::ALL
        .iter()
        .zip(counts)
        .map(|(&bucket, count)| DurationBucketCount { bucket, count })
        .collect()
}

/// Counts event starts per hour of day.
pub fn start_hour_counts(events: &[Event], basis: HourBasis) -> [usize; HOURS_PER_DAY] {
    let mut counts = [0usize; HOURS_PER_DAY];
    for event in events {
        count_start_hour(&mut counts, event, basis);
    }
    counts
}

/// Counts events per name.
///
/// Sorted by descending count, ties in order of first appearance. Only
/// the first `top` names are kept; the rest are summed into a trailing
/// [`OTHERS_LABEL`] entry when non-zero.
pub fn name_distribution(events: &[Event], top: usize) -> Vec<NameCount> {
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<NameCount> = Vec::new();

    for event in events {
        match slot.get(event.name.as_str()) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                slot.insert(event.name.as_str(), counts.len());
                counts.push(NameCount {
                    name: event.name.clone(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top);

    let kept: usize = counts.iter().map(|c| c.count).sum();
    let others = events.len() - kept;
    if others > 0 {
        counts.push(NameCount {
            name: OTHERS_LABEL.to_string(),
            count: others,
        });
    }
    counts
}

/// All three chart series for one event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub duration_histogram: Vec<DurationBucketCount>,
    /// Starts per hour of day, on the configured clock.
    pub start_hours: [usize; HOURS_PER_DAY],
    /// Top names plus an [`OTHERS_LABEL`] remainder.
    pub names: Vec<NameCount>,
}

/// Computes every chart series, reading hours on `config.hour_basis` and
/// keeping `config.top_names` names.
pub fn chart_data(events: &[Event], config: &AnalyticsConfig) -> ChartData {
    ChartData {
        duration_histogram: duration_histogram(events),
        start_hours: start_hour_counts(events, config.hour_basis),
        names: name_distribution(events, config.top_names),
    }
}

/// Formats an hour of day for display: `"9 AM"`, `"12 PM"`, `"3 PM"`.
///
/// `None` renders as `"N/A"`. Hours before noon keep their 24-hour value,
/// so midnight is `"0 AM"`.
pub fn format_hour(hour: Option<u32>) -> String {
    match hour {
        None => "N/A".to_string(),
        Some(h) if h < 12 => format!("{h} AM"),
        Some(12) => "12 PM".to_string(),
        Some(h) => format!("{} PM", h - 12),
    }
}
