//! Greedy interval selection and schedule analytics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` keeps the earliest-finishing compatible event at each
//! step. For unweighted interval scheduling this is optimal: no
//! non-overlapping subset of the input is larger.
//!
//! # Analytics
//!
//! `Analytics` summarises an event list: count, mean duration, peak start
//! hour, and how many events the scheduler would keep.
//!
//! Both are pure functions of their input. They hold no state and may run
//! concurrently on separate lists without coordination.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1 (Activity Selection)

mod analytics;
mod greedy;

pub use analytics::{count_start_hour, peak_hour, Analytics, HOURS_PER_DAY};
pub use greedy::GreedyScheduler;

use crate::models::Event;

/// Selects a maximum set of non-overlapping events, in end-time order.
pub fn schedule(events: &[Event]) -> Vec<Event> {
    GreedyScheduler::new().schedule(events)
}

/// Summarises events using UTC hours.
///
/// See [`Analytics::calculate_with`] for other hour conventions.
pub fn analyze(events: &[Event]) -> Analytics {
    Analytics::calculate(events)
}
