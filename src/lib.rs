//! Event schedules with greedy interval selection and analytics.
//!
//! Keeps named lists of events and, for any list, picks the largest set of
//! events that do not overlap and summarises the list (count, average
//! duration, peak start hour).
//!
//! # Modules
//!
//! - **`models`**: `Event` and the unvalidated `EventDraft`
//! - **`time`**: Timestamp parsing, durations, hour-of-day conventions
//! - **`scheduler`**: `GreedyScheduler` and `Analytics`
//! - **`distribution`**: Chart series (duration ranges, start hours, names)
//! - **`validation`**: Boundary checks (missing fields, bad times, inverted intervals)
//! - **`book`**: `ScheduleBook`, an owned map of named schedules
//! - **`config`**: `AnalyticsConfig`, loadable from TOML
//!
//! # Example
//!
//! ```
//! use u_agenda::{analyze, schedule, Event};
//!
//! let events = vec![
//!     Event::parse(1, "Standup", "2024-03-01T09:00", "2024-03-01T10:00").unwrap(),
//!     Event::parse(2, "Review", "2024-03-01T09:30", "2024-03-01T10:30").unwrap(),
//!     Event::parse(3, "Planning", "2024-03-01T10:00", "2024-03-01T11:00").unwrap(),
//! ];
//!
//! assert_eq!(schedule(&events).len(), 2);
//!
//! let summary = analyze(&events);
//! assert_eq!(summary.total_events, 3);
//! assert_eq!(summary.peak_start_hour, Some(9));
//! assert_eq!(summary.optimized_events, 2);
//! ```
//!
//! # Logging
//!
//! Uses the `log` facade; install any logger to see selection summaries.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1

pub mod book;
pub mod config;
pub mod distribution;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod time;
pub mod validation;

pub use book::ScheduleBook;
pub use config::AnalyticsConfig;
pub use error::{Error, Result};
pub use models::{Event, EventDraft};
pub use scheduler::{analyze, schedule, Analytics, GreedyScheduler};
pub use time::{HourBasis, TimeError, Timestamp};
