//! Named event schedules.
//!
//! A [`ScheduleBook`] maps schedule names to event lists. It is an owned
//! value: callers decide where it lives and pass it explicitly, and it is
//! serializable so they can store it however they like.
//!
//! Looking a name up never fails. Reads of an unknown schedule see an
//! empty list; [`ScheduleBook::open`] and [`ScheduleBook::add_event`]
//! create it on first use.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::AnalyticsConfig;
use crate::distribution::{chart_data, ChartData};
use crate::error::{Error, Result};
use crate::models::{Event, EventDraft};
use crate::scheduler::{Analytics, GreedyScheduler};

/// A collection of named schedules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleBook {
    schedules: BTreeMap<String, Vec<Event>>,
}

impl ScheduleBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule names in ascending order.
    pub fn schedule_names(&self) -> Vec<&str> {
        self.schedules.keys().map(String::as_str).collect()
    }

    /// Whether a schedule exists.
    pub fn contains(&self, name: &str) -> bool {
        self.schedules.contains_key(name)
    }

    /// Number of schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Whether the book holds no schedules.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Events of a schedule, in insertion order. Empty if unknown.
    pub fn events(&self, name: &str) -> &[Event] {
        self.schedules.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Events of a schedule, creating an empty schedule if needed.
    pub fn open(&mut self, name: &str) -> &[Event] {
        self.entry(name)
    }

    /// Validates a submission and appends it to a schedule.
    ///
    /// The schedule is created first, so it exists even when the draft is
    /// rejected. The new event's id is the schedule's length after insertion.
    ///
    /// # Errors
    /// [`Error::Validation`] listing every problem with the draft.
    pub fn add_event(&mut self, name: &str, draft: EventDraft) -> Result<Event> {
        let events = self.entry(name);
        let id = events.len() as i64 + 1;
        let event = draft.into_event(id)?;
        events.push(event.clone());
        info!("added event {} '{}' to schedule '{name}'", event.id, event.name);
        Ok(event)
    }

    /// Removes a schedule, returning its events.
    ///
    /// # Errors
    /// [`Error::UnknownSchedule`] if no schedule has that name.
    pub fn remove_schedule(&mut self, name: &str) -> Result<Vec<Event>> {
        let events = self
            .schedules
            .remove(name)
            .ok_or_else(|| Error::UnknownSchedule(name.to_string()))?;
        info!("removed schedule '{name}' with {} events", events.len());
        Ok(events)
    }

    /// Analytics of a schedule.
    pub fn analytics(&self, name: &str, config: &AnalyticsConfig) -> Analytics {
        Analytics::calculate_with(self.events(name), config)
    }

    /// Chart series of a schedule.
    pub fn charts(&self, name: &str, config: &AnalyticsConfig) -> ChartData {
        chart_data(self.events(name), config)
    }

    /// Greedy non-overlapping selection from a schedule.
    pub fn optimized(&self, name: &str) -> Vec<Event> {
        GreedyScheduler::new().schedule(self.events(name))
    }

    fn entry(&mut self, name: &str) -> &mut Vec<Event> {
        if !self.schedules.contains_key(name) {
            info!("created schedule '{name}'");
        }
        self.schedules.entry(name.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn draft(name: &str, start: &str, end: &str) -> EventDraft {
        EventDraft::new(
            name,
            format!("2024-03-01T{start}"),
            format!("2024-03-01T{end}"),
        )
    }

    fn sample_book() -> ScheduleBook {
        let mut book = ScheduleBook::new();
        book.add_event("work", draft("Standup", "09:00", "10:00")).unwrap();
        book.add_event("work", draft("Review", "09:30", "10:30")).unwrap();
        book.add_event("work", draft("Planning", "10:00", "11:00")).unwrap();
        book.add_event("home", draft("Gym", "18:00", "19:00")).unwrap();
        book
    }

    #[test]
    fn test_add_event_assigns_ids() {
        let book = sample_book();
        let ids: Vec<i64> = book.events("work").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(book.events("home")[0].id, 1);
    }

    #[test]
    fn test_schedule_names_sorted() {
        let book = sample_book();
        assert_eq!(book.schedule_names(), vec!["home", "work"]);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_unknown_schedule_reads_empty() {
        let book = ScheduleBook::new();
        assert!(book.events("nope").is_empty());
        assert!(!book.contains("nope"));
        assert_eq!(book.analytics("nope", &AnalyticsConfig::default()), Analytics::empty());
        assert!(book.optimized("nope").is_empty());
    }

    #[test]
    fn test_open_creates_schedule() {
        let mut book = ScheduleBook::new();
        assert!(book.open("new").is_empty());
        assert!(book.contains("new"));
        assert!(!book.is_empty());
    }

    #[test]
    fn test_rejected_draft_still_creates_schedule() {
        let mut book = ScheduleBook::new();
        let err = book
            .add_event("errands", draft("Bank", "11:00", "10:00"))
            .unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::InvertedInterval)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(book.contains("errands"));
        assert!(book.events("errands").is_empty());
    }

    #[test]
    fn test_remove_schedule() {
        let mut book = sample_book();
        let removed = book.remove_schedule("home").unwrap();
        assert_eq!(removed.len(), 1);
        assert!(!book.contains("home"));
        assert!(matches!(
            book.remove_schedule("home"),
            Err(Error::UnknownSchedule(ref name)) if name == "home"
        ));
    }

    #[test]
    fn test_schedule_analytics_and_optimized() {
        let book = sample_book();
        let analytics = book.analytics("work", &AnalyticsConfig::default());
        assert_eq!(analytics.total_events, 3);
        assert_eq!(analytics.optimized_events, 2);
        assert_eq!(analytics.peak_start_hour, Some(9));

        let names: Vec<String> = book.optimized("work").into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Standup", "Planning"]);
    }

    #[test]
    fn test_schedule_charts() {
        let mut book = sample_book();
        book.add_event("work", draft("Standup", "14:00", "14:15")).unwrap();

        let config = AnalyticsConfig::new().with_top_names(1);
        let charts = book.charts("work", &config);
        assert_eq!(charts.start_hours[9], 2);
        assert_eq!(charts.start_hours.iter().sum::<usize>(), 4);
        assert_eq!(charts.names[0].name, "Standup");
        assert_eq!(charts.names[0].count, 2);
        assert_eq!(charts.names[1].count, 2);

        let empty = book.charts("nope", &config);
        assert!(empty.names.is_empty());
        assert_eq!(empty.start_hours, [0; 24]);
    }

    #[test]
    fn test_book_json_roundtrip() {
        let book = sample_book();
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with("{\"home\":["));
        let back: ScheduleBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
