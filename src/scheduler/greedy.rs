//! Earliest-finish-time greedy interval selection.
//!
//! # Algorithm
//!
//! 1. Stable-sort events by end time.
//! 2. Take the first; remember its end.
//! 3. Scan the rest in order: accept an event iff it starts at or after the
//!    remembered end, then remember its end. Rejected events are never
//!    reconsidered.
//!
//! Among events ending at the same instant, zero-length events sort after
//! longer ones; otherwise input order is kept. Without that rule a point
//! event at `t` listed before `[s, t)` would block the longer event and
//! lose a selection.
//!
//! # Optimality
//! Exchange argument: some maximum solution starts with the earliest
//! finishing event, and the remaining problem has the same shape.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the scan.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1: Interval Scheduling

use log::{debug, trace};

use crate::models::Event;

/// Earliest-finish-time interval scheduler.
///
/// Selects a maximum-size subset of pairwise non-overlapping events.
/// Back-to-back events (one ends exactly when the next starts) are
/// compatible.
///
/// # Example
///
/// ```
/// use u_agenda::models::Event;
/// use u_agenda::scheduler::GreedyScheduler;
///
/// let events = vec![
///     Event::parse(1, "A", "2024-03-01T09:00", "2024-03-01T10:00").unwrap(),
///     Event::parse(2, "B", "2024-03-01T09:30", "2024-03-01T10:30").unwrap(),
///     Event::parse(3, "C", "2024-03-01T10:00", "2024-03-01T11:00").unwrap(),
/// ];
///
/// let selected = GreedyScheduler::new().schedule(&events);
/// let ids: Vec<i64> = selected.iter().map(|e| e.id).collect();
/// assert_eq!(ids, vec![1, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Selects non-overlapping events.
    ///
    /// Returns copies in selection order (ascending end time). The input is
    /// left untouched.
    pub fn schedule(&self, events: &[Event]) -> Vec<Event> {
        self.selected_indices(events)
            .into_iter()
            .map(|idx| events[idx].clone())
            .collect()
    }

    /// Selects non-overlapping events, returning their input indices in
    /// selection order.
    pub fn selected_indices(&self, events: &[Event]) -> Vec<usize> {
        let order = self.sort_by_end(events);
        let Some((&first, rest)) = order.split_first() else {
            return Vec::new();
        };

        let mut selected = vec![first];
        let mut last_end = events[first].end_time;

        for &idx in rest {
            let event = &events[idx];
            if event.start_time >= last_end {
                selected.push(idx);
                last_end = event.end_time;
            } else {
                trace!(
                    "skipping event {} ({}): starts before {}",
                    event.id,
                    event.name,
                    last_end.to_rfc3339()
                );
            }
        }

        debug!(
            "greedy selection kept {} of {} events",
            selected.len(),
            events.len()
        );
        selected
    }

    /// Returns event indices sorted by end time (stable).
    fn sort_by_end(&self, events: &[Event]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..events.len()).collect();
        indices.sort_by_key(|&idx| (events[idx].end_time, events[idx].is_point()));
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::time::Timestamp;

    fn at(hhmm: &str) -> String {
        format!("2024-03-01T{hhmm}")
    }

    fn make_event(id: i64, start: &str, end: &str) -> Event {
        Event::parse(id, format!("E{id}"), &at(start), &at(end)).unwrap()
    }

    fn base() -> Timestamp {
        crate::time::parse_timestamp("2024-03-01T00:00").unwrap()
    }

    /// Events on a coarse grid of `unit` minutes, so collisions are common.
    fn grid_events(spans: &[(i64, i64)], unit: i64) -> Vec<Event> {
        spans
            .iter()
            .enumerate()
            .map(|(i, &(start, len))| {
                let start_time = base() + chrono::Duration::minutes(start * unit);
                let end_time = start_time + chrono::Duration::minutes(len * unit);
                Event::new(i as i64 + 1, format!("E{i}"), start_time, end_time)
            })
            .collect()
    }

    fn ids(events: &[Event]) -> Vec<i64> {
        events.iter().map(|e| e.id).collect()
    }

    /// Largest pairwise-compatible subset, by enumeration.
    fn brute_force_max(events: &[Event]) -> usize {
        let n = events.len();
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let members: Vec<&Event> = (0..n)
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| &events[i])
                .collect();
            let ok = members
                .iter()
                .enumerate()
                .all(|(i, a)| members[i + 1..].iter().all(|b| !a.overlaps(b)));
            if ok {
                best = best.max(members.len());
            }
        }
        best
    }

    fn assert_non_overlapping(selected: &[Event]) {
        for pair in selected.windows(2) {
            assert!(
                pair[0].end_time <= pair[1].start_time,
                "events {} and {} overlap",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_empty_input() {
        let scheduler = GreedyScheduler::new();
        assert!(scheduler.schedule(&[]).is_empty());
        assert!(scheduler.selected_indices(&[]).is_empty());
    }

    #[test]
    fn test_single_event() {
        let events = vec![make_event(1, "09:00", "09:45")];
        assert_eq!(ids(&GreedyScheduler::new().schedule(&events)), vec![1]);
    }

    #[test]
    fn test_back_to_back_accepted() {
        let events = vec![
            make_event(1, "09:00", "10:00"),
            make_event(2, "09:30", "10:30"),
            make_event(3, "10:00", "11:00"),
        ];
        let selected = GreedyScheduler::new().schedule(&events);
        assert_eq!(ids(&selected), vec![1, 3]);
        assert_non_overlapping(&selected);
    }

    #[test]
    fn test_identical_events_pick_first() {
        let events = vec![
            make_event(1, "14:00", "15:00"),
            make_event(2, "14:00", "15:00"),
            make_event(3, "14:00", "15:00"),
        ];
        assert_eq!(ids(&GreedyScheduler::new().schedule(&events)), vec![1]);
    }

    #[test]
    fn test_result_in_end_time_order() {
        let events = vec![
            make_event(1, "13:00", "14:00"),
            make_event(2, "08:00", "09:00"),
            make_event(3, "10:00", "12:00"),
        ];
        let scheduler = GreedyScheduler::new();
        assert_eq!(ids(&scheduler.schedule(&events)), vec![2, 3, 1]);
        assert_eq!(scheduler.selected_indices(&events), vec![1, 2, 0]);
    }

    #[test]
    fn test_earliest_finish_beats_earliest_start() {
        // A long early event would block two short ones.
        let events = vec![
            make_event(1, "08:00", "12:00"),
            make_event(2, "09:00", "10:00"),
            make_event(3, "10:00", "11:00"),
        ];
        assert_eq!(ids(&GreedyScheduler::new().schedule(&events)), vec![2, 3]);
    }

    #[test]
    fn test_equal_end_keeps_input_order() {
        let events = vec![
            make_event(1, "09:30", "10:00"),
            make_event(2, "09:00", "10:00"),
        ];
        assert_eq!(ids(&GreedyScheduler::new().schedule(&events)), vec![1]);
    }

    #[test]
    fn test_point_events() {
        let events = vec![
            make_event(1, "10:00", "10:00"),
            make_event(2, "09:00", "10:00"),
            make_event(3, "10:00", "10:00"),
            make_event(4, "09:30", "09:30"),
        ];
        let selected = GreedyScheduler::new().schedule(&events);
        // 09:30 point, then the 10:00 points; [09:00, 10:00) contains 09:30.
        assert_eq!(ids(&selected), vec![4, 1, 3]);
        assert_non_overlapping(&selected);
        assert_eq!(selected.len(), brute_force_max(&events));
    }

    #[test]
    fn test_point_sorted_after_interval_with_same_end() {
        let events = vec![
            make_event(1, "10:00", "10:00"),
            make_event(2, "09:00", "10:00"),
        ];
        assert_eq!(ids(&GreedyScheduler::new().schedule(&events)), vec![2, 1]);
    }

    #[test]
    fn test_input_untouched() {
        let events = vec![
            make_event(1, "13:00", "14:00"),
            make_event(2, "08:00", "09:00"),
        ];
        let before = events.clone();
        let _ = GreedyScheduler::new().schedule(&events);
        assert_eq!(events, before);
    }

    #[test]
    fn test_seeded_brute_force_sweep() {
        let mut rng = SmallRng::seed_from_u64(42);
        let scheduler = GreedyScheduler::new();

        for _ in 0..300 {
            let n = rng.random_range(0..=8);
            let spans: Vec<(i64, i64)> = (0..n)
                .map(|_| (rng.random_range(0..16), rng.random_range(0..5)))
                .collect();
            let events = grid_events(&spans, 30);

            let selected = scheduler.schedule(&events);
            assert_non_overlapping(&selected);
            assert_eq!(selected.len(), brute_force_max(&events), "spans: {spans:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_non_overlapping(spans in proptest::collection::vec((0i64..96, 0i64..12), 0..40)) {
            let events = grid_events(&spans, 15);
            let selected = GreedyScheduler::new().schedule(&events);
            for pair in selected.windows(2) {
                prop_assert!(pair[0].end_time <= pair[1].start_time);
            }
        }

        #[test]
        fn prop_maximal(spans in proptest::collection::vec((0i64..24, 0i64..6), 0..=8)) {
            let events = grid_events(&spans, 30);
            let selected = GreedyScheduler::new().schedule(&events);
            prop_assert_eq!(selected.len(), brute_force_max(&events));
        }

        #[test]
        fn prop_idempotent(spans in proptest::collection::vec((0i64..96, 0i64..12), 0..40)) {
            let scheduler = GreedyScheduler::new();
            let once = scheduler.schedule(&grid_events(&spans, 15));
            let twice = scheduler.schedule(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
