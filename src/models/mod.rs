//! Event domain models.
//!
//! Events are the only entity the algorithms see. They are transient
//! values: built by the caller for each call, never mutated, never retained.
//!
//! # Domain Mappings
//!
//! | u-agenda | Personal | Conference | Facilities |
//! |----------|----------|------------|------------|
//! | Event | Appointment | Talk | Room Booking |
//! | Schedule | Calendar | Track | Room Diary |

mod event;

pub use event::{Event, EventDraft};
