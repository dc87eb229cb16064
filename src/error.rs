//! Crate-level error type.

use thiserror::Error;

use crate::time::TimeError;
use crate::validation::ValidationError;

/// Errors surfaced at the crate boundary.
///
/// The scheduler and aggregator themselves are infallible; errors come
/// from parsing, boundary validation, configuration and schedule lookup.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error("invalid event: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("schedule '{0}' not found")]
    UnknownSchedule(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
