//! Error types.
//!
//! Empty reference pools and mismatched parents are contract violations and
//! are reported to the caller immediately. Everything else in the engine is
//! total over well-formed input.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised by the timetabling engine and its I/O collaborators.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A pool the initializer draws from is empty.
    #[error("cannot draw from an empty {kind} pool")]
    EmptyPool { kind: &'static str },

    /// Two parents passed to crossover were built from different activity sets.
    #[error("parent schedules differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    /// A run parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The reference data failed structural validation.
    #[error("invalid problem definition ({} issue(s))", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("i/o error")]
    Io(#[from] std::io::Error),

    #[error("(de)serialization error")]
    Json(#[from] serde_json::Error),
}
