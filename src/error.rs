//! Error types shared across the crate

use thiserror::Error;

/// Rejected rest duration configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("rest duration {0}s is outside the allowed range of 15s to 300s")]
    OutOfRange(u32),
    #[error("rest duration {0}s is not a multiple of 15s")]
    NotAStep(u32),
}

/// Failures reported by the notification collaborator
///
/// These are never fatal: the in-app countdown keeps working from wall-clock
/// reconciliation alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifierError {
    #[error("notification permission has not been granted")]
    NotAuthorized,
    #[error("notification backend unavailable: {0}")]
    Unavailable(String),
}

/// Unparseable input on the host console
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("empty input")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}
