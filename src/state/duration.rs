//! Validated rest duration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;

/// A rest length the user is allowed to configure: 15s to 300s in 15s steps
///
/// Holding a `RestDuration` is proof the value passed boundary validation, so
/// a zero or negative countdown can never reach the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RestDuration(u32);

impl RestDuration {
    pub const MIN_SECS: u32 = 15;
    pub const MAX_SECS: u32 = 300;
    pub const STEP_SECS: u32 = 15;
    pub const DEFAULT: RestDuration = RestDuration(90);

    pub fn new(seconds: u32) -> Result<Self, DurationError> {
        if !(Self::MIN_SECS..=Self::MAX_SECS).contains(&seconds) {
            return Err(DurationError::OutOfRange(seconds));
        }
        if seconds % Self::STEP_SECS != 0 {
            return Err(DurationError::NotAStep(seconds));
        }
        Ok(Self(seconds))
    }

    pub fn as_secs(&self) -> u32 {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.0)
    }

    pub fn as_std(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }

    pub fn as_chrono(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.0))
    }
}

impl Default for RestDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for RestDuration {
    type Error = DurationError;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        Self::new(seconds)
    }
}

impl From<RestDuration> for u32 {
    fn from(duration: RestDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for RestDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
