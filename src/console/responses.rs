//! Console response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lifecycle::TimerSnapshot;

/// Status line printed in response to `status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub timer: TimerSnapshot,
}

impl StatusResponse {
    pub fn new(timer: TimerSnapshot) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timer,
        }
    }
}

/// Error line printed for input that could not be parsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}
