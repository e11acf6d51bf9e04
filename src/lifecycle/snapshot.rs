//! Read-only view of the coordinator for the presentation layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse state of the workout screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Resting,
    AlarmActive,
}

/// Everything the UI observes, captured at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub remaining_time_display: String,
    pub remaining_seconds: f64,
    pub progress: f64,
    pub is_resting: bool,
    pub is_alarm_active: bool,
    pub configured_duration_seconds: u32,
    pub end_timestamp: Option<DateTime<Utc>>,
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            remaining_time_display: "01:30".to_string(),
            remaining_seconds: 90.0,
            progress: 1.0,
            is_resting: false,
            is_alarm_active: false,
            configured_duration_seconds: 90,
            end_timestamp: None,
        }
    }
}
