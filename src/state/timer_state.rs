//! Countdown state snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RestDuration;
use crate::utils::format_mmss;

/// Observable countdown state
///
/// `is_resting` always mirrors `end_timestamp.is_some()`. While idle the
/// display sits at the full duration with `progress == 1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub is_resting: bool,
    pub duration: RestDuration,
    pub end_timestamp: Option<DateTime<Utc>>,
    pub remaining_seconds: f64,
    pub progress: f64,
}

impl TimerState {
    /// Create an idle state showing the full duration
    pub fn idle(duration: RestDuration) -> Self {
        Self {
            is_resting: false,
            duration,
            end_timestamp: None,
            remaining_seconds: duration.as_secs_f64(),
            progress: 1.0,
        }
    }

    /// Create a resting state that ends at `end_timestamp`
    pub fn resting(duration: RestDuration, end_timestamp: DateTime<Utc>) -> Self {
        Self {
            is_resting: true,
            duration,
            end_timestamp: Some(end_timestamp),
            remaining_seconds: duration.as_secs_f64(),
            progress: 1.0,
        }
    }

    /// Remaining time as `MM:SS`
    pub fn remaining_display(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::idle(RestDuration::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shows_full_duration() {
        let state = TimerState::default();
        assert!(!state.is_resting);
        assert_eq!(state.end_timestamp, None);
        assert_eq!(state.progress, 1.0);
        assert_eq!(state.remaining_display(), "01:30");
    }

    #[test]
    fn resting_tracks_end_timestamp() {
        let end = Utc::now();
        let state = TimerState::resting(RestDuration::new(150).unwrap(), end);
        assert!(state.is_resting);
        assert_eq!(state.end_timestamp, Some(end));
        assert_eq!(state.remaining_display(), "02:30");
    }
}
