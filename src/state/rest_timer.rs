//! Rest countdown arithmetic

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{RestDuration, TimerState};

/// Side effect a timer operation asks of the notification collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmCommand {
    /// Replace any pending alarm with one firing after the delay
    Schedule(std::time::Duration),
    /// Remove any pending alarm
    Cancel,
}

/// Result of recomputing the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Periodic recompute is not active; nothing changed
    Idle,
    /// Time remains on the clock
    Running,
    /// The countdown reached zero on this recompute
    Fired,
    /// A recompute found no end timestamp and stopped the timer
    Stopped,
}

/// Owns the countdown and derives remaining time from the wall clock
#[derive(Debug, Clone)]
pub struct RestTimer {
    state: TimerState,
    recomputing: bool,
}

impl RestTimer {
    pub fn new(duration: RestDuration) -> Self {
        Self {
            state: TimerState::idle(duration),
            recomputing: false,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn duration(&self) -> RestDuration {
        self.state.duration
    }

    pub fn is_resting(&self) -> bool {
        self.state.is_resting
    }

    /// Whether the once-per-second recompute should be running
    pub fn is_recomputing(&self) -> bool {
        self.recomputing
    }

    /// Begin resting for `duration`, restarting any countdown in flight
    pub fn start(&mut self, duration: RestDuration, now: DateTime<Utc>) -> AlarmCommand {
        let end = now + duration.as_chrono();
        info!("Starting rest timer for {} (ends at {})", duration, end);

        self.state = TimerState::resting(duration, end);
        self.recomputing = true;
        AlarmCommand::Schedule(duration.as_std())
    }

    /// Stop resting and reset the display to the full duration
    pub fn stop(&mut self) -> AlarmCommand {
        if self.state.is_resting {
            info!("Stopping rest timer");
        } else {
            debug!("Rest timer already stopped");
        }

        self.state = TimerState::idle(self.state.duration);
        self.recomputing = false;
        AlarmCommand::Cancel
    }

    /// Recompute remaining time against `now`
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if !self.recomputing {
            return TickOutcome::Idle;
        }

        let Some(end) = self.state.end_timestamp else {
            warn!("Tick found no end timestamp, treating timer as stopped");
            self.stop();
            return TickOutcome::Stopped;
        };

        let remaining = seconds_until(end, now);
        if remaining > 0.0 {
            self.state.remaining_seconds = remaining;
            self.state.progress = (remaining / self.state.duration.as_secs_f64()).clamp(0.0, 1.0);
            TickOutcome::Running
        } else {
            info!("Rest timer finished");
            self.force_elapsed();
            TickOutcome::Fired
        }
    }

    /// Zero the countdown without waiting for a tick
    ///
    /// Periodic recompute stops; the scheduled alarm is the source of truth
    /// from here on.
    pub fn force_elapsed(&mut self) {
        self.state.remaining_seconds = 0.0;
        self.state.progress = 0.0;
        self.recomputing = false;
    }

    /// Re-enable periodic recompute after a foreground return
    pub fn resume(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if self.state.end_timestamp.is_none() {
            return TickOutcome::Idle;
        }
        self.recomputing = true;
        self.tick(now)
    }

    /// Change the configured duration; ignored while resting
    pub fn set_duration(&mut self, duration: RestDuration) -> bool {
        if self.state.is_resting {
            debug!("Ignoring duration change to {} while resting", duration);
            return false;
        }

        self.state = TimerState::idle(duration);
        true
    }
}

impl Default for RestTimer {
    fn default() -> Self {
        Self::new(RestDuration::DEFAULT)
    }
}

fn seconds_until(end: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (end - now).num_milliseconds() as f64 / 1000.0
}
