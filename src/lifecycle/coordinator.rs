//! Lifecycle coordinator
//!
//! Routes host lifecycle signals and user commands into the rest timer and the
//! alarm, deciding whether a trip to the background was a screen lock or a
//! deliberate minimize to the home screen.
//!
//! Screen-lock detection wins whenever the platform reports it. When it does
//! not, a scene-background that is not followed by a lock within the grace
//! window is taken to be a minimize.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::{
    Continuation, ContinuationKind, CoordinatorSettings, Deferred, LifecycleSignal, Phase,
    TimerSnapshot, TransitionContext,
};
use crate::{
    error::DurationError,
    services::{AlarmRequest, AlarmScheduler, BackgroundTask},
    state::{AlarmCommand, AlarmState, RestDuration, RestTimer, TickOutcome},
};

/// Owns the timer, alarm and transition bookkeeping for one workout screen
///
/// Every mutation goes through one method call on a single logical sequence;
/// delayed work is handed back to the caller as a [`Deferred`] and re-enters
/// through [`LifecycleCoordinator::resume`].
#[derive(Debug)]
pub struct LifecycleCoordinator<S: AlarmScheduler> {
    timer: RestTimer,
    alarm: AlarmState,
    context: TransitionContext,
    background: BackgroundTask,
    scheduler: S,
    settings: CoordinatorSettings,
    generation: u64,
    foreground: bool,
}

impl<S: AlarmScheduler> LifecycleCoordinator<S> {
    /// Create a coordinator for an app that has just launched in the foreground
    pub fn new(scheduler: S, duration: RestDuration, settings: CoordinatorSettings) -> Self {
        Self {
            timer: RestTimer::new(duration),
            alarm: AlarmState::new(),
            context: TransitionContext::new(),
            background: BackgroundTask::new(),
            scheduler,
            settings,
            generation: 0,
            foreground: true,
        }
    }

    /// Ask the collaborator for notification permission
    ///
    /// A refusal or failure only means alarms stay in-app.
    pub fn request_authorization(&mut self) -> bool {
        match self.scheduler.request_authorization() {
            Ok(granted) => granted,
            Err(e) => {
                warn!("Notification authorization failed: {}", e);
                false
            }
        }
    }

    pub fn timer(&self) -> &RestTimer {
        &self.timer
    }

    pub fn alarm(&self) -> AlarmState {
        self.alarm
    }

    pub fn context(&self) -> &TransitionContext {
        &self.context
    }

    pub fn background_task(&self) -> &BackgroundTask {
        &self.background
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    pub fn phase(&self) -> Phase {
        if self.alarm.is_active {
            Phase::AlarmActive
        } else if self.timer.is_resting() {
            Phase::Resting
        } else {
            Phase::Idle
        }
    }

    /// Whether the once-per-second tick should be delivered
    pub fn is_ticking(&self) -> bool {
        self.foreground && self.timer.is_recomputing()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        let state = self.timer.state();
        TimerSnapshot {
            phase: self.phase(),
            remaining_time_display: state.remaining_display(),
            remaining_seconds: state.remaining_seconds,
            progress: state.progress,
            is_resting: state.is_resting,
            is_alarm_active: self.alarm.is_active,
            configured_duration_seconds: state.duration.as_secs(),
            end_timestamp: state.end_timestamp,
        }
    }

    // ---- User commands ----

    /// Start or stop resting
    ///
    /// While the alarm is showing this acts as a dismissal.
    pub fn toggle_resting(&mut self, now: DateTime<Utc>) {
        if self.alarm.is_active {
            info!("Rest toggled while alarm active, dismissing");
            self.dismiss_and_reset();
        } else if self.timer.is_resting() {
            let command = self.timer.stop();
            self.apply(command);
        } else {
            self.start_resting(now);
        }
    }

    /// User pressed the dismiss button on the alarm
    pub fn dismiss_alarm(&mut self) {
        info!("Alarm dismissed");
        self.dismiss_and_reset();
    }

    /// Reset everything regardless of the current state
    pub fn end_workout(&mut self) {
        info!("Ending workout session");
        self.dismiss_and_reset();
    }

    /// Change the rest length used by the next start
    ///
    /// Returns `Ok(false)` when ignored because a rest is in flight.
    pub fn set_configured_duration(&mut self, seconds: u32) -> Result<bool, DurationError> {
        let duration = RestDuration::new(seconds)?;
        let applied = self.timer.set_duration(duration);
        if applied {
            info!("Rest duration set to {}", duration);
        }
        Ok(applied)
    }

    /// Periodic foreground recompute
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if !self.foreground {
            return TickOutcome::Idle;
        }

        let outcome = self.timer.tick(now);
        match outcome {
            TickOutcome::Fired => {
                if self.alarm.raise() {
                    info!("Rest over, alarm active");
                }
            }
            TickOutcome::Stopped => self.apply(AlarmCommand::Cancel),
            TickOutcome::Running | TickOutcome::Idle => {}
        }
        outcome
    }

    // ---- Lifecycle ----

    /// Process one lifecycle signal, possibly requesting delayed work
    pub fn handle_signal(&mut self, signal: LifecycleSignal, now: DateTime<Utc>) -> Option<Deferred> {
        debug!("Lifecycle signal {} in phase {:?}", signal, self.phase());

        match signal {
            LifecycleSignal::WillResignActive => {
                self.generation += 1;
                self.context.begin(now);
                self.foreground = false;
                self.background.acquire(self.generation);
                None
            }
            LifecycleSignal::ScreenLocked => {
                self.context.was_screen_locked = true;
                if self.alarm.is_active {
                    info!("Screen locked during alarm, relying on system notification");
                    self.dismiss_and_reset();
                }
                None
            }
            LifecycleSignal::ScreenUnlocked => {
                debug!("Screen unlocked");
                None
            }
            LifecycleSignal::SceneDidEnterBackground => {
                self.foreground = false;
                if self.context.awaiting_lock_decision() {
                    debug!(
                        "Waiting {:?} for a late screen lock",
                        self.settings.minimize_grace
                    );
                    Some(self.defer(self.settings.minimize_grace, ContinuationKind::ConfirmMinimize))
                } else {
                    if self.context.is_processing_background_transition {
                        info!("Screen lock confirmed, not treating as minimize");
                    }
                    self.context.is_processing_background_transition = false;
                    None
                }
            }
            LifecycleSignal::DidEnterBackground => {
                self.foreground = false;
                if self.background.is_held() {
                    Some(self.defer(
                        self.settings.background_cleanup,
                        ContinuationKind::ReleaseBackgroundTask,
                    ))
                } else {
                    None
                }
            }
            LifecycleSignal::DidBecomeActive => {
                self.generation += 1;
                self.context.reset();
                self.foreground = true;
                self.background.release();
                self.reconcile(now);
                None
            }
        }
    }

    /// Run a continuation previously returned from [`handle_signal`]
    ///
    /// Continuations from a superseded excursion are ignored.
    ///
    /// [`handle_signal`]: LifecycleCoordinator::handle_signal
    pub fn resume(&mut self, continuation: Continuation, now: DateTime<Utc>) {
        if continuation.generation != self.generation {
            debug!(
                "Dropping stale {:?} from excursion {} (current {})",
                continuation.kind, continuation.generation, self.generation
            );
            return;
        }

        match continuation.kind {
            ContinuationKind::ConfirmMinimize => {
                if !self.context.is_processing_background_transition {
                    debug!("Background transition already settled");
                    return;
                }
                if self.context.was_screen_locked {
                    info!("Late screen lock arrived, not treating as minimize");
                } else {
                    self.apply_minimize_policy(now);
                }
                self.context.is_processing_background_transition = false;
            }
            ContinuationKind::ReleaseBackgroundTask => {
                self.background.release();
            }
        }
    }

    fn defer(&self, delay: std::time::Duration, kind: ContinuationKind) -> Deferred {
        Deferred {
            delay,
            continuation: Continuation {
                generation: self.generation,
                kind,
            },
        }
    }

    fn apply_minimize_policy(&mut self, now: DateTime<Utc>) {
        info!("App minimized to home screen");
        if self.alarm.is_active {
            info!("Auto-dismissing alarm due to app minimize");
            self.dismiss_and_reset();
        } else if !self.timer.is_resting() {
            info!("Auto-starting rest timer due to app minimize");
            self.start_resting(now);
        }
    }

    /// Catch the countdown up with the wall clock after returning to the foreground
    fn reconcile(&mut self, now: DateTime<Utc>) {
        let Some(end) = self.timer.state().end_timestamp else {
            return;
        };
        if self.alarm.is_active {
            return;
        }

        if now >= end {
            info!("Rest elapsed while away, raising alarm");
            self.timer.force_elapsed();
            self.alarm.raise();
        } else if self.timer.resume(now) == TickOutcome::Fired {
            self.alarm.raise();
        }
    }

    fn start_resting(&mut self, now: DateTime<Utc>) {
        let command = self.timer.start(self.timer.duration(), now);
        self.apply(command);
    }

    fn dismiss_and_reset(&mut self) {
        self.alarm.clear();
        let command = self.timer.stop();
        self.apply(command);
    }

    fn apply(&mut self, command: AlarmCommand) {
        let result = match command {
            AlarmCommand::Schedule(delay) => self
                .scheduler
                .schedule_alarm(&AlarmRequest::rest_over(delay)),
            AlarmCommand::Cancel => self.scheduler.cancel_alarm(),
        };
        if let Err(e) = result {
            warn!("Alarm scheduler failed on {:?}: {}", command, e);
        }
    }
}
