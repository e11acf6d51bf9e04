//! Workout session event loop
//!
//! Everything that touches the coordinator runs on this one loop: user
//! commands, lifecycle signals, due continuations and the foreground tick.

use std::time::Duration;

use tokio::{
    sync::{mpsc, watch},
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use super::spawn_continuation;
use crate::{
    lifecycle::{Deferred, LifecycleCoordinator, LifecycleSignal, TimerSnapshot},
    services::AlarmScheduler,
    utils::Clock,
};

/// Foreground recompute period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A user action from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleResting,
    DismissAlarm,
    EndWorkout,
    SetDuration(u32),
}

/// Input to the session loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Command(Command),
    Signal(LifecycleSignal),
}

/// Drives a coordinator from events and publishes snapshots after each one
pub struct Session<S: AlarmScheduler, C: Clock> {
    coordinator: LifecycleCoordinator<S>,
    clock: C,
    snapshot_tx: watch::Sender<TimerSnapshot>,
}

impl<S: AlarmScheduler, C: Clock> Session<S, C> {
    /// Create a session and the receiver the UI observes
    pub fn new(coordinator: LifecycleCoordinator<S>, clock: C) -> (Self, watch::Receiver<TimerSnapshot>) {
        let (snapshot_tx, snapshot_rx) = watch::channel(coordinator.snapshot());
        (
            Self {
                coordinator,
                clock,
                snapshot_tx,
            },
            snapshot_rx,
        )
    }

    pub fn coordinator(&self) -> &LifecycleCoordinator<S> {
        &self.coordinator
    }

    /// Process events until every sender is dropped, then hand the coordinator back
    pub async fn run(mut self, mut events: mpsc::Receiver<SessionEvent>) -> LifecycleCoordinator<S> {
        info!("Starting workout session");

        let (resume_tx, mut resume_rx) = mpsc::unbounded_channel();
        let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut was_ticking = self.coordinator.is_ticking();

        loop {
            let ticking = self.coordinator.is_ticking();
            if ticking && !was_ticking {
                ticker.reset();
            }
            was_ticking = ticking;

            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if let Some(deferred) = self.handle_event(event) {
                            spawn_continuation(deferred, resume_tx.clone());
                        }
                    }
                    None => break,
                },
                Some(continuation) = resume_rx.recv() => {
                    let now = self.clock.now();
                    self.coordinator.resume(continuation, now);
                }
                _ = ticker.tick(), if ticking => {
                    let now = self.clock.now();
                    self.coordinator.tick(now);
                }
            }

            self.publish();
        }

        info!("Workout session ended");
        self.coordinator
    }

    fn handle_event(&mut self, event: SessionEvent) -> Option<Deferred> {
        let now = self.clock.now();
        match event {
            SessionEvent::Signal(signal) => return self.coordinator.handle_signal(signal, now),
            SessionEvent::Command(Command::ToggleResting) => self.coordinator.toggle_resting(now),
            SessionEvent::Command(Command::DismissAlarm) => self.coordinator.dismiss_alarm(),
            SessionEvent::Command(Command::EndWorkout) => self.coordinator.end_workout(),
            SessionEvent::Command(Command::SetDuration(seconds)) => {
                match self.coordinator.set_configured_duration(seconds) {
                    Ok(true) => {}
                    Ok(false) => debug!("Duration change ignored while resting"),
                    Err(e) => warn!("Rejected duration change: {}", e),
                }
            }
        }
        None
    }

    fn publish(&self) {
        let snapshot = self.coordinator.snapshot();
        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration as ChronoDuration, Utc};
    use tokio::time::sleep;

    use super::*;
    use crate::{
        lifecycle::{CoordinatorSettings, Phase},
        services::recording::RecordingScheduler,
        state::RestDuration,
        utils::ManualClock,
    };

    struct Harness {
        events: mpsc::Sender<SessionEvent>,
        snapshots: watch::Receiver<TimerSnapshot>,
        clock: ManualClock,
        task: tokio::task::JoinHandle<LifecycleCoordinator<RecordingScheduler>>,
    }

    impl Harness {
        fn start() -> Self {
            let clock = ManualClock::new(Utc::now());
            let coordinator = LifecycleCoordinator::new(
                RecordingScheduler::new(),
                RestDuration::DEFAULT,
                CoordinatorSettings::default(),
            );
            let (session, snapshots) = Session::new(coordinator, clock.clone());
            let (events, rx) = mpsc::channel(16);
            let task = tokio::spawn(session.run(rx));
            Self {
                events,
                snapshots,
                clock,
                task,
            }
        }

        async fn send(&self, event: SessionEvent) {
            self.events.send(event).await.unwrap();
        }

        async fn signal(&self, signal: LifecycleSignal) {
            self.send(SessionEvent::Signal(signal)).await;
        }

        fn snapshot(&self) -> TimerSnapshot {
            self.snapshots.borrow().clone()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn minimize_confirmed_after_grace_window() {
        let harness = Harness::start();

        harness.signal(LifecycleSignal::WillResignActive).await;
        harness.signal(LifecycleSignal::SceneDidEnterBackground).await;
        sleep(Duration::from_millis(100)).await;
        assert_eq!(harness.snapshot().phase, Phase::Idle);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(harness.snapshot().phase, Phase::Resting);
    }

    #[tokio::test(start_paused = true)]
    async fn late_lock_inside_grace_window_wins() {
        let harness = Harness::start();

        harness.signal(LifecycleSignal::WillResignActive).await;
        harness.signal(LifecycleSignal::SceneDidEnterBackground).await;
        sleep(Duration::from_millis(50)).await;
        harness.signal(LifecycleSignal::ScreenLocked).await;
        sleep(Duration::from_millis(500)).await;

        assert_eq!(harness.snapshot().phase, Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn foreground_tick_raises_alarm() {
        let harness = Harness::start();

        harness.send(SessionEvent::Command(Command::ToggleResting)).await;
        sleep(Duration::from_millis(10)).await;
        assert_eq!(harness.snapshot().remaining_time_display, "01:30");

        harness.clock.advance(ChronoDuration::seconds(30));
        sleep(Duration::from_secs(1)).await;
        assert_eq!(harness.snapshot().remaining_time_display, "01:00");

        harness.clock.advance(ChronoDuration::seconds(61));
        sleep(Duration::from_secs(1)).await;
        let snapshot = harness.snapshot();
        assert!(snapshot.is_alarm_active);
        assert_eq!(snapshot.remaining_time_display, "00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn background_cleanup_releases_grace_window() {
        let harness = Harness::start();

        harness.signal(LifecycleSignal::WillResignActive).await;
        harness.signal(LifecycleSignal::ScreenLocked).await;
        harness.signal(LifecycleSignal::SceneDidEnterBackground).await;
        harness.signal(LifecycleSignal::DidEnterBackground).await;
        sleep(Duration::from_secs(2)).await;

        drop(harness.events);
        let coordinator = harness.task.await.unwrap();
        assert!(!coordinator.background_task().is_held());
        assert_eq!(coordinator.background_task().released_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn duration_commands_update_snapshot() {
        let harness = Harness::start();

        harness.send(SessionEvent::Command(Command::SetDuration(150))).await;
        harness.send(SessionEvent::Command(Command::SetDuration(17))).await;
        sleep(Duration::from_millis(10)).await;

        let snapshot = harness.snapshot();
        assert_eq!(snapshot.configured_duration_seconds, 150);
        assert_eq!(snapshot.remaining_time_display, "02:30");
    }

    #[tokio::test(start_paused = true)]
    async fn run_returns_when_events_close() {
        let harness = Harness::start();
        harness.send(SessionEvent::Command(Command::ToggleResting)).await;
        harness.send(SessionEvent::Command(Command::EndWorkout)).await;

        drop(harness.events);
        let coordinator = harness.task.await.unwrap();
        assert_eq!(coordinator.phase(), Phase::Idle);
    }
}
