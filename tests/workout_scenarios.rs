//! End-to-end workout scenarios against the public API

use std::{
    sync::{Arc, Mutex},
    time::Duration as StdDuration,
};

use chrono::{Duration, Utc};
use gym_rest_timer::{
    error::NotifierError,
    lifecycle::{CoordinatorSettings, LifecycleCoordinator, LifecycleSignal, Phase},
    services::{AlarmRequest, AlarmScheduler},
    state::RestDuration,
};

#[derive(Debug, Clone, Default)]
struct Alarms {
    pending: Arc<Mutex<Option<StdDuration>>>,
}

impl Alarms {
    fn pending(&self) -> Option<StdDuration> {
        *self.pending.lock().unwrap()
    }
}

impl AlarmScheduler for Alarms {
    fn request_authorization(&mut self) -> Result<bool, NotifierError> {
        Ok(true)
    }

    fn schedule_alarm(&mut self, request: &AlarmRequest) -> Result<(), NotifierError> {
        *self.pending.lock().unwrap() = Some(request.delay);
        Ok(())
    }

    fn cancel_alarm(&mut self) -> Result<(), NotifierError> {
        *self.pending.lock().unwrap() = None;
        Ok(())
    }
}

fn new_coordinator() -> (LifecycleCoordinator<Alarms>, Alarms) {
    let alarms = Alarms::default();
    let coordinator = LifecycleCoordinator::new(
        alarms.clone(),
        RestDuration::DEFAULT,
        CoordinatorSettings::default(),
    );
    (coordinator, alarms)
}

#[test]
fn rest_runs_out_in_foreground() {
    let (mut coordinator, alarms) = new_coordinator();
    let start = Utc::now();

    coordinator.toggle_resting(start);
    assert_eq!(alarms.pending(), Some(StdDuration::from_secs(90)));

    for second in 1..=91 {
        coordinator.tick(start + Duration::seconds(second));
    }

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.phase, Phase::AlarmActive);
    assert_eq!(snapshot.remaining_time_display, "00:00");
    assert_eq!(snapshot.progress, 0.0);

    coordinator.dismiss_alarm();
    assert_eq!(coordinator.phase(), Phase::Idle);
    assert_eq!(alarms.pending(), None);
}

#[test]
fn phone_put_away_between_sets() {
    let (mut coordinator, alarms) = new_coordinator();
    let now = Utc::now();

    coordinator.handle_signal(LifecycleSignal::WillResignActive, now);
    let minimize = coordinator
        .handle_signal(LifecycleSignal::SceneDidEnterBackground, now)
        .expect("minimize check should be deferred");
    let cleanup = coordinator
        .handle_signal(LifecycleSignal::DidEnterBackground, now)
        .expect("background cleanup should be deferred");

    coordinator.resume(minimize.continuation, now + Duration::milliseconds(200));
    assert_eq!(coordinator.phase(), Phase::Resting);
    assert_eq!(alarms.pending(), Some(StdDuration::from_secs(90)));

    coordinator.resume(cleanup.continuation, now + Duration::seconds(1));
    assert!(!coordinator.background_task().is_held());

    coordinator.handle_signal(LifecycleSignal::DidBecomeActive, now + Duration::seconds(120));
    assert!(coordinator.snapshot().is_alarm_active);
}

#[test]
fn screen_lock_mid_rest_then_return() {
    let (mut coordinator, alarms) = new_coordinator();
    let start = Utc::now();
    coordinator.toggle_resting(start);

    let away = start + Duration::seconds(20);
    coordinator.handle_signal(LifecycleSignal::WillResignActive, away);
    coordinator.handle_signal(LifecycleSignal::SceneDidEnterBackground, away);
    coordinator.handle_signal(LifecycleSignal::ScreenLocked, away);
    coordinator.handle_signal(LifecycleSignal::DidEnterBackground, away);

    coordinator.handle_signal(LifecycleSignal::ScreenUnlocked, away + Duration::seconds(10));
    coordinator.handle_signal(LifecycleSignal::DidBecomeActive, away + Duration::seconds(10));

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.phase, Phase::Resting);
    assert_eq!(snapshot.remaining_time_display, "01:00");
    assert_eq!(alarms.pending(), Some(StdDuration::from_secs(90)));
    assert!(coordinator.is_ticking());
}
