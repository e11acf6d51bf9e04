//! Rest-over alarm delivery
//!
//! The coordinator only needs "schedule a one-shot alarm after N seconds" and
//! "cancel the pending alarm"; everything else about delivery belongs to the
//! host platform behind [`AlarmScheduler`].

use std::{
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{runtime::Handle, task::JoinHandle, time::sleep};
use tracing::{debug, info, warn};

use crate::error::NotifierError;

/// Identifier shared by every rest alarm, so scheduling replaces rather than stacks
pub const REST_ALARM_ID: &str = "GYM_REST_TIMER";

/// Content and delivery options for a rest-over alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmRequest {
    pub identifier: String,
    pub title: String,
    pub subtitle: String,
    pub delay: Duration,
    /// Play even when the device is muted
    pub critical_sound: bool,
    /// Highest interruption priority the platform allows
    pub time_sensitive: bool,
}

impl AlarmRequest {
    /// The alert raised when a rest period is over
    pub fn rest_over(delay: Duration) -> Self {
        Self {
            identifier: REST_ALARM_ID.to_string(),
            title: "Rest Over!".to_string(),
            subtitle: "Time for your next set.".to_string(),
            delay,
            critical_sound: true,
            time_sensitive: true,
        }
    }
}

/// Notification collaborator implemented by the host
pub trait AlarmScheduler: Send {
    /// Ask for permission to deliver alerts, returning whether it was granted
    fn request_authorization(&mut self) -> Result<bool, NotifierError>;

    /// Cancel any pending alarm, then arrange for `request` to fire once
    fn schedule_alarm(&mut self, request: &AlarmRequest) -> Result<(), NotifierError>;

    /// Remove any pending alarm; safe to call when none is pending
    fn cancel_alarm(&mut self) -> Result<(), NotifierError>;
}

/// Host scheduler that delivers alerts from a tokio timer task
#[derive(Debug)]
pub struct TokioAlarmScheduler {
    permitted: bool,
    authorized: bool,
    pending: Option<JoinHandle<()>>,
    delivered: Arc<AtomicU64>,
}

impl TokioAlarmScheduler {
    /// Create a scheduler; `permitted` is what the user answers when asked
    pub fn new(permitted: bool) -> Self {
        Self {
            permitted,
            authorized: false,
            pending: None,
            delivered: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of alerts delivered so far
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::SeqCst)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl AlarmScheduler for TokioAlarmScheduler {
    fn request_authorization(&mut self) -> Result<bool, NotifierError> {
        self.authorized = self.permitted;
        if self.authorized {
            info!("Notification permission granted");
        } else {
            warn!("Notification permission denied, alarms will only show in-app");
        }
        Ok(self.authorized)
    }

    fn schedule_alarm(&mut self, request: &AlarmRequest) -> Result<(), NotifierError> {
        self.cancel_alarm()?;

        if !self.authorized {
            return Err(NotifierError::NotAuthorized);
        }

        let handle = Handle::try_current()
            .map_err(|e| NotifierError::Unavailable(e.to_string()))?;

        let delivered = Arc::clone(&self.delivered);
        let alert = request.clone();
        self.pending = Some(handle.spawn(async move {
            sleep(alert.delay).await;
            delivered.fetch_add(1, Ordering::SeqCst);
            info!("[{}] {} {}", alert.identifier, alert.title, alert.subtitle);
            if alert.critical_sound {
                let mut stderr = std::io::stderr();
                if let Err(e) = stderr.write_all(b"\x07").and_then(|()| stderr.flush()) {
                    debug!("Could not ring terminal bell: {}", e);
                }
            }
        }));

        info!("Scheduled rest alarm in {:?}", request.delay);
        Ok(())
    }

    fn cancel_alarm(&mut self) -> Result<(), NotifierError> {
        if let Some(task) = self.pending.take() {
            task.abort();
            debug!("Cancelled pending rest alarm");
        }
        Ok(())
    }
}

impl Drop for TokioAlarmScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
