//! External collaborator module
//!
//! Alarm delivery and the background execution window the platform grants
//! while the app is moving to the background.

pub mod background;
pub mod notifier;
#[cfg(test)]
pub mod recording;

// Re-export main types
pub use background::BackgroundTask;
pub use notifier::{AlarmRequest, AlarmScheduler, TokioAlarmScheduler, REST_ALARM_ID};
