//! Gym Rest Timer - a lifecycle-aware rest countdown for gym workouts
//!
//! This library owns the rest countdown and the state machine that keeps it
//! correct while the app moves between foreground, background and a locked
//! screen. Alarm delivery is injected through [`AlarmScheduler`].

pub mod config;
pub mod console;
pub mod error;
pub mod lifecycle;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use lifecycle::{LifecycleCoordinator, LifecycleSignal, Phase, TimerSnapshot};
pub use services::{AlarmScheduler, TokioAlarmScheduler};
pub use state::{RestDuration, RestTimer};
pub use tasks::{Command, Session, SessionEvent};
pub use utils::signals::shutdown_signal;
