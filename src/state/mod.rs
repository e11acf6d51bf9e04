//! State management module
//!
//! Countdown and alarm state, plus the timer that owns the countdown
//! arithmetic.

pub mod alarm_state;
pub mod duration;
pub mod rest_timer;
pub mod timer_state;

// Re-export main types
pub use alarm_state::AlarmState;
pub use duration::RestDuration;
pub use rest_timer::{AlarmCommand, RestTimer, TickOutcome};
pub use timer_state::TimerState;
