//! Background tasks module
//!
//! The session event loop and the timers that feed continuations back into it.

pub mod continuation;
pub mod session;

// Re-export main functions
pub use continuation::spawn_continuation;
pub use session::{Command, Session, SessionEvent, TICK_PERIOD};
