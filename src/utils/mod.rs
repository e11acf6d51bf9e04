//! Utility functions module
//!
//! This module contains utility functions used throughout the application.

pub mod clock;
pub mod format;
pub mod signals;

// Re-export main functions
pub use clock::{Clock, ManualClock, SystemClock};
pub use format::format_mmss;
pub use signals::shutdown_signal;
