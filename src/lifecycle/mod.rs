//! Lifecycle module
//!
//! Turns raw host lifecycle signals into timer and alarm transitions.

pub mod continuation;
pub mod coordinator;
pub mod signal;
pub mod snapshot;
pub mod transition;

// Re-export main types
pub use continuation::{Continuation, ContinuationKind, CoordinatorSettings, Deferred};
pub use coordinator::LifecycleCoordinator;
pub use signal::LifecycleSignal;
pub use snapshot::{Phase, TimerSnapshot};
pub use transition::TransitionContext;
