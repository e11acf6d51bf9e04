//! Delayed work requested by the coordinator

use std::time::Duration;

/// What to do when a deferred continuation comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuationKind {
    /// No screen lock arrived during the grace window: treat as a minimize
    ConfirmMinimize,
    /// End the background execution window
    ReleaseBackgroundTask,
}

/// A continuation tagged with the excursion that produced it
///
/// The coordinator drops continuations whose generation is no longer current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    pub generation: u64,
    pub kind: ContinuationKind,
}

/// Request to run `continuation` after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub continuation: Continuation,
}

/// Grace windows used while disambiguating background transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorSettings {
    /// How long to wait for a late screen-lock signal
    pub minimize_grace: Duration,
    /// Delay before ending the background execution window
    pub background_cleanup: Duration,
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            minimize_grace: Duration::from_millis(200),
            background_cleanup: Duration::from_secs(1),
        }
    }
}
