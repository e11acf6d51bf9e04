//! Per-excursion bookkeeping for background transitions

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What has been observed since the app last resigned active
///
/// Reset on every return to the foreground and on every new resign-active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransitionContext {
    pub resign_active_time: Option<DateTime<Utc>>,
    pub was_screen_locked: bool,
    pub is_processing_background_transition: bool,
}

impl TransitionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new excursion that began at `now`
    pub fn begin(&mut self, now: DateTime<Utc>) {
        self.resign_active_time = Some(now);
        self.was_screen_locked = false;
        self.is_processing_background_transition = true;
    }

    /// Forget the current excursion
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A transition is in flight and no screen lock has been seen for it
    pub fn awaiting_lock_decision(&self) -> bool {
        self.is_processing_background_transition && !self.was_screen_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_lock() {
        let mut context = TransitionContext {
            was_screen_locked: true,
            ..TransitionContext::default()
        };
        let now = Utc::now();
        context.begin(now);

        assert_eq!(context.resign_active_time, Some(now));
        assert!(context.awaiting_lock_decision());
    }

    #[test]
    fn reset_returns_to_default() {
        let mut context = TransitionContext::new();
        context.begin(Utc::now());
        context.was_screen_locked = true;
        context.reset();
        assert_eq!(context, TransitionContext::default());
    }
}
