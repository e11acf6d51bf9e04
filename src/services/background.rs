//! Background execution grace token
//!
//! When the app resigns active it asks the platform for a short window of
//! background execution so the minimize/lock disambiguation can finish before
//! suspension. Only one window is ever outstanding.

use tracing::{debug, info};

/// Tracks the single outstanding background execution window
#[derive(Debug, Clone, Default)]
pub struct BackgroundTask {
    held: Option<u64>,
    acquired: u64,
    released: u64,
}

impl BackgroundTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a grace window for excursion `generation`
    ///
    /// Returns false without acquiring when a window is already held.
    pub fn acquire(&mut self, generation: u64) -> bool {
        if let Some(current) = self.held {
            debug!(
                "Background task already held for excursion {}, not acquiring for {}",
                current, generation
            );
            return false;
        }

        self.held = Some(generation);
        self.acquired += 1;
        info!("Began background task for excursion {}", generation);
        true
    }

    /// End the held grace window, returning false if none was held
    pub fn release(&mut self) -> bool {
        match self.held.take() {
            Some(generation) => {
                self.released += 1;
                info!("Ended background task for excursion {}", generation);
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Total windows acquired over the lifetime of the app
    pub fn acquired_count(&self) -> u64 {
        self.acquired
    }

    /// Total windows released over the lifetime of the app
    pub fn released_count(&self) -> u64 {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_a_no_op() {
        let mut task = BackgroundTask::new();
        assert!(task.acquire(1));
        assert!(!task.acquire(2));
        assert_eq!(task.acquired_count(), 1);
    }

    #[test]
    fn release_happens_once() {
        let mut task = BackgroundTask::new();
        task.acquire(1);
        assert!(task.release());
        assert!(!task.release());
        assert_eq!(task.released_count(), 1);
        assert!(!task.is_held());
    }

    #[test]
    fn can_reacquire_after_release() {
        let mut task = BackgroundTask::new();
        task.acquire(1);
        task.release();
        assert!(task.acquire(2));
        assert_eq!(task.acquired_count(), 2);
    }
}
