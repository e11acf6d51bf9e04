//! Alarm state

use serde::{Deserialize, Serialize};

/// Whether the rest-over alarm is currently showing
///
/// Raised when a running countdown reaches zero, lowered only by a dismissal
/// (explicit or automatic) or by ending the workout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmState {
    pub is_active: bool,
}

impl AlarmState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the alarm, returning true if it was not already active
    pub fn raise(&mut self) -> bool {
        let was_active = self.is_active;
        self.is_active = true;
        !was_active
    }

    /// Lower the alarm, returning true if it was active
    pub fn clear(&mut self) -> bool {
        let was_active = self.is_active;
        self.is_active = false;
        was_active
    }
}
