//! Host lifecycle signals

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

/// A one-shot lifecycle event delivered by the host platform
///
/// Each signal is unreliable on its own: screen lock and scene background
/// may arrive in either order, and some platforms never report the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleSignal {
    WillResignActive,
    DidEnterBackground,
    SceneDidEnterBackground,
    DidBecomeActive,
    ScreenLocked,
    ScreenUnlocked,
}

impl LifecycleSignal {
    pub const ALL: [LifecycleSignal; 6] = [
        LifecycleSignal::WillResignActive,
        LifecycleSignal::DidEnterBackground,
        LifecycleSignal::SceneDidEnterBackground,
        LifecycleSignal::DidBecomeActive,
        LifecycleSignal::ScreenLocked,
        LifecycleSignal::ScreenUnlocked,
    ];

    /// Short name accepted on the host console
    pub fn short_name(&self) -> &'static str {
        match self {
            LifecycleSignal::WillResignActive => "resign-active",
            LifecycleSignal::DidEnterBackground => "enter-background",
            LifecycleSignal::SceneDidEnterBackground => "scene-background",
            LifecycleSignal::DidBecomeActive => "become-active",
            LifecycleSignal::ScreenLocked => "lock",
            LifecycleSignal::ScreenUnlocked => "unlock",
        }
    }
}

impl fmt::Display for LifecycleSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for LifecycleSignal {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|signal| {
                signal.short_name().eq_ignore_ascii_case(trimmed)
                    || signal.to_string().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ConsoleError::UnknownCommand(trimmed.to_string()))
    }
}
