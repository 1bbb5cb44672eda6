//! Held fast-fall key tracking for terminal environments.
//!
//! Terminals without the keyboard enhancement protocol never report key
//! releases; they only auto-repeat presses while a key is held. In that mode a
//! held key is considered released once no press or repeat has arrived for
//! the release timeout. The first real release event switches the tracker to
//! release-driven mode for the rest of the session.

use crate::types::GameAction;

// Longer than typical auto-repeat intervals, shorter than a deliberate tap-and-wait.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 200;

#[derive(Debug, Clone)]
pub struct FastFallKey {
    held: bool,
    idle_ms: u32,
    key_release_timeout_ms: u32,
    sees_releases: bool,
}

impl FastFallKey {
    pub fn new() -> Self {
        Self {
            held: false,
            idle_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            sees_releases: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Press or auto-repeat. Only the first press starts fast fall.
    pub fn press(&mut self) -> Option<GameAction> {
        self.idle_ms = 0;
        if self.held {
            return None;
        }
        self.held = true;
        Some(GameAction::StartFastFall)
    }

    pub fn release(&mut self) -> Option<GameAction> {
        self.sees_releases = true;
        self.idle_ms = 0;
        if !self.held {
            return None;
        }
        self.held = false;
        Some(GameAction::StopFastFall)
    }

    /// Advance the idle timer; auto-releases when the terminal sends no releases.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        if !self.held || self.sees_releases {
            return None;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms <= self.key_release_timeout_ms {
            return None;
        }
        self.held = false;
        self.idle_ms = 0;
        Some(GameAction::StopFastFall)
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.idle_ms = 0;
    }
}

impl Default for FastFallKey {
    fn default() -> Self {
        Self::new()
    }
}
