//! Frame throttling for static screens.
//!
//! While a block is falling every frame is drawn. Paused, game-over and
//! spawn-delay screens only change on input, so they are redrawn when their
//! content changes and otherwise at most once per interval.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::{GameSnapshot, Phase};

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// Non-static frames always render. Static frames render on fingerprint
    /// change, otherwise at most once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let due = !self.has_rendered
            || !is_static
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Convenience wrapper deriving both inputs from a snapshot.
    pub fn should_render_snapshot(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        self.should_render(now_ms, snapshot_fingerprint(snap), is_static(snap))
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

/// Nothing moves on screen without input.
pub fn is_static(snap: &GameSnapshot) -> bool {
    snap.paused || snap.game_over || snap.phase != Phase::Falling
}

/// Hash of everything the view draws.
pub fn snapshot_fingerprint(snap: &GameSnapshot) -> u64 {
    let mut h = DefaultHasher::new();
    snap.difficulty.hash(&mut h);
    snap.score.hash(&mut h);
    snap.best_score.hash(&mut h);
    snap.next_value.hash(&mut h);
    snap.paused.hash(&mut h);
    snap.game_over.hash(&mut h);
    snap.store_degraded.hash(&mut h);
    snap.episode_id.hash(&mut h);
    snap.landing_y.hash(&mut h);
    for block in snap.grid.blocks().chain(snap.active.iter()) {
        (block.x, block.y, block.value, block.merging).hash(&mut h);
    }
    h.finish()
}
