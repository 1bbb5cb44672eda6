use crate::game_state::Phase;
use crate::grid::{Block, Grid};
use crate::types::{Difficulty, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimersSnapshot {
    pub fall_ms: u32,
    pub fall_interval_ms: u32,
    pub spawn_delay_ms: u32,
}

/// Owned, fully-resolved view of a [`GameState`](crate::GameState).
///
/// Observers only ever see states between transitions, so the grid here is
/// always gravity-stable with no pending merges.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub difficulty: Difficulty,
    pub grid: Grid,
    pub active: Option<Block>,
    /// Row the active block would land on if hard-dropped.
    pub landing_y: Option<u8>,
    pub next_value: u32,
    pub score: u32,
    pub best_score: u32,
    pub phase: Phase,
    pub paused: bool,
    pub game_over: bool,
    pub fast_falling: bool,
    pub store_degraded: bool,
    pub episode_id: u32,
    pub blocks_spawned: u32,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = Grid::for_difficulty(self.difficulty);
        self.active = None;
        self.landing_y = None;
        self.next_value = 0;
        self.score = 0;
        self.best_score = 0;
        self.phase = Phase::Idle;
        self.paused = false;
        self.game_over = false;
        self.fast_falling = false;
        self.store_degraded = false;
        self.episode_id = 0;
        self.blocks_spawned = 0;
        self.timers = TimersSnapshot::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Value shown at a cell, counting the active block.
    pub fn value_at(&self, pos: Position) -> Option<u32> {
        if let Some(active) = self.active {
            if active.position() == pos {
                return Some(active.value);
            }
        }
        self.grid.get(pos).map(|b| b.value)
    }

    /// Largest value on the board (0 when empty).
    pub fn max_value(&self) -> u32 {
        self.grid
            .blocks()
            .chain(self.active.iter())
            .map(|b| b.value)
            .max()
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            difficulty: Difficulty::default(),
            grid: Grid::default(),
            active: None,
            landing_y: None,
            next_value: 0,
            score: 0,
            best_score: 0,
            phase: Phase::Idle,
            paused: false,
            game_over: false,
            fast_falling: false,
            store_degraded: false,
            episode_id: 0,
            blocks_spawned: 0,
            timers: TimersSnapshot::default(),
        };
        s.clear();
        s
    }
}

/// Report of one lock-and-resolve sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockReport {
    pub block_id: u32,
    pub value: u32,
    /// Cell the block was written to before settling.
    pub position: Position,
    /// Gravity+merge round trips run.
    pub passes: u32,
    pub merged_positions: Vec<Position>,
    pub score_gained: u32,
    /// Score after the sequence.
    pub score: u32,
    pub game_over: bool,
}

/// Core-side event emitted by a turn. Consumed by observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    Locked(LockReport),
    /// Spawn cell was occupied; the game ended without a new block.
    SpawnBlocked { score: u32 },
}

impl TurnEvent {
    pub fn ended_game(&self) -> bool {
        match self {
            TurnEvent::Locked(report) => report.game_over,
            TurnEvent::SpawnBlocked { .. } => true,
        }
    }
}
