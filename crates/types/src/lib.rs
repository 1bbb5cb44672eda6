//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal view, event log).
//!
//! # Grid Dimensions
//!
//! The grid size is fixed per difficulty tier:
//!
//! | Tier   | Width | Height | Spawn cell |
//! |--------|-------|--------|------------|
//! | Easy   | 5     | 8      | (2, 0)     |
//! | Medium | 5     | 10     | (2, 0)     |
//! | Hard   | 6     | 12     | (3, 0)     |
//!
//! Row `0` is the spawn row; `y` grows downward.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `RESET_SPAWN_DELAY_MS` | 300 | Delay before the first block of a reset session |
//!
//! # Examples
//!
//! ```
//! use falling_2048_types::{Difficulty, GameAction};
//!
//! let tier = Difficulty::from_str("hard").unwrap();
//! let config = tier.config();
//! assert_eq!((config.width, config.height), (6, 12));
//! assert_eq!(config.spawn_x(), 3);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//! ```

/// Widest grid of any tier.
pub const MAX_GRID_WIDTH: u8 = 6;

/// Tallest grid of any tier.
pub const MAX_GRID_HEIGHT: u8 = 12;

/// Upper bound on cells in a grid; sizes fixed-capacity storage.
pub const MAX_CELLS: usize = (MAX_GRID_WIDTH as usize) * (MAX_GRID_HEIGHT as usize);

/// Upper bound on merges in one pass (each merge consumes two cells).
pub const MAX_MERGES_PER_PASS: usize = MAX_CELLS / 2;

/// The row new blocks spawn into; any settled block here ends the game.
pub const SPAWN_ROW: u8 = 0;

/// Smallest block value.
pub const MIN_BLOCK_VALUE: u32 = 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between `reset` and the first spawn of the new session.
pub const RESET_SPAWN_DELAY_MS: u32 = 300;

/// A cell coordinate. `x` is the column, `y` the row (0 = top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Per-tier tuning: grid shape, fall cadence and spawn distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    pub width: u8,
    pub height: u8,
    /// Milliseconds per automatic one-row fall.
    pub fall_interval_ms: u32,
    /// Milliseconds per fall step while fast fall is held.
    pub fast_fall_interval_ms: u32,
    /// `(value, weight)` pairs; weights sum to 1.0.
    pub spawn_weights: &'static [(u32, f64)],
}

impl DifficultyConfig {
    /// Column blocks spawn into (horizontal centre, rounding down).
    pub fn spawn_x(&self) -> u8 {
        self.width / 2
    }

    /// The spawn value with the largest weight (first one on ties).
    pub fn heaviest_value(&self) -> u32 {
        let mut best = (MIN_BLOCK_VALUE, f64::MIN);
        for &(value, weight) in self.spawn_weights {
            if weight > best.1 {
                best = (value, weight);
            }
        }
        best.0
    }
}

static EASY_WEIGHTS: [(u32, f64); 2] = [(2, 0.75), (4, 0.25)];
static MEDIUM_WEIGHTS: [(u32, f64); 3] = [(2, 0.75), (4, 0.20), (8, 0.05)];
static HARD_WEIGHTS: [(u32, f64); 4] = [(2, 0.60), (4, 0.25), (8, 0.10), (16, 0.05)];

/// Difficulty tiers. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Tuning for this tier.
    pub fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                width: 5,
                height: 8,
                fall_interval_ms: 1000,
                fast_fall_interval_ms: 50,
                spawn_weights: &EASY_WEIGHTS,
            },
            Difficulty::Medium => DifficultyConfig {
                width: 5,
                height: 10,
                fall_interval_ms: 800,
                fast_fall_interval_ms: 50,
                spawn_weights: &MEDIUM_WEIGHTS,
            },
            Difficulty::Hard => DifficultyConfig {
                width: 6,
                height: 12,
                fall_interval_ms: 550,
                fast_fall_interval_ms: 40,
                spawn_weights: &HARD_WEIGHTS,
            },
        }
    }

    /// Parse tier from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_2048_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("Easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("MEDIUM"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("insane"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Lowercase name, also used as the persistence key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Player commands. These are the only mutation entry points besides `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the falling block one column left
    MoveLeft,
    /// Move the falling block one column right
    MoveRight,
    /// Drop the falling block to its landing row and lock it
    HardDrop,
    /// Switch the automatic fall to the fast interval
    StartFastFall,
    /// Switch the automatic fall back to the normal interval
    StopFastFall,
    /// Toggle pause state
    TogglePause,
    /// Start a new session at the same difficulty (also restarts after game over)
    Reset,
}

impl GameAction {
    /// Parse action from string
    ///
    /// `restart` is accepted as an alias of `reset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Reset));
    /// assert_eq!(GameAction::from_str("rotateCw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "harddrop" => Some(GameAction::HardDrop),
            "startfastfall" => Some(GameAction::StartFastFall),
            "stopfastfall" => Some(GameAction::StopFastFall),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "reset" | "restart" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::HardDrop => "hardDrop",
            GameAction::StartFastFall => "startFastFall",
            GameAction::StopFastFall => "stopFastFall",
            GameAction::TogglePause => "togglePause",
            GameAction::Reset => "reset",
        }
    }
}
