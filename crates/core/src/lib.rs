//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, storage backends, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted random source) produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: tier-sized grid of numbered blocks
//! - [`movement`]: bounds/occupancy predicates for the falling block
//! - [`gravity`]: collapses gaps beneath settled blocks
//! - [`merge`]: one deterministic pass of equal-value merges
//! - [`resolve`]: gravity/merge alternation and the game-over detector
//! - [`game_state`]: the turn controller
//! - [`rng`]: uniform random sources and weighted spawn sampling
//! - [`store`]: best-score persistence contract
//!
//! # Game Rules
//!
//! - **Spawning**: a block of `next_value` appears at the top of the centre column
//! - **Movement**: left/right/down, blocked by walls and blocks, never by values
//! - **Locking**: a block that cannot fall further is written into the grid
//! - **Resolving**: gravity and merge passes alternate until nothing changes;
//!   each cell merges at most once per pass, downward merges win over rightward
//! - **Scoring**: every merge scores its resulting value
//! - **Game over**: any settled block in the spawn row, or a blocked spawn cell
//!
//! # Example
//!
//! ```
//! use falling_2048_core::{FixedSequence, GameState, MemoryStore};
//! use falling_2048_types::{Difficulty, GameAction, Position};
//!
//! // Every draw yields a 2.
//! let rng = FixedSequence::constant(0.0);
//! let mut game = GameState::with_parts(Difficulty::Easy, rng, MemoryStore::new());
//! game.start();
//!
//! // Two 2s dropped into the same column merge into a 4.
//! game.apply_action(GameAction::HardDrop);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.grid().get(Position::new(2, 7)).map(|b| b.value), Some(4));
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system: call
//! [`GameState::tick`](game_state::GameState::tick) every frame with elapsed
//! time. Fall intervals come from the difficulty tier.

pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod merge;
pub mod movement;
pub mod resolve;
pub mod rng;
pub mod snapshot;
pub mod store;

pub use falling_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, Phase};
pub use gravity::{apply_gravity, GravityOutcome};
pub use grid::{Block, Cell, Grid};
pub use merge::{find_and_merge, MergeOutcome};
pub use movement::{can_move_down, can_move_left, can_move_right, landing_row};
pub use resolve::{is_game_over, settle, Resolution};
pub use rng::{sample_spawn_value, FixedSequence, RandomSource, SimpleRng};
pub use snapshot::{GameSnapshot, LockReport, TimersSnapshot, TurnEvent};
pub use store::{BestScoreStore, MemoryStore, StoreError};
