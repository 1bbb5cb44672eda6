//! Settling a grid after a lock: gravity and merge passes in strict
//! alternation until neither changes anything, then the game-over check.

use crate::gravity::apply_gravity;
use crate::grid::Grid;
use crate::merge::find_and_merge;
use crate::types::Position;

/// Outcome of settling a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Gravity-stable grid with no pending merges.
    pub grid: Grid,
    /// Number of gravity+merge round trips (at least 1).
    pub passes: u32,
    /// Score from every merge pass.
    pub score_gained: u32,
    /// Merge survivors of every pass, in pass then scan order.
    pub merged_positions: Vec<Position>,
}

/// Run `{ gravity; merge }` until a round trip changes nothing.
///
/// Terminates: every merge removes a block and gravity alone is idempotent.
pub fn settle(grid: &Grid) -> Resolution {
    let mut current = grid.clone();
    let mut passes = 0;
    let mut score_gained = 0;
    let mut merged_positions = Vec::new();

    loop {
        passes += 1;
        let gravity = apply_gravity(&current);
        let merge = find_and_merge(&gravity.grid);

        score_gained += merge.score_gained;
        merged_positions.extend_from_slice(&merge.merged_positions);
        current = merge.grid;

        if !gravity.moved && !merge.merged {
            break;
        }
    }

    Resolution {
        grid: current,
        passes,
        score_gained,
        merged_positions,
    }
}

/// Game-over detector: true iff the spawn row holds a block.
///
/// Only meaningful on a settled grid with no active block.
pub fn is_game_over(grid: &Grid) -> bool {
    grid.is_spawn_row_occupied()
}
