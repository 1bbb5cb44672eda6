//! Movement rules for the falling block.
//!
//! Movement is blocked purely by bounds and occupancy. Values are never
//! compared here: merging only happens after a block locks.

use crate::grid::{Block, Grid};
use crate::types::Position;

/// Check if the block can fall one row
pub fn can_move_down(grid: &Grid, block: &Block) -> bool {
    if block.y >= grid.bottom_row() {
        return false;
    }
    !grid.is_occupied(Position::new(block.x, block.y + 1))
}

/// Check if the block can shift one column left
pub fn can_move_left(grid: &Grid, block: &Block) -> bool {
    if block.x == 0 {
        return false;
    }
    !grid.is_occupied(Position::new(block.x - 1, block.y))
}

/// Check if the block can shift one column right
pub fn can_move_right(grid: &Grid, block: &Block) -> bool {
    if block.x + 1 >= grid.width() {
        return false;
    }
    !grid.is_occupied(Position::new(block.x + 1, block.y))
}

/// Lowest row the block reaches by falling straight down.
///
/// Returns the block's own row when it is already resting.
pub fn landing_row(grid: &Grid, block: &Block) -> u8 {
    let mut probe = *block;
    while can_move_down(grid, &probe) {
        probe.y += 1;
    }
    probe.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_at(x: u8, y: u8) -> Block {
        Block::new(99, 2, Position::new(x, y))
    }

    #[test]
    fn edges_block_movement_on_empty_grid() {
        let grid = Grid::new(5, 8);
        assert!(!can_move_left(&grid, &block_at(0, 3)));
        assert!(!can_move_right(&grid, &block_at(4, 3)));
        assert!(!can_move_down(&grid, &block_at(2, 7)));

        assert!(can_move_left(&grid, &block_at(1, 3)));
        assert!(can_move_right(&grid, &block_at(3, 3)));
        assert!(can_move_down(&grid, &block_at(2, 6)));
    }

    #[test]
    fn neighbours_block_movement_regardless_of_value() {
        let grid = Grid::from_rows(&[
            &[0, 0, 0],
            &[2, 0, 2],
            &[0, 2, 0],
        ]);
        let block = block_at(1, 1);
        assert!(!can_move_left(&grid, &block));
        assert!(!can_move_right(&grid, &block));
        assert!(!can_move_down(&grid, &block));
    }

    #[test]
    fn landing_row_stops_on_stack() {
        let grid = Grid::from_rows(&[
            &[0, 0, 0],
            &[0, 0, 0],
            &[0, 0, 0],
            &[0, 4, 0],
        ]);
        assert_eq!(landing_row(&grid, &block_at(1, 0)), 2);
        assert_eq!(landing_row(&grid, &block_at(0, 0)), 3);
        assert_eq!(landing_row(&grid, &block_at(1, 2)), 2);
    }
}
