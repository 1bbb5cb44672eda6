//! Merge resolver - one deterministic pass of equal-value merges.
//!
//! Cells are visited bottom row to top row, left to right within a row. For
//! each unprocessed block:
//!
//! 1. If the block below has the same value and is unprocessed, the current
//!    block merges down into it (the lower block keeps its cell and id).
//! 2. Otherwise, if the block to the right has the same value and is
//!    unprocessed, it merges into the current block (current keeps its cell).
//!
//! Both cells of a merge are marked processed, so every cell takes part in at
//! most one merge per pass. A merged value that now matches a neighbour waits
//! for the next pass.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Position, MAX_CELLS, MAX_MERGES_PER_PASS};

/// Result of one merge pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub grid: Grid,
    pub merged: bool,
    /// Sum of the resulting (doubled) values.
    pub score_gained: u32,
    /// Surviving cell of every merge, in scan order.
    pub merged_positions: ArrayVec<Position, MAX_MERGES_PER_PASS>,
}

/// Cells touched by a merge during the current pass.
struct Processed {
    width: usize,
    flags: [bool; MAX_CELLS],
}

impl Processed {
    fn new(width: u8) -> Self {
        Self {
            width: width as usize,
            flags: [false; MAX_CELLS],
        }
    }

    fn contains(&self, pos: Position) -> bool {
        self.flags[pos.y as usize * self.width + pos.x as usize]
    }

    fn insert(&mut self, pos: Position) {
        self.flags[pos.y as usize * self.width + pos.x as usize] = true;
    }
}

/// Run one merge pass over a gravity-stable grid.
pub fn find_and_merge(grid: &Grid) -> MergeOutcome {
    let mut next = grid.clone();
    let mut processed = Processed::new(next.width());
    let mut score_gained: u32 = 0;
    let mut merged_positions = ArrayVec::new();

    let width = next.width();
    let bottom = next.bottom_row();

    for y in (0..=bottom).rev() {
        for x in 0..width {
            let here = Position::new(x, y);
            let Some(block) = next.get(here).copied() else {
                continue;
            };
            if processed.contains(here) {
                continue;
            }

            // Vertical first.
            if y < bottom {
                let below_pos = Position::new(x, y + 1);
                if let Some(mut below) = next.get(below_pos).copied() {
                    if below.value == block.value && !processed.contains(below_pos) {
                        below.value *= 2;
                        below.merging = true;
                        score_gained += below.value;
                        next.set(below_pos, Some(below));
                        next.take(here);
                        merged_positions.push(below_pos);
                        processed.insert(here);
                        processed.insert(below_pos);
                        continue;
                    }
                }
            }

            if x + 1 < width {
                let right_pos = Position::new(x + 1, y);
                if let Some(right) = next.get(right_pos).copied() {
                    if right.value == block.value && !processed.contains(right_pos) {
                        let mut merged = block;
                        merged.value *= 2;
                        merged.merging = true;
                        score_gained += merged.value;
                        next.set(here, Some(merged));
                        next.take(right_pos);
                        merged_positions.push(here);
                        processed.insert(here);
                        processed.insert(right_pos);
                    }
                }
            }
        }
    }

    MergeOutcome {
        grid: next,
        merged: !merged_positions.is_empty(),
        score_gained,
        merged_positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_pair_merges_into_lower_cell() {
        let grid = Grid::from_rows(&[
            &[0, 2, 0],
            &[0, 2, 0],
        ]);
        let lower_id = grid.get(Position::new(1, 1)).unwrap().id;

        let out = find_and_merge(&grid);
        assert!(out.merged);
        assert_eq!(out.score_gained, 4);
        assert_eq!(out.grid.to_rows(), vec![vec![0, 0, 0], vec![0, 4, 0]]);
        assert_eq!(out.merged_positions.as_slice(), &[Position::new(1, 1)]);

        let survivor = out.grid.get(Position::new(1, 1)).unwrap();
        assert_eq!(survivor.id, lower_id);
        assert!(survivor.merging);
    }

    #[test]
    fn horizontal_pair_merges_into_left_cell() {
        let grid = Grid::from_rows(&[&[0, 4, 4]]);
        let left_id = grid.get(Position::new(1, 0)).unwrap().id;

        let out = find_and_merge(&grid);
        assert_eq!(out.grid.to_rows(), vec![vec![0, 8, 0]]);
        assert_eq!(out.score_gained, 8);
        assert_eq!(out.grid.get(Position::new(1, 0)).unwrap().id, left_id);
    }

    #[test]
    fn downward_merge_beats_rightward() {
        // (0,0) matches both the block below and the block to its right.
        let grid = Grid::from_rows(&[
            &[2, 2],
            &[2, 8],
        ]);
        let out = find_and_merge(&grid);
        assert_eq!(out.grid.to_rows(), vec![vec![0, 2], vec![4, 8]]);
        assert_eq!(out.score_gained, 4);
    }

    #[test]
    fn chained_merge_waits_for_next_pass() {
        // Bottom pair makes 4, which would match the 4 above it.
        let grid = Grid::from_rows(&[
            &[4, 0],
            &[2, 2],
        ]);
        let first = find_and_merge(&grid);
        assert_eq!(first.grid.to_rows(), vec![vec![4, 0], vec![4, 0]]);
        assert_eq!(first.score_gained, 4);

        let second = find_and_merge(&first.grid);
        assert_eq!(second.grid.to_rows(), vec![vec![0, 0], vec![8, 0]]);
        assert_eq!(second.score_gained, 8);
    }

    #[test]
    fn triple_in_a_row_merges_leftmost_pair_only() {
        let grid = Grid::from_rows(&[&[2, 2, 2]]);
        let out = find_and_merge(&grid);
        assert_eq!(out.grid.to_rows(), vec![vec![4, 0, 2]]);
        assert_eq!(out.merged_positions.len(), 1);
    }

    #[test]
    fn processed_cell_is_not_reused() {
        // Bottom-left pair merges horizontally first; the 2 above (0,1)
        // cannot then merge into the processed cell.
        let grid = Grid::from_rows(&[
            &[4, 0],
            &[2, 2],
        ]);
        let out = find_and_merge(&grid);
        assert_eq!(out.merged_positions.as_slice(), &[Position::new(0, 1)]);
        assert_eq!(out.grid.get(Position::new(0, 0)).unwrap().value, 4);
    }

    #[test]
    fn unequal_neighbours_do_nothing() {
        let grid = Grid::from_rows(&[
            &[2, 4],
            &[8, 16],
        ]);
        let out = find_and_merge(&grid);
        assert!(!out.merged);
        assert_eq!(out.score_gained, 0);
        assert_eq!(out.grid, grid);
    }

    #[test]
    fn score_is_sum_of_resulting_values() {
        let grid = Grid::from_rows(&[
            &[0, 0, 0, 0],
            &[8, 0, 0, 0],
            &[8, 0, 2, 2],
        ]);
        let out = find_and_merge(&grid);
        assert_eq!(out.score_gained, 16 + 4);
        assert_eq!(out.merged_positions.len(), 2);
    }
}
