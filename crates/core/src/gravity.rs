//! Gravity resolver - collapses empty gaps beneath settled blocks.
//!
//! Columns are independent. Each column is scanned from the row above the
//! bottom upward; every block drops to the lowest empty row beneath it.
//! Because lower blocks settle first, one pass leaves the grid stable, and a
//! second pass over the output always reports `moved = false`.

use crate::grid::Grid;
use crate::types::Position;

/// Result of one gravity pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityOutcome {
    pub grid: Grid,
    /// Whether any block changed row.
    pub moved: bool,
}

/// Apply gravity to a settled grid (no active block).
pub fn apply_gravity(grid: &Grid) -> GravityOutcome {
    let mut next = grid.clone();
    let mut moved = false;

    if next.height() < 2 {
        return GravityOutcome { grid: next, moved };
    }

    let bottom = next.bottom_row();
    for x in 0..next.width() {
        for y in (0..bottom).rev() {
            let from = Position::new(x, y);
            if !next.is_occupied(from) {
                continue;
            }

            let mut target = y;
            while target < bottom && !next.is_occupied(Position::new(x, target + 1)) {
                target += 1;
            }

            if target != y {
                next.relocate(from, Position::new(x, target));
                moved = true;
            }
        }
    }

    GravityOutcome { grid: next, moved }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_block_falls_to_floor() {
        let grid = Grid::from_rows(&[
            &[2, 0],
            &[0, 0],
            &[0, 0],
        ]);
        let out = apply_gravity(&grid);
        assert!(out.moved);
        assert_eq!(out.grid.to_rows(), vec![vec![0, 0], vec![0, 0], vec![2, 0]]);
        assert!(out.grid.is_consistent());
    }

    #[test]
    fn column_collapses_preserving_order() {
        let grid = Grid::from_rows(&[
            &[8],
            &[0],
            &[4],
            &[0],
            &[2],
        ]);
        let out = apply_gravity(&grid);
        assert!(out.moved);
        assert_eq!(
            out.grid.to_rows(),
            vec![vec![0], vec![0], vec![8], vec![4], vec![2]]
        );
    }

    #[test]
    fn ids_survive_the_fall() {
        let grid = Grid::from_rows(&[&[4], &[0]]);
        let id = grid.get(Position::new(0, 0)).unwrap().id;
        let out = apply_gravity(&grid);
        let landed = out.grid.get(Position::new(0, 1)).unwrap();
        assert_eq!(landed.id, id);
        assert_eq!(landed.y, 1);
    }

    #[test]
    fn resting_grid_reports_no_movement() {
        let grid = Grid::from_rows(&[
            &[0, 0, 0],
            &[0, 4, 0],
            &[2, 8, 0],
        ]);
        let out = apply_gravity(&grid);
        assert!(!out.moved);
        assert_eq!(out.grid, grid);
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let grid = Grid::from_rows(&[
            &[2, 4, 8],
            &[0, 0, 16],
            &[4, 0, 0],
            &[0, 0, 2],
        ]);
        let first = apply_gravity(&grid);
        let second = apply_gravity(&first.grid);
        assert!(first.moved);
        assert!(!second.moved);
        assert_eq!(first.grid, second.grid);
    }

    #[test]
    fn input_grid_is_left_untouched() {
        let grid = Grid::from_rows(&[&[2], &[0]]);
        let snapshot = grid.clone();
        let _ = apply_gravity(&grid);
        assert_eq!(grid, snapshot);
    }
}
