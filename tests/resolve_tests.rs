//! Gravity, merge and settle behaviour on hand-built grids

use falling_2048::core::{apply_gravity, find_and_merge, is_game_over, settle, Grid};
use falling_2048::types::Position;

#[test]
fn test_gravity_closes_gaps_and_keeps_order() {
    let grid = Grid::from_rows(&[
        &[4, 0, 0],
        &[0, 0, 8],
        &[2, 0, 0],
        &[0, 0, 0],
    ]);
    let top_id = grid.get(Position::new(0, 0)).unwrap().id;

    let out = apply_gravity(&grid);

    assert!(out.moved);
    assert_eq!(
        out.grid.to_rows(),
        vec![vec![0, 0, 0], vec![0, 0, 0], vec![4, 0, 0], vec![2, 0, 8]]
    );
    assert_eq!(out.grid.get(Position::new(0, 2)).unwrap().id, top_id);
    assert!(out.grid.is_consistent());
}

#[test]
fn test_gravity_is_idempotent() {
    let grid = Grid::from_rows(&[
        &[2, 0, 16],
        &[0, 4, 0],
        &[0, 0, 0],
        &[8, 0, 0],
    ]);

    let once = apply_gravity(&grid);
    let twice = apply_gravity(&once.grid);

    assert!(once.moved);
    assert!(!twice.moved);
    assert_eq!(once.grid, twice.grid);
}

#[test]
fn test_merge_prefers_down_over_right() {
    // The top-left 2 matches both neighbours; it falls into the one below.
    let grid = Grid::from_rows(&[
        &[2, 2],
        &[2, 8],
    ]);

    let out = find_and_merge(&grid);

    assert_eq!(out.score_gained, 4);
    assert_eq!(out.grid.to_rows(), vec![vec![0, 2], vec![4, 8]]);
    assert_eq!(out.merged_positions.as_slice(), &[Position::new(0, 1)]);
}

#[test]
fn test_merge_right_keeps_left_cell() {
    let grid = Grid::from_rows(&[&[8, 8, 0]]);
    let left_id = grid.get(Position::new(0, 0)).unwrap().id;

    let out = find_and_merge(&grid);

    assert_eq!(out.grid.to_rows(), vec![vec![16, 0, 0]]);
    assert_eq!(out.grid.get(Position::new(0, 0)).unwrap().id, left_id);
    assert_eq!(out.score_gained, 16);
}

#[test]
fn test_each_cell_merges_once_per_pass() {
    let grid = Grid::from_rows(&[&[2, 2, 2, 2]]);

    let out = find_and_merge(&grid);

    assert_eq!(out.grid.to_rows(), vec![vec![4, 0, 4, 0]]);
    assert_eq!(out.score_gained, 8);
    assert_eq!(out.merged_positions.len(), 2);
}

#[test]
fn test_merge_on_stable_grid_is_noop() {
    let grid = Grid::from_rows(&[
        &[0, 0, 0],
        &[2, 4, 2],
        &[4, 2, 4],
    ]);

    let out = find_and_merge(&grid);

    assert!(!out.merged);
    assert_eq!(out.score_gained, 0);
    assert_eq!(out.grid, grid);
}

#[test]
fn test_settle_runs_gravity_between_merges() {
    // 4+4 merge leaves a gap under the 8, which falls onto the new 8 and merges.
    let grid = Grid::from_rows(&[
        &[8, 0],
        &[4, 0],
        &[4, 0],
        &[16, 0],
    ]);

    let res = settle(&grid);

    assert_eq!(res.grid.to_rows(), vec![vec![0, 0], vec![0, 0], vec![0, 0], vec![32, 0]]);
    assert_eq!(res.score_gained, 8 + 16 + 32);
    assert_eq!(res.passes, 4);
    assert!(res.grid.is_consistent());
}

#[test]
fn test_settle_on_quiet_grid_takes_one_pass() {
    let grid = Grid::from_rows(&[&[0, 0], &[2, 4]]);

    let res = settle(&grid);

    assert_eq!(res.passes, 1);
    assert_eq!(res.score_gained, 0);
    assert!(res.merged_positions.is_empty());
    assert_eq!(res.grid, grid);
}

#[test]
fn test_settle_output_is_fully_resolved() {
    let grid = Grid::from_rows(&[
        &[2, 0, 2, 0],
        &[0, 4, 0, 8],
        &[2, 4, 2, 8],
        &[2, 8, 4, 16],
    ]);

    let res = settle(&grid);

    assert!(!apply_gravity(&res.grid).moved);
    assert!(!find_and_merge(&res.grid).merged);
    assert!(res.grid.block_count() < grid.block_count());
}

#[test]
fn test_game_over_iff_spawn_row_occupied() {
    let clear = Grid::from_rows(&[&[0, 0, 0], &[2, 4, 8]]);
    assert!(!is_game_over(&clear));

    let topped = Grid::from_rows(&[&[0, 2, 0], &[2, 4, 8]]);
    assert!(is_game_over(&topped));
}
