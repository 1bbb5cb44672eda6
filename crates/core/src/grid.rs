//! Grid module - the settled playfield
//!
//! The grid is a `width x height` array of optional blocks, sized by the
//! difficulty tier. Cells are stored row-major in a fixed-capacity array so
//! that cloning a grid for a resolver pass never touches the heap.
//! Coordinates: (x, y) where x is the column and y the row, y = 0 is the
//! spawn row at the top.
//!
//! Out-of-bounds access is a programming error and panics; callers check
//! [`Grid::contains`] or go through the movement predicates first.

use arrayvec::ArrayVec;

use crate::types::{Difficulty, Position, MAX_CELLS, SPAWN_ROW};

/// A numbered tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    /// Unique within a session; survives moves, lost when merged away.
    pub id: u32,
    /// Power of two, at least 2.
    pub value: u32,
    pub x: u8,
    pub y: u8,
    /// Freshly spawned (presentation hint).
    pub is_new: bool,
    /// Produced by a merge in the latest resolution (presentation hint).
    pub merging: bool,
}

impl Block {
    pub fn new(id: u32, value: u32, pos: Position) -> Self {
        debug_assert!(value >= 2 && value.is_power_of_two(), "bad block value {}", value);
        Self {
            id,
            value,
            x: pos.x,
            y: pos.y,
            is_new: false,
            merging: false,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// A grid cell: empty or holding one block.
pub type Cell = Option<Block>;

/// The settled playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: ArrayVec<Cell, MAX_CELLS>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// If either dimension is zero or the grid exceeds [`MAX_CELLS`].
    pub fn new(width: u8, height: u8) -> Self {
        let len = (width as usize) * (height as usize);
        assert!(width > 0 && height > 0, "grid must not be empty");
        assert!(len <= MAX_CELLS, "{}x{} grid exceeds capacity", width, height);

        let mut cells = ArrayVec::new();
        for _ in 0..len {
            cells.push(None);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Empty grid shaped for a difficulty tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let config = difficulty.config();
        Self::new(config.width, config.height)
    }

    /// Build a grid from rows of values, `0` meaning empty.
    ///
    /// Rows are listed top to bottom. Block ids are assigned 1, 2, 3...
    /// in row-major order. Used for fixtures and replays.
    ///
    /// ```
    /// use falling_2048_core::Grid;
    /// use falling_2048_types::Position;
    ///
    /// let grid = Grid::from_rows(&[
    ///     &[0, 0, 0],
    ///     &[2, 0, 4],
    /// ]);
    /// assert_eq!(grid.get(Position::new(2, 1)).map(|b| b.value), Some(4));
    /// ```
    ///
    /// # Panics
    ///
    /// If rows are ragged or a non-zero value is not a power of two >= 2.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u8;
        let mut grid = Self::new(width, height);
        let mut next_id = 1;

        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width as usize, "ragged row {}", y);
            for (x, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                assert!(value >= 2 && value.is_power_of_two(), "bad value {}", value);
                let pos = Position::new(x as u8, y as u8);
                grid.set(pos, Some(Block::new(next_id, value, pos)));
                next_id += 1;
            }
        }

        grid
    }

    /// Rows of values (0 = empty), top to bottom. Inverse of [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|c| c.map(|b| b.value).unwrap_or(0)).collect())
            .collect()
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Index of the bottom row
    pub fn bottom_row(&self) -> u8 {
        self.height - 1
    }

    /// Check if position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "({}, {}) is outside the {}x{} grid",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// Block at `pos`, if any.
    pub fn get(&self, pos: Position) -> Option<&Block> {
        self.cells[self.index(pos)].as_ref()
    }

    /// Check if position holds a block
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Write a cell, returning what was there.
    ///
    /// A written block has its stored position rewritten to `pos`, so the
    /// grid never holds a block that disagrees with its cell.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Cell {
        let idx = self.index(pos);
        let cell = cell.map(|mut block| {
            block.x = pos.x;
            block.y = pos.y;
            block
        });
        std::mem::replace(&mut self.cells[idx], cell)
    }

    /// Empty a cell, returning its block.
    pub fn take(&mut self, pos: Position) -> Cell {
        let idx = self.index(pos);
        self.cells[idx].take()
    }

    /// Relocate the block at `from` to the empty cell `to`.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        debug_assert!(!self.is_occupied(to), "relocating onto an occupied cell");
        let block = self.take(from);
        self.set(to, block);
    }

    /// Iterate over all blocks in row-major order (top-left first)
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.cells.iter().filter_map(|c| c.as_ref())
    }

    pub fn block_count(&self) -> usize {
        self.blocks().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Check if any cell of row `y` is occupied
    pub fn is_row_occupied(&self, y: u8) -> bool {
        (0..self.width).any(|x| self.is_occupied(Position::new(x, y)))
    }

    /// Check whether the spawn row holds any block
    pub fn is_spawn_row_occupied(&self) -> bool {
        self.is_row_occupied(SPAWN_ROW)
    }

    /// Largest block id on the grid (0 when empty)
    pub fn max_block_id(&self) -> u32 {
        self.blocks().map(|b| b.id).max().unwrap_or(0)
    }

    /// Occupancy invariant: every block's stored position matches its cell
    /// and no block id appears twice.
    pub fn is_consistent(&self) -> bool {
        let mut ids: ArrayVec<u32, MAX_CELLS> = ArrayVec::new();
        for (idx, cell) in self.cells.iter().enumerate() {
            let Some(block) = cell else {
                continue;
            };
            let x = (idx % self.width as usize) as u8;
            let y = (idx / self.width as usize) as u8;
            if block.x != x || block.y != y || ids.contains(&block.id) {
                return false;
            }
            ids.push(block.id);
        }
        true
    }

    /// Drop every `merging` marker.
    pub(crate) fn clear_merging_flags(&mut self) {
        for block in self.cells.iter_mut().flatten() {
            block.merging = false;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(5, 8);
        assert_eq!(grid.index(Position::new(0, 0)), 0);
        assert_eq!(grid.index(Position::new(4, 0)), 4);
        assert_eq!(grid.index(Position::new(0, 1)), 5);
        assert_eq!(grid.index(Position::new(4, 7)), 39);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(5, 8);
        grid.get(Position::new(5, 0));
    }

    #[test]
    fn test_set_rewrites_block_position() {
        let mut grid = Grid::new(5, 8);
        let stale = Block::new(7, 4, Position::new(0, 0));
        grid.set(Position::new(3, 6), Some(stale));

        let block = grid.get(Position::new(3, 6)).unwrap();
        assert_eq!(block.position(), Position::new(3, 6));
        assert_eq!(block.id, 7);
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_relocate_moves_block() {
        let mut grid = Grid::from_rows(&[&[2, 0], &[0, 0]]);
        grid.relocate(Position::new(0, 0), Position::new(0, 1));
        assert_eq!(grid.to_rows(), vec![vec![0, 0], vec![2, 0]]);
        assert!(grid.is_consistent());
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows: &[&[u32]] = &[&[0, 2, 0], &[4, 8, 16]];
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.to_rows(), vec![vec![0, 2, 0], vec![4, 8, 16]]);
        assert_eq!(grid.block_count(), 4);
        assert_eq!(grid.max_block_id(), 4);
    }

    #[test]
    fn test_duplicate_ids_are_inconsistent() {
        let mut grid = Grid::new(3, 3);
        grid.set(Position::new(0, 0), Some(Block::new(1, 2, Position::new(0, 0))));
        grid.set(Position::new(1, 0), Some(Block::new(1, 2, Position::new(1, 0))));
        assert!(!grid.is_consistent());
    }

    #[test]
    fn test_grid_clone_is_independent() {
        let mut grid = Grid::from_rows(&[&[2, 0]]);
        let before = grid.clone();
        grid.take(Position::new(0, 0));
        assert!(grid.is_empty());
        assert_eq!(before.block_count(), 1);
    }
}
