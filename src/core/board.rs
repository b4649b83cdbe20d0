//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell holds 0 (empty) or a power of two.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges top to bottom, col left to right.

use std::fmt;

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::{Line, GRID_CELLS, GRID_SIZE, SPAWN_SCALE, SPAWN_TWO_IN};

/// The game grid - GRID_SIZE x GRID_SIZE using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [u32; GRID_CELLS],
}

impl Board {
    /// Create an all-empty board
    pub fn empty() -> Self {
        Self {
            cells: [0; GRID_CELLS],
        }
    }

    /// Create a freshly seeded board: empty grid plus two spawned tiles
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::empty();
        board.spawn_tile(rng);
        board.spawn_tile(rng);
        board
    }

    /// Calculate flat index from (row, col).
    /// Out-of-range coordinates are a programmer error.
    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            GRID_SIZE,
            GRID_SIZE
        );
        row * GRID_SIZE + col
    }

    /// Get the tile value at (row, col). 0 means empty.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[Self::index(row, col)]
    }

    /// Set the tile value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[Self::index(row, col)] = value;
    }

    /// Place a random tile into a uniformly chosen empty cell: 2 with
    /// probability 0.9, 4 with probability 0.1.
    ///
    /// A full board is a safe no-op; callers that need to distinguish must
    /// check `count_empty` first.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empties: ArrayVec<usize, GRID_CELLS> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(idx, _)| idx)
            .collect();

        if empties.is_empty() {
            return;
        }

        let slot = empties[rng.gen_range(0..empties.len())];
        self.cells[slot] = if rng.gen_range(0..SPAWN_SCALE) < SPAWN_TWO_IN {
            2
        } else {
            4
        };
    }

    /// Count the number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Highest tile value on the board (0 for an empty board)
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Copy out row `row` as a line
    pub fn row(&self, row: usize) -> Line {
        let mut line = [0; GRID_SIZE];
        for (col, slot) in line.iter_mut().enumerate() {
            *slot = self.get(row, col);
        }
        line
    }

    /// Write a line back into row `row`
    pub fn set_row(&mut self, row: usize, line: Line) {
        for (col, value) in line.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Copy out column `col` as a line (top to bottom)
    pub fn col(&self, col: usize) -> Line {
        let mut line = [0; GRID_SIZE];
        for (row, slot) in line.iter_mut().enumerate() {
            *slot = self.get(row, col);
        }
        line
    }

    /// Write a line back into column `col`
    pub fn set_col(&mut self, col: usize, line: Line) {
        for (row, value) in line.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Iterate all cells as (row, col, value), row-major. For rendering.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &v)| (idx / GRID_SIZE, idx % GRID_SIZE, v))
    }

    /// Create a board from a 2D row-major array
    pub fn from_rows(rows: [Line; GRID_SIZE]) -> Self {
        let mut board = Self::empty();
        for (row, line) in rows.into_iter().enumerate() {
            board.set_row(row, line);
        }
        board
    }

    /// Convert to a 2D row-major array
    pub fn to_rows(&self) -> [Line; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, line) in rows.iter_mut().enumerate() {
            *line = self.row(row);
        }
        rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                match self.get(row, col) {
                    0 => write!(f, "{:>6}", ".")?,
                    v => write!(f, "{:>6}", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_board_index_layout() {
        let mut board = Board::empty();
        board.set(0, 0, 2);
        board.set(1, 2, 4);
        assert_eq!(board.cells[0], 2);
        assert_eq!(board.cells[GRID_SIZE + 2], 4);
    }

    #[test]
    fn test_board_row_col_roundtrip() {
        let board = Board::from_rows([
            [2, 0, 4, 0],
            [0, 8, 0, 16],
            [32, 0, 64, 0],
            [0, 128, 0, 256],
        ]);
        assert_eq!(board.row(1), [0, 8, 0, 16]);
        assert_eq!(board.col(2), [4, 0, 64, 0]);
        assert_eq!(board.to_rows()[3], [0, 128, 0, 256]);
    }

    #[test]
    fn test_spawn_fills_board_then_stops() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::empty();
        for _ in 0..GRID_CELLS {
            board.spawn_tile(&mut rng);
        }
        assert_eq!(board.count_empty(), 0);

        // One more spawn on a full board must be a no-op.
        let full = board.clone();
        board.spawn_tile(&mut rng);
        assert_eq!(board, full);
    }
}
