//! Move engine - slide/merge primitives and the four directional moves
//!
//! All functions here are pure: they return a new board and never mutate
//! their input, so callers can compare old vs. new before committing.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{Direction, Line, GRID_SIZE};

/// Slide a line toward its start and merge adjacent equal tiles.
///
/// Zeros are removed first (compaction preserving relative order), then a
/// single left-to-right pass doubles the left tile of each equal adjacent
/// pair and zeroes the right one. Each tile merges at most once per move;
/// there is no re-scan. The result is re-compacted and padded with zeros
/// back to `GRID_SIZE`.
pub fn slide_and_merge_line(line: Line) -> Line {
    let mut compacted: ArrayVec<u32, GRID_SIZE> =
        line.iter().copied().filter(|&v| v != 0).collect();

    for i in 1..compacted.len() {
        if compacted[i - 1] != 0 && compacted[i - 1] == compacted[i] {
            compacted[i - 1] *= 2;
            compacted[i] = 0;
        }
    }

    let mut out = [0; GRID_SIZE];
    let merged = compacted.into_iter().filter(|&v| v != 0);
    for (slot, value) in out.iter_mut().zip(merged) {
        *slot = value;
    }
    out
}

fn reversed(line: Line) -> Line {
    let mut line = line;
    line.reverse();
    line
}

/// Slide every row toward the left edge
pub fn move_left(board: &Board) -> Board {
    let mut next = Board::empty();
    for row in 0..GRID_SIZE {
        next.set_row(row, slide_and_merge_line(board.row(row)));
    }
    next
}

/// Slide every row toward the right edge
pub fn move_right(board: &Board) -> Board {
    let mut next = Board::empty();
    for row in 0..GRID_SIZE {
        next.set_row(row, reversed(slide_and_merge_line(reversed(board.row(row)))));
    }
    next
}

/// Slide every column toward the top edge
pub fn move_up(board: &Board) -> Board {
    let mut next = Board::empty();
    for col in 0..GRID_SIZE {
        next.set_col(col, slide_and_merge_line(board.col(col)));
    }
    next
}

/// Slide every column toward the bottom edge
pub fn move_down(board: &Board) -> Board {
    let mut next = Board::empty();
    for col in 0..GRID_SIZE {
        next.set_col(col, reversed(slide_and_merge_line(reversed(board.col(col)))));
    }
    next
}

/// Slide/merge tiles in the given direction. No randomness.
pub fn shift(board: &Board, direction: Direction) -> Board {
    match direction {
        Direction::Up => move_up(board),
        Direction::Down => move_down(board),
        Direction::Left => move_left(board),
        Direction::Right => move_right(board),
    }
}
