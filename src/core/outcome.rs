//! Terminal-state evaluation
//!
//! Pure queries over a board. The engine only reports outcomes; deciding
//! whether to reset the game belongs to the calling collaborator.

use crate::core::Board;
use crate::types::{Outcome, GRID_SIZE, WIN_TILE};

/// True if any move could still change the board: an empty cell exists or
/// some horizontally/vertically adjacent pair holds equal non-zero values.
pub fn has_moves(board: &Board) -> bool {
    if board.count_empty() > 0 {
        return true;
    }
    // Full board: look for a mergeable pair. Checking only the right and
    // down neighbor of each cell covers every adjacency once.
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let value = board.get(row, col);
            if col + 1 < GRID_SIZE && board.get(row, col + 1) == value {
                return true;
            }
            if row + 1 < GRID_SIZE && board.get(row + 1, col) == value {
                return true;
            }
        }
    }
    false
}

/// Classify a board: `Won` if any tile has reached `WIN_TILE`, `Lost` if no
/// move can change the board, `Ongoing` otherwise. Won takes precedence.
pub fn evaluate(board: &Board) -> Outcome {
    if board.highest_tile() >= WIN_TILE {
        Outcome::Won
    } else if has_moves(board) {
        Outcome::Ongoing
    } else {
        Outcome::Lost
    }
}
