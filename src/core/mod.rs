//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game_state;
pub mod moves;
pub mod outcome;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{GameState, MoveResult};
pub use moves::{move_down, move_left, move_right, move_up, shift, slide_and_merge_line};
pub use outcome::{evaluate, has_moves};
