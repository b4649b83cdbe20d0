//! twenty48-core - rule engine for a 4x4 sliding-tile merge puzzle.
//!
//! Library-style engine: it owns the grid, applies directional slide/merge
//! moves, spawns random tiles, and classifies terminal states. Rendering,
//! key binding, and dialogs belong to the calling collaborator, which drives
//! the engine with directional inputs and reads the resulting state.
//!
//! ```
//! use twenty48_core::core::GameState;
//! use twenty48_core::types::{Direction, Outcome};
//!
//! let mut game = GameState::new(42);
//! let result = game.apply_move(Direction::Left);
//! if result.changed {
//!     match result.outcome {
//!         Outcome::Won => { /* prompt once, then game.continue_after_win() */ }
//!         Outcome::Lost => { /* acknowledge, then game.restart() */ }
//!         Outcome::Ongoing => {}
//!     }
//! }
//! for (row, col, value) in game.board().tiles() {
//!     let _ = (row, col, value); // render
//! }
//! ```

pub mod core;
pub mod types;

pub use crate::core::{Board, GameState, MoveResult};
pub use crate::types::{Direction, Outcome};
