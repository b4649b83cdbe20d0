//! Game state module - orchestrates one game session
//!
//! Ties together board, move engine, outcome evaluation, and tile spawning.
//! Driven by a single serialized stream of directional inputs; the session
//! exclusively owns its board and RNG.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{evaluate, has_moves, shift, Board};
use crate::types::{Direction, Outcome};

/// Result of one `apply_move` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether the move changed the board (and therefore spawned a tile)
    pub changed: bool,
    /// Session-level outcome after the move
    pub outcome: Outcome,
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Set once the player has chosen to keep playing past the win tile, so
    /// later winning boards do not re-prompt every move.
    win_continued: bool,
    rng: StdRng,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::new(&mut rng);
        Self {
            board,
            win_continued: false,
            rng,
        }
    }

    /// Create a new session seeded from the operating system
    pub fn from_entropy() -> Self {
        let mut rng = StdRng::from_entropy();
        let board = Board::new(&mut rng);
        Self {
            board,
            win_continued: false,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn win_continued(&self) -> bool {
        self.win_continued
    }

    /// Apply one directional move.
    ///
    /// Computes the candidate board; if it equals the current board the move
    /// is rejected with no state change and no tile spawn. Otherwise the
    /// candidate is committed, one tile is spawned (a no-op if the move
    /// filled the last cell), and the outcome is evaluated.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let candidate = shift(&self.board, direction);
        if candidate == self.board {
            return MoveResult {
                changed: false,
                outcome: Outcome::Ongoing,
            };
        }

        self.board = candidate;
        self.board.spawn_tile(&mut self.rng);

        MoveResult {
            changed: true,
            outcome: self.session_outcome(),
        }
    }

    /// Record that the player chose to keep playing after reaching the win
    /// tile. Later winning boards report `Ongoing` instead of `Won`.
    pub fn continue_after_win(&mut self) {
        self.win_continued = true;
    }

    /// Replace the board wholesale with a freshly seeded one and clear the
    /// continued flag. Called by the collaborator after a win was declined
    /// or a loss was acknowledged.
    pub fn restart(&mut self) {
        self.board = Board::new(&mut self.rng);
        self.win_continued = false;
    }

    /// Outcome as seen by the session: `Won` is suppressed once the player
    /// has continued past the win tile. A stuck board is always `Lost`,
    /// continued or not.
    fn session_outcome(&self) -> Outcome {
        match evaluate(&self.board) {
            Outcome::Won if self.win_continued => {
                if has_moves(&self.board) {
                    Outcome::Ongoing
                } else {
                    Outcome::Lost
                }
            }
            outcome => outcome,
        }
    }

    /// Replace the current board with an arbitrary position.
    ///
    /// For setting up specific positions in tests or replays; normal play
    /// only ever mutates the board through `apply_move` and `restart`.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_two_tiles() {
        let state = GameState::new(42);
        let occupied = state.board().tiles().filter(|&(_, _, v)| v != 0).count();
        assert_eq!(occupied, 2);
        for (_, _, value) in state.board().tiles() {
            assert!(value == 0 || value == 2 || value == 4);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameState::new(9001);
        let mut b = GameState::new(9001);
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply_move(dir), b.apply_move(dir));
            assert_eq!(a.board(), b.board());
        }
    }
}
