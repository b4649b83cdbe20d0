//! Core types shared across the engine
//! This module contains pure data types and tuning constants with no external dependencies

/// Side length of the square grid.
///
/// Fixed for the lifetime of a game; a compile-time parameter so tests can
/// reason about it, not a runtime feature.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that counts as a win
pub const WIN_TILE: u32 = 2048;

/// Spawn weighting: a new tile is 2 in `SPAWN_TWO_IN` out of `SPAWN_SCALE`
/// draws, and 4 otherwise. Fixed design constants, not configurable.
pub const SPAWN_TWO_IN: u32 = 9;
pub const SPAWN_SCALE: u32 = 10;

/// A single row or column of the grid
pub type Line = [u32; GRID_SIZE];

/// Directional move input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, for exhaustive iteration
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Terminal/non-terminal classification of a board state.
///
/// Derived on demand from the board, never stored. `Won` and `Lost` are not
/// strictly terminal: the calling collaborator decides whether to reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ongoing => "ongoing",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}
