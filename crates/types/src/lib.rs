//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//! - Cells are stored row-major (`row * GRID_SIZE + col`)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_TILE` | 2048 | Tile value that wins the game |
//! | `INITIAL_TILES` | 2 | Tiles spawned by a new game |
//! | `SPAWN_FOUR_PROBABILITY` | 0.1 | Chance a spawned tile is a 4 instead of a 2 |
//! | `UNDO_DEPTH` | 1 | Number of moves that can be reverted |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Outcome, GRID_SIZE, TARGET_TILE};
//!
//! // Parse a direction (case-insensitive)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//!
//! // Every move action carries its direction
//! assert_eq!(GameAction::MoveUp.direction(), Some(Direction::Up));
//! assert_eq!(GameAction::from(Direction::Down), GameAction::MoveDown);
//!
//! // Only a lost game is terminal
//! assert!(!Outcome::Won.is_terminal());
//! assert!(Outcome::Lost.is_terminal());
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(TARGET_TILE, 2048);
//! ```

/// Grid side length in cells (4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid (16)
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const TARGET_TILE: u32 = 2048;

/// Number of tiles placed on a fresh grid
pub const INITIAL_TILES: usize = 2;

/// Probability that a spawned tile is a 4 (otherwise a 2)
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Number of prior moves retained for undo
pub const UNDO_DEPTH: usize = 1;

/// Row-major grid of tile values. `0` marks an empty cell.
pub type Grid = [[u32; GRID_SIZE]; GRID_SIZE];

/// Direction tiles slide towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
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

    /// True for `Left`/`Right` (lines are rows), false for `Up`/`Down` (lines are columns).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Classification of a game in progress.
///
/// - **InProgress**: the target tile has not been reached yet
/// - **Won**: the target tile was reached; play may continue
/// - **Lost**: no direction can change the grid; only a new game leaves this state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Whether further moves are rejected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "inProgress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Commands accepted by a running game
///
/// These are produced by the input layer and consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles up
    MoveUp,
    /// Slide all tiles down
    MoveDown,
    /// Slide all tiles left
    MoveLeft,
    /// Slide all tiles right
    MoveRight,
    /// Revert the previous move (if any)
    Undo,
    /// Start a new game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "undo" => Some(GameAction::Undo),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
        }
    }

    /// The slide direction for move actions, `None` otherwise.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Undo | GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_defaults() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(TARGET_TILE, 2048);
        assert_eq!(INITIAL_TILES, 2);
        assert_eq!(UNDO_DEPTH, 1);
        assert!((SPAWN_FOUR_PROBABILITY - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn direction_round_trips_through_strings() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn action_direction_matches_from_direction() {
        for dir in Direction::ALL {
            assert_eq!(GameAction::from(dir).direction(), Some(dir));
        }
        assert_eq!(GameAction::Undo.direction(), None);
        assert_eq!(GameAction::Restart.direction(), None);
    }

    #[test]
    fn outcome_default_is_in_progress() {
        assert_eq!(Outcome::default(), Outcome::InProgress);
        assert!(!Outcome::InProgress.is_terminal());
    }
}
