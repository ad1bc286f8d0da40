//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal, or file I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised headlessly
//! - **Portable**: Can run behind a terminal, a GUI, or a bot
//! - **Fast**: The whole board is a `Copy` array; moves never allocate
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with the slide/merge line algorithm
//! - [`evaluator`]: win (target reached) and loss (no legal move) detection
//! - [`game_state`]: score, move history for undo, outcome lifecycle
//! - [`rng`]: random tile spawning (2 at 90%, 4 at 10%)
//! - [`snapshot`]: plain-data copy of the state for views
//!
//! # Game Rules
//!
//! - A move slides every tile towards one edge; equal neighbours merge once per move
//! - Each merge adds the merged tile's value to the score
//! - A move that changes nothing is rejected: no spawn, no history, no score
//! - After every legal move one tile spawns in a random empty cell
//! - Reaching the target tile wins, but play may continue
//! - A full grid without equal neighbours is lost
//! - One move can be undone
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState};
//! use tui_2048_core::types::{Direction, Outcome};
//!
//! let board = Board::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]);
//! let mut game = GameState::with_board(board, tui_2048_core::rng::seeded(1));
//!
//! let result = game.move_tiles(Direction::Left);
//! assert!(result.moved);
//! assert_eq!(game.score(), 12);
//! assert_eq!(result.outcome, Outcome::InProgress);
//! ```

pub mod board;
pub mod evaluator;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{slide_line, Board};
pub use evaluator::{has_legal_move, has_target, next_outcome};
pub use game_state::{GameState, MoveResult, UndoResult};
pub use snapshot::GameSnapshot;
