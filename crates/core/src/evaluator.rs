//! Evaluator module - win/loss detection
//!
//! Pure functions over a board; nothing here mutates state.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Direction, Outcome, GRID_SIZE};

/// True if any cell equals `target`.
pub fn has_target(board: &Board, target: u32) -> bool {
    board.cells().iter().any(|&v| v == target)
}

/// True if some direction would change the board.
///
/// A move exists iff an empty cell exists or two horizontally/vertically
/// adjacent cells hold the same non-zero value.
pub fn has_legal_move(board: &Board) -> bool {
    let cells = board.cells();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let v = cells[row * GRID_SIZE + col];
            if v == 0 {
                return true;
            }
            if col + 1 < GRID_SIZE && cells[row * GRID_SIZE + col + 1] == v {
                return true;
            }
            if row + 1 < GRID_SIZE && cells[(row + 1) * GRID_SIZE + col] == v {
                return true;
            }
        }
    }
    false
}

/// True if sliding towards `direction` changes the board.
pub fn can_move(board: &Board, direction: Direction) -> bool {
    board.shift(direction).0 != *board
}

/// Directions that would change the board, in `Direction::ALL` order.
pub fn legal_directions(board: &Board) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|&d| can_move(board, d))
        .collect()
}

/// Advance the outcome state machine after the board changed.
///
/// - `Lost` is terminal and stays `Lost`.
/// - Reaching `target` moves to `Won`; `Won` never reverts to `InProgress`.
/// - A board with no legal move is `Lost`, taking precedence over `Won`.
pub fn next_outcome(previous: Outcome, board: &Board, target: u32) -> Outcome {
    if previous == Outcome::Lost {
        return Outcome::Lost;
    }

    let won = previous == Outcome::Won || has_target(board, target);
    if !has_legal_move(board) {
        Outcome::Lost
    } else if won {
        Outcome::Won
    } else {
        Outcome::InProgress
    }
}
