//! Game state module - manages the complete game state
//!
//! This module ties together the board, the tile spawner, and the outcome
//! evaluator. It handles moves, undo, and the game lifecycle.

use arrayvec::ArrayVec;
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::{evaluator, rng, Board, GameSnapshot};
use crate::types::*;

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether the grid changed (tiles slid or merged).
    pub moved: bool,
    /// Points scored by merges during this move.
    pub gained: u32,
    /// Outcome after the move (and its spawn).
    pub outcome: Outcome,
}

/// Result of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoResult {
    /// The previous grid and score were restored; carries the recomputed outcome.
    Restored(Outcome),
    /// History was empty; nothing changed.
    NothingToUndo,
}

/// State saved before each legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HistoryEntry {
    board: Board,
    score: u32,
    outcome: Outcome,
    moves: u32,
}

/// Complete game state
///
/// Generic over the random source so tests and replays can inject a seeded RNG.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    score: u32,
    outcome: Outcome,
    /// Legal moves made in the current game.
    moves: u32,
    target: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Flat index of the tile spawned by the latest move.
    last_spawn: Option<usize>,
    history: ArrayVec<HistoryEntry, UNDO_DEPTH>,
    rng: R,
}

impl GameState<StdRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(rng::seeded(seed))
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game drawing tiles from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self::empty(rng);
        state.spawn_initial_tiles();
        state
    }

    /// Create a game from a preloaded board; no tiles are spawned.
    pub fn with_board(board: Board, rng: R) -> Self {
        let mut state = Self::empty(rng);
        state.board = board;
        state.outcome = evaluator::next_outcome(Outcome::InProgress, &board, state.target);
        state
    }

    /// Use a different winning tile value.
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self.outcome = evaluator::next_outcome(Outcome::InProgress, &self.board, target);
        self
    }

    fn empty(rng: R) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            outcome: Outcome::InProgress,
            moves: 0,
            target: TARGET_TILE,
            episode_id: 0,
            last_spawn: None,
            history: ArrayVec::new(),
            rng,
        }
    }

    fn spawn_initial_tiles(&mut self) {
        for _ in 0..INITIAL_TILES {
            rng::spawn_tile(&mut self.board, &mut self.rng);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Flat index of the tile spawned by the latest move.
    pub fn last_spawn(&self) -> Option<usize> {
        self.last_spawn
    }

    /// Start over: empty grid, two fresh tiles, zero score, empty history.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.outcome = Outcome::InProgress;
        self.moves = 0;
        self.last_spawn = None;
        self.history.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_initial_tiles();
        debug!("reset: episode {} board {}", self.episode_id, self.board);
    }

    /// Slide tiles towards `direction`.
    ///
    /// A move that leaves the grid unchanged is rejected with no side effects,
    /// as is any move once the game is lost.
    pub fn move_tiles(&mut self, direction: Direction) -> MoveResult {
        let rejected = MoveResult {
            moved: false,
            gained: 0,
            outcome: self.outcome,
        };

        if self.outcome.is_terminal() {
            return rejected;
        }

        let (next, gained) = self.board.shift(direction);
        if next == self.board {
            debug!("move {}: no effect", direction.as_str());
            return rejected;
        }

        self.push_history();
        self.board = next;
        self.score = self.score.saturating_add(gained);
        self.moves += 1;
        self.last_spawn = rng::spawn_tile(&mut self.board, &mut self.rng).map(|(idx, _)| idx);
        self.outcome = evaluator::next_outcome(self.outcome, &self.board, self.target);

        debug!(
            "move {}: +{} score {} outcome {}",
            direction.as_str(),
            gained,
            self.score,
            self.outcome.as_str()
        );

        MoveResult {
            moved: true,
            gained,
            outcome: self.outcome,
        }
    }

    fn push_history(&mut self) {
        if self.history.is_full() {
            self.history.remove(0);
        }
        self.history.push(HistoryEntry {
            board: self.board,
            score: self.score,
            outcome: self.outcome,
            moves: self.moves,
        });
    }

    /// Revert the most recent move.
    pub fn undo(&mut self) -> UndoResult {
        let Some(entry) = self.history.pop() else {
            return UndoResult::NothingToUndo;
        };

        self.board = entry.board;
        self.score = entry.score;
        self.moves = entry.moves;
        self.last_spawn = None;
        self.outcome = evaluator::next_outcome(entry.outcome, &self.board, self.target);
        debug!("undo: score {} outcome {}", self.score, self.outcome.as_str());
        UndoResult::Restored(self.outcome)
    }

    /// Apply a game action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveUp
            | GameAction::MoveDown
            | GameAction::MoveLeft
            | GameAction::MoveRight => match action.direction() {
                Some(direction) => self.move_tiles(direction).moved,
                None => false,
            },
            GameAction::Undo => matches!(self.undo(), UndoResult::Restored(_)),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.grid);
        out.score = self.score;
        out.outcome = self.outcome;
        out.can_undo = self.can_undo();
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.target = self.target;
        out.episode_id = self.episode_id;
        out.last_spawn = self.last_spawn.map(|idx| (idx / GRID_SIZE, idx % GRID_SIZE));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
