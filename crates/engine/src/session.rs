//! Session: one running game plus its high score.
//!
//! The session is the controller half of the game. It turns commands from the
//! input layer into `GameState` calls and reports what the view must redraw,
//! including win/loss notices that fire once per transition.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::core::{GameSnapshot, GameState, UndoResult};
use crate::store::HighScoreStore;
use crate::types::{Direction, GameAction, Outcome};

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Tiles moved and a new tile spawned.
    Moved,
    /// The move would not change the grid (or the game is lost).
    NoEffect,
    /// The previous move was reverted.
    Undone,
    /// Undo requested with empty history.
    NothingToUndo,
    /// A fresh game started.
    NewGame,
}

/// One-shot notification for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The target tile was reached for the first time this game.
    Won { score: u32 },
    /// No move remains.
    Lost { score: u32, high_score: u32 },
}

/// Everything the view needs to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub snapshot: GameSnapshot,
    pub high_score: u32,
}

/// Reply to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub view: SessionView,
    pub effect: Effect,
    pub notice: Option<Notice>,
    /// Non-fatal problem to surface (e.g. the high score could not be saved).
    pub warning: Option<String>,
}

/// Command surface offered to an input layer.
pub trait GameController {
    fn move_tiles(&mut self, direction: Direction) -> Update;

    fn new_game(&mut self) -> Update;

    fn undo(&mut self) -> Update;

    /// Current state, without changing anything.
    fn view(&self) -> SessionView;

    fn apply_action(&mut self, action: GameAction) -> Update {
        match action {
            GameAction::MoveUp => self.move_tiles(Direction::Up),
            GameAction::MoveDown => self.move_tiles(Direction::Down),
            GameAction::MoveLeft => self.move_tiles(Direction::Left),
            GameAction::MoveRight => self.move_tiles(Direction::Right),
            GameAction::Undo => self.undo(),
            GameAction::Restart => self.new_game(),
        }
    }
}

pub struct Session<S, R = StdRng> {
    game: GameState<R>,
    store: S,
    high_score: u32,
    won_notified: bool,
    lost_notified: bool,
}

impl<S: HighScoreStore> Session<S, StdRng> {
    /// Start a seeded game, loading the high score from `store`.
    pub fn new(seed: u64, store: S) -> Self {
        info!("new session: seed {}", seed);
        Self::with_game(GameState::new(seed), store)
    }
}

impl<S: HighScoreStore, R: Rng> Session<S, R> {
    /// Wrap an existing game. A failing store starts from a high score of 0.
    pub fn with_game(game: GameState<R>, mut store: S) -> Self {
        let high_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                warn!("could not load high score, starting from 0: {:#}", e);
                0
            }
        };

        let outcome = game.outcome();
        Self {
            game,
            store,
            high_score,
            won_notified: outcome == Outcome::Won,
            lost_notified: outcome == Outcome::Lost,
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn update(&self, effect: Effect, notice: Option<Notice>, warning: Option<String>) -> Update {
        Update {
            view: self.view(),
            effect,
            notice,
            warning,
        }
    }

    /// Raise and persist the high score if the current score beats it.
    fn record_score(&mut self) -> Option<String> {
        let score = self.game.score();
        if score <= self.high_score {
            return None;
        }

        self.high_score = score;
        match self.store.save(score) {
            Ok(()) => None,
            Err(e) => {
                warn!("could not save high score {}: {:#}", score, e);
                Some(format!("high score not saved: {:#}", e))
            }
        }
    }

    /// Notice for a transition into `outcome`, if not yet reported.
    fn notice_for(&mut self, outcome: Outcome) -> Option<Notice> {
        match outcome {
            Outcome::Won if !self.won_notified => {
                self.won_notified = true;
                info!("target reached: score {}", self.game.score());
                Some(Notice::Won {
                    score: self.game.score(),
                })
            }
            Outcome::Lost if !self.lost_notified => {
                self.lost_notified = true;
                info!(
                    "game over: score {} best {} after {} moves",
                    self.game.score(),
                    self.high_score,
                    self.game.moves()
                );
                Some(Notice::Lost {
                    score: self.game.score(),
                    high_score: self.high_score,
                })
            }
            _ => None,
        }
    }
}

impl<S: HighScoreStore, R: Rng> GameController for Session<S, R> {
    fn move_tiles(&mut self, direction: Direction) -> Update {
        let result = self.game.move_tiles(direction);
        if !result.moved {
            return self.update(Effect::NoEffect, None, None);
        }

        let warning = self.record_score();
        let notice = self.notice_for(result.outcome);
        self.update(Effect::Moved, notice, warning)
    }

    fn new_game(&mut self) -> Update {
        self.game.reset();
        self.won_notified = false;
        self.lost_notified = false;
        info!("new game: episode {}", self.game.episode_id());
        self.update(Effect::NewGame, None, None)
    }

    fn undo(&mut self) -> Update {
        match self.game.undo() {
            UndoResult::Restored(outcome) => {
                // Undo out of a loss re-arms the loss notice; the win notice stays spent.
                if outcome != Outcome::Lost {
                    self.lost_notified = false;
                }
                self.update(Effect::Undone, None, None)
            }
            UndoResult::NothingToUndo => self.update(Effect::NothingToUndo, None, None),
        }
    }

    fn view(&self) -> SessionView {
        SessionView {
            snapshot: self.game.snapshot(),
            high_score: self.high_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{rng, Board};
    use crate::store::MemoryHighScoreStore;

    fn session_with(rows: crate::types::Grid, best: u32) -> Session<MemoryHighScoreStore> {
        let game = GameState::with_board(Board::from_rows(rows), rng::seeded(5));
        Session::with_game(game, MemoryHighScoreStore::new(best))
    }

    #[test]
    fn loads_high_score_from_store() {
        let session = Session::new(1, MemoryHighScoreStore::new(500));
        assert_eq!(session.high_score(), 500);
        assert_eq!(session.view().high_score, 500);
    }

    #[test]
    fn move_updates_and_saves_high_score() {
        let mut session = session_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0);

        let update = session.move_tiles(Direction::Left);
        assert_eq!(update.effect, Effect::Moved);
        assert_eq!(update.view.snapshot.score, 4);
        assert_eq!(update.view.high_score, 4);
        assert_eq!(session.store().value(), 4);
        assert!(update.warning.is_none());
    }

    #[test]
    fn high_score_not_saved_when_not_beaten() {
        let mut session = session_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 1000);
        session.move_tiles(Direction::Left);
        assert_eq!(session.high_score(), 1000);
        assert_eq!(session.store().saves(), 0);
    }

    #[test]
    fn illegal_move_reports_no_effect() {
        let mut session = session_with([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], 0);
        let update = session.move_tiles(Direction::Left);
        assert_eq!(update.effect, Effect::NoEffect);
        assert!(update.notice.is_none());
    }

    #[test]
    fn undo_reports_nothing_to_undo() {
        let mut session = session_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0);
        assert_eq!(session.undo().effect, Effect::NothingToUndo);
        session.move_tiles(Direction::Left);
        assert_eq!(session.undo().effect, Effect::Undone);
        assert_eq!(session.undo().effect, Effect::NothingToUndo);
    }

    #[test]
    fn apply_action_dispatches() {
        let mut session = session_with([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0);
        assert_eq!(session.apply_action(GameAction::MoveLeft).effect, Effect::Moved);
        assert_eq!(session.apply_action(GameAction::Undo).effect, Effect::Undone);
        assert_eq!(session.apply_action(GameAction::Restart).effect, Effect::NewGame);
    }
}
