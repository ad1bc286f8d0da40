//! Integration tests for the game lifecycle

use tui_2048::core::{rng, Board, GameState, UndoResult};
use tui_2048::types::{Direction, GameAction, Outcome, TARGET_TILE};

/// Full board that loses on a move right, whatever tile spawns.
fn one_move_from_loss() -> Board {
    Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [32, 4, 2, 4],
        [8, 16, 8, 0],
    ])
}

fn game(board: Board) -> GameState {
    GameState::with_board(board, rng::seeded(99))
}

#[test]
fn test_game_lifecycle() {
    let state = GameState::new(12345);
    assert_eq!(state.board().tile_count(), 2);
    assert_eq!(state.score(), 0);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert!(!state.can_undo());
    assert_eq!(state.target(), TARGET_TILE);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(7);
    let mut b = GameState::new(7);
    assert_eq!(a.board(), b.board());

    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        a.move_tiles(direction);
        b.move_tiles(direction);
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_legal_move_spawns_one_tile() {
    let mut state = game(Board::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]));
    let result = state.move_tiles(Direction::Left);

    assert!(result.moved);
    assert_eq!(result.gained, 12);
    assert_eq!(state.score(), 12);
    assert_eq!(state.moves(), 1);
    assert_eq!(state.board().tile_count(), 3);
    assert_eq!(state.board().rows()[0][..2], [4, 8]);

    let spawn = state.last_spawn().unwrap();
    let value = state.board().cells()[spawn];
    assert!(value == 2 || value == 4);
}

#[test]
fn test_illegal_move_changes_nothing() {
    let mut state = game(Board::from_rows([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]));
    let before = *state.board();

    let result = state.move_tiles(Direction::Left);
    assert!(!result.moved);
    assert_eq!(*state.board(), before);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert!(!state.can_undo());
}

#[test]
fn test_move_into_loss() {
    let mut state = game(one_move_from_loss());
    assert_eq!(state.outcome(), Outcome::InProgress);

    let result = state.move_tiles(Direction::Right);
    assert!(result.moved);
    assert_eq!(result.outcome, Outcome::Lost);
    assert!(state.board().is_full());

    // Lost is terminal for moves.
    for direction in Direction::ALL {
        assert!(!state.move_tiles(direction).moved);
    }
    assert_eq!(state.outcome(), Outcome::Lost);
}

#[test]
fn test_reaching_target_wins_and_play_continues() {
    let half = TARGET_TILE / 2;
    let mut state = game(Board::from_rows([[half, half, 0, 0], [0; 4], [0; 4], [0; 4]]));

    let result = state.move_tiles(Direction::Left);
    assert_eq!(result.outcome, Outcome::Won);
    assert_eq!(state.score(), TARGET_TILE);

    assert!(state.move_tiles(Direction::Right).moved);
    assert_eq!(state.outcome(), Outcome::Won);
}

#[test]
fn test_custom_target() {
    let mut state = game(Board::from_rows([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]])).with_target(8);
    assert_eq!(state.move_tiles(Direction::Left).outcome, Outcome::Won);
    assert_eq!(state.snapshot().target, 8);
}

#[test]
fn test_win_and_loss_on_same_move_is_loss() {
    let mut state = game(Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [32, 4, 2, 4],
        [16, 4, 4, 32],
    ]))
    .with_target(8);

    let result = state.move_tiles(Direction::Right);
    assert!(result.moved);
    assert_eq!(state.board().rows()[3][1..], [16, 8, 32]);
    assert_eq!(result.outcome, Outcome::Lost);
}

#[test]
fn test_undo_restores_exact_state() {
    let mut state = game(Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]));
    let before = *state.board();

    state.move_tiles(Direction::Left);
    assert!(state.can_undo());

    assert_eq!(state.undo(), UndoResult::Restored(Outcome::InProgress));
    assert_eq!(*state.board(), before);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.last_spawn(), None);
}

#[test]
fn test_undo_is_single_level() {
    let mut state = game(Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]));
    state.move_tiles(Direction::Left);
    let after_first = *state.board();
    state.move_tiles(Direction::Right);

    assert!(matches!(state.undo(), UndoResult::Restored(_)));
    assert_eq!(*state.board(), after_first);
    assert_eq!(state.undo(), UndoResult::NothingToUndo);
    assert_eq!(*state.board(), after_first);
}

#[test]
fn test_undo_out_of_loss() {
    let board = one_move_from_loss();
    let mut state = game(board);
    state.move_tiles(Direction::Right);
    assert_eq!(state.outcome(), Outcome::Lost);

    assert_eq!(state.undo(), UndoResult::Restored(Outcome::InProgress));
    assert_eq!(*state.board(), board);
    assert!(state.move_tiles(Direction::Right).moved);
}

#[test]
fn test_undo_after_win_recomputes_outcome() {
    let half = TARGET_TILE / 2;
    let mut state = game(Board::from_rows([[half, half, 0, 0], [0; 4], [0; 4], [0; 4]]));
    state.move_tiles(Direction::Left);
    assert_eq!(state.outcome(), Outcome::Won);

    assert_eq!(state.undo(), UndoResult::Restored(Outcome::InProgress));
}

#[test]
fn test_reset_starts_fresh_episode() {
    let mut state = game(one_move_from_loss());
    state.move_tiles(Direction::Right);
    let episode = state.episode_id();

    state.reset();
    assert_eq!(state.episode_id(), episode + 1);
    assert_eq!(state.board().tile_count(), 2);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert!(!state.can_undo());
}

#[test]
fn test_apply_action_reports_change() {
    let mut state = game(Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]));
    assert!(state.apply_action(GameAction::MoveLeft));
    assert!(state.apply_action(GameAction::Undo));
    assert!(!state.apply_action(GameAction::Undo));
    assert!(state.apply_action(GameAction::Restart));
}

#[test]
fn test_snapshot_matches_state() {
    let mut state = game(Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]));
    state.move_tiles(Direction::Left);

    let snap = state.snapshot();
    assert_eq!(snap.grid, state.board().rows());
    assert_eq!(snap.score, 4);
    assert_eq!(snap.moves, 1);
    assert!(snap.can_undo);
    assert_eq!(snap.max_tile, 4);

    let idx = state.last_spawn().unwrap();
    assert_eq!(snap.last_spawn, Some((idx / 4, idx % 4)));
}
