//! Board tests - slide/merge rules on whole grids

use tui_2048::core::board::slide_line;
use tui_2048::core::evaluator::{can_move, legal_directions};
use tui_2048::core::{has_legal_move, has_target, Board};
use tui_2048::types::{Direction, CELL_COUNT, GRID_SIZE};

fn stuck_board() -> Board {
    Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ])
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.count_empty(), CELL_COUNT);
    assert_eq!(board.tile_count(), 0);
    assert_eq!(board.max_tile(), 0);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert_eq!(board.get(row, col), Some(0));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(GRID_SIZE, 0), None);
    assert_eq!(board.get(0, GRID_SIZE), None);
    assert!(!board.set(4, 4, 2));
    assert!(!board.set_index(CELL_COUNT, 2));
}

#[test]
fn test_row_scenario_left() {
    let board = Board::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]);
    let (next, gained) = board.shift(Direction::Left);
    assert_eq!(next.rows()[0], [4, 8, 0, 0]);
    assert_eq!(gained, 12);
}

#[test]
fn test_each_direction_moves_towards_its_edge() {
    let board = Board::from_rows([
        [0, 0, 0, 0],
        [0, 2, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);

    assert_eq!(board.shift(Direction::Left).0.get(1, 0), Some(2));
    assert_eq!(board.shift(Direction::Right).0.get(1, 3), Some(2));
    assert_eq!(board.shift(Direction::Up).0.get(0, 1), Some(2));
    assert_eq!(board.shift(Direction::Down).0.get(3, 1), Some(2));
}

#[test]
fn test_merge_priority_from_target_edge() {
    // Three equal tiles: the pair nearest the edge merges.
    let board = Board::from_rows([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(board.shift(Direction::Left).0.rows()[0], [4, 2, 0, 0]);
    assert_eq!(board.shift(Direction::Right).0.rows()[0], [0, 0, 2, 4]);
}

#[test]
fn test_no_chained_merges() {
    assert_eq!(slide_line([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
    assert_eq!(slide_line([4, 4, 8, 0]), ([8, 8, 0, 0], 8));
    assert_eq!(slide_line([8, 0, 4, 4]), ([8, 8, 0, 0], 8));
}

#[test]
fn test_vertical_merge() {
    let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]]);
    let (next, gained) = board.shift(Direction::Down);
    assert_eq!(next.rows(), [[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [8, 0, 0, 0]]);
    assert_eq!(gained, 12);
}

#[test]
fn test_shift_never_spawns() {
    let board = Board::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let (next, _) = board.shift(Direction::Left);
    assert_eq!(next.tile_count(), 1);
}

#[test]
fn test_stuck_board_has_no_legal_move() {
    let board = stuck_board();
    assert!(!has_legal_move(&board));
    assert!(legal_directions(&board).is_empty());
    for direction in Direction::ALL {
        assert!(!can_move(&board, direction));
    }
}

#[test]
fn test_full_board_with_pair_is_playable() {
    let board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 8, 8, 2],
    ]);
    assert!(board.is_full());
    assert!(has_legal_move(&board));

    let dirs = legal_directions(&board);
    assert!(dirs.contains(&Direction::Left));
    assert!(dirs.contains(&Direction::Right));
    assert!(!dirs.contains(&Direction::Up));
}

#[test]
fn test_has_target_requires_exact_value() {
    let board = Board::from_rows([[4096, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert!(!has_target(&board, 2048));
    assert!(has_target(&board, 4096));
}

#[test]
fn test_display_lists_rows() {
    let board = Board::from_rows([[2, 0, 0, 0], [0, 4, 0, 0], [0; 4], [0, 0, 0, 8]]);
    assert_eq!(
        board.to_string(),
        "2 0 0 0 / 0 4 0 0 / 0 0 0 0 / 0 0 0 8"
    );
}
