use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::board::slide_line;
use tui_2048::core::{has_legal_move, Board, GameState};
use tui_2048::term::{FrameBuffer, GameView, StatusView, Viewport};
use tui_2048::types::Direction;

fn busy_board() -> Board {
    Board::from_rows([
        [2, 2, 4, 8],
        [16, 0, 16, 4],
        [2, 4, 4, 0],
        [128, 64, 64, 2],
    ])
}

fn bench_slide_line(c: &mut Criterion) {
    c.bench_function("slide_line", |b| {
        b.iter(|| slide_line(black_box([2, 2, 4, 4])))
    });
}

fn bench_shift(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("shift_all_directions", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                black_box(black_box(&board).shift(direction));
            }
        })
    });
}

fn bench_move_tiles(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut i = 0usize;

    c.bench_function("move_tiles", |b| {
        b.iter(|| {
            let result = state.move_tiles(Direction::ALL[i % 4]);
            i += 1;
            if result.outcome.is_terminal() {
                state.reset();
            }
            result
        })
    });
}

fn bench_has_legal_move(c: &mut Criterion) {
    let stuck = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);

    c.bench_function("has_legal_move_stuck", |b| {
        b.iter(|| has_legal_move(black_box(&stuck)))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(black_box(&snap), &StatusView::default(), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_slide_line,
    bench_shift,
    bench_move_tiles,
    bench_has_legal_move,
    bench_render
);
criterion_main!(benches);
