use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::term::{FrameBuffer, GameView, StatusView, Viewport};
use tui_2048::types::{Direction, GameAction, Outcome};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test per binary: the counter is process-wide.
#[test]
fn hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let mut snap = GameSnapshot::default();
    let status = StatusView {
        high_score: 100,
        won_banner: false,
        message: Some("saved"),
    };

    // Warm-up.
    gs.move_tiles(Direction::Left);
    view.render_into(&gs.snapshot(), &status, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            let _ = gs.move_tiles(Direction::ALL[i % 4]);
            if i % 7 == 0 {
                let _ = gs.apply_action(GameAction::Undo);
            }
            if gs.outcome() == Outcome::Lost {
                let _ = gs.apply_action(GameAction::Restart);
            }

            gs.snapshot_into(&mut snap);
            view.render_into(&snap, &status, vp, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
