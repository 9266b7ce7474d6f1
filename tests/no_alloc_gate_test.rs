use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_linesum::core::{find_run_with_sum, GameSnapshot, GameState};
use tui_linesum::types::{GameAction, Position};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
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

/// One round of play: commit a matching line if there is one, poke the
/// rejection and abort paths, and restart every few commits.
fn play_round(gs: &mut GameState, snap: &mut GameSnapshot) {
    match find_run_with_sum(gs.grid(), gs.target_sum()) {
        Some(run) => {
            let mut positions = run.positions();
            if let Some(first) = positions.next() {
                gs.apply_action(GameAction::Begin(first));
            }
            for pos in positions {
                gs.apply_action(GameAction::Extend(pos));
                gs.snapshot_into(snap);
            }
            gs.apply_action(GameAction::End);
        }
        None => {
            gs.apply_action(GameAction::Begin(Position::new(0, 0)));
            gs.apply_action(GameAction::Extend(Position::new(2, 2)));
            gs.apply_action(GameAction::Abort);
        }
    }
    let _ = gs.take_last_commit();
    gs.snapshot_into(snap);

    if gs.commits() >= 5 || gs.game_over() {
        gs.apply_action(GameAction::NewGame);
    }
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    let mut snap = GameSnapshot::default();

    // Warm-up.
    for _ in 0..20 {
        play_round(&mut gs, &mut snap);
    }

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            play_round(&mut gs, &mut snap);
        }
    });

    assert!(allocs == 0);
}
