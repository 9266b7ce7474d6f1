use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_linesum::input::{handle_key_event, KeyboardCursor, PointerTracker};
use tui_linesum::types::{GridHit, Position};

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

fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn input_gesture_handling_does_not_allocate() {
    let mut pointer = PointerTracker::new();
    let mut cursor = KeyboardCursor::new();
    // Column `x` maps to tile (0, x); anything past the grid is outside.
    let hit = |x: u16, _y: u16| {
        if x < 6 {
            GridHit::Tile(Position::new(0, x as u8))
        } else {
            GridHit::Outside
        }
    };
    let keys = [KeyCode::Char(' '), KeyCode::Right, KeyCode::Down, KeyCode::Enter, KeyCode::Esc];

    let allocs = with_alloc_counting(|| {
        for i in 0..200u16 {
            let _ = pointer.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0), hit);
            let _ = pointer.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5), hit);
            let end = if i % 2 == 0 { 5 } else { 9 };
            let _ = pointer.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), end), hit);

            let key = KeyEvent::new(keys[i as usize % keys.len()], KeyModifiers::NONE);
            if let Some(cmd) = handle_key_event(key) {
                let _ = cursor.handle(cmd, i % 3 == 0);
            }
        }
    });

    assert!(allocs == 0);
}
