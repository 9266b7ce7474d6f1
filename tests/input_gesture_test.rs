//! Mouse and keyboard gestures driven through the view's hit test into the core.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_linesum::core::GameState;
use tui_linesum::input::{handle_key_event, KeyboardCursor, PointerTracker};
use tui_linesum::term::{GameView, Viewport};
use tui_linesum::types::{GameAction, Position, GRID_SIZE};

/// Row 0 = [1, 1, 2, 1, 1, 1], everything else 4.
fn state(target: u32) -> GameState {
    let mut values = [[4u8; GRID_SIZE]; GRID_SIZE];
    values[0] = [1, 1, 2, 1, 1, 1];
    GameState::with_grid(5, values, target)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Center of tile (`row`, `col`) on an 80x24 screen.
fn tile_center(row: u16, col: u16) -> (u16, u16) {
    (22 + 6 * col + 2, 3 + 3 * row + 1)
}

struct Harness {
    game: GameState,
    view: GameView,
    viewport: Viewport,
    pointer: PointerTracker,
}

impl Harness {
    fn new(game: GameState) -> Self {
        Self {
            game,
            view: GameView::default(),
            viewport: Viewport::new(80, 24),
            pointer: PointerTracker::new(),
        }
    }

    fn send(&mut self, kind: MouseEventKind, (x, y): (u16, u16)) -> Vec<GameAction> {
        let (view, viewport) = (&self.view, self.viewport);
        let actions = self
            .pointer
            .handle_mouse(mouse(kind, x, y), |cx, cy| view.hit_test(viewport, cx, cy));
        for &action in &actions {
            self.game.apply_action(action);
        }
        actions.to_vec()
    }
}

const DOWN: MouseEventKind = MouseEventKind::Down(MouseButton::Left);
const DRAG: MouseEventKind = MouseEventKind::Drag(MouseButton::Left);
const UP: MouseEventKind = MouseEventKind::Up(MouseButton::Left);

#[test]
fn test_mouse_drag_commits_matching_pair() {
    let mut h = Harness::new(state(2));

    h.send(DOWN, tile_center(0, 0));
    assert_eq!(h.game.current_sum(), 1);
    h.send(DRAG, tile_center(0, 1));
    assert_eq!(h.game.current_sum(), 2);
    let actions = h.send(UP, tile_center(0, 1));

    assert_eq!(actions, vec![GameAction::End]);
    assert_eq!(h.game.score(), 10);
    assert!(!h.pointer.dragging());
}

#[test]
fn test_small_moves_within_a_tile_do_not_repeat_extensions() {
    let mut h = Harness::new(state(2));
    h.send(DOWN, tile_center(0, 0));
    let (x, y) = tile_center(0, 1);
    assert_eq!(h.send(DRAG, (x, y)).len(), 1);
    assert!(h.send(DRAG, (x + 1, y)).is_empty());
    assert!(h.send(DRAG, (x, y + 1)).is_empty());
    assert_eq!(h.game.selected_positions().len(), 2);
}

#[test]
fn test_fast_drag_fills_skipped_tiles() {
    // 1 + 1 + 2 + 1 = 5 over four tiles.
    let mut h = Harness::new(state(5));

    h.send(DOWN, tile_center(0, 0));
    let actions = h.send(DRAG, tile_center(0, 3));
    assert_eq!(
        actions,
        vec![
            GameAction::Extend(Position::new(0, 1)),
            GameAction::Extend(Position::new(0, 2)),
            GameAction::Extend(Position::new(0, 3)),
        ]
    );
    h.send(UP, tile_center(0, 3));
    assert_eq!(h.game.score(), 60);
}

#[test]
fn test_release_on_gutter_still_ends() {
    let mut h = Harness::new(state(2));
    h.send(DOWN, tile_center(0, 0));
    h.send(DRAG, tile_center(0, 1));
    // Gutter column right of tile (0, 1).
    let actions = h.send(UP, (33, 4));
    assert_eq!(actions, vec![GameAction::End]);
    assert_eq!(h.game.score(), 10);
}

#[test]
fn test_leaving_the_grid_aborts() {
    let mut h = Harness::new(state(2));
    h.send(DOWN, tile_center(0, 0));
    h.send(DRAG, tile_center(0, 1));

    let actions = h.send(DRAG, (5, 5));
    assert_eq!(actions, vec![GameAction::Abort]);
    assert!(h.game.selection().is_none());
    assert!(!h.pointer.dragging());

    // The rest of the gesture is ignored.
    assert!(h.send(DRAG, tile_center(0, 2)).is_empty());
    assert!(h.send(UP, tile_center(0, 2)).is_empty());
    assert_eq!(h.game.score(), 0);
}

#[test]
fn test_press_outside_the_grid_does_nothing() {
    let mut h = Harness::new(state(2));
    assert!(h.send(DOWN, (1, 1)).is_empty());
    assert!(h.send(UP, tile_center(0, 0)).is_empty());
    assert!(h.game.selection().is_none());
}

#[test]
fn test_keyboard_walk_commits() {
    let mut game = state(4);
    let mut cursor = KeyboardCursor::new();
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    // Start at (0, 1), walk right over 1 + 2 + 1 = 4.
    for code in [
        KeyCode::Right,
        KeyCode::Char(' '),
        KeyCode::Char('l'),
        KeyCode::Right,
        KeyCode::Enter,
    ] {
        let cmd = handle_key_event(key(code)).expect("mapped key");
        if let Some(action) = cursor.handle(cmd, game.selection().is_some()) {
            game.apply_action(action);
        }
    }

    assert_eq!(game.score(), 30);
    assert_eq!(cursor.position(), Position::new(0, 3));
}

#[test]
fn test_escape_cancels_keyboard_selection() {
    let mut game = state(4);
    let mut cursor = KeyboardCursor::new();
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    for code in [KeyCode::Char(' '), KeyCode::Down, KeyCode::Esc] {
        let cmd = handle_key_event(key(code)).expect("mapped key");
        if let Some(action) = cursor.handle(cmd, game.selection().is_some()) {
            game.apply_action(action);
        }
    }

    assert!(game.selection().is_none());
    assert!(game.grid().tiles().iter().all(|t| !t.selected));
}

#[test]
fn test_rejected_keyboard_turn_keeps_cursor_on_line() {
    let mut game = state(4);
    let mut cursor = KeyboardCursor::new();
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

    // Begin at (0, 1), extend to (0, 2), then try to turn down the column.
    for code in [KeyCode::Right, KeyCode::Char(' '), KeyCode::Right, KeyCode::Down] {
        let cmd = handle_key_event(key(code)).expect("mapped key");
        if let Some(action) = cursor.handle(cmd, game.selection().is_some()) {
            let accepted = game.apply_action(action);
            cursor.settle(action, accepted, game.selection().and_then(|sel| sel.last()));
        }
    }
    assert_eq!(cursor.position(), Position::new(0, 2));
    assert_eq!(game.selection().map(|sel| sel.len()), Some(2));

    // Walking on along the row still works: 1 + 2 + 1 = 4.
    for code in [KeyCode::Right, KeyCode::Enter] {
        let cmd = handle_key_event(key(code)).expect("mapped key");
        if let Some(action) = cursor.handle(cmd, game.selection().is_some()) {
            let accepted = game.apply_action(action);
            cursor.settle(action, accepted, game.selection().and_then(|sel| sel.last()));
        }
    }
    assert_eq!(game.score(), 30);
    assert_eq!(cursor.position(), Position::new(0, 3));
}
