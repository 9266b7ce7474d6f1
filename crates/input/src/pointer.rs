//! Mouse drag gestures.
//!
//! The tracker turns raw mouse events into gesture actions:
//!
//! - left button down on a tile begins a selection
//! - dragging into a tile extends it, once per newly entered tile
//! - releasing over the playfield ends the gesture
//! - dragging or releasing outside the playfield aborts it
//!
//! Terminals report drags at cell granularity but a fast drag can skip cells.
//! When the pointer jumps along a row or column, every tile in between is
//! emitted as its own extension so the core sees a contiguous walk.

use arrayvec::ArrayVec;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, GameAction, GridHit, Position, GRID_SIZE};

/// Actions produced by a single mouse event
pub type PointerActions = ArrayVec<GameAction, GRID_SIZE>;

/// Tracks the state of one mouse drag.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    dragging: bool,
    /// Last tile the pointer was over during the drag
    hover: Option<Position>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Handle a mouse event. `hit` maps terminal (column, row) onto the playfield.
    pub fn handle_mouse(&mut self, event: MouseEvent, hit: impl Fn(u16, u16) -> GridHit) -> PointerActions {
        let target = hit(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(target),
            MouseEventKind::Drag(MouseButton::Left) => self.drag(target),
            MouseEventKind::Up(MouseButton::Left) => self.release(target),
            _ => PointerActions::new(),
        }
    }

    /// Button pressed over `target`
    pub fn press(&mut self, target: GridHit) -> PointerActions {
        let mut out = PointerActions::new();
        if let GridHit::Tile(pos) = target {
            self.dragging = true;
            self.hover = Some(pos);
            out.push(GameAction::Begin(pos));
        }
        out
    }

    /// Pointer moved to `target` with the button held
    pub fn drag(&mut self, target: GridHit) -> PointerActions {
        let mut out = PointerActions::new();
        if !self.dragging {
            return out;
        }

        match target {
            GridHit::Tile(pos) => {
                if self.hover == Some(pos) {
                    return out;
                }
                if let Some(from) = self.hover {
                    push_walk(&mut out, from, pos);
                } else {
                    out.push(GameAction::Extend(pos));
                }
                self.hover = Some(pos);
            }
            GridHit::Inside => {}
            GridHit::Outside => {
                self.reset();
                out.push(GameAction::Abort);
            }
        }
        out
    }

    /// Button released over `target`
    pub fn release(&mut self, target: GridHit) -> PointerActions {
        let mut out = PointerActions::new();
        if !self.dragging {
            return out;
        }
        self.reset();
        match target {
            GridHit::Tile(_) | GridHit::Inside => out.push(GameAction::End),
            GridHit::Outside => out.push(GameAction::Abort),
        }
        out
    }

    /// Forget the current drag (e.g. on new game)
    pub fn reset(&mut self) {
        self.dragging = false;
        self.hover = None;
    }
}

/// Emit one extension per tile stepped through from `from` (exclusive) to `to`.
///
/// Only straight jumps are expanded; anything else is passed through as a
/// single extension for the core to judge.
fn push_walk(out: &mut PointerActions, from: Position, to: Position) {
    let dir = if from.row == to.row && to.col > from.col {
        Direction::Right
    } else if from.row == to.row && to.col < from.col {
        Direction::Left
    } else if from.col == to.col && to.row > from.row {
        Direction::Down
    } else if from.col == to.col && to.row < from.row {
        Direction::Up
    } else {
        out.push(GameAction::Extend(to));
        return;
    };

    let mut cur = from;
    while cur != to && !out.is_full() {
        let Some(next) = cur.step(dir) else {
            break;
        };
        out.push(GameAction::Extend(next));
        cur = next;
    }
}
