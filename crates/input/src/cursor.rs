//! Keyboard cursor.
//!
//! Lets the game be played without a mouse: the cursor marks a tile, Select
//! begins a selection there, moving the cursor while selecting extends the
//! line, and Select again ends the gesture.

use crate::map::KeyCommand;
use crate::types::{GameAction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardCursor {
    pos: Position,
}

impl KeyboardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Move the cursor directly, e.g. to follow a mouse press.
    /// Ignored when `pos` is off the grid
    pub fn set_position(&mut self, pos: Position) {
        if pos.in_bounds() {
            self.pos = pos;
        }
    }

    /// Translate a keyboard command. `selecting` is whether a selection is active.
    pub fn handle(&mut self, cmd: KeyCommand, selecting: bool) -> Option<GameAction> {
        match cmd {
            KeyCommand::Move(dir) => {
                let next = self.pos.step(dir)?;
                self.pos = next;
                selecting.then_some(GameAction::Extend(next))
            }
            KeyCommand::Select => {
                if selecting {
                    Some(GameAction::End)
                } else {
                    Some(GameAction::Begin(self.pos))
                }
            }
            KeyCommand::Cancel => Some(GameAction::Abort),
            KeyCommand::NewGame => Some(GameAction::NewGame),
        }
    }

    /// Report how the game took an action from [`handle`](Self::handle).
    /// A rejected extension moves the cursor back to `anchor`, the last tile of
    /// the live selection, so the cursor never drifts off the line.
    pub fn settle(&mut self, action: GameAction, accepted: bool, anchor: Option<Position>) {
        if let (GameAction::Extend(_), false, Some(anchor)) = (action, accepted, anchor) {
            self.set_position(anchor);
        }
    }
}
