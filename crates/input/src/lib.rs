//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! and mouse events into [`crate::types::GameAction`]s:
//!
//! - [`map`]: key bindings
//! - [`pointer`]: mouse drag gestures, given a screen-to-grid hit test
//! - [`cursor`]: keyboard cursor that drives the same gestures

pub mod cursor;
pub mod map;
pub mod pointer;

pub use tui_linesum_types as types;

pub use cursor::KeyboardCursor;
pub use map::{handle_key_event, should_quit, KeyCommand};
pub use pointer::{PointerActions, PointerTracker};
