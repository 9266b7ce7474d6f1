//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and move
//! validation. It has **zero dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Total**: No transition panics or errors on malformed gesture sequences
//!
//! # Module Structure
//!
//! - [`grid`]: 6x6 tile matrix with gravity refill
//! - [`rng`]: Seeded tile values, tile ids and target sums
//! - [`selection`]: Incremental straight-line validation during a drag
//! - [`scoring`]: Line acceptance and the points table
//! - [`detector`]: Scan for remaining runs (game-over check)
//! - [`game_state`]: Complete session state and gesture transitions
//! - [`snapshot`]: Plain-data view of the state for renderers
//!
//! # Game Rules
//!
//! - Drag across a straight line of 2 to 6 orthogonally adjacent tiles
//! - If the values add up to the target, the line scores and disappears
//! - Tiles above fall down and new tiles drop in from the top
//! - A new target is drawn after every successful line
//!
//! # Example
//!
//! ```
//! use tui_linesum_core::GameState;
//! use tui_linesum_types::{GameAction, Position, GRID_SIZE};
//!
//! // Top row [1, 1, 2, 1, 1, 1], target 2
//! let mut values = [[4u8; GRID_SIZE]; GRID_SIZE];
//! values[0] = [1, 1, 2, 1, 1, 1];
//! let mut game = GameState::with_grid(12345, values, 2);
//!
//! game.apply_action(GameAction::Begin(Position::new(0, 0)));
//! game.apply_action(GameAction::Extend(Position::new(0, 1)));
//! game.apply_action(GameAction::End);
//!
//! assert_eq!(game.score(), 10);
//! ```

pub mod detector;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod snapshot;

pub use tui_linesum_types as types;

// Re-export commonly used types for convenience
pub use detector::{find_run, find_run_with_sum, has_viable_run, Axis, Run};
pub use game_state::{CommitEvent, GameState, TerminalRule};
pub use grid::{refill_column, Grid, Tile};
pub use rng::TileSource;
pub use scoring::{is_valid_line, line_score};
pub use selection::{Rejection, Selection};
pub use snapshot::{GameSnapshot, TileSnapshot};
