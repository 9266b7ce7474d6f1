//! Shared types module - constants, coordinates and game actions
//!
//! This crate defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a square grid:
//!
//! - **Side length**: 6 cells (rows and columns indexed 0-5)
//! - **Row 0** is the top; gravity pulls tiles toward row 5
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 6 | Cells per side |
//! | `MIN_NUMBER` | 1 | Smallest tile value |
//! | `MAX_NUMBER` | 4 | Largest tile value |
//! | `MIN_LINE_LENGTH` | 2 | Shortest line that can be committed |
//! | `MAX_LINE_LENGTH` | 6 | Longest line a selection may grow to |
//! | `MIN_TARGET_SUM` | 2 | `MIN_LINE_LENGTH * MIN_NUMBER` |
//! | `MAX_TARGET_SUM` | 24 | `MAX_LINE_LENGTH * MAX_NUMBER` |
//!
//! # Line Scores
//!
//! | Length | Points |
//! |--------|--------|
//! | 2 | 10 |
//! | 3 | 30 |
//! | 4 | 60 |
//! | 5 | 100 |
//! | 6 | 150 |
//!
//! # Examples
//!
//! ```
//! use tui_linesum_types::{Direction, Position, GRID_SIZE};
//!
//! let p = Position::new(0, 0);
//! assert!(p.is_adjacent(Position::new(0, 1)));
//! assert!(!p.is_adjacent(Position::new(1, 1)));
//!
//! // Stepping off the grid yields None
//! assert_eq!(p.step(Direction::Up), None);
//! assert_eq!(p.step(Direction::Down), Some(Position::new(1, 0)));
//!
//! assert_eq!(GRID_SIZE, 6);
//! ```

use std::fmt;

/// Grid side length in cells (6x6)
pub const GRID_SIZE: usize = 6;

/// Smallest value a tile can carry
pub const MIN_NUMBER: u8 = 1;

/// Largest value a tile can carry
pub const MAX_NUMBER: u8 = 4;

/// Minimum number of tiles in a committable line
pub const MIN_LINE_LENGTH: usize = 2;

/// Maximum number of tiles a selection may hold
pub const MAX_LINE_LENGTH: usize = 6;

/// Smallest target sum that can be generated
pub const MIN_TARGET_SUM: u32 = (MIN_LINE_LENGTH as u32) * (MIN_NUMBER as u32);

/// Largest target sum that can be generated
pub const MAX_TARGET_SUM: u32 = (MAX_LINE_LENGTH as u32) * (MAX_NUMBER as u32);

/// Points awarded per committed line, indexed by line length.
///
/// Lengths outside `MIN_LINE_LENGTH..=MAX_LINE_LENGTH` score 0.
pub const LINE_SCORES: [u32; MAX_LINE_LENGTH + 1] = [0, 0, 10, 30, 60, 100, 150];


/// A grid coordinate. Row 0 is the top row, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on the grid
    pub fn in_bounds(&self) -> bool {
        (self.row as usize) < GRID_SIZE && (self.col as usize) < GRID_SIZE
    }

    /// Flat row-major index, or None when off the grid
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some(self.row as usize * GRID_SIZE + self.col as usize)
    }

    /// Orthogonal neighbour check: exactly one axis differs, by exactly 1.
    pub fn is_adjacent(&self, other: Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
    }

    /// Neighbouring position in `dir`, or None when that would leave the grid
    pub fn step(&self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 || row >= GRID_SIZE as i16 || col >= GRID_SIZE as i16 {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cursor / step direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row delta, column delta)
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Result of mapping a screen coordinate onto the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    /// Over a tile
    Tile(Position),
    /// Inside the playfield frame but between tiles
    Inside,
    /// Outside the playfield
    Outside,
}

/// Opaque tile identity.
///
/// Assigned once when a tile is created and never changed when gravity
/// moves the tile to another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Gesture-level actions that can be applied to the game state
///
/// These are produced by both mouse and keyboard input. Each maps to one
/// core transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a selection at a tile
    Begin(Position),
    /// Try to add a tile to the active selection
    Extend(Position),
    /// Finish the gesture: commit if the line is valid, otherwise discard it
    End,
    /// Discard the active selection without scoring
    Abort,
    /// Start over with a fresh grid, target and score
    NewGame,
}

impl GameAction {
    /// camelCase name, used in log records
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Begin(_) => "begin",
            GameAction::Extend(_) => "extend",
            GameAction::End => "end",
            GameAction::Abort => "abort",
            GameAction::NewGame => "newGame",
        }
    }
}
