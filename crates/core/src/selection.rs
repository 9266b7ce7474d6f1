//! Selection module - incremental validation of a drag gesture
//!
//! A selection is the ordered list of grid positions the player has dragged
//! across. It grows one tile at a time, and every candidate must pass four
//! admission tests, checked in this order:
//!
//! 1. **Adjacency**: orthogonally next to the last selected position
//! 2. **Straightness**: shares its row with every selected position, or its
//!    column with every selected position (checked against the whole line, so
//!    a line can never bend)
//! 3. **No revisit**: not already in the selection
//! 4. **Length**: the selection is still shorter than `MAX_LINE_LENGTH`
//!
//! A failed test leaves the selection untouched.

use arrayvec::ArrayVec;

use crate::types::{Position, MAX_LINE_LENGTH};

/// Why a candidate position was not admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotAdjacent,
    NotStraight,
    AlreadySelected,
    TooLong,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::NotAdjacent => "not adjacent",
            Rejection::NotStraight => "not straight",
            Rejection::AlreadySelected => "already selected",
            Rejection::TooLong => "too long",
        }
    }
}

/// An in-progress straight line of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    positions: ArrayVec<Position, MAX_LINE_LENGTH>,
    sum: u32,
}

impl Selection {
    /// Start a selection at `pos` holding a tile of `value`
    pub fn start(pos: Position, value: u8) -> Self {
        let mut positions = ArrayVec::new();
        positions.push(pos);
        Self {
            positions,
            sum: value as u32,
        }
    }

    /// Run the admission tests for `pos` without modifying the selection
    pub fn check_extend(&self, pos: Position) -> Result<(), Rejection> {
        let Some(last) = self.last() else {
            return Ok(());
        };

        if !last.is_adjacent(pos) {
            return Err(Rejection::NotAdjacent);
        }

        let same_row = self.positions.iter().all(|p| p.row == pos.row);
        let same_col = self.positions.iter().all(|p| p.col == pos.col);
        if !same_row && !same_col {
            return Err(Rejection::NotStraight);
        }

        if self.contains(pos) {
            return Err(Rejection::AlreadySelected);
        }

        if self.positions.is_full() {
            return Err(Rejection::TooLong);
        }

        Ok(())
    }

    /// Admit `pos` if it passes every test, adding `value` to the running sum
    pub fn try_extend(&mut self, pos: Position, value: u8) -> Result<(), Rejection> {
        self.check_extend(pos)?;
        self.positions.push(pos);
        self.sum += value as u32;
        Ok(())
    }

    /// Positions in gesture order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sum of the selected tile values
    pub fn sum(&self) -> u32 {
        self.sum
    }

    pub fn last(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}
