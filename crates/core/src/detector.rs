//! Detector module - scans the grid for any remaining move
//!
//! A run is a contiguous straight segment of `MIN_LINE_LENGTH..=MAX_LINE_LENGTH`
//! tiles within one row or one column. The scan visits rows first, then
//! columns; within a line it goes by start position, then by length.
//!
//! [`has_viable_run`] answers the game-over question: it looks for any run whose
//! sum lies in the achievable target range `MIN_TARGET_SUM..=MAX_TARGET_SUM`,
//! not for a run matching the live target. With tile values of at least 1 every
//! two-tile run qualifies, so this never reports a dead grid. The stricter
//! [`find_run_with_sum`] checks a specific target.

use crate::grid::Grid;
use crate::types::{Position, GRID_SIZE, MAX_LINE_LENGTH, MAX_TARGET_SUM, MIN_LINE_LENGTH, MIN_TARGET_SUM};

/// Orientation of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

/// A contiguous straight segment of tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// Top-left end of the run
    pub start: Position,
    pub axis: Axis,
    pub len: usize,
    pub sum: u32,
}

impl Run {
    /// Positions covered by the run, from `start` outward
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len as u8).map(move |offset| match self.axis {
            Axis::Horizontal => Position::new(self.start.row, self.start.col + offset),
            Axis::Vertical => Position::new(self.start.row + offset, self.start.col),
        })
    }
}

/// Whether any run sums into the achievable target range
pub fn has_viable_run(grid: &Grid) -> bool {
    find_run(grid, |sum| (MIN_TARGET_SUM..=MAX_TARGET_SUM).contains(&sum)).is_some()
}

/// First run (in scan order) whose sum equals `target`
pub fn find_run_with_sum(grid: &Grid, target: u32) -> Option<Run> {
    find_run(grid, |sum| sum == target)
}

/// First run (in scan order) whose sum satisfies `accept`
pub fn find_run(grid: &Grid, mut accept: impl FnMut(u32) -> bool) -> Option<Run> {
    for axis in [Axis::Horizontal, Axis::Vertical] {
        for line in 0..GRID_SIZE as u8 {
            for start in 0..=(GRID_SIZE - MIN_LINE_LENGTH) as u8 {
                let start_pos = match axis {
                    Axis::Horizontal => Position::new(line, start),
                    Axis::Vertical => Position::new(start, line),
                };
                let max_len = MAX_LINE_LENGTH.min(GRID_SIZE - start as usize);

                let mut sum = 0u32;
                for offset in 0..max_len as u8 {
                    let pos = match axis {
                        Axis::Horizontal => Position::new(line, start + offset),
                        Axis::Vertical => Position::new(start + offset, line),
                    };
                    sum += grid.value(pos).unwrap_or(0) as u32;

                    let len = offset as usize + 1;
                    if len >= MIN_LINE_LENGTH && accept(sum) {
                        return Some(Run {
                            start: start_pos,
                            axis,
                            len,
                            sum,
                        });
                    }
                }
            }
        }
    }
    None
}
