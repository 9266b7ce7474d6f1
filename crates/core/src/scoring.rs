//! Scoring module - line acceptance and points
//!
//! A line is accepted when its length is within
//! `MIN_LINE_LENGTH..=MAX_LINE_LENGTH` and its sum equals the live target.
//! Points come from the fixed [`LINE_SCORES`] table.

use crate::types::{LINE_SCORES, MAX_LINE_LENGTH, MIN_LINE_LENGTH};

/// Points for a committed line of `len` tiles (0 outside the table)
pub fn line_score(len: usize) -> u32 {
    LINE_SCORES.get(len).copied().unwrap_or(0)
}

pub fn is_valid_length(len: usize) -> bool {
    (MIN_LINE_LENGTH..=MAX_LINE_LENGTH).contains(&len)
}

/// Both conditions are required: a legal length and an exact sum
pub fn is_valid_line(len: usize, sum: u32, target: u32) -> bool {
    is_valid_length(len) && sum == target
}
