//! Game state module - manages the complete session
//!
//! This module ties together the grid, the tile source, the selection engine,
//! scoring and the move detector. It owns every piece of mutable game state and
//! exposes one transition per gesture step.
//!
//! Every transition is total: positions off the grid, extensions without an
//! active selection and gestures after game over are ignored, leaving the state
//! as it was. Transitions return `true` when observable state changed.

use tracing::{debug, trace};

use crate::detector::{find_run_with_sum, has_viable_run};
use crate::grid::Grid;
use crate::rng::TileSource;
use crate::scoring::{is_valid_line, line_score};
use crate::selection::Selection;
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::types::{GameAction, Position, GRID_SIZE};

/// How the game decides that no moves are left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalRule {
    /// Game over when no run sums into the achievable target range.
    /// In practice this never fires; it is the classic rule.
    #[default]
    Range,
    /// Game over when no run sums to the live target
    LiveTarget,
}

/// A successful commit, kept until the presentation consumes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitEvent {
    pub length: usize,
    pub sum: u32,
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    source: TileSource,
    target_sum: u32,
    /// Active gesture; None while idle.
    selection: Option<Selection>,
    score: u32,
    game_over: bool,
    rule: TerminalRule,
    /// Monotonic episode id (increments on new game).
    episode_id: u32,
    /// Successful commits in this episode.
    commits: u32,
    last_commit: Option<CommitEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut source = TileSource::new(seed);
        let grid = Grid::generate(&mut source);
        let target_sum = source.target_sum();
        Self::from_parts(grid, source, target_sum)
    }

    /// Create a game on a fixed grid and target.
    ///
    /// Refill tiles and later targets still come from `seed`.
    pub fn with_grid(seed: u64, values: [[u8; GRID_SIZE]; GRID_SIZE], target_sum: u32) -> Self {
        let mut source = TileSource::new(seed);
        let grid = Grid::from_values(values, &mut source);
        Self::from_parts(grid, source, target_sum)
    }

    fn from_parts(grid: Grid, source: TileSource, target_sum: u32) -> Self {
        Self {
            grid,
            source,
            target_sum,
            selection: None,
            score: 0,
            game_over: false,
            rule: TerminalRule::default(),
            episode_id: 0,
            commits: 0,
            last_commit: None,
        }
    }

    pub fn with_rule(mut self, rule: TerminalRule) -> Self {
        self.rule = rule;
        self.refresh_game_over();
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn target_sum(&self) -> u32 {
        self.target_sum
    }

    /// Running sum of the active selection (0 while idle)
    pub fn current_sum(&self) -> u32 {
        self.selection.as_ref().map(Selection::sum).unwrap_or(0)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn rule(&self) -> TerminalRule {
        self.rule
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn commits(&self) -> u32 {
        self.commits
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Selected positions in gesture order (empty while idle)
    pub fn selected_positions(&self) -> &[Position] {
        self.selection.as_ref().map(Selection::positions).unwrap_or(&[])
    }

    /// Consume the last successful commit
    pub fn take_last_commit(&mut self) -> Option<CommitEvent> {
        self.last_commit.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (row, tiles) in self.grid.rows().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                out.tiles[row][col] = TileSnapshot::from(*tile);
            }
        }
        out.selection.clear();
        out.selection
            .extend(self.selected_positions().iter().copied());
        out.target_sum = self.target_sum;
        out.current_sum = self.current_sum();
        out.score = self.score;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.source.seed();
        out.commits = self.commits;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start over: fresh grid and target, zero score, no selection.
    ///
    /// The tile source carries on rather than reseeding, so consecutive games
    /// differ.
    pub fn new_game(&mut self) {
        self.grid = Grid::generate(&mut self.source);
        self.target_sum = self.source.target_sum();
        self.selection = None;
        self.score = 0;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.commits = 0;
        self.last_commit = None;
        self.refresh_game_over();
        debug!(
            episode = self.episode_id,
            target = self.target_sum,
            game_over = self.game_over,
            "new game"
        );
    }

    /// Start a selection at `pos`, replacing any selection in progress
    pub fn begin_selection(&mut self, pos: Position) -> bool {
        if self.game_over {
            return false;
        }
        let Some(value) = self.grid.value(pos) else {
            return false;
        };

        if self.selection.is_some() {
            self.grid.clear_selection_marks();
        }
        self.selection = Some(Selection::start(pos, value));
        self.grid.set_selected(pos, true);
        true
    }

    /// Add `pos` to the active selection if it passes the admission tests
    pub fn extend_selection(&mut self, pos: Position) -> bool {
        if self.game_over {
            return false;
        }
        let Some(value) = self.grid.value(pos) else {
            return false;
        };
        let Some(selection) = self.selection.as_mut() else {
            return false;
        };

        match selection.try_extend(pos, value) {
            Ok(()) => {
                self.grid.set_selected(pos, true);
                true
            }
            Err(reason) => {
                trace!(%pos, reason = reason.as_str(), "extension rejected");
                false
            }
        }
    }

    /// Finish the gesture: commit a valid line, otherwise discard the selection
    pub fn end_selection(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(selection) = self.selection.take() else {
            return false;
        };

        if is_valid_line(selection.len(), selection.sum(), self.target_sum) {
            self.commit(&selection);
        } else {
            trace!(
                len = selection.len(),
                sum = selection.sum(),
                target = self.target_sum,
                "line rejected"
            );
            self.grid.clear_selection_marks();
        }
        true
    }

    /// Discard the active selection without scoring.
    ///
    /// Allowed in every state, including game over.
    pub fn abort_selection(&mut self) -> bool {
        if self.selection.take().is_none() {
            return false;
        }
        self.grid.clear_selection_marks();
        true
    }

    fn commit(&mut self, selection: &Selection) {
        let points = line_score(selection.len());
        self.score = self.score.saturating_add(points);

        self.grid
            .remove_and_refill(selection.positions(), &mut self.source);
        self.grid.clear_selection_marks();

        let event = CommitEvent {
            length: selection.len(),
            sum: selection.sum(),
            points,
        };
        self.last_commit = Some(event);
        self.commits = self.commits.wrapping_add(1);

        self.target_sum = self.source.target_sum();
        self.game_over = !self.has_moves();

        debug!(
            len = event.length,
            sum = event.sum,
            points,
            score = self.score,
            next_target = self.target_sum,
            game_over = self.game_over,
            "line committed"
        );
    }

    /// Re-check a freshly dealt grid. Only the live-target rule can end a game
    /// before its first line; the range rule is checked after commits only.
    fn refresh_game_over(&mut self) {
        self.game_over = self.rule == TerminalRule::LiveTarget && !self.has_moves();
    }

    /// Whether the current grid still offers a move under the active rule
    pub fn has_moves(&self) -> bool {
        match self.rule {
            TerminalRule::Range => has_viable_run(&self.grid),
            TerminalRule::LiveTarget => find_run_with_sum(&self.grid, self.target_sum).is_some(),
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Begin(pos) => self.begin_selection(pos),
            GameAction::Extend(pos) => self.extend_selection(pos),
            GameAction::End => self.end_selection(),
            GameAction::Abort => self.abort_selection(),
            GameAction::NewGame => {
                self.new_game();
                true
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn force_game_over(&mut self) {
        self.game_over = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
