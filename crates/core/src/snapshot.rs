use arrayvec::ArrayVec;

use crate::grid::Tile;
use crate::types::{Position, TileId, GRID_SIZE, MAX_LINE_LENGTH, MIN_NUMBER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub id: TileId,
    pub value: u8,
    pub selected: bool,
}

impl From<Tile> for TileSnapshot {
    fn from(value: Tile) -> Self {
        Self {
            id: value.id,
            value: value.value,
            selected: value.selected,
        }
    }
}

impl Default for TileSnapshot {
    fn default() -> Self {
        Self {
            id: TileId::default(),
            value: MIN_NUMBER,
            selected: false,
        }
    }
}

/// Everything a presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub tiles: [[TileSnapshot; GRID_SIZE]; GRID_SIZE],
    pub selection: ArrayVec<Position, MAX_LINE_LENGTH>,
    pub target_sum: u32,
    pub current_sum: u32,
    pub score: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u64,
    pub commits: u32,
}

impl GameSnapshot {
    pub fn tile(&self, pos: Position) -> Option<&TileSnapshot> {
        if !pos.in_bounds() {
            return None;
        }
        Some(&self.tiles[pos.row as usize][pos.col as usize])
    }

    pub fn selecting(&self) -> bool {
        !self.selection.is_empty()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: [[TileSnapshot::default(); GRID_SIZE]; GRID_SIZE],
            selection: ArrayVec::new(),
            target_sum: 0,
            current_sum: 0,
            score: 0,
            game_over: false,
            episode_id: 0,
            seed: 0,
            commits: 0,
        }
    }
}
