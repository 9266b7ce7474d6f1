//! Grid module - the 6x6 tile matrix
//!
//! The grid is a square of tiles where every cell always holds exactly one tile.
//! Uses a flat array for cache locality and zero-allocation refills.
//! Coordinates: (row, col) where row 0 is the top; gravity pulls toward the
//! highest row index.

use arrayvec::ArrayVec;

use crate::rng::TileSource;
use crate::types::{Position, TileId, GRID_SIZE, MAX_NUMBER, MIN_NUMBER};

/// Total number of cells on the grid
const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A numbered tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Identity, fixed from creation until the tile is removed
    pub id: TileId,
    /// Value in `MIN_NUMBER..=MAX_NUMBER`
    pub value: u8,
    /// True only while the tile is part of an in-progress selection
    pub selected: bool,
}

impl Tile {
    pub fn new(id: TileId, value: u8) -> Self {
        Self {
            id,
            value,
            selected: false,
        }
    }
}

/// The playfield - `GRID_SIZE` x `GRID_SIZE` tiles in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [Tile; CELL_COUNT],
}

impl Grid {
    /// Fill every cell with a fresh random tile
    pub fn generate(source: &mut TileSource) -> Self {
        Self {
            cells: std::array::from_fn(|_| source.next_tile()),
        }
    }

    /// Build a grid with fixed values (row-major, row 0 first).
    ///
    /// Ids are still minted by `source` so they never collide with tiles the
    /// same source creates later. Values are clamped into the tile range.
    pub fn from_values(values: [[u8; GRID_SIZE]; GRID_SIZE], source: &mut TileSource) -> Self {
        Self {
            cells: std::array::from_fn(|i| {
                let value = values[i / GRID_SIZE][i % GRID_SIZE].clamp(MIN_NUMBER, MAX_NUMBER);
                Tile::new(source.next_id(), value)
            }),
        }
    }

    /// Tile at `pos`, or None when off the grid
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        pos.index().map(|i| &self.cells[i])
    }

    /// Value at `pos`, or None when off the grid
    pub fn value(&self, pos: Position) -> Option<u8> {
        self.get(pos).map(|t| t.value)
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks_exact(GRID_SIZE)
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Column `col` from top to bottom
    pub fn column(&self, col: usize) -> Option<[Tile; GRID_SIZE]> {
        if col >= GRID_SIZE {
            return None;
        }
        Some(std::array::from_fn(|row| self.cells[row * GRID_SIZE + col]))
    }

    /// Set the selection flag of the tile at `pos`.
    /// Returns false if out of bounds
    pub fn set_selected(&mut self, pos: Position, selected: bool) -> bool {
        match pos.index() {
            Some(i) => {
                self.cells[i].selected = selected;
                true
            }
            None => false,
        }
    }

    /// Clear the selection flag on every tile
    pub fn clear_selection_marks(&mut self) {
        for tile in &mut self.cells {
            tile.selected = false;
        }
    }

    /// Remove the tiles at `removed` and let every column settle.
    ///
    /// Each column is rebuilt through [`refill_column`]: survivors keep their
    /// relative order and drop to the bottom, and new tiles fill the vacated top
    /// cells. Columns with nothing removed come back unchanged.
    ///
    /// Returns the number of tiles removed (off-grid and repeated positions are
    /// ignored).
    pub fn remove_and_refill(&mut self, removed: &[Position], source: &mut TileSource) -> usize {
        let mut mask = [false; CELL_COUNT];
        for idx in removed.iter().filter_map(Position::index) {
            mask[idx] = true;
        }

        for col in 0..GRID_SIZE {
            let survivors: ArrayVec<Tile, GRID_SIZE> = (0..GRID_SIZE)
                .rev()
                .map(|row| row * GRID_SIZE + col)
                .filter(|&idx| !mask[idx])
                .map(|idx| self.cells[idx])
                .collect();

            let settled = refill_column(&survivors, source);
            for (row, tile) in settled.into_iter().enumerate() {
                self.cells[row * GRID_SIZE + col] = tile;
            }
        }

        mask.iter().filter(|&&m| m).count()
    }
}

/// Apply gravity to one column.
///
/// `survivors` are the column's remaining tiles listed bottom-to-top. Fresh
/// tiles are stacked on top until the column holds `GRID_SIZE` tiles, and the
/// result is returned top-to-bottom, so survivors occupy the bottom cells and
/// the new tiles the top ones. Extra survivors beyond `GRID_SIZE` are dropped.
pub fn refill_column(survivors: &[Tile], source: &mut TileSource) -> [Tile; GRID_SIZE] {
    let mut stack: ArrayVec<Tile, GRID_SIZE> = survivors.iter().copied().take(GRID_SIZE).collect();
    while !stack.is_full() {
        stack.push(source.next_tile());
    }
    std::array::from_fn(|row| stack[GRID_SIZE - 1 - row])
}
