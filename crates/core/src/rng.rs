//! RNG module - seeded tile and target generation
//!
//! Every random draw in the game goes through a single [`TileSource`] so that a
//! seed fully determines a game: the initial grid, every refill tile and every
//! target sum.
//!
//! The source also mints tile identities. Ids are a monotonic counter, so they
//! stay unique for the lifetime of the source regardless of how many tiles are
//! created and discarded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Tile;
use crate::types::{TileId, MAX_NUMBER, MAX_TARGET_SUM, MIN_NUMBER, MIN_TARGET_SUM};

/// Seeded generator for tile values, tile ids and target sums
#[derive(Debug, Clone)]
pub struct TileSource {
    rng: StdRng,
    seed: u64,
    next_id: u64,
}

impl TileSource {
    /// Create a new source with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            next_id: 0,
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform tile value in `MIN_NUMBER..=MAX_NUMBER`
    pub fn next_value(&mut self) -> u8 {
        self.rng.random_range(MIN_NUMBER..=MAX_NUMBER)
    }

    /// Fresh, never-before-issued tile id
    pub fn next_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Fresh unselected tile with a random value
    pub fn next_tile(&mut self) -> Tile {
        let id = self.next_id();
        let value = self.next_value();
        Tile::new(id, value)
    }

    /// Uniform target sum in `MIN_TARGET_SUM..=MAX_TARGET_SUM`.
    ///
    /// The value is not checked against the current grid; a target may be
    /// unreachable until a later refill makes it reachable.
    pub fn target_sum(&mut self) -> u32 {
        self.rng.random_range(MIN_TARGET_SUM..=MAX_TARGET_SUM)
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TileSource::new(12345);
        let mut b = TileSource::new(12345);

        for _ in 0..100 {
            assert_eq!(a.next_tile(), b.next_tile());
            assert_eq!(a.target_sum(), b.target_sum());
        }
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut source = TileSource::new(7);
        for _ in 0..1000 {
            let v = source.next_value();
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&v), "value {} out of range", v);
        }
    }

    #[test]
    fn test_every_value_is_produced() {
        let mut source = TileSource::new(7);
        let mut seen = [false; MAX_NUMBER as usize + 1];
        for _ in 0..1000 {
            seen[source.next_value() as usize] = true;
        }
        for v in MIN_NUMBER..=MAX_NUMBER {
            assert!(seen[v as usize], "value {} never generated", v);
        }
    }

    #[test]
    fn test_target_sum_in_range() {
        let mut source = TileSource::new(99);
        for _ in 0..1000 {
            let t = source.target_sum();
            assert!((MIN_TARGET_SUM..=MAX_TARGET_SUM).contains(&t));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut source = TileSource::new(3);
        let ids: Vec<_> = (0..500).map(|_| source.next_tile().id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }
}
