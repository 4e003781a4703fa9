//! The world: one generation of a square toroidal grid.

use life_core::{Error, Position, Result};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A square toroidal grid of live/dead cells.
///
/// Cells are stored row-major: index 0 is the top-left cell, indices grow
/// left to right and then top to bottom. All coordinate access wraps at the
/// edges, so out-of-bounds indexing cannot happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub(crate) dimension: i32,
    pub(crate) cells: Vec<bool>,
    pub(crate) generation: u64,
    pub(crate) population: usize,
}

impl World {
    /// Create a world with all cells dead.
    pub fn new(dimension: i32) -> Result<Self> {
        if dimension < 1 {
            return Err(Error::InvalidDimension(dimension));
        }
        let size = (dimension * dimension) as usize;
        Ok(Self {
            dimension,
            cells: vec![false; size],
            generation: 0,
            population: 0,
        })
    }

    /// Create a fresh world with a randomly chosen set of live cells.
    ///
    /// The live-cell target is drawn uniformly from `[0, dimension^2 / 2]`,
    /// both ends inclusive. A target of 0 fills nothing.
    pub fn randomize(dimension: i32, rng: &mut ChaCha8Rng) -> Result<Self> {
        let mut world = Self::new(dimension)?;
        let target = rng.gen_range(0..=world.cells.len() / 2);
        world.scatter(target, rng);
        world.population = world.recount_population();
        debug!(dimension, population = world.population, "randomized world");
        Ok(world)
    }

    /// Mark `target` distinct random cells alive. Duplicate picks do not
    /// count toward progress, so the loop runs until exactly `target` cells
    /// are alive on top of whatever was already set.
    pub(crate) fn scatter(&mut self, target: usize, rng: &mut ChaCha8Rng) {
        let total = self.cells.len();
        let mut placed = 0;
        while placed < target {
            // Exclusive upper bound: every pick is a valid index.
            let index = rng.gen_range(0..total);
            if !self.cells[index] {
                self.cells[index] = true;
                placed += 1;
            }
        }
    }

    /// Cell state at the given coordinates, toroidally wrapped.
    pub fn get(&self, row: i32, col: i32) -> bool {
        self.cells[self.index_of(Position::new(row, col))]
    }

    /// Set one cell directly. Leaves `generation` untouched; callers that
    /// need `population` current immediately should recount afterwards.
    pub fn set(&mut self, row: i32, col: i32, alive: bool) {
        let index = self.index_of(Position::new(row, col));
        self.cells[index] = alive;
    }

    /// Flip one cell and return its new state.
    pub fn toggle(&mut self, row: i32, col: i32) -> bool {
        let index = self.index_of(Position::new(row, col));
        self.cells[index] = !self.cells[index];
        self.cells[index]
    }

    /// Count live cells by scanning the whole grid.
    ///
    /// Population is always recomputed this way rather than tracked
    /// incrementally, so it cannot drift from the cell buffer.
    pub fn recount_population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    /// True when no cells are alive. The driver polls this to decide when
    /// to stop stepping; the engine itself never halts.
    pub fn is_extinct(&self) -> bool {
        self.population == 0
    }

    /// Advance this world by one generation in place.
    pub fn step(&mut self) {
        *self = crate::engine::next_generation(self);
    }

    fn index_of(&self, pos: Position) -> usize {
        let wrapped = pos.wrap(self.dimension);
        (wrapped.row * self.dimension + wrapped.col) as usize
    }

    /// Decompose a row-major index into coordinates.
    pub(crate) fn position_of(&self, index: usize) -> Position {
        Position::new(index as i32 / self.dimension, index as i32 % self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_world_creation() {
        let world = World::new(10).unwrap();
        assert_eq!(world.dimension(), 10);
        assert_eq!(world.cells.len(), 100);
        assert_eq!(world.generation(), 0);
        assert_eq!(world.population(), 0);
        assert!(world.is_extinct());
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(World::new(0), Err(Error::InvalidDimension(0))));
        assert!(matches!(World::new(-3), Err(Error::InvalidDimension(-3))));

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(World::randomize(0, &mut rng).is_err());
    }

    #[test]
    fn test_toroidal_wrapping() {
        let mut world = World::new(10).unwrap();
        world.set(0, 0, true);
        world.set(9, 9, true);

        // One step past either edge lands on the opposite edge.
        assert!(world.get(10, 10));
        assert!(world.get(-1, -1));
        assert!(world.get(0, 10));
        assert!(world.get(10, 0));
        assert!(!world.get(1, 1));
    }

    #[test]
    fn test_set_defers_population() {
        let mut world = World::new(4).unwrap();
        world.set(1, 2, true);
        world.set(3, 0, true);

        // Direct edits leave the cached count alone until a recount.
        assert_eq!(world.population(), 0);
        assert_eq!(world.recount_population(), 2);

        world.set(1, 2, false);
        assert_eq!(world.recount_population(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut world = World::new(4).unwrap();
        assert!(world.toggle(2, 2));
        assert!(world.get(2, 2));
        assert!(!world.toggle(2, 2));
        assert!(!world.get(2, 2));
    }

    #[test]
    fn test_row_major_layout() {
        let mut world = World::new(3).unwrap();
        world.set(1, 2, true);
        assert!(world.cells[5]);
        assert_eq!(world.position_of(5), Position::new(1, 2));
    }

    #[test]
    fn test_randomize_bounds() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let world = World::randomize(10, &mut rng).unwrap();
            assert!(world.population() <= 50);
            assert_eq!(world.population(), world.recount_population());
            assert_eq!(world.generation(), 0);
        }
    }

    #[test]
    fn test_scatter_zero_target() {
        let mut world = World::new(10).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        world.scatter(0, &mut rng);
        assert_eq!(world.recount_population(), 0);
    }

    #[test]
    fn test_scatter_discards_duplicates() {
        // Filling the entire grid forces plenty of duplicate picks and
        // still has to terminate with exactly the requested count.
        let mut world = World::new(5).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        world.scatter(25, &mut rng);
        assert_eq!(world.recount_population(), 25);
    }

    #[test]
    fn test_world_serialization() {
        let mut world = World::new(4).unwrap();
        world.set(1, 1, true);
        world.population = world.recount_population();

        let json = serde_json::to_string(&world).unwrap();
        let deserialized: World = serde_json::from_str(&json).unwrap();
        assert_eq!(world, deserialized);
    }
}
