//! Configuration types for worlds and the runner.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Preset grid sizes offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridSize {
    /// 8 x 8 (64 cells)
    Small,
    /// 10 x 10 (100 cells)
    Medium,
    /// 20 x 20 (400 cells)
    Large,
    /// 30 x 30 (900 cells)
    ExtraLarge,
}

impl GridSize {
    pub fn cells_per_row(&self) -> i32 {
        match self {
            GridSize::Small => 8,
            GridSize::Medium => 10,
            GridSize::Large => 20,
            GridSize::ExtraLarge => 30,
        }
    }

    pub fn total_cells(&self) -> usize {
        let side = self.cells_per_row() as usize;
        side * side
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize::Medium
    }
}

/// World construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Cells per row/column; the grid is always square
    pub dimension: i32,
    /// Random seed for reproducible randomized populations
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            dimension: GridSize::default().cells_per_row(),
            seed: 0,
        }
    }
}

/// Runner (driver) parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// World to build at startup
    pub world: WorldConfig,
    /// Milliseconds between generation steps
    pub tick_interval_ms: u64,
    /// Stop after this many generations (None = run until extinction)
    pub max_generations: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            tick_interval_ms: 300,
            max_generations: None,
        }
    }
}

impl RunnerConfig {
    /// Build a config from environment overrides on top of the defaults.
    ///
    /// Recognized variables: `LIFE_DIMENSION`, `LIFE_SEED`, `LIFE_TICK_MS`,
    /// `LIFE_MAX_GENERATIONS`. An unparsable value is rejected with
    /// [`Error::Config`], never silently ignored.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(dimension) = parse_var("LIFE_DIMENSION")? {
            config.world.dimension = dimension;
        }
        if let Some(seed) = parse_var("LIFE_SEED")? {
            config.world.seed = seed;
        }
        if let Some(tick_interval_ms) = parse_var("LIFE_TICK_MS")? {
            config.tick_interval_ms = tick_interval_ms;
        }
        if let Some(max_generations) = parse_var("LIFE_MAX_GENERATIONS")? {
            config.max_generations = Some(max_generations);
        }
        debug!(?config, "runner config resolved");
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{name}={raw} is not a valid value"))),
        Err(_) => Ok(None),
    }
}
