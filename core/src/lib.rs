#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod generator;
mod grid;
mod tile;
mod types;

/// Where a map comes from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum MapMode {
    #[default]
    Random,
    Fixed(FixedLayout),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Edge of the square grid. Ignored for fixed layouts, which carry their own.
    pub grid_size: Coord,
    pub mode: MapMode,
    /// `None` picks a count from the grid size.
    pub exit_count: Option<CellCount>,
    pub obstacle_percentage: u8,
    pub obstacle_policy: ObstaclePolicy,
    /// Upper bound on random maps generated before giving up.
    pub max_retries: u32,
}

impl MapConfig {
    pub const DEFAULT_GRID_SIZE: Coord = 10;
    pub const DEFAULT_OBSTACLE_PERCENTAGE: u8 = 15;
    pub const DEFAULT_MAX_RETRIES: u32 = 1000;

    pub fn random(grid_size: Coord) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }

    pub fn fixed(layout: FixedLayout) -> Self {
        Self {
            grid_size: layout.grid_size,
            mode: MapMode::Fixed(layout),
            ..Self::default()
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.mode, MapMode::Fixed(_))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.is_fixed() && !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(GameError::InvalidGridSize(self.grid_size));
        }
        if self.obstacle_percentage > 100 {
            return Err(GameError::InvalidObstaclePercentage(self.obstacle_percentage));
        }
        if self.max_retries == 0 {
            return Err(GameError::InvalidRetryLimit);
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            mode: MapMode::Random,
            exit_count: None,
            obstacle_percentage: Self::DEFAULT_OBSTACLE_PERCENTAGE,
            obstacle_policy: ObstaclePolicy::WallOnly,
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub map: MapConfig,
    pub max_attempts: CellCount,
}

impl SessionConfig {
    pub const DEFAULT_MAX_ATTEMPTS: CellCount = 5;

    pub fn new(map: MapConfig, max_attempts: CellCount) -> Self {
        Self { map, max_attempts }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(GameError::InvalidMaxAttempts);
        }
        self.map.validate()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(MapConfig::default(), Self::DEFAULT_MAX_ATTEMPTS)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    /// Guess was not accepted and nothing changed.
    Ignored,
    Missed,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            Ignored => false,
            Missed => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
