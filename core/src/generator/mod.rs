use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait MapGenerator {
    fn generate(self, config: &MapConfig) -> Result<GridMap>;
}

/// How obstacle kinds are chosen when generation has to pick one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstaclePolicy {
    #[default]
    WallOnly,
    MixedRandom,
}

impl ObstaclePolicy {
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> ObstacleKind {
        match self {
            Self::WallOnly => ObstacleKind::Wall,
            Self::MixedRandom => ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())],
        }
    }
}

/// Builds the map described by `config`, using `seed` for every random choice.
pub fn generate_map(config: &MapConfig, seed: u64) -> Result<GridMap> {
    match &config.mode {
        MapMode::Random => RandomMapGenerator::new(seed).generate(config),
        MapMode::Fixed(layout) => FixedMapGenerator::new(layout.clone(), seed).generate(config),
    }
}
