use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::*;

/// Obstacle position in a fixed layout. `kind` is absent in layouts saved before
/// obstacles carried a kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedObstacle {
    pub coords: Coord2,
    pub kind: Option<ObstacleKind>,
}

/// Externally supplied, non-randomized map definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedLayout {
    pub grid_size: Coord,
    pub exits: Vec<Coord2>,
    pub obstacles: Vec<PlacedObstacle>,
    pub door_blocks: Vec<Coord2>,
}

impl FixedLayout {
    /// Checks bounds and role conflicts without choosing obstacle kinds.
    pub fn validate(&self) -> Result<()> {
        let obstacles: Vec<(Coord2, ObstacleKind)> = self
            .obstacles
            .iter()
            .map(|obstacle| (obstacle.coords, obstacle.kind.unwrap_or(ObstacleKind::Wall)))
            .collect();

        GridMap::new(self.grid_size, &self.exits, &obstacles, &self.door_blocks).map(|_| ())
    }

    /// Builds the map, filling in missing obstacle kinds with `policy`.
    pub fn resolve<R: Rng + ?Sized>(&self, policy: ObstaclePolicy, rng: &mut R) -> Result<GridMap> {
        let obstacles: Vec<(Coord2, ObstacleKind)> = self
            .obstacles
            .iter()
            .map(|obstacle| {
                let kind = obstacle.kind.unwrap_or_else(|| policy.pick(rng));
                (obstacle.coords, kind)
            })
            .collect();

        GridMap::new(self.grid_size, &self.exits, &obstacles, &self.door_blocks)
    }
}

/// Returns a fixed layout as-is. Never regenerates, even when nothing is reachable.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMapGenerator {
    layout: FixedLayout,
    seed: u64,
}

impl FixedMapGenerator {
    pub fn new(layout: FixedLayout, seed: u64) -> Self {
        Self { layout, seed }
    }
}

impl MapGenerator for FixedMapGenerator {
    fn generate(self, config: &MapConfig) -> Result<GridMap> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let map = self.layout.resolve(config.obstacle_policy, &mut rng)?;

        if !DistanceField::compute(&map).is_playable() {
            log::warn!("Fixed layout has no reachable open cell, no guess can win");
        }
        Ok(map)
    }
}
