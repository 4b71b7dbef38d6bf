use alloc::vec::Vec;
use rand::prelude::*;
use rand::seq::index;

use super::*;

/// Random placement of exits and obstacles, regenerated until some open cell is
/// reachable from an exit.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMapGenerator {
    seed: u64,
}

impl RandomMapGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MapGenerator for RandomMapGenerator {
    fn generate(self, config: &MapConfig) -> Result<GridMap> {
        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for attempt in 1..=config.max_retries {
            let map = place_cells(config, &mut rng)?;
            if DistanceField::compute(&map).is_playable() {
                log::debug!(
                    "Generated {0}x{0} map after {1} attempt(s), seed {2}",
                    config.grid_size,
                    attempt,
                    self.seed
                );
                return Ok(map);
            }
            log::debug!("Attempt {} has no reachable open cell, regenerating", attempt);
        }

        Err(GameError::GenerationExhausted {
            attempts: config.max_retries,
        })
    }
}

/// Exit count for a grid, clamping a requested count to a tenth of the cells.
pub fn exit_count_for(grid_size: Coord, requested: Option<CellCount>) -> CellCount {
    match requested {
        Some(count) => {
            let cap = (mult(grid_size, grid_size) / 10).max(1);
            count.clamp(1, cap)
        }
        None => CellCount::from(grid_size / 3).clamp(2, 4),
    }
}

/// Obstacle count for a grid at `percentage` coverage, rounded down.
pub fn obstacle_count_for(grid_size: Coord, percentage: u8) -> CellCount {
    let total = u32::from(mult(grid_size, grid_size));
    let count = total * u32::from(percentage) / 100;
    count.try_into().unwrap_or(CellCount::MAX)
}

fn place_cells(config: &MapConfig, rng: &mut SmallRng) -> Result<GridMap> {
    let grid_size = config.grid_size;
    let cells: Vec<Coord2> = iter_coords(grid_size).collect();

    let exit_count = usize::from(exit_count_for(grid_size, config.exit_count));
    let exits: Vec<Coord2> = index::sample(rng, cells.len(), exit_count)
        .into_iter()
        .map(|i| cells[i])
        .collect();

    let free: Vec<Coord2> = cells
        .into_iter()
        .filter(|coords| !exits.contains(coords))
        .collect();

    let mut obstacle_count = usize::from(obstacle_count_for(grid_size, config.obstacle_percentage));
    if obstacle_count > free.len() {
        log::warn!(
            "Grid already full, requested {} obstacles but only {} cells are free",
            obstacle_count,
            free.len()
        );
        obstacle_count = free.len();
    }

    let obstacles: Vec<(Coord2, ObstacleKind)> = index::sample(rng, free.len(), obstacle_count)
        .into_iter()
        .map(|i| (free[i], config.obstacle_policy.pick(rng)))
        .collect();

    GridMap::new(grid_size, &exits, &obstacles, &[])
}
