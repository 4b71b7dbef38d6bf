use serde::{Deserialize, Serialize};

pub use distance::*;
pub use farthest::*;

use crate::GridMap;

mod distance;
mod farthest;

/// Distance map and farthest set of one map, computed together once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceField {
    pub distances: DistanceMap,
    pub farthest: FarthestSet,
}

impl DistanceField {
    pub fn compute(map: &GridMap) -> Self {
        let distances = compute_distances(map);
        let farthest = compute_farthest_set(&distances, map);
        Self {
            distances,
            farthest,
        }
    }

    /// Whether the map has at least one reachable open cell to find.
    pub fn is_playable(&self) -> bool {
        !self.farthest.is_empty()
    }
}
