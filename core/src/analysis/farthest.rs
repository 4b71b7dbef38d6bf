use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Open cells tied for the largest finite distance from the nearest exit.
///
/// Cells are kept in `x`-major scan order; any of them is a winning guess.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FarthestSet {
    cells: Vec<Coord2>,
    distance: Option<Distance>,
}

impl FarthestSet {
    pub fn cells(&self) -> &[Coord2] {
        &self.cells
    }

    /// Shared distance of every member, `None` when the set is empty.
    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.contains(&coords)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells.iter().copied()
    }

    fn offer(&mut self, coords: Coord2, distance: Distance) {
        match self.distance {
            Some(best) if distance < best => {}
            Some(best) if distance == best => self.cells.push(coords),
            _ => {
                self.distance = Some(distance);
                self.cells.clear();
                self.cells.push(coords);
            }
        }
    }
}

/// Scans the open cells of `map` for the largest reachable distance.
pub fn compute_farthest_set(distances: &DistanceMap, map: &GridMap) -> FarthestSet {
    let mut farthest = FarthestSet::default();

    for (coords, role) in map.iter_roles() {
        if !role.is_guessable() {
            continue;
        }
        if let Some(distance) = distances.get(coords) {
            farthest.offer(coords, distance);
        }
    }

    farthest
}
