use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Shortest-path distance from the nearest exit for every cell of a map.
///
/// `None` marks cells that are unreachable. Obstacles and door blocks are always
/// `None`: the former can't be entered, the latter are passed through but are
/// never a path endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceMap {
    distances: Array2<Option<Distance>>,
}

impl DistanceMap {
    pub fn grid_size(&self) -> Coord {
        self.distances.dim().0.try_into().unwrap_or(Coord::MAX)
    }

    /// Distance at `coords`, `None` when unreachable or off the grid.
    pub fn get(&self, coords: Coord2) -> Option<Distance> {
        self.distances.get(coords.to_nd_index()).copied().flatten()
    }

    pub fn is_reachable(&self, coords: Coord2) -> bool {
        self.get(coords).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Option<Distance>)> + '_ {
        iter_coords(self.grid_size()).map(|coords| (coords, self.get(coords)))
    }

    /// Largest finite distance over every cell, exits included.
    pub fn max_distance(&self) -> Option<Distance> {
        self.distances.iter().flatten().copied().max()
    }
}

/// Multi-source breadth-first search seeded from every exit of `map`.
pub fn compute_distances(map: &GridMap) -> DistanceMap {
    let size = (map.grid_size(), map.grid_size());
    let mut distances: Array2<Option<Distance>> = Array2::from_elem(size.to_nd_index(), None);
    let mut queue = VecDeque::new();

    for &exit in map.exits() {
        let cell = &mut distances[exit.to_nd_index()];
        if cell.is_none() {
            *cell = Some(0);
            queue.push_back(exit);
        }
    }

    let mut visited = 0usize;
    while let Some(coords) = queue.pop_front() {
        visited += 1;
        let Some(distance) = distances[coords.to_nd_index()] else {
            continue;
        };
        let next_distance = distance.saturating_add(1);

        for neighbor in map.iter_neighbors(coords) {
            if map.is_blocking(neighbor) {
                continue;
            }
            let cell = &mut distances[neighbor.to_nd_index()];
            if cell.is_none() {
                *cell = Some(next_distance);
                queue.push_back(neighbor);
            }
        }
    }

    // door blocks carry distance through but are never an endpoint
    for coords in map.door_blocks() {
        distances[coords.to_nd_index()] = None;
    }

    log::trace!(
        "Distance field for {}x{} grid visited {} cells from {} exits",
        size.0,
        size.1,
        visited,
        map.exits().len()
    );

    DistanceMap { distances }
}

/// Length of the shortest obstacle-avoiding path between two cells.
///
/// Door blocks are traversable here like any open cell. Returns `None` when either
/// endpoint is off the grid or blocking, or when no path exists.
pub fn shortest_distance(from: Coord2, to: Coord2, map: &GridMap) -> Option<Distance> {
    if map.is_blocking(from) || map.is_blocking(to) {
        return None;
    }
    if from == to {
        return Some(0);
    }

    let size = (map.grid_size(), map.grid_size());
    let mut visited: Array2<bool> = Array2::default(size.to_nd_index());
    let mut queue = VecDeque::from([(from, 0 as Distance)]);
    visited[from.to_nd_index()] = true;

    while let Some((coords, distance)) = queue.pop_front() {
        for neighbor in map.iter_neighbors(coords) {
            if visited[neighbor.to_nd_index()] || map.is_blocking(neighbor) {
                continue;
            }
            let next_distance = distance.saturating_add(1);
            if neighbor == to {
                return Some(next_distance);
            }
            visited[neighbor.to_nd_index()] = true;
            queue.push_back((neighbor, next_distance));
        }
    }

    None
}

/// Minimum of [`shortest_distance`] over every exit of `map`.
///
/// Agrees with [`compute_distances`] on open cells, but also measures door blocks.
pub fn distance_to_nearest_exit(coords: Coord2, map: &GridMap) -> Option<Distance> {
    map.exits()
        .iter()
        .filter_map(|&exit| shortest_distance(exit, coords, map))
        .min()
}
