use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid with every coordinate assigned exactly one [`CellRole`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridMap {
    roles: Array2<CellRole>,
    exits: Vec<Coord2>,
}

impl GridMap {
    /// Builds a map, rejecting out-of-bounds cells and cells claimed by more than one role.
    pub fn new(
        grid_size: Coord,
        exits: &[Coord2],
        obstacles: &[(Coord2, ObstacleKind)],
        door_blocks: &[Coord2],
    ) -> Result<Self> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(GameError::InvalidGridSize(grid_size));
        }
        if exits.is_empty() {
            return Err(GameError::NoExits);
        }

        let mut roles = Array2::from_elem((grid_size, grid_size).to_nd_index(), CellRole::Open);
        let placements = exits
            .iter()
            .map(|&coords| (coords, CellRole::Exit))
            .chain(
                obstacles
                    .iter()
                    .map(|&(coords, kind)| (coords, CellRole::Obstacle(kind))),
            )
            .chain(door_blocks.iter().map(|&coords| (coords, CellRole::DoorBlock)));

        for (coords, role) in placements {
            if coords.0 >= grid_size || coords.1 >= grid_size {
                return Err(GameError::InvalidCoords);
            }
            let cell = &mut roles[coords.to_nd_index()];
            if *cell != CellRole::Open {
                return Err(GameError::OverlappingCells(coords));
            }
            *cell = role;
        }

        Ok(Self {
            roles,
            exits: exits.to_vec(),
        })
    }

    pub fn grid_size(&self) -> Coord {
        self.roles.dim().0.try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.grid_size(), self.grid_size())
    }

    /// Exits in the order they were placed.
    pub fn exits(&self) -> &[Coord2] {
        &self.exits
    }

    pub fn obstacles(&self) -> impl Iterator<Item = (Coord2, ObstacleKind)> + '_ {
        self.iter_roles().filter_map(|(coords, role)| match role {
            CellRole::Obstacle(kind) => Some((coords, kind)),
            _ => None,
        })
    }

    pub fn door_blocks(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_roles()
            .filter(|&(_, role)| role == CellRole::DoorBlock)
            .map(|(coords, _)| coords)
    }

    pub fn is_in_bounds(&self, coords: Coord2) -> bool {
        is_in_bounds(coords.0.into(), coords.1.into(), self.grid_size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.is_in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Role at `coords`, or `None` when it lies off the grid.
    pub fn role_of(&self, coords: Coord2) -> Option<CellRole> {
        self.roles.get(coords.to_nd_index()).copied()
    }

    /// Off-grid coordinates count as blocking.
    pub fn is_blocking(&self, coords: Coord2) -> bool {
        self.role_of(coords).is_none_or(CellRole::is_blocking)
    }

    pub fn open_cell_count(&self) -> CellCount {
        self.roles
            .iter()
            .filter(|role| role.is_guessable())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Every coordinate with its role, `x` major.
    pub fn iter_roles(&self) -> impl Iterator<Item = (Coord2, CellRole)> + '_ {
        iter_coords(self.grid_size()).map(|coords| (coords, self[coords]))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.roles.iter_neighbors(coords)
    }
}

impl Index<Coord2> for GridMap {
    type Output = CellRole;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.roles[(x as usize, y as usize)]
    }
}
