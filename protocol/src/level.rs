use farthest_core::{
    Coord, Coord2, FixedLayout, GridMap, MAX_GRID_SIZE, MIN_GRID_SIZE, MapConfig, ObstacleKind,
    PlacedObstacle,
};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl From<Coord2> for Point {
    fn from((x, y): Coord2) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleEntry {
    pub x: i32,
    pub y: i32,
    /// Missing in files saved before obstacles had a kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ObstacleKind>,
}

/// A level definition as stored on disk or exchanged with the editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelFile {
    pub name: String,
    pub grid_size: i32,
    pub start_points: Vec<Point>,
    pub obstacles: Vec<ObstacleEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub door_blocks: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl LevelFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Captures a map as a level file, with every obstacle kind spelled out.
    pub fn from_map(name: impl Into<String>, difficulty: Option<String>, map: &GridMap) -> Self {
        Self {
            name: name.into(),
            grid_size: map.grid_size().into(),
            start_points: map.exits().iter().map(|&coords| coords.into()).collect(),
            obstacles: map
                .obstacles()
                .map(|((x, y), kind)| ObstacleEntry {
                    x: x.into(),
                    y: y.into(),
                    kind: Some(kind),
                })
                .collect(),
            door_blocks: map.door_blocks().map(Point::from).collect(),
            difficulty,
        }
    }

    /// Checks the level and converts it into a layout the generator accepts verbatim.
    pub fn to_layout(&self) -> Result<FixedLayout> {
        let grid_size = Coord::try_from(self.grid_size)
            .ok()
            .filter(|size| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(size))
            .ok_or(LevelError::GridSize(self.grid_size))?;

        let to_coords = |x: i32, y: i32| -> Result<Coord2> {
            match (Coord::try_from(x), Coord::try_from(y)) {
                (Ok(cx), Ok(cy)) if cx < grid_size && cy < grid_size => Ok((cx, cy)),
                _ => Err(LevelError::OutOfBounds {
                    x,
                    y,
                    grid_size: self.grid_size,
                }),
            }
        };

        let layout = FixedLayout {
            grid_size,
            exits: self
                .start_points
                .iter()
                .map(|point| to_coords(point.x, point.y))
                .collect::<Result<_>>()?,
            obstacles: self
                .obstacles
                .iter()
                .map(|entry| {
                    Ok(PlacedObstacle {
                        coords: to_coords(entry.x, entry.y)?,
                        kind: entry.kind,
                    })
                })
                .collect::<Result<_>>()?,
            door_blocks: self
                .door_blocks
                .iter()
                .map(|point| to_coords(point.x, point.y))
                .collect::<Result<_>>()?,
        };
        layout.validate()?;

        log::debug!(
            "Loaded level {:?}: {}x{} grid, {} exit(s), {} obstacle(s), {} door block(s)",
            self.name,
            grid_size,
            grid_size,
            layout.exits.len(),
            layout.obstacles.len(),
            layout.door_blocks.len()
        );
        Ok(layout)
    }

    /// Map configuration that plays this level.
    pub fn to_map_config(&self) -> Result<MapConfig> {
        Ok(MapConfig::fixed(self.to_layout()?))
    }
}
