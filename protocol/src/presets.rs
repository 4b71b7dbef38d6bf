use farthest_core::ObstacleKind::{self, Air as A, Pathway as P, Wall as W};

use crate::*;

struct Preset {
    name: &'static str,
    difficulty: &'static str,
    grid_size: i32,
    start_points: &'static [(i32, i32)],
    obstacles: &'static [(i32, i32, ObstacleKind)],
}

#[rustfmt::skip]
const PRESETS: [Preset; 5] = [
    Preset {
        name: "Beginner 1",
        difficulty: "Easy",
        grid_size: 8,
        start_points: &[(1, 1), (6, 6)],
        obstacles: &[
            (2, 2, W), (3, 2, W), (4, 2, P),
            (2, 5, A), (3, 5, W), (4, 5, P),
            (5, 3, A), (5, 4, W),
        ],
    },
    Preset {
        name: "Beginner 2",
        difficulty: "Easy",
        grid_size: 10,
        start_points: &[(0, 0), (9, 9)],
        obstacles: &[
            (1, 1, W), (2, 1, P), (3, 1, W),
            (6, 6, A), (7, 6, W), (8, 6, P),
            (4, 4, W), (4, 5, A), (5, 4, P),
            (2, 7, W), (3, 7, A), (7, 2, P),
        ],
    },
    Preset {
        name: "Intermediate 1",
        difficulty: "Medium",
        grid_size: 12,
        start_points: &[(2, 2), (9, 9), (2, 9)],
        obstacles: &[
            (4, 4, W), (5, 4, W), (6, 4, P),
            (4, 5, A), (6, 5, A),
            (4, 6, W), (5, 6, P), (6, 6, W),
            (1, 5, W), (1, 6, A),
            (10, 5, P), (10, 6, W),
            (5, 1, A), (6, 1, W),
            (5, 10, P), (6, 10, A),
        ],
    },
    Preset {
        name: "Intermediate 2",
        difficulty: "Medium",
        grid_size: 15,
        start_points: &[(1, 1), (13, 13), (1, 13)],
        obstacles: &[
            (3, 3, W), (4, 3, P), (5, 3, W),
            (9, 9, A), (10, 9, W), (11, 9, P),
            (3, 11, W), (4, 11, A), (5, 11, W),
            (7, 2, P), (7, 3, W), (7, 4, A),
            (7, 11, W), (7, 12, P), (7, 13, W),
            (2, 7, A), (3, 7, W), (4, 7, P),
            (11, 7, W), (12, 7, A), (13, 7, P),
        ],
    },
    Preset {
        name: "Advanced 1",
        difficulty: "Hard",
        grid_size: 15,
        start_points: &[(0, 0), (14, 14), (0, 14), (14, 0)],
        obstacles: &[
            (2, 2, W), (3, 2, W), (4, 2, P),
            (2, 3, A), (4, 3, W),
            (2, 4, W), (3, 4, P), (4, 4, A),
            (10, 10, W), (11, 10, W), (12, 10, P),
            (10, 11, A), (12, 11, W),
            (10, 12, W), (11, 12, P), (12, 12, A),
            (2, 10, W), (3, 10, P), (4, 10, W),
            (2, 11, A), (4, 11, W),
            (2, 12, W), (3, 12, A), (4, 12, P),
            (10, 2, W), (11, 2, P), (12, 2, W),
            (10, 3, A), (12, 3, W),
            (10, 4, W), (11, 4, A), (12, 4, P),
            (7, 1, P), (7, 2, W), (7, 3, A),
            (7, 12, W), (7, 13, P), (7, 14, W),
            (1, 7, A), (2, 7, W), (3, 7, P),
            (12, 7, W), (13, 7, A), (14, 7, P),
        ],
    },
];

impl Preset {
    fn to_level(&self) -> LevelFile {
        LevelFile {
            name: self.name.into(),
            grid_size: self.grid_size,
            start_points: self
                .start_points
                .iter()
                .map(|&(x, y)| Point { x, y })
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|&(x, y, kind)| ObstacleEntry {
                    x,
                    y,
                    kind: Some(kind),
                })
                .collect(),
            door_blocks: Vec::new(),
            difficulty: Some(self.difficulty.into()),
        }
    }
}

/// Built-in levels, easiest first.
pub fn preset_levels() -> Vec<LevelFile> {
    PRESETS.iter().map(Preset::to_level).collect()
}

/// Built-in level with the given name.
pub fn preset_level(name: &str) -> Option<LevelFile> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .map(Preset::to_level)
}
