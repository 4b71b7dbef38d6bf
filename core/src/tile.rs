use serde::{Deserialize, Serialize};

/// Visual flavour of an obstacle. Every kind blocks movement the same way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Wall,
    Air,
    Pathway,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [Self::Wall, Self::Air, Self::Pathway];
}

/// Role a coordinate plays within a map, fixed when the map is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellRole {
    /// Source point distances are measured from.
    Exit,
    /// Never traversable.
    Obstacle(ObstacleKind),
    /// Traversable gateway, never a source, guess target or answer.
    DoorBlock,
    #[default]
    Open,
}

impl CellRole {
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Obstacle(_))
    }

    /// Only open cells can be guessed or be part of the farthest set.
    pub const fn is_guessable(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_obstacles_block() {
        assert!(CellRole::Obstacle(ObstacleKind::Air).is_blocking());
        assert!(!CellRole::DoorBlock.is_blocking());
        assert!(!CellRole::Exit.is_blocking());
        assert!(!CellRole::Open.is_blocking());
    }

    #[test]
    fn only_open_cells_are_guessable() {
        assert!(CellRole::Open.is_guessable());
        assert!(!CellRole::DoorBlock.is_guessable());
        assert!(!CellRole::Exit.is_guessable());
        assert!(!CellRole::Obstacle(ObstacleKind::Wall).is_guessable());
    }
}
