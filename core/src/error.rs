use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid size {0} is outside the supported range")]
    InvalidGridSize(u8),
    #[error("Obstacle percentage {0} exceeds 100")]
    InvalidObstaclePercentage(u8),
    #[error("At least one attempt is required")]
    InvalidMaxAttempts,
    #[error("Attempt limit cannot change while a session is in progress")]
    SessionInProgress,
    #[error("Attempt limit is below the {used} attempts already used")]
    AttemptsExceedLimit { used: CellCount },
    #[error("At least one generation attempt is required")]
    InvalidRetryLimit,
    #[error("Map has no exits")]
    NoExits,
    #[error("Cell {0:?} is assigned more than one role")]
    OverlappingCells(Coord2),
    #[error("No playable map after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;
