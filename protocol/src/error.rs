use farthest_core::GameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Malformed level file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Grid size {0} is outside the supported range")]
    GridSize(i32),
    #[error("Point ({x}, {y}) lies outside a {grid_size}x{grid_size} grid")]
    OutOfBounds { x: i32, y: i32, grid_size: i32 },
    #[error("Invalid layout: {0}")]
    Layout(#[from] GameError),
}

pub type Result<T> = core::result::Result<T, LevelError>;
