//! Level files exchanged with the editor and import/export collaborators.
//!
//! The JSON shape is `{ name, gridSize, startPoints, obstacles, doorBlocks?, difficulty? }`.
//! Parsing never reaches the core with an unchecked layout: [`LevelFile::to_layout`]
//! returns either a validated [`farthest_core::FixedLayout`] or a [`LevelError`].

pub use error::*;
pub use level::*;
pub use presets::*;

mod error;
mod level;
mod presets;
