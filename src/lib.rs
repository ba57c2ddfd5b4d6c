pub mod camera;
pub mod config;
pub mod editor;
pub mod entity;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod level;
pub mod save;
pub mod starfield;
pub mod tiles;
pub mod ui;

pub use error::{ConfigError, GameError, GameResult, LevelError, MathError, RegistryError, SaveError};
pub use geometry::{Coords, Rotation, Vector2};
pub use tiles::autotile::{BorderChoice, BorderVariant, NeighborMask, select_sprite};
pub use tiles::{TileCategory, TileId, TileRegistry, TileType};
