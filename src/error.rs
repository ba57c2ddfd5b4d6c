// ── Error types ──────────────────────────────────────────────────────────────

use std::path::PathBuf;

/// Degenerate input to the vector / rotation arithmetic.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A divisor (or one of its components) was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// `normalized` was called on a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
}

/// Grid access outside the level bounds.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} level")]
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },
}

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("tile type '{0}' is already registered")]
    DuplicateName(String),
    #[error("unknown tile type '{0}'")]
    UnknownTile(String),
    #[error("no tile id left for '{0}'")]
    Full(String),
    #[error("malformed tile definitions: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("save file I/O failed for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("save references unknown tile type '{0}'")]
    UnknownTile(String),
    #[error("save holds {actual} tiles but its size {width}x{height} needs {expected}")]
    SizeMismatch { width: u32, height: u32, expected: usize, actual: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{field}` must be positive, got {value}")]
    Invalid { field: &'static str, value: String },
}

/// Umbrella error for [`crate::game::Game`] operations.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type GameResult<T> = Result<T, GameError>;
