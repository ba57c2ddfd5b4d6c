// ── GameConfig ────────────────────────────────────────────────────────────────

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Game configuration snapshot.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
///
/// - **resolution** is the window size in pixels.
/// - **zoom** scales world tiles; **ui_zoom** scales menu label text.
/// - **tile_size** is the edge of one tile sprite in pixels before zoom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub resolution: (u32, u32),
    pub zoom: f32,
    pub ui_zoom: f32,
    pub tile_size: u32,
    pub button_width: f32,
    pub button_height: f32,
    pub button_gap: f32,
    /// Per-axis speed cap for the player ship, in tiles per tick.
    pub max_velocity: f64,
    /// Acceleration applied per tick of thrust.
    pub thrust: f64,
    /// Radians turned per tick while a turn key is held.
    pub turn_rate: f64,
    pub fps: u32,
    /// The single save slot.
    pub save_path: PathBuf,
    /// Size of a freshly created level, in tiles.
    pub level_size: (u32, u32),
    /// Starfield seed; a random one per game when unset.
    pub star_seed: Option<u64>,
}

impl Default for GameConfig {
    /// 800 × 600 at zoom 1 with 16-pixel tiles.
    fn default() -> Self {
        Self {
            resolution:    (800, 600),
            zoom:          1.0,
            ui_zoom:       2.0,
            tile_size:     16,
            button_width:  200.0,
            button_height: 50.0,
            button_gap:    4.0,
            max_velocity:  3.0,
            thrust:        0.1,
            turn_rate:     0.05,
            fps:           60,
            save_path:     PathBuf::from("saves/save1.save"),
            level_size:    (10, 10),
            star_seed:     None,
        }
    }
}

impl GameConfig {
    /// Parse and [`validate`](GameConfig::validate) a config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the screen projection: a zero or
    /// negative zoom or tile size, or an empty window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.zoom) {
            return Err(ConfigError::Invalid { field: "zoom", value: self.zoom.to_string() });
        }
        if !positive(self.ui_zoom) {
            return Err(ConfigError::Invalid { field: "ui_zoom", value: self.ui_zoom.to_string() });
        }
        if self.tile_size == 0 {
            return Err(ConfigError::Invalid { field: "tile_size", value: "0".into() });
        }
        if self.resolution.0 == 0 || self.resolution.1 == 0 {
            return Err(ConfigError::Invalid {
                field: "resolution",
                value: format!("{:?}", self.resolution),
            });
        }
        Ok(())
    }

    /// Read a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text)
    }

    /// Aspect ratio of the window (`width / height`).
    ///
    /// Returns `0.0` when the height is zero to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.resolution;
        if h == 0 {
            return 0.0;
        }
        w as f32 / h as f32
    }

    /// Seconds per tick.
    pub fn tick_seconds(&self) -> f32 {
        if self.fps == 0 {
            return 0.0;
        }
        1.0 / self.fps as f32
    }

    /// On-screen size of one tile in pixels.
    pub fn tile_pixels(&self) -> f32 {
        self.tile_size as f32 * self.zoom
    }
}
