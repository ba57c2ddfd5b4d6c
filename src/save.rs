// =============================================================================
// SAVE.RS — The single flat save slot
//
// The whole game state fits in one JSON document:
//
//   {
//     "tiles": ["base:grass", "", ...],      // row-major, "" = empty
//     "size": [10, 10],
//     "camera_position": [3.0, 4.0],
//     "player": { "pos": [0.0, 0.0], "rotation": 0.0, "health": 20 }
//   }
// =============================================================================

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::Ship;
use crate::error::SaveError;
use crate::geometry::{Coords, Rotation, Vector2};
use crate::level::Level;
use crate::tiles::TileRegistry;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub pos: (f64, f64),
    pub rotation: f64,
    pub health: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub tiles: Vec<String>,
    pub size: (u32, u32),
    pub camera_position: (f64, f64),
    pub player: PlayerData,
}

impl SaveData {
    /// Snapshot the persistent parts of a running game.
    pub fn capture(level: &Level, registry: &TileRegistry, camera: Vector2, player: &Ship) -> Self {
        Self {
            tiles: level.tile_names(registry),
            size: level.size(),
            camera_position: camera.to_tuple(),
            player: PlayerData {
                pos: player.coords.pos.to_tuple(),
                rotation: player.coords.rotation.radians(),
                health: player.health,
            },
        }
    }

    /// Rebuild the level grid, resolving tile names against `registry`.
    pub fn restore_level(&self, registry: &TileRegistry) -> Result<Level, SaveError> {
        let (width, height) = self.size;
        let expected = width as usize * height as usize;
        if self.tiles.len() != expected {
            return Err(SaveError::SizeMismatch { width, height, expected, actual: self.tiles.len() });
        }
        let cells = self
            .tiles
            .iter()
            .map(|name| {
                if name.is_empty() {
                    return Ok(None);
                }
                registry
                    .id_of(name)
                    .map(Some)
                    .ok_or_else(|| SaveError::UnknownTile(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Level::from_cells(width, height, cells).ok_or(SaveError::SizeMismatch {
            width,
            height,
            expected,
            actual: self.tiles.len(),
        })
    }

    /// Apply the saved player state to `player`. Velocity is not saved and
    /// comes back at rest.
    pub fn restore_player(&self, player: &mut Ship) {
        player.coords = Coords::new(Vector2::from(self.player.pos), Rotation(self.player.rotation));
        player.velocity = Vector2::ZERO;
        player.throttle_on = false;
        player.health = self.player.health.min(player.max_health);
    }

    pub fn camera(&self) -> Vector2 {
        Vector2::from(self.camera_position)
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the slot, creating its directory if needed.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let io_err = |source| SaveError::Io { path: path.to_path_buf(), source };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }
        std::fs::write(path, self.to_json()?).map_err(io_err)?;
        log::info!("saved {}x{} level to {}", self.size.0, self.size.1, path.display());
        Ok(())
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| SaveError::Io { path: path.to_path_buf(), source })?;
        let data = Self::from_json(&text)?;
        log::info!("loaded save from {}", path.display());
        Ok(data)
    }
}
