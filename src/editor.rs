use crate::error::LevelError;
use crate::level::Level;
use crate::tiles::{TileId, TileRegistry};

/// Number of hotbar slots (bound to keys 1–8).
pub const HOTBAR_SLOTS: usize = 8;

/// In-place map editor: a hotbar of tiles and the currently selected slot.
#[derive(Clone, Debug, PartialEq)]
pub struct MapEditor {
    pub hotbar: [Option<TileId>; HOTBAR_SLOTS],
    selected: usize,
    pub enabled: bool,
}

impl MapEditor {
    pub fn new() -> Self {
        Self { hotbar: [None; HOTBAR_SLOTS], selected: 0, enabled: false }
    }

    /// Hotbar pre-filled with the first registry entries in registration
    /// order.
    pub fn from_registry(registry: &TileRegistry) -> Self {
        let mut editor = Self::new();
        for (slot, (id, _)) in editor.hotbar.iter_mut().zip(registry.iter()) {
            *slot = Some(id);
        }
        editor
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a hotbar slot. Out-of-range slots are ignored.
    pub fn select(&mut self, slot: usize) {
        if slot < HOTBAR_SLOTS {
            self.selected = slot;
        }
    }

    pub fn selected_tile(&self) -> Option<TileId> {
        self.hotbar[self.selected]
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        log::info!("edit mode {}", if self.enabled { "on" } else { "off" });
        self.enabled
    }

    /// Place the selected tile at `(x, y)` and return the cells whose
    /// sprites now need recomputing. Does nothing while disabled.
    pub fn paint(&self, level: &mut Level, x: i32, y: i32) -> Result<Vec<(u32, u32)>, LevelError> {
        self.place(level, x, y, self.selected_tile())
    }

    pub fn erase(&self, level: &mut Level, x: i32, y: i32) -> Result<Vec<(u32, u32)>, LevelError> {
        self.place(level, x, y, None)
    }

    fn place(&self, level: &mut Level, x: i32, y: i32, tile: Option<TileId>) -> Result<Vec<(u32, u32)>, LevelError> {
        if !self.enabled {
            return Ok(Vec::new());
        }
        let previous = level.set(x, y, tile)?;
        if previous == tile {
            return Ok(Vec::new());
        }
        log::debug!("painted ({x}, {y}): {previous:?} -> {tile:?}");
        Ok(level.dirty_after_edit(x, y))
    }

    /// Copy the tile under the cursor into the selected slot.
    pub fn pick(&mut self, level: &Level, x: i32, y: i32) {
        if let Some(id) = level.get(x, y) {
            self.hotbar[self.selected] = Some(id);
        }
    }
}

impl Default for MapEditor {
    fn default() -> Self {
        Self::new()
    }
}
