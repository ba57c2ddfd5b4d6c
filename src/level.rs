// =============================================================================
// LEVEL.RS — The tile grid
//
// A level is a fixed-size, row-major grid of optional tiles. Cells hold a
// `TileId` into the registry; sprite choice is recomputed from neighbours
// whenever a cell or one of its neighbours changes.
// =============================================================================

use crate::error::LevelError;
use crate::tiles::autotile::NEIGHBOR_OFFSETS;
use crate::tiles::{TileCategory, TileId, TileRegistry};

/// A cell's tile together with the sprites chosen for it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTile {
    pub x: u32,
    pub y: u32,
    pub tile: TileId,
    pub z_index: i32,
    pub sprites: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    width: u32,
    height: u32,
    tiles: Vec<Option<TileId>>,
}

impl Level {
    /// An empty `width × height` level.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, tiles: vec![None; width as usize * height as usize] }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Tile at `(x, y)`. Empty and off-grid cells are both `None`.
    pub fn get(&self, x: i32, y: i32) -> Option<TileId> {
        self.index(x, y).and_then(|i| self.tiles[i])
    }

    /// Replace the cell at `(x, y)`, returning what was there.
    pub fn set(&mut self, x: i32, y: i32, tile: Option<TileId>) -> Result<Option<TileId>, LevelError> {
        let i = self.index(x, y).ok_or(LevelError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        Ok(std::mem::replace(&mut self.tiles[i], tile))
    }

    pub fn fill(&mut self, tile: Option<TileId>) {
        self.tiles.fill(tile);
    }

    /// Fill a rectangle, silently clipped to the grid.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, tile: Option<TileId>) {
        for cy in y..y.saturating_add(h as i32) {
            for cx in x..x.saturating_add(w as i32) {
                if let Some(i) = self.index(cx, cy) {
                    self.tiles[i] = tile;
                }
            }
        }
    }

    /// The 8 neighbours of `(x, y)`, clockwise from NW.
    pub fn surrounding(&self, x: i32, y: i32) -> [Option<TileId>; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.get(x + dx, y + dy))
    }

    pub fn surrounding_categories(&self, registry: &TileRegistry, x: i32, y: i32) -> [Option<TileCategory>; 8] {
        self.surrounding(x, y).map(|t| t.and_then(|id| registry.category_of(id)))
    }

    /// Work out the sprites for the tile at `(x, y)`.
    ///
    /// Returns `None` for empty or off-grid cells and for ids the registry
    /// does not know.
    pub fn resolve(&self, registry: &TileRegistry, x: i32, y: i32) -> Option<ResolvedTile> {
        let id = self.get(x, y)?;
        let tile = registry.get(id)?;
        let neighbors = self.surrounding_categories(registry, x, y);
        let sprites = tile.sprites_for(&neighbors).into_iter().map(str::to_owned).collect();
        Some(ResolvedTile { x: x as u32, y: y as u32, tile: id, z_index: tile.z_index, sprites })
    }

    /// Resolve every occupied cell in row-major order.
    pub fn resolve_all(&self, registry: &TileRegistry) -> Vec<ResolvedTile> {
        let mut out = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if let Some(r) = self.resolve(registry, x, y) {
                    out.push(r);
                }
            }
        }
        out
    }

    /// Cells whose sprites depend on `(x, y)`: the cell itself and its
    /// in-bounds neighbours.
    pub fn dirty_after_edit(&self, x: i32, y: i32) -> Vec<(u32, u32)> {
        std::iter::once((0, 0))
            .chain(NEIGHBOR_OFFSETS)
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(cx, cy)| self.in_bounds(cx, cy))
            .map(|(cx, cy)| (cx as u32, cy as u32))
            .collect()
    }

    /// Whether an entity may stand on `(x, y)`. Empty and off-grid cells are
    /// not walkable.
    pub fn is_passable(&self, registry: &TileRegistry, x: i32, y: i32) -> bool {
        self.get(x, y)
            .and_then(|id| registry.get(id))
            .is_some_and(|t| t.passable)
    }

    /// Row-major tile names; empty cells become `""`.
    pub fn tile_names(&self, registry: &TileRegistry) -> Vec<String> {
        self.tiles
            .iter()
            .map(|t| {
                t.and_then(|id| registry.get(id))
                    .map(|tt| tt.name.clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Build a level from raw cells. `tiles.len()` must equal
    /// `width * height`; returns `None` otherwise.
    pub fn from_cells(width: u32, height: u32, tiles: Vec<Option<TileId>>) -> Option<Self> {
        (tiles.len() == width as usize * height as usize).then_some(Self { width, height, tiles })
    }
}
