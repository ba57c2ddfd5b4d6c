// ── Tile types & registry ────────────────────────────────────────────────────

pub mod autotile;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use autotile::{BorderChoice, BorderVariant, select_sprite};

/// Directory the built-in tile art lives in.
pub const TILE_ASSET_DIR: &str = "assets/tiles";

/// Terrain classification of a tile, compared by value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileCategory {
    Grass,
    Water,
    Earth,
    Stone,
}

impl TileCategory {
    /// Category-membership predicate used by the border selector.
    #[inline]
    pub fn is(self, other: TileCategory) -> bool {
        self == other
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TileCategory::Grass => "grass",
            TileCategory::Water => "water",
            TileCategory::Earth => "earth",
            TileCategory::Stone => "stone",
        }
    }
}

/// Which corner a multi-cell tile is anchored at.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Border sprites drawn where a tile meets `other`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderSet {
    pub other: TileCategory,
    pub sprites: HashMap<BorderVariant, String>,
}

impl BorderSet {
    /// A full set named after the art convention
    /// `<dir>/<self>_<other>_<suffix>.png`.
    pub fn conventional(this: TileCategory, other: TileCategory) -> Self {
        let sprites = BorderVariant::BORDERS
            .iter()
            .filter_map(|&v| {
                let suffix = v.file_suffix()?;
                Some((
                    v,
                    format!("{TILE_ASSET_DIR}/{}_{}_{suffix}.png", this.as_str(), other.as_str()),
                ))
            })
            .collect();
        Self { other, sprites }
    }
}

fn default_size() -> (u32, u32) {
    (1, 1)
}

/// Static description of one kind of tile. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileType {
    /// Namespaced identifier, e.g. `base:grass`.
    pub name: String,
    pub category: TileCategory,
    pub passable: bool,
    pub transparent: bool,
    /// Footprint in cells (width, height).
    #[serde(default = "default_size")]
    pub size: (u32, u32),
    #[serde(default)]
    pub align: Align,
    /// Draw order; higher values render on top.
    #[serde(default)]
    pub z_index: i32,
    /// `images[0]` is the default sprite. Multi-cell tiles list one image
    /// per cell, row-major.
    pub images: Vec<String>,
    /// Border sprite sets, highest priority first.
    #[serde(default)]
    pub borders: Vec<BorderSet>,
    #[serde(default)]
    pub walk_message: Option<String>,
}

impl TileType {
    pub fn new(name: &str, category: TileCategory, image: &str) -> Self {
        Self {
            name: name.to_owned(),
            category,
            passable: true,
            transparent: false,
            size: (1, 1),
            align: Align::TopLeft,
            z_index: 0,
            images: vec![image.to_owned()],
            borders: Vec::new(),
            walk_message: None,
        }
    }

    pub fn passable(mut self, passable: bool) -> Self {
        self.passable = passable;
        self
    }

    pub fn with_border(mut self, border: BorderSet) -> Self {
        self.borders.push(border);
        self
    }

    pub fn with_walk_message(mut self, message: &str) -> Self {
        self.walk_message = Some(message.to_owned());
        self
    }

    pub fn is_multi_cell(&self) -> bool {
        self.size != (1, 1)
    }

    /// The default (centre) sprite. Empty if the type has no images.
    pub fn default_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }

    /// Categories this tile draws borders against, in priority order.
    pub fn border_priority(&self) -> Vec<TileCategory> {
        self.borders.iter().map(|b| b.other).collect()
    }

    /// Run border selection for this tile against its neighbours.
    pub fn border_for(&self, neighbors: &[Option<TileCategory>; 8]) -> BorderChoice {
        select_sprite(neighbors, self.category, &self.border_priority())
    }

    /// Sprite for a 1×1 tile given its neighbours. Falls back to the default
    /// image when no border applies or the border set lacks that variant.
    pub fn sprite_for(&self, neighbors: &[Option<TileCategory>; 8]) -> &str {
        let choice = self.border_for(neighbors);
        let Some(other) = choice.other else {
            return self.default_image();
        };
        self.borders
            .iter()
            .find(|b| b.other == other)
            .and_then(|b| b.sprites.get(&choice.variant))
            .map(String::as_str)
            .unwrap_or_else(|| self.default_image())
    }

    /// All sprites needed to draw this tile: one for 1×1 tiles, every cell
    /// image for multi-cell tiles (those are never border-tiled).
    pub fn sprites_for(&self, neighbors: &[Option<TileCategory>; 8]) -> Vec<&str> {
        if self.is_multi_cell() {
            return self.images.iter().map(String::as_str).collect();
        }
        vec![self.sprite_for(neighbors)]
    }
}

/// Index of a [`TileType`] inside a [`TileRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u16);

/// All tile types known to a game. Constructed at start-up and passed by
/// reference to whatever needs to look tiles up.
#[derive(Clone, Debug, Default)]
pub struct TileRegistry {
    types: Vec<TileType>,
    by_name: HashMap<String, TileId>,
}

impl TileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile type. Names must be unique, and a registry holds at most
    /// `u16::MAX + 1` types.
    pub fn register(&mut self, tile: TileType) -> Result<TileId, RegistryError> {
        if self.by_name.contains_key(&tile.name) {
            return Err(RegistryError::DuplicateName(tile.name));
        }
        let index = u16::try_from(self.types.len()).map_err(|_| RegistryError::Full(tile.name.clone()))?;
        let id = TileId(index);
        self.by_name.insert(tile.name.clone(), id);
        self.types.push(tile);
        Ok(id)
    }

    pub fn get(&self, id: TileId) -> Option<&TileType> {
        self.types.get(id.0 as usize)
    }

    pub fn lookup(&self, name: &str) -> Option<&TileType> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn id_of(&self, name: &str) -> Option<TileId> {
        self.by_name.get(name).copied()
    }

    /// Like [`TileRegistry::id_of`] but reports unknown names as an error.
    pub fn require(&self, name: &str) -> Result<TileId, RegistryError> {
        self.id_of(name).ok_or_else(|| RegistryError::UnknownTile(name.to_owned()))
    }

    pub fn category_of(&self, id: TileId) -> Option<TileCategory> {
        self.get(id).map(|t| t.category)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileId, &TileType)> {
        (0..=u16::MAX).map(TileId).zip(&self.types)
    }

    /// Deserialise a registry from a JSON array of tile types.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let types: Vec<TileType> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for tile in types {
            registry.register(tile)?;
        }
        Ok(registry)
    }

    /// The tiles shipped with the game. Grass borders water before earth.
    pub fn builtin() -> Self {
        let asset = |file: &str| format!("{TILE_ASSET_DIR}/{file}");

        let grass = TileType::new("base:grass", TileCategory::Grass, &asset("grass_center.png"))
            .with_border(BorderSet::conventional(TileCategory::Grass, TileCategory::Water))
            .with_border(BorderSet::conventional(TileCategory::Grass, TileCategory::Earth))
            .with_walk_message("You walk on grass");
        let water = TileType::new("base:water", TileCategory::Water, &asset("water_center.png"))
            .passable(false)
            .with_walk_message("You walk on water");
        let earth = TileType::new("base:earth", TileCategory::Earth, &asset("earth_center.png"));
        let mut stone = TileType::new("base:stone_wall", TileCategory::Stone, &asset("stone_wall.png"))
            .passable(false);
        stone.z_index = 1;
        let mut rock = TileType::new("base:rock", TileCategory::Stone, &asset("rock_0.png"))
            .passable(false);
        rock.size = (2, 2);
        rock.align = Align::BottomLeft;
        rock.z_index = 2;
        rock.transparent = true;
        rock.images = (0..4).map(|i| asset(&format!("rock_{i}.png"))).collect();

        let mut registry = Self::new();
        for tile in [grass, water, earth, stone, rock] {
            // Built-in names are distinct.
            if let Err(e) = registry.register(tile) {
                log::warn!("skipping built-in tile: {e}");
            }
        }
        registry
    }
}
