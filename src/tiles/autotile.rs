// =============================================================================
// AUTOTILE — pick the border sprite for a tile from its 8 neighbours
//
// Neighbours are always ordered clockwise starting top-left:
//
//   0 1 2        NW N  NE
//   7 . 3   =    W  .  E
//   6 5 4        SW S  SE
//
// The pattern table is a priority-ordered decision list: the first pattern
// that fully matches wins, so entries must never be reordered.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::TileCategory;

/// Offsets `(dx, dy)` of the 8 neighbours in clockwise order from NW.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Which sprite variant depicts the edge between a tile and its neighbours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderVariant {
    /// No border: the tile's default sprite.
    Center,
    CornerNw,
    EdgeN,
    /// North edge continuing round the NE corner down the east side.
    EdgeNWide,
    CornerNe,
    EdgeE,
    EdgeEWide,
    CornerSe,
    CornerSw,
    EdgeS,
    EdgeSWide,
    EdgeW,
    /// North and west edges meeting at the NW corner.
    CornerNwWrap,
}

impl BorderVariant {
    /// File-name suffix used by the tile art, e.g. `grass_water_2_3_4.png`.
    /// `None` for [`BorderVariant::Center`], which uses the default image.
    pub fn file_suffix(self) -> Option<&'static str> {
        match self {
            BorderVariant::Center => None,
            BorderVariant::CornerNw => Some("1"),
            BorderVariant::EdgeN => Some("2"),
            BorderVariant::EdgeNWide => Some("2_3_4"),
            BorderVariant::CornerNe => Some("3"),
            BorderVariant::EdgeE => Some("4"),
            BorderVariant::EdgeEWide => Some("4_5_6"),
            BorderVariant::CornerSe => Some("5"),
            BorderVariant::CornerSw => Some("7"),
            BorderVariant::EdgeS => Some("6"),
            BorderVariant::EdgeSWide => Some("6_7_8"),
            BorderVariant::EdgeW => Some("8"),
            BorderVariant::CornerNwWrap => Some("top_and_left"),
        }
    }

    /// Every variant with a dedicated sprite, in table order.
    pub const BORDERS: [BorderVariant; 12] = [
        BorderVariant::CornerNw,
        BorderVariant::EdgeN,
        BorderVariant::EdgeNWide,
        BorderVariant::CornerNe,
        BorderVariant::EdgeE,
        BorderVariant::EdgeEWide,
        BorderVariant::CornerSe,
        BorderVariant::CornerSw,
        BorderVariant::EdgeS,
        BorderVariant::EdgeSWide,
        BorderVariant::EdgeW,
        BorderVariant::CornerNwWrap,
    ];
}

// ── Patterns ─────────────────────────────────────────────────────────────────

/// One cell of a border pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Yes,
    No,
    /// Matches either value.
    Any,
}

impl Slot {
    #[inline]
    pub fn matches(self, bit: bool) -> bool {
        match self {
            Slot::Yes => bit,
            Slot::No => !bit,
            Slot::Any => true,
        }
    }
}

pub type Pattern = [Slot; 8];

const T: Slot = Slot::Yes;
const F: Slot = Slot::No;
const A: Slot = Slot::Any;

/// Border patterns in priority order (NW, N, NE, E, SE, S, SW, W).
pub const BORDER_PATTERNS: [(Pattern, BorderVariant); 12] = [
    ([T, F, F, F, F, F, F, F], BorderVariant::CornerNw),
    ([A, T, A, F, F, F, F, F], BorderVariant::EdgeN),
    ([A, T, T, T, A, F, F, F], BorderVariant::EdgeNWide),
    ([F, F, T, F, F, F, F, F], BorderVariant::CornerNe),
    ([F, F, A, T, A, F, F, F], BorderVariant::EdgeE),
    ([F, F, A, T, T, T, A, F], BorderVariant::EdgeEWide),
    ([F, F, F, F, T, F, F, F], BorderVariant::CornerSe),
    ([F, F, F, F, F, F, T, F], BorderVariant::CornerSw),
    ([F, F, F, F, A, A, A, F], BorderVariant::EdgeS),
    ([A, F, F, F, A, T, T, T], BorderVariant::EdgeSWide),
    ([A, F, F, F, F, F, A, T], BorderVariant::EdgeW),
    ([T, T, A, F, F, F, A, T], BorderVariant::CornerNwWrap),
];

// ── NeighborMask ─────────────────────────────────────────────────────────────

/// Bit `i` is set when neighbour `i` belongs to the category being tested.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeighborMask(pub [bool; 8]);

impl NeighborMask {
    /// Mark every neighbour whose category is `other`. Missing neighbours
    /// (empty cells or off-grid) never match.
    pub fn from_neighbors(neighbors: &[Option<TileCategory>; 8], other: TileCategory) -> Self {
        let mut bits = [false; 8];
        for (bit, neighbor) in bits.iter_mut().zip(neighbors) {
            *bit = neighbor.is_some_and(|c| c.is(other));
        }
        Self(bits)
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&b| b)
    }

    pub fn matches(&self, pattern: &Pattern) -> bool {
        pattern.iter().zip(self.0).all(|(slot, bit)| slot.matches(bit))
    }
}

/// First matching variant from [`BORDER_PATTERNS`], or `Center`.
pub fn select_variant(mask: NeighborMask) -> BorderVariant {
    if !mask.any() {
        return BorderVariant::Center;
    }
    BORDER_PATTERNS
        .iter()
        .find(|(pattern, _)| mask.matches(pattern))
        .map(|&(_, variant)| variant)
        .unwrap_or(BorderVariant::Center)
}

// ── select_sprite ────────────────────────────────────────────────────────────

/// Result of border selection: which neighbouring category the border is
/// drawn against (if any) and the variant to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BorderChoice {
    pub other: Option<TileCategory>,
    pub variant: BorderVariant,
}

impl BorderChoice {
    pub const fn center() -> Self {
        Self { other: None, variant: BorderVariant::Center }
    }

    pub fn is_center(&self) -> bool {
        self.variant == BorderVariant::Center
    }
}

/// Choose the border for a tile of `self_category`.
///
/// `others` lists the categories this tile draws borders against, highest
/// priority first. The first category whose neighbour mask matches a
/// pattern wins, even if a later category would match too. The tile's own
/// category is skipped.
pub fn select_sprite(
    neighbors: &[Option<TileCategory>; 8],
    self_category: TileCategory,
    others: &[TileCategory],
) -> BorderChoice {
    for &other in others {
        if other.is(self_category) {
            continue;
        }
        let variant = select_variant(NeighborMask::from_neighbors(neighbors, other));
        if variant != BorderVariant::Center {
            log::trace!("{self_category:?} borders {other:?} as {variant:?}");
            return BorderChoice { other: Some(other), variant };
        }
    }
    BorderChoice::center()
}
