use tilegame::tiles::TileCategory::{self, Earth, Grass, Water};
use tilegame::tiles::autotile::*;

const W: Option<TileCategory> = Some(Water);
const G: Option<TileCategory> = Some(Grass);
const E: Option<TileCategory> = Some(Earth);
const N: Option<TileCategory> = None;

fn mask(bits: [u8; 8]) -> NeighborMask {
    NeighborMask(bits.map(|b| b == 1))
}

// ── select_variant ───────────────────────────────────────────────────────────

#[test]
fn empty_mask_is_center() {
    assert_eq!(select_variant(NeighborMask::default()), BorderVariant::Center);
}

#[test]
fn lone_north_west_is_corner_not_a_later_pattern() {
    assert_eq!(select_variant(mask([1, 0, 0, 0, 0, 0, 0, 0])), BorderVariant::CornerNw);
}

#[test]
fn north_edge_with_and_without_corners() {
    assert_eq!(select_variant(mask([0, 1, 0, 0, 0, 0, 0, 0])), BorderVariant::EdgeN);
    assert_eq!(select_variant(mask([1, 1, 1, 0, 0, 0, 0, 0])), BorderVariant::EdgeN);
}

#[test]
fn north_edge_wrapping_east() {
    assert_eq!(select_variant(mask([0, 1, 1, 1, 0, 0, 0, 0])), BorderVariant::EdgeNWide);
    assert_eq!(select_variant(mask([1, 1, 1, 1, 1, 0, 0, 0])), BorderVariant::EdgeNWide);
}

#[test]
fn lone_corners() {
    assert_eq!(select_variant(mask([0, 0, 1, 0, 0, 0, 0, 0])), BorderVariant::CornerNe);
    assert_eq!(select_variant(mask([0, 0, 0, 0, 1, 0, 0, 0])), BorderVariant::CornerSe);
    assert_eq!(select_variant(mask([0, 0, 0, 0, 0, 0, 1, 0])), BorderVariant::CornerSw);
}

#[test]
fn east_edges() {
    assert_eq!(select_variant(mask([0, 0, 0, 1, 0, 0, 0, 0])), BorderVariant::EdgeE);
    assert_eq!(select_variant(mask([0, 0, 1, 1, 1, 0, 0, 0])), BorderVariant::EdgeE);
    assert_eq!(select_variant(mask([0, 0, 0, 1, 1, 1, 0, 0])), BorderVariant::EdgeEWide);
}

#[test]
fn south_edge_accepts_any_southern_combination() {
    assert_eq!(select_variant(mask([0, 0, 0, 0, 0, 1, 0, 0])), BorderVariant::EdgeS);
    assert_eq!(select_variant(mask([0, 0, 0, 0, 1, 1, 1, 0])), BorderVariant::EdgeS);
    assert_eq!(select_variant(mask([0, 0, 0, 0, 1, 0, 1, 0])), BorderVariant::EdgeS);
}

#[test]
fn south_edge_wrapping_west() {
    assert_eq!(select_variant(mask([0, 0, 0, 0, 0, 1, 1, 1])), BorderVariant::EdgeSWide);
    assert_eq!(select_variant(mask([1, 0, 0, 0, 1, 1, 1, 1])), BorderVariant::EdgeSWide);
}

#[test]
fn west_edge() {
    assert_eq!(select_variant(mask([0, 0, 0, 0, 0, 0, 0, 1])), BorderVariant::EdgeW);
    assert_eq!(select_variant(mask([1, 0, 0, 0, 0, 0, 1, 1])), BorderVariant::EdgeW);
}

#[test]
fn north_and_west_wrap() {
    assert_eq!(select_variant(mask([1, 1, 0, 0, 0, 0, 0, 1])), BorderVariant::CornerNwWrap);
    assert_eq!(select_variant(mask([1, 1, 1, 0, 0, 0, 1, 1])), BorderVariant::CornerNwWrap);
}

#[test]
fn unmatched_mask_falls_back_to_center() {
    // North and south both wet: no pattern covers a channel.
    assert_eq!(select_variant(mask([0, 1, 0, 0, 0, 1, 0, 0])), BorderVariant::Center);
    assert_eq!(select_variant(mask([1; 8])), BorderVariant::Center);
}

#[test]
fn priority_order_decides_overlapping_patterns() {
    // NE set with E clear fits the plain north edge before the wide one is
    // ever considered.
    assert_eq!(select_variant(mask([0, 1, 1, 0, 0, 0, 0, 0])), BorderVariant::EdgeN);
}

// ── NeighborMask ─────────────────────────────────────────────────────────────

#[test]
fn mask_marks_only_the_requested_category() {
    let neighbors = [W, G, E, N, W, G, N, E];
    assert_eq!(NeighborMask::from_neighbors(&neighbors, Water), mask([1, 0, 0, 0, 1, 0, 0, 0]));
    assert_eq!(NeighborMask::from_neighbors(&neighbors, Earth), mask([0, 0, 1, 0, 0, 0, 0, 1]));
}

#[test]
fn missing_neighbors_never_match() {
    let m = NeighborMask::from_neighbors(&[N; 8], Water);
    assert!(!m.any());
}

// ── select_sprite ────────────────────────────────────────────────────────────

#[test]
fn no_neighbor_data_gives_center() {
    let choice = select_sprite(&[N; 8], Grass, &[Water, Earth]);
    assert_eq!(choice, BorderChoice::center());
    assert!(choice.is_center());
}

#[test]
fn single_water_corner_selects_corner_nw() {
    let neighbors = [W, G, G, G, G, G, G, G];
    let choice = select_sprite(&neighbors, Grass, &[Water, Earth]);
    assert_eq!(choice.other, Some(Water));
    assert_eq!(choice.variant, BorderVariant::CornerNw);
}

#[test]
fn water_takes_precedence_over_earth() {
    // Water to the north, earth to the west: both would match a pattern.
    let neighbors = [G, W, G, G, G, G, G, E];
    let choice = select_sprite(&neighbors, Grass, &[Water, Earth]);
    assert_eq!(choice.other, Some(Water));
    assert_eq!(choice.variant, BorderVariant::EdgeN);

    // Reversing the priority list reverses the outcome.
    let choice = select_sprite(&neighbors, Grass, &[Earth, Water]);
    assert_eq!(choice.other, Some(Earth));
    assert_eq!(choice.variant, BorderVariant::EdgeW);
}

#[test]
fn lower_priority_category_used_when_higher_does_not_match() {
    // Water north and south matches nothing; earth in the SE corner does.
    let neighbors = [G, W, G, G, E, W, G, G];
    let choice = select_sprite(&neighbors, Grass, &[Water, Earth]);
    assert_eq!(choice.other, Some(Earth));
    assert_eq!(choice.variant, BorderVariant::CornerSe);
}

#[test]
fn own_category_is_never_a_border() {
    let neighbors = [G, G, G, G, G, G, G, G];
    assert!(select_sprite(&neighbors, Grass, &[Grass]).is_center());
}

#[test]
fn selection_is_idempotent() {
    let neighbors = [G, W, W, W, G, G, G, G];
    let first = select_sprite(&neighbors, Grass, &[Water, Earth]);
    let second = select_sprite(&neighbors, Grass, &[Water, Earth]);
    assert_eq!(first, second);
    assert_eq!(first.variant, BorderVariant::EdgeNWide);
}
