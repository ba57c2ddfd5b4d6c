use std::path::PathBuf;

use tilegame::entity::Ship;
use tilegame::geometry::{Coords, Rotation, Vector2};
use tilegame::level::Level;
use tilegame::save::*;
use tilegame::tiles::TileRegistry;
use tilegame::SaveError;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("tilegame-test-{}", std::process::id()))
        .join(name)
        .join("save1.save")
}

fn sample() -> (TileRegistry, Level, Ship) {
    let reg = TileRegistry::builtin();
    let mut level = Level::new(3, 2);
    level.fill(reg.id_of("base:grass"));
    level.set(1, 0, reg.id_of("base:water")).unwrap();
    level.set(2, 1, None).unwrap();
    let mut ship = Ship::new(Coords::new(Vector2::new(1.5, 0.5), Rotation(0.25)));
    ship.health = 12;
    (reg, level, ship)
}

#[test]
fn capture_records_flat_tile_names() {
    let (reg, level, ship) = sample();
    let data = SaveData::capture(&level, &reg, Vector2::new(3.0, 4.0), &ship);
    assert_eq!(data.size, (3, 2));
    assert_eq!(
        data.tiles,
        vec!["base:grass", "base:water", "base:grass", "base:grass", "base:grass", ""]
    );
    assert_eq!(data.camera_position, (3.0, 4.0));
    assert_eq!(data.player, PlayerData { pos: (1.5, 0.5), rotation: 0.25, health: 12 });
}

#[test]
fn json_layout_matches_save_format() {
    let (reg, level, ship) = sample();
    let data = SaveData::capture(&level, &reg, Vector2::ZERO, &ship);
    let value: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
    assert_eq!(value["size"], serde_json::json!([3, 2]));
    assert_eq!(value["tiles"][5], serde_json::json!(""));
    assert_eq!(value["player"]["health"], serde_json::json!(12));
}

#[test]
fn restore_rebuilds_level_and_player() {
    let (reg, level, ship) = sample();
    let data = SaveData::capture(&level, &reg, Vector2::new(3.0, 4.0), &ship);
    let restored = SaveData::from_json(&data.to_json().unwrap()).unwrap();

    assert_eq!(restored.restore_level(&reg).unwrap(), level);
    let mut other = Ship::new(Coords::at(Vector2::ZERO));
    other.velocity = Vector2::new(1.0, 1.0);
    restored.restore_player(&mut other);
    assert_eq!(other.coords, ship.coords);
    assert_eq!(other.health, 12);
    assert_eq!(other.velocity, Vector2::ZERO);
    assert_eq!(restored.camera(), Vector2::new(3.0, 4.0));
}

#[test]
fn unknown_tile_name_is_rejected() {
    let reg = TileRegistry::builtin();
    let data = SaveData {
        tiles: vec!["base:lava".into()],
        size: (1, 1),
        camera_position: (0.0, 0.0),
        player: PlayerData { pos: (0.0, 0.0), rotation: 0.0, health: 20 },
    };
    assert!(matches!(data.restore_level(&reg), Err(SaveError::UnknownTile(n)) if n == "base:lava"));
}

#[test]
fn tile_count_must_match_size() {
    let reg = TileRegistry::builtin();
    let data = SaveData {
        tiles: vec![String::new(); 3],
        size: (2, 2),
        camera_position: (0.0, 0.0),
        player: PlayerData { pos: (0.0, 0.0), rotation: 0.0, health: 20 },
    };
    assert!(matches!(
        data.restore_level(&reg),
        Err(SaveError::SizeMismatch { expected: 4, actual: 3, .. })
    ));
}

#[test]
fn write_creates_directory_and_reads_back() {
    let (reg, level, ship) = sample();
    let path = scratch_path("roundtrip");
    let data = SaveData::capture(&level, &reg, Vector2::new(1.0, 2.0), &ship);
    data.write(&path).unwrap();
    assert_eq!(SaveData::read(&path).unwrap(), data);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn reading_missing_slot_is_io_error() {
    let path = scratch_path("missing");
    assert!(matches!(SaveData::read(&path), Err(SaveError::Io { .. })));
}

#[test]
fn malformed_slot_is_json_error() {
    assert!(matches!(SaveData::from_json("{\"tiles\": 3}"), Err(SaveError::Json(_))));
}
