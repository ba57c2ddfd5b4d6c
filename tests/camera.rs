use glam::Vec2;
use tilegame::camera::Camera;
use tilegame::config::GameConfig;
use tilegame::geometry::Vector2;

#[test]
fn camera_position_is_screen_center() {
    let cfg = GameConfig::default();
    let cam = Camera::new(Vector2::new(3.0, 4.0));
    assert_eq!(cam.world_to_screen(Vector2::new(3.0, 4.0), &cfg), Vec2::new(400.0, 300.0));
}

#[test]
fn one_tile_is_tile_size_pixels() {
    let cfg = GameConfig::default();
    let cam = Camera::new(Vector2::ZERO);
    assert_eq!(cam.world_to_screen(Vector2::new(1.0, -1.0), &cfg), Vec2::new(416.0, 284.0));
}

#[test]
fn config_zoom_scales_projection() {
    let cfg = GameConfig { zoom: 2.0, ..GameConfig::default() };
    let cam = Camera::new(Vector2::ZERO);
    assert_eq!(cam.world_to_screen(Vector2::new(1.0, 0.0), &cfg), Vec2::new(432.0, 300.0));
}

#[test]
fn screen_to_world_inverts_projection() {
    let cfg = GameConfig::default();
    let cam = Camera::new(Vector2::new(2.5, -1.0));
    let world = Vector2::new(7.25, 3.5);
    let back = cam.screen_to_world(cam.world_to_screen(world, &cfg), &cfg);
    assert!((back.x - world.x).abs() < 1e-4 && (back.y - world.y).abs() < 1e-4);
}

#[test]
fn screen_to_tile_floors_negative_cells() {
    let cfg = GameConfig::default();
    let cam = Camera::new(Vector2::ZERO);
    assert_eq!(cam.screen_to_tile(Vec2::new(400.0 + 8.0, 300.0 + 8.0), &cfg), Some((0, 0)));
    assert_eq!(cam.screen_to_tile(Vec2::new(400.0 - 8.0, 300.0 - 8.0), &cfg), Some((-1, -1)));
}

#[test]
fn follow_moves_part_way_then_snaps() {
    let mut cam = Camera::new(Vector2::ZERO);
    cam.follow_speed = 5.0;
    cam.follow(Vector2::new(10.0, 0.0), 0.1);
    assert!((cam.position.x - 5.0).abs() < 1e-12);
    cam.follow(Vector2::new(10.0, 0.0), 1.0);
    assert_eq!(cam.position, Vector2::new(10.0, 0.0));
}

#[test]
fn zoom_eases_toward_target() {
    let mut cam = Camera::new(Vector2::ZERO);
    cam.set_zoom(2.0);
    cam.tick(1.0 / 60.0);
    assert!(cam.zoom > 1.0 && cam.zoom < 2.0);
    cam.tick(1.0);
    assert!((cam.zoom - 2.0).abs() < 1e-6);
}

#[test]
fn degenerate_projection_maps_to_no_tile() {
    let cam = Camera::new(Vector2::new(5.0, 5.0));
    let flat = GameConfig { tile_size: 0, ..GameConfig::default() };
    assert_eq!(cam.screen_to_tile(Vec2::new(400.0, 300.0), &flat), None);
    assert_eq!(cam.screen_to_tile(Vec2::new(10.0, 20.0), &flat), None);

    let no_zoom = GameConfig { zoom: 0.0, ..GameConfig::default() };
    assert_eq!(cam.screen_to_tile(Vec2::new(400.0, 300.0), &no_zoom), None);
}
