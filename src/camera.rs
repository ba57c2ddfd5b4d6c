use glam::Vec2;

use crate::config::GameConfig;
use crate::geometry::Vector2;

/// 2D camera: tracks a world-space position (in tiles) with smooth follow
/// and smooth zoom.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// World-space tile position the camera is centred on.
    pub position: Vector2,
    /// Current zoom level (1.0 = config zoom, >1 zooms in, <1 zooms out).
    pub zoom: f32,
    /// How quickly `follow` closes the gap, in fractions per second.
    pub follow_speed: f64,
    /// Smooth-zoom lerp target; `set_zoom` writes here.
    pub(crate) target_zoom: f32,
}

impl Camera {
    pub fn new(position: Vector2) -> Self {
        Self { position, zoom: 1.0, follow_speed: 8.0, target_zoom: 1.0 }
    }

    /// Move straight to `position`.
    pub fn jump_to(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Ease toward `target`. Snaps once `follow_speed * dt` reaches 1.
    pub fn follow(&mut self, target: Vector2, dt: f64) {
        let t = (self.follow_speed * dt).clamp(0.0, 1.0);
        if t >= 1.0 {
            self.position = target;
            return;
        }
        self.position += (target - self.position) * t;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.target_zoom = zoom.max(0.01);
    }

    /// Advance the zoom animation by `dt` seconds (converges at ~8× per second).
    pub fn tick(&mut self, dt: f32) {
        let speed = 8.0_f32;
        self.zoom += (self.target_zoom - self.zoom) * (speed * dt).min(1.0);
    }

    fn scale(&self, config: &GameConfig) -> f32 {
        config.tile_pixels() * self.zoom.max(0.01)
    }

    /// Project a world position to screen pixels. The camera position lands at
    /// the centre of the window.
    ///
    /// ```text
    /// screen = (world - camera) * tile_size * zoom + resolution / 2
    /// ```
    pub fn world_to_screen(&self, world: Vector2, config: &GameConfig) -> Vec2 {
        let (w, h) = config.resolution;
        let offset: Vec2 = (world - self.position).into();
        offset * self.scale(config) + Vec2::new(w as f32, h as f32) / 2.0
    }

    /// Inverse of [`Camera::world_to_screen`].
    pub fn screen_to_world(&self, screen: Vec2, config: &GameConfig) -> Vector2 {
        let (w, h) = config.resolution;
        let centered = screen - Vec2::new(w as f32, h as f32) / 2.0;
        let world = centered / self.scale(config);
        Vector2::new(world.x as f64, world.y as f64) + self.position
    }

    /// Grid cell under a screen pixel (floored, so negative positions map
    /// to negative cells). `None` when the projection is degenerate, e.g. a
    /// zero tile size, and the pixel maps to no finite world position.
    pub fn screen_to_tile(&self, screen: Vec2, config: &GameConfig) -> Option<(i32, i32)> {
        let world = self.screen_to_world(screen, config);
        if !(world.x.is_finite() && world.y.is_finite()) {
            return None;
        }
        Some((world.x.floor() as i32, world.y.floor() as i32))
    }
}
