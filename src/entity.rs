// =============================================================================
// ENTITY.RS — Things that move over the level
//
// All motion runs in fixed ticks (one per frame at the configured fps).
// =============================================================================

use crate::geometry::{Coords, Rotation, Vector2};

/// Velocity multiplier applied each tick while the throttle is released.
pub const VELOCITY_DAMPING: f64 = 0.95;

/// Gun offsets from the ship's centre along its right / left axes.
pub const GUN_OFFSET_RIGHT: f64 = 10.0;
pub const GUN_OFFSET_LEFT: f64 = 6.0;

pub const BULLET_SPEED: f64 = 25.0;
/// Bullets expire after this many ticks (5 seconds at 60 fps).
pub const BULLET_LIFETIME: u32 = 300;

pub const DEFAULT_MAX_HEALTH: u32 = 20;

// ── Ship ─────────────────────────────────────────────────────────────────────

/// The player-controlled ship.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub coords: Coords,
    pub velocity: Vector2,
    pub throttle_on: bool,
    /// Displayed by the UI only; nothing deals damage yet.
    pub health: u32,
    pub max_health: u32,
}

impl Ship {
    pub fn new(coords: Coords) -> Self {
        Self {
            coords,
            velocity: Vector2::ZERO,
            throttle_on: false,
            health: DEFAULT_MAX_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
        }
    }

    /// Accelerate along the facing direction and hold the throttle open.
    pub fn thrust(&mut self, acceleration: f64) {
        self.velocity += self.coords.forward() * acceleration;
        self.throttle_on = true;
    }

    pub fn release_throttle(&mut self) {
        self.throttle_on = false;
    }

    pub fn turn(&mut self, radians: f64) {
        self.coords.rotation += Rotation(radians);
    }

    /// Advance one tick: clamp each velocity axis to `±max_velocity`, move,
    /// then bleed off speed if the throttle is released.
    pub fn update(&mut self, max_velocity: f64) {
        self.velocity.x = self.velocity.x.clamp(-max_velocity, max_velocity);
        self.velocity.y = self.velocity.y.clamp(-max_velocity, max_velocity);

        self.coords.pos += self.velocity;

        if !self.throttle_on {
            self.velocity *= VELOCITY_DAMPING;
        }
    }

    /// Fire one bullet from each gun.
    pub fn shoot(&self) -> [Bullet; 2] {
        let right = self.coords.pos + self.coords.right() * GUN_OFFSET_RIGHT;
        let left = self.coords.pos + self.coords.left() * GUN_OFFSET_LEFT;
        [
            Bullet::new(Coords::new(right, self.coords.rotation)),
            Bullet::new(Coords::new(left, self.coords.rotation)),
        ]
    }

    /// Grid cell under the ship's centre.
    pub fn tile_position(&self) -> (i32, i32) {
        (self.coords.pos.x.floor() as i32, self.coords.pos.y.floor() as i32)
    }
}

// ── Bullet ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub coords: Coords,
    /// Ticks since the bullet was fired.
    pub age: u32,
    pub dead: bool,
}

impl Bullet {
    pub fn new(coords: Coords) -> Self {
        Self { coords, age: 0, dead: false }
    }

    pub fn update(&mut self) {
        if self.dead {
            return;
        }
        self.age += 1;
        if self.age > BULLET_LIFETIME {
            self.dead = true;
            return;
        }
        // Sprites face down +y, so bullets leave against `forward`.
        self.coords.pos -= self.coords.forward() * BULLET_SPEED;
    }
}
