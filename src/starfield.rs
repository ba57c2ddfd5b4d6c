// =============================================================================
// STARFIELD.RS — Background star layer
//
// The background is one star texture tiled around the camera: the tile the
// camera sits over plus its eight neighbours, so the screen is always
// covered. Star positions are generated from a seed so a level always shows
// the same sky.
// =============================================================================

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Vector2;

pub const STAR_COUNT: usize = 100;
pub const STAR_SIZE_MIN: u32 = 2;
pub const STAR_SIZE_MAX: u32 = 5;

/// One star: pixel position inside the texture and its diameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Star {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub seed: u64,
    /// Size of the star texture in pixels.
    pub texture_size: (u32, u32),
}

impl Starfield {
    pub fn new(seed: u64, texture_size: (u32, u32)) -> Self {
        Self { seed, texture_size }
    }

    /// Which texture tile the camera is over. Truncates toward zero, so the
    /// tiles either side of the origin are both quadrant 0.
    pub fn quadrant(&self, camera: Vector2) -> (i32, i32) {
        let (w, h) = self.texture_size;
        if w == 0 || h == 0 {
            return (0, 0);
        }
        ((camera.x / w as f64) as i32, (camera.y / h as f64) as i32)
    }

    /// Screen offsets of the nine texture copies to draw, column by column
    /// from the top-left neighbour.
    pub fn blit_offsets(&self, camera: Vector2) -> [Vec2; 9] {
        let (w, h) = (self.texture_size.0 as f64, self.texture_size.1 as f64);
        let (qx, qy) = self.quadrant(camera);
        let mut offsets = [Vec2::ZERO; 9];
        let neighbours = (-1..=1).flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)));
        for (slot, (dx, dy)) in offsets.iter_mut().zip(neighbours) {
            *slot = Vec2::new(
                (-camera.x + (qx + dx) as f64 * w) as f32,
                (-camera.y + (qy + dy) as f64 * h) as f32,
            );
        }
        offsets
    }

    /// The stars painted onto the texture. Same seed, same stars.
    pub fn stars(&self) -> Vec<Star> {
        let (w, h) = self.texture_size;
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0..=w),
                y: rng.gen_range(0..=h),
                size: rng.gen_range(STAR_SIZE_MIN..=STAR_SIZE_MAX),
            })
            .collect()
    }
}
