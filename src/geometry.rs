// =============================================================================
// GEOMETRY.RS — Positions and headings for moving entities
//
// - Vector2: 2D world-space position / offset (tile units)
// - Rotation: heading angle in radians
// - Coords: position + heading, with derived basis vectors
//
// Angle 0 points down the +y axis (sprites are authored facing down), so
// `forward` is (sin θ, cos θ) rather than the textbook (cos θ, sin θ).
// =============================================================================

use std::f64::consts::TAU;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::MathError;

// =============================================================================
// VECTOR2
// =============================================================================

/// A 2D vector with exact component-wise equality (no epsilon).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise product.
    #[inline]
    pub fn mul(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }

    /// Component-wise quotient.
    ///
    /// Fails with [`MathError::DivisionByZero`] if either component of
    /// `other` is zero.
    pub fn div(self, other: Vector2) -> Result<Vector2, MathError> {
        if other.x == 0.0 || other.y == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Vector2::new(self.x / other.x, self.y / other.y))
    }

    /// Component-wise floored quotient, `(a / b).floor()`.
    pub fn floor_div(self, other: Vector2) -> Result<Vector2, MathError> {
        let q = self.div(other)?;
        Ok(Vector2::new(q.x.floor(), q.y.floor()))
    }

    pub fn div_scalar(self, divisor: f64) -> Result<Vector2, MathError> {
        if divisor == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Vector2::new(self.x / divisor, self.y / divisor))
    }

    /// Euclidean norm.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector has no direction and yields
    /// [`MathError::DegenerateVector`].
    pub fn normalized(self) -> Result<Vector2, MathError> {
        let len = self.length();
        if len == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(Vector2::new(self.x / len, self.y / len))
    }

    /// Truncate both components toward zero.
    pub fn to_int(self) -> Vector2 {
        Vector2::new(self.x.trunc(), self.y.trunc())
    }

    pub fn to_int_tuple(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::sub(self, rhs)
    }
}

impl Mul for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::mul(self, rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.scale(rhs);
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<glam::DVec2> for Vector2 {
    fn from(v: glam::DVec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::DVec2 {
    fn from(v: Vector2) -> Self {
        glam::DVec2::new(v.x, v.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    fn from(v: Vector2) -> Self {
        glam::Vec2::new(v.x as f32, v.y as f32)
    }
}

// =============================================================================
// ROTATION
// =============================================================================

/// A heading angle in radians.
///
/// Arithmetic never wraps: adding two rotations past 2π leaves the sum as is.
/// Call [`Rotation::wrapped`] explicitly when a value in `[0, 2π)` is needed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation(pub f64);

impl Rotation {
    pub const ZERO: Rotation = Rotation(0.0);

    #[inline]
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// The same heading expressed in `[0, 2π)`.
    pub fn wrapped(self) -> Rotation {
        Rotation(self.0.rem_euclid(TAU))
    }

    #[inline]
    pub fn add(self, other: Rotation) -> Rotation {
        Rotation(self.0 + other.0)
    }

    #[inline]
    pub fn sub(self, other: Rotation) -> Rotation {
        Rotation(self.0 - other.0)
    }

    #[inline]
    pub fn mul(self, other: Rotation) -> Rotation {
        Rotation(self.0 * other.0)
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Rotation {
        Rotation(self.0 * factor)
    }

    pub fn div(self, other: Rotation) -> Result<Rotation, MathError> {
        if other.0 == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Rotation(self.0 / other.0))
    }

    pub fn floor_div(self, other: Rotation) -> Result<Rotation, MathError> {
        Ok(Rotation(self.div(other)?.0.floor()))
    }

    pub fn div_scalar(self, divisor: f64) -> Result<Rotation, MathError> {
        self.div(Rotation(divisor))
    }
}

impl Add for Rotation {
    type Output = Rotation;
    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::add(self, rhs)
    }
}

impl Sub for Rotation {
    type Output = Rotation;
    fn sub(self, rhs: Rotation) -> Rotation {
        Rotation::sub(self, rhs)
    }
}

impl Mul for Rotation {
    type Output = Rotation;
    fn mul(self, rhs: Rotation) -> Rotation {
        Rotation::mul(self, rhs)
    }
}

impl Mul<f64> for Rotation {
    type Output = Rotation;
    fn mul(self, rhs: f64) -> Rotation {
        self.scale(rhs)
    }
}

impl Neg for Rotation {
    type Output = Rotation;
    fn neg(self) -> Rotation {
        Rotation(-self.0)
    }
}

impl AddAssign for Rotation {
    fn add_assign(&mut self, rhs: Rotation) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Rotation {
    fn sub_assign(&mut self, rhs: Rotation) {
        self.0 -= rhs.0;
    }
}

// =============================================================================
// COORDS
// =============================================================================

/// Position plus heading. Arithmetic distributes over both members
/// independently.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub pos: Vector2,
    pub rotation: Rotation,
}

impl Coords {
    pub const fn new(pos: Vector2, rotation: Rotation) -> Self {
        Self { pos, rotation }
    }

    /// Coords at `pos` facing angle 0.
    pub const fn at(pos: Vector2) -> Self {
        Self { pos, rotation: Rotation::ZERO }
    }

    pub fn add(self, other: Coords) -> Coords {
        Coords::new(self.pos + other.pos, self.rotation + other.rotation)
    }

    pub fn sub(self, other: Coords) -> Coords {
        Coords::new(self.pos - other.pos, self.rotation - other.rotation)
    }

    pub fn mul(self, other: Coords) -> Coords {
        Coords::new(self.pos * other.pos, self.rotation * other.rotation)
    }

    pub fn div(self, other: Coords) -> Result<Coords, MathError> {
        Ok(Coords::new(self.pos.div(other.pos)?, self.rotation.div(other.rotation)?))
    }

    pub fn floor_div(self, other: Coords) -> Result<Coords, MathError> {
        Ok(Coords::new(
            self.pos.floor_div(other.pos)?,
            self.rotation.floor_div(other.rotation)?,
        ))
    }

    /// Unit vector the entity faces: `(sin θ, cos θ)`.
    pub fn forward(&self) -> Vector2 {
        let (sin, cos) = self.rotation.0.sin_cos();
        Vector2::new(sin, cos)
    }

    pub fn backward(&self) -> Vector2 {
        -self.forward()
    }

    /// `(cos θ, -sin θ)`; perpendicular to [`Coords::forward`].
    pub fn right(&self) -> Vector2 {
        let (sin, cos) = self.rotation.0.sin_cos();
        Vector2::new(cos, -sin)
    }

    pub fn left(&self) -> Vector2 {
        -self.right()
    }
}

impl Add for Coords {
    type Output = Coords;
    fn add(self, rhs: Coords) -> Coords {
        Coords::add(self, rhs)
    }
}

impl Sub for Coords {
    type Output = Coords;
    fn sub(self, rhs: Coords) -> Coords {
        Coords::sub(self, rhs)
    }
}

impl Mul for Coords {
    type Output = Coords;
    fn mul(self, rhs: Coords) -> Coords {
        Coords::mul(self, rhs)
    }
}
