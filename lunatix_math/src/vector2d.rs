use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float::{float_eq, is_zero};

/// A displacement or direction in the plane.
///
/// Equality is component-wise and tolerance-based (see [`float_eq`]).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct Vector2D {
    pub vx: f32,
    pub vy: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self { vx: 0.0, vy: 0.0 };

    #[inline]
    pub const fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }

    /// Adds 1 to both components.
    pub fn increment(&mut self) -> &mut Self {
        self.vx += 1.0;
        self.vy += 1.0;
        self
    }

    /// Subtracts 1 from both components.
    pub fn decrement(&mut self) -> &mut Self {
        self.vx -= 1.0;
        self.vy -= 1.0;
        self
    }

    // ------------------ Math Ops ------------------

    /// Scalar product
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.vx * rhs.vx + self.vy * rhs.vy
    }

    /// 2D "cross product": the z component of the 3D cross product of
    /// `(ux, uy, 0)` and `(vx, vy, 0)`. Its sign gives the orientation.
    #[inline]
    pub fn cross(self, rhs: Self) -> f32 {
        self.vx * rhs.vy - rhs.vx * self.vy
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn is_null(self) -> bool {
        is_zero(self.vx) && is_zero(self.vy)
    }

    pub fn is_collinear(self, rhs: Self) -> bool {
        is_zero(self.cross(rhs))
    }

    /// Scales the vector to unit length. The null vector is left untouched.
    pub fn normalize(&mut self) -> &mut Self {
        if !self.is_null() {
            *self *= 1.0 / self.norm();
        }
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

#[inline]
pub fn scalar_product(u: Vector2D, v: Vector2D) -> f32 {
    u.dot(v)
}

#[inline]
pub fn vector_product(u: Vector2D, v: Vector2D) -> f32 {
    u.cross(v)
}

#[inline]
pub fn vector_norm(v: Vector2D) -> f32 {
    v.norm()
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        float_eq(self.vx, other.vx) && float_eq(self.vy, other.vy)
    }
}

// --- Add ---
impl Add for Vector2D {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.vx + rhs.vx, self.vy + rhs.vy)
    }
}
impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.vx += rhs.vx;
        self.vy += rhs.vy;
    }
}

// --- Sub ---
impl Sub for Vector2D {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.vx - rhs.vx, self.vy - rhs.vy)
    }
}
impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        self.vx -= rhs.vx;
        self.vy -= rhs.vy;
    }
}

impl Neg for Vector2D {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.vx, -self.vy)
    }
}

// --- Mul (scalar) ---
impl Mul<f32> for Vector2D {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.vx * rhs, self.vy * rhs)
    }
}
impl MulAssign<f32> for Vector2D {
    fn mul_assign(&mut self, rhs: f32) {
        self.vx *= rhs;
        self.vy *= rhs;
    }
}

// --- Div (scalar) ---
impl Div<f32> for Vector2D {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.vx / rhs, self.vy / rhs)
    }
}
impl DivAssign<f32> for Vector2D {
    fn div_assign(&mut self, rhs: f32) {
        self.vx /= rhs;
        self.vy /= rhs;
    }
}

// --- glam interop ---
impl From<glam::Vec2> for Vector2D {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
impl From<Vector2D> for glam::Vec2 {
    fn from(v: Vector2D) -> Self {
        glam::Vec2::new(v.vx, v.vy)
    }
}
