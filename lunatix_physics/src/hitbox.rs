//! Value types used as hitboxes: points, boxes, segments, lines and circles.

use lunatix_math::{Vector2D, float_eq, is_zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A point in float coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct FloatPosition {
    pub x: f32,
    pub y: f32,
}

impl FloatPosition {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `to`
    #[inline]
    pub fn vector_to(self, to: FloatPosition) -> Vector2D {
        Vector2D::new(to.x - self.x, to.y - self.y)
    }

    #[inline]
    pub fn translated(self, v: Vector2D) -> Self {
        Self::new(self.x + v.vx, self.y + v.vy)
    }
}

impl PartialEq for FloatPosition {
    fn eq(&self, other: &Self) -> bool {
        float_eq(self.x, other.x) && float_eq(self.y, other.y)
    }
}

impl fmt::Display for FloatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<glam::Vec2> for FloatPosition {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
impl From<FloatPosition> for glam::Vec2 {
    fn from(p: FloatPosition) -> Self {
        glam::Vec2::new(p.x, p.y)
    }
}

/// Axis-aligned box anchored at its top-left corner `p`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatingBox {
    pub p: FloatPosition,
    pub w: i32,
    pub h: i32,
}

impl FloatingBox {
    #[inline]
    pub const fn new(p: FloatPosition, w: i32, h: i32) -> Self {
        Self { p, w, h }
    }

    pub fn center(&self) -> FloatPosition {
        FloatPosition::new(self.p.x + self.w as f32 / 2.0, self.p.y + self.h as f32 / 2.0)
    }

    /// The four corners, clockwise from `p` in screen coordinates.
    pub fn corners(&self) -> [FloatPosition; 4] {
        let (w, h) = (self.w as f32, self.h as f32);
        [
            self.p,
            FloatPosition::new(self.p.x + w, self.p.y),
            FloatPosition::new(self.p.x + w, self.p.y + h),
            FloatPosition::new(self.p.x, self.p.y + h),
        ]
    }
}

impl fmt::Display for FloatingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatingBox(p:{}, w:{}, h:{})", self.p, self.w, self.h)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub p: FloatPosition,
    pub q: FloatPosition,
}

impl Segment {
    #[inline]
    pub const fn new(p: FloatPosition, q: FloatPosition) -> Self {
        Self { p, q }
    }

    #[inline]
    pub fn direction(&self) -> Vector2D {
        self.p.vector_to(self.q)
    }
}

/// A line given by an origin and a direction vector
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    pub o: FloatPosition,
    pub v: Vector2D,
}

impl Line {
    #[inline]
    pub const fn new(o: FloatPosition, v: Vector2D) -> Self {
        Self { o, v }
    }

    pub fn is_parallel_with(&self, l: &Line) -> bool {
        self.v.is_collinear(l.v)
    }

    pub fn is_perpendicular_to(&self, l: &Line) -> bool {
        is_zero(self.v.dot(l.v))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: FloatPosition,
    pub radius: u32,
}

impl Circle {
    #[inline]
    pub const fn new(center: FloatPosition, radius: u32) -> Self {
        Self { center, radius }
    }

    /// Orders circles by radius only; the centers are ignored.
    pub fn cmp_radius(&self, other: &Circle) -> Ordering {
        self.radius.cmp(&other.radius)
    }
}
