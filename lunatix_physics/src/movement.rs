//! Relative and absolute movement of hitboxes.

use lunatix_math::Vector2D;

use crate::error::Result;
use crate::hitbox::{Circle, FloatPosition, FloatingBox};
use crate::polygon::Polygon;

pub fn move_point(p: &mut FloatPosition, v: Vector2D) {
    p.x += v.vx;
    p.y += v.vy;
}

pub fn move_box(b: &mut FloatingBox, v: Vector2D) {
    move_point(&mut b.p, v);
}

pub fn move_circle(c: &mut Circle, v: Vector2D) {
    move_point(&mut c.center, v);
}

pub fn move_poly(poly: &mut Polygon, v: Vector2D) {
    poly.move_by(v);
}

pub fn move_point_to(p: &mut FloatPosition, dest: FloatPosition) {
    *p = dest;
}

/// Moves the top-left corner of the box to `dest`.
pub fn move_box_to(b: &mut FloatingBox, dest: FloatPosition) {
    b.p = dest;
}

pub fn move_circle_to(c: &mut Circle, dest: FloatPosition) {
    move_point_to(&mut c.center, dest);
}

/// See [`Polygon::move_to`].
pub fn move_poly_to(poly: &mut Polygon, dest: FloatPosition) -> Result<()> {
    poly.move_to(dest)
}
