//! Collision predicates between points, boxes, circles, segments, lines and
//! polygons.
//!
//! Every predicate is pure and symmetric in its shapes. Only the
//! polygon-polygon test can fail, when one of its inputs has fewer than three
//! vertices.

use lunatix_math::{FNIL, Vector2D, is_zero};
use rand::Rng;

use crate::error::Result;
use crate::hitbox::{Circle, FloatPosition, FloatingBox, Line, Segment};
use crate::polygon::{Polygon, TRIANGLE_SIDES};
use crate::settings::{CollisionSettings, SeparatingAxes};

// ============================================================================
// Distances
// ============================================================================

pub fn euclide_square_distance(p1: FloatPosition, p2: FloatPosition) -> f32 {
    (p2.x - p1.x) * (p2.x - p1.x) + (p2.y - p1.y) * (p2.y - p1.y)
}

pub fn euclide_distance(p1: FloatPosition, p2: FloatPosition) -> f32 {
    euclide_square_distance(p1, p2).sqrt()
}

pub fn seg_length(s: &Segment) -> f32 {
    euclide_distance(s.p, s.q)
}

// ============================================================================
// Simple shapes
// ============================================================================

/// `p` lies strictly inside `b`; points on an edge do not collide.
pub fn collision_point_box(p: FloatPosition, b: &FloatingBox) -> bool {
    !(p.x <= b.p.x
        || p.y >= b.p.y + b.h as f32
        || p.y <= b.p.y
        || p.x >= b.p.x + b.w as f32)
}

pub fn collision_point_circle(p: FloatPosition, c: &Circle) -> bool {
    let r = c.radius as f32;
    euclide_square_distance(p, c.center) <= r * r
}

pub fn collision_box(a: &FloatingBox, b: &FloatingBox) -> bool {
    !(a.p.x >= b.p.x + b.w as f32
        || a.p.y >= b.p.y + b.h as f32
        || a.p.x + a.w as f32 <= b.p.x
        || a.p.y + a.h as f32 <= b.p.y)
}

pub fn collision_circle(a: &Circle, b: &Circle) -> bool {
    let r = a.radius as f32 + b.radius as f32;
    euclide_square_distance(a.center, b.center) <= r * r
}

pub fn collision_seg_circle(c: &Circle, s: &Segment) -> bool {
    collision_line_circle(c, &Line::new(s.p, s.direction()))
}

/// Tests the circle against the span `l.o .. l.o + l.v`.
///
/// The center is projected on the line; the projection only counts when it
/// falls between both ends, otherwise only the ends themselves are tested.
pub fn collision_line_circle(c: &Circle, l: &Line) -> bool {
    let a = l.o;
    let b = l.o.translated(l.v);

    if collision_point_circle(a, c) || collision_point_circle(b, c) {
        return true;
    }

    let o = c.center;
    let ab = a.vector_to(b);
    let ao = a.vector_to(o);
    let bo = b.vector_to(o);

    let scal_ab_ao = ab.dot(ao);
    let scal_ba_bo = (-ab).dot(bo);
    if scal_ab_ao < FNIL || scal_ba_bo < FNIL {
        return false;
    }

    let ab_len2 = ab.dot(ab);
    if is_zero(ab_len2) {
        return false;
    }

    let t = scal_ab_ao / ab_len2;
    collision_point_circle(a.translated(ab * t), c)
}

pub fn collision_circle_box(c: &Circle, b: &FloatingBox) -> bool {
    if collision_point_box(c.center, b) {
        return true;
    }

    let (w, h) = (b.w as f32, b.h as f32);
    let sides = [
        Line::new(b.p, Vector2D::new(FNIL, h)),
        Line::new(FloatPosition::new(b.p.x, b.p.y + h), Vector2D::new(w, FNIL)),
        Line::new(FloatPosition::new(b.p.x + w, b.p.y), Vector2D::new(FNIL, h)),
        Line::new(b.p, Vector2D::new(w, FNIL)),
    ];
    sides.iter().any(|side| collision_line_circle(c, side))
}

// ============================================================================
// Segments and lines
// ============================================================================

// `c` and `d` are on opposite sides of line (ab), or on it.
fn straddles(a: FloatPosition, b: FloatPosition, c: FloatPosition, d: FloatPosition) -> bool {
    let ab = a.vector_to(b);
    ab.cross(a.vector_to(d)) * ab.cross(a.vector_to(c)) <= FNIL
}

/// Segments touching at an end point intersect.
pub fn intersect_segment(s: &Segment, t: &Segment) -> bool {
    straddles(s.p, s.q, t.p, t.q) && straddles(t.p, t.q, s.p, s.q)
}

pub fn intersect_line(l1: &Line, l2: &Line) -> bool {
    !l1.is_parallel_with(l2) && !l2.is_parallel_with(l1)
}

// ============================================================================
// Polygons
// ============================================================================

/// Ray casting with the default [`CollisionSettings`].
///
/// A point equal to a vertex always collides.
pub fn collision_point_poly(p: FloatPosition, poly: &Polygon) -> bool {
    collision_point_poly_with(p, poly, &CollisionSettings::default())
}

/// Casts a ray from `p` to a far point with a random offset, so that the ray
/// is unlikely to run along an edge or through a vertex, and counts the edges
/// it crosses.
pub fn collision_point_poly_with(
    p: FloatPosition,
    poly: &Polygon,
    settings: &CollisionSettings,
) -> bool {
    let far = far_point(settings);
    let ray = Segment::new(p, far);
    let mut crossings = 0usize;

    for (a, b) in poly.edges() {
        if p == a {
            return true;
        }
        if intersect_segment(&ray, &Segment::new(a, b)) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

// Out of range settings fall back to the defaults, the ray must stay finite.
fn far_point(settings: &CollisionSettings) -> FloatPosition {
    let defaults = CollisionSettings::default();
    let distance = if settings.ray_distance.is_finite() && settings.ray_distance > 0.0 {
        settings.ray_distance
    } else {
        log::debug!("invalid ray distance {}, using {}", settings.ray_distance, defaults.ray_distance);
        defaults.ray_distance
    };
    let jitter = if settings.ray_jitter.is_finite() && settings.ray_jitter >= 0.0 {
        settings.ray_jitter
    } else {
        log::debug!("invalid ray jitter {}, using {}", settings.ray_jitter, defaults.ray_jitter);
        defaults.ray_jitter
    };

    let (jx, jy) = if jitter > 0.0 {
        let mut rng = rand::thread_rng();
        (rng.gen_range(0.0..jitter), rng.gen_range(0.0..jitter))
    } else {
        (0.0, 0.0)
    };
    FloatPosition::new(distance + jx, distance + jy)
}

pub fn collision_circle_poly(c: &Circle, poly: &Polygon) -> bool {
    collision_circle_poly_with(c, poly, &CollisionSettings::default())
}

pub fn collision_circle_poly_with(c: &Circle, poly: &Polygon, settings: &CollisionSettings) -> bool {
    collision_point_poly_with(c.center, poly, settings)
        || poly
            .edges()
            .any(|(a, b)| collision_seg_circle(c, &Segment::new(a, b)))
}

pub fn collision_box_poly(b: &FloatingBox, poly: &Polygon) -> bool {
    collision_box_poly_with(b, poly, &CollisionSettings::default())
}

pub fn collision_box_poly_with(
    b: &FloatingBox,
    poly: &Polygon,
    settings: &CollisionSettings,
) -> bool {
    let corners = b.corners();
    let sides = [
        Segment::new(corners[0], corners[1]),
        Segment::new(corners[1], corners[2]),
        Segment::new(corners[2], corners[3]),
        Segment::new(corners[3], corners[0]),
    ];

    for (e, f) in poly.edges() {
        let edge = Segment::new(e, f);
        if sides.iter().any(|side| intersect_segment(side, &edge)) {
            return true;
        }
        if collision_point_box(e, b) {
            return true;
        }
    }

    corners
        .iter()
        .any(|&corner| collision_point_poly_with(corner, poly, settings))
}

/// Polygon-polygon collision with the default [`CollisionSettings`].
///
/// Fails with [`PolygonError::NotEnoughVertices`](crate::PolygonError) if
/// either polygon has fewer than three vertices.
pub fn collision_poly(poly1: &Polygon, poly2: &Polygon) -> Result<bool> {
    collision_poly_with(poly1, poly2, &CollisionSettings::default())
}

/// Three steps, cheapest first:
///
/// 1. enclosing boxes that do not overlap reject the pair, O(n + m);
/// 2. two convex polygons with more than three vertices each go through the
///    separating-axis test, O(n + m) on box axes or O(n * m) on edge normals;
/// 3. anything else uses the naive edge intersection and containment test,
///    O(n * m).
pub fn collision_poly_with(
    poly1: &Polygon,
    poly2: &Polygon,
    settings: &CollisionSettings,
) -> Result<bool> {
    const OPERATION: &str = "compute a polygon collision";
    poly1.ensure_polygon(OPERATION)?;
    poly2.ensure_polygon(OPERATION)?;

    let box1 = poly1.enclosing_box()?;
    let box2 = poly2.enclosing_box()?;
    if !boxes_touch(&box1, &box2) {
        log::trace!("polygon collision rejected by enclosing boxes");
        return Ok(false);
    }

    let (n, m) = (poly1.num_vertices(), poly2.num_vertices());
    if poly1.is_convex() && poly2.is_convex() && n > TRIANGLE_SIDES && m > TRIANGLE_SIDES {
        log::trace!("polygon collision using separating axes ({:?})", settings.separating_axes);
        return Ok(match settings.separating_axes {
            SeparatingAxes::BoundingBox => sat_bounding_box(&box1, &box2),
            SeparatingAxes::EdgeNormals => sat_edge_normals(poly1, poly2),
        });
    }

    log::trace!("polygon collision using edge intersection ({n} x {m} edges)");
    Ok(naive_collision_poly(poly1, poly2, settings))
}

// Unlike `collision_box`, boxes sharing a side or a corner count: polygons
// in contact collide.
fn boxes_touch(a: &FloatingBox, b: &FloatingBox) -> bool {
    !(a.p.x > b.p.x + b.w as f32
        || a.p.y > b.p.y + b.h as f32
        || a.p.x + (a.w as f32) < b.p.x
        || a.p.y + (a.h as f32) < b.p.y)
}

// Closed intervals, touching ends overlap.
#[inline]
fn intersect_interval(min1: f32, max1: f32, min2: f32, max2: f32) -> bool {
    if min1 < min2 { max1 >= min2 } else { max2 >= min1 }
}

// Interval overlap on the x and y axes only. Weaker than a real SAT: two
// convex polygons whose boxes overlap are reported as colliding.
fn sat_bounding_box(box1: &FloatingBox, box2: &FloatingBox) -> bool {
    let (min1, min2) = (box1.p, box2.p);
    let max1 = FloatPosition::new(min1.x + box1.w as f32, min1.y + box1.h as f32);
    let max2 = FloatPosition::new(min2.x + box2.w as f32, min2.y + box2.h as f32);

    intersect_interval(min1.x, max1.x, min2.x, max2.x)
        && intersect_interval(min1.y, max1.y, min2.y, max2.y)
}

fn project(poly: &Polygon, axis: Vector2D) -> (f32, f32) {
    poly.points()
        .iter()
        .map(|p| axis.dot(Vector2D::new(p.x, p.y)))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

fn sat_edge_normals(poly1: &Polygon, poly2: &Polygon) -> bool {
    let axes = poly1
        .edges()
        .chain(poly2.edges())
        .map(|(a, b)| {
            let edge = a.vector_to(b);
            Vector2D::new(-edge.vy, edge.vx)
        })
        .filter(|axis| !axis.is_null());

    for axis in axes {
        let (min1, max1) = project(poly1, axis);
        let (min2, max2) = project(poly2, axis);
        if !intersect_interval(min1, max1, min2, max2) {
            return false;
        }
    }
    true
}

fn naive_collision_poly(poly1: &Polygon, poly2: &Polygon, settings: &CollisionSettings) -> bool {
    for (a, b) in poly1.edges() {
        let edge1 = Segment::new(a, b);
        if poly2
            .edges()
            .any(|(c, d)| intersect_segment(&edge1, &Segment::new(c, d)))
        {
            return true;
        }
    }

    // No edges cross: either one polygon holds the other or they are apart.
    let origin1 = poly1.points()[0];
    let origin2 = poly2.points()[0];
    collision_point_poly_with(origin1, poly2, settings)
        || collision_point_poly_with(origin2, poly1, settings)
}
