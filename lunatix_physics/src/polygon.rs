use lunatix_math::{Vector2D, is_zero};
use serde::{Deserialize, Serialize};

use crate::error::{PolygonError, Result};
use crate::hitbox::{FloatPosition, FloatingBox};

/// Minimum number of vertices for a polygon to have an area.
pub const TRIANGLE_SIDES: usize = 3;

/// A simple polygon, vertices kept in insertion order.
///
/// The convexity flag is recomputed whenever vertices are added, so
/// [`Polygon::is_convex`] is always O(1). It is `false` until the polygon has
/// at least [`TRIANGLE_SIDES`] vertices.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(from = "Vec<FloatPosition>", into = "Vec<FloatPosition>")]
pub struct Polygon {
    points: Vec<FloatPosition>,
    convex: bool,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, p: FloatPosition) {
        self.points.push(p);
        self.update_convexity();
    }

    /// Appends every point, then checks convexity once.
    pub fn add_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = FloatPosition>,
    {
        self.points.extend(points);
        self.update_convexity();
    }

    /// Number of vertices, which is also the number of edges.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn points(&self) -> &[FloatPosition] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Result<FloatPosition> {
        self.points
            .get(index)
            .copied()
            .ok_or(PolygonError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            })
    }

    /// Edges `(points[i], points[i + 1])`, the last one closing the polygon.
    pub fn edges(&self) -> impl Iterator<Item = (FloatPosition, FloatPosition)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    #[inline]
    pub fn is_convex(&self) -> bool {
        self.convex
    }

    /// Smallest axis-aligned box holding every vertex.
    ///
    /// Width and height are rounded up so the box never ends inside the
    /// polygon.
    pub fn enclosing_box(&self) -> Result<FloatingBox> {
        let (min, max) = self.bounds("compute the enclosing box")?;
        Ok(FloatingBox::new(
            min,
            (max.x - min.x).ceil() as i32,
            (max.y - min.y).ceil() as i32,
        ))
    }

    // Exact lower and upper corners of the vertices.
    fn bounds(&self, operation: &'static str) -> Result<(FloatPosition, FloatPosition)> {
        self.ensure_polygon(operation)?;

        let first = self.points[0];
        let (mut min, mut max) = (first, first);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Ok((min, max))
    }

    /// Translates every vertex by `v`.
    pub fn move_by(&mut self, v: Vector2D) {
        for p in &mut self.points {
            *p = p.translated(v);
        }
    }

    /// Moves the polygon so that its centroid lands on `p`.
    ///
    /// When the signed area is not positive (clockwise winding or
    /// self-intersection) the centroid formula degenerates and the middle of
    /// the vertices' bounds is used instead, which is less accurate.
    pub fn move_to(&mut self, p: FloatPosition) -> Result<()> {
        let reference = match self.centroid() {
            Some(c) => c,
            None => {
                let (min, max) = self.bounds("move to a position")?;
                let center = FloatPosition::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
                log::debug!(
                    "polygon with {} vertices has no usable centroid, moving by its box center {center}",
                    self.points.len()
                );
                center
            }
        };
        self.move_by(reference.vector_to(p));
        Ok(())
    }

    /// Signed area from the shoelace formula. Positive for counter-clockwise
    /// winding in a y-up frame.
    pub fn signed_area(&self) -> f32 {
        self.edges().map(|(a, b)| cross(a, b)).sum::<f32>() / 2.0
    }

    /// Area-weighted center, or `None` when `6 * area <= 0`.
    pub fn centroid(&self) -> Option<FloatPosition> {
        let area6 = 6.0 * self.signed_area();
        if area6 <= 0.0 {
            return None;
        }

        let (sum_x, sum_y) = self.edges().fold((0.0_f32, 0.0_f32), |(sx, sy), (a, b)| {
            let c = cross(a, b);
            (sx + (a.x + b.x) * c, sy + (a.y + b.y) * c)
        });
        Some(FloatPosition::new(sum_x / area6, sum_y / area6))
    }

    pub(crate) fn ensure_polygon(&self, operation: &'static str) -> Result<()> {
        if self.points.len() < TRIANGLE_SIDES {
            return Err(PolygonError::NotEnoughVertices {
                operation,
                count: self.points.len(),
            });
        }
        Ok(())
    }

    fn update_convexity(&mut self) {
        if self.points.len() >= TRIANGLE_SIDES {
            self.convex = self.compute_convexity();
        }
    }

    // The turn at every vertex must have the same, non-zero orientation.
    fn compute_convexity(&self) -> bool {
        let n = self.points.len();
        let mut sign = 0.0_f32;

        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let cur = self.points[i];
            let next = self.points[(i + 1) % n];

            let turn = cur.vector_to(prev).cross(next.vector_to(cur));
            if is_zero(turn) {
                return false;
            }
            if sign == 0.0 {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }
        true
    }
}

#[inline]
fn cross(p: FloatPosition, q: FloatPosition) -> f32 {
    p.x * q.y - p.y * q.x
}

impl From<Vec<FloatPosition>> for Polygon {
    fn from(points: Vec<FloatPosition>) -> Self {
        let mut poly = Self { points, convex: false };
        poly.update_convexity();
        poly
    }
}

impl From<Polygon> for Vec<FloatPosition> {
    fn from(poly: Polygon) -> Self {
        poly.points
    }
}

impl FromIterator<FloatPosition> for Polygon {
    fn from_iter<I: IntoIterator<Item = FloatPosition>>(iter: I) -> Self {
        let mut poly = Polygon::new();
        poly.add_points(iter);
        poly
    }
}

impl Extend<FloatPosition> for Polygon {
    fn extend<I: IntoIterator<Item = FloatPosition>>(&mut self, iter: I) {
        self.add_points(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(x: f32, y: f32) -> FloatPosition {
        FloatPosition::new(x, y)
    }

    fn square(side: f32) -> Polygon {
        [fp(0.0, 0.0), fp(side, 0.0), fp(side, side), fp(0.0, side)]
            .into_iter()
            .collect()
    }

    // -------------------- Convexity --------------------

    #[test]
    fn convexity_tracks_insertions() {
        let mut poly = Polygon::new();
        poly.add_point(fp(0.0, 0.0));
        poly.add_point(fp(4.0, 0.0));
        assert!(!poly.is_convex(), "two points are not a polygon");

        poly.add_point(fp(4.0, 4.0));
        assert!(poly.is_convex());
        poly.add_point(fp(0.0, 4.0));
        assert!(poly.is_convex());

        // Dent the square: (2, 1) points inwards
        poly.add_point(fp(2.0, 1.0));
        assert!(!poly.is_convex());
    }

    #[test]
    fn clockwise_square_is_convex() {
        let poly: Polygon = [fp(0.0, 0.0), fp(0.0, 4.0), fp(4.0, 4.0), fp(4.0, 0.0)]
            .into_iter()
            .collect();
        assert!(poly.is_convex());
    }

    #[test]
    fn collinear_vertex_is_not_convex() {
        let poly: Polygon = [fp(0.0, 0.0), fp(2.0, 0.0), fp(4.0, 0.0), fp(4.0, 4.0)]
            .into_iter()
            .collect();
        assert!(!poly.is_convex());
    }

    // -------------------- Enclosing box --------------------

    #[test]
    fn enclosing_box_requires_three_vertices() {
        let mut poly = Polygon::new();
        for p in [fp(0.0, 0.0), fp(1.0, 1.0)] {
            assert!(matches!(
                poly.enclosing_box(),
                Err(PolygonError::NotEnoughVertices { .. })
            ));
            poly.add_point(p);
        }
        assert_eq!(
            poly.enclosing_box(),
            Err(PolygonError::NotEnoughVertices {
                operation: "compute the enclosing box",
                count: 2,
            })
        );
    }

    #[test]
    fn enclosing_box_of_square() {
        let poly = square(10.0);
        assert_eq!(poly.enclosing_box(), Ok(FloatingBox::new(fp(0.0, 0.0), 10, 10)));
    }

    #[test]
    fn enclosing_box_of_irregular_polygon() {
        let poly: Polygon = [fp(3.0, -2.0), fp(8.5, 1.0), fp(5.0, 6.0), fp(-1.0, 2.0)]
            .into_iter()
            .collect();
        let b = poly.enclosing_box().unwrap();
        assert_eq!(b.p, fp(-1.0, -2.0));
        assert_eq!((b.w, b.h), (10, 8));
    }

    // -------------------- Points --------------------

    #[test]
    fn point_access_is_bounds_checked() {
        let poly = square(4.0);
        assert_eq!(poly.num_vertices(), 4);
        assert_eq!(poly.point(2), Ok(fp(4.0, 4.0)));
        assert_eq!(
            poly.point(4),
            Err(PolygonError::IndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn edges_close_the_polygon() {
        let poly = square(1.0);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (fp(0.0, 1.0), fp(0.0, 0.0)));
    }

    // -------------------- Movement --------------------

    #[test]
    fn move_by_translates_every_vertex() {
        let mut poly = square(2.0);
        poly.move_by(Vector2D::new(5.0, -1.0));
        assert_eq!(
            poly.points(),
            &[fp(5.0, -1.0), fp(7.0, -1.0), fp(7.0, 1.0), fp(5.0, 1.0)]
        );
        assert!(poly.is_convex());
    }

    #[test]
    fn move_to_recenters_on_centroid() {
        let mut poly = square(4.0);
        assert!(poly.is_convex());
        assert_eq!(poly.enclosing_box(), Ok(FloatingBox::new(fp(0.0, 0.0), 4, 4)));
        assert_eq!(poly.centroid(), Some(fp(2.0, 2.0)));

        poly.move_to(fp(10.0, 10.0)).unwrap();
        assert_eq!(poly.centroid(), Some(fp(10.0, 10.0)));
        assert_eq!(poly.point(0), Ok(fp(8.0, 8.0)));
    }

    #[test]
    fn move_to_falls_back_to_box_center_for_clockwise_winding() {
        let mut poly: Polygon = [fp(0.0, 0.0), fp(0.0, 6.0), fp(6.0, 6.0), fp(6.0, 0.0)]
            .into_iter()
            .collect();
        assert!(poly.signed_area() < 0.0);
        assert_eq!(poly.centroid(), None);

        poly.move_to(fp(0.0, 0.0)).unwrap();
        assert_eq!(poly.enclosing_box().unwrap().center(), fp(0.0, 0.0));
    }

    #[test]
    fn move_to_fallback_uses_exact_bounds() {
        // Clockwise, with fractional extents: the rounded box would be 4 x 3
        let mut poly: Polygon = [fp(0.0, 0.0), fp(0.0, 2.5), fp(3.5, 2.5), fp(3.5, 0.0)]
            .into_iter()
            .collect();
        assert_eq!(poly.centroid(), None);

        poly.move_to(fp(0.0, 0.0)).unwrap();
        assert_eq!(poly.point(0), Ok(fp(-1.75, -1.25)));
        assert_eq!(poly.point(2), Ok(fp(1.75, 1.25)));
    }

    #[test]
    fn move_to_rejects_degenerate_polygons() {
        let mut poly: Polygon = [fp(0.0, 0.0), fp(3.0, 3.0)].into_iter().collect();
        assert!(poly.move_to(fp(1.0, 1.0)).is_err());
        assert_eq!(poly.point(1), Ok(fp(3.0, 3.0)));
    }

    // -------------------- Serde --------------------

    #[test]
    fn deserialized_polygon_recomputes_convexity() {
        let json = r#"[{"x":0.0,"y":0.0},{"x":4.0,"y":0.0},{"x":4.0,"y":4.0},{"x":0.0,"y":4.0}]"#;
        let poly: Polygon = serde_json::from_str(json).unwrap();
        assert!(poly.is_convex());
        assert_eq!(poly.num_vertices(), 4);

        let back = serde_json::to_string(&poly).unwrap();
        assert_eq!(back, json);
    }
}
