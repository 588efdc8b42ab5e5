//! Integer contour types and line primitives.
//!
//! Input polygons are described by directed segments with integer endpoint
//! coordinates, while all derived geometry (Voronoi vertices, offset
//! points) is computed in `f64`. Exact integer equality is what makes
//! endpoint-sharing detection between consecutive segments reliable.

use super::{Point2, Vec2};

/// A contour point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    /// Creates a new integer point.
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Converts to a floating-point position.
    #[inline]
    pub fn to_f64(self) -> Point2<f64> {
        Point2::new(self.x as f64, self.y as f64)
    }
}

/// One directed edge of an input polygon, from `a` to `b`.
///
/// Outer boundaries are expected counter-clockwise and holes clockwise;
/// the engine relies on this only to sign inside/outside consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub a: IntPoint,
    pub b: IntPoint,
}

impl Segment {
    /// Creates a segment from two integer points.
    #[inline]
    pub fn new(a: IntPoint, b: IntPoint) -> Self {
        Self { a, b }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(ax: i64, ay: i64, bx: i64, by: i64) -> Self {
        Self {
            a: IntPoint::new(ax, ay),
            b: IntPoint::new(bx, by),
        }
    }

    /// Direction vector from `a` to `b`, in floating point.
    #[inline]
    pub fn direction(self) -> Vec2<f64> {
        self.b.to_f64() - self.a.to_f64()
    }

    /// The non-normalized normal pointing away from the material side.
    ///
    /// For a counter-clockwise contour the interior lies to the left of
    /// `a → b`, so the outward side is the right-hand normal.
    #[inline]
    pub fn outward_normal(self) -> Vec2<f64> {
        -self.direction().perpendicular()
    }
}

/// Foot of the perpendicular from `p` onto the infinite line through
/// `segment`.
///
/// The projection is not clamped to the segment's extent.
pub fn foot_pt(segment: Segment, p: Point2<f64>) -> Point2<f64> {
    let origin = segment.a.to_f64();
    let dir = segment.direction();
    let len2 = dir.magnitude_squared();
    debug_assert!(len2 > 0.0);
    let t = (p - origin).dot(dir) / len2;
    origin + dir * t
}

/// Distance from `p` to the infinite line through `origin` with direction
/// `dir`.
pub fn ray_point_distance(origin: Point2<f64>, dir: Vec2<f64>, p: Point2<f64>) -> f64 {
    let len = dir.magnitude();
    debug_assert!(len > 0.0);
    dir.cross(p - origin).abs() / len
}
