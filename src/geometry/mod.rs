//! Geometric primitives: float points and vectors, integer contour
//! segments, and the perpendicular-foot / line-distance tests the
//! offsetting passes are built on.

mod contour;
mod point;

pub use contour::{foot_pt, ray_point_distance, IntPoint, Segment};
pub use point::{Point2, Vec2};
