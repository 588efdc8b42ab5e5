//! voronoi-offset - Polygon offsetting over segment Voronoi diagrams.
//!
//! Given the Voronoi diagram of a polygonal domain's edges (produced by
//! an external builder) and a signed distance, this crate traces the
//! closed polygons forming the inward or outward offset of the domain's
//! boundary. Unlike edge-by-edge offsetting, the Voronoi diagram already
//! encodes where offset features collide, so the result needs no
//! self-intersection cleanup.
//!
//! # Pipeline
//!
//! Three passes over the diagram, each building on the previous:
//!
//! 1. [`annotate_inside_outside`] labels every vertex, edge, and cell as
//!    inside, outside, or on the contour, using only local incidence.
//! 2. [`signed_vertex_distances`] measures each Voronoi vertex against
//!    its nearest contour feature (negative inside).
//! 3. [`offset`] / [`offset_with_distances`] intersect every Voronoi
//!    edge with the offset circle of its sites and walk the crossings
//!    into closed [`Polygon`]s, discretizing arcs around contour corners
//!    to a bounded chord error.
//!
//! Input polygons use integer coordinates (outer boundaries
//! counter-clockwise, holes clockwise); all derived geometry is `f64`.
//! Result loops follow the orientation of the contour they offset.

pub mod annotate;
pub mod diagram;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod polygon;
pub mod trace;

#[cfg(test)]
pub(crate) mod fixtures;

pub use annotate::{
    annotate_inside_outside, Annotations, CellCategory, EdgeCategory, VertexCategory,
};
pub use diagram::{Cell, CellId, Edge, EdgeId, SourceCategory, Vertex, VertexId, VoronoiDiagram};
pub use distance::signed_vertex_distances;
pub use error::DiagramError;
pub use geometry::{IntPoint, Point2, Segment, Vec2};
pub use intersect::{edge_offset_contour_intersections, EdgeOffset};
pub use polygon::Polygon;
pub use trace::{offset, offset_with_distances};
