//! Half-edge Voronoi diagram of input segments.
//!
//! The diagram is produced by an external Voronoi builder and consumed
//! read-only by the offsetting passes. It is stored as flat arenas
//! addressed by `u32` index newtypes; twin half-edges occupy consecutive
//! even/odd slots, so the twin link is index arithmetic rather than a
//! stored pointer.
//!
//! # Conventions
//!
//! * Half-edges wind counter-clockwise around their cell; the cell lies to
//!   the left of each directed half-edge.
//! * Unbounded cells close their edge loop through the infinite ends of
//!   two rays; a missing endpoint is represented by `None`.
//! * Each cell is the region closest to one site: either a whole input
//!   segment or one of its endpoints ([`SourceCategory`]).
//!
//! [`VoronoiDiagram::from_parts`] validates the topology once at
//! construction; everything downstream relies on it without re-checking.

use crate::error::DiagramError;
use crate::geometry::{IntPoint, Point2, Segment};

/// Index of a Voronoi vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

/// Index of a half-edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

/// Index of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

impl VertexId {
    /// The vertex ordinal as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    /// The half-edge ordinal as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposite half-edge of the same bisector.
    ///
    /// Twins are stored at consecutive even/odd indices.
    #[inline]
    pub fn twin(self) -> EdgeId {
        EdgeId(self.0 ^ 1)
    }
}

impl CellId {
    /// The cell ordinal as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A Voronoi vertex: a point equidistant from three or more sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    /// A half-edge originating at this vertex.
    pub incident_edge: EdgeId,
}

impl Vertex {
    /// The vertex position.
    #[inline]
    pub fn point(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

/// A directed half-edge of the diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Origin vertex; `None` for the unbounded end of an infinite edge.
    pub vertex0: Option<VertexId>,
    /// Next half-edge counter-clockwise around the same cell.
    pub next: EdgeId,
    /// Previous half-edge around the same cell.
    pub prev: EdgeId,
    /// The cell this half-edge bounds (lying to its left).
    pub cell: CellId,
    /// True for edges incident to a site endpoint where a point cell
    /// meets the cell of its containing segment. Secondary edges begin
    /// exactly on the input contour.
    pub secondary: bool,
    /// True for straight bisectors, false for parabolic arcs
    /// (point–segment bisectors away from the segment's endpoints).
    pub linear: bool,
}

/// Which feature of the source segment owns a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCategory {
    /// The cell's site is the start point of the source segment.
    SegmentStartPoint,
    /// The cell's site is the end point of the source segment.
    SegmentEndPoint,
    /// The cell's site is the whole segment.
    Segment,
}

/// A Voronoi cell: the region closest to one site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Index of the owning segment in the input segment list.
    pub source_index: u32,
    /// Which feature of that segment is the site.
    pub source_category: SourceCategory,
    /// A half-edge bounding this cell.
    pub incident_edge: EdgeId,
}

impl Cell {
    /// True when the site is a segment endpoint.
    #[inline]
    pub fn contains_point(&self) -> bool {
        self.source_category != SourceCategory::Segment
    }

    /// True when the site is a whole segment.
    #[inline]
    pub fn contains_segment(&self) -> bool {
        self.source_category == SourceCategory::Segment
    }

    /// The source segment of this cell.
    #[inline]
    pub fn segment(&self, segments: &[Segment]) -> Segment {
        segments[self.source_index as usize]
    }

    /// The contour point owning a point cell.
    #[inline]
    pub fn contour_point(&self, segments: &[Segment]) -> IntPoint {
        let segment = self.segment(segments);
        match self.source_category {
            SourceCategory::SegmentStartPoint => segment.a,
            SourceCategory::SegmentEndPoint => segment.b,
            SourceCategory::Segment => {
                debug_assert!(false, "contour_point on a segment cell");
                segment.a
            }
        }
    }
}

/// An immutable half-edge Voronoi diagram.
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    cells: Vec<Cell>,
}

impl VoronoiDiagram {
    /// Assembles a diagram from raw arenas, validating the topology.
    ///
    /// `segments` is the input segment list the cells' source indices
    /// refer to; it is only inspected, not stored.
    ///
    /// # Errors
    ///
    /// Returns a [`DiagramError`] describing the first inconsistency
    /// found: dangling indices, broken `next`/`prev` chains, chains that
    /// leave their cell, twin flag disagreement, edge pairs with no
    /// endpoint at all, or incident-edge links that do not point back.
    pub fn from_parts(
        vertices: Vec<Vertex>,
        edges: Vec<Edge>,
        cells: Vec<Cell>,
        segments: &[Segment],
    ) -> Result<Self, DiagramError> {
        if edges.len() % 2 != 0 {
            return Err(DiagramError::OddEdgeCount(edges.len()));
        }

        let check_edge = |id: EdgeId| -> Result<(), DiagramError> {
            if id.index() >= edges.len() {
                return Err(DiagramError::IndexOutOfRange {
                    kind: "edge",
                    index: id.index(),
                    len: edges.len(),
                });
            }
            Ok(())
        };

        for (i, edge) in edges.iter().enumerate() {
            check_edge(edge.next)?;
            check_edge(edge.prev)?;
            if let Some(v) = edge.vertex0 {
                if v.index() >= vertices.len() {
                    return Err(DiagramError::IndexOutOfRange {
                        kind: "vertex",
                        index: v.index(),
                        len: vertices.len(),
                    });
                }
            }
            if edge.cell.index() >= cells.len() {
                return Err(DiagramError::IndexOutOfRange {
                    kind: "cell",
                    index: edge.cell.index(),
                    len: cells.len(),
                });
            }
            if edges[edge.next.index()].prev.index() != i
                || edges[edge.prev.index()].next.index() != i
            {
                return Err(DiagramError::BrokenChain(i));
            }
            if edges[edge.next.index()].cell != edge.cell {
                return Err(DiagramError::ChainLeavesCell(i));
            }
        }

        for pair in 0..edges.len() / 2 {
            let a = &edges[2 * pair];
            let b = &edges[2 * pair + 1];
            if a.secondary != b.secondary || a.linear != b.linear {
                return Err(DiagramError::TwinFlagMismatch(pair));
            }
            if a.vertex0.is_none() && b.vertex0.is_none() {
                return Err(DiagramError::FullyUnboundedEdge(pair));
            }
        }

        for (i, cell) in cells.iter().enumerate() {
            if cell.source_index as usize >= segments.len() {
                return Err(DiagramError::SourceOutOfRange {
                    cell: i,
                    index: cell.source_index as usize,
                    len: segments.len(),
                });
            }
            check_edge(cell.incident_edge)?;
            if edges[cell.incident_edge.index()].cell.index() != i {
                return Err(DiagramError::CellEdgeMismatch(i));
            }
        }

        for (i, vertex) in vertices.iter().enumerate() {
            check_edge(vertex.incident_edge)?;
            match edges[vertex.incident_edge.index()].vertex0 {
                Some(v) if v.index() == i => {}
                _ => return Err(DiagramError::IncidentEdgeMismatch(i)),
            }
        }

        Ok(Self {
            vertices,
            edges,
            cells,
        })
    }

    /// Number of Voronoi vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of half-edges (always even).
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// The vertex arena.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The half-edge arena.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The cell arena.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Looks up a vertex.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Looks up a half-edge.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Looks up a cell.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Position of a vertex.
    #[inline]
    pub fn vertex_point(&self, id: VertexId) -> Point2<f64> {
        self.vertex(id).point()
    }

    /// Origin vertex of a half-edge, if any.
    #[inline]
    pub fn vertex0(&self, e: EdgeId) -> Option<VertexId> {
        self.edge(e).vertex0
    }

    /// Destination vertex of a half-edge (the twin's origin), if any.
    #[inline]
    pub fn vertex1(&self, e: EdgeId) -> Option<VertexId> {
        self.edge(e.twin()).vertex0
    }

    /// Next half-edge counter-clockwise around the same cell.
    #[inline]
    pub fn next(&self, e: EdgeId) -> EdgeId {
        self.edge(e).next
    }

    /// Previous half-edge around the same cell.
    #[inline]
    pub fn prev(&self, e: EdgeId) -> EdgeId {
        self.edge(e).prev
    }

    /// Next half-edge counter-clockwise around the origin vertex of `e`.
    #[inline]
    pub fn rot_next(&self, e: EdgeId) -> EdgeId {
        self.prev(e).twin()
    }

    /// Previous half-edge (clockwise) around the origin vertex of `e`.
    #[inline]
    pub fn rot_prev(&self, e: EdgeId) -> EdgeId {
        self.next(e.twin())
    }

    /// True when both endpoints exist.
    #[inline]
    pub fn is_finite(&self, e: EdgeId) -> bool {
        self.vertex0(e).is_some() && self.vertex1(e).is_some()
    }

    /// True when either endpoint is missing.
    #[inline]
    pub fn is_infinite(&self, e: EdgeId) -> bool {
        !self.is_finite(e)
    }

    /// Iterates over all half-edge ids.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len() as u32).map(EdgeId)
    }

    /// Iterates over all vertex ids.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len() as u32).map(VertexId)
    }

    /// Iterates over all cell ids.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len() as u32).map(CellId)
    }
}
