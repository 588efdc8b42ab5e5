//! Inside/outside annotation of a Voronoi diagram.
//!
//! Every vertex, edge, and cell of the diagram is labeled relative to the
//! input polygons using only local incidence information. Most labels fall
//! out of a single scan over the edges: infinite edges are always in the
//! exterior, and any edge bordering a segment cell can classify its
//! endpoints by which side of that segment they lie on. Edges separating
//! two point cells are then resolved by propagation and a seed fill.
//!
//! Labels live in a [`Annotations`] value separate from the diagram, so
//! the diagram itself stays immutable.

use crate::diagram::{CellId, EdgeId, VertexId, VoronoiDiagram};
use crate::geometry::{IntPoint, Point2, Segment};

/// Classification of a Voronoi vertex relative to the input polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexCategory {
    /// Not yet classified.
    Unknown,
    /// Strictly inside the polygonal domain.
    Inside,
    /// Strictly outside the polygonal domain.
    Outside,
    /// Coincident with a polygon vertex.
    OnContour,
}

/// Classification of a half-edge by where its destination end lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCategory {
    /// Not yet classified.
    Unknown,
    /// The destination end lies inside the domain.
    PointsInside,
    /// The destination end lies outside the domain (or at infinity).
    PointsOutside,
    /// The destination end lies on the contour.
    PointsToContour,
}

/// Classification of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCategory {
    /// Not yet classified.
    Unknown,
    /// The cell lies entirely inside the domain.
    Inside,
    /// The cell lies entirely outside the domain.
    Outside,
    /// The cell straddles the contour. Every segment cell is a boundary
    /// cell, as is every point cell whose site is a polygon corner with
    /// material on both sides.
    Boundary,
}

/// Per-element categories for one diagram, indexed by element ordinals.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotations {
    vertices: Vec<VertexCategory>,
    edges: Vec<EdgeCategory>,
    cells: Vec<CellCategory>,
}

impl Annotations {
    fn new(vd: &VoronoiDiagram) -> Self {
        Self {
            vertices: vec![VertexCategory::Unknown; vd.num_vertices()],
            edges: vec![EdgeCategory::Unknown; vd.num_edges()],
            cells: vec![CellCategory::Unknown; vd.num_cells()],
        }
    }

    /// Category of a vertex.
    #[inline]
    pub fn vertex(&self, v: VertexId) -> VertexCategory {
        self.vertices[v.index()]
    }

    /// Category of a half-edge.
    #[inline]
    pub fn edge(&self, e: EdgeId) -> EdgeCategory {
        self.edges[e.index()]
    }

    /// Category of a cell.
    #[inline]
    pub fn cell(&self, c: CellId) -> CellCategory {
        self.cells[c.index()]
    }

    fn set_vertex(&mut self, v: VertexId, category: VertexCategory) {
        let old = self.vertices[v.index()];
        debug_assert!(old == VertexCategory::Unknown || old == category);
        debug_assert!(category != VertexCategory::Unknown);
        self.vertices[v.index()] = category;
    }

    fn set_edge(&mut self, e: EdgeId, category: EdgeCategory) {
        let old = self.edges[e.index()];
        debug_assert!(old == EdgeCategory::Unknown || old == category);
        debug_assert!(category != EdgeCategory::Unknown);
        self.edges[e.index()] = category;
    }

    /// Applies a cell category, promoting conflicting inside/outside
    /// labels to `Boundary`. `Boundary` is absorbing. Returns true when
    /// the stored category changed.
    fn promote_cell(&mut self, c: CellId, category: CellCategory) -> bool {
        debug_assert!(category != CellCategory::Unknown);
        let slot = &mut self.cells[c.index()];
        let new = match (*slot, category) {
            (CellCategory::Boundary, _) => return false,
            (CellCategory::Outside, CellCategory::Inside) => CellCategory::Boundary,
            (CellCategory::Inside, CellCategory::Outside) => CellCategory::Boundary,
            (_, new) => new,
        };
        if *slot != new {
            *slot = new;
            true
        } else {
            false
        }
    }

    /// Checks the structural invariants of a completed annotation,
    /// panicking on the first violation.
    ///
    /// For every cell: no element is `Unknown`; a boundary cell owns
    /// exactly two on-contour vertices and two contour-pointing edges
    /// plus at least one of each remaining kind; inside and outside
    /// cells are pure (no vertices or edges of the opposite side, at
    /// most one contour contact) and border only cells of their own
    /// side or boundary cells.
    pub fn verify(&self, vd: &VoronoiDiagram) {
        for v in vd.vertex_ids() {
            assert!(self.vertex(v) != VertexCategory::Unknown);
        }
        for e in vd.edge_ids() {
            assert!(self.edge(e) != EdgeCategory::Unknown);
        }

        for c in vd.cell_ids() {
            let category = self.cell(c);
            let mut on_contour = 0usize;
            let mut inside = 0usize;
            let mut outside = 0usize;
            let mut to_contour = 0usize;
            let mut points_inside = 0usize;
            let mut points_outside = 0usize;

            let first = vd.cell(c).incident_edge;
            let mut e = first;
            loop {
                match self.edge(e) {
                    EdgeCategory::PointsInside => points_inside += 1,
                    EdgeCategory::PointsOutside => points_outside += 1,
                    EdgeCategory::PointsToContour => to_contour += 1,
                    EdgeCategory::Unknown => unreachable!(),
                }
                match vd.vertex1(e).map_or(VertexCategory::Outside, |v| self.vertex(v)) {
                    VertexCategory::Inside => inside += 1,
                    VertexCategory::Outside => outside += 1,
                    VertexCategory::OnContour => on_contour += 1,
                    VertexCategory::Unknown => unreachable!(),
                }
                let neighbor = self.cell(vd.edge(e.twin()).cell);
                match category {
                    CellCategory::Boundary => assert!(
                        neighbor != CellCategory::Boundary
                            || vd.cell(vd.edge(e.twin()).cell).contains_segment()
                    ),
                    CellCategory::Inside => assert!(matches!(
                        neighbor,
                        CellCategory::Inside | CellCategory::Boundary
                    )),
                    CellCategory::Outside => assert!(matches!(
                        neighbor,
                        CellCategory::Outside | CellCategory::Boundary
                    )),
                    CellCategory::Unknown => panic!("unknown cell category"),
                }
                e = vd.next(e);
                if e == first {
                    break;
                }
            }

            match category {
                CellCategory::Boundary => {
                    assert_eq!(to_contour, 2);
                    assert_eq!(on_contour, 2);
                    assert!(inside > 0);
                    assert!(outside > 0);
                    assert!(points_inside > 0);
                    assert!(points_outside > 0);
                }
                CellCategory::Inside => {
                    assert!(on_contour <= 1);
                    assert!(to_contour <= 1);
                    assert!(inside > 0);
                    assert_eq!(outside, 0);
                    assert!(points_inside > 0);
                    assert_eq!(points_outside, 0);
                }
                CellCategory::Outside => {
                    assert!(on_contour <= 1);
                    assert!(to_contour <= 1);
                    assert_eq!(inside, 0);
                    assert!(outside > 0);
                    assert_eq!(points_inside, 0);
                    assert!(points_outside > 0);
                }
                CellCategory::Unknown => panic!("unknown cell category"),
            }
        }

        for c in vd.cell_ids() {
            if vd.cell(c).contains_segment() {
                assert_eq!(self.cell(c), CellCategory::Boundary);
            }
        }
    }
}

/// True when the float position rounds to the integer contour point.
#[inline]
fn rounds_to(p: Point2<f64>, ip: IntPoint) -> bool {
    p.x.round() as i64 == ip.x && p.y.round() as i64 == ip.y
}

/// Which side of the directed segment line a point falls on.
///
/// Positive is the outward side of a counter-clockwise contour.
#[inline]
fn outward_side(segment: Segment, p: Point2<f64>) -> f64 {
    (p - segment.a.to_f64()).cross(segment.direction())
}

/// Labels every vertex, edge, and cell of `vd` relative to the input
/// polygons described by `segments`.
///
/// Classification is purely local: infinite edges are exterior, edges
/// bordering a segment cell classify their endpoints by the signed side
/// against that segment, and the remaining point–point edges inherit
/// labels from their already-classified endpoints via a seed fill.
///
/// The returned annotation satisfies the invariants checked by
/// [`Annotations::verify`]; debug builds verify before returning.
/// Re-running on the same input yields identical labels.
pub fn annotate_inside_outside(vd: &VoronoiDiagram, segments: &[Segment]) -> Annotations {
    let mut ann = Annotations::new(vd);

    // Pass 1: infinite edges and edges bordering a segment cell.
    for e in vd.edge_ids() {
        if vd.vertex1(e).is_none() {
            annotate_infinite_edge(vd, &mut ann, e);
        } else if vd.vertex0(e).is_some() {
            annotate_finite_edge(vd, segments, &mut ann, e);
        }
        // Edges missing only their origin are covered by their twin.
    }

    // Pass 2: one round of expansion across still-unknown point–point
    // edges whose origin has been classified.
    let mut queue: Vec<CellId> = Vec::new();
    for e in vd.edge_ids() {
        debug_assert_eq!(
            ann.edge(e) == EdgeCategory::Unknown,
            ann.edge(e.twin()) == EdgeCategory::Unknown
        );
        if ann.edge(e) != EdgeCategory::Unknown {
            continue;
        }
        debug_assert!(vd.is_finite(e));
        let cell = vd.edge(e).cell;
        let cell2 = vd.edge(e.twin()).cell;
        debug_assert!(vd.cell(cell).contains_point() && vd.cell(cell2).contains_point());

        let v0 = vd.vertex0(e).expect("finite edge");
        let vc = ann.vertex(v0);
        if vc == VertexCategory::Unknown {
            continue;
        }
        debug_assert!(vc != VertexCategory::OnContour);
        ann.set_vertex(vd.vertex1(e).expect("finite edge"), vc);
        let ec = if vc == VertexCategory::Outside {
            EdgeCategory::PointsOutside
        } else {
            EdgeCategory::PointsInside
        };
        ann.set_edge(e, ec);
        ann.set_edge(e.twin(), ec);
        let cc = if vc == VertexCategory::Outside {
            CellCategory::Outside
        } else {
            CellCategory::Inside
        };
        if ann.promote_cell(cell, cc) {
            queue.push(cell);
        }
        if ann.promote_cell(cell2, cc) {
            queue.push(cell2);
        }
    }

    // Pass 3: seed fill over the remaining point–point edges.
    while let Some(cell) = queue.pop() {
        let cc = ann.cell(cell);
        debug_assert!(matches!(cc, CellCategory::Inside | CellCategory::Outside));
        let ec = if cc == CellCategory::Outside {
            EdgeCategory::PointsOutside
        } else {
            EdgeCategory::PointsInside
        };
        let first = vd.cell(cell).incident_edge;
        let mut e = first;
        loop {
            if ann.edge(e) == EdgeCategory::Unknown {
                debug_assert!(
                    vd.cell(vd.edge(e).cell).contains_point()
                        && vd.cell(vd.edge(e.twin()).cell).contains_point()
                );
                ann.set_edge(e, ec);
                ann.set_edge(e.twin(), ec);
                if let Some(v) = vd.vertex0(e) {
                    if ann.vertex(v) == VertexCategory::Unknown {
                        ann.set_vertex(
                            v,
                            if cc == CellCategory::Outside {
                                VertexCategory::Outside
                            } else {
                                VertexCategory::Inside
                            },
                        );
                    }
                }
                if let Some(v) = vd.vertex1(e) {
                    if ann.vertex(v) == VertexCategory::Unknown {
                        ann.set_vertex(
                            v,
                            if cc == CellCategory::Outside {
                                VertexCategory::Outside
                            } else {
                                VertexCategory::Inside
                            },
                        );
                    }
                }
                let cell2 = vd.edge(e.twin()).cell;
                if ann.cell(cell2) != cc && ann.promote_cell(cell2, cc) {
                    queue.push(cell2);
                }
            }
            e = vd.next(e);
            if e == first {
                break;
            }
        }
    }

    #[cfg(debug_assertions)]
    ann.verify(vd);

    ann
}

/// Labels an infinite edge (destination at infinity) and, for secondary
/// rays, the contour attachment of its origin.
fn annotate_infinite_edge(vd: &VoronoiDiagram, ann: &mut Annotations, e: EdgeId) {
    debug_assert!(vd.is_infinite(e));
    debug_assert!(vd.edge(e).linear);
    let v0 = vd.vertex0(e).expect("infinite edge keeps its origin");
    ann.set_edge(e, EdgeCategory::PointsOutside);
    if vd.edge(e).secondary {
        // A secondary ray starts exactly on the contour; nothing crosses
        // back over its twin.
        ann.set_edge(e.twin(), EdgeCategory::PointsToContour);
        ann.set_vertex(v0, VertexCategory::OnContour);
        let mut cell = vd.edge(e).cell;
        let mut cell2 = vd.edge(e.twin()).cell;
        if vd.cell(cell).contains_segment() {
            std::mem::swap(&mut cell, &mut cell2);
        }
        debug_assert!(vd.cell(cell).contains_point());
        debug_assert!(vd.cell(cell2).contains_segment());
        ann.promote_cell(cell, CellCategory::Outside);
        ann.promote_cell(cell2, CellCategory::Boundary);
    } else {
        // A point–point ray starts at a hull vertex of the site set,
        // strictly outside the domain.
        ann.set_edge(e.twin(), EdgeCategory::PointsOutside);
        ann.set_vertex(v0, VertexCategory::Outside);
    }
}

/// Labels a finite edge that borders at least one segment cell.
fn annotate_finite_edge(
    vd: &VoronoiDiagram,
    segments: &[Segment],
    ann: &mut Annotations,
    e: EdgeId,
) {
    let own = vd.edge(e).cell;
    let other = vd.edge(e.twin()).cell;
    // Work from the segment-cell side.
    let (cell, cell2) = if vd.cell(own).contains_segment() {
        (own, other)
    } else if vd.cell(other).contains_segment() {
        (other, own)
    } else {
        // Point–point edge, resolved by the expansion passes.
        return;
    };
    let line = vd.cell(cell).segment(segments);

    // Detect a contour attachment: an edge endpoint coinciding with a
    // polygon vertex.
    let mut pt_on_contour: Option<IntPoint> = None;
    if cell == own && vd.cell(other).contains_segment() {
        // Bisector of two segments; if they are consecutive on the
        // contour, one end of the edge is their shared vertex.
        let line2 = vd.cell(cell2).segment(segments);
        if line.a == line2.b {
            pt_on_contour = Some(line.a);
        } else if line.b == line2.a {
            pt_on_contour = Some(line.b);
        }
    } else if vd.edge(e).secondary {
        debug_assert!(vd.edge(e).linear);
        debug_assert!(vd.cell(own).contains_point() != vd.cell(other).contains_point());
        pt_on_contour = Some(vd.cell(cell2).contour_point(segments));
    }

    let v0 = vd.vertex0(e).expect("finite edge");
    let v1 = vd.vertex1(e).expect("finite edge");
    if let Some(pt) = pt_on_contour {
        let p0 = vd.vertex_point(v0);
        let p1 = vd.vertex_point(v1);
        let v1_on_contour = if rounds_to(p0, pt) {
            if rounds_to(p1, pt) {
                // Both ends round to the same contour point; such inputs
                // are outside the documented contract. Keep the nearer
                // end on the contour.
                debug_assert!(false, "edge endpoints coincide on a contour point");
                let ptf = pt.to_f64();
                (p0 - ptf).magnitude_squared() > (p1 - ptf).magnitude_squared()
            } else {
                false
            }
        } else {
            debug_assert!(rounds_to(p1, pt));
            true
        };
        if v1_on_contour {
            ann.set_edge(e, EdgeCategory::PointsToContour);
            ann.set_vertex(v1, VertexCategory::OnContour);
            return;
        }
    }

    // The destination is strictly off the contour; classify it by the
    // signed side against the segment site.
    let side = outward_side(line, vd.vertex_point(v1));
    debug_assert!(side != 0.0);
    let vc = if side > 0.0 {
        VertexCategory::Outside
    } else {
        VertexCategory::Inside
    };
    ann.set_vertex(v1, vc);
    ann.set_edge(
        e,
        if vc == VertexCategory::Outside {
            EdgeCategory::PointsOutside
        } else {
            EdgeCategory::PointsInside
        },
    );
    if pt_on_contour.is_some() {
        ann.set_vertex(v0, VertexCategory::OnContour);
        ann.set_edge(e.twin(), EdgeCategory::PointsToContour);
    }

    let cc = if vc == VertexCategory::Outside {
        CellCategory::Outside
    } else {
        CellCategory::Inside
    };
    ann.promote_cell(
        cell,
        if pt_on_contour.is_some() {
            CellCategory::Boundary
        } else {
            cc
        },
    );
    ann.promote_cell(
        cell2,
        if pt_on_contour.is_some() && vd.cell(cell2).contains_segment() {
            CellCategory::Boundary
        } else {
            cc
        },
    );
}
