//! Signed distance from Voronoi vertices to the input contour.

use crate::annotate::{Annotations, VertexCategory};
use crate::diagram::VoronoiDiagram;
use crate::geometry::{ray_point_distance, Segment};

/// Computes one signed distance per Voronoi vertex: zero on the contour,
/// negative inside the domain, positive outside.
///
/// Every Voronoi vertex is equidistant from all its incident sites, so
/// measuring against any one of them yields the distance to the nearest
/// contour feature. Point sites are preferred over segment sites, which
/// sidesteps foot-point sign subtleties at segment endpoints; if every
/// incident cell is a segment cell, the distance to that segment's line
/// is used instead.
///
/// `ann` must be the annotation of `vd`.
pub fn signed_vertex_distances(
    vd: &VoronoiDiagram,
    segments: &[Segment],
    ann: &Annotations,
) -> Vec<f64> {
    let mut out = vec![0.0; vd.num_vertices()];
    for v in vd.vertex_ids() {
        let category = ann.vertex(v);
        debug_assert!(category != VertexCategory::Unknown);
        if category == VertexCategory::OnContour {
            continue;
        }
        let p = vd.vertex_point(v);

        // Rotate around the vertex looking for a point cell.
        let first = vd.vertex(v).incident_edge;
        let mut e = first;
        let mut point_cell = None;
        loop {
            let cell = vd.cell(vd.edge(e).cell);
            if cell.contains_point() {
                point_cell = Some(cell);
                break;
            }
            e = vd.rot_next(e);
            if e == first {
                break;
            }
        }

        let mut dist = match point_cell {
            Some(cell) => cell.contour_point(segments).to_f64().distance(p),
            None => {
                let line = vd.cell(vd.edge(e).cell).segment(segments);
                ray_point_distance(line.a.to_f64(), line.direction(), p)
            }
        };
        if category == VertexCategory::Inside {
            dist = -dist;
        }
        out[v.index()] = dist;
    }
    out
}
