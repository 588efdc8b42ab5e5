//! Tracing offset polygons out of the intersected diagram.
//!
//! Every half-edge crossing found by the intersector lies on exactly one
//! closed offset loop. Starting from any unconsumed crossing, the next
//! loop point is found by walking the current cell's edge ring until an
//! edge whose twin carries a crossing; the twin is where the loop leaves
//! into the neighboring cell. Between two consecutive crossings of a
//! point cell the loop follows a circular arc around the cell's site,
//! discretized to the requested chord error.

use crate::annotate::annotate_inside_outside;
use crate::diagram::{EdgeId, VoronoiDiagram};
use crate::distance::signed_vertex_distances;
use crate::geometry::{Point2, Segment, Vec2};
use crate::intersect::{edge_offset_contour_intersections, EdgeOffset};
use crate::polygon::Polygon;

/// Traces the offset polygons for a precomputed distance table.
///
/// `vertex_distances` must be the signed distance table of `vd` (see
/// [`signed_vertex_distances`]). `offset_distance` is the signed offset
/// (positive outward); `discretization_error` is the largest allowed
/// sagitta between an emitted chord and the true arc, and must be
/// positive.
///
/// Result loops follow the orientation of their source contour:
/// offsetting a counter-clockwise boundary yields counter-clockwise
/// loops, offsetting a clockwise hole yields clockwise loops.
pub fn offset_with_distances(
    vd: &VoronoiDiagram,
    segments: &[Segment],
    vertex_distances: &[f64],
    offset_distance: f64,
    discretization_error: f64,
) -> Vec<Polygon<f64>> {
    debug_assert!(offset_distance != 0.0);
    debug_assert!(discretization_error > 0.0);
    if offset_distance == 0.0 || vd.num_edges() == 0 {
        return Vec::new();
    }

    let mut crossings =
        edge_offset_contour_intersections(vd, segments, vertex_distances, offset_distance);

    let radius = offset_distance.abs();
    // Largest arc step whose chord stays within the sagitta bound.
    let angle_step = 2.0 * ((radius - discretization_error) / radius).clamp(-1.0, 1.0).acos();
    let cos_threshold = angle_step.cos();

    let mut out = Vec::new();
    for seed in vd.edge_ids() {
        let Some(seed_pt) = crossings[seed.index()].hit() else {
            continue;
        };
        let mut points: Vec<Point2<f64>> = Vec::new();
        let mut edge = seed;
        let mut last_pt = seed_pt;
        let mut closed = false;
        loop {
            let Some(next_edge) = next_offset_edge(vd, &crossings, edge) else {
                // The loop lost its continuation: the diagram and the
                // crossing table disagree. Abandon this loop.
                debug_assert!(false, "offset loop has no continuation");
                break;
            };
            let p2 = crossings[next_edge.index()]
                .hit()
                .expect("next_offset_edge returns a crossing");
            // Consume the crossing so it cannot seed or be walked again.
            crossings[next_edge.index()] = EdgeOffset::NoHit;

            let cell = vd.cell(vd.edge(edge).cell);
            if cell.contains_point() {
                let center = cell.contour_point(segments).to_f64();
                discretize_arc(
                    &mut points,
                    center,
                    last_pt,
                    p2,
                    angle_step,
                    cos_threshold,
                );
            }
            if points.last() != Some(&p2) {
                points.push(p2);
            }
            edge = next_edge;
            last_pt = p2;
            if edge == seed {
                closed = true;
                break;
            }
        }
        if closed && points.len() >= 3 {
            let mut polygon = Polygon::new(points);
            if offset_distance < 0.0 {
                // The walk emits inside-region loops clockwise; flip so
                // orientation follows the source contour.
                polygon.reverse();
            }
            out.push(polygon);
        }
    }
    out
}

/// Runs the full pipeline: annotation, vertex distances, then tracing.
pub fn offset(
    vd: &VoronoiDiagram,
    segments: &[Segment],
    offset_distance: f64,
    discretization_error: f64,
) -> Vec<Polygon<f64>> {
    let ann = annotate_inside_outside(vd, segments);
    let distances = signed_vertex_distances(vd, segments, &ann);
    offset_with_distances(vd, segments, &distances, offset_distance, discretization_error)
}

/// The next crossing-carrying edge of the loop through `edge`.
///
/// Scans the cell ring after `edge`; the first edge whose twin carries a
/// crossing is where the offset curve leaves the cell, and the twin is
/// the edge it continues on.
fn next_offset_edge(
    vd: &VoronoiDiagram,
    crossings: &[EdgeOffset],
    edge: EdgeId,
) -> Option<EdgeId> {
    let mut scan = vd.next(edge);
    while scan != edge {
        if crossings[scan.twin().index()].is_hit() {
            return Some(scan.twin());
        }
        scan = vd.next(scan);
    }
    None
}

/// Emits intermediate arc points between `from` and `to` around `center`.
///
/// Points are appended only when the spanned angle exceeds the step that
/// keeps chords within the sagitta bound; `from` and `to` themselves are
/// not emitted. Rotation direction follows the cross product of the two
/// spokes, preserving loop orientation.
fn discretize_arc(
    points: &mut Vec<Point2<f64>>,
    center: Point2<f64>,
    from: Point2<f64>,
    to: Point2<f64>,
    angle_step: f64,
    cos_threshold: f64,
) {
    let v1 = from - center;
    let v2 = to - center;
    let ccw = v1.cross(v2) > 0.0;
    let cos_a = v1.dot(v2);
    let norm = v1.magnitude() * v2.magnitude();
    debug_assert!(norm > 0.0);
    if cos_a >= cos_threshold * norm {
        return;
    }
    let angle = (cos_a / norm).clamp(-1.0, 1.0).acos();
    let steps = (angle / angle_step).ceil() as usize;
    let astep = if ccw {
        angle / steps as f64
    } else {
        -angle / steps as f64
    };
    for i in 1..steps {
        let a = astep * i as f64;
        let (sin, cos) = a.sin_cos();
        let spoke = Vec2::new(cos * v1.x - sin * v1.y, sin * v1.x + cos * v1.y);
        points.push(center + spoke);
    }
}
