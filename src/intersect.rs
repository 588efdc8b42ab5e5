//! Offset-circle intersections along Voronoi edges.
//!
//! For a signed offset distance the offset curve crosses a Voronoi edge
//! wherever the distance-to-site along that edge passes through |δ|. Each
//! half-edge carries at most one such crossing: the one nearer its
//! destination. Crossings are found per edge pair; the sibling half-edge
//! of a resolved pair is marked so it is not recomputed.
//!
//! Straight cases (segment–segment bisectors, secondary edges) vary
//! linearly in distance and reduce to interpolation. Edges bordering a
//! point cell do not: the distance has an interior minimum, so the circle
//! may cross twice, once, or not at all, and the crossings are computed
//! as points equidistant from both sites.

use crate::diagram::{VertexId, VoronoiDiagram};
use crate::geometry::{foot_pt, IntPoint, Point2, Segment, Vec2};

/// Offset-circle crossing state of one half-edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeOffset {
    /// Not examined yet.
    Unvisited,
    /// Examined; no crossing tracked on this half-edge.
    NoHit,
    /// The offset circle crosses this half-edge at the carried point
    /// (the crossing nearer the half-edge's destination).
    Hit(Point2<f64>),
}

impl EdgeOffset {
    /// The crossing point, if any.
    #[inline]
    pub fn hit(self) -> Option<Point2<f64>> {
        match self {
            EdgeOffset::Hit(p) => Some(p),
            _ => None,
        }
    }

    /// True when a crossing is tracked.
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, EdgeOffset::Hit(_))
    }
}

/// Up to two points returned by the equal-distance constructions.
#[derive(Debug, Clone, Copy)]
struct Candidates {
    count: usize,
    pts: [Point2<f64>; 2],
}

impl Candidates {
    const NONE: Candidates = Candidates {
        count: 0,
        pts: [Point2 { x: 0.0, y: 0.0 }; 2],
    };
}

/// Smallest parameter `t` in `[0, 1]` with `|pt + t·v − center| = r`.
///
/// Used for unbounded edges, where the caller guarantees the crossing
/// falls within one step of `v`. A non-positive discriminant degenerates
/// to the closest-approach parameter, clamped.
fn first_circle_segment_intersection_parameter(
    center: Point2<f64>,
    r: f64,
    pt: Point2<f64>,
    v: Vec2<f64>,
) -> f64 {
    let d = pt - center;
    debug_assert!(r < pt.distance(center).max((pt + v).distance(center)) + 1e-9);
    let a = v.magnitude_squared();
    let b = 2.0 * d.dot(v);
    let c = d.magnitude_squared() - r * r;
    let u = b * b - 4.0 * a * c;
    if u <= 0.0 {
        (-b / (2.0 * a)).clamp(0.0, 1.0)
    } else {
        let u = u.sqrt();
        let t0 = (-b - u) / (2.0 * a);
        let t1 = (-b + u) / (2.0 * a);
        if t1 < 0.0 {
            0.0
        } else if t0 > 1.0 {
            1.0
        } else if t0 > 0.0 {
            t0
        } else {
            t1
        }
    }
}

/// Points at distance `d` from both `pt1` and `pt2`.
///
/// Intersection of two equal-radius circles, solved along their radical
/// line. Axes are swapped when the center offset is mostly vertical to
/// keep the division well conditioned.
fn point_point_equal_distance_points(pt1: IntPoint, pt2: IntPoint, d: f64) -> Candidates {
    let mut cx = (pt1.x - pt2.x) as f64;
    let mut cy = (pt1.y - pt2.y) as f64;
    let cl = cx * cx + cy * cy;
    let discr = 4.0 * d * d - cl;
    if discr < 0.0 {
        // The two circles do not reach each other.
        return Candidates::NONE;
    }
    let xy_swapped = cx.abs() < cy.abs();
    if xy_swapped {
        std::mem::swap(&mut cx, &mut cy);
    }
    let (count, u) = if discr == 0.0 {
        (1, 0.0)
    } else {
        (2, 0.5 * cx * (cl * discr).sqrt() / cl)
    };
    let v = 0.5 * cy - u;
    let w = 2.0 * cy;
    let e = 0.5 / cx;
    let f = 0.5 * cy + u;
    let mut pts = [
        Point2::new(-e * (v * w - cl), v),
        Point2::new(-e * (w * f - cl), f),
    ];
    if xy_swapped {
        for p in &mut pts {
            std::mem::swap(&mut p.x, &mut p.y);
        }
    }
    let shift = pt2.to_f64().to_vec();
    Candidates {
        count,
        pts: [pts[0] + shift, pts[1] + shift],
    }
}

/// Points at distance `d` from the line through `line` and from `ipt`,
/// on the half-plane of the line containing `ipt`.
///
/// The line is oriented so its normal points toward `ipt`, then the
/// resulting quadratic is solved for the two feet along the line. Axes
/// are swapped as above when the line is mostly axis-aligned the wrong
/// way.
fn line_point_equal_distance_points(line: Segment, ipt: IntPoint, d: f64) -> Candidates {
    debug_assert!(line.a != ipt && line.b != ipt);
    let pt = ipt.to_f64();
    let mut lv = line.direction();
    let l2 = lv.magnitude_squared();
    let lpv = line.a.to_f64() - pt;
    let mut c = lpv.cross(lv);
    if c < 0.0 {
        lv = -lv;
        c = -c;
    }

    // Implicit line equation a·x + b·y + c = 0 in coordinates relative
    // to ipt, with (a, b) pointing toward ipt.
    let mut a = -lv.y;
    let mut b = lv.x;

    let dscaled = d * l2.sqrt();
    let s = c * (2.0 * dscaled - c);
    if s < 0.0 {
        // ipt is more than 2d away from the line.
        return Candidates::NONE;
    }
    let xy_swapped = a.abs() < b.abs();
    if xy_swapped {
        std::mem::swap(&mut a, &mut b);
    }
    let (count, u) = if s == 0.0 { (1, 0.0) } else { (2, a * s.sqrt() / l2) };
    let e = dscaled - c;
    let f = b * e / l2;
    let g = f - u;
    let h = f + u;
    let mut pts = [
        Point2::new((-b * g + e) / a, g),
        Point2::new((-b * h + e) / a, h),
    ];
    if xy_swapped {
        for p in &mut pts {
            std::mem::swap(&mut p.x, &mut p.y);
        }
    }
    let shift = pt.to_vec();
    Candidates {
        count,
        pts: [pts[0] + shift, pts[1] + shift],
    }
}

/// Computes, for every half-edge, the offset-circle crossing it carries
/// for the signed offset `offset_distance` (see [`EdgeOffset`]).
///
/// `vertex_distances` is the signed vertex distance table of `vd`. A
/// crossing is only placed on the half-edge leaving the lower-distance
/// end, never at the higher end, so that offset curves passing exactly
/// through a Voronoi vertex are traced on one side only and zero-length
/// polygon edges cannot arise.
pub fn edge_offset_contour_intersections(
    vd: &VoronoiDiagram,
    segments: &[Segment],
    vertex_distances: &[f64],
    offset_distance: f64,
) -> Vec<EdgeOffset> {
    let outside = offset_distance > 0.0;
    let radius = offset_distance.abs();
    let radius2 = radius * radius;
    debug_assert!(radius > 0.0);

    let mut out = vec![EdgeOffset::Unvisited; vd.num_edges()];

    for scan in vd.edge_ids() {
        if out[scan.index()] != EdgeOffset::Unvisited {
            continue;
        }
        // Work from the half that keeps its origin; an infinite edge may
        // be reached through its unbounded half first.
        let e = if vd.vertex0(scan).is_none() {
            scan.twin()
        } else {
            scan
        };
        let e2 = e.twin();

        let eff = |v: Option<VertexId>| -> f64 {
            let d = v.map_or(f64::MAX, |v| vertex_distances[v.index()]);
            if outside {
                d
            } else {
                -d
            }
        };
        let d0 = eff(vd.vertex0(e));
        let d1 = eff(vd.vertex1(e));
        if d0 == d1 {
            // No sign change along the edge.
            continue;
        }
        let (dmin, dmax) = if d0 < d1 { (d0, d1) } else { (d1, d0) };
        // Never intersect at the higher end; the crossing there belongs
        // to the edges beyond it.
        if radius >= dmax {
            continue;
        }

        let cell = vd.cell(vd.edge(e).cell);
        let cell2 = vd.cell(vd.edge(e2).cell);

        if vd.vertex1(e).is_none() {
            // Unbounded edge: distance grows monotonically outward.
            debug_assert!(vd.edge(e).linear);
            if radius >= dmin {
                let p0 = vd.vertex_point(vd.vertex0(e).expect("origin kept"));
                if cell.contains_point() && cell2.contains_point() {
                    debug_assert!(!vd.edge(e).secondary);
                    let pt0 = cell.contour_point(segments);
                    let pt1 = cell2.contour_point(segments);
                    // Perpendicular to the joining segment, oriented away
                    // from the diagram.
                    let dir = Vec2::new(
                        (pt0.y - pt1.y) as f64,
                        (pt1.x - pt0.x) as f64,
                    );
                    let t = first_circle_segment_intersection_parameter(
                        pt0.to_f64(),
                        radius,
                        p0,
                        dir,
                    );
                    debug_assert!(t > 0.0);
                    out[e.index()] = EdgeOffset::Hit(p0 + dir * t);
                } else {
                    // Secondary ray from a contour endpoint.
                    debug_assert!(cell.contains_point() != cell2.contains_point());
                    debug_assert!(vd.edge(e).secondary);
                    let (point_cell, segment_cell) = if cell.contains_segment() {
                        (cell2, cell)
                    } else {
                        (cell, cell2)
                    };
                    let ipt = point_cell.contour_point(segments);
                    let line = segment_cell.segment(segments);
                    debug_assert!(line.a == ipt || line.b == ipt);
                    let normal = line
                        .outward_normal()
                        .normalize()
                        .expect("input segments are not degenerate");
                    out[e.index()] = EdgeOffset::Hit(ipt.to_f64() + normal * radius);
                }
            }
            // The unbounded half is never crossed on its own account.
            out[e2.index()] = EdgeOffset::NoHit;
            continue;
        }

        let v0 = vd.vertex0(e).expect("finite edge");
        let v1 = vd.vertex1(e).expect("finite edge");
        let p0 = vd.vertex_point(v0);
        let p1 = vd.vertex_point(v1);
        let mut done = false;

        let bisector = cell.contains_segment() && cell2.contains_segment();
        if bisector || vd.edge(e).secondary {
            // Distance along the edge is linear; a secondary edge starts
            // at zero distance on the contour.
            debug_assert!(vd.edge(e).linear);
            debug_assert!(!vd.edge(e).secondary || dmin == 0.0);
            if !bisector || radius >= dmin {
                let t = ((radius - dmin) / (dmax - dmin)).clamp(0.0, 1.0);
                if d1 < d0 {
                    out[e2.index()] = EdgeOffset::Hit(p1.lerp(p0, t));
                    out[e.index()] = EdgeOffset::NoHit;
                } else {
                    out[e.index()] = EdgeOffset::Hit(p0.lerp(p1, t));
                    out[e2.index()] = EdgeOffset::NoHit;
                }
                done = true;
            }
        } else {
            // At least one point site: the distance along the edge has an
            // interior minimum, so the circle may cross this pair twice.
            debug_assert!(cell.contains_point() || cell2.contains_point());
            let point_vs_segment = cell.contains_point() != cell2.contains_point();
            let pt0 = if cell.contains_point() {
                cell.contour_point(segments)
            } else {
                cell2.contour_point(segments)
            };
            let px = pt0.to_f64();

            let mut dmin2 = dmin * dmin;
            let mut has_intersection = radius2 >= dmin2;
            let mut possibly_two_points = false;
            if !has_intersection {
                // Refine the minimum with the interior low point, if the
                // projection falls between the edge ends.
                let mut refined = dmin2;
                if point_vs_segment {
                    let line = if cell.contains_segment() {
                        cell.segment(segments)
                    } else {
                        cell2.segment(segments)
                    };
                    let la = line.a.to_f64();
                    let lv = line.direction();
                    let t0 = (p0 - la).dot(lv);
                    let t1 = (p1 - la).dot(lv);
                    let tx = (px - la).dot(lv);
                    if (tx >= t0 && tx <= t1) || (tx >= t1 && tx <= t0) {
                        // The parabola's vertex projects inside the edge
                        // span; its site distance is half the point-line
                        // distance.
                        let ft = foot_pt(line, px);
                        refined = (ft - px).magnitude_squared() * 0.25;
                    }
                } else {
                    let v = p1 - p0;
                    let l2 = v.magnitude_squared();
                    debug_assert!(l2 > 0.0);
                    let t = v.dot(px - p0);
                    if (0.0..=l2).contains(&t) {
                        let ft = p0 + v * (t / l2);
                        refined = (ft - px).magnitude_squared();
                    }
                }
                debug_assert!(refined <= dmin2 + 1e-9);
                if refined < dmin2 {
                    dmin2 = refined;
                    has_intersection = radius2 >= dmin2;
                    possibly_two_points = has_intersection;
                }
            }

            if has_intersection {
                let mut cand = if point_vs_segment {
                    let line = if cell.contains_segment() {
                        cell.segment(segments)
                    } else {
                        cell2.segment(segments)
                    };
                    line_point_equal_distance_points(line, pt0, radius)
                } else {
                    let pt1 = if cell.contains_point() {
                        cell2.contour_point(segments)
                    } else {
                        cell.contour_point(segments)
                    };
                    point_point_equal_distance_points(pt0, pt1, radius)
                };
                debug_assert!(cand.count > 0);
                if cand.count == 2 {
                    if possibly_two_points {
                        // Both candidates may lie on this edge; keep the
                        // ones whose chord parameter is in range.
                        let v = p1 - p0;
                        let l2 = v.magnitude_squared();
                        let mut t0 = v.dot(cand.pts[0] - p0);
                        let mut t1 = v.dot(cand.pts[1] - p0);
                        if t0 > t1 {
                            std::mem::swap(&mut t0, &mut t1);
                            cand.pts.swap(0, 1);
                        }
                        if t0 < 0.0 || t0 > l2 {
                            if t1 < 0.0 || t1 > l2 {
                                cand.count = 0;
                            } else {
                                cand.count -= 1;
                                cand.pts[0] = cand.pts[1];
                            }
                        } else if t1 < 0.0 || t1 > l2 {
                            cand.count -= 1;
                        }
                    } else {
                        // Exactly one crossing: keep the candidate
                        // farther from the edge ends.
                        let far = |p: Point2<f64>| {
                            (p - p0)
                                .magnitude_squared()
                                .max((p - p1).magnitude_squared())
                        };
                        if far(cand.pts[0]) > far(cand.pts[1]) {
                            cand.pts[1] = cand.pts[0];
                        }
                        cand.pts[0] = cand.pts[1];
                        cand.count -= 1;
                    }
                    if cand.count == 2 {
                        // pts are ordered from v0 toward v1: the far one
                        // belongs to this half, the near one to the twin.
                        out[e.index()] = EdgeOffset::Hit(cand.pts[1]);
                        out[e2.index()] = EdgeOffset::Hit(cand.pts[0]);
                        done = true;
                    } else if cand.count == 1 {
                        let (hit_half, other) = if d1 < d0 { (e2, e) } else { (e, e2) };
                        out[hit_half.index()] = EdgeOffset::Hit(cand.pts[0]);
                        out[other.index()] = EdgeOffset::NoHit;
                        done = true;
                    }
                }
                // Tangential contact (one candidate) is not tracked.
            }
        }

        if !done {
            out[e.index()] = EdgeOffset::NoHit;
            out[e2.index()] = EdgeOffset::NoHit;
        }
    }

    out
}
