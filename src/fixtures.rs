//! Hand-constructed segment Voronoi diagrams for tests.
//!
//! The engine consumes diagrams produced elsewhere, so the tests assemble
//! exact diagrams for a few shapes whose Voronoi structure is known in
//! closed form. Coordinates are kept at scale 2 or larger so that no
//! off-contour Voronoi vertex rounds onto a contour point.

use crate::diagram::{Cell, CellId, Edge, EdgeId, SourceCategory, Vertex, VertexId, VoronoiDiagram};
use crate::geometry::Segment;

/// One half-edge description: origin vertex, owning cell, secondary and
/// linear flags. Twins are consecutive entries.
type Half = (Option<u32>, u32, bool, bool);

fn assemble(
    vertex_coords: &[(f64, f64)],
    cells: &[(u32, SourceCategory)],
    halves: &[Half],
    loops: &[&[u32]],
    segments: &[Segment],
) -> VoronoiDiagram {
    let mut next = vec![0u32; halves.len()];
    let mut prev = vec![0u32; halves.len()];
    for chain in loops {
        for (i, &e) in chain.iter().enumerate() {
            let n = chain[(i + 1) % chain.len()];
            next[e as usize] = n;
            prev[n as usize] = e;
        }
    }

    let edges: Vec<Edge> = halves
        .iter()
        .enumerate()
        .map(|(i, &(v0, cell, secondary, linear))| Edge {
            vertex0: v0.map(VertexId),
            next: EdgeId(next[i]),
            prev: EdgeId(prev[i]),
            cell: CellId(cell),
            secondary,
            linear,
        })
        .collect();

    let vertices: Vec<Vertex> = vertex_coords
        .iter()
        .enumerate()
        .map(|(v, &(x, y))| {
            let incident = halves
                .iter()
                .position(|&(v0, ..)| v0 == Some(v as u32))
                .expect("every vertex originates an edge");
            Vertex {
                x,
                y,
                incident_edge: EdgeId(incident as u32),
            }
        })
        .collect();

    let cells: Vec<Cell> = cells
        .iter()
        .enumerate()
        .map(|(c, &(source_index, source_category))| Cell {
            source_index,
            source_category,
            incident_edge: EdgeId(loops[c][0]),
        })
        .collect();

    VoronoiDiagram::from_parts(vertices, edges, cells, segments)
        .expect("fixture diagram must validate")
}

/// Counter-clockwise square with corners `(0, 0)` and `(s, s)`.
///
/// Five vertices (four corners, one center), four segment cells, four
/// corner point cells, four interior diagonals, eight secondary rays.
pub fn square(s: i64) -> (VoronoiDiagram, Vec<Segment>) {
    let segments = vec![
        Segment::from_coords(0, 0, s, 0),
        Segment::from_coords(s, 0, s, s),
        Segment::from_coords(s, s, 0, s),
        Segment::from_coords(0, s, 0, 0),
    ];
    (square_diagram(s, &segments, &[0, 1, 2, 3]), segments)
}

/// Shared topology of the square diagram. `wall_source[k]` names the
/// input segment forming wall `k`, where walls are ordered bottom, right,
/// top, left and corner `k` is the shared endpoint of walls `k-1` and `k`.
fn square_diagram(s: i64, segments: &[Segment], wall_source: &[u32; 4]) -> VoronoiDiagram {
    let sf = s as f64;
    let h = sf / 2.0;
    // 0-3: corners C0..C3 (CCW from origin), 4: center.
    let vertex_coords = [(0.0, 0.0), (sf, 0.0), (sf, sf), (0.0, sf), (h, h)];

    let corner = |k: usize| {
        let ip = crate::geometry::IntPoint::new(
            vertex_coords[k].0 as i64,
            vertex_coords[k].1 as i64,
        );
        // Attribute the corner point cell to whichever segment starts or
        // ends there.
        for (i, seg) in segments.iter().enumerate() {
            if seg.a == ip {
                return (i as u32, SourceCategory::SegmentStartPoint);
            }
            if seg.b == ip {
                return (i as u32, SourceCategory::SegmentEndPoint);
            }
        }
        unreachable!("corner must be a segment endpoint");
    };

    // Cells 0-3: wall cells, 4-7: corner point cells.
    let cells = [
        (wall_source[0], SourceCategory::Segment),
        (wall_source[1], SourceCategory::Segment),
        (wall_source[2], SourceCategory::Segment),
        (wall_source[3], SourceCategory::Segment),
        corner(0),
        corner(1),
        corner(2),
        corner(3),
    ];

    // Pairs 0-3: diagonals corner k <-> center, between wall k-1 and
    // wall k. Pairs 4-7: rays perpendicular to wall k-1 at corner k.
    // Pairs 8-11: rays perpendicular to wall k at corner k.
    let halves: [Half; 24] = [
        (Some(0), 3, false, true), // e0  [C0->M]  wall 3
        (Some(4), 0, false, true), // e1  [M->C0]  wall 0
        (Some(1), 0, false, true), // e2  [C1->M]  wall 0
        (Some(4), 1, false, true), // e3  [M->C1]  wall 1
        (Some(2), 1, false, true), // e4  [C2->M]  wall 1
        (Some(4), 2, false, true), // e5  [M->C2]  wall 2
        (Some(3), 2, false, true), // e6  [C3->M]  wall 2
        (Some(4), 3, false, true), // e7  [M->C3]  wall 3
        (None, 3, true, true),     // e8  [inf->C0] wall 3
        (Some(0), 4, true, true),  // e9  [C0->inf] corner 0
        (None, 0, true, true),     // e10 [inf->C1] wall 0
        (Some(1), 5, true, true),  // e11 [C1->inf] corner 1
        (None, 1, true, true),     // e12 [inf->C2] wall 1
        (Some(2), 6, true, true),  // e13 [C2->inf] corner 2
        (None, 2, true, true),     // e14 [inf->C3] wall 2
        (Some(3), 7, true, true),  // e15 [C3->inf] corner 3
        (Some(0), 0, true, true),  // e16 [C0->inf] wall 0
        (None, 4, true, true),     // e17 [inf->C0] corner 0
        (Some(1), 1, true, true),  // e18 [C1->inf] wall 1
        (None, 5, true, true),     // e19 [inf->C1] corner 1
        (Some(2), 2, true, true),  // e20 [C2->inf] wall 2
        (None, 6, true, true),     // e21 [inf->C2] corner 2
        (Some(3), 3, true, true),  // e22 [C3->inf] wall 3
        (None, 7, true, true),     // e23 [inf->C3] corner 3
    ];

    let loops: [&[u32]; 8] = [
        &[10, 2, 1, 16],
        &[12, 4, 3, 18],
        &[14, 6, 5, 20],
        &[8, 0, 7, 22],
        &[17, 9],
        &[19, 11],
        &[21, 13],
        &[23, 15],
    ];

    assemble(&vertex_coords, &cells, &halves, &loops, segments)
}

/// Counter-clockwise axis-aligned rectangle `(0, 0)` to `(w, h)`, `w > h`.
///
/// Like [`square`] plus the medial segment between the two branch points
/// of the medial axis.
pub fn rectangle(w: i64, h: i64) -> (VoronoiDiagram, Vec<Segment>) {
    assert!(w > h, "rectangle fixture wants a strict landscape aspect");
    let segments = vec![
        Segment::from_coords(0, 0, w, 0),
        Segment::from_coords(w, 0, w, h),
        Segment::from_coords(w, h, 0, h),
        Segment::from_coords(0, h, 0, 0),
    ];
    let (wf, hf) = (w as f64, h as f64);
    let half = hf / 2.0;
    // 0-3: corners, 4: left branch point M1, 5: right branch point M2.
    let vertex_coords = [
        (0.0, 0.0),
        (wf, 0.0),
        (wf, hf),
        (0.0, hf),
        (half, half),
        (wf - half, half),
    ];

    let cells = [
        (0, SourceCategory::Segment),
        (1, SourceCategory::Segment),
        (2, SourceCategory::Segment),
        (3, SourceCategory::Segment),
        (0, SourceCategory::SegmentStartPoint),
        (1, SourceCategory::SegmentStartPoint),
        (2, SourceCategory::SegmentStartPoint),
        (3, SourceCategory::SegmentStartPoint),
    ];

    // Pairs 0-3: corner diagonals, pair 4: medial segment M2 <-> M1,
    // pairs 5-8: rays perpendicular to wall k-1 at corner k, pairs 9-12:
    // rays perpendicular to wall k at corner k.
    let halves: [Half; 26] = [
        (Some(0), 3, false, true), // e0  [C0->M1] left
        (Some(4), 0, false, true), // e1  [M1->C0] bottom
        (Some(1), 0, false, true), // e2  [C1->M2] bottom
        (Some(5), 1, false, true), // e3  [M2->C1] right
        (Some(2), 1, false, true), // e4  [C2->M2] right
        (Some(5), 2, false, true), // e5  [M2->C2] top
        (Some(3), 2, false, true), // e6  [C3->M1] top
        (Some(4), 3, false, true), // e7  [M1->C3] left
        (Some(5), 0, false, true), // e8  [M2->M1] bottom
        (Some(4), 2, false, true), // e9  [M1->M2] top
        (None, 3, true, true),     // e10 [inf->C0] left
        (Some(0), 4, true, true),  // e11 [C0->inf] corner 0
        (None, 0, true, true),     // e12 [inf->C1] bottom
        (Some(1), 5, true, true),  // e13 [C1->inf] corner 1
        (None, 1, true, true),     // e14 [inf->C2] right
        (Some(2), 6, true, true),  // e15 [C2->inf] corner 2
        (None, 2, true, true),     // e16 [inf->C3] top
        (Some(3), 7, true, true),  // e17 [C3->inf] corner 3
        (Some(0), 0, true, true),  // e18 [C0->inf] bottom
        (None, 4, true, true),     // e19 [inf->C0] corner 0
        (Some(1), 1, true, true),  // e20 [C1->inf] right
        (None, 5, true, true),     // e21 [inf->C1] corner 1
        (Some(2), 2, true, true),  // e22 [C2->inf] top
        (None, 6, true, true),     // e23 [inf->C2] corner 2
        (Some(3), 3, true, true),  // e24 [C3->inf] left
        (None, 7, true, true),     // e25 [inf->C3] corner 3
    ];

    let loops: [&[u32]; 8] = [
        &[12, 2, 8, 1, 18],
        &[14, 4, 3, 20],
        &[16, 6, 9, 5, 22],
        &[10, 0, 7, 24],
        &[19, 11],
        &[21, 13],
        &[23, 15],
        &[25, 17],
    ];

    let vd = assemble(&vertex_coords, &cells, &halves, &loops, &segments);
    (vd, segments)
}

/// Square annulus: counter-clockwise outer square `(0,0)`–`(6,6)` with a
/// clockwise square hole `(2,2)`–`(4,4)`.
///
/// The ring between the contours holds the material. Each hole corner
/// owns a ring-side point cell bounded by two parabolic bisectors and two
/// finite secondary edges; the hole interior carries the usual square
/// diagram around its center.
pub fn annulus() -> (VoronoiDiagram, Vec<Segment>) {
    let segments = vec![
        Segment::from_coords(0, 0, 6, 0),
        Segment::from_coords(6, 0, 6, 6),
        Segment::from_coords(6, 6, 0, 6),
        Segment::from_coords(0, 6, 0, 0),
        Segment::from_coords(2, 2, 2, 4),
        Segment::from_coords(2, 4, 4, 4),
        Segment::from_coords(4, 4, 4, 2),
        Segment::from_coords(4, 2, 2, 2),
    ];

    // Ring branch points: jk on the outer-corner diagonals where the
    // hole-corner point cells begin, plus the feet of the hole corners'
    // secondary edges on the ring midlines.
    let q = 4.0 - 2.0 * std::f64::consts::SQRT_2;
    let vertex_coords = [
        (0.0, 0.0),     // 0  O0
        (6.0, 0.0),     // 1  O1
        (6.0, 6.0),     // 2  O2
        (0.0, 6.0),     // 3  O3
        (2.0, 2.0),     // 4  I0
        (4.0, 2.0),     // 5  I1
        (4.0, 4.0),     // 6  I2
        (2.0, 4.0),     // 7  I3
        (q, q),         // 8  J0
        (6.0 - q, q),   // 9  J1
        (6.0 - q, 6.0 - q), // 10 J2
        (q, 6.0 - q),   // 11 J3
        (2.0, 1.0),     // 12 A0
        (4.0, 1.0),     // 13 A1
        (5.0, 2.0),     // 14 R1
        (5.0, 4.0),     // 15 R2
        (4.0, 5.0),     // 16 T2
        (2.0, 5.0),     // 17 T3
        (1.0, 4.0),     // 18 L3
        (1.0, 2.0),     // 19 L0
        (3.0, 3.0),     // 20 H (hole center)
    ];

    // Cells 0-3: outer wall cells, 4-7: hole wall cells, 8-11: outer
    // corner point cells, 12-15: hole corner point cells I0..I3.
    let cells = [
        (0, SourceCategory::Segment),
        (1, SourceCategory::Segment),
        (2, SourceCategory::Segment),
        (3, SourceCategory::Segment),
        (4, SourceCategory::Segment),
        (5, SourceCategory::Segment),
        (6, SourceCategory::Segment),
        (7, SourceCategory::Segment),
        (0, SourceCategory::SegmentStartPoint),
        (1, SourceCategory::SegmentStartPoint),
        (2, SourceCategory::SegmentStartPoint),
        (3, SourceCategory::SegmentStartPoint),
        (4, SourceCategory::SegmentStartPoint),
        (7, SourceCategory::SegmentStartPoint),
        (6, SourceCategory::SegmentStartPoint),
        (5, SourceCategory::SegmentStartPoint),
    ];

    let halves: [Half; 72] = [
        (Some(0), 3, false, true),   // e0  [O0->J0]  s3
        (Some(8), 0, false, true),   // e1  [J0->O0]  s0
        (Some(1), 0, false, true),   // e2  [O1->J1]  s0
        (Some(9), 1, false, true),   // e3  [J1->O1]  s1
        (Some(2), 1, false, true),   // e4  [O2->J2]  s1
        (Some(10), 2, false, true),  // e5  [J2->O2]  s2
        (Some(3), 2, false, true),   // e6  [O3->J3]  s2
        (Some(11), 3, false, true),  // e7  [J3->O3]  s3
        (Some(12), 0, false, false), // e8  [A0->J0]  s0 (parabolic)
        (Some(8), 12, false, false), // e9  [J0->A0]  I0 cell
        (Some(8), 3, false, false),  // e10 [J0->L0]  s3 (parabolic)
        (Some(19), 12, false, false), // e11 [L0->J0] I0 cell
        (Some(9), 0, false, false),  // e12 [J1->A1]  s0 (parabolic)
        (Some(13), 13, false, false), // e13 [A1->J1] I1 cell
        (Some(14), 1, false, false), // e14 [R1->J1]  s1 (parabolic)
        (Some(9), 13, false, false), // e15 [J1->R1]  I1 cell
        (Some(10), 1, false, false), // e16 [J2->R2]  s1 (parabolic)
        (Some(15), 14, false, false), // e17 [R2->J2] I2 cell
        (Some(16), 2, false, false), // e18 [T2->J2]  s2 (parabolic)
        (Some(10), 14, false, false), // e19 [J2->T2] I2 cell
        (Some(11), 2, false, false), // e20 [J3->T3]  s2 (parabolic)
        (Some(17), 15, false, false), // e21 [T3->J3] I3 cell
        (Some(18), 3, false, false), // e22 [L3->J3]  s3 (parabolic)
        (Some(11), 15, false, false), // e23 [J3->L3] I3 cell
        (Some(13), 0, false, true),  // e24 [A1->A0]  s0 (ring midline)
        (Some(12), 7, false, true),  // e25 [A0->A1]  s7
        (Some(15), 1, false, true),  // e26 [R2->R1]  s1 (ring midline)
        (Some(14), 6, false, true),  // e27 [R1->R2]  s6
        (Some(17), 2, false, true),  // e28 [T3->T2]  s2 (ring midline)
        (Some(16), 5, false, true),  // e29 [T2->T3]  s5
        (Some(19), 3, false, true),  // e30 [L0->L3]  s3 (ring midline)
        (Some(18), 4, false, true),  // e31 [L3->L0]  s4
        (Some(4), 7, true, true),    // e32 [I0->A0]  s7 (secondary)
        (Some(12), 12, true, true),  // e33 [A0->I0]  I0 cell
        (Some(19), 4, true, true),   // e34 [L0->I0]  s4 (secondary)
        (Some(4), 12, true, true),   // e35 [I0->L0]  I0 cell
        (Some(13), 7, true, true),   // e36 [A1->I1]  s7 (secondary)
        (Some(5), 13, true, true),   // e37 [I1->A1]  I1 cell
        (Some(5), 6, true, true),    // e38 [I1->R1]  s6 (secondary)
        (Some(14), 13, true, true),  // e39 [R1->I1]  I1 cell
        (Some(15), 6, true, true),   // e40 [R2->I2]  s6 (secondary)
        (Some(6), 14, true, true),   // e41 [I2->R2]  I2 cell
        (Some(6), 5, true, true),    // e42 [I2->T2]  s5 (secondary)
        (Some(16), 14, true, true),  // e43 [T2->I2]  I2 cell
        (Some(17), 5, true, true),   // e44 [T3->I3]  s5 (secondary)
        (Some(7), 15, true, true),   // e45 [I3->T3]  I3 cell
        (Some(7), 4, true, true),    // e46 [I3->L3]  s4 (secondary)
        (Some(18), 15, true, true),  // e47 [L3->I3]  I3 cell
        (Some(4), 4, false, true),   // e48 [I0->H]   s4 (hole diagonal)
        (Some(20), 7, false, true),  // e49 [H->I0]   s7
        (Some(5), 7, false, true),   // e50 [I1->H]   s7 (hole diagonal)
        (Some(20), 6, false, true),  // e51 [H->I1]   s6
        (Some(6), 6, false, true),   // e52 [I2->H]   s6 (hole diagonal)
        (Some(20), 5, false, true),  // e53 [H->I2]   s5
        (Some(7), 5, false, true),   // e54 [I3->H]   s5 (hole diagonal)
        (Some(20), 4, false, true),  // e55 [H->I3]   s4
        (None, 3, true, true),       // e56 [inf->O0] s3
        (Some(0), 8, true, true),    // e57 [O0->inf] corner 0
        (Some(0), 0, true, true),    // e58 [O0->inf] s0
        (None, 8, true, true),       // e59 [inf->O0] corner 0
        (None, 0, true, true),       // e60 [inf->O1] s0
        (Some(1), 9, true, true),    // e61 [O1->inf] corner 1
        (Some(1), 1, true, true),    // e62 [O1->inf] s1
        (None, 9, true, true),       // e63 [inf->O1] corner 1
        (None, 1, true, true),       // e64 [inf->O2] s1
        (Some(2), 10, true, true),   // e65 [O2->inf] corner 2
        (Some(2), 2, true, true),    // e66 [O2->inf] s2
        (None, 10, true, true),      // e67 [inf->O2] corner 2
        (None, 2, true, true),       // e68 [inf->O3] s2
        (Some(3), 11, true, true),   // e69 [O3->inf] corner 3
        (Some(3), 3, true, true),    // e70 [O3->inf] s3
        (None, 11, true, true),      // e71 [inf->O3] corner 3
    ];

    let loops: [&[u32]; 16] = [
        &[60, 2, 12, 24, 8, 1, 58],
        &[64, 4, 16, 26, 14, 3, 62],
        &[68, 6, 20, 28, 18, 5, 66],
        &[56, 0, 10, 30, 22, 7, 70],
        &[34, 48, 55, 46, 31],
        &[42, 29, 44, 54, 53],
        &[51, 38, 27, 40, 52],
        &[25, 36, 50, 49, 32],
        &[59, 57],
        &[63, 61],
        &[67, 65],
        &[71, 69],
        &[33, 35, 11, 9],
        &[39, 37, 13, 15],
        &[43, 41, 17, 19],
        &[47, 45, 21, 23],
    ];

    let vd = assemble(&vertex_coords, &cells, &halves, &loops, &segments);
    (vd, segments)
}

/// Counter-clockwise L-shape `(0,0) (4,0) (4,2) (2,2) (2,4) (0,4)`.
///
/// The full segment Voronoi diagram: the reflex corner `(2,2)` owns an
/// interior point cell bounded by two parabolic bisectors and two finite
/// secondary edges, and the exterior notch contributes a hull vertex at
/// `(4,4)` with a point–point ray.
pub fn l_shape() -> (VoronoiDiagram, Vec<Segment>) {
    let segments = vec![
        Segment::from_coords(0, 0, 4, 0),
        Segment::from_coords(4, 0, 4, 2),
        Segment::from_coords(4, 2, 2, 2),
        Segment::from_coords(2, 2, 2, 4),
        Segment::from_coords(2, 4, 0, 4),
        Segment::from_coords(0, 4, 0, 0),
    ];

    // Interior medial-axis branch points: b0 on the corner diagonal where
    // the reflex point cell begins, b1/b2 on the arm midlines, b3/b4 at
    // the feet of the reflex corner's secondary edges.
    let q = 4.0 - 2.0 * std::f64::consts::SQRT_2;
    let vertex_coords = [
        (0.0, 0.0), // 0  V0
        (4.0, 0.0), // 1  V1
        (4.0, 2.0), // 2  V2
        (2.0, 2.0), // 3  V3 (reflex)
        (2.0, 4.0), // 4  V4
        (0.0, 4.0), // 5  V5
        (q, q),     // 6  B0
        (3.0, 1.0), // 7  B1
        (1.0, 3.0), // 8  B2
        (2.0, 1.0), // 9  B3
        (1.0, 2.0), // 10 B4
        (4.0, 4.0), // 11 N (hull vertex of the notch)
    ];

    // Cells 0-5: segment cells, 6-11: point cells of V0..V5.
    let cells = [
        (0, SourceCategory::Segment),
        (1, SourceCategory::Segment),
        (2, SourceCategory::Segment),
        (3, SourceCategory::Segment),
        (4, SourceCategory::Segment),
        (5, SourceCategory::Segment),
        (0, SourceCategory::SegmentStartPoint),
        (1, SourceCategory::SegmentStartPoint),
        (2, SourceCategory::SegmentStartPoint),
        (3, SourceCategory::SegmentStartPoint),
        (4, SourceCategory::SegmentStartPoint),
        (5, SourceCategory::SegmentStartPoint),
    ];

    let halves: [Half; 46] = [
        (Some(0), 5, false, true),  // e0  [V0->B0]  S5
        (Some(6), 0, false, true),  // e1  [B0->V0]  S0
        (Some(1), 0, false, true),  // e2  [V1->B1]  S0
        (Some(7), 1, false, true),  // e3  [B1->V1]  S1
        (Some(2), 1, false, true),  // e4  [V2->B1]  S1
        (Some(7), 2, false, true),  // e5  [B1->V2]  S2
        (Some(7), 0, false, true),  // e6  [B1->B3]  S0 (arm midline)
        (Some(9), 2, false, true),  // e7  [B3->B1]  S2
        (Some(3), 2, true, true),   // e8  [V3->B3]  S2 (secondary)
        (Some(9), 9, true, true),   // e9  [B3->V3]  P3
        (Some(9), 0, false, false), // e10 [B3->B0]  S0 (parabolic)
        (Some(6), 9, false, false), // e11 [B0->B3]  P3
        (Some(6), 5, false, false), // e12 [B0->B4]  S5 (parabolic)
        (Some(10), 9, false, false), // e13 [B4->B0] P3
        (Some(10), 3, true, true),  // e14 [B4->V3]  S3 (secondary)
        (Some(3), 9, true, true),   // e15 [V3->B4]  P3
        (Some(10), 5, false, true), // e16 [B4->B2]  S5 (arm midline)
        (Some(8), 3, false, true),  // e17 [B2->B4]  S3
        (Some(4), 3, false, true),  // e18 [V4->B2]  S3
        (Some(8), 4, false, true),  // e19 [B2->V4]  S4
        (Some(5), 4, false, true),  // e20 [V5->B2]  S4
        (Some(8), 5, false, true),  // e21 [B2->V5]  S5
        (None, 5, true, true),      // e22 [inf->V0] S5
        (Some(0), 6, true, true),   // e23 [V0->inf] P0
        (Some(0), 0, true, true),   // e24 [V0->inf] S0
        (None, 6, true, true),      // e25 [inf->V0] P0
        (None, 0, true, true),      // e26 [inf->V1] S0
        (Some(1), 7, true, true),   // e27 [V1->inf] P1
        (Some(1), 1, true, true),   // e28 [V1->inf] S1
        (None, 7, true, true),      // e29 [inf->V1] P1
        (None, 1, true, true),      // e30 [inf->V2] S1
        (Some(2), 8, true, true),   // e31 [V2->inf] P2
        (Some(2), 2, true, true),   // e32 [V2->N]   S2 (secondary, finite)
        (Some(11), 8, true, true),  // e33 [N->V2]   P2
        (Some(11), 3, true, true),  // e34 [N->V4]   S3 (secondary, finite)
        (Some(4), 10, true, true),  // e35 [V4->N]   P4
        (Some(11), 2, false, true), // e36 [N->V3]   S2 (notch bisector)
        (Some(3), 3, false, true),  // e37 [V3->N]   S3
        (None, 8, false, true),     // e38 [inf->N]  P2 (point-point ray)
        (Some(11), 10, false, true), // e39 [N->inf] P4
        (None, 10, true, true),     // e40 [inf->V4] P4
        (Some(4), 4, true, true),   // e41 [V4->inf] S4
        (None, 4, true, true),      // e42 [inf->V5] S4
        (Some(5), 11, true, true),  // e43 [V5->inf] P5
        (Some(5), 5, true, true),   // e44 [V5->inf] S5
        (None, 11, true, true),     // e45 [inf->V5] P5
    ];

    let loops: [&[u32]; 12] = [
        &[26, 2, 6, 10, 1, 24],
        &[30, 4, 3, 28],
        &[32, 36, 8, 7, 5],
        &[37, 34, 18, 17, 14],
        &[42, 20, 19, 41],
        &[22, 0, 12, 16, 21, 44],
        &[25, 23],
        &[29, 27],
        &[38, 33, 31],
        &[9, 15, 13, 11],
        &[40, 35, 39],
        &[45, 43],
    ];

    let vd = assemble(&vertex_coords, &cells, &halves, &loops, &segments);
    (vd, segments)
}
