//! Error types for diagram construction.

use thiserror::Error;

/// Errors reported when assembling a Voronoi diagram from raw parts.
///
/// A diagram that constructs successfully is topologically consistent;
/// the offsetting passes themselves do not produce errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    /// Half-edges must come in twin pairs at consecutive indices.
    #[error("half-edge count {0} is odd")]
    OddEdgeCount(usize),

    /// An edge, vertex, or cell referenced an out-of-range element.
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Element kind the dangling reference points at.
        kind: &'static str,
        /// The referenced ordinal.
        index: usize,
        /// Number of elements of that kind.
        len: usize,
    },

    /// `next` and `prev` links do not form consistent per-cell loops.
    #[error("edge {0}: next/prev links are not mutually inverse")]
    BrokenChain(usize),

    /// An edge's `next` leads into a different cell.
    #[error("edge {0}: next edge belongs to a different cell")]
    ChainLeavesCell(usize),

    /// Twin half-edges disagree on their secondary or curvature flag.
    #[error("edge pair {0}: twin halves disagree on flags")]
    TwinFlagMismatch(usize),

    /// Both halves of an edge pair are missing their origin vertex.
    #[error("edge pair {0}: both endpoints missing")]
    FullyUnboundedEdge(usize),

    /// A cell's source index does not name an input segment.
    #[error("cell {cell}: source index {index} out of range (len {len})")]
    SourceOutOfRange {
        /// The offending cell ordinal.
        cell: usize,
        /// The referenced segment index.
        index: usize,
        /// Number of input segments.
        len: usize,
    },

    /// A vertex's incident edge does not originate at the vertex.
    #[error("vertex {0}: incident edge does not originate here")]
    IncidentEdgeMismatch(usize),

    /// A cell's incident edge belongs to a different cell.
    #[error("cell {0}: incident edge belongs to a different cell")]
    CellEdgeMismatch(usize),
}
