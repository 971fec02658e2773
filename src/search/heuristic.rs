//! Admissible distance estimators over decoded cell coordinates, and a
//! graph-wide diagnostic that checks whether they actually are admissible
//! for a given graph.

use serde::Serialize;

use crate::search::graph::{Graph, VertexId};

/// An edge weight below the implied coordinate distance by more than this
/// counts as an admissibility violation.
pub const ADMISSIBILITY_TOLERANCE: f64 = 1e-12;

/// A cost-to-goal estimator for the search engine.
///
/// Implementations must be pure functions of `(graph, vertex, goal)`. The
/// engine trusts the estimate blindly: an inadmissible heuristic silently
/// yields suboptimal costs, which is why [`check_admissibility`] exists as
/// a separate diagnostic.
pub trait Heuristic {
    fn estimate(&self, graph: &Graph, vertex: VertexId, goal: VertexId) -> f64;

    /// A short lowercase name for reports and logs.
    fn name(&self) -> &'static str;
}

/// The constant-zero heuristic. Degrades A* to uniform-cost search, which
/// is optimal for any nonnegative edge weights.
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _graph: &Graph, _vertex: VertexId, _goal: VertexId) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "zero"
    }
}

/// Straight-line distance between the decoded coordinates of `vertex` and
/// `goal`. A vertex without a recorded cell id estimates 0.0, which is
/// always admissible.
pub struct EuclideanHeuristic;

impl Heuristic for EuclideanHeuristic {
    fn estimate(&self, graph: &Graph, vertex: VertexId, goal: VertexId) -> f64 {
        match (graph.coords(vertex), graph.coords(goal)) {
            (Some((vx, vy)), Some((gx, gy))) => (vx - gx).hypot(vy - gy),
            _ => 0.0,
        }
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// L1 distance between the decoded coordinates of `vertex` and `goal`.
pub struct ManhattanHeuristic;

impl Heuristic for ManhattanHeuristic {
    fn estimate(&self, graph: &Graph, vertex: VertexId, goal: VertexId) -> f64 {
        match (graph.coords(vertex), graph.coords(goal)) {
            (Some((vx, vy)), Some((gx, gy))) => (vx - gx).abs() + (vy - gy).abs(),
            _ => 0.0,
        }
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// Graph-wide admissibility of the two coordinate heuristic families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdmissibilityReport {
    pub euclidean: bool,
    pub manhattan: bool,
}

/// Compares every undirected edge once against the Euclidean and Manhattan
/// distances between its endpoints' decoded coordinates.
///
/// This is informational only; the search engine does not consult it.
/// Edges with an endpoint lacking a cell id are skipped.
pub fn check_admissibility(graph: &Graph) -> AdmissibilityReport {
    let mut euclidean = true;
    let mut manhattan = true;
    for u in graph.vertices() {
        for edge in graph.neighbours(u) {
            let v = edge.to;
            if u >= v {
                continue;
            }
            let (Some((ux, uy)), Some((vx, vy))) = (graph.coords(u), graph.coords(v)) else {
                continue;
            };
            let l2 = (ux - vx).hypot(uy - vy);
            let l1 = (ux - vx).abs() + (uy - vy).abs();
            if edge.weight + ADMISSIBILITY_TOLERANCE < l2 {
                euclidean = false;
            }
            if edge.weight + ADMISSIBILITY_TOLERANCE < l1 {
                manhattan = false;
            }
        }
    }
    AdmissibilityReport {
        euclidean,
        manhattan,
    }
}
