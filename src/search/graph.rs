use std::collections::BTreeMap;

pub type VertexId = u32;

/// A cell id encodes a 2D coordinate as `10 * x + y`. Decoding is integer
/// division and remainder by 10 and nothing else.
pub type CellId = u32;

/// An outgoing half of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: f64,
}

/// An undirected weighted graph with a per-vertex cell id used by the
/// coordinate-based heuristics.
///
/// The graph is built once by the input parser and never mutated during
/// search. Vertices and adjacency lists iterate in ascending vertex-id
/// order, which keeps every downstream diagnostic deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cells: BTreeMap<VertexId, CellId>,
    adjacency: BTreeMap<VertexId, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex together with its cell id.
    pub fn add_vertex(&mut self, id: VertexId, cell: CellId) {
        self.cells.insert(id, cell);
        self.adjacency.entry(id).or_default();
    }

    /// Inserts an undirected edge. `weight` must be nonnegative; negative
    /// weights void the optimality guarantee of the search engine.
    ///
    /// Both endpoints are registered as vertices if they are not already,
    /// though without a cell id until [`Graph::add_vertex`] supplies one.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) {
        debug_assert!(weight >= 0.0, "edge weights must be nonnegative");
        self.adjacency.entry(u).or_default().push(Edge { to: v, weight });
        self.adjacency.entry(v).or_default().push(Edge { to: u, weight });
    }

    /// All vertex ids, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// The cell id recorded for `v`, if the vertex was declared with one.
    pub fn cell(&self, v: VertexId) -> Option<CellId> {
        self.cells.get(&v).copied()
    }

    /// The decoded `(x, y)` coordinate of `v`'s cell id.
    pub fn coords(&self, v: VertexId) -> Option<(f64, f64)> {
        self.cell(v)
            .map(|cell| (f64::from(cell / 10), f64::from(cell % 10)))
    }

    /// The outgoing edges of `v`, or an empty slice for an unknown vertex.
    pub fn neighbours(&self, v: VertexId) -> &[Edge] {
        self.adjacency.get(&v).map_or(&[], Vec::as_slice)
    }
}
