use std::collections::BinaryHeap;

use crate::search::graph::VertexId;

/// A pending `(f, g, vertex)` entry on the frontier.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub f: f64,
    pub g: f64,
    pub vertex: VertexId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // BinaryHeap is a max-heap, so the comparison is reversed: the
        // entry with the smallest f pops first, ties going to the smaller
        // vertex id. Weights are finite and nonnegative, so f is never NaN
        // and total_cmp agrees with the usual order.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// The open set of the search engine: a priority queue ordered by f
/// ascending with the vertex id as a deterministic tie-break.
///
/// Decrease-key is realised lazily. Relaxing an already-queued vertex
/// pushes a duplicate entry with the cheaper g; the superseded entry
/// stays queued and is recognised as stale when popped, because its
/// carried g no longer matches the best known g. This duplicate-and-skip
/// discipline is part of the observable contract (it determines the push
/// and expansion counters), so it must not be swapped for an eagerly
/// updating heap.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, f: f64, g: f64, vertex: VertexId) {
        self.heap.push(FrontierEntry { f, g, vertex });
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
