use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::search::{
    frontier::Frontier,
    graph::{Graph, VertexId},
    heuristic::Heuristic,
};

/// A popped entry whose carried g differs from the best known g by more
/// than this is stale and skipped without counting as an expansion.
pub const STALE_TOLERANCE: f64 = 1e-9;

/// A relaxation must undercut the recorded g by more than this to count
/// as an improvement.
pub const RELAXATION_TOLERANCE: f64 = 1e-12;

/// The outcome of one search invocation, counters included.
///
/// `cost` and `path` are `None` when the goal is unreachable; the
/// counters are still populated. Both tolerances above are part of the
/// observable contract, so identical inputs always reproduce identical
/// costs, paths and counters.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub cost: Option<f64>,
    pub path: Option<Vec<VertexId>>,
    /// Entries popped live, including the goal pop.
    pub expanded: u64,
    /// Entries pushed, including the initial one for the start vertex.
    pub pushes: u64,
    /// Largest frontier size observed just before a pop.
    pub max_frontier: usize,
    pub runtime: Duration,
}

/// Best-first search over a [`Graph`]: uniform-cost search under
/// [`ZeroHeuristic`](crate::search::heuristic::ZeroHeuristic), A* under
/// anything else.
///
/// The engine never mutates the graph, so repeated invocations against
/// the same graph with different heuristics are safe. Start and goal must
/// be vertices of the graph; passing unknown ids is a caller error and
/// simply reports the goal unreachable.
pub struct SearchEngine;

impl SearchEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn search(
        &self,
        graph: &Graph,
        start: VertexId,
        goal: VertexId,
        heuristic: &dyn Heuristic,
    ) -> SearchResult {
        let mut g_cost: HashMap<VertexId, f64> = HashMap::new();
        let mut parent: HashMap<VertexId, VertexId> = HashMap::new();
        let mut frontier = Frontier::new();
        let mut expanded: u64 = 0;
        let mut pushes: u64 = 0;
        let mut max_frontier: usize = 0;

        g_cost.insert(start, 0.0);
        frontier.push(heuristic.estimate(graph, start, goal), 0.0, start);
        pushes += 1;

        let started = Instant::now();

        loop {
            // Frontier size is sampled just before each pop.
            max_frontier = max_frontier.max(frontier.len());
            let Some(entry) = frontier.pop() else { break };
            let u = entry.vertex;
            let best = g_cost.get(&u).copied().unwrap_or(f64::INFINITY);

            // A stale entry was superseded by a cheaper path pushed later;
            // skip it without counting an expansion.
            if (entry.g - best).abs() > STALE_TOLERANCE {
                continue;
            }
            expanded += 1;

            if u == goal {
                let cost = g_cost.get(&goal).copied();
                let path = reconstruct_path(&parent, start, goal);
                debug!(
                    heuristic = heuristic.name(),
                    expanded, pushes, "goal reached"
                );
                return SearchResult {
                    cost,
                    path: Some(path),
                    expanded,
                    pushes,
                    max_frontier,
                    runtime: started.elapsed(),
                };
            }

            for edge in graph.neighbours(u) {
                let v = edge.to;
                let tentative = entry.g + edge.weight;
                let current = g_cost.get(&v).copied().unwrap_or(f64::INFINITY);
                if tentative + RELAXATION_TOLERANCE < current {
                    g_cost.insert(v, tentative);
                    parent.insert(v, u);
                    frontier.push(
                        tentative + heuristic.estimate(graph, v, goal),
                        tentative,
                        v,
                    );
                    pushes += 1;
                }
            }
        }

        debug!(heuristic = heuristic.name(), expanded, "goal unreachable");
        SearchResult {
            cost: None,
            path: None,
            expanded,
            pushes,
            max_frontier,
            runtime: started.elapsed(),
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn reconstruct_path(
    parent: &HashMap<VertexId, VertexId>,
    start: VertexId,
    goal: VertexId,
) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(&previous) = parent.get(&current) {
        path.push(current);
        current = previous;
    }
    path.push(start);
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::search::heuristic::{EuclideanHeuristic, ManhattanHeuristic, ZeroHeuristic};

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_vertex(1, 0);
        graph.add_vertex(2, 1);
        graph.add_vertex(3, 11);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 3, 1.0);
        graph.add_edge(1, 3, 5.0);
        graph
    }

    /// Vertex ids 1..=30 row-major over a 5x6 grid, `cell = 10 * row + col`,
    /// unit weights, matching the synthetic grid generator's layout.
    fn grid_5x6() -> Graph {
        let (rows, cols) = (5u32, 6u32);
        let mut graph = Graph::new();
        for x in 0..rows {
            for y in 0..cols {
                graph.add_vertex(x * cols + y + 1, 10 * x + y);
            }
        }
        for x in 0..rows {
            for y in 0..cols {
                let id = x * cols + y + 1;
                if y + 1 < cols {
                    graph.add_edge(id, id + 1, 1.0);
                }
                if x + 1 < rows {
                    graph.add_edge(id, id + cols, 1.0);
                }
            }
        }
        graph
    }

    #[test]
    fn triangle_detour_beats_direct_edge() {
        let engine = SearchEngine::new();
        let result = engine.search(&triangle(), 1, 3, &ZeroHeuristic);
        assert_eq!(result.cost, Some(2.0));
        assert_eq!(result.path, Some(vec![1, 2, 3]));
    }

    #[test]
    fn start_equals_goal() {
        let engine = SearchEngine::new();
        let result = engine.search(&triangle(), 2, 2, &ZeroHeuristic);
        assert_eq!(result.cost, Some(0.0));
        assert_eq!(result.path, Some(vec![2]));
        assert_eq!(result.expanded, 1);
    }

    #[test]
    fn unreachable_goal_reports_no_path_with_counters() {
        let mut graph = triangle();
        graph.add_vertex(42, 99); // isolated
        let engine = SearchEngine::new();
        let result = engine.search(&graph, 1, 42, &ZeroHeuristic);
        assert_eq!(result.cost, None);
        assert_eq!(result.path, None);
        assert_eq!(result.expanded, 3);
        assert!(result.pushes >= result.expanded);
    }

    #[test]
    fn grid_cost_is_nine_under_every_heuristic() {
        let graph = grid_5x6();
        let engine = SearchEngine::new();
        let ucs = engine.search(&graph, 1, 30, &ZeroHeuristic);
        let euclid = engine.search(&graph, 1, 30, &EuclideanHeuristic);
        let manhattan = engine.search(&graph, 1, 30, &ManhattanHeuristic);

        assert_eq!(ucs.cost, Some(9.0));
        assert_eq!(euclid.cost, Some(9.0));
        assert_eq!(manhattan.cost, Some(9.0));

        // Admissible guidance never expands more than blind search here.
        assert!(euclid.expanded <= ucs.expanded);
        assert!(manhattan.expanded <= ucs.expanded);
    }

    #[test]
    fn counter_invariants_hold() {
        let graph = grid_5x6();
        let engine = SearchEngine::new();
        for heuristic in [
            &ZeroHeuristic as &dyn crate::search::heuristic::Heuristic,
            &EuclideanHeuristic,
            &ManhattanHeuristic,
        ] {
            let result = engine.search(&graph, 1, 30, heuristic);
            assert!(result.pushes >= result.expanded);
            assert!(result.max_frontier <= result.pushes as usize);
        }
    }

    #[test]
    fn identical_inputs_reproduce_identical_results() {
        let graph = grid_5x6();
        let engine = SearchEngine::new();
        let first = engine.search(&graph, 1, 30, &ManhattanHeuristic);
        let second = engine.search(&graph, 1, 30, &ManhattanHeuristic);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.path, second.path);
        assert_eq!(first.expanded, second.expanded);
        assert_eq!(first.pushes, second.pushes);
        assert_eq!(first.max_frontier, second.max_frontier);
    }

    #[test]
    fn ucs_and_admissible_astar_agree_on_cost() {
        let graph = triangle();
        let engine = SearchEngine::new();
        let ucs = engine.search(&graph, 1, 3, &ZeroHeuristic);
        let euclid = engine.search(&graph, 1, 3, &EuclideanHeuristic);
        assert_eq!(ucs.cost, euclid.cost);
    }

    #[cfg(test)]
    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        /// Random subgraphs of a unit-weight grid: adjacent cells are at
        /// coordinate distance 1, so both heuristic families stay
        /// admissible and consistent.
        fn grid_subgraph() -> impl Strategy<Value = Graph> {
            let (rows, cols) = (4u32, 5u32);
            let edge_count = (rows * cols * 2) as usize;
            proptest::collection::vec(proptest::bool::ANY, edge_count).prop_map(move |keep| {
                let mut graph = Graph::new();
                for x in 0..rows {
                    for y in 0..cols {
                        graph.add_vertex(x * cols + y + 1, 10 * x + y);
                    }
                }
                let mut index = 0;
                for x in 0..rows {
                    for y in 0..cols {
                        let id = x * cols + y + 1;
                        if y + 1 < cols {
                            if keep[index % keep.len()] {
                                graph.add_edge(id, id + 1, 1.0);
                            }
                            index += 1;
                        }
                        if x + 1 < rows {
                            if keep[index % keep.len()] {
                                graph.add_edge(id, id + cols, 1.0);
                            }
                            index += 1;
                        }
                    }
                }
                graph
            })
        }

        proptest! {
            #[test]
            fn guided_search_matches_ucs_cost(graph in grid_subgraph(), start in 1u32..=20, goal in 1u32..=20) {
                let engine = SearchEngine::new();
                let ucs = engine.search(&graph, start, goal, &ZeroHeuristic);
                let euclid = engine.search(&graph, start, goal, &EuclideanHeuristic);
                let manhattan = engine.search(&graph, start, goal, &ManhattanHeuristic);

                match (ucs.cost, euclid.cost, manhattan.cost) {
                    (Some(a), Some(b), Some(c)) => {
                        prop_assert!((a - b).abs() < 1e-9);
                        prop_assert!((a - c).abs() < 1e-9);
                    }
                    // Reachability does not depend on the heuristic.
                    (None, None, None) => {}
                    other => prop_assert!(false, "reachability disagrees: {other:?}"),
                }

                for result in [&ucs, &euclid, &manhattan] {
                    prop_assert!(result.pushes >= result.expanded);
                    prop_assert!(result.max_frontier <= result.pushes as usize);
                }
            }
        }
    }
}
