//! Itinera implements two classical AI solvers over small graphs.
//!
//! The first half is a best-first search engine that generalises
//! uniform-cost search and A*: the heuristic is pluggable, and the engine
//! reports cost, path and instrumentation counters (expansions, pushes,
//! maximum frontier size, runtime). The second half is a graph-colouring
//! constraint solver combining AC-3 arc-consistency propagation with
//! backtracking search ordered by the MRV and LCV heuristics, undoing
//! domain prunings through an explicit trail.
//!
//! # Example: shortest path
//!
//! The direct edge from 1 to 3 costs 5, but the detour through 2 costs 2.
//!
//! ```
//! use itinera::search::engine::SearchEngine;
//! use itinera::search::graph::Graph;
//! use itinera::search::heuristic::ZeroHeuristic;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex(1, 0);
//! graph.add_vertex(2, 1);
//! graph.add_vertex(3, 11);
//! graph.add_edge(1, 2, 1.0);
//! graph.add_edge(2, 3, 1.0);
//! graph.add_edge(1, 3, 5.0);
//!
//! let engine = SearchEngine::new();
//! let result = engine.search(&graph, 1, 3, &ZeroHeuristic);
//! assert_eq!(result.cost, Some(2.0));
//! assert_eq!(result.path.as_deref(), Some(&[1, 2, 3][..]));
//! ```
//!
//! # Example: graph colouring
//!
//! A triangle needs three colours.
//!
//! ```
//! use itinera::colouring::graph::ConstraintGraph;
//! use itinera::colouring::search::Colouring;
//!
//! let mut graph = ConstraintGraph::new();
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//! graph.add_edge(1, 3);
//!
//! let (assignment, _stats) = Colouring::new(graph, 3).solve();
//! let assignment = assignment.expect("a triangle is 3-colourable");
//! assert_ne!(assignment[&1], assignment[&2]);
//! assert_ne!(assignment[&2], assignment[&3]);
//! assert_ne!(assignment[&1], assignment[&3]);
//! ```

pub mod colouring;
pub mod error;
pub mod input;
pub mod report;
pub mod search;
