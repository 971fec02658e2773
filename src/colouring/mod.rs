//! Graph colouring as a constraint satisfaction problem: pairwise
//! not-equal constraints solved by AC-3 propagation interleaved with
//! MRV/LCV-ordered backtracking search over a trail of undoable domain
//! prunings.

pub mod domains;
pub mod graph;
pub mod heuristics;
pub mod propagation;
pub mod search;
