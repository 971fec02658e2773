//! Best-first graph search: uniform-cost search when the heuristic is
//! zero, A* otherwise.

pub mod engine;
pub mod frontier;
pub mod graph;
pub mod heuristic;
