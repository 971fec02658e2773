use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::colouring::{
    domains::{DomainStore, Trail},
    graph::{Colour, ConstraintGraph, VariableId},
    heuristics::{order_lcv, select_mrv},
    propagation::{ac3, initial_ac3, Arc},
};

/// A complete colouring: every variable mapped to one colour in `1..=k`.
pub type Assignment = BTreeMap<VariableId, Colour>;

/// Counters accumulated over one `solve()` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColouringStats {
    /// Backtracking nodes entered (one per recursive step).
    pub nodes_visited: u64,
    /// Candidate values rolled back after propagation or recursion failed.
    pub backtracks: u64,
    /// Arc revisions performed across all AC-3 runs.
    pub revisions: u64,
    /// Domain values removed by those revisions.
    pub prunings: u64,
}

/// A graph-colouring problem: a [`ConstraintGraph`] plus the colour
/// count `k`.
///
/// `Colouring` itself is immutable and freely reusable; all mutable
/// search state (domains, assignment, trail) lives in a context built
/// fresh inside every [`Colouring::solve`] call, so concurrent or
/// repeated solves of the same problem never share state. `solve()` runs
/// synchronously to completion with no suspension or cancellation points.
pub struct Colouring {
    graph: ConstraintGraph,
    colours: Colour,
}

impl Colouring {
    /// Callers must validate `colours >= 1` before construction; the
    /// drivers report `failure` for anything smaller without building a
    /// solver at all.
    pub fn new(graph: ConstraintGraph, colours: Colour) -> Self {
        Self { graph, colours }
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    /// Searches for a complete colouring.
    ///
    /// Unsatisfiability (a self-loop, an AC-3 wipeout, or exhausted
    /// backtracking) is the normal `None` outcome, not an error. Stats
    /// are returned either way.
    pub fn solve(&self) -> (Option<Assignment>, ColouringStats) {
        let mut context = SearchContext {
            graph: &self.graph,
            domains: DomainStore::new(&self.graph, self.colours),
            trail: Trail::new(),
            assignment: Assignment::new(),
            stats: ColouringStats::default(),
        };

        // A variable adjacent to itself can never differ from itself.
        if self.graph.has_self_loop() {
            debug!("rejecting problem with a self-loop");
            return (None, context.stats);
        }

        if !initial_ac3(
            context.graph,
            &mut context.domains,
            &mut context.trail,
            &mut context.stats,
        ) {
            debug!("initial propagation wiped out a domain");
            return (None, context.stats);
        }

        if context.backtrack() {
            debug!(stats = ?context.stats, "colouring found");
            (Some(context.assignment), context.stats)
        } else {
            debug!(stats = ?context.stats, "search space exhausted");
            (None, context.stats)
        }
    }
}

/// The mutable state of one solve call, exclusively owned by it.
struct SearchContext<'g> {
    graph: &'g ConstraintGraph,
    domains: DomainStore,
    trail: Trail,
    assignment: Assignment,
    stats: ColouringStats,
}

impl SearchContext<'_> {
    fn backtrack(&mut self) -> bool {
        self.stats.nodes_visited += 1;
        if self.assignment.len() == self.graph.variable_count() {
            return true;
        }
        let Some(var) = select_mrv(self.graph, &self.domains, &self.assignment) else {
            return false;
        };

        for value in order_lcv(self.graph, &self.domains, &self.assignment, var) {
            if !self.consistent(var, value) {
                continue;
            }
            let checkpoint = self.trail.checkpoint();
            self.commit(var, value);

            // Propagate the effect of fixing `var` outward.
            let queue: VecDeque<Arc> = self.graph.neighbours(var).map(|n| (n, var)).collect();
            let consistent = ac3(
                self.graph,
                &mut self.domains,
                &mut self.trail,
                queue,
                &mut self.stats,
            );
            if consistent && self.backtrack() {
                return true;
            }

            self.assignment.remove(&var);
            self.trail.undo_to(&mut self.domains, checkpoint);
            self.stats.backtracks += 1;
        }
        false
    }

    /// Direct pairwise check against already-assigned neighbours,
    /// independent of whatever AC-3 has pruned.
    fn consistent(&self, var: VariableId, value: Colour) -> bool {
        !self
            .graph
            .neighbours(var)
            .any(|n| self.assignment.get(&n) == Some(&value))
    }

    /// Commits `var = value`: records the assignment and shrinks `var`'s
    /// domain to the singleton, every removal going through the trail.
    fn commit(&mut self, var: VariableId, value: Colour) {
        self.assignment.insert(var, value);
        let others: Vec<Colour> = self.domains.values(var).filter(|&c| c != value).collect();
        for other in others {
            self.domains.remove(var, other, &mut self.trail);
        }
    }
}
