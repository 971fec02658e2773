//! AC-3 arc-consistency propagation for pairwise not-equal constraints.
//!
//! An arc `(xi, xj)` reads "every candidate of xi needs a supporting,
//! different candidate in xj". Removals go through the trail so the
//! backtracking search can roll them back to any checkpoint.

use std::collections::VecDeque;

use tracing::debug;

use crate::colouring::{
    domains::{DomainStore, Trail},
    graph::{Colour, ConstraintGraph, VariableId},
    search::ColouringStats,
};

/// A directed arc: the domain of the first variable is revised against
/// the domain of the second.
pub type Arc = (VariableId, VariableId);

/// Removes every candidate of `xi` that has no supporting value in `xj`'s
/// domain. For a not-equal constraint, `a` is supported as soon as `xj`
/// retains any value other than `a`. Returns whether anything was removed.
pub fn revise(
    domains: &mut DomainStore,
    trail: &mut Trail,
    xi: VariableId,
    xj: VariableId,
    stats: &mut ColouringStats,
) -> bool {
    stats.revisions += 1;
    let unsupported: Vec<Colour> = domains
        .values(xi)
        .filter(|&a| !domains.values(xj).any(|b| b != a))
        .collect();
    for &value in &unsupported {
        domains.remove(xi, value, trail);
    }
    stats.prunings += unsupported.len() as u64;
    !unsupported.is_empty()
}

/// Processes `queue` FIFO until it drains (returns true) or some domain is
/// wiped out (returns false). A pruning revision of `xi` re-enqueues the
/// arcs `(xk, xi)` for every neighbour `xk` other than the arc's source,
/// since those supports may now be gone.
pub fn ac3(
    graph: &ConstraintGraph,
    domains: &mut DomainStore,
    trail: &mut Trail,
    mut queue: VecDeque<Arc>,
    stats: &mut ColouringStats,
) -> bool {
    while let Some((xi, xj)) = queue.pop_front() {
        if revise(domains, trail, xi, xj, stats) {
            if domains.is_empty(xi) {
                debug!(variable = xi, "domain wiped out");
                return false;
            }
            for xk in graph.neighbours(xi) {
                if xk != xj {
                    queue.push_back((xk, xi));
                }
            }
        }
    }
    true
}

/// Runs AC-3 seeded with every directed arc of every adjacent pair. Used
/// once before branching to eliminate values that cannot take part in any
/// solution, independent of variable order.
pub fn initial_ac3(
    graph: &ConstraintGraph,
    domains: &mut DomainStore,
    trail: &mut Trail,
    stats: &mut ColouringStats,
) -> bool {
    let mut queue = VecDeque::new();
    for xi in graph.variables() {
        for xj in graph.neighbours(xi) {
            queue.push_back((xi, xj));
        }
    }
    ac3(graph, domains, trail, queue, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> ConstraintGraph {
        let mut graph = ConstraintGraph::new();
        graph.add_edge(1, 2);
        graph
    }

    #[test]
    fn revise_prunes_only_against_singleton_neighbours() {
        let graph = pair();
        let mut domains = DomainStore::new(&graph, 2);
        let mut trail = Trail::new();
        let mut stats = ColouringStats::default();

        // Both candidates of 2 are supported while 1 still has two values.
        assert!(!revise(&mut domains, &mut trail, 2, 1, &mut stats));

        domains.remove(1, 2, &mut trail);
        assert!(revise(&mut domains, &mut trail, 2, 1, &mut stats));
        assert_eq!(domains.values(2).collect::<Vec<_>>(), vec![2]);
        assert_eq!(stats.revisions, 2);
        assert_eq!(stats.prunings, 1);
    }

    #[test]
    fn single_colour_pair_wipes_out() {
        let graph = pair();
        let mut domains = DomainStore::new(&graph, 1);
        let mut trail = Trail::new();
        let mut stats = ColouringStats::default();

        assert!(!initial_ac3(&graph, &mut domains, &mut trail, &mut stats));
    }

    #[test]
    fn two_colour_pair_is_already_consistent() {
        let graph = pair();
        let mut domains = DomainStore::new(&graph, 2);
        let mut trail = Trail::new();
        let mut stats = ColouringStats::default();

        assert!(initial_ac3(&graph, &mut domains, &mut trail, &mut stats));
        assert_eq!(stats.prunings, 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn singleton_fixes_propagate_along_a_path() {
        let mut graph = ConstraintGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        let mut domains = DomainStore::new(&graph, 2);
        let mut trail = Trail::new();
        let mut stats = ColouringStats::default();

        // Fix variable 1 to colour 1 and propagate outward.
        domains.remove(1, 2, &mut trail);
        let queue: VecDeque<Arc> = graph.neighbours(1).map(|n| (n, 1)).collect();
        assert!(ac3(&graph, &mut domains, &mut trail, queue, &mut stats));

        assert_eq!(domains.values(2).collect::<Vec<_>>(), vec![2]);
        assert_eq!(domains.values(3).collect::<Vec<_>>(), vec![1]);
    }
}
