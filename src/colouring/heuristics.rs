//! The two search-ordering heuristics. Both tie-break on ascending ids
//! and values, so the branch order (and therefore the returned assignment
//! when several exist) is deterministic.

use crate::colouring::{
    domains::DomainStore,
    graph::{Colour, ConstraintGraph, VariableId},
    search::Assignment,
};

/// Minimum-Remaining-Values: the unassigned variable with the smallest
/// current domain, ties going to the smaller variable id. `None` only
/// when every variable is assigned, which the search checks first.
pub fn select_mrv(
    graph: &ConstraintGraph,
    domains: &DomainStore,
    assignment: &Assignment,
) -> Option<VariableId> {
    graph
        .variables()
        .filter(|v| !assignment.contains_key(v))
        .min_by_key(|&v| (domains.len(v), v))
}

/// Least-Constraining-Value: `var`'s remaining candidates ordered by how
/// many unassigned neighbours still hold the candidate in their own
/// domain, ascending, ties by value ascending.
///
/// The count is a static conflict count against the neighbours' current
/// domains. It deliberately does not simulate the assignment via forward
/// checking; changing that would change the branch order.
pub fn order_lcv(
    graph: &ConstraintGraph,
    domains: &DomainStore,
    assignment: &Assignment,
    var: VariableId,
) -> Vec<Colour> {
    let mut candidates: Vec<(usize, Colour)> = domains
        .values(var)
        .map(|value| {
            let conflicts = graph
                .neighbours(var)
                .filter(|n| !assignment.contains_key(n))
                .filter(|&n| domains.contains(n, value))
                .count();
            (conflicts, value)
        })
        .collect();
    candidates.sort_unstable();
    candidates.into_iter().map(|(_, value)| value).collect()
}
