//! Per-variable candidate domains and the trail that makes every removal
//! undoable.

use std::collections::{BTreeMap, BTreeSet};

use crate::colouring::graph::{Colour, ConstraintGraph, VariableId};

/// The current candidate colours of every variable, each an ordered set
/// initialised to `1..=k`.
///
/// Domains only ever shrink through [`DomainStore::remove`], which logs
/// the removal on the [`Trail`]; restoration happens exclusively through
/// [`Trail::undo_to`]. That pairing is what makes checkpoint rollback
/// exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: BTreeMap<VariableId, BTreeSet<Colour>>,
}

impl DomainStore {
    /// Fresh full domains for every variable of `graph`. Callers validate
    /// `k >= 1` before getting here.
    pub fn new(graph: &ConstraintGraph, k: Colour) -> Self {
        let domains = graph
            .variables()
            .map(|v| (v, (1..=k).collect()))
            .collect();
        Self { domains }
    }

    /// The remaining candidates of `var`, ascending.
    pub fn values(&self, var: VariableId) -> impl Iterator<Item = Colour> + '_ {
        self.domains.get(&var).into_iter().flatten().copied()
    }

    pub fn len(&self, var: VariableId) -> usize {
        self.domains.get(&var).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self, var: VariableId) -> bool {
        self.len(var) == 0
    }

    pub fn contains(&self, var: VariableId, value: Colour) -> bool {
        self.domains
            .get(&var)
            .is_some_and(|domain| domain.contains(&value))
    }

    /// Removes `value` from `var`'s domain, logging the removal on
    /// `trail`. Returns whether the value was actually present.
    pub fn remove(&mut self, var: VariableId, value: Colour, trail: &mut Trail) -> bool {
        let removed = self
            .domains
            .get_mut(&var)
            .is_some_and(|domain| domain.remove(&value));
        if removed {
            trail.record(var, value);
        }
        removed
    }

    fn restore(&mut self, var: VariableId, value: Colour) {
        if let Some(domain) = self.domains.get_mut(&var) {
            domain.insert(value);
        }
    }
}

/// A checkpoint is a trail length; undoing to it pops everything recorded
/// since.
pub type Checkpoint = usize;

/// The undo log of domain removals, LIFO.
///
/// Propagation prunings and branching commitments go through the same
/// trail, so popping back to a checkpoint restores domains to exactly
/// their state when the checkpoint was taken, whatever mix of the two
/// happened in between.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<(VariableId, Colour)>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        self.entries.len()
    }

    pub fn record(&mut self, var: VariableId, value: Colour) {
        self.entries.push((var, value));
    }

    /// Pops entries in reverse chronological order down to `checkpoint`,
    /// re-inserting each removed value into its domain.
    pub fn undo_to(&mut self, store: &mut DomainStore, checkpoint: Checkpoint) {
        for (var, value) in self.entries.drain(checkpoint..).rev() {
            store.restore(var, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn path_graph() -> ConstraintGraph {
        let mut graph = ConstraintGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph
    }

    #[test]
    fn domains_initialise_to_one_through_k() {
        let store = DomainStore::new(&path_graph(), 3);
        for var in [1, 2, 3] {
            assert_eq!(store.values(var).collect::<Vec<_>>(), vec![1, 2, 3]);
        }
        assert_eq!(store.values(99).count(), 0);
    }

    #[test]
    fn removals_are_logged_and_idempotent() {
        let mut store = DomainStore::new(&path_graph(), 2);
        let mut trail = Trail::new();

        assert!(store.remove(1, 2, &mut trail));
        assert!(!store.remove(1, 2, &mut trail));
        assert_eq!(trail.len(), 1);
        assert_eq!(store.values(1).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn undo_restores_exactly_to_the_checkpoint() {
        let graph = path_graph();
        let mut store = DomainStore::new(&graph, 3);
        let mut trail = Trail::new();

        store.remove(1, 3, &mut trail);
        let snapshot = store.clone();
        let checkpoint = trail.checkpoint();

        store.remove(1, 2, &mut trail);
        store.remove(2, 1, &mut trail);
        store.remove(3, 1, &mut trail);
        store.remove(3, 2, &mut trail);
        assert_ne!(store, snapshot);

        trail.undo_to(&mut store, checkpoint);
        assert_eq!(store, snapshot);
        assert_eq!(trail.len(), checkpoint);

        // The pre-checkpoint removal stays undone only by a deeper undo.
        trail.undo_to(&mut store, 0);
        assert_eq!(store, DomainStore::new(&graph, 3));
    }

    #[test]
    fn nested_checkpoints_unwind_in_lifo_order() {
        let graph = path_graph();
        let mut store = DomainStore::new(&graph, 3);
        let mut trail = Trail::new();

        let outer = trail.checkpoint();
        store.remove(1, 1, &mut trail);
        let inner = trail.checkpoint();
        store.remove(1, 2, &mut trail);

        trail.undo_to(&mut store, inner);
        assert_eq!(store.values(1).collect::<Vec<_>>(), vec![2, 3]);

        trail.undo_to(&mut store, outer);
        assert_eq!(store.values(1).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
