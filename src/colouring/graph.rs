use std::collections::{BTreeMap, BTreeSet};

pub type VariableId = u32;

/// Colours are the integers `1..=k`.
pub type Colour = u32;

/// The constraint graph of a colouring problem: every edge is a symmetric
/// not-equal constraint between two variables.
///
/// Storage is ordered so that variable and neighbour iteration is
/// deterministic, which the MRV/LCV tie-breaks and the tests rely on.
#[derive(Debug, Clone, Default)]
pub struct ConstraintGraph {
    neighbours: BTreeMap<VariableId, BTreeSet<VariableId>>,
}

impl ConstraintGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a symmetric not-equal constraint, registering both variables.
    ///
    /// A self-loop `add_edge(v, v)` is representable but makes the
    /// problem unsatisfiable for any colour count; the solver rejects it
    /// up front.
    pub fn add_edge(&mut self, u: VariableId, v: VariableId) {
        self.neighbours.entry(u).or_default().insert(v);
        self.neighbours.entry(v).or_default().insert(u);
    }

    /// All variable ids, ascending.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.neighbours.keys().copied()
    }

    pub fn variable_count(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// The neighbours of `v`, ascending; empty for an unknown variable.
    pub fn neighbours(&self, v: VariableId) -> impl Iterator<Item = VariableId> + '_ {
        self.neighbours.get(&v).into_iter().flatten().copied()
    }

    pub fn has_self_loop(&self) -> bool {
        self.neighbours
            .iter()
            .any(|(v, neighbours)| neighbours.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_register_both_variables_symmetrically() {
        let mut graph = ConstraintGraph::new();
        graph.add_edge(3, 1);

        assert_eq!(graph.variables().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(graph.neighbours(1).collect::<Vec<_>>(), vec![3]);
        assert_eq!(graph.neighbours(3).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut graph = ConstraintGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);

        assert_eq!(graph.neighbours(1).count(), 1);
    }

    #[test]
    fn self_loops_are_detected() {
        let mut graph = ConstraintGraph::new();
        graph.add_edge(1, 2);
        assert!(!graph.has_self_loop());
        graph.add_edge(2, 2);
        assert!(graph.has_self_loop());
    }
}
