use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use super::resolver::EquivalenceResolver;
use super::value_objects::ClassId;

/// In-memory taxonomy model accumulated while an ontology source is parsed.
///
/// Subclass edges are stored under the canonical representatives computed at
/// the moment of insertion; unions declared later never rewrite an edge that
/// is already stored. Equivalence display pairs keep the raw labels exactly as
/// declared so every stated pair can be rendered, independently of which label
/// survives as canonical.
#[derive(Debug, Default, Clone)]
pub struct TaxonomyGraph {
    resolver: EquivalenceResolver,
    subclass_edges: BTreeMap<ClassId, BTreeSet<ClassId>>,
    equivalence_pairs: BTreeSet<(ClassId, ClassId)>,
}

impl TaxonomyGraph {
    /// Creates an empty taxonomy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the declaration that `sub` is a subclass of `sup`.
    ///
    /// Both endpoints are canonicalized through the resolver before the edge
    /// is stored, so a class merged into an equivalence group contributes
    /// edges under the group's surviving label. Repeating an identical
    /// declaration leaves the edge set unchanged.
    pub fn add_subclass_of(&mut self, sub: impl Into<ClassId>, sup: impl Into<ClassId>) {
        let sub = sub.into();
        let sup = sup.into();
        tracing::info!("{sub} ⊑ {sup}");

        let rep_sub = self.resolver.find(&sub);
        let rep_sup = self.resolver.find(&sup);
        self.subclass_edges.entry(rep_sub).or_default().insert(rep_sup);
    }

    /// Records one equivalence declaration over `group`.
    ///
    /// Every earlier element is unioned into the side of the group's last
    /// element, so future lookups converge on that element's representative.
    /// The display store independently records the full pairwise closure of
    /// the group using the raw labels as declared.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::GroupTooSmall`] when `group` holds fewer than
    /// two identifiers; such a declaration has nothing to equate and fails
    /// fast instead of being coerced into a no-op.
    pub fn add_equivalent_classes(&mut self, group: &[ClassId]) -> Result<(), TaxonomyError> {
        if group.len() < 2 {
            return Err(TaxonomyError::GroupTooSmall { size: group.len() });
        }

        let rendered = group
            .iter()
            .map(ClassId::as_str)
            .collect::<Vec<_>>()
            .join(" ≡ ");
        tracing::info!("{rendered}");

        let last = &group[group.len() - 1];
        for (index, earlier) in group[..group.len() - 1].iter().enumerate() {
            self.resolver.union(earlier, last);
            for later in &group[index + 1..] {
                self.equivalence_pairs
                    .insert((earlier.clone(), later.clone()));
            }
        }

        Ok(())
    }

    /// Returns the subclass adjacency keyed by canonical identifiers.
    #[must_use]
    pub fn subclass_edges(&self) -> &BTreeMap<ClassId, BTreeSet<ClassId>> {
        &self.subclass_edges
    }

    /// Returns the declared equivalence pairs with their raw labels.
    #[must_use]
    pub fn equivalence_pairs(&self) -> &BTreeSet<(ClassId, ClassId)> {
        &self.equivalence_pairs
    }
}

/// Errors raised when mutating a [`TaxonomyGraph`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    /// An equivalence declaration named fewer than two classes.
    #[error("equivalence group must name at least two classes, got {size}")]
    GroupTooSmall { size: usize },
}

#[cfg(test)]
mod tests {
    use super::{ClassId, TaxonomyError, TaxonomyGraph};

    fn id(label: &str) -> ClassId {
        ClassId::new(label)
    }

    fn edge_count(graph: &TaxonomyGraph) -> usize {
        graph.subclass_edges().values().map(|sups| sups.len()).sum()
    }

    #[test]
    fn stores_declared_edges_without_transitive_closure() {
        let mut graph = TaxonomyGraph::new();
        graph.add_subclass_of("A", "B");
        graph.add_subclass_of("B", "C");

        assert_eq!(edge_count(&graph), 2);
        assert!(graph.subclass_edges()[&id("A")].contains(&id("B")));
        assert!(graph.subclass_edges()[&id("B")].contains(&id("C")));
        assert!(!graph.subclass_edges()[&id("A")].contains(&id("C")));
    }

    #[test]
    fn repeated_declarations_are_idempotent() {
        let mut graph = TaxonomyGraph::new();
        graph.add_subclass_of("A", "B");
        graph.add_subclass_of("A", "B");

        assert_eq!(edge_count(&graph), 1);
    }

    #[test]
    fn edges_after_a_merge_use_the_surviving_label() {
        let mut graph = TaxonomyGraph::new();
        graph
            .add_equivalent_classes(&[id("A"), id("B")])
            .expect("group of two");
        graph.add_subclass_of("A", "D");

        assert!(graph.subclass_edges()[&id("B")].contains(&id("D")));
        assert!(!graph.subclass_edges().contains_key(&id("A")));
    }

    #[test]
    fn edges_before_a_merge_keep_their_inserted_endpoints() {
        let mut graph = TaxonomyGraph::new();
        graph.add_subclass_of("A", "B");
        graph
            .add_equivalent_classes(&[id("A"), id("D")])
            .expect("group of two");

        assert!(graph.subclass_edges()[&id("A")].contains(&id("B")));
        assert!(!graph.subclass_edges().contains_key(&id("D")));
    }

    #[test]
    fn equivalence_group_records_full_pairwise_closure() {
        let mut graph = TaxonomyGraph::new();
        graph
            .add_equivalent_classes(&[id("A"), id("B"), id("C")])
            .expect("group of three");

        let pairs: Vec<_> = graph.equivalence_pairs().iter().cloned().collect();
        assert_eq!(
            pairs,
            vec![
                (id("A"), id("B")),
                (id("A"), id("C")),
                (id("B"), id("C")),
            ]
        );
    }

    #[test]
    fn equivalence_group_merges_toward_last_element() {
        let mut graph = TaxonomyGraph::new();
        graph
            .add_equivalent_classes(&[id("A"), id("B"), id("C")])
            .expect("group of three");
        graph.add_subclass_of("A", "X");
        graph.add_subclass_of("B", "Y");

        assert!(graph.subclass_edges()[&id("C")].contains(&id("X")));
        assert!(graph.subclass_edges()[&id("C")].contains(&id("Y")));
    }

    #[test]
    fn undersized_group_fails_fast() {
        let mut graph = TaxonomyGraph::new();
        let err = graph
            .add_equivalent_classes(&[id("A")])
            .expect_err("single-element group");
        assert_eq!(err, TaxonomyError::GroupTooSmall { size: 1 });
        assert!(graph.equivalence_pairs().is_empty());
    }
}
