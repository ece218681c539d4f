use std::collections::BTreeMap;

use super::value_objects::ClassId;

/// Union-find over class identifiers, merging declared equivalence groups
/// into a single canonical representative per set.
///
/// The parent map only holds entries for identifiers that have been merged;
/// absence means an identifier is its own representative. Self-referencing
/// links are never stored, so walking parent links always terminates.
#[derive(Debug, Default, Clone)]
pub struct EquivalenceResolver {
    parent: BTreeMap<ClassId, ClassId>,
}

impl EquivalenceResolver {
    /// Creates an empty resolver where every identifier represents itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical representative of `id`.
    ///
    /// Identifiers that were never unioned resolve to themselves. Visited
    /// nodes are rewritten to point directly at the representative, keeping
    /// later lookups amortized O(1).
    pub fn find(&mut self, id: &ClassId) -> ClassId {
        let mut root = id.clone();
        while let Some(next) = self.parent.get(&root) {
            root = next.clone();
        }

        let mut current = id.clone();
        while current != root {
            let Some(next) = self.parent.insert(current, root.clone()) else {
                break;
            };
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// `b`'s side wins: `a`'s representative is parented under `b`'s, so the
    /// label surviving as canonical comes from `b`'s set. Callers rely on this
    /// asymmetry because the surviving label shows up in rendered output.
    pub fn union(&mut self, a: &ClassId, b: &ClassId) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent.insert(root_a, root_b);
        }
    }
}
