//! Fork tree reconstruction.
//!
//! Revisions arrive as a flat list where each record points at the revision
//! it was forked from. [`LineageTree::reconstruct`] indexes them by id, links
//! every resolvable forked-from pointer as a parent → child edge and picks a
//! single root for the level assignment.
//!
//! Malformed input is never rejected:
//! - duplicate ids keep their first occurrence,
//! - pointers to revisions outside the input (or to the revision itself) are
//!   left unlinked and the revision later becomes an orphan,
//! - when several revisions have no parent, the lowest version is the root,
//! - when none has, the lowest version overall becomes a synthetic root.

use indexmap::IndexMap;
use log::{debug, trace, warn};
use petgraph::{Direction, algo, graphmap::DiGraphMap};

use stemma_core::{identifier::RevisionId, revision::RevisionRecord};

/// Parent → child structure over one set of revisions.
///
/// Borrows the input records for the duration of a build call.
#[derive(Debug)]
pub struct LineageTree<'a> {
    by_id: IndexMap<RevisionId, &'a RevisionRecord>,
    graph: DiGraphMap<RevisionId, ()>,
    root: Option<RevisionId>,
}

impl<'a> LineageTree<'a> {
    /// Builds the lineage tree for `revisions`.
    ///
    /// Empty input produces an empty tree without a root.
    pub fn reconstruct(revisions: &'a [RevisionRecord]) -> Self {
        let mut by_id: IndexMap<RevisionId, &'a RevisionRecord> =
            IndexMap::with_capacity(revisions.len());

        for revision in revisions {
            if by_id.contains_key(&revision.id()) {
                warn!(id:% = revision.id(); "Duplicate revision id, keeping first occurrence");
                continue;
            }
            by_id.insert(revision.id(), revision);
        }

        let mut graph: DiGraphMap<RevisionId, ()> =
            DiGraphMap::with_capacity(by_id.len(), by_id.len());
        for &id in by_id.keys() {
            graph.add_node(id);
        }

        for revision in by_id.values() {
            match Self::resolve_parent(&by_id, revision) {
                Some(parent) => {
                    trace!(parent:% = parent, child:% = revision.id(); "Linking fork");
                    graph.add_edge(parent, revision.id(), ());
                }
                None => {
                    if let Some(missing) = revision.forked_from() {
                        warn!(
                            id:% = revision.id(),
                            forked_from:% = missing;
                            "Forked-from reference does not resolve, revision left unlinked"
                        );
                    }
                }
            }
        }

        let root = Self::select_root(&by_id);

        if algo::is_cyclic_directed(&graph) {
            warn!("Forked-from pointers contain a cycle");
        }

        debug!(
            revisions = by_id.len(),
            links = graph.edge_count(),
            root:? = root.map(RevisionId::get);
            "Lineage reconstructed"
        );

        Self { by_id, graph, root }
    }

    /// Returns the parent id of `revision` if it names another revision of the set.
    fn resolve_parent(
        by_id: &IndexMap<RevisionId, &'a RevisionRecord>,
        revision: &RevisionRecord,
    ) -> Option<RevisionId> {
        revision
            .forked_from()
            .filter(|&parent| parent != revision.id() && by_id.contains_key(&parent))
    }

    fn select_root(by_id: &IndexMap<RevisionId, &'a RevisionRecord>) -> Option<RevisionId> {
        let candidates: Vec<&RevisionRecord> = by_id
            .values()
            .copied()
            .filter(|revision| revision.forked_from().is_none())
            .collect();

        if candidates.len() > 1 {
            warn!(
                candidates = candidates.len();
                "Several revisions have no parent, lowest version becomes the root"
            );
        }

        let root = candidates
            .into_iter()
            .min_by_key(|revision| revision.ordering_key())
            .map(RevisionRecord::id);

        if root.is_some() || by_id.is_empty() {
            return root;
        }

        let synthetic = by_id
            .values()
            .min_by_key(|revision| revision.ordering_key())
            .map(|revision| revision.id());
        warn!(root:? = synthetic.map(RevisionId::get); "No parentless revision, using synthetic root");
        synthetic
    }

    /// Returns the revision chosen as root, or `None` for empty input.
    pub fn root(&self) -> Option<&'a RevisionRecord> {
        self.root.and_then(|id| self.get(id))
    }

    /// Looks up a revision by id.
    pub fn get(&self, id: RevisionId) -> Option<&'a RevisionRecord> {
        self.by_id.get(&id).copied()
    }

    /// Returns true if `id` belongs to the tree.
    pub fn contains(&self, id: RevisionId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Returns the revisions forked from `id`, ordered by ascending version.
    pub fn children_of(&self, id: RevisionId) -> Vec<&'a RevisionRecord> {
        if !self.graph.contains_node(id) {
            return Vec::new();
        }

        let mut children: Vec<&'a RevisionRecord> = self
            .graph
            .neighbors_directed(id, Direction::Outgoing)
            .filter_map(|child| self.get(child))
            .collect();
        children.sort_by_key(|child| child.ordering_key());
        children
    }

    /// Returns the revision `id` was forked from, if that link resolved.
    pub fn parent_of(&self, id: RevisionId) -> Option<&'a RevisionRecord> {
        if !self.graph.contains_node(id) {
            return None;
        }

        self.graph
            .neighbors_directed(id, Direction::Incoming)
            .next()
            .and_then(|parent| self.get(parent))
    }

    /// Iterates over the distinct revisions in input order.
    pub fn revisions(&self) -> impl Iterator<Item = &'a RevisionRecord> + '_ {
        self.by_id.values().copied()
    }

    /// Returns the number of distinct revisions.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the tree holds no revisions.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Returns the number of resolved fork links.
    pub fn links_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rev(id: i64, version: i64, forked_from: Option<i64>) -> RevisionRecord {
        RevisionRecord::new(id, version, forked_from.map(RevisionId::new))
    }

    fn ids(records: &[&RevisionRecord]) -> Vec<i64> {
        records.iter().map(|record| record.id().get()).collect()
    }

    #[test]
    fn test_empty_input_has_no_root() {
        let tree = LineageTree::reconstruct(&[]);

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.links_count(), 0);
    }

    #[test]
    fn test_links_children_to_parent() {
        let revisions = vec![rev(1, 1, None), rev(2, 2, Some(1)), rev(3, 3, Some(1))];
        let tree = LineageTree::reconstruct(&revisions);

        assert_eq!(tree.root().map(|r| r.id().get()), Some(1));
        assert_eq!(ids(&tree.children_of(RevisionId::new(1))), vec![2, 3]);
        assert_eq!(tree.parent_of(RevisionId::new(3)).map(|r| r.id().get()), Some(1));
        assert!(tree.parent_of(RevisionId::new(1)).is_none());
        assert_eq!(tree.links_count(), 2);
    }

    #[test]
    fn test_children_ordered_by_version_not_input_order() {
        let revisions = vec![
            rev(10, 4, Some(1)),
            rev(1, 1, None),
            rev(11, 2, Some(1)),
            rev(12, 3, Some(1)),
        ];
        let tree = LineageTree::reconstruct(&revisions);

        assert_eq!(ids(&tree.children_of(RevisionId::new(1))), vec![11, 12, 10]);
    }

    #[test]
    fn test_equal_versions_ordered_by_id() {
        let revisions = vec![rev(1, 1, None), rev(8, 2, Some(1)), rev(5, 2, Some(1))];
        let tree = LineageTree::reconstruct(&revisions);

        assert_eq!(ids(&tree.children_of(RevisionId::new(1))), vec![5, 8]);
    }

    #[test]
    fn test_dangling_reference_is_not_linked() {
        let revisions = vec![rev(1, 1, None), rev(2, 5, Some(999))];
        let tree = LineageTree::reconstruct(&revisions);

        assert!(tree.parent_of(RevisionId::new(2)).is_none());
        assert!(tree.children_of(RevisionId::new(999)).is_empty());
        assert_eq!(tree.links_count(), 0);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_self_reference_is_not_linked() {
        let revisions = vec![rev(1, 1, None), rev(2, 2, Some(2))];
        let tree = LineageTree::reconstruct(&revisions);

        assert!(tree.parent_of(RevisionId::new(2)).is_none());
        assert_eq!(tree.links_count(), 0);
    }

    #[test]
    fn test_lowest_version_wins_between_roots() {
        let revisions = vec![rev(1, 2, None), rev(2, 1, None)];
        let tree = LineageTree::reconstruct(&revisions);

        assert_eq!(tree.root().map(|r| r.id().get()), Some(2));
    }

    #[test]
    fn test_synthetic_root_without_parentless_revision() {
        let revisions = vec![rev(1, 3, Some(2)), rev(2, 2, Some(1)), rev(3, 7, Some(42))];
        let tree = LineageTree::reconstruct(&revisions);

        assert_eq!(tree.root().map(|r| r.id().get()), Some(2));
    }

    #[test]
    fn test_duplicate_ids_keep_first_occurrence() {
        let revisions = vec![rev(1, 1, None), rev(2, 2, Some(1)), rev(2, 9, None)];
        let tree = LineageTree::reconstruct(&revisions);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(RevisionId::new(2)).map(|r| r.version()), Some(2));
        assert_eq!(tree.root().map(|r| r.id().get()), Some(1));
    }

    #[test]
    fn test_revisions_iterate_in_input_order() {
        let revisions = vec![rev(3, 1, None), rev(1, 2, Some(3)), rev(2, 3, Some(3))];
        let tree = LineageTree::reconstruct(&revisions);

        let order: Vec<i64> = tree.revisions().map(|r| r.id().get()).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert!(tree.contains(RevisionId::new(2)));
        assert!(!tree.contains(RevisionId::new(4)));
    }
}
