//! Level assignment for a reconstructed lineage.
//!
//! Levels come from a breadth-first traversal starting at the root, so a
//! revision sits exactly one level right of the revision it was forked from.
//! Revisions the traversal never reaches (orphans) are placed at
//! `version - 1`, clamped to `0..=MAX_ORPHAN_LEVEL`.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use log::{debug, trace, warn};

use stemma_core::{identifier::RevisionId, revision::RevisionRecord};

use crate::lineage::LineageTree;

/// Rightmost level the orphan fallback places a revision at.
///
/// Orphans with larger versions share this column and stack vertically, which
/// keeps every column at an x coordinate an `f32` can still tell apart.
pub const MAX_ORPHAN_LEVEL: usize = 1 << 16;

/// Depth of every revision plus the ordered revisions of each depth.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LevelAssignment {
    level_of: HashMap<RevisionId, usize>,
    levels: BTreeMap<usize, Vec<RevisionId>>,
    orphans: HashSet<RevisionId>,
}

impl LevelAssignment {
    /// Assigns a level to every revision of `tree`.
    ///
    /// Within a level, revisions reached by the traversal come first in
    /// visiting order, followed by orphans ordered by version.
    pub fn assign(tree: &LineageTree<'_>) -> Self {
        let mut assignment = Self::default();

        let Some(root) = tree.root() else {
            return assignment;
        };

        // Perform BFS to assign levels
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back((root, 0));

        while let Some((revision, level)) = queue.pop_front() {
            if !visited.insert(revision.id()) {
                continue;
            }

            trace!(id:% = revision.id(), level = level; "Revision reached");
            assignment.place(revision.id(), level);

            for child in tree.children_of(revision.id()) {
                if !visited.contains(&child.id()) {
                    queue.push_back((child, level + 1));
                }
            }
        }

        let mut orphans: Vec<&RevisionRecord> = tree
            .revisions()
            .filter(|revision| !visited.contains(&revision.id()))
            .collect();
        orphans.sort_by_key(|revision| revision.ordering_key());

        if !orphans.is_empty() {
            warn!(
                count = orphans.len();
                "Revisions unreachable from the root, placing them by version"
            );
        }

        for orphan in orphans {
            let level = Self::orphan_level(orphan);
            trace!(id:% = orphan.id(), level = level; "Orphan placed");
            assignment.place(orphan.id(), level);
            assignment.orphans.insert(orphan.id());
        }

        debug!(
            revisions = assignment.len(),
            levels = assignment.levels.len(),
            orphans = assignment.orphans.len();
            "Levels assigned"
        );

        assignment
    }

    /// Fallback level for a revision outside the root's lineage.
    fn orphan_level(revision: &RevisionRecord) -> usize {
        let level = revision.version().saturating_sub(1).max(0);
        usize::try_from(level).map_or(MAX_ORPHAN_LEVEL, |level| level.min(MAX_ORPHAN_LEVEL))
    }

    fn place(&mut self, id: RevisionId, level: usize) {
        self.level_of.insert(id, level);
        self.levels.entry(level).or_default().push(id);
    }

    /// Returns the level of `id`, or `None` if it was not part of the input.
    pub fn level_of(&self, id: RevisionId) -> Option<usize> {
        self.level_of.get(&id).copied()
    }

    /// Iterates over occupied levels in ascending order.
    ///
    /// Levels may be sparse when orphans sit far to the right.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &[RevisionId])> {
        self.levels
            .iter()
            .map(|(&level, ids)| (level, ids.as_slice()))
    }

    /// Returns true if `id` was placed by the orphan fallback.
    pub fn is_orphan(&self, id: RevisionId) -> bool {
        self.orphans.contains(&id)
    }

    /// Returns the number of revisions that received a level.
    pub fn len(&self) -> usize {
        self.level_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.level_of.is_empty()
    }
}
