//! Per-call view state passed into a build.

use std::collections::HashSet;

use stemma_core::identifier::RevisionId;

/// Which revisions the caller wants flagged on the rendered nodes.
///
/// The builder only copies these flags onto matching nodes. Ids that are
/// not part of the input are ignored.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<RevisionId>,
    highlighted: HashSet<RevisionId>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as the revision currently being viewed.
    pub fn with_current(mut self, id: RevisionId) -> Self {
        self.current = Some(id);
        self
    }

    /// Adds `ids` to the highlighted set.
    pub fn with_highlighted(mut self, ids: impl IntoIterator<Item = RevisionId>) -> Self {
        self.highlighted.extend(ids);
        self
    }

    pub fn current(&self) -> Option<RevisionId> {
        self.current
    }

    pub fn is_current(&self, id: RevisionId) -> bool {
        self.current == Some(id)
    }

    pub fn is_highlighted(&self, id: RevisionId) -> bool {
        self.highlighted.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_flags_nothing() {
        let selection = Selection::new();

        assert!(selection.current().is_none());
        assert!(!selection.is_current(RevisionId::new(1)));
        assert!(!selection.is_highlighted(RevisionId::new(1)));
    }

    #[test]
    fn test_builder_sets_flags() {
        let selection = Selection::new()
            .with_current(RevisionId::new(3))
            .with_highlighted([RevisionId::new(1), RevisionId::new(2)]);

        assert!(selection.is_current(RevisionId::new(3)));
        assert!(!selection.is_current(RevisionId::new(1)));
        assert!(selection.is_highlighted(RevisionId::new(2)));
        assert!(!selection.is_highlighted(RevisionId::new(3)));
    }
}
