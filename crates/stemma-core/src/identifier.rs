//! Identifiers for revisions and the edges between them.
//!
//! Revision ids are the numeric primary keys handed out by the persistence
//! layer. An [`EdgeId`] is derived from its two endpoints, so the same fork
//! relation always produces the same edge id.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Numeric identifier of a recipe revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevisionId(i64);

impl RevisionId {
    /// Creates a new revision id from its raw value.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RevisionId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a directed parent → child edge.
///
/// Displayed and serialized as `e{source}-{target}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    source: RevisionId,
    target: RevisionId,
}

impl EdgeId {
    /// Creates the id of the edge running from `source` to `target`.
    pub fn new(source: RevisionId, target: RevisionId) -> Self {
        Self { source, target }
    }

    /// Returns the parent end of the edge.
    pub fn source(self) -> RevisionId {
        self.source
    }

    /// Returns the child end of the edge.
    pub fn target(self) -> RevisionId {
        self.target
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}-{}", self.source, self.target)
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_display() {
        let id = EdgeId::new(RevisionId::new(1), RevisionId::new(12));
        assert_eq!(id.to_string(), "e1-12");
    }

    #[test]
    fn test_edge_id_is_directed() {
        let a = RevisionId::new(3);
        let b = RevisionId::new(4);
        assert_ne!(EdgeId::new(a, b), EdgeId::new(b, a));
    }

    #[test]
    fn test_revision_id_serde_is_transparent() {
        let id: RevisionId = serde_json::from_str("42").unwrap();
        assert_eq!(id, RevisionId::new(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_edge_id_serializes_as_string() {
        let id = EdgeId::new(RevisionId::new(-1), RevisionId::new(2));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""e-1-2""#);
    }
}
