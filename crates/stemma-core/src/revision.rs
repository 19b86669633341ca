//! Revision records as supplied by the persistence layer.
//!
//! A [`RevisionRecord`] is one stored snapshot of a recipe. Only `id`,
//! `version` and `forked_from` drive the lineage; everything else lives in
//! the opaque [`RevisionPayload`] and is handed to the renderer untouched.

use serde::{Deserialize, Serialize};

use crate::identifier::RevisionId;

/// Lifecycle status of a recipe revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevisionStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

/// Display data carried alongside a revision.
///
/// Nothing here influences the layout. `forked_from_name` is filled in by
/// the caller when it wants the parent's name shown on a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevisionPayload {
    pub name: String,
    pub status: RevisionStatus,
    #[serde(alias = "is_public")]
    pub is_public: bool,
    #[serde(alias = "owner_id", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(alias = "created_by", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(alias = "updated_by", skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(alias = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(alias = "forked_from_name", skip_serializing_if = "Option::is_none")]
    pub forked_from_name: Option<String>,
}

/// One revision of a recipe and the revision it was forked from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionRecord {
    id: RevisionId,
    #[serde(default = "default_version")]
    version: i64,
    #[serde(default, alias = "forked_from", alias = "rootId", alias = "root_id")]
    forked_from: Option<RevisionId>,
    #[serde(flatten)]
    payload: RevisionPayload,
}

fn default_version() -> i64 {
    1
}

impl RevisionRecord {
    /// Creates a record with an empty payload.
    pub fn new(id: impl Into<RevisionId>, version: i64, forked_from: Option<RevisionId>) -> Self {
        Self {
            id: id.into(),
            version,
            forked_from,
            payload: RevisionPayload::default(),
        }
    }

    /// Attaches display data to this record (builder style).
    pub fn with_payload(mut self, payload: RevisionPayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn id(&self) -> RevisionId {
        self.id
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    /// Returns the id this revision was copied from, if any.
    pub fn forked_from(&self) -> Option<RevisionId> {
        self.forked_from
    }

    pub fn payload(&self) -> &RevisionPayload {
        &self.payload
    }

    /// Returns the key used wherever revisions need a stable order.
    ///
    /// Version first, with the id breaking ties between equal versions.
    pub fn ordering_key(&self) -> (i64, RevisionId) {
        (self.version, self.id)
    }
}
