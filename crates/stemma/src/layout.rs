//! Rendering-ready lineage layout.
//!
//! [`Engine`] turns a [`LevelAssignment`](crate::levels::LevelAssignment)
//! into a [`LineageLayout`]: one [`LayoutNode`] per revision with its center
//! position, and one [`LayoutEdge`] per resolved fork. The rendering surface
//! consumes these as boxes and connecting lines.

mod engine;

pub use engine::Engine;

use serde::Serialize;

use stemma_core::{
    geometry::{Bounds, Point, Size},
    identifier::{EdgeId, RevisionId},
    revision::RevisionRecord,
};

/// How a node ended up in the layout.
///
/// Renderers pick a node component per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The revision at level 0.
    Root,
    /// A revision reached from the root through fork links.
    Descendant,
    /// A revision outside the root's lineage, placed by its version.
    Orphan,
}

/// Data a renderer needs to draw one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    revision: RevisionRecord,
    is_current: bool,
    highlighted: bool,
}

impl NodeData {
    pub(crate) fn new(revision: RevisionRecord, is_current: bool, highlighted: bool) -> Self {
        Self {
            revision,
            is_current,
            highlighted,
        }
    }

    /// Returns the input record this node was built from.
    pub fn revision(&self) -> &RevisionRecord {
        &self.revision
    }

    /// Returns true if this is the revision the caller is viewing.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }
}

/// A positioned revision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    id: RevisionId,
    position: Point,
    level: usize,
    kind: NodeKind,
    data: NodeData,
}

impl LayoutNode {
    pub(crate) fn new(position: Point, level: usize, kind: NodeKind, data: NodeData) -> Self {
        Self {
            id: data.revision().id(),
            position,
            level,
            kind,
            data,
        }
    }

    pub fn id(&self) -> RevisionId {
        self.id
    }

    /// Returns the center of the node box.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }
}

/// A directed parent → child fork link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEdge {
    id: EdgeId,
    source_id: RevisionId,
    target_id: RevisionId,
}

impl LayoutEdge {
    pub(crate) fn new(source_id: RevisionId, target_id: RevisionId) -> Self {
        Self {
            id: EdgeId::new(source_id, target_id),
            source_id,
            target_id,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the revision that was forked.
    pub fn source_id(&self) -> RevisionId {
        self.source_id
    }

    /// Returns the revision created by the fork.
    pub fn target_id(&self) -> RevisionId {
        self.target_id
    }
}

/// The complete output of one build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageLayout {
    node_size: Size,
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
}

impl LineageLayout {
    pub(crate) fn new(node_size: Size, nodes: Vec<LayoutNode>, edges: Vec<LayoutEdge>) -> Self {
        Self {
            node_size,
            nodes,
            edges,
        }
    }

    /// Returns the size every node box is laid out with.
    pub fn node_size(&self) -> Size {
        self.node_size
    }

    /// Returns the nodes ordered by level, then top to bottom.
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    /// Looks up the node of revision `id`.
    pub fn node(&self, id: RevisionId) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Returns true when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the area covered by all node boxes, or `None` if empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.nodes
            .iter()
            .map(|node| node.position().to_bounds(self.node_size))
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Hands the record of node `id` to the caller's navigation callback.
    ///
    /// Returns `false` without calling `navigate` if no such node exists.
    pub fn activate<F>(&self, id: RevisionId, navigate: F) -> bool
    where
        F: FnOnce(&RevisionRecord),
    {
        match self.node(id) {
            Some(node) => {
                navigate(node.data().revision());
                true
            }
            None => false,
        }
    }
}
