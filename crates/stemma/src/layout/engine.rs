//! Left-to-right lineage layout engine
//!
//! Levels map to columns and siblings stack within a column. Every column is
//! centered on `y = 0` on its own, so columns of different heights never
//! shift each other.

use log::{debug, trace};

use stemma_core::{
    geometry::{Point, Size, Spacing},
    identifier::RevisionId,
};

use crate::{
    config::LayoutConfig,
    layout::{LayoutEdge, LayoutNode, LineageLayout, NodeData, NodeKind},
    levels::LevelAssignment,
    lineage::LineageTree,
    selection::Selection,
};

/// Places revisions on a grid of level columns.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    node_size: Size,
    spacing: Spacing,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new engine with the default node size and spacing
    pub fn new() -> Self {
        let defaults = LayoutConfig::default();
        Self {
            node_size: defaults.node_size(),
            spacing: defaults.spacing(),
        }
    }

    /// Set the size of every node box
    pub fn with_node_size(mut self, node_size: Size) -> Self {
        self.node_size = node_size;
        self
    }

    /// Set the gaps between levels and between siblings
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Calculate the layout for a lineage whose levels are already assigned
    pub fn calculate(
        &self,
        tree: &LineageTree<'_>,
        levels: &LevelAssignment,
        selection: &Selection,
    ) -> LineageLayout {
        let root = tree.root().map(|revision| revision.id());

        let mut nodes = Vec::with_capacity(levels.len());
        for (level, ids) in levels.levels() {
            let x = self.level_x(level);
            let column_y = self.column_y_positions(ids.len());

            for (&id, y) in ids.iter().zip(column_y) {
                let Some(revision) = tree.get(id) else {
                    continue;
                };

                let kind = if Some(id) == root {
                    NodeKind::Root
                } else if levels.is_orphan(id) {
                    NodeKind::Orphan
                } else {
                    NodeKind::Descendant
                };

                let data = NodeData::new(
                    revision.clone(),
                    selection.is_current(id),
                    selection.is_highlighted(id),
                );

                trace!(id:% = id, level = level, x = x, y = y; "Node positioned");
                nodes.push(LayoutNode::new(Point::new(x, y), level, kind, data));
            }
        }

        let edges = Self::fork_edges(tree, nodes.iter().map(LayoutNode::id));

        debug!(nodes = nodes.len(), edges = edges.len(); "Layout calculated");

        LineageLayout::new(self.node_size, nodes, edges)
    }

    /// X coordinate of the column holding `level`
    fn level_x(&self, level: usize) -> f32 {
        let stride = f64::from(self.node_size.width()) + f64::from(self.spacing.horizontal());
        (level as f64 * stride) as f32
    }

    /// Y coordinates for `count` nodes stacked in one column, top to bottom
    ///
    /// The stack is centered around `y = 0`.
    fn column_y_positions(&self, count: usize) -> Vec<f32> {
        if count == 0 {
            return Vec::new();
        }

        let node_height = self.node_size.height();
        let step = node_height + self.spacing.vertical();
        let total_height =
            count as f32 * node_height + (count - 1) as f32 * self.spacing.vertical();
        let first_y = -total_height / 2.0 + node_height / 2.0;

        (0..count).map(|index| first_y + index as f32 * step).collect()
    }

    /// One edge per node whose forked-from link resolved, in node order
    fn fork_edges(
        tree: &LineageTree<'_>,
        node_ids: impl Iterator<Item = RevisionId>,
    ) -> Vec<LayoutEdge> {
        node_ids
            .filter_map(|child| {
                tree.parent_of(child)
                    .map(|parent| LayoutEdge::new(parent.id(), child))
            })
            .collect()
    }
}
