//! Property tests for the lineage pipeline.
//!
//! Revision sets are generated with arbitrary versions and forked-from
//! pointers, including dangling references, self references, cycles and
//! several parentless revisions.

use std::collections::HashSet;

use proptest::prelude::*;

use stemma::{
    LineageBuilder, Selection,
    identifier::RevisionId,
    layout::{LineageLayout, NodeKind},
    levels::MAX_ORPHAN_LEVEL,
    revision::RevisionRecord,
};

// ===================
// Strategies
// ===================

/// Revisions with ids `1..=n`; pointers may reach past `n` to dangle and
/// versions may be zero, negative or huge.
fn revisions_strategy() -> impl Strategy<Value = Vec<RevisionRecord>> {
    prop::collection::vec((version_strategy(), prop::option::weighted(0.8, 1i64..40)), 0..30).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(index, (version, forked_from))| {
                    RevisionRecord::new(
                        index as i64 + 1,
                        version,
                        forked_from.map(RevisionId::new),
                    )
                })
                .collect()
        },
    )
}

/// Mostly small versions, sometimes at either end of the integer range.
fn version_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => -3i64..8,
        1 => (i64::MAX - 4)..=i64::MAX,
        1 => Just(i64::MIN),
    ]
}

/// The same revision set twice, the second in a shuffled order.
fn shuffled_pair_strategy() -> impl Strategy<Value = (Vec<RevisionRecord>, Vec<RevisionRecord>)> {
    revisions_strategy()
        .prop_flat_map(|revisions| (Just(revisions.clone()), Just(revisions).prop_shuffle()))
}

fn build(revisions: &[RevisionRecord]) -> LineageLayout {
    LineageBuilder::default().build(revisions, &Selection::new())
}

// ===================
// Property Test Functions
// ===================

/// Input order must not change any position, kind or edge.
fn check_build_is_deterministic(
    revisions: &[RevisionRecord],
    shuffled: &[RevisionRecord],
) -> Result<(), TestCaseError> {
    prop_assert_eq!(build(revisions), build(shuffled));
    Ok(())
}

/// Every input id appears exactly once among the nodes.
fn check_nodes_are_complete(revisions: &[RevisionRecord]) -> Result<(), TestCaseError> {
    let layout = build(revisions);

    let input: HashSet<RevisionId> = revisions.iter().map(|r| r.id()).collect();
    let output: Vec<RevisionId> = layout.nodes().iter().map(|n| n.id()).collect();
    let output_set: HashSet<RevisionId> = output.iter().copied().collect();

    prop_assert_eq!(output.len(), revisions.len());
    prop_assert_eq!(output_set, input);
    Ok(())
}

/// Edges only connect nodes of the layout, never a node to itself.
fn check_edges_are_valid(revisions: &[RevisionRecord]) -> Result<(), TestCaseError> {
    let layout = build(revisions);
    let node_ids: HashSet<RevisionId> = layout.nodes().iter().map(|n| n.id()).collect();

    let mut seen = HashSet::new();
    for edge in layout.edges() {
        prop_assert!(node_ids.contains(&edge.source_id()));
        prop_assert!(node_ids.contains(&edge.target_id()));
        prop_assert_ne!(edge.source_id(), edge.target_id());
        prop_assert!(seen.insert(edge.id()), "duplicate edge {}", edge.id());
    }
    Ok(())
}

/// Nodes sharing a column are at least one node height apart.
fn check_columns_do_not_overlap(revisions: &[RevisionRecord]) -> Result<(), TestCaseError> {
    let layout = build(revisions);
    let node_height = layout.node_size().height();

    for (i, a) in layout.nodes().iter().enumerate() {
        for b in &layout.nodes()[i + 1..] {
            if a.position().x() == b.position().x() {
                let gap = (a.position().y() - b.position().y()).abs();
                prop_assert!(
                    gap >= node_height - 0.01,
                    "nodes {} and {} overlap (gap {})",
                    a.id(),
                    b.id(),
                    gap
                );
                let overlapping = a
                    .position()
                    .to_bounds(layout.node_size())
                    .overlaps(&b.position().to_bounds(layout.node_size()));
                prop_assert!(!overlapping);
            }
        }
    }
    Ok(())
}

/// Exactly one root, at level 0 and x = 0.
fn check_root_is_at_origin_level(revisions: &[RevisionRecord]) -> Result<(), TestCaseError> {
    let layout = build(revisions);
    let roots: Vec<_> = layout
        .nodes()
        .iter()
        .filter(|n| n.kind() == NodeKind::Root)
        .collect();

    if revisions.is_empty() {
        prop_assert!(roots.is_empty());
        return Ok(());
    }

    prop_assert_eq!(roots.len(), 1);
    prop_assert_eq!(roots[0].level(), 0);
    prop_assert_eq!(roots[0].position().x(), 0.0);
    Ok(())
}

/// A revision reached through a fork link sits one level right of its parent.
fn check_descendants_follow_parent(revisions: &[RevisionRecord]) -> Result<(), TestCaseError> {
    let layout = build(revisions);

    for edge in layout.edges() {
        let target = layout.node(edge.target_id()).unwrap();
        if target.kind() == NodeKind::Descendant {
            let source = layout.node(edge.source_id()).unwrap();
            prop_assert_eq!(target.level(), source.level() + 1);
        }
    }
    Ok(())
}

/// Orphans sit at `version - 1`, clamped to the supported level range.
fn check_orphans_placed_by_version(revisions: &[RevisionRecord]) -> Result<(), TestCaseError> {
    let layout = build(revisions);

    for node in layout.nodes() {
        if node.kind() == NodeKind::Orphan {
            let version = node.data().revision().version();
            let expected = version.saturating_sub(1).clamp(0, MAX_ORPHAN_LEVEL as i64) as usize;
            prop_assert_eq!(node.level(), expected);
        }
    }
    Ok(())
}

// ===================
// Property Tests
// ===================

proptest! {
    #[test]
    fn prop_build_is_deterministic((revisions, shuffled) in shuffled_pair_strategy()) {
        check_build_is_deterministic(&revisions, &shuffled)?;
    }

    #[test]
    fn prop_nodes_are_complete(revisions in revisions_strategy()) {
        check_nodes_are_complete(&revisions)?;
    }

    #[test]
    fn prop_edges_are_valid(revisions in revisions_strategy()) {
        check_edges_are_valid(&revisions)?;
    }

    #[test]
    fn prop_columns_do_not_overlap(revisions in revisions_strategy()) {
        check_columns_do_not_overlap(&revisions)?;
    }

    #[test]
    fn prop_root_is_at_origin_level(revisions in revisions_strategy()) {
        check_root_is_at_origin_level(&revisions)?;
    }

    #[test]
    fn prop_descendants_follow_parent(revisions in revisions_strategy()) {
        check_descendants_follow_parent(&revisions)?;
    }

    #[test]
    fn prop_orphans_placed_by_version(revisions in revisions_strategy()) {
        check_orphans_placed_by_version(&revisions)?;
    }
}
