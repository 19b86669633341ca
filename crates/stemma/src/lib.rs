//! Stemma - lineage graphs for recipe revisions.
//!
//! Recipes are revised by forking: each revision records the revision it was
//! copied from. Stemma rebuilds the fork tree from those pointers, assigns
//! every revision a depth and lays the result out as a left-to-right diagram
//! of positioned nodes and connecting edges for a rendering surface to draw.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1. [`lineage::LineageTree::reconstruct`] - parent → child links and root choice.
//! 2. [`levels::LevelAssignment::assign`] - breadth-first depths, orphan fallback.
//! 3. [`layout::Engine::calculate`] - coordinates, node kinds and edges.
//!
//! [`LineageBuilder`] runs all three.

pub mod config;
pub mod layout;
pub mod levels;
pub mod lineage;

mod error;
mod selection;

pub use stemma_core::{geometry, identifier, revision};

pub use error::StemmaError;
pub use selection::Selection;

use log::{debug, info, trace, warn};

use config::AppConfig;
use layout::{Engine, LineageLayout};
use levels::LevelAssignment;
use lineage::LineageTree;
use revision::RevisionRecord;

/// Builder for turning revision lists into lineage layouts.
///
/// Holds configuration only, so one builder can serve any number of calls,
/// from any number of threads.
///
/// # Examples
///
/// ```rust
/// use stemma::{LineageBuilder, Selection, config::AppConfig};
///
/// let source = r#"[
///     {"id": 1, "version": 1, "forkedFrom": null, "name": "Tomato soup"},
///     {"id": 2, "version": 2, "forkedFrom": 1, "name": "Tomato soup (Fork)"}
/// ]"#;
///
/// let builder = LineageBuilder::new(AppConfig::default());
/// let revisions = builder.parse(source).expect("Failed to parse");
/// let layout = builder.build(&revisions, &Selection::new());
///
/// assert_eq!(layout.nodes().len(), 2);
/// assert_eq!(layout.edges().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LineageBuilder {
    config: AppConfig,
}

impl LineageBuilder {
    /// Create a new lineage builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout geometry
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON array of revision records.
    ///
    /// Accepts the recipe rows served by the persistence layer: `forkedFrom`
    /// may also be spelled `forked_from` or `root_id`, and fields the builder
    /// does not know are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StemmaError::Parse`] if `source` is not a JSON array of
    /// records with at least an integer `id`.
    pub fn parse(&self, source: &str) -> Result<Vec<RevisionRecord>, StemmaError> {
        info!("Parsing revisions");

        let revisions: Vec<RevisionRecord> = serde_json::from_str(source)
            .map_err(|err| StemmaError::new_parse_error(err, source))?;

        debug!(revisions = revisions.len(); "Revisions parsed successfully");
        trace!(revisions:?; "Parsed revisions");

        Ok(revisions)
    }

    /// Build the lineage layout of `revisions`.
    ///
    /// Never fails: dangling references, cycles, duplicate ids and competing
    /// roots are resolved to a best-effort layout. Empty input produces an
    /// empty layout.
    ///
    /// # Arguments
    ///
    /// * `revisions` - All revisions to draw, in any order
    /// * `selection` - Current and highlighted revisions to flag on the nodes
    pub fn build(&self, revisions: &[RevisionRecord], selection: &Selection) -> LineageLayout {
        info!(revisions = revisions.len(); "Building lineage layout");

        let tree = LineageTree::reconstruct(revisions);
        debug!(links = tree.links_count(); "Fork links resolved");

        if let Some(current) = selection.current() {
            if !tree.contains(current) {
                warn!(current:% = current; "Current revision is not part of the lineage");
            }
        }

        let levels = LevelAssignment::assign(&tree);

        let layout_config = self.config.layout();
        let engine = Engine::new()
            .with_node_size(layout_config.node_size())
            .with_spacing(layout_config.spacing());
        let layout = engine.calculate(&tree, &levels, selection);

        info!(
            nodes = layout.nodes().len(),
            edges = layout.edges().len();
            "Lineage layout built"
        );
        layout
    }

    /// Serialize a layout to pretty-printed JSON for the rendering surface.
    ///
    /// # Errors
    ///
    /// Returns [`StemmaError::Export`] if serialization fails.
    pub fn to_json(&self, layout: &LineageLayout) -> Result<String, StemmaError> {
        serde_json::to_string_pretty(layout).map_err(StemmaError::Export)
    }
}
