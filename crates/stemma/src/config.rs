//! Configuration types for Stemma lineage layouts.
//!
//! This module provides configuration structures that control how lineage
//! graphs are laid out. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LayoutConfig`] - Node box size and the gaps between boxes.
//!
//! # Example
//!
//! ```
//! # use stemma::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().node_size().width(), 240.0);
//! ```

use serde::Deserialize;

use stemma_core::geometry::{Size, Spacing};

use crate::StemmaError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Geometry settings for the lineage layout.
///
/// Always valid once constructed: node dimensions are positive and finite,
/// spacings are non-negative and finite. Deserialization runs the same
/// checks as [`LayoutConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "LayoutConfigFile")]
pub struct LayoutConfig {
    node_size: Size,
    spacing: Spacing,
}

impl LayoutConfig {
    /// Creates a validated [`LayoutConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`StemmaError::Config`] if a node dimension is not a positive
    /// finite number or a spacing is negative or not finite.
    pub fn new(node_size: Size, spacing: Spacing) -> Result<Self, StemmaError> {
        for (name, value) in [
            ("node_width", node_size.width()),
            ("node_height", node_size.height()),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StemmaError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("horizontal_spacing", spacing.horizontal()),
            ("vertical_spacing", spacing.vertical()),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StemmaError::Config(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        Ok(Self { node_size, spacing })
    }

    /// Returns the size of every node box.
    pub fn node_size(&self) -> Size {
        self.node_size
    }

    /// Returns the gaps between levels and between siblings.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: Size::new(240.0, 96.0),
            spacing: Spacing::new(80.0, 40.0),
        }
    }
}

/// On-disk shape of the `[layout]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct LayoutConfigFile {
    node_width: f32,
    node_height: f32,
    horizontal_spacing: f32,
    vertical_spacing: f32,
}

impl Default for LayoutConfigFile {
    fn default() -> Self {
        let defaults = LayoutConfig::default();
        Self {
            node_width: defaults.node_size.width(),
            node_height: defaults.node_size.height(),
            horizontal_spacing: defaults.spacing.horizontal(),
            vertical_spacing: defaults.spacing.vertical(),
        }
    }
}

impl TryFrom<LayoutConfigFile> for LayoutConfig {
    type Error = StemmaError;

    fn try_from(file: LayoutConfigFile) -> Result<Self, Self::Error> {
        Self::new(
            Size::new(file.node_width, file.node_height),
            Spacing::new(file.horizontal_spacing, file.vertical_spacing),
        )
    }
}
