//! CLI logic for the Stemma lineage tool.
//!
//! This module contains the core CLI logic: read a revision list, build its
//! lineage layout and write the layout as JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use stemma::{LineageBuilder, Selection, StemmaError, identifier::RevisionId};

/// Run the Stemma CLI application
///
/// This function processes the input file through the lineage pipeline
/// and writes the resulting layout JSON to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StemmaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Serialization errors
pub fn run(args: &Args) -> Result<(), StemmaError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing revisions"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let selection = selection_from_args(args);

    let builder = LineageBuilder::new(app_config);
    let revisions = builder.parse(&source)?;
    let layout = builder.build(&revisions, &selection);
    let json = builder.to_json(&layout)?;

    // Write output file
    fs::write(&args.output, json)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}

fn selection_from_args(args: &Args) -> Selection {
    let selection =
        Selection::new().with_highlighted(args.highlight.iter().copied().map(RevisionId::new));

    match args.current {
        Some(current) => selection.with_current(RevisionId::new(current)),
        None => selection,
    }
}
