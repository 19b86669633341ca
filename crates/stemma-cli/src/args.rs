//! Command-line argument definitions for the Stemma CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, selection flags, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Stemma lineage tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON file holding the revision list
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output layout JSON file
    #[arg(short, long, default_value = "lineage.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Id of the revision currently being viewed
    #[arg(long)]
    pub current: Option<i64>,

    /// Ids of revisions to highlight, comma separated
    #[arg(long, value_delimiter = ',')]
    pub highlight: Vec<i64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
