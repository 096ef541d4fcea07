//! CLI argument parsing for sy-board
//!
//! Running with no arguments writes the three documents into the current
//! directory. Every flag is optional and never changes document content.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

pub use output::OutputFormat;

/// Precompute Scotland Yard board adjacency and distance tables as XML
#[derive(Parser, Debug)]
#[command(name = "sy-board")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to write the XML documents into
    #[arg(long, short, default_value = ".")]
    pub out_dir: PathBuf,

    /// Summary format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress the summary
    #[arg(long, short)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, sy_board_core=trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
