//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Interactive terminal review tool for AI-suggested code edits
#[derive(Parser, Debug)]
#[command(name = "redline", version, about)]
pub struct Cli {
    /// Source file the proposed edits target
    pub file: PathBuf,

    /// JSON file with the proposed edits
    pub proposals: PathBuf,

    /// Keep accepted edits in memory instead of saving after each one
    #[arg(long)]
    pub no_auto_save: bool,

    /// Do not highlight the target range in the document view
    #[arg(long)]
    pub no_decorations: bool,
}
