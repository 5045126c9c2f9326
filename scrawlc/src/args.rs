//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

/// What font can we cut for you today?
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct Args {
    /// Directory the font files and companion assets are written to.
    #[arg(short, long)]
    #[clap(default_value = "fontface-set")]
    pub output_dir: PathBuf,

    /// Family name stamped into the name table and the file names.
    #[arg(short, long)]
    #[clap(default_value = "Death Ledger")]
    pub family: String,

    /// Skip the stylesheet/specimen/README companion files.
    #[arg(long)]
    pub skip_assets: bool,
}

impl Args {
    /// Arguments for tests and library callers.
    pub fn for_output_dir(output_dir: impl Into<PathBuf>) -> Args {
        Args {
            output_dir: output_dir.into(),
            family: "Death Ledger".to_string(),
            skip_assets: false,
        }
    }
}
