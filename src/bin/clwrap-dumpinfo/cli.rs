//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// List the Visual C++ compilers and Windows SDKs clwrap can find
#[derive(Parser)]
#[command(name = "clwrap-dumpinfo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Read installations from a registry snapshot file
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,
}
