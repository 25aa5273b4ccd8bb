//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the shopping session demo
#[derive(Debug, Parser)]
pub struct SessionArgs {
    /// Catalog fixture to load instead of the built-in demo catalog
    #[clap(short, long)]
    pub catalog: Option<PathBuf>,

    /// Search query submitted from the home screen
    #[clap(short, long, default_value = "rtx")]
    pub query: String,
}
