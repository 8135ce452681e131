use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fragmap",
    about = "Structural fragment classification recommender",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidate classes for each noise fragment in an upload file
    Recommend {
        /// Upload JSON with top-level `noise` and `clusters` keys
        input: PathBuf,

        /// Fallback pattern catalog (JSON array of {class, structure})
        #[arg(long, env = "FRAGMAP_PATTERNS")]
        patterns: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Create a fragmap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
