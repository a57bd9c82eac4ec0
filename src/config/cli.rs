use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "labor-stats-loader")]
#[command(about = "Fetch labor market statistics and prerender the page data")]
pub struct CliArgs {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// URL of the labor statistics document
    #[arg(long)]
    pub source_url: Option<String>,

    /// Directory the page data file is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Name of the page data file
    #[arg(long)]
    pub output_file: Option<String>,

    /// Print the page data to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Write compact JSON
    #[arg(long)]
    pub compact: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
