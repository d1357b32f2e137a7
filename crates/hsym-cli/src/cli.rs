use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hsym_config::ScanConfig;
use hsym_scan::{ScanOptions, WalkMode};

/// Output mode for the symbol listing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Top-level CLI parser for the `hsym` binary.
#[derive(Debug, Parser)]
#[command(
    name = "hsym",
    version,
    about = "List the symbols declared in Objective-C and C headers"
)]
pub struct Cli {
    /// Directories (or single files) to scan
    #[arg(required = true, value_name = "DIRS")]
    pub dirs: Vec<PathBuf>,

    /// Flag likely false positives after the listing
    #[arg(long)]
    pub check: bool,

    /// File extension to scan; repeatable, replaces the configured list
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Number of files processed concurrently
    #[arg(short = 'j', long, value_name = "N")]
    pub workers: Option<usize>,

    /// Honour .gitignore and .hsymignore, skip hidden entries
    #[arg(long)]
    pub respect_ignore: bool,

    /// Group each file's symbols by the matcher that found them
    #[arg(long)]
    pub by_kind: bool,

    /// Output format: json, table, raw
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress bar)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge command-line flags over the loaded scan configuration.
    #[must_use]
    pub fn scan_options(&self, config: &ScanConfig) -> ScanOptions {
        let extensions = if self.extensions.is_empty() {
            config.extensions.clone()
        } else {
            self.extensions.clone()
        };
        let mode = if self.respect_ignore || config.respect_ignore {
            WalkMode::RespectIgnore
        } else {
            WalkMode::Raw
        };
        ScanOptions {
            extensions,
            workers: self.workers.unwrap_or(config.workers),
            mode,
        }
    }
}
