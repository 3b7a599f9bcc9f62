//! CLI parse: clap types for fsmanifest. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fsmanifest - checksum manifests for directory trees
#[derive(Parser, Debug)]
#[command(name = "fsmanifest", version)]
#[command(about = "Generate a checksum manifest for every file under a directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for fsmanifest.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, short = 'v', default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash every file under a directory and write the manifest
    Generate {
        /// Directory to scan (required unless scan.root is set in config)
        #[arg(short = 'd', long, value_name = "DIR")]
        directory: Option<PathBuf>,

        /// Manifest output path (default: scan.output from config, else ./manifest.json)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Record unreadable files and continue; exits non-zero if any were skipped
        #[arg(long)]
        keep_going: bool,

        /// Follow symbolic links (cycles are reported as errors)
        #[arg(long)]
        follow_symlinks: bool,

        /// Write directly to the output path instead of temp file + rename
        #[arg(long)]
        no_atomic: bool,

        /// Summary format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the checksum of individual files
    Hash {
        /// Files to hash
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
