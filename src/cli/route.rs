//! CLI route: single route table and run context. Dispatches to the manifest
//! builder and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_generate_summary_json, format_generate_summary_text, format_hash_results_json,
    format_hash_results_text, HashLine,
};
use crate::config::{ConfigLoader, FsManifestConfig};
use crate::error::ApiError;
use crate::tree::builder::{self, GenerateRequest};
use crate::tree::hasher;
use std::path::PathBuf;
use tracing::{debug, info};

/// Rendered command result plus the number of entries that could not be processed
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub text: String,
    pub skipped: usize,
}

impl CommandOutput {
    fn complete(text: String) -> Self {
        Self { text, skipped: 0 }
    }
}

/// Runtime context for CLI execution: workspace and merged configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: FsManifestConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    /// Create run context from an already-loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: FsManifestConfig) -> Self {
        Self {
            workspace_root,
            config,
            color: false,
        }
    }

    /// Enable ANSI styling in text output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Execute a command and render its output.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        info!(
            command = command_name(command),
            workspace = %self.workspace_root.display(),
            "Executing command"
        );
        match command {
            Commands::Generate {
                directory,
                output,
                keep_going,
                follow_symlinks,
                no_atomic,
                format,
            } => {
                check_format(format)?;
                let mut scan = self.config.scan.clone();
                if let Some(directory) = directory {
                    scan.root = Some(directory.clone());
                }
                if let Some(output) = output {
                    scan.output = output.clone();
                }
                scan.keep_going |= *keep_going;
                scan.follow_symlinks |= *follow_symlinks;
                if *no_atomic {
                    scan.atomic_write = false;
                }
                scan.validate().map_err(ApiError::ConfigError)?;
                debug!(?scan, "Resolved scan configuration");

                let root = scan.root.clone().ok_or_else(|| {
                    ApiError::ConfigError(
                        "No directory to scan: pass -d/--directory or set scan.root".to_string(),
                    )
                })?;

                let request = GenerateRequest {
                    root,
                    output: scan.output.clone(),
                    atomic_write: scan.atomic_write,
                    follow_symlinks: scan.follow_symlinks,
                    error_policy: scan.error_policy(),
                };
                let summary = builder::generate(&request)?;

                let text = if format == "json" {
                    format_generate_summary_json(&summary)?
                } else {
                    format_generate_summary_text(&summary, self.color)
                };
                Ok(CommandOutput {
                    text,
                    skipped: summary.failures.len(),
                })
            }
            Commands::Hash { files, format } => {
                check_format(format)?;
                let mut lines = Vec::with_capacity(files.len());
                for path in files {
                    let digest = hasher::hash_file(path)?;
                    lines.push(HashLine {
                        path: path.clone(),
                        digest,
                    });
                }
                let text = if format == "json" {
                    format_hash_results_json(&lines)?
                } else {
                    format_hash_results_text(&lines)
                };
                Ok(CommandOutput::complete(text))
            }
        }
    }
}

fn check_format(format: &str) -> Result<(), ApiError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(ApiError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
