//! Config loading facade: assembles sources in precedence order.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::FsManifestConfig;
use config::{ConfigError, Environment, File};
use std::path::{Path, PathBuf};

/// Environment variable prefix for config overrides, e.g. `FSMANIFEST__SCAN__OUTPUT`
pub const ENV_PREFIX: &str = "FSMANIFEST";

/// Loads [`FsManifestConfig`] from defaults, files, and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace directory.
    ///
    /// Order (lowest to highest): defaults, global file, workspace files,
    /// environment.
    pub fn load(workspace_root: &Path) -> Result<FsManifestConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from one explicit file, skipping global and workspace files.
    pub fn load_from_file(path: &Path) -> Result<FsManifestConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Global config file location, if the platform has one.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
