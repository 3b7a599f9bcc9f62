//! Workspace config file source: fsmanifest.toml and fsmanifest.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Base workspace config file name
pub const WORKSPACE_CONFIG_FILE: &str = "fsmanifest.toml";

/// Environment-specific config file for `env_name`
pub fn env_config_path(workspace_root: &Path, env_name: &str) -> PathBuf {
    workspace_root.join(format!("fsmanifest.{}.toml", env_name))
}

/// Add workspace config files to builder.
/// Precedence: fsmanifest.toml (base) then fsmanifest.{FSMANIFEST_ENV}.toml (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let env_name = std::env::var("FSMANIFEST_ENV").unwrap_or_else(|_| "development".to_string());

    let mut builder = builder;

    let base_config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path.as_path()).required(false));
    }

    let env_config_path = env_config_path(workspace_root, &env_name);
    if env_config_path.exists() {
        builder = builder.add_source(File::from(env_config_path.as_path()).required(false));
    }

    Ok(builder)
}
