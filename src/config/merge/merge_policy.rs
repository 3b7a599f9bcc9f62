//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// `scan.root` has no default: it comes from a config file or `--directory`.
///
/// Later sources override earlier ones key by key: defaults, global file,
/// workspace files, then `FSMANIFEST__*` environment variables.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scan.output", crate::manifest::DEFAULT_MANIFEST_NAME)?
        .set_default("scan.follow_symlinks", false)?
        .set_default("scan.keep_going", false)?
        .set_default("scan.atomic_write", true)
}
