//! Top-level assembly of the bundler configuration.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::merge::merge_with_override;
use crate::overrides::load_override;
use crate::paths::canonicalise;
use crate::schema::BuildConfig;
use crate::transform::apply_transform_config;

/// Preview bootstrap script expected inside the configuration directory.
pub const PREVIEW_ENTRY_FILE: &str = "config.js";

/// Assemble the bundler configuration for the preview server.
///
/// Three filesystem probes run in a fixed order:
///
/// 1. `./.babelrc` (optional): parsed as relaxed JSON and assigned to the
///    first loader's `query`.
/// 2. `<config_dir>/config.js` (required): its canonical path is appended
///    to `entry.preview`.
/// 3. `<config_dir>/build.config.{json5,json,toml}` (optional): the first
///    existing candidate is parsed and merged under `base` per
///    [`merge_with_override`].
///
/// `base` is taken by value; the augmented or merged configuration is
/// returned. On every successful call `entry.preview` gains exactly one
/// entry before the merge decision is made.
///
/// # Errors
///
/// Returns [`ConfigError::TransformConfig`] when `.babelrc` exists but does
/// not parse, [`ConfigError::MissingPreviewConfig`] when `config.js` is
/// absent, and [`ConfigError::File`] when a file that exists cannot be read
/// or the override cannot be parsed. All failures are fatal; there are no
/// fallback defaults.
pub fn merge_build_config(
    mut base: BuildConfig,
    config_dir: &Utf8Path,
) -> ConfigResult<BuildConfig> {
    apply_transform_config(&mut base)?;

    let preview = preview_entry(config_dir)?;
    base.entry.preview.push(preview);

    match load_override(config_dir)? {
        Some(custom) => Ok(merge_with_override(base, custom)),
        None => Ok(base),
    }
}

/// Resolve the mandatory preview bootstrap script inside `config_dir`.
fn preview_entry(config_dir: &Utf8Path) -> ConfigResult<Utf8PathBuf> {
    let path = config_dir.join(PREVIEW_ENTRY_FILE);
    if !path.is_file() {
        return Err(ConfigError::MissingPreviewConfig {
            config_dir: config_dir.to_owned(),
        });
    }
    canonicalise(&path)
}
