//! Build-configuration assembly for the workbench preview server.
//!
//! At startup the dev server hands its bundled base configuration to
//! [`merge_build_config`] together with the project's configuration
//! directory. The call probes up to three files:
//!
//! 1. `./.babelrc` — optional relaxed-JSON transform settings, spliced into
//!    the first loader's `query`;
//! 2. `<config_dir>/config.js` — the mandatory preview bootstrap script,
//!    appended to `entry.preview`;
//! 3. `<config_dir>/build.config.{json5,json,toml}` — an optional override
//!    configuration, merged under the base with a fixed precedence rule.
//!
//! ```rust,no_run
//! use camino::Utf8Path;
//! use workbench_config::{BuildConfig, merge_build_config};
//!
//! # fn run() -> workbench_config::ConfigResult<()> {
//! let base = BuildConfig::default();
//! let config = merge_build_config(base, Utf8Path::new(".workbench"))?;
//! assert!(!config.entry.preview.is_empty());
//! # Ok(())
//! # }
//! ```

mod assemble;
mod error;
mod merge;
mod overrides;
mod paths;
mod schema;
mod transform;

#[cfg(test)]
mod test_support;

pub use assemble::{PREVIEW_ENTRY_FILE, merge_build_config};
pub use error::{ConfigError, ConfigResult};
pub use merge::merge_with_override;
pub use overrides::OVERRIDE_CANDIDATES;
pub use schema::{BuildConfig, EntryConfig, ExtraFields, Loader, ModuleConfig};
pub use transform::TRANSFORM_CONFIG_FILE;
