//! Optional transform-config augmentation from the project root.

use camino::Utf8Path;
use serde_json::Value;

use crate::error::{ConfigError, ConfigResult, file_error};
use crate::schema::BuildConfig;

/// File probed in the working directory for source-transform settings.
pub const TRANSFORM_CONFIG_FILE: &str = ".babelrc";

/// Apply the project's transform config to the first loader, if present.
///
/// The file is parsed as relaxed JSON (comments and trailing commas are
/// tolerated) and the resulting value replaces `module.loaders[0].query`
/// wholesale. A missing file is a no-op.
///
/// # Errors
///
/// Returns [`ConfigError::TransformConfig`] when the file exists but does
/// not parse, after logging the parser diagnostic. Returns
/// [`ConfigError::File`] if the file exists but cannot be read.
pub(crate) fn apply_transform_config(config: &mut BuildConfig) -> ConfigResult<()> {
    let path = Utf8Path::new(TRANSFORM_CONFIG_FILE);
    if !path.is_file() {
        return Ok(());
    }
    let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    let query: Value = match json5::from_str(&data) {
        Ok(value) => value,
        Err(source) => {
            tracing::error!(path = %path, error = %source, "failed to parse transform config");
            return Err(ConfigError::TransformConfig {
                path: path.to_owned(),
                source,
            });
        }
    };
    match config.module.loaders.first_mut() {
        Some(loader) => loader.query = Some(query),
        None => {
            tracing::warn!(path = %path, "transform config ignored: base config has no loaders");
        }
    }
    Ok(())
}
