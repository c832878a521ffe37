//! Discovery and parsing of the user's build-configuration override.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Format, Toml},
};
use figment_json5::Json5;
use serde_json::Value;

use crate::error::{ConfigResult, file_error};
use crate::paths::canonicalise;
use crate::schema::BuildConfig;

/// Override file names probed inside the configuration directory, in order.
/// The first existing candidate wins.
pub const OVERRIDE_CANDIDATES: [&str; 3] = [
    "build.config.json5",
    "build.config.json",
    "build.config.toml",
];

/// Load the user's override configuration from the configuration directory.
///
/// Returns `Ok(None)` when no candidate file exists, which is the common
/// "no customisation" path and deliberately silent.
///
/// # Errors
///
/// Returns a [`crate::ConfigError::File`] if an existing candidate cannot be
/// read, parsed, or deserialised into a [`BuildConfig`].
pub(crate) fn load_override(config_dir: &Utf8Path) -> ConfigResult<Option<BuildConfig>> {
    for name in OVERRIDE_CANDIDATES {
        let path = config_dir.join(name);
        if !path.is_file() {
            continue;
        }
        let canonical = canonicalise(&path)?;
        let data = std::fs::read_to_string(&canonical).map_err(|e| file_error(&canonical, e))?;
        let figment = parse_override_by_format(&canonical, &data)?;
        let value: Value = figment.extract().map_err(|e| file_error(&canonical, e))?;
        let custom: BuildConfig =
            serde_json::from_value(value).map_err(|e| file_error(&canonical, e))?;
        tracing::info!(path = %canonical, "loading custom build configuration");
        return Ok(Some(custom));
    }
    Ok(None)
}

/// Parse override data according to the file extension.
fn parse_override_by_format(path: &Utf8Path, data: &str) -> ConfigResult<Figment> {
    let ext = path.extension().map(str::to_ascii_lowercase);
    let figment = match ext.as_deref() {
        Some("json" | "json5") => Figment::from(Json5::string(data)),
        _ => {
            // Validate TOML first so parse failures are reported with this
            // file's context before Figment performs its own parse pass.
            toml::from_str::<toml::Value>(data).map_err(|e| file_error(path, e))?;
            Figment::from(Toml::string(data))
        }
    };
    Ok(figment)
}
