//! Error types produced while assembling the build configuration.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while assembling the build configuration.
///
/// Every failure is fatal to the assembly call: there are no retries and no
/// partial results. Absence of the optional transform-config and override
/// files is not an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The transform-config file exists but is not valid relaxed JSON.
    #[error("failed to parse transform config '{path}': {source}")]
    TransformConfig {
        /// Path of the transform-config file that failed to parse.
        path: Utf8PathBuf,
        /// Diagnostic reported by the relaxed-JSON parser.
        #[source]
        source: json5::Error,
    },

    /// The mandatory preview entry script is missing.
    #[error("create a preview config file in \"{config_dir}/config.js\"")]
    MissingPreviewConfig {
        /// Configuration directory that was expected to hold `config.js`.
        config_dir: Utf8PathBuf,
    },

    /// Reading or parsing a configuration file failed.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the reader or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Construct a [`ConfigError::File`] for a configuration path.
pub(crate) fn file_error(
    path: &Utf8Path,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> ConfigError {
    ConfigError::File {
        path: path.to_owned(),
        source: err.into(),
    }
}
