//! Filesystem path helpers.

use camino::{Utf8Path, Utf8PathBuf};

use std::path::Path;

use crate::error::{ConfigResult, file_error};

/// Canonicalise `path` using platform-specific rules.
///
/// Returns an absolute, normalised path with symlinks resolved. On Windows
/// the [`dunce`](https://docs.rs/dunce/latest/dunce/) crate is used to avoid
/// introducing UNC prefixes in diagnostic messages.
///
/// # Errors
///
/// Returns a [`crate::ConfigError::File`] if canonicalisation fails, which
/// includes the case where `path` does not exist.
pub(crate) fn canonicalise(path: &Utf8Path) -> ConfigResult<Utf8PathBuf> {
    #[cfg(windows)]
    let canonical = dunce::canonicalize(path).map_err(|e| file_error(path, e))?;
    #[cfg(not(windows))]
    let canonical = std::fs::canonicalize(path).map_err(|e| file_error(path, e))?;
    Ok(to_utf8_path(&canonical))
}

/// Convert a canonical path to a UTF-8 path, falling back to lossy conversion.
fn to_utf8_path(canonical: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(canonical.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::with_jail;
    use anyhow::{Result, ensure};
    use serial_test::serial;

    #[test]
    #[serial]
    fn canonicalise_resolves_relative_paths() -> Result<()> {
        with_jail(|j| {
            j.create_file("config.js", "// entry")?;
            let canonical = canonicalise(Utf8Path::new("config.js"))?;
            ensure!(
                canonical.is_absolute(),
                "expected absolute path, got {canonical}"
            );
            ensure!(
                canonical.file_name() == Some("config.js"),
                "unexpected file name in {canonical}"
            );
            Ok(())
        })
    }

    #[test]
    #[serial]
    fn canonicalise_reports_missing_paths() -> Result<()> {
        with_jail(|_| {
            let err = match canonicalise(Utf8Path::new("absent.js")) {
                Ok(path) => return Err(anyhow::anyhow!("expected failure, got {path}")),
                Err(err) => err,
            };
            ensure!(
                err.to_string().contains("absent.js"),
                "unexpected error: {err}"
            );
            Ok(())
        })
    }
}
