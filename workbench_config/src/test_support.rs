//! Shared helpers for filesystem-backed tests.

use anyhow::{Result, anyhow};
use serde_json::json;

use crate::schema::BuildConfig;

/// Run `f` inside a [`figment::Jail`], bridging error types.
pub(crate) fn with_jail<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut figment::Jail) -> Result<()>,
{
    figment::Jail::try_with(|j| {
        // figment::Error currently only implements `From<String>`, so stringify the source.
        f(j).map_err(|err| figment::Error::from(err.to_string()))
    })
    .map_err(|err| anyhow!(err.to_string()))
}

/// A representative base configuration: one loader, one plugin, one extra
/// top-level field.
pub(crate) fn base_config() -> Result<BuildConfig> {
    Ok(serde_json::from_value(json!({
        "entry": { "preview": [] },
        "module": { "loaders": [{ "test": "\\.js$", "loader": "swc" }] },
        "plugins": [{ "name": "define" }],
        "devtool": "cheap-source-map"
    }))?)
}
