//! Serde data model for the bundler configuration object.
//!
//! Only the fields this crate manipulates are typed; everything else is
//! carried verbatim through flattened [`serde_json`] maps so user-supplied
//! overrides survive the merge untouched.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON object map holding the loosely-typed portions of the schema.
pub type ExtraFields = serde_json::Map<String, Value>;

/// A bundler configuration object.
///
/// The base configuration ships with the tool; overrides loaded from the
/// configuration directory deserialise into the same shape, with absent
/// fields defaulting to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Bundle entry points.
    pub entry: EntryConfig,
    /// Module processing rules.
    pub module: ModuleConfig,
    /// Plugin descriptors, applied in order.
    pub plugins: Vec<Value>,
    /// Every other top-level field, carried verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Bundle entry points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// Preview bootstrap scripts, in load order.
    pub preview: Vec<Utf8PathBuf>,
    /// Other entry groups, carried verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Module processing rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Loader descriptors, applied in order.
    pub loaders: Vec<Loader>,
    /// Other module-level settings, carried verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A single loader descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Loader {
    /// Loader options; the transform-config step replaces the first
    /// loader's value wholesale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    /// Remaining descriptor fields (test patterns, loader name, and so on).
    #[serde(flatten)]
    pub extra: ExtraFields,
}
