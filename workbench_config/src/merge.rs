//! Precedence merge of the base configuration over a discovered override.

use crate::schema::{BuildConfig, ModuleConfig};

/// Merge `base` with a user-supplied `custom` override.
///
/// Precedence is fixed, not configurable:
///
/// - top level: every field of `base` overwrites the override's same-named
///   field, so override-only fields survive and collisions resolve to the
///   base;
/// - `plugins`: the base's plugins followed by the override's, neither list
///   dropped;
/// - `module`: shallow-merged with the override's fields winning, except
///   `loaders`, which is the base's loaders followed by the override's.
#[must_use]
pub fn merge_with_override(base: BuildConfig, custom: BuildConfig) -> BuildConfig {
    let mut extra = custom.extra;
    extra.extend(base.extra);

    let mut module_extra = base.module.extra;
    module_extra.extend(custom.module.extra);

    let mut loaders = base.module.loaders;
    loaders.extend(custom.module.loaders);

    let mut plugins = base.plugins;
    plugins.extend(custom.plugins);

    BuildConfig {
        entry: base.entry,
        module: ModuleConfig {
            loaders,
            extra: module_extra,
        },
        plugins,
        extra,
    }
}
