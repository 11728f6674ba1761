//! Default source-transform presets per target environment.

use rollpack_config::{PluginItem, Target};
use serde_json::json;

/// Presets and plugins the transpile stage starts from
#[derive(Debug, Clone, PartialEq)]
pub struct TransformDefaults {
    pub presets: Vec<PluginItem>,
    pub plugins: Vec<PluginItem>,
}

/// Transform defaults for `target`.
///
/// Browser builds keep ES module syntax for the bundler and compile JSX;
/// node builds target the oldest supported runtime. TypeScript syntax is
/// handled by the type-check stage, so no TypeScript preset is included.
pub fn transform_defaults(target: Target) -> TransformDefaults {
    let env = match target {
        Target::Browser => json!({
            "targets": { "browsers": ["last 2 versions", "IE 10"] },
            "modules": false,
        }),
        Target::Node => json!({
            "targets": { "node": 6 },
        }),
    };

    let mut presets = vec![PluginItem::with_options("@babel/preset-env", env)];
    let mut plugins = Vec::new();
    if target == Target::Browser {
        presets.push(PluginItem::new("@babel/preset-react"));
        plugins.push(PluginItem::new("babel-plugin-react-require"));
    }

    plugins.extend([
        PluginItem::new("@babel/plugin-syntax-dynamic-import"),
        PluginItem::new("@babel/plugin-proposal-export-default-from"),
        PluginItem::new("@babel/plugin-proposal-export-namespace-from"),
        PluginItem::new("@babel/plugin-proposal-do-expressions"),
        PluginItem::with_options("@babel/plugin-proposal-decorators", json!({ "legacy": true })),
        PluginItem::with_options(
            "@babel/plugin-proposal-class-properties",
            json!({ "loose": true }),
        ),
    ]);

    TransformDefaults { presets, plugins }
}
