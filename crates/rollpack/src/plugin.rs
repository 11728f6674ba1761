//! Bundler plugin descriptors.
//!
//! Each [`PluginSpec`] describes one configured instance of an external
//! bundler plugin. The executor that consumes the job descriptors owns the
//! actual plugin implementations; rollpack only decides which plugins run,
//! with which options, and in which order.

use std::path::PathBuf;

use indexmap::IndexMap;
use rollpack_config::PluginItem;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Plugin execution phases
///
/// Stages run in phase order (lower first). Later stages consume the output
/// of earlier ones: style sheets are compiled before scripts are
/// type-checked and transpiled, and minification sees the fully substituted
/// bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginPhase {
    /// Style-sheet preprocessing (less + postcss)
    Style = 0,
    /// TypeScript checking and declaration output
    TypeCheck = 10,
    /// Source transpilation (babel)
    Transpile = 20,
    /// JSON imports
    Data = 30,
    /// Module resolution from the dependency-install tree
    Resolve = 40,
    /// CommonJS to ES module bridging
    Interop = 50,
    /// Compile-time environment substitution
    Define = 60,
    /// Minification
    Minify = 70,
}

/// One configured plugin instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum PluginSpec {
    Postcss(PostcssOptions),
    Typescript(TypescriptOptions),
    Babel(BabelOptions),
    Json,
    NodeResolve(NodeResolveOptions),
    Commonjs(CommonjsOptions),
    Replace(ReplaceOptions),
    Terser(TerserOptions),
}

impl PluginSpec {
    /// Name of the plugin as the executor knows it
    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::Postcss(_) => "postcss",
            PluginSpec::Typescript(_) => "typescript",
            PluginSpec::Babel(_) => "babel",
            PluginSpec::Json => "json",
            PluginSpec::NodeResolve(_) => "node-resolve",
            PluginSpec::Commonjs(_) => "commonjs",
            PluginSpec::Replace(_) => "replace",
            PluginSpec::Terser(_) => "terser",
        }
    }

    pub fn phase(&self) -> PluginPhase {
        match self {
            PluginSpec::Postcss(_) => PluginPhase::Style,
            PluginSpec::Typescript(_) => PluginPhase::TypeCheck,
            PluginSpec::Babel(_) => PluginPhase::Transpile,
            PluginSpec::Json => PluginPhase::Data,
            PluginSpec::NodeResolve(_) => PluginPhase::Resolve,
            PluginSpec::Commonjs(_) => PluginPhase::Interop,
            PluginSpec::Replace(_) => PluginPhase::Define,
            PluginSpec::Terser(_) => PluginPhase::Minify,
        }
    }
}

/// Style preprocessing: less compilation followed by postcss plugins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcssOptions {
    /// CSS-modules mode
    pub modules: bool,
    /// Preprocessors applied before postcss
    #[serde(rename = "use")]
    pub preprocessors: Vec<Preprocessor>,
    /// Postcss plugins; autoprefixer always comes first
    pub plugins: Vec<PluginItem>,
}

impl PostcssOptions {
    /// `autoprefixer(settings)` followed by caller-supplied plugins
    pub fn new(modules: bool, autoprefixer: Option<Value>, extra: &[PluginItem]) -> Self {
        let autoprefixer = match autoprefixer {
            Some(settings) => PluginItem::with_options("autoprefixer", settings),
            None => PluginItem::new("autoprefixer"),
        };

        Self {
            modules,
            preprocessors: vec![Preprocessor::Less(LessOptions::default())],
            plugins: std::iter::once(autoprefixer)
                .chain(extra.iter().cloned())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "lang", rename_all = "lowercase")]
pub enum Preprocessor {
    Less(LessOptions),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessOptions {
    pub plugins: Vec<PluginItem>,
    pub javascript_enabled: bool,
}

impl Default for LessOptions {
    /// `~package/file.less` imports resolve through the dependency tree
    fn default() -> Self {
        Self {
            plugins: vec![PluginItem::with_options(
                "less-plugin-npm-import",
                json!({ "prefix": "~" }),
            )],
            javascript_enabled: true,
        }
    }
}

/// Type-checking step (TypeScript sources only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypescriptOptions {
    pub cache_root: PathBuf,
    pub tsconfig: PathBuf,
    /// Applied beneath the project's tsconfig
    pub tsconfig_defaults: TsconfigPatch,
    /// Applied over the project's tsconfig
    pub tsconfig_override: TsconfigPatch,
}

impl TypescriptOptions {
    /// Declarations on by default; `esnext` output so dynamic imports survive
    /// for the transpile stage.
    pub fn new(cache_root: PathBuf, tsconfig: PathBuf) -> Self {
        Self {
            cache_root,
            tsconfig,
            tsconfig_defaults: TsconfigPatch {
                compiler_options: CompilerOptions {
                    declaration: Some(true),
                    target: None,
                },
            },
            tsconfig_override: TsconfigPatch {
                compiler_options: CompilerOptions {
                    declaration: None,
                    target: Some("esnext".to_string()),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsconfigPatch {
    pub compiler_options: CompilerOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Source transpilation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabelOptions {
    pub presets: Vec<PluginItem>,
    pub plugins: Vec<PluginItem>,
    /// Glob of files left untouched
    pub exclude: String,
    /// Whether project `.babelrc` files are honoured
    pub babelrc: bool,
    pub extensions: Vec<String>,
}

impl BabelOptions {
    pub const EXTENSIONS: [&'static str; 7] = [".js", ".jsx", ".ts", ".tsx", ".es6", ".es", ".mjs"];

    pub fn new(presets: Vec<PluginItem>, plugins: Vec<PluginItem>) -> Self {
        Self {
            presets,
            plugins,
            exclude: "node_modules/**".to_string(),
            babelrc: false,
            extensions: Self::EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResolveOptions {
    /// Prefer the `jsnext:main` entry of dependencies
    pub jsnext: bool,
}

impl Default for NodeResolveOptions {
    fn default() -> Self {
        Self { jsnext: true }
    }
}

/// CommonJS bridging for code pulled in from the dependency-install tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonjsOptions {
    /// Pattern of module paths to transform
    pub include: String,
    pub named_exports: IndexMap<String, Vec<String>>,
}

impl CommonjsOptions {
    pub fn new(named_exports: IndexMap<String, Vec<String>>) -> Self {
        Self {
            include: "node_modules".to_string(),
            named_exports,
        }
    }
}

/// Literal replacements applied to the source, keyed by expression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplaceOptions {
    pub values: IndexMap<String, String>,
}

impl ReplaceOptions {
    /// `process.env.NODE_ENV` replaced with the quoted mode string
    pub fn node_env(mode: &str) -> Self {
        let mut values = IndexMap::new();
        values.insert("process.env.NODE_ENV".to_string(), Value::from(mode).to_string());
        Self { values }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerserOptions {
    pub compress: CompressOptions,
}

/// Compression flags forwarded to the minifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressOptions {
    pub pure_getters: bool,
    #[serde(rename = "unsafe")]
    pub unsafe_: bool,
    pub unsafe_comps: bool,
    pub warnings: bool,
}

impl Default for CompressOptions {
    /// Property reads are side-effect free; unsafe numeric and comparison
    /// rewrites are allowed.
    fn default() -> Self {
        Self {
            pure_getters: true,
            unsafe_: true,
            unsafe_comps: true,
            warnings: false,
        }
    }
}
