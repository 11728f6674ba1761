//! The config assembler: bundle options in, job descriptors out.

use std::path::{Path, PathBuf};

use rollpack_config::{BundleOptions, ModuleFormat, Target};

use crate::error::{Error, Result};
use crate::job::{BuildMode, JobDescriptor, OutputOptions};
use crate::package::PackageMetadata;
use crate::pipeline::Pipeline;
use crate::plugin::{
    BabelOptions, CommonjsOptions, NodeResolveOptions, PluginSpec, PostcssOptions,
    ReplaceOptions, TerserOptions, TypescriptOptions,
};
use crate::transform::transform_defaults;

/// Directory under the working directory that receives every bundle
pub const OUTPUT_DIR: &str = "dist";

/// Type-checker cache directory, created under the request's cache dir
pub const TYPESCRIPT_CACHE_DIR: &str = ".rollup_plugin_typescript2_cache";

const TYPED_EXTENSIONS: [&str; 2] = ["ts", "tsx"];

/// Cache location used when the caller does not inject one
pub fn default_cache_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Input to [`assemble`]
#[derive(Debug, Clone)]
pub struct AssembleRequest {
    /// Package root: manifest lookup, input and output paths are relative to it
    pub cwd: PathBuf,
    /// Entry file, relative to `cwd`
    pub entry: PathBuf,
    /// Requested format tag (`esm`, `cjs` or `umd`)
    pub format: String,
    pub target: Target,
    pub bundle: BundleOptions,
    pub cache_dir: PathBuf,
}

impl AssembleRequest {
    /// Browser target, default options and the system temp dir as cache
    pub fn new(
        cwd: impl Into<PathBuf>,
        entry: impl Into<PathBuf>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            cwd: cwd.into(),
            entry: entry.into(),
            format: format.into(),
            target: Target::default(),
            bundle: BundleOptions::default(),
            cache_dir: default_cache_dir(),
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_bundle_options(mut self, bundle: BundleOptions) -> Self {
        self.bundle = bundle;
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Output base name: a non-empty `file` override, else the entry file stem
    pub fn output_name(&self) -> String {
        match self.bundle.output_file() {
            Some(file) => file.to_string(),
            None => self
                .entry
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Whether the entry is a TypeScript source and needs the type-check stage
    pub fn is_typescript(&self) -> bool {
        self.entry
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| TYPED_EXTENSIONS.contains(&ext))
    }

    fn output_file(&self, stem: &str) -> PathBuf {
        self.cwd.join(OUTPUT_DIR).join(format!("{stem}.js"))
    }
}

/// Build the job descriptors for one output format.
///
/// Only the format tag can make this fail; a missing or broken
/// `package.json` just means no dependencies are externalized.
pub fn assemble(request: &AssembleRequest) -> Result<Vec<JobDescriptor>> {
    let format: ModuleFormat = request.format.parse()?;

    let package = PackageMetadata::load(&request.cwd);
    let external = package.external_for(format);
    let pipeline = shared_pipeline(request);
    let name = request.output_name();
    let input = request.cwd.join(&request.entry);

    let jobs = match format {
        ModuleFormat::Esm | ModuleFormat::Cjs => {
            let stem = match request.bundle.format_file(format) {
                Some(file) => file.to_string(),
                None if format == ModuleFormat::Esm => format!("{name}.esm"),
                None => name,
            };

            vec![JobDescriptor {
                input,
                output: OutputOptions {
                    format,
                    file: request.output_file(&stem),
                    name: None,
                    globals: Default::default(),
                },
                mode: None,
                plugins: pipeline.into_plugins(),
                external,
            }]
        }
        ModuleFormat::Umd => umd_jobs(request, &name, input, &pipeline, external),
    };

    tracing::debug!(
        format = %format,
        entry = %request.entry.display(),
        jobs = jobs.len(),
        "assembled bundle jobs"
    );

    Ok(jobs)
}

/// Plan every format enabled in `bundle` (esm, cjs, umd order) using its
/// configured entry and target.
pub fn assemble_configured(
    cwd: &Path,
    bundle: &BundleOptions,
    cache_dir: &Path,
) -> Result<Vec<JobDescriptor>> {
    let entry = bundle.entry.as_ref().ok_or(Error::MissingEntry)?;
    let formats = bundle.enabled_formats();
    if formats.is_empty() {
        return Err(Error::NoFormats);
    }

    let mut jobs = Vec::new();
    for format in formats {
        let request = AssembleRequest::new(cwd, entry, format.as_str())
            .with_target(bundle.target)
            .with_bundle_options(bundle.clone())
            .with_cache_dir(cache_dir);
        jobs.extend(assemble(&request)?);
    }
    Ok(jobs)
}

/// Stages every format shares: style, optional type-check, transpile, JSON.
fn shared_pipeline(request: &AssembleRequest) -> Pipeline {
    let bundle = &request.bundle;
    let type_check = request.is_typescript();

    let defaults = transform_defaults(request.target);
    let mut presets = defaults.presets;
    presets.extend(bundle.extra_babel_presets.iter().cloned());
    let mut plugins = defaults.plugins;
    plugins.extend(bundle.extra_babel_plugins.iter().cloned());

    let mut pipeline = Pipeline::new();
    pipeline
        .push(PluginSpec::Postcss(PostcssOptions::new(
            bundle.css_modules,
            bundle.autoprefixer.clone(),
            &bundle.extra_postcss_plugins,
        )))
        .push_if(type_check, || {
            PluginSpec::Typescript(TypescriptOptions::new(
                request.cache_dir.join(TYPESCRIPT_CACHE_DIR),
                request.cwd.join("tsconfig.json"),
            ))
        })
        .push(PluginSpec::Babel(BabelOptions::new(presets, plugins)))
        .push(PluginSpec::Json);
    pipeline
}

fn umd_jobs(
    request: &AssembleRequest,
    name: &str,
    input: PathBuf,
    shared: &Pipeline,
    external: Vec<String>,
) -> Vec<JobDescriptor> {
    let umd = request.bundle.umd.clone().unwrap_or_default();
    let stem = match request.bundle.format_file(ModuleFormat::Umd) {
        Some(file) => file.to_string(),
        None => format!("{name}.umd"),
    };

    let resolved = shared.extended([
        PluginSpec::NodeResolve(NodeResolveOptions::default()),
        PluginSpec::Commonjs(CommonjsOptions::new(request.bundle.named_exports.clone())),
    ]);

    let job = |mode: BuildMode, file: PathBuf, extra: Vec<PluginSpec>| JobDescriptor {
        input: input.clone(),
        output: OutputOptions {
            format: ModuleFormat::Umd,
            file,
            name: umd.name.clone(),
            globals: umd.globals.clone(),
        },
        mode: Some(mode),
        plugins: resolved.extended(extra).into_plugins(),
        external: external.clone(),
    };

    let mut jobs = vec![job(
        BuildMode::Development,
        request.output_file(&stem),
        vec![PluginSpec::Replace(ReplaceOptions::node_env(
            BuildMode::Development.as_str(),
        ))],
    )];

    if umd.min_file {
        jobs.push(job(
            BuildMode::Production,
            request.output_file(&format!("{stem}.min")),
            vec![
                PluginSpec::Replace(ReplaceOptions::node_env(BuildMode::Production.as_str())),
                PluginSpec::Terser(TerserOptions::default()),
            ],
        ));
    }

    jobs
}
