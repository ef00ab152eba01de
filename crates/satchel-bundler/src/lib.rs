//! The satchel bundler.
//!
//! Consumes a [`BundleConfig`](satchel_config::BundleConfig) and emits a
//! single browser-ready JavaScript file. The strategy is deliberately small:
//! collect the sources the transform rule selects, strip ES-module syntax,
//! concatenate into one IIFE, then apply the config's plugin directives
//! (environment define, minification, source map).
//!
//! The CLI depends on nothing here but [`bundle`], [`BuildStats`], and
//! [`BundleError`], so a heavier bundler could replace this crate without
//! touching the callers.

mod collect;
mod error;
mod sourcemap;
mod stats;
mod transform;

pub use error::BundleError;
pub use stats::BuildStats;

use satchel_config::BundleConfig;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Run one build: read sources, assemble the bundle, write output files.
///
/// All relative paths in `config` resolve against `root`. The output
/// directory is created if missing. On success the emitted files and any
/// warnings are reported in the returned [`BuildStats`]; any failure aborts
/// the build with no retry and no partial-output contract.
pub fn bundle(config: &BundleConfig, root: &Path) -> Result<BuildStats, BundleError> {
    let start = Instant::now();

    let rule = config.rules.first().ok_or(BundleError::NoRules)?;
    let modules = collect::collect_modules(rule, &config.entry, root)?;
    tracing::debug!(modules = modules.len(), "collected sources");

    let mut warnings = Vec::new();
    let mut body = String::new();
    for module in &modules {
        let stripped = transform::strip_module_syntax(&module.source);
        if stripped.trim().is_empty() {
            warnings.push(format!(
                "{}: empty after module-syntax stripping",
                display_rel(&module.path, root)
            ));
        }
        body.push_str(&format!("// {}\n", display_rel(&module.path, root)));
        body.push_str(&stripped);
        if !stripped.ends_with('\n') {
            body.push('\n');
        }
        body.push('\n');
    }

    let mut source = String::from("(function () {\n'use strict';\n\n");
    if let Some(env) = config.environment() {
        source.push_str(&format!(
            "var process = {{ env: {{ NODE_ENV: \"{}\" }} }};\n\n",
            env.as_str()
        ));
    }
    source.push_str(&body);
    source.push_str("})();\n");

    if config.wants_minify() {
        source = transform::minify(&source);
    }

    let out_dir = root.join(&config.out_dir);
    fs::create_dir_all(&out_dir).map_err(|e| BundleError::WriteOutput {
        path: out_dir.clone(),
        source: e,
    })?;

    let mut emitted = Vec::new();

    if config.wants_source_map() {
        let map_name = format!("{}.map", config.out_file);
        let map = sourcemap::SourceMap::new(&config.out_file, &modules, root);
        let map_path = out_dir.join(&map_name);
        fs::write(&map_path, serde_json::to_string(&map)?).map_err(|e| {
            BundleError::WriteOutput {
                path: map_path.clone(),
                source: e,
            }
        })?;
        source.push_str(&format!("//# sourceMappingURL={}\n", map_name));
        emitted.push(map_path);
    }

    let bundle_path = out_dir.join(&config.out_file);
    fs::write(&bundle_path, &source).map_err(|e| BundleError::WriteOutput {
        path: bundle_path.clone(),
        source: e,
    })?;
    emitted.insert(0, bundle_path);

    Ok(BuildStats {
        modules: modules.len(),
        errors: Vec::new(),
        warnings,
        emitted,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn display_rel(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
