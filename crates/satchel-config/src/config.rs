//! The bundle configuration data model.
//!
//! A [`BundleConfig`] is constructed once per build invocation, handed to the
//! bundler, and discarded. It is never mutated after construction; everything
//! mode-dependent in it is determined by the two booleans the selector reads
//! from the argument list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Quiet interval the watcher waits for after a change burst before
/// re-running a build, in milliseconds.
pub const WATCH_DEBOUNCE_MS: u64 = 300;

/// Build environment declared to the bundled code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// The exact string injected as `process.env.NODE_ENV`.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single step the bundler applies to the assembled output.
///
/// Directives are ordered; the selector appends the mode-dependent pair after
/// the constant base config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDirective {
    /// Strip comments and insignificant whitespace from the bundle.
    Minify,
    /// Emit an external source map next to the bundle.
    SourceMap,
    /// Declare the build environment to the bundled code.
    DefineEnv { env: Environment },
}

/// Options carried by a transform rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Transpilation preset names, in application order.
    pub presets: Vec<String>,
}

/// A pattern-scoped instruction describing which files undergo source
/// transformation and with what presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRule {
    /// Filename pattern (a regular expression matched against file names).
    pub pattern: String,
    /// Subtree the rule is restricted to, relative to the project root.
    pub scope: PathBuf,
    pub options: TransformOptions,
}

/// How a build invocation runs: once, or resident with rebuild-on-change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode")]
pub enum RunMode {
    Once,
    Watch { debounce_ms: u64 },
}

impl RunMode {
    pub fn is_watch(self) -> bool {
        matches!(self, RunMode::Watch { .. })
    }
}

/// The record describing how source files are transformed and combined into
/// deployable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Application entry file, relative to the project root.
    pub entry: PathBuf,
    /// Output directory, relative to the project root.
    pub out_dir: PathBuf,
    /// Name of the emitted bundle file inside `out_dir`.
    pub out_file: String,
    /// Ordered transform rules.
    pub rules: Vec<TransformRule>,
    /// Ordered plugin directives.
    pub plugins: Vec<PluginDirective>,
    /// Whether the build stays resident and rebuilds on source changes.
    pub watch: bool,
    /// Quiet interval for watch mode, in milliseconds.
    pub debounce_ms: u64,
}

impl BundleConfig {
    /// The constant base every selection starts from: default paths plus the
    /// single transform rule, with no mode-dependent plugins yet.
    pub fn base() -> Self {
        BundleConfig {
            entry: PathBuf::from("assets/js/index.js"),
            out_dir: PathBuf::from("public/js"),
            out_file: String::from("app.js"),
            rules: vec![TransformRule {
                pattern: String::from(r"\.jsx?$"),
                scope: PathBuf::from("assets"),
                options: TransformOptions {
                    presets: vec![String::from("es2015"), String::from("react")],
                },
            }],
            plugins: Vec::new(),
            watch: false,
            debounce_ms: WATCH_DEBOUNCE_MS,
        }
    }

    /// Environment declared by the plugin list, if any.
    pub fn environment(&self) -> Option<Environment> {
        self.plugins.iter().find_map(|p| match p {
            PluginDirective::DefineEnv { env } => Some(*env),
            _ => None,
        })
    }

    pub fn wants_minify(&self) -> bool {
        self.plugins.contains(&PluginDirective::Minify)
    }

    pub fn wants_source_map(&self) -> bool {
        self.plugins.contains(&PluginDirective::SourceMap)
    }

    /// Path of the emitted bundle, relative to the project root.
    pub fn bundle_path(&self) -> PathBuf {
        self.out_dir.join(&self.out_file)
    }
}
