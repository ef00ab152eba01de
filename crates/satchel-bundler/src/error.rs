//! Bundler error types.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a build.
///
/// There are no retries and no partial-failure states; the first error ends
/// the build step.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The config carried no transform rules at all.
    #[error("bundle config has no transform rules")]
    NoRules,

    /// The rule's source subtree does not exist.
    #[error("source scope not found: {}\n\nHint: run from the project root or pass --root <DIR>", .0.display())]
    ScopeNotFound(PathBuf),

    /// The scope exists but nothing in it matches the rule pattern.
    #[error("no sources matching `{pattern}` under {}", .scope.display())]
    NoSources { pattern: String, scope: PathBuf },

    /// The configured entry file was not among the collected sources.
    #[error("entry point {} is not inside the transform rule scope", .0.display())]
    EntryOutsideScope(PathBuf),

    /// The rule pattern is not a valid regular expression.
    #[error("invalid transform rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk sources: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to encode source map: {0}")]
    SourceMap(#[from] serde_json::Error),
}
