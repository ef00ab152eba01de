//! Error handling for the satchel CLI.
//!
//! Library-level failures (the bundler, the watcher) convert automatically
//! via `#[from]`; the binary edge wraps the result in `anyhow` for display.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Build process errors from the bundler
    #[error("Build error: {0}")]
    Bundle(#[from] satchel_bundler::BundleError),

    /// File watching errors
    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// Static server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Directory that should exist but doesn't
    #[error("Directory not found: {}", .0.display())]
    DirNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_errors_convert() {
        let err: CliError = satchel_bundler::BundleError::NoRules.into();
        assert!(matches!(err, CliError::Bundle(_)));
        assert!(err.to_string().contains("Build error"));
    }

    #[test]
    fn dir_not_found_names_the_path() {
        let err = CliError::DirNotFound(PathBuf::from("public"));
        assert!(err.to_string().contains("public"));
    }
}
