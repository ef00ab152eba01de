//! Build result reporting.

use serde::Serialize;
use std::path::PathBuf;

/// Outcome of a successful build.
///
/// Failures never produce stats, so `errors` is empty for builds run by this
/// crate; the field is part of the reporting contract and serializes like the
/// rest.
#[derive(Debug, Clone, Serialize)]
pub struct BuildStats {
    /// Number of source modules that went into the bundle.
    pub modules: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Files written, bundle first.
    pub emitted: Vec<PathBuf>,
    pub duration_ms: u64,
}

impl BuildStats {
    /// One-line human-readable summary with the error and warning counts.
    pub fn summary(&self) -> String {
        format!(
            "{} modules bundled in {} ms ({} errors, {} warnings)",
            self.modules,
            self.duration_ms,
            self.errors.len(),
            self.warnings.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_errors_and_warnings() {
        let stats = BuildStats {
            modules: 2,
            errors: Vec::new(),
            warnings: vec![String::from("something minor")],
            emitted: vec![PathBuf::from("public/js/app.js")],
            duration_ms: 12,
        };
        assert_eq!(stats.summary(), "2 modules bundled in 12 ms (0 errors, 1 warnings)");
    }
}
