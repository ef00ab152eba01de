//! Source collection for a transform rule.
//!
//! Walks the rule's scope, keeps files whose names match the rule pattern,
//! and orders them deterministically with the entry file last so its
//! top-level statements run after the modules it pulls in.

use crate::error::BundleError;
use path_clean::PathClean;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A collected source file.
#[derive(Debug, Clone)]
pub struct Module {
    pub path: PathBuf,
    pub source: String,
}

pub fn collect_modules(
    rule: &satchel_config::TransformRule,
    entry: &Path,
    root: &Path,
) -> Result<Vec<Module>, BundleError> {
    let scope = root.join(&rule.scope);
    if !scope.is_dir() {
        return Err(BundleError::ScopeNotFound(scope));
    }

    let pattern = Regex::new(&rule.pattern).map_err(|e| BundleError::InvalidPattern {
        pattern: rule.pattern.clone(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for dir_entry in WalkDir::new(&scope).sort_by_file_name() {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type().is_file() {
            continue;
        }
        let name = dir_entry.file_name().to_string_lossy();
        if pattern.is_match(&name) {
            paths.push(dir_entry.into_path());
        }
    }

    if paths.is_empty() {
        return Err(BundleError::NoSources {
            pattern: rule.pattern.clone(),
            scope,
        });
    }

    // The walk is sorted per directory; moving the entry to the end makes it
    // the last code the bundle runs.
    let entry_abs = root.join(entry).clean();
    let entry_pos = paths
        .iter()
        .position(|p| p.clean() == entry_abs)
        .ok_or_else(|| BundleError::EntryOutsideScope(entry.to_path_buf()))?;
    let entry_path = paths.remove(entry_pos);
    paths.push(entry_path);

    paths
        .into_iter()
        .map(|path| {
            let source = fs::read_to_string(&path).map_err(|e| BundleError::ReadSource {
                path: path.clone(),
                source: e,
            })?;
            Ok(Module { path, source })
        })
        .collect()
}
