//! Filesystem watcher for watch-mode builds.
//!
//! Watches the transform rule's scope recursively and forwards relevant
//! change events through a channel. Debouncing is not done here: the build
//! loop aggregates a burst of events and rebuilds once the scope has been
//! quiet for the configured interval, so every event only needs to arrive.

use crate::error::{CliError, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// File change event type.
#[derive(Debug, Clone)]
pub enum FileChange {
    Modified(PathBuf),
    Created(PathBuf),
    Removed(PathBuf),
}

impl FileChange {
    /// Get the path affected by this change.
    pub fn path(&self) -> &Path {
        match self {
            FileChange::Modified(p) | FileChange::Created(p) | FileChange::Removed(p) => p,
        }
    }
}

/// Recursive watcher over one source scope.
pub struct ScopeWatcher {
    /// Underlying notify watcher; dropping it stops the watch.
    _watcher: RecommendedWatcher,
    /// Root directory being watched
    root: PathBuf,
}

impl ScopeWatcher {
    /// Start watching `root` recursively.
    ///
    /// Returns the watcher (keep it alive) and the receiver for change
    /// events. Hidden files and anything outside the root are filtered out.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory doesn't exist or the platform
    /// watcher cannot be created.
    pub fn new(root: PathBuf) -> Result<(Self, mpsc::Receiver<FileChange>)> {
        if !root.is_dir() {
            return Err(CliError::DirNotFound(root));
        }

        let (tx, rx) = mpsc::channel(100);
        let root_clone = root.clone();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                for path in &event.paths {
                    if Self::should_ignore(path, &root_clone) {
                        continue;
                    }

                    let change = match event.kind {
                        EventKind::Create(_) => FileChange::Created(path.clone()),
                        EventKind::Modify(_) => FileChange::Modified(path.clone()),
                        EventKind::Remove(_) => FileChange::Removed(path.clone()),
                        _ => continue,
                    };

                    let _ = tx.blocking_send(change);
                }
            }
        })
        .map_err(CliError::Watch)?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(CliError::Watch)?;

        Ok((
            Self {
                _watcher: watcher,
                root,
            },
            rx,
        ))
    }

    /// Check if a path should be ignored.
    fn should_ignore(path: &Path, root: &Path) -> bool {
        // Only react to files within the watched scope
        if !path.starts_with(root) {
            return true;
        }

        let rel_path = match path.strip_prefix(root) {
            Ok(p) => p,
            Err(_) => return true,
        };

        // Hidden files and directories (editors drop lock/swap files here)
        for component in rel_path.components() {
            if let Some(name) = component.as_os_str().to_str() {
                if name.starts_with('.') && name != "." && name != ".." {
                    return true;
                }
            }
        }

        false
    }

    /// Get the root directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
