//! Build command implementation.
//!
//! Hands the raw mode tokens to the selector and runs the bundler with the
//! result. Run-once failures end the command; in watch mode a failed rebuild
//! is logged and the loop stays alive, rebuilding after each change burst
//! settles.

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::ui;
use crate::watcher::ScopeWatcher;
use satchel_bundler::BuildStats;
use satchel_config::{BundleConfig, RunMode, Selection};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::signal;
use tokio::time::timeout;

/// Execute the build command.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let Selection { config, mode } = satchel_config::select(&args.modes);
    tracing::debug!(?mode, root = %root.display(), "selected bundle config");

    match mode {
        RunMode::Once => run_once(&config, &root),
        RunMode::Watch { debounce_ms } => {
            watch(&config, &root, Duration::from_millis(debounce_ms)).await
        }
    }
}

/// Run a single build; a failure is logged and ends the build step.
fn run_once(config: &BundleConfig, root: &Path) -> Result<()> {
    match satchel_bundler::bundle(config, root) {
        Ok(stats) => {
            report(&stats);
            Ok(())
        }
        Err(e) => {
            println!("{}", e);
            Err(e.into())
        }
    }
}

/// Stay resident: rebuild whenever the source scope changes.
async fn watch(config: &BundleConfig, root: &Path, debounce: Duration) -> Result<()> {
    let scope = scope_dir(config, root);
    let (watcher, mut changes) = ScopeWatcher::new(scope)?;

    ui::info(&format!(
        "Watching for changes in: {}",
        watcher.root().display()
    ));
    ui::info("Press Ctrl+C to stop");

    // Initial build; in watch mode a failure keeps the watcher running.
    rebuild(config, root);

    loop {
        tokio::select! {
            maybe_change = changes.recv() => {
                let Some(change) = maybe_change else { break };
                ui::info(&format!("File changed: {}", change.path().display()));

                // Aggregate the burst: rebuild once the scope has been quiet
                // for the debounce interval.
                while let Ok(Some(_)) = timeout(debounce, changes.recv()).await {}

                rebuild(config, root);
            }

            _ = signal::ctrl_c() => {
                ui::info("Stopping watch mode");
                break;
            }
        }
    }

    Ok(())
}

fn rebuild(config: &BundleConfig, root: &Path) {
    match satchel_bundler::bundle(config, root) {
        Ok(stats) => report(&stats),
        Err(e) => ui::error(&format!("Build failed: {}", e)),
    }
}

/// Print the build outcome: stats summary, then the completion message.
fn report(stats: &BuildStats) {
    println!("{}", stats.summary());
    for warning in &stats.warnings {
        ui::warning(warning);
    }
    println!("\nBundling complete\n");
}

/// Directory the watcher observes: the first rule's scope, or the root when
/// the config carries no rules.
fn scope_dir(config: &BundleConfig, root: &Path) -> PathBuf {
    config
        .rules
        .first()
        .map(|rule| root.join(&rule.scope))
        .unwrap_or_else(|| root.to_path_buf())
}
