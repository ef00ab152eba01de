//! Bundle configuration for the satchel build tool.
//!
//! This crate is the leaf of the workspace: it defines the [`BundleConfig`]
//! record consumed by `satchel-bundler` and the [`select`] function that
//! derives one from command-line mode tokens. Nothing here touches the
//! filesystem, the environment, or the clock, so the whole surface is
//! testable without process mocking.
//!
//! # Example
//!
//! ```rust
//! use satchel_config::{select, Environment, RunMode};
//!
//! let selection = select(&["watch", "minify"]);
//! assert!(matches!(selection.mode, RunMode::Watch { .. }));
//! assert_eq!(selection.config.environment(), Some(Environment::Production));
//! ```

mod config;
mod select;

pub use config::{
    BundleConfig, Environment, PluginDirective, RunMode, TransformOptions, TransformRule,
    WATCH_DEBOUNCE_MS,
};
pub use select::{select, Selection};
