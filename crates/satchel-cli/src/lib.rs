//! satchel CLI - build a front-end bundle and serve the result.
//!
//! The binary has two jobs that never share a process: `satchel build`
//! derives a bundle configuration from its mode tokens and runs the bundler
//! (once, or resident in watch mode), and `satchel serve` serves the built
//! directory over HTTP with a per-request log line.
//!
//! # Architecture
//!
//! - [`cli`] - clap command definitions
//! - `commands` - one module per subcommand
//! - [`error`] - typed CLI errors
//! - [`logger`] - tracing subscriber setup
//! - [`server`] - the static file server
//! - [`ui`] - colored status output
//! - [`watcher`] - filesystem watcher feeding the watch loop

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod server;
pub mod ui;
pub mod watcher;

pub use error::{CliError, Result};
