//! Logging infrastructure for the satchel CLI.
//!
//! Structured logging via the `tracing` ecosystem. Verbosity is resolved in
//! this order: `--verbose` (debug for satchel crates), `--quiet` (errors
//! only), the `RUST_LOG` environment variable, then an info-level default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at startup, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("satchel=debug,satchel_bundler=debug,satchel_config=debug,satchel_cli=debug")
    } else if quiet {
        EnvFilter::new("satchel=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("satchel=info,satchel_bundler=info,satchel_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these only exercise filter construction.

    #[test]
    fn verbose_filter_parses() {
        let _filter =
            EnvFilter::new("satchel=debug,satchel_bundler=debug,satchel_config=debug,satchel_cli=debug");
    }

    #[test]
    fn quiet_filter_parses() {
        let _filter = EnvFilter::new("satchel=error");
    }
}
