//! Command-line interface definition for the satchel build tool.
//!
//! Mode selection deliberately does not use flags: the `build` subcommand
//! takes bare tokens (`m`/`minify`, `w`/`watch`) in any order and hands them
//! to the selector untouched, which ignores everything it does not
//! recognize. Flags on the CLI itself only control logging and paths.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// satchel - a tiny front-end build tool and static server
#[derive(Parser, Debug)]
#[command(
    name = "satchel",
    version,
    about = "A tiny front-end build tool and static server",
    long_about = "satchel derives a bundle configuration from bare mode tokens,\n\
                  bundles the project's sources into a single file (once or in\n\
                  watch mode), and serves the built directory over HTTP."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available satchel subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle the project's sources
    ///
    /// Assembles one bundle from the configured source tree. Mode tokens
    /// select minification and watch mode; anything else is ignored.
    Build(BuildArgs),

    /// Serve the built directory over HTTP
    ///
    /// A plain static file server. The port comes from the PORT environment
    /// variable, falling back to 3000.
    Serve(ServeArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Build mode tokens
    ///
    /// Order-independent: `m` or `minify` produces a production bundle,
    /// `w` or `watch` stays resident and rebuilds on change. Unrecognized
    /// tokens are ignored.
    ///
    /// Examples:
    ///   satchel build
    ///   satchel build m
    ///   satchel build watch minify
    #[arg(value_name = "MODE")]
    pub modes: Vec<String>,

    /// Project root the entry, scope, and output paths resolve against
    ///
    /// Defaults to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Directory tree to serve
    #[arg(long, default_value = "public", value_name = "DIR")]
    pub dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_collects_bare_mode_tokens() {
        let cli = Cli::try_parse_from(["satchel", "build", "w", "minify", "stray"]).unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.modes, ["w", "minify", "stray"]);
                assert!(args.root.is_none());
            }
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn build_accepts_no_tokens() {
        let cli = Cli::try_parse_from(["satchel", "build"]).unwrap();
        match cli.command {
            Command::Build(args) => assert!(args.modes.is_empty()),
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn serve_defaults_to_public() {
        let cli = Cli::try_parse_from(["satchel", "serve"]).unwrap();
        match cli.command {
            Command::Serve(args) => assert_eq!(args.dir, PathBuf::from("public")),
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["satchel", "-v", "-q", "build"]).is_err());
    }
}
