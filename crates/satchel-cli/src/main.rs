//! Entry point for the satchel CLI: argument parsing, logging setup, and
//! command dispatch.

use anyhow::Result;
use clap::Parser;
use satchel_cli::{cli, commands, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build::execute(build_args).await,
        cli::Command::Serve(serve_args) => commands::serve::execute(serve_args).await,
    };

    Ok(result?)
}
