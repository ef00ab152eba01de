//! Serve command implementation.

use crate::cli::ServeArgs;
use crate::error::{CliError, Result};
use crate::server;

/// Execute the serve command.
///
/// The listen port comes from the `PORT` environment variable, read here at
/// the process edge and passed down as a plain value.
pub async fn execute(args: ServeArgs) -> Result<()> {
    if !args.dir.is_dir() {
        return Err(CliError::DirNotFound(args.dir));
    }

    let port = server::resolve_port(std::env::var("PORT").ok().as_deref());
    server::serve(args.dir, port).await
}
