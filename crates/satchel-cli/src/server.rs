//! The static file server.
//!
//! Serves one directory tree over HTTP and prints a fixed single-line log
//! for every request: `METHOD path status elapsed ms - content-length`.
//! Everything else (content types, range requests, 404s) is the HTTP
//! stack's default behavior.

use crate::error::{CliError, Result};
use crate::ui;
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

/// Port used when the environment doesn't provide one.
pub const DEFAULT_PORT: u16 = 3000;

/// Resolve the listen port from an environment value.
///
/// Anything that doesn't parse as a port falls back to the default, the same
/// way `process.env.PORT || 3000` behaves.
pub fn resolve_port(env_value: Option<&str>) -> u16 {
    env_value
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Serve `dir` on `port` until the process is stopped.
pub async fn serve(dir: PathBuf, port: u16) -> Result<()> {
    let app = Router::new()
        .fallback_service(ServeDir::new(&dir))
        .layer(middleware::from_fn(log_request));

    let addr: SocketAddr = ([127, 0, 0, 1], port).into();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| CliError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    ui::success(&format!("Application started, running on port {}", port));
    tracing::debug!(dir = %dir.display(), %addr, "serving static tree");

    axum::serve(listener, app)
        .await
        .map_err(|e| CliError::Server(format!("Server error: {}", e)))?;

    Ok(())
}

/// Log every request in the fixed line format, after the response is built.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    let line = format_request_line(
        &method,
        &path,
        response.status(),
        start.elapsed(),
        content_length(&response),
    );
    println!("{}", line);

    response
}

fn content_length(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// Render one request log line.
fn format_request_line(
    method: &Method,
    path: &str,
    status: StatusCode,
    elapsed: Duration,
    length: Option<u64>,
) -> String {
    let length = length
        .map(|n| n.to_string())
        .unwrap_or_else(|| String::from("-"));
    format!(
        "{} {} {} {:.1} ms - {}",
        method,
        path,
        status.as_u16(),
        elapsed.as_secs_f64() * 1000.0,
        length
    )
}
