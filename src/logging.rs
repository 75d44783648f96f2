//! tracing-subscriber setup for the binary.
//!
//! `RUST_LOG` selects the filter (default `info`).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_PATH_ENV: &str = "CHESS_BFS_LOG_PATH";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to stderr (headless modes).
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("logging: {}", e))
}

/// Append logs to `path`; the terminal itself belongs to the renderer.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("logging: cannot open {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("logging: {}", e))
}

/// File logging when `CHESS_BFS_LOG_PATH` is set, nothing otherwise.
pub fn init_from_env() -> Result<()> {
    match std::env::var_os(LOG_PATH_ENV) {
        Some(path) if !path.is_empty() => init_file(Path::new(&path)),
        _ => Ok(()),
    }
}
