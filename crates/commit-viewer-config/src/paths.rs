//! Data directory paths
//!
//! Uses XDG directories via `dirs`:
//! - Linux: `~/.cache/commit-viewer/`
//! - macOS: `~/Library/Caches/commit-viewer/`
//! - Windows: `%LOCALAPPDATA%\commit-viewer\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "commit-viewer";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    cache_dir_in(&base)
}

/// Directory for debug log files
pub fn log_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    log_dir_in(&base)
}

fn cache_dir_in(base: &Path) -> Result<PathBuf> {
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

fn log_dir_in(base: &Path) -> Result<PathBuf> {
    let dir = cache_dir_in(base)?.join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(dir)
}
