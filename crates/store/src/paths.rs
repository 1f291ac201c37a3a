//! Application data paths.
//!
//! Uses platform directories via the `dirs` crate:
//! - Linux: `~/.local/share/tui-snake/`
//! - macOS: `~/Library/Application Support/tui-snake/`
//! - Windows: `%APPDATA%\tui-snake\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "tui-snake";
const BEST_SCORE_FILE: &str = "best-score.json";

/// Get the application data directory, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("could not determine data directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the path of the best-score record.
pub fn best_score_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(BEST_SCORE_FILE))
}
