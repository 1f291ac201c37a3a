//! Best-score record, one small JSON file.
//!
//! Reads are forgiving: a missing or unreadable file counts as "no best
//! yet" so a damaged record never blocks play. Writes propagate errors
//! to the host, which logs and carries on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BestScoreRecord {
    best: u32,
}

/// Stores the best score at a fixed path.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    /// Store under the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: paths::best_score_path()?,
        })
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn at_path<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The recorded best score, or 0 when none exists.
    pub fn get(&self) -> u32 {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            // Usually just the first run.
            Err(_) => return 0,
        };
        match serde_json::from_str::<BestScoreRecord>(&data) {
            Ok(record) => record.best,
            Err(err) => {
                log::warn!(
                    "ignoring unreadable best-score record {}: {}",
                    self.path.display(),
                    err
                );
                0
            }
        }
    }

    /// Persist a new best score.
    pub fn set(&self, best: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let data = serde_json::to_string(&BestScoreRecord { best })?;
        fs::write(&self.path, data)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tui-snake-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_reads_as_zero() {
        let store = BestScoreStore::at_path(scratch_path("missing.json"));
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn test_round_trip() {
        let store = BestScoreStore::at_path(scratch_path("round-trip.json"));
        store.set(42).unwrap();
        assert_eq!(store.get(), 42);

        store.set(117).unwrap();
        assert_eq!(store.get(), 117);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_reads_as_zero() {
        let path = scratch_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json at all").unwrap();

        let store = BestScoreStore::at_path(&path);
        assert_eq!(store.get(), 0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let path = scratch_path("nested/dirs/best.json");
        let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());

        let store = BestScoreStore::at_path(&path);
        store.set(7).unwrap();
        assert_eq!(store.get(), 7);

        let _ = fs::remove_file(&path);
    }
}
