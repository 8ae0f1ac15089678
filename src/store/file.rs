use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{HIGH_SCORE_KEY, ScoreStore, parse_score};
use crate::error::GameResult;

/// Best score kept in a JSON file of string keys to string values
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry of the file; a missing file is an empty document
    fn read_entries(&self) -> GameResult<Map<String, Value>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the best score, keeping any other entries already in the file.
    ///
    /// Creates parent directories if they don't exist. An unreadable existing
    /// file is replaced rather than blocking the write.
    pub fn try_save_best(&self, best: u32) -> GameResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(HIGH_SCORE_KEY.to_string(), Value::String(best.to_string()));

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load_best(&self) -> u32 {
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = ?self.path, %err, "ignoring unreadable score file");
                return 0;
            }
        };

        match entries.get(HIGH_SCORE_KEY) {
            Some(value) => parse_score(value).unwrap_or_else(|| {
                tracing::warn!(path = ?self.path, %value, "ignoring malformed best score");
                0
            }),
            None => 0,
        }
    }

    fn save_best(&mut self, best: u32) {
        match self.try_save_best(best) {
            Ok(()) => tracing::debug!(path = ?self.path, best, "best score saved"),
            Err(err) => tracing::warn!(path = ?self.path, %err, "failed to save best score"),
        }
    }
}
