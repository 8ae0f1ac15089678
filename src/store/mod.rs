//! Persistence for the best score
//!
//! The store is a small key/value document holding the best score under
//! [`HIGH_SCORE_KEY`] as a decimal string. Reads never fail: anything missing
//! or unreadable counts as "no best score yet". Writes are best effort.

pub mod file;
pub mod memory;

pub use file::FileScoreStore;
pub use memory::MemoryScoreStore;

/// Key the best score is stored under
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

/// External storage for the best score
pub trait ScoreStore {
    /// Best score saved so far, 0 if there is none or it cannot be read
    fn load_best(&self) -> u32;

    /// Record a new best score. Failures are logged, never returned.
    fn save_best(&mut self, best: u32);
}

/// Parse a stored score value, accepting a decimal string or a bare number
pub(crate) fn parse_score(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        _ => None,
    }
}
