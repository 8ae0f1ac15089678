use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use super::ScoreStore;

/// Best score kept in memory only.
///
/// Clones share the same value, so a test can keep a handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: Arc<AtomicU32>,
    saves: Arc<AtomicUsize>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds a best score
    pub fn with_best(best: u32) -> Self {
        let store = Self::new();
        store.best.store(best, Ordering::Relaxed);
        store
    }

    /// Number of times a best score was written
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best(&self) -> u32 {
        self.best.load(Ordering::Relaxed)
    }

    fn save_best(&mut self, best: u32) {
        self.best.store(best, Ordering::Relaxed);
        self.saves.fetch_add(1, Ordering::Relaxed);
    }
}
