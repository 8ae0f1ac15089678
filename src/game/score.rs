/// Current score of the running game and the best score ever reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    current: u32,
    best: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker seeded with a previously persisted best score
    pub fn with_best(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn add_points(&mut self, points: u32) {
        self.current = self.current.saturating_add(points);
    }

    /// Raise the best score to the current one if it was beaten.
    ///
    /// Returns true when the best score changed and should be persisted.
    pub fn maybe_update_best(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }

    /// Start a new game; the best score is kept
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
