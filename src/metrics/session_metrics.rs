use std::time::{Duration, Instant};

use crate::game::TickOutcome;
use crate::session::Transition;

/// Per-game counters and play time, paused time excluded
pub struct SessionMetrics {
    running_since: Option<Instant>,
    banked: Duration,
    pub ticks: u64,
    pub foods_eaten: u32,
    pub soft_resets: u32,
    pub games_started: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            running_since: None,
            banked: Duration::ZERO,
            ticks: 0,
            foods_eaten: 0,
            soft_resets: 0,
            games_started: 0,
        }
    }

    pub fn on_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Started | Transition::Restarted => self.on_game_start(),
            Transition::Resumed => self.resume(),
            Transition::Paused | Transition::Ended => self.suspend(),
        }
    }

    pub fn on_tick(&mut self, outcome: TickOutcome) {
        self.ticks += 1;
        match outcome {
            TickOutcome::Ate { .. } => self.foods_eaten += 1,
            TickOutcome::SoftReset => self.soft_resets += 1,
            TickOutcome::Moved => {}
        }
    }

    pub fn on_game_start(&mut self) {
        if self.games_started > 0 {
            self.log_summary();
        }
        self.games_started += 1;
        self.ticks = 0;
        self.foods_eaten = 0;
        self.soft_resets = 0;
        self.banked = Duration::ZERO;
        self.running_since = Some(Instant::now());
    }

    fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    fn suspend(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
    }

    /// Write the current game's counters to the log
    pub fn log_summary(&self) {
        tracing::info!(
            game = self.games_started,
            ticks = self.ticks,
            foods_eaten = self.foods_eaten,
            soft_resets = self.soft_resets,
            play_time = %self.format_time(),
            "game summary"
        );
    }

    /// Time spent running in the current game
    pub fn elapsed(&self) -> Duration {
        self.banked + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
