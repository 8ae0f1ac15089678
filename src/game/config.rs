use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{GameError, GameResult};

/// Smallest grid that fits the starting snake, a free cell for food and room to turn
pub const MIN_GRID_SIZE: usize = 4;

/// Largest grid accepted; keeps coordinates within `i32` and a frame cheap to draw
pub const MAX_GRID_SIZE: usize = 256;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of cells along each side of the square grid
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded for eating food
    pub food_reward: u32,
    /// Milliseconds between two ticks
    pub tick_interval_ms: u64,
    /// Seed for food placement; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            food_reward: 10,
            tick_interval_ms: 150,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Derive the grid size from a square canvas split into square cells.
    ///
    /// A 400 px canvas with 20 px cells gives the default 20x20 grid.
    pub fn from_canvas(canvas_px: usize, cell_px: usize) -> GameResult<Self> {
        if cell_px == 0 {
            return Err(GameError::InvalidConfig("cell size must be non-zero".into()));
        }
        Ok(Self::new(canvas_px / cell_px))
    }

    /// Read a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> GameResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "grid size {} is below the minimum of {}",
                self.grid_size, MIN_GRID_SIZE
            )));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "grid size {} is above the maximum of {}",
                self.grid_size, MAX_GRID_SIZE
            )));
        }
        if self.initial_snake_length == 0 || self.initial_snake_length >= self.grid_size {
            return Err(GameError::InvalidConfig(format!(
                "initial snake length {} does not fit a {}-cell row",
                self.initial_snake_length, self.grid_size
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick interval must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
