//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The grid is a torus: the snake leaves one edge and re-enters from the opposite one,
//! and running into its own body puts it back at the start instead of ending the game.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod score;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{GameConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use engine::{GameEngine, TickOutcome};
pub use food::FoodPlacer;
pub use score::ScoreTracker;
pub use state::{GameState, Position, Snake};
