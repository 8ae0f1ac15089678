//! Wrap Snake - a terminal Snake game on a wraparound grid
//!
//! This library provides:
//! - Core game logic (game module): toroidal movement, food, scoring
//! - Session lifecycle and tick scheduling (session module)
//! - Best-score persistence (store module)
//! - TUI rendering, keyboard input and the interactive mode (render, input, modes)

pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod session;
pub mod store;

pub use error::{GameError, GameResult};
