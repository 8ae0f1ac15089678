use thiserror::Error;

/// Errors produced by the game library
#[derive(Debug, Error)]
pub enum GameError {
    /// Every cell of the grid is covered by the snake
    #[error("no free cell left on a {size}x{size} grid")]
    GridFull { size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("score store I/O failed: {0}")]
    Store(#[from] std::io::Error),

    #[error("malformed score store contents: {0}")]
    Format(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
