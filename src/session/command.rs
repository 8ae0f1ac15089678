use crate::game::Direction;

/// Logical commands accepted by a session, independent of the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn the snake at the next tick
    Steer(Direction),
    Start,
    /// Pause a running game or resume a paused one
    TogglePause,
    Restart,
    /// End the game; only a restart leaves this state
    End,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Steer(direction)
    }
}
