use rand::Rng;
use rand::rngs::StdRng;

use super::command::Command;
use crate::game::{Direction, GameEngine, GameState, ScoreTracker, TickOutcome};
use crate::store::ScoreStore;

/// Lifecycle of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing started yet
    Idle,
    Running,
    Paused,
    /// Ended on request; waits for a restart
    Over,
}

/// What the tick scheduler must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Drop any pending tick and schedule a new one
    Arm,
    /// Drop any pending tick
    Cancel,
    Keep,
}

/// A transition the controller performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Paused,
    Resumed,
    Restarted,
    Ended,
}

impl Transition {
    pub fn schedule(&self) -> Schedule {
        match self {
            Transition::Started | Transition::Resumed | Transition::Restarted => Schedule::Arm,
            Transition::Paused | Transition::Ended => Schedule::Cancel,
        }
    }
}

/// Owns one game and moves it through Idle, Running, Paused and Over
pub struct SessionController<R: Rng = StdRng> {
    engine: GameEngine<R>,
    state: GameState,
    score: ScoreTracker,
    store: Box<dyn ScoreStore>,
    session: SessionState,
    pending_direction: Option<Direction>,
}

impl<R: Rng> SessionController<R> {
    /// Create an idle session, loading the best score from `store`
    pub fn new(mut engine: GameEngine<R>, store: Box<dyn ScoreStore>) -> Self {
        let best = store.load_best();
        tracing::info!(best, "loaded best score");

        let state = engine.reset();
        Self {
            engine,
            state,
            score: ScoreTracker::with_best(best),
            store,
            session: SessionState::Idle,
            pending_direction: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Apply a command; `None` means it does not apply in the current state
    pub fn handle(&mut self, command: Command) -> Option<Transition> {
        let transition = match command {
            Command::Steer(direction) => {
                self.steer(direction);
                return None;
            }
            Command::Start => self.start(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => Some(self.restart()),
            Command::End => self.end(),
        };

        if transition.is_none() {
            tracing::debug!(?command, session = ?self.session, "command ignored");
        }
        transition
    }

    /// Queue a turn for the next tick.
    ///
    /// Turns along the axis the snake is already moving on are rejected, so
    /// the snake can never fold back onto its neck. Returns whether the turn
    /// was queued.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction.shares_axis(self.state.direction()) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Begin playing the board shown while idle; nothing has ticked on it yet
    pub fn start(&mut self) -> Option<Transition> {
        if self.session != SessionState::Idle {
            return None;
        }
        self.score.reset();
        self.pending_direction = None;
        self.session = SessionState::Running;
        tracing::info!("session started");
        Some(Transition::Started)
    }

    pub fn toggle_pause(&mut self) -> Option<Transition> {
        match self.session {
            SessionState::Running => {
                self.session = SessionState::Paused;
                tracing::info!(score = self.score.current(), "session paused");
                Some(Transition::Paused)
            }
            SessionState::Paused => {
                self.session = SessionState::Running;
                tracing::info!("session resumed");
                Some(Transition::Resumed)
            }
            SessionState::Idle | SessionState::Over => None,
        }
    }

    /// Throw away the current game and run a fresh one. Valid in every state.
    pub fn restart(&mut self) -> Transition {
        self.new_game();
        self.session = SessionState::Running;
        tracing::info!(best = self.score.best(), "session restarted");
        Transition::Restarted
    }

    pub fn end(&mut self) -> Option<Transition> {
        if self.session != SessionState::Running {
            return None;
        }
        self.session = SessionState::Over;
        tracing::info!(score = self.score.current(), "game over");
        Some(Transition::Ended)
    }

    /// Advance the game by one tick if it is running
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.session != SessionState::Running {
            return None;
        }

        if let Some(direction) = self.pending_direction.take() {
            if !direction.shares_axis(self.state.direction()) {
                self.state.snake.direction = direction;
            }
        }

        let outcome = self.engine.tick(&mut self.state, &mut self.score);
        if outcome == (TickOutcome::Ate { new_best: true }) {
            let best = self.score.best();
            tracing::info!(best, "new best score");
            self.store.save_best(best);
        }
        Some(outcome)
    }

    fn new_game(&mut self) {
        self.state = self.engine.reset();
        self.score.reset();
        self.pending_direction = None;
    }
}
