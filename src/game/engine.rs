use rand::Rng;
use rand::rngs::StdRng;

use super::{
    action::Direction,
    config::GameConfig,
    food::FoodPlacer,
    score::ScoreTracker,
    state::{GameState, Position, Snake},
};
use crate::error::GameResult;

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake advanced one cell without growing
    Moved,
    /// The snake ate food and grew by one segment
    Ate {
        /// The best score was beaten and must be persisted
        new_best: bool,
    },
    /// The head would have landed on the body; the snake was put back at its start
    SoftReset,
}

/// The game engine that handles all game logic
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    food: FoodPlacer<R>,
}

impl GameEngine<StdRng> {
    /// Create a new game engine, seeding food placement from the configuration
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let food = FoodPlacer::from_seed(config.seed);
        Self::with_placer(config, food)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_placer(config: GameConfig, food: FoodPlacer<R>) -> GameResult<Self> {
        config.validate()?;
        Ok(Self { config, food })
    }

    /// The canonical starting snake: centred, heading right, body trailing left
    pub fn starting_snake(&self) -> Snake {
        let center = (self.config.grid_size / 2) as i32;
        Snake::new(
            Position::new(center, center),
            Direction::default(),
            self.config.initial_snake_length,
            self.config.grid_size,
        )
    }

    /// Build a fresh game state
    pub fn reset(&mut self) -> GameState {
        let snake = self.starting_snake();
        let fallback = snake.body[snake.len() - 1];
        let food = self.spawn_food(&snake, fallback);
        GameState::new(snake, food, self.config.grid_size)
    }

    /// Advance the game by one tick.
    ///
    /// `state` is borrowed exclusively for the whole tick, so no snapshot can
    /// be taken between moving the head and dropping the tail.
    pub fn tick(&mut self, state: &mut GameState, score: &mut ScoreTracker) -> TickOutcome {
        let new_head = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction, state.grid_size);
        debug_assert!(state.is_in_bounds(new_head));

        if state.snake.occupies(new_head) {
            let snake = self.starting_snake();
            let food = self.spawn_food(&snake, state.food);
            state.snake = snake;
            state.food = food;
            tracing::info!(
                head_x = new_head.x,
                head_y = new_head.y,
                score = score.current(),
                "self-overlap, snake reset to start"
            );
            return TickOutcome::SoftReset;
        }

        state.snake.body.insert(0, new_head);

        if new_head == state.food {
            score.add_points(self.config.food_reward);
            let new_best = score.maybe_update_best();
            state.food = self.spawn_food(&state.snake, state.food);
            TickOutcome::Ate { new_best }
        } else {
            state.snake.body.pop();
            TickOutcome::Moved
        }
    }

    /// Place food away from the snake, keeping `fallback` if the grid is full
    fn spawn_food(&mut self, snake: &Snake, fallback: Position) -> Position {
        self.food
            .place(snake, self.config.grid_size)
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "food left in place");
                fallback
            })
    }
}
