//! End-to-end checks of a play session through the public API

use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

use wrap_snake::game::{
    Direction, FoodPlacer, GameConfig, GameEngine, Position, Snake, TickOutcome,
};
use wrap_snake::session::{Command, SessionController, SessionState, TickScheduler};
use wrap_snake::store::{FileScoreStore, MemoryScoreStore, ScoreStore};

fn seeded(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

fn controller(store: Box<dyn ScoreStore>) -> SessionController {
    SessionController::new(GameEngine::new(seeded(1)).unwrap(), store)
}

/// Steer greedily towards the food until `meals` more have been eaten.
///
/// Running into the body only resets the snake, so this always gets there.
fn chase_food(controller: &mut SessionController, meals: u32) {
    let target = controller.score().current() + meals * 10;

    for _ in 0..10_000 {
        if controller.score().current() >= target {
            return;
        }
        let head = controller.state().snake.head();
        let food = controller.state().food;
        let wanted = if head.x < food.x {
            Direction::Right
        } else if head.x > food.x {
            Direction::Left
        } else if head.y < food.y {
            Direction::Down
        } else {
            Direction::Up
        };
        controller.handle(Command::Steer(wanted));
        controller.tick();
    }
    panic!("snake never reached its food");
}

#[test]
fn scenario_eating_from_the_start_position() {
    let mut engine = GameEngine::new(seeded(8)).unwrap();
    let mut state = engine.reset();
    state.food = Position::new(11, 10);
    let mut score = wrap_snake::game::ScoreTracker::new();

    assert_eq!(
        state.snake.body,
        vec![Position::new(10, 10), Position::new(9, 10), Position::new(8, 10)]
    );

    let outcome = engine.tick(&mut state, &mut score);

    assert!(matches!(outcome, TickOutcome::Ate { .. }));
    assert_eq!(
        state.snake.body,
        vec![
            Position::new(11, 10),
            Position::new(10, 10),
            Position::new(9, 10),
            Position::new(8, 10),
        ]
    );
    assert_eq!(score.current(), 10);
    assert!(!state.snake.occupies(state.food));
}

#[test]
fn movement_without_food_keeps_length_for_a_full_lap() {
    let mut engine = GameEngine::new(seeded(2)).unwrap();
    let mut state = engine.reset();
    let mut score = wrap_snake::game::ScoreTracker::new();
    // Park the food off the snake's row so a lap never eats it
    state.food = Position::new(0, 0);

    for _ in 0..40 {
        assert_eq!(engine.tick(&mut state, &mut score), TickOutcome::Moved);
        assert_eq!(state.snake.len(), 3);
    }
    // Two full laps around a 20-wide torus end where they started
    assert_eq!(state.snake.head(), Position::new(10, 10));
}

#[test]
fn self_overlap_resets_geometry_but_not_score() {
    let mut engine = GameEngine::new(seeded(3)).unwrap();
    let mut score = wrap_snake::game::ScoreTracker::new();
    score.add_points(40);

    let mut state = engine.reset();
    state.snake = Snake {
        body: vec![
            Position::new(3, 3),
            Position::new(3, 4),
            Position::new(4, 4),
            Position::new(4, 3),
            Position::new(4, 2),
        ],
        direction: Direction::Right,
    };
    state.food = Position::new(15, 15);

    assert_eq!(engine.tick(&mut state, &mut score), TickOutcome::SoftReset);
    assert_eq!(state.snake, engine.starting_snake());
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(score.current(), 40);
}

#[test]
fn food_never_lands_on_the_snake_across_seeds() {
    let snake = Snake::new(Position::new(10, 10), Direction::Right, 19, 20);

    for seed in 0..2_000 {
        let food = FoodPlacer::from_seed(Some(seed)).place(&snake, 20).unwrap();
        assert!(!snake.occupies(food));
        assert!((0..20).contains(&food.x) && (0..20).contains(&food.y));
    }
}

#[test]
fn best_score_is_reloaded_by_the_next_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");

    {
        let mut first = controller(Box::new(FileScoreStore::new(&path)));
        first.handle(Command::Start);
        chase_food(&mut first, 2);
        assert_eq!(first.score().current(), 20);
        assert_eq!(first.score().best(), 20);

        first.handle(Command::Restart);
        assert_eq!(first.score().current(), 0);
        assert_eq!(first.score().best(), 20);
    }

    let second = controller(Box::new(FileScoreStore::new(&path)));
    assert_eq!(second.session(), SessionState::Idle);
    assert_eq!(second.score().best(), 20);
    assert_eq!(second.score().current(), 0);
}

#[test]
fn garbage_store_starts_from_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, r#"{"snakeHighScore": "NaN"}"#).unwrap();

    let session = controller(Box::new(FileScoreStore::new(&path)));
    assert_eq!(session.score().best(), 0);
}

fn apply(session: &mut SessionController, scheduler: &mut TickScheduler, command: Command) {
    if let Some(transition) = session.handle(command) {
        scheduler.apply(transition.schedule());
    }
}

/// Drive a controller the way the play loop does, counting ticks in virtual time
async fn run_for(
    controller: &mut SessionController,
    scheduler: &mut TickScheduler,
    duration: Duration,
) -> u32 {
    let mut ticks = 0;
    let run = async {
        loop {
            scheduler.wait().await;
            if controller.tick().is_some() {
                ticks += 1;
            }
            if controller.session() == SessionState::Running {
                scheduler.arm();
            }
        }
    };
    let _ = timeout(duration, run).await;
    ticks
}

#[tokio::test(start_paused = true)]
async fn pause_and_restart_never_double_the_tick_rate() {
    let config = seeded(4);
    let mut scheduler = TickScheduler::new(config.tick_interval());
    let mut session = SessionController::new(
        GameEngine::new(config).unwrap(),
        Box::new(MemoryScoreStore::new()),
    );

    apply(&mut session, &mut scheduler, Command::Start);
    // Rapid toggling and restarting must leave exactly one pending tick
    apply(&mut session, &mut scheduler, Command::TogglePause);
    apply(&mut session, &mut scheduler, Command::TogglePause);
    apply(&mut session, &mut scheduler, Command::Restart);
    apply(&mut session, &mut scheduler, Command::Restart);

    let ticks = run_for(&mut session, &mut scheduler, Duration::from_millis(1_540)).await;
    assert_eq!(ticks, 10);

    apply(&mut session, &mut scheduler, Command::TogglePause);
    let ticks = run_for(&mut session, &mut scheduler, Duration::from_millis(1_000)).await;
    assert_eq!(ticks, 0);
}
