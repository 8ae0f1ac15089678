use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::{Position, Snake};
use crate::error::{GameError, GameResult};

/// Rejection-sampling attempts per grid cell before falling back to a scan
const ATTEMPTS_PER_CELL: usize = 4;

/// Chooses food cells uniformly among the cells the snake does not cover
pub struct FoodPlacer<R: Rng = StdRng> {
    rng: R,
}

impl FoodPlacer<StdRng> {
    /// Seeded placer, or one seeded from OS entropy when `seed` is `None`
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> FoodPlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a random free cell of the `grid_size` x `grid_size` grid.
    ///
    /// Samples uniformly and retries on occupied cells. A nearly full grid
    /// can make sampling slow, so after a fixed budget the free cells are
    /// enumerated and one is picked directly. Fails only when none is left.
    pub fn place(&mut self, snake: &Snake, grid_size: usize) -> GameResult<Position> {
        let n = grid_size as i32;
        let budget = grid_size * grid_size * ATTEMPTS_PER_CELL;

        for _ in 0..budget {
            let pos = Position::new(self.rng.gen_range(0..n), self.rng.gen_range(0..n));
            if !snake.occupies(pos) {
                return Ok(pos);
            }
        }

        let free: Vec<Position> = (0..n)
            .flat_map(|y| (0..n).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        if free.is_empty() {
            return Err(GameError::GridFull { size: grid_size });
        }
        Ok(free[self.rng.gen_range(0..free.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::game::state::GameState;

    #[test]
    fn test_never_places_on_snake() {
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 12, 20);

        for seed in 0..500 {
            let mut placer = FoodPlacer::from_seed(Some(seed));
            let food = placer.place(&snake, 20).unwrap();
            assert!(!snake.occupies(food), "seed {} placed food on snake", seed);
        }
    }

    #[test]
    fn test_placement_is_in_bounds() {
        let snake = Snake::new(Position::new(2, 2), Direction::Right, 3, 5);
        let mut placer = FoodPlacer::from_seed(Some(11));

        for _ in 0..200 {
            let food = placer.place(&snake, 5).unwrap();
            let state = GameState::new(snake.clone(), food, 5);
            assert!(state.is_in_bounds(food));
        }
    }

    #[test]
    fn test_same_seed_same_food() {
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 3, 20);
        let a = FoodPlacer::from_seed(Some(42)).place(&snake, 20).unwrap();
        let b = FoodPlacer::from_seed(Some(42)).place(&snake, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_free_cell_is_found() {
        // 4x4 grid covered by a 15-segment serpentine, leaving (0,3) free
        let mut body = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                let x = if y % 2 == 0 { x } else { 3 - x };
                body.push(Position::new(x, y));
            }
        }
        body.pop();
        let snake = Snake {
            body,
            direction: Direction::Right,
        };

        let mut placer = FoodPlacer::from_seed(Some(3));
        assert_eq!(placer.place(&snake, 4).unwrap(), Position::new(0, 3));
    }

    #[test]
    fn test_full_grid_is_an_error() {
        let body = (0..2)
            .flat_map(|y| (0..2).map(move |x| Position::new(x, y)))
            .collect();
        let snake = Snake {
            body,
            direction: Direction::Right,
        };

        let mut placer = FoodPlacer::from_seed(Some(1));
        assert!(matches!(
            placer.place(&snake, 2),
            Err(GameError::GridFull { size: 2 })
        ));
    }
}
