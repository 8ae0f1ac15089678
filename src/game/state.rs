use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, wrapping each axis onto a `grid_size`-wide torus
    pub fn moved_by(&self, dx: i32, dy: i32, grid_size: usize) -> Self {
        Self {
            x: wrap_axis(self.x + dx, grid_size),
            y: wrap_axis(self.y + dy, grid_size),
        }
    }

    /// Move position one cell in a direction, wrapping at the grid edges
    pub fn moved_in_direction(&self, direction: Direction, grid_size: usize) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy, grid_size)
    }
}

/// Leaving one edge re-enters from the opposite edge.
fn wrap_axis(value: i32, grid_size: usize) -> i32 {
    let n = grid_size as i32;
    if value < 0 {
        n - 1
    } else if value >= n {
        0
    } else {
        value
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction.
    ///
    /// The body trails behind the head, wrapping if it reaches an edge.
    pub fn new(head: Position, direction: Direction, length: usize, grid_size: usize) -> Self {
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);

        let (dx, dy) = direction.delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy, grid_size));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if position is covered by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The playing field: grid dimension, snake and food
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_size: usize,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            grid_size,
        }
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let n = self.grid_size as i32;
        pos.x >= 0 && pos.x < n && pos.y >= 0 && pos.y < n
    }
}
