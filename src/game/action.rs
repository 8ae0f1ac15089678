/// Direction the snake can move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    /// Heading of a freshly initialized snake
    #[default]
    Right,
}

impl Direction {
    /// Returns true if both directions move along the same axis
    pub fn shares_axis(&self, other: Direction) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_axis() {
        assert!(Direction::Right.shares_axis(Direction::Left));
        assert!(Direction::Right.shares_axis(Direction::Right));
        assert!(Direction::Up.shares_axis(Direction::Down));

        assert!(!Direction::Right.shares_axis(Direction::Up));
        assert!(!Direction::Down.shares_axis(Direction::Left));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_default_heading_is_right() {
        assert_eq!(Direction::default(), Direction::Right);
    }
}
