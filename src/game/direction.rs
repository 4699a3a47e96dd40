use serde::{Deserialize, Serialize};

/// Heading of the snake, one unit step along a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn.
    ///
    /// Each requested heading is rejected by looking at the sign of the
    /// current heading on the axis the request would reverse, so only the
    /// exact inverse of the active axis is refused.
    pub fn is_opposite(&self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        match other {
            Direction::Up => dy == 1,
            Direction::Down => dy == -1,
            Direction::Left => dx == 1,
            Direction::Right => dx == -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Right.is_opposite(Direction::Up));
        assert!(!Direction::Right.is_opposite(Direction::Down));
    }

    #[test]
    fn test_same_direction_is_not_opposite() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert!(!dir.is_opposite(dir));
        }
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
