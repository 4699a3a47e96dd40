use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies inside a `tile_count` x `tile_count` grid
    pub fn is_within(&self, tile_count: usize) -> bool {
        let limit = tile_count as i32;
        self.x >= 0 && self.x < limit && self.y >= 0 && self.y < limit
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
}

impl Snake {
    /// Create a single-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Create a snake from segments ordered head first.
    ///
    /// Returns `None` for an empty segment list.
    pub fn from_segments(body: Vec<Position>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Check if position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head, dropping the tail unless `grow` is set
    pub fn push_head(&mut self, head: Position, grow: bool) {
        self.body.insert(0, head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    /// Terminal until the game is reset
    Over,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub heading: Direction,
    pub tile_count: usize,
    pub score: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Create a new running game state
    pub fn new(snake: Snake, food: Position, heading: Direction, tile_count: usize) -> Self {
        Self {
            snake,
            food,
            heading,
            tile_count,
            score: 0,
            status: GameStatus::Running,
        }
    }

    /// Fresh state for a new game: one segment at the origin, default food and heading
    pub fn initial(config: &GameConfig) -> Self {
        Self::new(
            Snake::new(config.origin),
            config.initial_food,
            config.initial_heading,
            config.tile_count,
        )
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.tile_count)
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_from_segments() {
        assert!(Snake::from_segments(Vec::new()).is_none());

        let snake =
            Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)]).unwrap();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.segments()[1], Position::new(4, 5));
    }

    #[test]
    fn test_push_head() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.push_head(Position::new(6, 5), false);
        assert_eq!(snake.segments(), &[Position::new(6, 5)]);

        snake.push_head(Position::new(7, 5), true);
        assert_eq!(snake.segments(), &[Position::new(7, 5), Position::new(6, 5)]);
    }

    #[test]
    fn test_occupies_includes_head() {
        let snake =
            Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)]).unwrap();
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::initial(&GameConfig::default());

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial(&GameConfig::default());
        assert_eq!(state.snake.segments(), &[Position::new(5, 5)]);
        assert_eq!(state.food, Position::new(10, 10));
        assert_eq!(state.heading, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Running);
    }
}
