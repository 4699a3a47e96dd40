//! Grid model: one movement step of the snake over a square grid.
//!
//! `advance` is pure apart from the random source used to place new food;
//! it never touches `GameState` directly.

use rand::Rng;

use super::direction::Direction;
use super::state::{Position, Snake};

/// Type of collision that ended a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head landed on a segment of the pre-move snake
    SelfCollision,
}

/// Outcome of advancing the grid by one step
#[derive(Debug, Clone, PartialEq)]
pub struct Advance {
    pub snake: Snake,
    pub food: Position,
    pub ate_food: bool,
    pub collision: Option<CollisionType>,
}

impl Advance {
    pub fn collided(&self) -> bool {
        self.collision.is_some()
    }
}

/// Move the snake one cell along `heading`.
///
/// On a collision the snake and food come back unchanged. Otherwise the new
/// head is prepended and the tail dropped, unless the head lands on the food,
/// in which case the snake grows by one and the food moves to a uniformly
/// random cell. The new food cell may overlap the snake.
pub fn advance<R: Rng + ?Sized>(
    snake: &Snake,
    food: Position,
    heading: Direction,
    tile_count: usize,
    rng: &mut R,
) -> Advance {
    let new_head = snake.head().moved_in_direction(heading);

    if let Some(collision) = check_collision(snake, new_head, tile_count) {
        return Advance {
            snake: snake.clone(),
            food,
            ate_food: false,
            collision: Some(collision),
        };
    }

    let ate_food = new_head == food;
    let mut next = snake.clone();
    next.push_head(new_head, ate_food);

    let food = if ate_food {
        random_cell(tile_count, rng)
    } else {
        food
    };

    Advance {
        snake: next,
        food,
        ate_food,
        collision: None,
    }
}

/// Check if the new head position causes a collision
fn check_collision(snake: &Snake, head: Position, tile_count: usize) -> Option<CollisionType> {
    if !head.is_within(tile_count) {
        return Some(CollisionType::Wall);
    }

    // The tail still counts: it has not moved away yet
    if snake.occupies(head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// Pick a uniformly random cell of the grid
pub fn random_cell<R: Rng + ?Sized>(tile_count: usize, rng: &mut R) -> Position {
    let x = rng.gen_range(0..tile_count) as i32;
    let y = rng.gen_range(0..tile_count) as i32;
    Position::new(x, y)
}
