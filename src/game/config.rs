use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::direction::Direction;
use super::state::Position;

/// Largest board the game accepts, in tiles per side
pub const MAX_TILE_COUNT: usize = 200;

/// Largest drawing surface the game accepts, in pixels per side
pub const MAX_SURFACE_SIZE: u32 = 2048;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of tiles along each side of the square grid
    pub tile_count: usize,
    /// Edge length of one tile on the drawing surface, in pixels
    pub cell_size: u32,
    /// Wall-clock interval between two ticks, in milliseconds
    pub tick_ms: u64,

    /// Cell the single-segment snake starts on
    pub origin: Position,
    /// Food cell placed at the start of every game
    pub initial_food: Position,
    /// Heading the snake starts with
    pub initial_heading: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 20,
            cell_size: 20,
            tick_ms: 100,
            origin: Position::new(5, 5),
            initial_food: Position::new(10, 10),
            initial_heading: Direction::Right,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size.
    ///
    /// The start cells are pulled inside the grid when it is smaller than the defaults.
    pub fn new(tile_count: usize) -> Self {
        let defaults = Self::default();
        let last = tile_count.saturating_sub(1) as i32;
        let clamp = |pos: Position| Position::new(pos.x.min(last), pos.y.min(last));

        Self {
            tile_count,
            origin: clamp(defaults.origin),
            initial_food: clamp(defaults.initial_food),
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Side length of the drawing surface in pixels, saturating at `u32::MAX`
    pub fn surface_size(&self) -> u32 {
        u32::try_from(self.tile_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.cell_size)
    }

    /// Whether the board and its drawing surface stay within the supported limits
    pub fn fits_limits(&self) -> bool {
        self.tile_count <= MAX_TILE_COUNT && self.surface_size() <= MAX_SURFACE_SIZE
    }
}
