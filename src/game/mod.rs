//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine is the only writer of `GameState`; everything else submits intents.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::{GameConfig, MAX_SURFACE_SIZE, MAX_TILE_COUNT};
pub use direction::Direction;
pub use engine::{GameEngine, Intent, TickOutcome};
pub use grid::{Advance, CollisionType, advance};
pub use state::{GameState, GameStatus, Position, Snake};
