use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{
    config::GameConfig,
    direction::Direction,
    grid::{self, CollisionType},
    state::{GameState, GameStatus},
};

/// Requests from outside the game loop. Nothing else writes to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Change the heading used by the next tick
    Steer(Direction),
    /// Switch between running and paused
    TogglePause,
    /// Start over with a fresh snake, food and score
    Reset,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or over; nothing was touched
    Idle,
    /// The snake moved one cell
    Moved { ate_food: bool },
    /// The snake hit a wall or itself; carries the final score
    GameOver {
        score: u32,
        collision: CollisionType,
    },
}

/// The game engine that owns the game state and advances it on each tick
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
    pending_heading: Direction,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: rand::Rng> GameEngine<R> {
    /// Create an engine with a caller-supplied random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let state = GameState::initial(&config);
        let pending_heading = config.initial_heading;

        Self {
            config,
            rng,
            state,
            pending_heading,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Heading the next tick will move along
    pub fn pending_heading(&self) -> Direction {
        self.pending_heading
    }

    /// Apply an intent. Steering only stages the heading for the next tick.
    pub fn submit(&mut self, intent: Intent) {
        match intent {
            Intent::Steer(direction) => {
                // Compared against the latest staged heading, not the last moved one
                if !self.pending_heading.is_opposite(direction) {
                    self.pending_heading = direction;
                }
            }
            Intent::TogglePause => {
                self.state.status = match self.state.status {
                    GameStatus::Running => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Running,
                    GameStatus::Over => GameStatus::Over,
                };
                debug!(status = ?self.state.status, "pause toggled");
            }
            Intent::Reset => self.reset(),
        }
    }

    /// Reset the game to its initial state
    pub fn reset(&mut self) {
        self.state = GameState::initial(&self.config);
        self.pending_heading = self.config.initial_heading;
        info!("game reset");
    }

    /// Execute one tick of the game
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.state.heading = self.pending_heading;

        let step = grid::advance(
            &self.state.snake,
            self.state.food,
            self.state.heading,
            self.state.tile_count,
            &mut self.rng,
        );

        if let Some(collision) = step.collision {
            self.state.status = GameStatus::Over;
            info!(score = self.state.score, ?collision, "game over");
            return TickOutcome::GameOver {
                score: self.state.score,
                collision,
            };
        }

        self.state.snake = step.snake;
        self.state.food = step.food;
        if step.ate_food {
            self.state.score += 1;
        }

        TickOutcome::Moved {
            ate_food: step.ate_food,
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
