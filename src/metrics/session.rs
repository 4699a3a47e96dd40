use std::time::{Duration, Instant};

use crate::game::GameStatus;

/// Per-session numbers shown next to the board. Never sent anywhere.
pub struct SessionStats {
    running_since: Option<Instant>,
    accumulated: Duration,
    pub best_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            running_since: Some(Instant::now()),
            accumulated: Duration::ZERO,
            best_score: 0,
            games_played: 0,
        }
    }

    /// Time spent running in the current game; paused time is not counted
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }

    /// Keep the clock in step with the game status
    pub fn track(&mut self, status: GameStatus) {
        match (status, self.running_since) {
            (GameStatus::Running, None) => self.running_since = Some(Instant::now()),
            (GameStatus::Paused | GameStatus::Over, Some(since)) => {
                self.accumulated += since.elapsed();
                self.running_since = None;
            }
            _ => {}
        }
    }

    pub fn on_game_start(&mut self) {
        self.running_since = Some(Instant::now());
        self.accumulated = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.track(GameStatus::Over);
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
