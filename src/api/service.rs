use async_trait::async_trait;

use super::error::ApiError;
use super::types::{LeaderboardEntry, User};

/// Remote score service: identity, score submission and the leaderboard
#[async_trait]
pub trait ScoreService: Send + Sync {
    /// Register or log in a user by name. Any successful response is accepted.
    async fn login(&self, username: &str) -> Result<User, ApiError>;

    /// Submit a finished game's score for `username`
    async fn submit_score(&self, username: &str, score: u32) -> Result<(), ApiError>;

    /// Current leaderboard, best score first
    async fn top_scores(&self) -> Result<Vec<LeaderboardEntry>, ApiError>;
}
