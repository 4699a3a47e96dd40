//! In-process score service
//!
//! Keeps each user's best score in memory. Backs `--offline` play and the
//! tests of everything that sits on top of [`ScoreService`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::error::ApiError;
use super::service::ScoreService;
use super::types::{LEADERBOARD_SIZE, LeaderboardEntry, User};

#[derive(Default)]
pub struct InMemoryScoreService {
    high_scores: Mutex<HashMap<String, u32>>,
    submissions: Mutex<Vec<(String, u32)>>,
}

impl InMemoryScoreService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user's best score
    pub fn with_score(self, username: &str, score: u32) -> Self {
        self.record(username, score);
        self
    }

    /// Every submission received so far, in order
    pub fn submissions(&self) -> Vec<(String, u32)> {
        self.submissions
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn record(&self, username: &str, score: u32) {
        if let Ok(mut scores) = self.high_scores.lock() {
            let best = scores.entry(username.to_string()).or_insert(0);
            *best = (*best).max(score);
        }
    }
}

#[async_trait]
impl ScoreService for InMemoryScoreService {
    async fn login(&self, username: &str) -> Result<User, ApiError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ApiError::EmptyUsername);
        }

        self.record(username, 0);
        Ok(User::named(username))
    }

    async fn submit_score(&self, username: &str, score: u32) -> Result<(), ApiError> {
        if let Ok(mut submissions) = self.submissions.lock() {
            submissions.push((username.to_string(), score));
        }
        self.record(username, score);
        Ok(())
    }

    async fn top_scores(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let mut entries: Vec<LeaderboardEntry> = self
            .high_scores
            .lock()
            .map(|scores| {
                scores
                    .iter()
                    .map(|(name, score)| LeaderboardEntry::new(name.clone(), *score))
                    .collect()
            })
            .unwrap_or_default();

        entries.sort_by(|a, b| {
            b.high_score
                .cmp(&a.high_score)
                .then_with(|| a.username.cmp(&b.username))
        });
        entries.truncate(LEADERBOARD_SIZE);
        Ok(entries)
    }
}
