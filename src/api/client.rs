use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::error::ApiError;
use super::service::ScoreService;
use super::types::{
    LeaderboardEntry, LoginRequest, ScoreSubmission, User, decode_top_scores, decode_user,
};
use crate::config::ApiConfig;

/// [`ScoreService`] over HTTP + JSON
pub struct HttpScoreService {
    client: Client,
    config: ApiConfig,
}

impl HttpScoreService {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Body of a 2xx response; anything else is an error
async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}

#[async_trait]
impl ScoreService for HttpScoreService {
    async fn login(&self, username: &str) -> Result<User, ApiError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ApiError::EmptyUsername);
        }

        let response = self
            .client
            .post(self.config.endpoint("login"))
            .json(&LoginRequest { username })
            .send()
            .await?;
        let body = read_body(response).await?;

        Ok(decode_user(&body, username))
    }

    async fn submit_score(&self, username: &str, score: u32) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("updateScore"))
            .json(&ScoreSubmission { username, score })
            .send()
            .await?;
        let body = read_body(response).await?;

        debug!(%username, score, response = %body, "score submitted");
        Ok(())
    }

    async fn top_scores(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint("topScores"))
            .send()
            .await?;
        let body = read_body(response).await?;

        Ok(decode_top_scores(&body)?)
    }
}
