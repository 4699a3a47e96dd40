use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where the remote score service lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without the `/api` suffix
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of an endpoint under `/api`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = ApiConfig::new("http://scores.local:9000");
        assert_eq!(config.endpoint("login"), "http://scores.local:9000/api/login");
        assert_eq!(
            config.endpoint("/topScores"),
            "http://scores.local:9000/api/topScores"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://scores.local/");
        assert_eq!(config.base_url, "http://scores.local");
        assert_eq!(config.endpoint("updateScore"), "http://scores.local/api/updateScore");
    }

    #[test]
    fn test_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
