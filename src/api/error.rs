use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered with status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Username must not be empty")]
    EmptyUsername,
}

impl ApiError {
    /// True when the server answered but with a body we could not read
    pub fn is_malformed(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}
