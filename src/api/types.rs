use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum number of leaderboard rows kept and shown
pub const LEADERBOARD_SIZE: usize = 10;

/// Identity returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,

    /// Whatever else the server sent back
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            extra: Map::new(),
        }
    }
}

/// Row identifier assigned by the server; only ever compared, never interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(u64),
    Text(String),
}

/// One row of the leaderboard, as the server spells it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "Username")]
    pub username: String,

    #[serde(rename = "HighScore")]
    pub high_score: u32,

    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
}

impl LeaderboardEntry {
    pub fn new(username: impl Into<String>, high_score: u32) -> Self {
        Self {
            username: username.into(),
            high_score,
            id: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreSubmission<'a> {
    pub username: &'a str,
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopScoresResponse {
    #[serde(rename = "topScores")]
    pub top_scores: Vec<LeaderboardEntry>,
}

/// Decode a leaderboard body, keeping at most [`LEADERBOARD_SIZE`] rows in server order
pub fn decode_top_scores(body: &str) -> Result<Vec<LeaderboardEntry>, serde_json::Error> {
    let mut response: TopScoresResponse = serde_json::from_str(body)?;
    response.top_scores.truncate(LEADERBOARD_SIZE);
    Ok(response.top_scores)
}

/// Decode a login body. A body without a usable username falls back to the one submitted.
pub fn decode_user(body: &str, submitted: &str) -> User {
    match serde_json::from_str::<User>(body) {
        Ok(user) if !user.username.trim().is_empty() => user,
        _ => User::named(submitted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_top_scores() {
        let body = r#"{"topScores":[
            {"ID":3,"Username":"ada","HighScore":42},
            {"Username":"bob","HighScore":17}
        ]}"#;

        let entries = decode_top_scores(body).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].username, "ada");
        assert_eq!(entries[0].high_score, 42);
        assert_eq!(entries[0].id, Some(EntryId::Number(3)));
        assert_eq!(entries[1], LeaderboardEntry::new("bob", 17));
    }

    #[test]
    fn test_decode_top_scores_accepts_text_ids() {
        let body = r#"{"topScores":[
            {"ID":"65a1f","Username":"ada","HighScore":42},
            {"ID":null,"Username":"bob","HighScore":17}
        ]}"#;

        let entries = decode_top_scores(body).unwrap();

        assert_eq!(entries[0].id, Some(EntryId::Text("65a1f".to_string())));
        assert_eq!(entries[0].high_score, 42);
        assert_eq!(entries[1].id, None);
    }

    #[test]
    fn test_decode_top_scores_caps_rows() {
        let rows: Vec<String> = (0..15)
            .map(|i| format!(r#"{{"Username":"u{i}","HighScore":{}}}"#, 100 - i))
            .collect();
        let body = format!(r#"{{"topScores":[{}]}}"#, rows.join(","));

        let entries = decode_top_scores(&body).unwrap();

        assert_eq!(entries.len(), LEADERBOARD_SIZE);
        assert_eq!(entries[0].username, "u0");
        assert_eq!(entries[9].username, "u9");
    }

    #[test]
    fn test_decode_top_scores_rejects_unexpected_shape() {
        assert!(decode_top_scores("[]").is_err());
        assert!(decode_top_scores(r#"{"scores":[]}"#).is_err());
        assert!(decode_top_scores(r#"{"topScores":[{"name":"x"}]}"#).is_err());
        assert!(decode_top_scores("not json").is_err());
    }

    #[test]
    fn test_decode_user_keeps_extra_fields() {
        let user = decode_user(r#"{"username":"ada","highScore":12}"#, "ada");

        assert_eq!(user.username, "ada");
        assert_eq!(user.extra.get("highScore"), Some(&Value::from(12)));
    }

    #[test]
    fn test_decode_user_falls_back_to_submitted_name() {
        assert_eq!(decode_user("", "ada"), User::named("ada"));
        assert_eq!(decode_user(r#"{"ok":true}"#, "ada"), User::named("ada"));
        assert_eq!(decode_user(r#"{"username":"  "}"#, "ada"), User::named("ada"));
    }

    #[test]
    fn test_request_bodies() {
        let login = serde_json::to_value(LoginRequest { username: "ada" }).unwrap();
        assert_eq!(login, serde_json::json!({"username": "ada"}));

        let submission = serde_json::to_value(ScoreSubmission {
            username: "ada",
            score: 9,
        })
        .unwrap();
        assert_eq!(submission, serde_json::json!({"username": "ada", "score": 9}));
    }
}
