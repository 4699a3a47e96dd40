//! Score reporter: pushes final scores and keeps a cached leaderboard fresh.
//!
//! All network work runs on spawned tasks. Results come back to the UI loop
//! as [`ReporterEvent`]s, so a slow or failing service never stalls a tick.
//! Failures are logged and dropped.

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::types::LEADERBOARD_SIZE;
use crate::api::{LeaderboardEntry, ScoreService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterEvent {
    /// A fresh leaderboard snapshot that should replace the cached one
    Leaderboard(Vec<LeaderboardEntry>),
}

/// Locally cached leaderboard snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot; keeps server order and at most ten rows
    pub fn replace(&mut self, mut entries: Vec<LeaderboardEntry>) {
        entries.truncate(LEADERBOARD_SIZE);
        self.entries = entries;
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn apply(&mut self, event: ReporterEvent) {
        match event {
            ReporterEvent::Leaderboard(entries) => self.replace(entries),
        }
    }
}

pub struct ScoreReporter {
    service: Arc<dyn ScoreService>,
    username: String,
    events: UnboundedSender<ReporterEvent>,
}

impl ScoreReporter {
    /// Create a reporter for `username` and the receiving end of its events
    pub fn new(
        service: Arc<dyn ScoreService>,
        username: impl Into<String>,
    ) -> (Self, UnboundedReceiver<ReporterEvent>) {
        let (events, receiver) = unbounded_channel();
        let reporter = Self {
            service,
            username: username.into(),
            events,
        };
        (reporter, receiver)
    }

    /// Fetch the leaderboard in the background
    pub fn refresh(&self) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();

        tokio::spawn(async move {
            fetch_leaderboard(service.as_ref(), &events).await;
        })
    }

    /// Submit a finished game's score, then refresh the leaderboard.
    ///
    /// Call once per game over. The refresh only happens if the submission
    /// went through.
    pub fn report_game_over(&self, score: u32) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        let username = self.username.clone();

        tokio::spawn(async move {
            match service.submit_score(&username, score).await {
                Ok(()) => {
                    info!(%username, score, "score submitted");
                    fetch_leaderboard(service.as_ref(), &events).await;
                }
                Err(e) => warn!(%username, score, "failed to submit score: {e}"),
            }
        })
    }
}

async fn fetch_leaderboard(service: &dyn ScoreService, events: &UnboundedSender<ReporterEvent>) {
    let entries = match service.top_scores().await {
        Ok(entries) => entries,
        Err(e) if e.is_malformed() => {
            warn!("unexpected leaderboard payload, showing an empty board: {e}");
            Vec::new()
        }
        Err(e) => {
            warn!("failed to fetch leaderboard: {e}");
            return;
        }
    };

    info!(rows = entries.len(), "leaderboard refreshed");

    // The UI may already be gone; nothing to do then
    let _ = events.send(ReporterEvent::Leaderboard(entries));
}
