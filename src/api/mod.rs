//! Boundary to the remote score service.
//!
//! The game only ever talks to the service through [`ScoreService`], so tests
//! can swap in an in-memory implementation with no network involved.

pub mod client;
pub mod error;
pub mod memory;
pub mod service;
pub mod types;

pub use client::HttpScoreService;
pub use error::ApiError;
pub use memory::InMemoryScoreService;
pub use service::ScoreService;
pub use types::{EntryId, LeaderboardEntry, User};
