//! Snake Board - terminal Snake with a username login and a shared high-score board
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard mapping (input module)
//! - Board painting and TUI screens (render module)
//! - The remote score service boundary (api module) and the score reporter
//! - Login and play screens (modes module)

pub mod api;
pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod reporter;
