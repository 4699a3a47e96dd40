use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use super::terminal::Tui;
use crate::api::{ScoreService, User};
use crate::game::{GameConfig, GameEngine, Intent, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::{PlayView, Renderer};
use crate::reporter::{Leaderboard, ReporterEvent, ScoreReporter};

/// The game screen: ticks the engine, routes keys, and reports finished games
pub struct PlayMode {
    engine: GameEngine,
    user: User,
    reporter: ScoreReporter,
    reporter_events: UnboundedReceiver<ReporterEvent>,
    leaderboard: Leaderboard,
    stats: SessionStats,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, user: User, service: Arc<dyn ScoreService>) -> Self {
        let (reporter, reporter_events) = ScoreReporter::new(service, user.username.clone());

        Self {
            engine: GameEngine::new(config),
            user,
            reporter,
            reporter_events,
            leaderboard: Leaderboard::new(),
            stats: SessionStats::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut Tui, renderer: &mut Renderer) -> Result<()> {
        self.reporter.refresh();

        // Key events and ticks share this task, so they never overlap
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.draw(terminal, renderer)?;

        loop {
            let dirty = tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(event) => self.handle_event(event.context("Failed to read terminal event")?),
                        None => {
                            self.should_quit = true;
                            false
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => self.update_game(),

                // Leaderboard snapshots from the reporter
                Some(event) = self.reporter_events.recv() => {
                    self.leaderboard.apply(event);
                    true
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                    false
                }
            };

            if self.should_quit {
                break;
            }

            if dirty {
                self.draw(terminal, renderer)?;
            }
        }

        info!(username = %self.user.username, "leaving game");
        Ok(())
    }

    fn draw(&self, terminal: &mut Tui, renderer: &mut Renderer) -> Result<()> {
        let view = PlayView {
            username: &self.user.username,
            state: self.engine.state(),
            stats: &self.stats,
            leaderboard: &self.leaderboard,
        };
        terminal
            .draw(|frame| renderer.render_play(frame, &view))
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Returns true when the screen needs a redraw
    fn handle_event(&mut self, event: Event) -> bool {
        let key = match event {
            Event::Key(key) => key,
            Event::Resize(_, _) => return true,
            _ => return false,
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(_) => {
                if let Some(direction) = self
                    .input_handler
                    .on_key(key, self.engine.pending_heading())
                {
                    self.engine.submit(Intent::Steer(direction));
                }
                false
            }
            KeyAction::TogglePause => {
                self.engine.submit(Intent::TogglePause);
                self.stats.track(self.engine.state().status);
                true
            }
            KeyAction::Reset => {
                self.engine.submit(Intent::Reset);
                self.stats.on_game_start();
                true
            }
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::None => false,
        }
    }

    /// Returns true when the screen needs a redraw
    fn update_game(&mut self) -> bool {
        match self.engine.tick() {
            TickOutcome::Idle => false,
            TickOutcome::Moved { .. } => true,
            TickOutcome::GameOver { score, .. } => {
                self.stats.on_game_over(score);
                self.reporter.report_game_over(score);
                true
            }
        }
    }
}
