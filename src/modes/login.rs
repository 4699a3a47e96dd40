use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::sync::Arc;
use tracing::{info, warn};

use super::terminal::Tui;
use crate::api::{ScoreService, User};
use crate::render::{LoginView, Renderer};

/// Longest username the form accepts
const MAX_USERNAME_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginAction {
    Submit,
    Quit,
    Edited,
    None,
}

/// Username form. Any successful login response lets the player through.
pub struct LoginMode {
    service: Arc<dyn ScoreService>,
    input: String,
    error: Option<String>,
    busy: bool,
}

impl LoginMode {
    pub fn new(service: Arc<dyn ScoreService>) -> Self {
        Self {
            service,
            input: String::new(),
            error: None,
            busy: false,
        }
    }

    /// Start with a name already typed and an error to show, e.g. after a failed `--username`
    pub fn prefilled(mut self, input: &str, error: Option<String>) -> Self {
        self.input = input.chars().take(MAX_USERNAME_LEN).collect();
        self.error = error;
        self
    }

    /// Run the form until a login succeeds (`Some`) or the user quits (`None`)
    pub async fn run(&mut self, terminal: &mut Tui, renderer: &Renderer) -> Result<Option<User>> {
        let mut event_stream = EventStream::new();

        loop {
            self.draw(terminal, renderer)?;

            tokio::select! {
                maybe_event = event_stream.next() => {
                    let event = match maybe_event {
                        Some(event) => event.context("Failed to read terminal event")?,
                        None => return Ok(None),
                    };

                    match self.handle_event(event) {
                        LoginAction::Submit => {
                            self.busy = true;
                            self.draw(terminal, renderer)?;

                            if let Some(user) = self.submit().await {
                                return Ok(Some(user));
                            }
                        }
                        LoginAction::Quit => return Ok(None),
                        LoginAction::Edited | LoginAction::None => {}
                    }
                }

                _ = tokio::signal::ctrl_c() => return Ok(None),
            }
        }
    }

    fn draw(&self, terminal: &mut Tui, renderer: &Renderer) -> Result<()> {
        let view = LoginView {
            input: &self.input,
            error: self.error.as_deref(),
            busy: self.busy,
        };
        terminal
            .draw(|frame| renderer.render_login(frame, &view))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> LoginAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => LoginAction::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return LoginAction::Quit;
        }

        match key.code {
            KeyCode::Enter => LoginAction::Submit,
            KeyCode::Esc => LoginAction::Quit,
            KeyCode::Backspace => {
                self.input.pop();
                LoginAction::Edited
            }
            KeyCode::Char(c) if !c.is_control() && self.input.chars().count() < MAX_USERNAME_LEN => {
                self.input.push(c);
                LoginAction::Edited
            }
            _ => LoginAction::None,
        }
    }

    /// Try to log in with the typed name. Failures stay on the form.
    async fn submit(&mut self) -> Option<User> {
        let username = self.input.trim().to_string();
        self.busy = false;

        if username.is_empty() {
            self.error = Some("Username is required".to_string());
            return None;
        }

        match self.service.login(&username).await {
            Ok(user) => {
                info!(username = %user.username, "logged in");
                self.error = None;
                Some(user)
            }
            Err(e) => {
                warn!(%username, "login failed: {e}");
                self.error = Some(format!("Login failed: {e}"));
                None
            }
        }
    }
}
