use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::{ScoreService, User};
use crate::game::GameConfig;
use crate::modes::{LoginMode, PlayMode, terminal};
use crate::render::Renderer;

/// Login screen followed by the game, on one terminal session
pub struct App {
    config: GameConfig,
    service: Arc<dyn ScoreService>,
    username: Option<String>,
}

impl App {
    pub fn new(config: GameConfig, service: Arc<dyn ScoreService>) -> Self {
        Self {
            config,
            service,
            username: None,
        }
    }

    /// Log in with this name up front instead of asking for one
    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    pub async fn run(self) -> Result<()> {
        let preset = self.preset_login().await;

        let mut terminal = terminal::setup()?;
        let mut renderer = Renderer::new(&self.config);

        // Run screens with cleanup
        let result = self.run_screens(&mut terminal, &mut renderer, preset).await;

        terminal::restore(&mut terminal)?;
        info!("terminal restored");

        result
    }

    async fn run_screens(
        &self,
        terminal: &mut terminal::Tui,
        renderer: &mut Renderer,
        preset: PresetLogin,
    ) -> Result<()> {
        let user = match preset {
            PresetLogin::Ready(user) => user,
            PresetLogin::Ask { input, error } => {
                let mut login = LoginMode::new(Arc::clone(&self.service)).prefilled(&input, error);
                match login.run(terminal, renderer).await? {
                    Some(user) => user,
                    None => return Ok(()),
                }
            }
        };

        let mut play = PlayMode::new(self.config.clone(), user, Arc::clone(&self.service));
        play.run(terminal, renderer).await
    }

    async fn preset_login(&self) -> PresetLogin {
        let Some(username) = self.username.as_deref() else {
            return PresetLogin::Ask {
                input: String::new(),
                error: None,
            };
        };

        match self.service.login(username).await {
            Ok(user) => {
                info!(username = %user.username, "logged in");
                PresetLogin::Ready(user)
            }
            Err(e) => {
                warn!(%username, "login failed: {e}");
                PresetLogin::Ask {
                    input: username.to_string(),
                    error: Some(format!("Login failed: {e}")),
                }
            }
        }
    }
}

/// What to do before the first screen is shown
#[derive(Debug, PartialEq)]
enum PresetLogin {
    Ready(User),
    Ask { input: String, error: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryScoreService;

    fn app(username: Option<&str>) -> App {
        App::new(GameConfig::default(), Arc::new(InMemoryScoreService::new()))
            .with_username(username.map(str::to_string))
    }

    #[tokio::test]
    async fn test_no_username_asks() {
        assert_eq!(
            app(None).preset_login().await,
            PresetLogin::Ask {
                input: String::new(),
                error: None
            }
        );
    }

    #[tokio::test]
    async fn test_preset_username_logs_in() {
        assert_eq!(
            app(Some("ada")).preset_login().await,
            PresetLogin::Ready(User::named("ada"))
        );
    }

    #[tokio::test]
    async fn test_rejected_username_falls_back_to_form() {
        let preset = app(Some("  ")).preset_login().await;

        assert_eq!(
            preset,
            PresetLogin::Ask {
                input: "  ".to_string(),
                error: Some("Login failed: Username must not be empty".to_string()),
            }
        );
    }
}
