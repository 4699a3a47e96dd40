use anyhow::{Context, Result, ensure};
use clap::Parser;
use snake_board::api::{HttpScoreService, InMemoryScoreService, ScoreService};
use snake_board::app::App;
use snake_board::config::{ApiConfig, DEFAULT_API_URL};
use snake_board::game::{GameConfig, MAX_SURFACE_SIZE, MAX_TILE_COUNT};
use snake_board::logging;
use snake_board::render::board::CELL_GAP;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "snake_board")]
#[command(version, about = "Snake with a username login and a shared high-score board")]
struct Cli {
    /// Base URL of the score service
    #[arg(long, env = "SNAKE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Log in with this name instead of showing the login form
    #[arg(long, env = "SNAKE_USERNAME")]
    username: Option<String>,

    /// Keep scores in memory instead of talking to the score service
    #[arg(long)]
    offline: bool,

    /// Tiles along each side of the board
    #[arg(long, default_value = "20")]
    tile_count: usize,

    /// Tile size on the drawing surface, in pixels
    #[arg(long, default_value = "20")]
    cell_size: u32,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Timeout for each request to the score service, in seconds
    #[arg(long, default_value = "5")]
    request_timeout_secs: u64,

    /// Where to write logs
    #[arg(long, default_value = "snake_board.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = game_config(&cli)?;

    logging::init(&cli.log_file)?;

    let service: Arc<dyn ScoreService> = if cli.offline {
        Arc::new(InMemoryScoreService::new())
    } else {
        let api = ApiConfig::new(cli.api_url)
            .with_timeout(Duration::from_secs(cli.request_timeout_secs));
        Arc::new(HttpScoreService::new(api).context("Failed to build HTTP client")?)
    };

    App::new(config, service)
        .with_username(cli.username)
        .run()
        .await
}

/// Create game configuration from CLI arguments
fn game_config(cli: &Cli) -> Result<GameConfig> {
    ensure!(
        (2..=MAX_TILE_COUNT).contains(&cli.tile_count),
        "--tile-count must be between 2 and {MAX_TILE_COUNT}"
    );
    ensure!(cli.cell_size > CELL_GAP, "--cell-size must be larger than {CELL_GAP}");
    ensure!(cli.tick_ms > 0, "--tick-ms must be positive");

    let config = GameConfig::new(cli.tile_count)
        .with_cell_size(cli.cell_size)
        .with_tick_ms(cli.tick_ms);
    ensure!(
        config.fits_limits(),
        "--tile-count times --cell-size must not exceed {MAX_SURFACE_SIZE} pixels"
    );

    Ok(config)
}
