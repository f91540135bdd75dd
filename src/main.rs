use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use songboard::api::{ApiClient, ApiWorker};
use songboard::app::App;
use songboard::config::load_config;
use songboard::error::SongboardError;
use songboard::notification::NotificationKind;

/// How long the UI waits for input before running timers again
const TICK_RATE: Duration = Duration::from_millis(50);

/// Terminal music-upload page with live song suggestions, ratings and comments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to a config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Quiet interval before a suggestion lookup fires, in milliseconds
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let loaded = load_config(args.config.as_deref());
    let mut config = loaded.config;
    if let Some(server) = args.server {
        config.server.base_url = server;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.suggestions.debounce_ms = debounce_ms;
    }

    let client = ApiClient::new(
        &config.server.base_url,
        Duration::from_millis(config.server.request_timeout_ms),
    )?;
    let worker = ApiWorker::spawn(client).map_err(SongboardError::from)?;
    log::info!("Talking to {}", config.server.base_url);

    let mut app = App::with_worker(&config, worker);
    if let Some(warning) = loaded.warning {
        log::warn!("{}", warning);
        app.notification.show(warning, NotificationKind::Warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();
    app.shutdown();

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).map_err(SongboardError::from)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wake early when a suggestion lookup is about to fire
        let timeout = app
            .suggest
            .time_until_fire(Instant::now())
            .map_or(TICK_RATE, |remaining| remaining.min(TICK_RATE));

        // Handle events, then run timers and drain backend responses
        app.handle_events(timeout)?;
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
