// mortui - terminal character browser for the Rick and Morty API
//
// Architecture:
// - API client (reqwest): character search, character by id, episode by URL
// - Pagination adapter: maps 10-character user pages onto 20-character API pages
// - Favorites store: one JSON file holding the saved character snapshots
// - TUI (ratatui): three slides (characters, details, favorites) driven by
//   an action/command state machine; fetches run as tokio tasks and report
//   back over an mpsc channel

mod api;
mod cli;
mod config;
mod events;
mod favorites;
mod logging;
mod pagination;
mod tui;
mod util;

use anyhow::Result;
use config::Config;
use logging::{LogBuffer, TuiLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config/favorites); exit early if one ran
    if cli::handle_cli() {
        return Ok(());
    }

    // Write a commented config template on first run
    Config::ensure_config_exists();

    let config = Config::load();

    // Logs are captured to an in-memory buffer for the status bar; stdout
    // is owned by the alternate screen. Precedence: RUST_LOG > config level.
    let default_filter = format!("mortui={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let log_buffer = LogBuffer::new();

    // Optional JSON file logging with daily rotation; the guard must stay
    // alive for the rest of the program so buffered lines flush on exit
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender =
                        tracing_appender::rolling::daily(&config.logging.file_dir, "mortui.log");
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!("starting mortui against {}", config.api_url);

    tui::run_tui(config, log_buffer).await
}
