// TUI module - Terminal User Interface
//
// Owns the terminal lifecycle and the event loop. The loop multiplexes
// three inputs with tokio::select!: keyboard events, a redraw tick, and
// completed fetches arriving over the mpsc channel. All state transitions
// go through App; all network work goes through the Fetcher.

pub mod app;
pub mod components;
pub mod fetch;
pub mod input;
pub mod theme;
pub mod views;

use crate::api::ApiClient;
use crate::config::Config;
use crate::events::AppEvent;
use crate::favorites::FavoritesStore;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fetch::Fetcher;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::Theme;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even when the loop returns an error.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Fetch results come back over this channel
    let (tx, mut event_rx) = mpsc::channel::<AppEvent>(64);
    let fetcher = Fetcher::new(ApiClient::new(&config.api_url), tx);

    let store = FavoritesStore::new(config.favorites_path.clone());
    let mut app = App::new(store, Theme::by_name(&config.theme), log_buffer);

    // Slide 0 renders first and triggers the initial page-1 search
    fetcher.dispatch(app.startup_command());

    let result = run_event_loop(&mut terminal, &mut app, &fetcher, &mut event_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    fetcher: &Fetcher,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // Redraw tick; also expires toasts
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        if let Some(action) = input::map_key(app, key_event) {
                            if let Some(command) = app.apply_action(action) {
                                fetcher.dispatch(command);
                            }
                        }
                    }
                }
            } => {}

            // Periodic tick
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Completed fetches; an event may require a follow-up fetch
            // (a loaded character triggers its episode batch)
            Some(app_event) = event_rx.recv() => {
                if let Some(command) = app.apply_event(app_event) {
                    fetcher.dispatch(command);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
