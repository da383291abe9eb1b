//! Authflow TUI - Terminal client for the Ascendion Suite auth flows
//!
//! A Ratatui-based TUI for the login, registration, forgot-password,
//! and reset-password flows, backed by a simulated authentication
//! service.

mod app;
mod auth;
mod config;
mod routes;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use auth::SimulatedAuth;
use config::AuthConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use routes::Route;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Route opened when none is given on the command line
const DEFAULT_ROUTE: &str = "/login";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr; the terminal owns stdout)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "authflow_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ROUTE.to_string());
    let route = Route::parse(&path);
    tracing::debug!(%path, ?route, "starting at route");

    let config = AuthConfig::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load config, using defaults");
        AuthConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&route, Arc::new(SimulatedAuth::new()), config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Fold in a finished submission or a due redirect
        app.tick().await?;

        // Faster polling while the busy indicator animates (16ms = ~60fps),
        // normal polling (100ms) otherwise
        let poll_duration = if app.is_loading() {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
