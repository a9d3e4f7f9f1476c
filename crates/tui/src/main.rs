//! folio-tui - Terminal portfolio with an animated code showcase.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Content loading and defaults (see `crates/content`).
//! - State transitions (see `app`) or rendering (see `ui`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup; `--export`
//!   skips terminal setup entirely and writes the HTML page instead.
//! - Configuration precedence: CLI args > content file settings > defaults.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_content::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use folio_content::{ColorTheme, load_content};
use folio_tui::action::Action;
use folio_tui::app::App;
use folio_tui::cli::Cli;
use folio_tui::export::export_html;
use folio_tui::runtime::TerminalGuard;
use folio_tui::typing::TypingConfig;
use folio_tui::ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    // File-based logging; stdout belongs to the TUI.
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "folio-tui.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // Note: _log_guard must live for the entire main() duration so logs flush.

    let mut content = load_content(cli.content.as_deref())?;
    if let Some(delay) = cli.typing_speed {
        content.typing.typing_delay_ms = delay;
    }
    if let Some(pause) = cli.snippet_pause {
        content.typing.snippet_pause_ms = pause;
    }
    if cli.no_loop {
        content.typing.loop_snippets = false;
    }
    content = content.sanitize();

    if let Some(ref path) = cli.export {
        export_html(&content, path).await?;
        println!("exported portfolio to {}", path.display());
        return Ok(());
    }

    let color_theme = cli
        .theme
        .as_deref()
        .map(ColorTheme::from_name)
        .unwrap_or_default();
    let typing_config = TypingConfig::from(content.typing);
    let mut app = App::new(content, color_theme, typing_config, Instant::now());

    tracing::info!(
        snippets = app.animator.snippet_count(),
        theme = %app.color_theme,
        "starting folio-tui"
    );

    // Terminal setup; the guard restores state on panic or early return.
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let _guard = TerminalGuard;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input task: crossterm events to actions.
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();
        while let Some(event_result) = reader.next().await {
            let Ok(event) = event_result else { break };
            let action = match event {
                crossterm::event::Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        Some(Action::Input(key))
                    } else {
                        None
                    }
                }
                crossterm::event::Event::Resize(width, height) => {
                    Some(Action::Resize(width, height))
                }
                _ => None,
            };
            if let Some(action) = action {
                // Key and resize events carry user intent; block rather
                // than drop when the channel is briefly full.
                if tx_input.send(action).await.is_err() {
                    break;
                }
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| render(f, &app))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Explicit cleanup on the normal path; the guard covers the rest.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!("folio-tui exited cleanly");

    Ok(())
}
