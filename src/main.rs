//! FormGenerator TUI - masked form entry with a local submission history
//!
//! A Ratatui-based TUI hosting the registration, feedback, profile and
//! contact forms, with phone input masking and a persisted history of
//! saved submissions.

mod app;
mod config;
mod phone;
mod platform;
mod router;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging into the log file. Nothing is written to the terminal,
/// which the UI owns. The returned guard flushes pending lines on drop.
fn init_logging() -> Option<WorkerGuard> {
    let appender = config::log_path().and_then(|path| {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(path.parent()?)
            .ok()
    });
    let (writer, guard) = appender.map(tracing_appender::non_blocking).unzip();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "form_generator_tui=info".into()),
        )
        .with(writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
        }))
        .init();
    guard
}

fn main() -> Result<()> {
    let _log_guard = init_logging();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {e}");
        AppConfig::default()
    });
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

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

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut shown_title = String::new();

    loop {
        // Keep the window title in sync with the current page
        if app.state.document.title() != shown_title {
            shown_title = app.state.document.title().to_string();
            execute!(terminal.backend_mut(), SetTitle(&shown_title))?;
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
