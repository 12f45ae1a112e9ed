use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use beacon::app::App;
use beacon::config;

/// In-buffer jump navigation with live match highlighting
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// File to navigate
    file: PathBuf,

    /// Highlight whole words around matches (overrides the config file)
    #[arg(long)]
    target_mode: bool,
}

/// Poll timeout when no skim re-search is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only wired up in debug builds; env_logger writes to
    // stderr, which the alternate screen hides anyway.
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let text = fs::read_to_string(&cli.file)?;

    let mut config = config::load();
    if cli.target_mode {
        config.ui.target_mode = true;
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, App::new(text, &config));

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wake up in time for the deferred skim re-search.
        let now = Instant::now();
        let timeout = app
            .session
            .next_deadline(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key, Instant::now());
                }
            }
        }

        // Fire due timers and drain the session's queued effects.
        app.after_input(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
