//! OrderUp: terminal pickup board for order-ready announcements.
//!
//! Staff type a customer name when an order is ready; the name goes up
//! on the board and clears itself two minutes later, or sooner when the
//! order is picked up and cleared by hand. A terminal bell announces
//! each new order unless sound is toggled off.
//!
//! ## Usage
//!
//! ```bash
//! # Standard board: 2 minute hold, sweep every second
//! orderup-tui
//!
//! # Short-lived demo board with logging
//! orderup-tui --ttl-secs 20 --log-file /tmp/orderup.log
//! ```

mod app;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use orderup_board::{BoardConfig, BoardService};

/// OrderUp pickup board
#[derive(Parser, Debug)]
#[command(name = "orderup-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seconds an order stays on the board before it clears itself
    #[arg(long, default_value = "120")]
    ttl_secs: u64,

    /// Eviction sweep interval in milliseconds
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Maximum number of orders on the board at once
    #[arg(long, default_value = "60")]
    max_orders: usize,

    /// Start with the new-order chime muted
    #[arg(long)]
    muted: bool,

    /// Append logs to this file (the terminal itself is the display)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    info!(
        "board starting: ttl {}s, sweep every {}ms, capacity {}",
        args.ttl_secs, args.tick_ms, args.max_orders
    );

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Attempt terminal cleanup on panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let config = BoardConfig {
        ttl_ms: args.ttl_secs.saturating_mul(1000),
        max_orders: args.max_orders,
        ..Default::default()
    };
    let service = BoardService::with_defaults(config).with_sound(!args.muted);
    let mut app = App::new(service);
    let tick_interval = Duration::from_millis(args.tick_ms);

    // Run the app
    let result = run_app(&mut terminal, &mut app, tick_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
    info!("board shut down");

    Ok(())
}

/// Route logs to a file. Stdout belongs to the board itself.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Main application loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_interval: Duration,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Short poll timeout so the sweep cadence holds while idle
        let poll_timeout = Duration::from_millis(100);

        // Handle terminal events with timeout
        handle_terminal_events(app, poll_timeout)?;

        // Periodic eviction sweep
        if app.last_sweep.elapsed() >= tick_interval {
            app.on_tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Handle terminal key events. Every press goes to the app: whether a
/// key navigates, edits the name buffer, or quits depends on the mode.
fn handle_terminal_events(app: &mut App, poll_timeout: Duration) -> Result<()> {
    if !event::poll(poll_timeout)? {
        return Ok(());
    }

    let Event::Key(key) = event::read()? else {
        return Ok(());
    };

    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    app.on_key(key.code);

    Ok(())
}
