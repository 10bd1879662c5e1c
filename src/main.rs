//! Terminal memory game runner.
//!
//! Uses crossterm for input and a framebuffer-based renderer. The session
//! owns the round and its timers; this loop only renders, routes keys and
//! feeds wall-clock time into the session.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memory_match::core::{settings, GameSettings};
use memory_match::engine::GameSession;
use memory_match::input::{map_key, should_quit, BoardCommand, FocusGrid, FocusId};
use memory_match::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// One frame of input polling.
const FRAME: Duration = Duration::from_millis(16);

/// Directory for the log file; defaults to the platform cache directory.
const ENV_LOG_DIR: &str = "MEMORY_LOG_DIR";

#[derive(Parser, Debug)]
#[command(name = "memory-match", version, about = "Memory card-matching game for the terminal")]
struct Args {
    /// Grid side length: 4 or 6 [env: MEMORY_GRID_SIZE]
    #[arg(long)]
    size: Option<String>,

    /// Number of players: 1 to 4 [env: MEMORY_PLAYERS]
    #[arg(long)]
    players: Option<String>,

    /// Settings as a query string, e.g. `size=6&players=2`. Overrides the
    /// other settings flags.
    #[arg(long)]
    query: Option<String>,

    /// Seed for the deal; a fresh one is picked when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Invalid values fall back to defaults with a warning in the log.
    fn settings(&self) -> GameSettings {
        if let Some(query) = &self.query {
            return GameSettings::from_query(query);
        }
        GameSettings::from_lookup(|key| self.flag_for(key).or_else(|| settings::env_var(key)))
    }

    /// The flag standing in for an environment key, when given.
    fn flag_for(&self, key: &str) -> Option<String> {
        match key {
            settings::ENV_GRID_SIZE => self.size.clone(),
            settings::ENV_PLAYERS => self.players.clone(),
            _ => None,
        }
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = setup_logging()?;

    let settings = args.settings();
    let seed = args.seed();
    tracing::info!(
        size = settings.grid_size.side(),
        players = settings.player_count,
        seed,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, GameSession::new(settings, seed));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        tracing::error!(%err, "failed to restore terminal");
    }
    if let Err(err) = &result {
        tracing::error!(%err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut session: GameSession) -> Result<()> {
    let view = GameView::default();
    let side = session.round().grid_size().side();
    let ids: Vec<FocusId> = session.round().cards().iter().map(|c| c.id).collect();
    let mut focus = FocusGrid::with_stops(&ids);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);
    let mut last = Instant::now();

    loop {
        // Timers first, so time spent before a key press is not charged to
        // timers that the key press arms. Only whole milliseconds are
        // consumed so nothing drifts.
        let elapsed = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        if elapsed > 0 {
            last += Duration::from_millis(elapsed as u64);
            session.advance(elapsed);
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let focused = focus
            .focus_target()
            .and_then(|id| ids.iter().position(|&i| i == id));
        view.render_into(session.round(), focused, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input, at most one frame.
        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(BoardCommand::Move(direction)) => {
                            focus.navigate(direction, &ids, side);
                        }
                        Some(BoardCommand::Reveal) => {
                            focus.enable_auto_focus();
                            if let Some(index) = ids.iter().position(|&i| i == focus.current()) {
                                session.select_card(index);
                            }
                        }
                        Some(BoardCommand::Restart) => session.restart(),
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}

fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "memory-match.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // File only: the terminal belongs to the game.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os(ENV_LOG_DIR) {
        return PathBuf::from(dir);
    }
    directories::ProjectDirs::from("", "", "memory-match")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("memory-match").join("logs"))
}
