//! Terminal runner (default binary).
//!
//! Renders with the framebuffer renderer, feeds crossterm key events to the
//! controller and drives it with a fixed frame scheduler.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use blockfall::core::{GameController, GameSnapshot};
use blockfall::input::{
    handle_key_event, is_release, should_quit, ReleaseTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS,
};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    #[arg(long, help = "RNG seed for the piece sequence (default: from the clock)")]
    seed: Option<u32>,

    #[arg(long, value_name = "MS", default_value_t = FRAME_MS, help = "Frame interval")]
    frame_ms: u32,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        help = "Treat a key as released after this long without a press (terminals without release events)"
    )]
    release_timeout_ms: u32,

    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath, help = "Write logs to this file (filter with RUST_LOG)")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("seed {}", seed);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &args, seed));

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

/// stdout and stderr belong to the game screen, so logs only go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, args: &Args, seed: u32) -> Result<()> {
    let mut game = GameController::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut releases = ReleaseTracker::with_timeout_ms(args.release_timeout_ms);
    let synthesize_releases = !term.reports_key_release();

    let epoch = Instant::now();
    let frame = Duration::from_millis(args.frame_ms.max(1) as u64);
    let mut next_frame = epoch;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        next_frame = (next_frame + frame).max(Instant::now());
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout).context("poll terminal events")? {
                break;
            }
            match event::read().context("read terminal event")? {
                Event::Key(key) => {
                    if !handle_key(&mut game, &mut releases, key, millis_since(epoch)) {
                        log::info!("quit (score {}, lines {})", game.score(), game.lines());
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Update.
        let now = millis_since(epoch);
        if synthesize_releases {
            for action in releases.expired(now) {
                game.key_up(action);
            }
        }
        game.frame(now);

        if let Some(lock) = game.take_last_event() {
            if !lock.cleared_rows.is_empty() {
                log::debug!(
                    "{} cleared rows {:?} (+{})",
                    lock.kind.as_str(),
                    lock.cleared_rows.as_slice(),
                    lock.line_clear_score
                );
            }
        }
    }
}

/// Route one key event. Returns false when the player quits.
fn handle_key(
    game: &mut GameController,
    releases: &mut ReleaseTracker,
    key: KeyEvent,
    now_ms: u64,
) -> bool {
    if is_release(&key) {
        if let Some(action) = handle_key_event(key) {
            releases.release(action);
            game.key_up(action);
        }
        return true;
    }

    if should_quit(key) {
        return false;
    }

    let Some(action) = handle_key_event(key) else {
        return true;
    };
    // Enhanced terminals flag auto-repeat; do not re-toggle pause on it.
    if key.kind == KeyEventKind::Repeat && !action.is_edge_triggered() {
        return true;
    }
    releases.press(action, now_ms);
    game.key_down(action);
    true
}

fn millis_since(epoch: Instant) -> u64 {
    epoch.elapsed().as_millis() as u64
}
