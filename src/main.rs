//! Chess-piece BFS visualizer (default binary).
//!
//! Without arguments it runs the interactive terminal visualizer: crossterm for input
//! and a framebuffer-based diffing renderer. `chess-bfs trace ...` runs a search
//! headless and prints JSON lines instead.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use chess_bfs::app::apply_intent;
use chess_bfs::core::{EngineConfig, Session};
use chess_bfs::input::{handle_key_event, handle_mouse_event, should_quit, BoardCursor};
use chess_bfs::logging;
use chess_bfs::term::{BoardView, FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use chess_bfs::trace::{parse_trace_args, run_trace};
use chess_bfs::types::TICK_MS;

const USAGE: &str = "chess-bfs [trace [--size N] <piece> <col,row> <col,row>]";

/// Redraw interval while nothing is moving.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(config) = parse_trace_args(&args)? {
        logging::init_stderr()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return run_trace(&config, &mut out);
    }
    if let Some(arg) = args.first() {
        return Err(anyhow!("unknown argument: {} (usage: {})", arg, USAGE));
    }

    logging::init_from_env()?;
    let config = EngineConfig::from_env();
    info!(board_size = config.board_size, "starting visualizer");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer, config: EngineConfig) -> Result<()> {
    let mut session = Session::new(config);
    let view = BoardView::default();
    let mut cursor = BoardCursor::new(session.board_size());
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = current_viewport();

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, session.revision(), session.phase().is_active()) {
            view.render_into(&session, Some(cursor.position()), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let intent = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse),
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    throttle.invalidate();
                    None
                }
                _ => None,
            };

            if let Some(intent) = intent {
                if apply_intent(&mut session, &mut cursor, &view, viewport, intent) {
                    throttle.invalidate();
                }
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            if let Err(e) = session.advance_tick(elapsed) {
                // The session is left inspectable; the user can reset.
                error!(error = %e, phase = session.phase().as_str(), "tick failed");
                throttle.invalidate();
            }
        }
    }
}
