//! Terminal tic-tac-toe runner (default binary).
//!
//! Event-driven: block on the next terminal event, apply at most one game
//! action, repaint. No tick loop, no timers.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_tictactoe::core::{GameSnapshot, GameState};
use tui_tictactoe::input::{handle_key_event, should_quit};
use tui_tictactoe::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    // Off unless RUST_LOG is set; stderr keeps the alternate screen clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    info!("starting tic-tac-toe");

    let mut game = GameState::new();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let accepted = game.apply_action(action);
                    debug!(?action, accepted, "key action");
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    if let Some(pos) = view.cell_at(viewport, mouse.column, mouse.row) {
                        let accepted = game.apply_move(pos);
                        debug!(pos, accepted, "cell clicked");
                    }
                }
            }
            Event::Resize(..) => {
                // Next loop iteration re-reads the size and repaints.
            }
            _ => {}
        }
    }
}
