//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, with no widget/layout framework in between.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Make the board layout math shared between painting and mouse hit-testing
//! - Keep the drawing API small

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use renderer::TerminalRenderer;
