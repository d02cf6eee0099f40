//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Mouse clicks are
//! resolved by the view layer, which knows where the board sits on screen.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, should_quit};
