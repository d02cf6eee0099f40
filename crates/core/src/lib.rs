//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the complete tic-tac-toe rules and state management.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same move sequence always produces the same game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the 9-cell grid with copy-on-write mark placement
//! - [`rules`]: pure win/draw detection over the 8 fixed lines
//! - [`game_state`]: board + turn + outcome with move/reset transitions
//! - [`snapshot`]: read-only state export for renderers
//!
//! # Game Rules
//!
//! - X always moves first and turns alternate strictly
//! - A move into an occupied cell, an out-of-range index, or a finished game
//!   is silently ignored
//! - The game ends on the first completed line (win) or a full board (draw);
//!   only a reset leaves a terminal state
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_types::{Mark, Outcome};
//!
//! let mut game = GameState::new();
//!
//! // X takes the left column, O answers in the middle column.
//! for pos in [0, 1, 3, 4, 6] {
//!     game.apply_move(pos);
//! }
//!
//! assert_eq!(game.outcome(), Outcome::Win(Mark::X));
//! assert!(!game.apply_move(5)); // game is over, move ignored
//! ```

pub mod board;
pub mod game_state;
pub mod rules;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use rules::{outcome, winner};
pub use snapshot::GameSnapshot;
