//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, tests).
//!
//! # Board Layout
//!
//! The board is a 3x3 grid stored as 9 cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! A cell holds `None` (empty) or `Some(Mark)`. X always moves first.
//!
//! # Win Lines
//!
//! [`WIN_LINES`] enumerates the 8 index triples that decide the game:
//! 3 rows, 3 columns, 2 diagonals, scanned in that fixed order.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Mark, Outcome, BOARD_CELLS, WIN_LINES};
//!
//! assert_eq!(BOARD_CELLS, 9);
//! assert_eq!(WIN_LINES.len(), 8);
//!
//! assert_eq!(Mark::X.opponent(), Mark::O);
//! assert!(Outcome::Win(Mark::X).is_terminal());
//! assert!(!Outcome::InProgress.is_terminal());
//! ```

/// Board side length in cells (3 columns, 3 rows)
pub const BOARD_SIDE: usize = 3;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// The 8 winning index triples: 3 rows, 3 columns, 2 diagonals.
///
/// Outcome detection scans these in order; at most one mark can own a
/// completed line on a board reached through legal play, so the order only
/// makes the scan deterministic.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The two player symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display glyph for the mark
    pub fn as_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Numeric cell encoding used by snapshots (1 = X, 2 = O, 0 = empty)
    pub fn to_u8(self) -> u8 {
        match self {
            Mark::X => 1,
            Mark::O => 2,
        }
    }

    /// Decode the snapshot cell encoding; 0 and unknown values map to `None`
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Mark::X),
            2 => Some(Mark::O),
            _ => None,
        }
    }
}

/// A board cell
///
/// - `None`: empty cell
/// - `Some(mark)`: cell claimed by that mark
pub type Cell = Option<Mark>;

/// Derived game status
///
/// Always recomputed from the 9 cells; `Win` and `Draw` are terminal and can
/// only be left through a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl Outcome {
    /// Whether the game has ended (no further moves are accepted)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Game actions that can be applied to the engine
///
/// Both keyboard entry and mouse clicks reduce to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the current turn's mark at a cell index in 0..=8
    Place(u8),
    /// Clear the board and start over with X to move
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_line_table_shape() {
        assert_eq!(WIN_LINES.len(), 8);
        for line in WIN_LINES {
            for idx in line {
                assert!(idx < BOARD_CELLS);
            }
        }
    }

    #[test]
    fn win_line_table_coverage() {
        // Center sits on 4 lines, corners on 3, edges on 2.
        let appearances = |cell: usize| {
            WIN_LINES
                .iter()
                .filter(|line| line.contains(&cell))
                .count()
        };

        assert_eq!(appearances(4), 4);
        for corner in [0, 2, 6, 8] {
            assert_eq!(appearances(corner), 3);
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(appearances(edge), 2);
        }
    }

    #[test]
    fn mark_opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn mark_u8_encoding_roundtrip() {
        assert_eq!(Mark::from_u8(Mark::X.to_u8()), Some(Mark::X));
        assert_eq!(Mark::from_u8(Mark::O.to_u8()), Some(Mark::O));
        assert_eq!(Mark::from_u8(0), None);
        assert_eq!(Mark::from_u8(7), None);
    }

    #[test]
    fn outcome_terminality() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Win(Mark::X).is_terminal());
        assert!(Outcome::Win(Mark::O).is_terminal());
        assert!(Outcome::Draw.is_terminal());

        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
