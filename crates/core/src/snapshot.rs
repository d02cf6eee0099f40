//! Read-only state export for renderers and tests.

use crate::types::{Mark, Outcome, BOARD_CELLS};

/// Everything a renderer needs to paint one frame.
///
/// The board uses the compact encoding 0 = empty, 1 = X, 2 = O; decode cells
/// with [`Mark::from_u8`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [u8; BOARD_CELLS],
    pub turn: Mark,
    pub outcome: Outcome,
    pub moves_played: u8,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [0u8; BOARD_CELLS];
        self.turn = Mark::X;
        self.outcome = Outcome::InProgress;
        self.moves_played = 0;
    }

    /// Whether the board still accepts moves
    pub fn playable(&self) -> bool {
        !self.outcome.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [0u8; BOARD_CELLS],
            turn: Mark::X,
            outcome: Outcome::InProgress,
            moves_played: 0,
        }
    }
}
