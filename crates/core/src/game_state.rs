//! Game state module - the engine behind the screen
//!
//! Owns the board, the turn, and the derived outcome, and applies moves and
//! resets as discrete atomic transitions. No rendering or I/O dependencies;
//! the UI layer consumes snapshots and feeds back [`GameAction`]s.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Mark, Outcome, BOARD_CELLS};

/// Complete game state
///
/// The outcome is recomputed synchronously inside
/// [`apply_move`](GameState::apply_move) before it returns, so observers
/// never see a board and a stale status together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Mark,
    outcome: Outcome,
}

impl GameState {
    /// Create a fresh game: empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Number of marks placed since the last reset
    pub fn moves_played(&self) -> u8 {
        (BOARD_CELLS - self.board.empty_count()) as u8
    }

    /// Positions a move would currently be accepted at.
    ///
    /// Empty once the game has ended.
    pub fn legal_moves(&self) -> ArrayVec<u8, BOARD_CELLS> {
        if self.game_over() {
            return ArrayVec::new();
        }
        self.board.open_positions()
    }

    /// Apply the current turn's mark at `pos`.
    ///
    /// Illegal moves (terminal outcome, out-of-range index, occupied cell)
    /// are a silent no-op returning `false`; the board, turn, and outcome
    /// are left exactly as they were. On success the board is replaced with
    /// a new snapshot, the turn flips, and the outcome is recomputed before
    /// returning.
    pub fn apply_move(&mut self, pos: u8) -> bool {
        if self.game_over() {
            return false;
        }

        let Some(next_board) = self.board.with_mark(pos as usize, self.turn) else {
            return false;
        };

        self.board = next_board;
        self.turn = self.turn.opponent();
        self.outcome = rules::outcome(&self.board);
        true
    }

    /// Clear the board and start over with X to move.
    ///
    /// Always succeeds and is idempotent.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Place(pos) => self.apply_move(pos),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Fill an existing snapshot (allocation-free)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_cells(&mut out.board);
        out.turn = self.turn;
        out.outcome = self.outcome;
        out.moves_played = self.moves_played();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
