//! Board module - the 3x3 grid of cells
//!
//! Cells are stored as a flat array of 9 in row-major order (row * 3 + col).
//! The board is a small `Copy`-friendly value: placing a mark produces a new
//! board instead of mutating in place, so callers can hold on to prior
//! snapshots (undo/history stays cheap to add later).

use arrayvec::ArrayVec;

use crate::types::{Cell, Mark, BOARD_CELLS};

/// The game board - 9 cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Get the cell at a position
    /// Returns None if the position is out of bounds
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is within bounds and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Count the cells holding the given mark
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }

    /// Count the empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Return a new board with `mark` placed at `pos`.
    ///
    /// Returns `None` when the position is out of bounds or occupied; the
    /// original board is never modified.
    pub fn with_mark(&self, pos: usize, mark: Mark) -> Option<Board> {
        if !self.is_empty(pos) {
            return None;
        }
        let mut next = *self;
        next.cells[pos] = Some(mark);
        Some(next)
    }

    /// Positions currently open for a move (empty when the board is full)
    pub fn open_positions(&self) -> ArrayVec<u8, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(pos, _)| pos as u8)
            .collect()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Write the snapshot encoding into `out` (0 empty, 1 X, 2 O)
    pub fn write_u8_cells(&self, out: &mut [u8; BOARD_CELLS]) {
        for (slot, cell) in out.iter_mut().zip(self.cells.iter()) {
            *slot = cell.map(Mark::to_u8).unwrap_or(0);
        }
    }

    /// Create from a flat array for testing
    #[cfg(test)]
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
