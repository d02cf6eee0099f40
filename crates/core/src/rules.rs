//! Outcome rules - win and draw detection
//!
//! Pure functions of the 9 cells, no hidden state. The scan walks
//! [`WIN_LINES`](crate::types::WIN_LINES) in its fixed order and stops at the
//! first completed line.

use crate::board::Board;
use crate::types::{Mark, Outcome, WIN_LINES};

/// Find the mark owning a completed line, if any
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in WIN_LINES {
        if let Some(mark) = cells[a] {
            if cells[b] == Some(mark) && cells[c] == Some(mark) {
                return Some(mark);
            }
        }
    }
    None
}

/// Derive the game status from a board snapshot
///
/// `Win` beats `Draw`: a full board with a completed line is a win.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(mark) => Outcome::Win(mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    const X: Cell = Some(Mark::X);
    const O: Cell = Some(Mark::O);
    const E: Cell = None;

    fn board(cells: [Cell; 9]) -> Board {
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_row_wins() {
        assert_eq!(
            outcome(&board([X, X, X, O, O, E, E, E, E])),
            Outcome::Win(Mark::X)
        );
        assert_eq!(
            outcome(&board([X, X, E, O, O, O, X, E, E])),
            Outcome::Win(Mark::O)
        );
        assert_eq!(
            outcome(&board([O, O, E, X, E, E, X, X, X])),
            Outcome::Win(Mark::X)
        );
    }

    #[test]
    fn test_column_wins() {
        assert_eq!(
            outcome(&board([X, O, E, X, O, E, X, E, E])),
            Outcome::Win(Mark::X)
        );
        assert_eq!(
            outcome(&board([X, O, E, X, O, E, E, O, X])),
            Outcome::Win(Mark::O)
        );
        assert_eq!(
            outcome(&board([O, E, X, O, E, X, E, E, X])),
            Outcome::Win(Mark::X)
        );
    }

    #[test]
    fn test_diagonal_wins() {
        assert_eq!(
            outcome(&board([X, O, E, O, X, E, E, E, X])),
            Outcome::Win(Mark::X)
        );
        assert_eq!(
            outcome(&board([X, X, O, E, O, E, O, E, X])),
            Outcome::Win(Mark::O)
        );
    }

    #[test]
    fn test_draw_requires_full_board() {
        // X O X / O X O / O X O - no line completed.
        let full = board([X, O, X, O, X, O, O, X, O]);
        assert_eq!(outcome(&full), Outcome::Draw);

        // Same layout with one hole is still in progress.
        let hole = board([X, O, X, O, X, O, O, X, E]);
        assert_eq!(outcome(&hole), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        // X X X / O O X / O X O - top row belongs to X.
        let full = board([X, X, X, O, O, X, O, X, O]);
        assert_eq!(outcome(&full), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_outcome_is_pure() {
        let b = board([X, O, X, E, X, O, E, E, O]);
        assert_eq!(outcome(&b), outcome(&b));
        assert_eq!(winner(&b), winner(&b));
    }
}
