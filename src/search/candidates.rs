//! Candidate move generation
//!
//! Restricts the selector to empty cells within two rows/columns of an
//! existing mark. Enumeration order is deterministic and decides ties in
//! the selector: occupied cells in row-major order, and for each one the
//! 5x5 neighborhood scanned row offset -2..=2, then column offset -2..=2.
//! A cell is emitted the first time it is reached.

use crate::board::{Board, Pos, TOTAL_CELLS};

/// Chebyshev radius around each occupied cell
pub const CANDIDATE_RADIUS: i32 = 2;

/// Generate candidate moves near existing marks.
///
/// An empty board yields the center cell alone. A full board yields nothing.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let mut moves = Vec::with_capacity(64);
    let mut seen = [false; TOTAL_CELLS];

    for (pos, _) in board.occupied() {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(next) = Pos::try_new(i32::from(pos.row) + dr, i32::from(pos.col) + dc)
                else {
                    continue;
                };

                let idx = next.to_index();
                if seen[idx] || !board.is_empty(next) {
                    continue;
                }
                seen[idx] = true;
                moves.push(next);
            }
        }
    }

    moves
}
