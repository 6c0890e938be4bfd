//! Single-cell heuristic evaluation
//!
//! Scores how useful it would be for a player to put a mark on one empty
//! cell, looking only at the four lines through that cell. The board is
//! read, never written: the cell is treated as if it already held the mark.

use crate::board::{Board, Mark, Pos, DIRECTIONS, WIN_LENGTH};

use super::patterns::line_score;

/// Cells inspected on each side of the candidate
const SCAN_DEPTH: i32 = WIN_LENGTH as i32 - 1;

/// Shape of the friendly run through a cell along one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineShape {
    /// Friendly marks touching the cell, both sides summed (0..=8)
    pub consecutive: u32,
    /// Sides that ended on an empty cell (0..=2)
    pub open_ends: u32,
}

impl LineShape {
    #[inline]
    pub fn score(self) -> u32 {
        line_score(self.consecutive, self.open_ends)
    }
}

/// Evaluate placing `player` at `pos`.
///
/// Sums [`line_score`] over the four directions. The result is independent
/// of whose turn it is and is always non-negative; `Mark::Empty` scores 0.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, player: Mark) -> u32 {
    if player == Mark::Empty {
        return 0;
    }

    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| line_shape(board, pos, dr, dc, player).score())
        .sum()
}

/// Friendly run and open ends through `pos` along `(dr, dc)`.
#[must_use]
pub fn line_shape(board: &Board, pos: Pos, dr: i32, dc: i32, player: Mark) -> LineShape {
    let (fwd, fwd_open) = scan_side(board, pos, dr, dc, player);
    let (back, back_open) = scan_side(board, pos, -dr, -dc, player);

    LineShape {
        consecutive: fwd + back,
        open_ends: u32::from(fwd_open) + u32::from(back_open),
    }
}

/// Walk up to `SCAN_DEPTH` cells away from `pos`.
///
/// Stops at the first empty cell (open end), opponent mark or board edge
/// (closed end). Returns the friendly count and whether the side is open.
fn scan_side(board: &Board, pos: Pos, dr: i32, dc: i32, player: Mark) -> (u32, bool) {
    let mut count = 0;
    for i in 1..=SCAN_DEPTH {
        let Some(next) = pos.offset(dr, dc, i) else {
            break;
        };
        match board.get(next) {
            m if m == player => count += 1,
            Mark::Empty => return (count, true),
            _ => break,
        }
    }
    (count, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    fn swap_marks(board: &Board) -> Board {
        let mut swapped = Board::new();
        for (pos, mark) in board.occupied() {
            swapped.place(pos, mark.opponent());
        }
        swapped
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate_position(&board, Pos::new(7, 7), Mark::X), 0);
    }

    #[test]
    fn test_single_neighbor_open_both_ways() {
        let board = Board::from_rows(&["", "", "", "", "", "", "", ".......X"]);
        // (7, 8): horizontal gives 1 friendly with two open ends
        let shape = line_shape(&board, Pos::new(7, 8), 0, 1, Mark::X);
        assert_eq!(shape, LineShape { consecutive: 1, open_ends: 2 });
        assert_eq!(evaluate_position(&board, Pos::new(7, 8), Mark::X), 50);
    }

    #[test]
    fn test_four_adjacent_is_five() {
        let board = Board::from_rows(&["", "", "", "", "", "", "", "...XXXX"]);
        let score = evaluate_position(&board, Pos::new(7, 7), Mark::X);
        assert!(score >= PatternScore::FIVE);
        let score = evaluate_position(&board, Pos::new(7, 2), Mark::X);
        assert!(score >= PatternScore::FIVE);
    }

    #[test]
    fn test_split_four_counts_both_sides() {
        // XX_XX: filling the gap sums two runs to four
        let board = Board::from_rows(&["", "", "", "", "", "", "", "..XX.XX"]);
        let shape = line_shape(&board, Pos::new(7, 4), 0, 1, Mark::X);
        assert_eq!(shape.consecutive, 4);
        assert!(evaluate_position(&board, Pos::new(7, 4), Mark::X) >= PatternScore::FIVE);
    }

    #[test]
    fn test_open_three_plus_one() {
        // _XXX_ with candidate on the right end
        let board = Board::from_rows(&["", "", "", "", "", "", "", "...XXX.."]);
        let shape = line_shape(&board, Pos::new(7, 6), 0, 1, Mark::X);
        assert_eq!(shape, LineShape { consecutive: 3, open_ends: 2 });
        assert_eq!(shape.score(), PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_blocked_by_opponent() {
        let board = Board::from_rows(&["", "", "", "", "", "", "", "..OXXX.."]);
        let shape = line_shape(&board, Pos::new(7, 6), 0, 1, Mark::X);
        assert_eq!(shape, LineShape { consecutive: 3, open_ends: 1 });
        assert_eq!(shape.score(), PatternScore::CLOSED_FOUR);
    }

    #[test]
    fn test_board_edge_is_closed() {
        let board = Board::from_rows(&["XX"]);
        let shape = line_shape(&board, Pos::new(0, 2), 0, 1, Mark::X);
        assert_eq!(shape, LineShape { consecutive: 2, open_ends: 1 });
        assert_eq!(shape.score(), 100);
    }

    #[test]
    fn test_scan_stops_after_four() {
        // Five friendly marks to the right: only four are seen, no open end
        let board = Board::from_rows(&[".XXXXX."]);
        let shape = line_shape(&board, Pos::new(0, 0), 0, 1, Mark::X);
        assert_eq!(shape, LineShape { consecutive: 4, open_ends: 0 });
    }

    #[test]
    fn test_opponent_perspective() {
        let board = Board::from_rows(&["", "", "", "", "", "", "", "...OOOO."]);
        assert_eq!(evaluate_position(&board, Pos::new(7, 7), Mark::X), 0);
        assert!(evaluate_position(&board, Pos::new(7, 7), Mark::O) >= PatternScore::FIVE);
    }

    #[test]
    fn test_directions_sum() {
        // Neighbors in all four directions, each closed-two shaped or better
        let board = Board::from_rows(&["", "", "", "", "", "", "..XXX", "..X.X", "..X.X"]);
        let score = evaluate_position(&board, Pos::new(7, 3), Mark::X);
        let manual: u32 = DIRECTIONS
            .iter()
            .map(|&(dr, dc)| line_shape(&board, Pos::new(7, 3), dr, dc, Mark::X).score())
            .sum();
        assert_eq!(score, manual);
        assert!(score > 0);
    }

    #[test]
    fn test_empty_player_scores_zero() {
        let board = Board::from_rows(&["", "", "", "", "", "", "", "...XXXX"]);
        assert_eq!(evaluate_position(&board, Pos::new(7, 7), Mark::Empty), 0);
    }

    #[test]
    fn test_symmetric_under_mark_swap() {
        let board = Board::from_rows(&[
            "",
            "",
            "",
            "",
            "....X.O",
            "....XOO",
            "...OXX.",
            "....X.O",
            ".....O",
        ]);
        let swapped = swap_marks(&board);
        for idx in 0..crate::board::TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if !board.is_empty(pos) {
                continue;
            }
            assert_eq!(
                evaluate_position(&board, pos, Mark::X),
                evaluate_position(&swapped, pos, Mark::O),
                "asymmetric at {pos}"
            );
            assert_eq!(
                evaluate_position(&board, pos, Mark::O),
                evaluate_position(&swapped, pos, Mark::X),
                "asymmetric at {pos}"
            );
        }
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = Board::from_rows(&["", "", "", "", "", "", "", "...XXX.."]);
        let before = board;
        let _ = evaluate_position(&board, Pos::new(7, 6), Mark::X);
        assert_eq!(board, before);
    }
}
