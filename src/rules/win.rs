//! Win condition checking for Caro
//!
//! A move wins when it completes five or more consecutive marks of the
//! same player along any of the four line directions. Overlines count.

use crate::board::{Board, Mark, Pos, DIRECTIONS, WIN_LENGTH};

/// How a match ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `mark` completed a run; `line` holds every cell of it
    Win { mark: Mark, line: Vec<Pos> },
    /// Board filled with no winner
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::Draw => None,
        }
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            Outcome::Draw => None,
        }
    }
}

/// Check whether the mark just played at `last_move` wins for `player`.
///
/// Directions are tried horizontal, vertical, diagonal-down, diagonal-up and
/// the first one reaching `WIN_LENGTH` is returned. Each side is walked at most
/// `WIN_LENGTH - 1` cells, so the returned line holds between 5 and 9 cells:
/// `last_move` first, then the positive side nearest-first, then the negative
/// side nearest-first.
///
/// Returns `None` for an absent or off-board `last_move`, an `Empty` player,
/// or a `last_move` cell that does not hold `player`'s mark.
#[must_use]
pub fn detect_win(board: &Board, last_move: Option<Pos>, player: Mark) -> Option<Vec<Pos>> {
    let pos = last_move?;
    if player == Mark::Empty || !pos.in_bounds() || board.get(pos) != player {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];
        collect_run(board, pos, dr, dc, player, &mut line);
        collect_run(board, pos, -dr, -dc, player, &mut line);

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }

    None
}

/// Push consecutive `player` cells walking away from `pos` along `(dr, dc)`.
fn collect_run(board: &Board, pos: Pos, dr: i32, dc: i32, player: Mark, line: &mut Vec<Pos>) {
    for i in 1..WIN_LENGTH as i32 {
        match pos.offset(dr, dc, i) {
            Some(next) if board.get(next) == player => line.push(next),
            _ => break,
        }
    }
}

/// Board is full; only meaningful once [`detect_win`] found no winner.
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}

/// Resolve the state of the game after `player` played `last_move`.
///
/// A completed run takes precedence over a full board.
pub fn check_outcome(board: &Board, last_move: Pos, player: Mark) -> Option<Outcome> {
    if let Some(line) = detect_win(board, Some(last_move), player) {
        return Some(Outcome::Win { mark: player, line });
    }
    if is_draw(board) {
        return Some(Outcome::Draw);
    }
    None
}
