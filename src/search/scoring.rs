//! Composite move scoring
//!
//! Turns the attack and defense evaluations of one candidate into a single
//! comparable score. Rungs are checked top to bottom and the first match
//! decides; the order matters (a win beats a forced block, a forced block
//! beats making an open four).

use crate::eval::PatternScore;

/// Score given to blocking the opponent's five
pub const BLOCK_WIN_SCORE: f64 = 500_000.0;
/// Score given to making an open four
pub const OPEN_FOUR_SCORE: f64 = 100_000.0;
/// Score given to blocking the opponent's open four
pub const BLOCK_OPEN_FOUR_SCORE: f64 = 50_000.0;
/// Default multiplier on the defense evaluation in the blended rung
pub const DEFAULT_DEFENSE_WEIGHT: f64 = 1.1;

/// Which rung of the priority ladder produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    /// Completes five for the mover
    ImmediateWin,
    /// Stops the opponent completing five
    BlockWin,
    /// Creates an open four
    OpenFour,
    /// Stops the opponent creating an open four
    BlockOpenFour,
    /// Blended attack/defense heuristic
    Heuristic,
    /// No candidates; a fallback cell was used
    Fallback,
}

/// Ladder score for a candidate with the given evaluations.
#[must_use]
pub fn composite_score(attack: u32, defense: u32, defense_weight: f64) -> (f64, MoveReason) {
    if attack >= PatternScore::FIVE {
        return (f64::INFINITY, MoveReason::ImmediateWin);
    }
    if defense >= PatternScore::FIVE {
        return (BLOCK_WIN_SCORE, MoveReason::BlockWin);
    }
    if attack >= PatternScore::OPEN_FOUR {
        return (OPEN_FOUR_SCORE, MoveReason::OpenFour);
    }
    if defense >= PatternScore::OPEN_FOUR {
        return (BLOCK_OPEN_FOUR_SCORE, MoveReason::BlockOpenFour);
    }

    (
        f64::from(attack) + f64::from(defense) * defense_weight,
        MoveReason::Heuristic,
    )
}
