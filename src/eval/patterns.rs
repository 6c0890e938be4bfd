//! Pattern scores for Caro evaluation
//!
//! Each line direction through a candidate cell is reduced to the number of
//! friendly marks adjacent to it and how many of its two ends are open.
//! These constants map that shape to points.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Four adjacent marks: playing here makes five
    pub const FIVE: u32 = 100_000;
    /// Open four: _OOOO_ after playing here
    pub const OPEN_FOUR: u32 = 10_000;
    /// Closed four: one end blocked
    pub const CLOSED_FOUR: u32 = 1_000;
    /// Open three
    pub const OPEN_THREE: u32 = 500;
    /// Closed three
    pub const CLOSED_THREE: u32 = 100;
    /// Open two
    pub const OPEN_TWO: u32 = 50;
    /// Closed two
    pub const CLOSED_TWO: u32 = 10;
}

/// Points for one direction given `consecutive` friendly marks next to the
/// cell (both sides summed) and `open_ends` in `0..=2`.
#[must_use]
pub const fn line_score(consecutive: u32, open_ends: u32) -> u32 {
    match (consecutive, open_ends) {
        (c, _) if c >= 4 => PatternScore::FIVE,
        (3, 2) => PatternScore::OPEN_FOUR,
        (3, 1) => PatternScore::CLOSED_FOUR,
        (2, 2) => PatternScore::OPEN_THREE,
        (2, 1) => PatternScore::CLOSED_THREE,
        (1, 2) => PatternScore::OPEN_TWO,
        (1, 1) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}
