//! Computer opponent integrating candidate generation and evaluation
//!
//! The engine is a single-ply heuristic selector. For every candidate it
//! evaluates the cell twice, once as an attack (the engine's own mark) and
//! once as a defense (the opponent's mark), and ranks it on a priority ladder:
//!
//! 1. **Immediate win**: completes five for the engine
//! 2. **Block win**: the opponent would complete five here
//! 3. **Open four**: creates an unstoppable four
//! 4. **Block open four**: the opponent would create one here
//! 5. **Heuristic**: `attack + 1.1 * defense`
//!
//! The highest score wins; ties keep the earliest candidate.
//!
//! # Example
//!
//! ```
//! use caro::{Board, Engine, Mark, Pos};
//!
//! let engine = Engine::new();
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Mark::X);
//!
//! let result = engine.select_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Reason: {:?}", result.reason);
//! ```

use std::time::Instant;

use log::{debug, warn};

use crate::board::{Board, Mark, Pos, BOT_MARK};
use crate::eval::evaluate_position;
use crate::rules::detect_win;
use crate::search::{candidate_moves, composite_score, MoveReason, DEFAULT_DEFENSE_WEIGHT};

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Mark the engine plays
    pub bot_mark: Mark,
    /// Multiplier on the defense evaluation in the blended rung
    pub defense_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bot_mark: BOT_MARK,
            defense_weight: DEFAULT_DEFENSE_WEIGHT,
        }
    }
}

/// Result of a move selection with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen move, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Ladder score of the chosen move (may be infinite)
    pub score: f64,
    /// Attack evaluation of the chosen move
    pub attack: u32,
    /// Defense evaluation of the chosen move
    pub defense: u32,
    /// Ladder rung that produced the score
    pub reason: MoveReason,
    /// Number of candidates scored
    pub candidates: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

impl MoveResult {
    /// Create a result for the no-candidate fallback
    #[inline]
    fn fallback(best_move: Option<Pos>, time_us: u64) -> Self {
        Self {
            best_move,
            score: 0.0,
            attack: 0,
            defense: 0,
            reason: MoveReason::Fallback,
            candidates: 0,
            time_us,
        }
    }
}

/// Heuristic computer opponent.
///
/// Holds no state between calls: the same board always yields the same move.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine playing `O` with the default defense weight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mark the engine plays
    pub fn bot_mark(&self) -> Mark {
        self.config.bot_mark
    }

    /// Get the best move for the engine on `board`.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[must_use]
    pub fn select_move(&self, board: &Board) -> Option<Pos> {
        self.select_move_with_stats(board).best_move
    }

    /// Get the best move with the evaluation that chose it.
    #[must_use]
    pub fn select_move_with_stats(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let bot = self.config.bot_mark;
        let opponent = bot.opponent();

        let candidates = candidate_moves(board);
        if candidates.is_empty() {
            let fallback = if board.is_empty(Pos::center()) {
                Some(Pos::center())
            } else {
                board.first_empty()
            };
            match fallback {
                Some(pos) => warn!("no candidates, falling back to {pos}"),
                None => warn!("no move available: board is full"),
            }
            return MoveResult::fallback(fallback, elapsed_us(start));
        }

        let mut best = MoveResult {
            best_move: None,
            score: f64::NEG_INFINITY,
            attack: 0,
            defense: 0,
            reason: MoveReason::Heuristic,
            candidates: candidates.len(),
            time_us: 0,
        };

        for &pos in &candidates {
            let attack = evaluate_position(board, pos, bot);
            let defense = evaluate_position(board, pos, opponent);
            let (score, reason) = composite_score(attack, defense, self.config.defense_weight);

            // Strict comparison keeps the earliest candidate on ties
            if score > best.score {
                best.best_move = Some(pos);
                best.score = score;
                best.attack = attack;
                best.defense = defense;
                best.reason = reason;
            }
        }

        best.time_us = elapsed_us(start);
        if let Some(pos) = best.best_move {
            debug!(
                "{:?} selects {pos}: {:?} score={} attack={} defense={} candidates={}",
                bot, best.reason, best.score, best.attack, best.defense, best.candidates
            );
        }
        best
    }

    /// Find a move that completes five for `mark` right now.
    ///
    /// Each candidate is tried on a private copy of the board and checked with
    /// [`detect_win`]; `board` itself is never modified.
    #[must_use]
    pub fn find_immediate_win(&self, board: &Board, mark: Mark) -> Option<Pos> {
        if mark == Mark::Empty {
            return None;
        }
        candidate_moves(board)
            .into_iter()
            .find(|&pos| {
                let trial = board.with_placed(pos, mark);
                detect_win(&trial, Some(pos), mark).is_some()
            })
    }
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Choose the computer's move with the default engine (plays `O`).
#[must_use]
pub fn select_move(board: &Board) -> Option<Pos> {
    Engine::new().select_move(board)
}
