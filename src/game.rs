//! Match flow: the authoritative board and turn order
//!
//! The presentation layer owns a [`Match`], feeds it human clicks and engine
//! answers, and reads back the outcome. The engine itself never sees this
//! state, only board snapshots.

use log::info;

use crate::board::{Board, Mark, Pos};
use crate::error::MoveError;
use crate::rules::{check_outcome, Outcome};

/// Session score from the human's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Stats {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// One human-vs-computer match plus the running session stats.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    human: Mark,
    current_turn: Mark,
    last_move: Option<Pos>,
    outcome: Option<Outcome>,
    history: Vec<(Pos, Mark)>,
    stats: Stats,
}

impl Match {
    /// New match where the human plays the opponent of `bot_mark` and moves first.
    pub fn new(bot_mark: Mark) -> Self {
        let human = bot_mark.opponent();
        Self {
            board: Board::new(),
            human,
            current_turn: human,
            last_move: None,
            outcome: None,
            history: Vec::new(),
            stats: Stats::default(),
        }
    }

    /// Start a fresh board; session stats are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = self.human;
        self.last_move = None;
        self.outcome = None;
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human
    }

    pub fn bot_mark(&self) -> Mark {
        self.human.opponent()
    }

    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.outcome.as_ref().and_then(Outcome::winning_line)
    }

    pub fn history(&self) -> &[(Pos, Mark)] {
        &self.history
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_turn == self.human
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.is_over() && self.current_turn != self.human
    }

    /// Place `mark` at `pos`, then resolve win, draw, or turn change.
    ///
    /// Returns the outcome when this move ended the match.
    pub fn play(&mut self, pos: Pos, mark: Mark) -> Result<Option<Outcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if mark != self.current_turn {
            return Err(MoveError::NotYourTurn);
        }
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.board.place(pos, mark) {
            return Err(MoveError::Occupied(pos));
        }

        self.history.push((pos, mark));
        self.last_move = Some(pos);

        if let Some(outcome) = check_outcome(&self.board, pos, mark) {
            self.record(&outcome);
            self.outcome = Some(outcome.clone());
            return Ok(Some(outcome));
        }

        self.current_turn = mark.opponent();
        Ok(None)
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(mark) if mark == self.human => self.stats.wins += 1,
            Some(_) => self.stats.losses += 1,
            None => self.stats.draws += 1,
        }
        info!(
            "match over after {} moves: {:?} (session {}W/{}L/{}D)",
            self.history.len(),
            outcome.winner(),
            self.stats.wins,
            self.stats.losses,
            self.stats.draws
        );
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(crate::board::BOT_MARK)
    }
}
