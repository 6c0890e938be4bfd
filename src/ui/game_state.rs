//! Game state management for the Caro GUI

use crate::config::AppConfig;
use crate::engine::{Engine, EngineConfig, MoveResult};
use crate::error::MoveError;
use crate::game::Match;
use crate::Pos;
use log::{debug, warn};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Computer player state
pub enum BotState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub game: Match,
    pub bot_state: BotState,
    pub last_bot_result: Option<MoveResult>,
    pub hint: Option<Pos>,
    pub message: Option<String>,

    engine: Engine,
    bot_delay: Duration,
}

impl GameState {
    pub fn new(config: &AppConfig) -> Self {
        let engine = Engine::with_config(config.engine);
        Self {
            game: Match::new(engine.bot_mark()),
            bot_state: BotState::Idle,
            last_bot_result: None,
            hint: None,
            message: None,
            engine,
            bot_delay: Duration::from_millis(config.game.bot_delay_ms),
        }
    }

    /// New board; session stats survive. A pending bot answer is dropped.
    pub fn reset(&mut self) {
        self.game.reset();
        self.bot_state = BotState::Idle;
        self.last_bot_result = None;
        self.hint = None;
        self.message = None;
    }

    /// Check if the computer is currently thinking
    pub fn is_bot_thinking(&self) -> bool {
        matches!(self.bot_state, BotState::Thinking { .. })
    }

    /// Human may click now
    pub fn accepts_clicks(&self) -> bool {
        self.game.is_human_turn() && !self.is_bot_thinking()
    }

    /// Attempt to place the human's mark at the given position
    pub fn try_place(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.game.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.accepts_clicks() {
            return Err(MoveError::NotYourTurn);
        }

        self.game.play(pos, self.game.human_mark())?;
        self.hint = None;
        self.message = None;
        Ok(())
    }

    /// Hand a board snapshot to a worker thread after the pacing delay
    pub fn start_bot_thinking(&mut self) {
        if !self.game.is_bot_turn() || self.is_bot_thinking() {
            return;
        }

        let board = *self.game.board();
        let engine = self.engine.clone();
        let delay = self.bot_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(delay);
            let result = engine.select_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.bot_state = BotState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the computer's move once the worker has answered
    pub fn check_bot_result(&mut self) {
        let result = match &self.bot_state {
            BotState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.bot_state = BotState::Idle;
                    self.message = Some("Computer player stopped unexpectedly".to_string());
                    return;
                }
            },
            BotState::Idle => None,
        };

        let Some(move_result) = result else {
            return;
        };
        self.bot_state = BotState::Idle;

        match move_result.best_move {
            Some(pos) => {
                if let Err(err) = self.game.play(pos, self.game.bot_mark()) {
                    warn!("computer move {pos} rejected: {err}");
                    self.message = Some(err.to_string());
                }
            }
            None => {
                self.message = Some("Computer could not find a move".to_string());
            }
        }
        self.last_bot_result = Some(move_result);
    }

    /// Time since the worker was started
    pub fn bot_thinking_elapsed(&self) -> Option<Duration> {
        match &self.bot_state {
            BotState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            BotState::Idle => None,
        }
    }

    /// Suggest a move for the human: a winning cell if one exists, otherwise
    /// what the engine would play in the human's place.
    pub fn request_hint(&mut self) {
        if !self.accepts_clicks() {
            return;
        }

        let human = self.game.human_mark();
        let helper = Engine::with_config(EngineConfig {
            bot_mark: human,
            ..*self.engine.config()
        });
        let board = self.game.board();

        self.hint = helper
            .find_immediate_win(board, human)
            .or_else(|| helper.select_move(board));
        debug!("hint for {:?}: {:?}", human, self.hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::Mark;

    fn instant_state() -> GameState {
        let config = AppConfig {
            game: GameConfig { bot_delay_ms: 0 },
            ..AppConfig::default()
        };
        GameState::new(&config)
    }

    fn wait_for_bot(state: &mut GameState) {
        for _ in 0..500 {
            state.check_bot_result();
            if !state.is_bot_thinking() {
                return;
            }
            thread::sleep(Duration::from_millis(2));
        }
        panic!("computer did not answer");
    }

    #[test]
    fn test_human_then_bot_move() {
        let mut state = instant_state();
        state.try_place(Pos::new(7, 7)).unwrap();
        assert!(!state.accepts_clicks());
        assert_eq!(state.try_place(Pos::new(0, 0)), Err(MoveError::NotYourTurn));

        state.start_bot_thinking();
        assert!(state.is_bot_thinking());
        wait_for_bot(&mut state);

        assert_eq!(state.game.history().len(), 2);
        assert_eq!(state.game.last_move(), Some(Pos::new(6, 6)));
        assert!(state.accepts_clicks());
        assert!(state.last_bot_result.is_some());
    }

    #[test]
    fn test_bot_not_started_on_human_turn() {
        let mut state = instant_state();
        state.start_bot_thinking();
        assert!(!state.is_bot_thinking());
    }

    #[test]
    fn test_reset_drops_pending_bot() {
        let mut state = instant_state();
        state.try_place(Pos::new(7, 7)).unwrap();
        state.start_bot_thinking();
        state.reset();
        assert!(!state.is_bot_thinking());
        assert!(state.game.board().is_board_empty());
        assert!(state.accepts_clicks());
    }

    #[test]
    fn test_hint_finds_winning_cell() {
        let mut state = instant_state();
        for c in 0..4 {
            state.game.play(Pos::new(4, c), Mark::X).unwrap();
            state.game.play(Pos::new(10, c * 3), Mark::O).unwrap();
        }
        state.request_hint();
        assert_eq!(state.hint, Some(Pos::new(4, 4)));

        state.try_place(Pos::new(4, 4)).unwrap();
        assert!(state.hint.is_none());
        assert!(state.game.is_over());
        assert_eq!(state.try_place(Pos::new(0, 0)), Err(MoveError::GameOver));
    }
}
