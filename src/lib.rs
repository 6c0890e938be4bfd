//! Caro (Gomoku) engine with a heuristic computer opponent
//!
//! A two-player connect-five game on a 15x15 board:
//! - Five or more consecutive marks in a line wins (overlines count)
//! - A full board with no winner is a draw
//! - The human plays `X` and moves first; the computer plays `O`
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board, marks and positions
//! - [`rules`]: Win detection and match outcome
//! - [`eval`]: Single-cell heuristic evaluation
//! - [`search`]: Candidate generation and priority-ladder scoring
//! - [`engine`]: Move selector integrating all components
//! - [`game`]: Match flow and session stats for a caller
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use caro::{detect_win, select_move, Board, Mark, Pos};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Mark::X);
//! assert!(detect_win(&board, Some(Pos::new(7, 7)), Mark::X).is_none());
//!
//! // Computer responds as O
//! if let Some(pos) = select_move(&board) {
//!     board.place(pos, Mark::O);
//!     println!("Computer plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! Both engine entry points are pure: they read the board they are given and
//! keep no state between calls.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, BOT_MARK, HUMAN_MARK, WIN_LENGTH};
pub use engine::{select_move, Engine, EngineConfig, MoveResult};
pub use error::{ConfigError, MoveError};
pub use game::{Match, Stats};
pub use rules::{detect_win, Outcome};
pub use search::MoveReason;
