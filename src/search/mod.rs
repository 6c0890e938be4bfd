//! Search module for the Caro AI
//!
//! Contains:
//! - Candidate generation near existing marks
//! - Priority-ladder scoring of a single candidate

pub mod candidates;
pub mod scoring;

pub use candidates::{candidate_moves, CANDIDATE_RADIUS};
pub use scoring::{composite_score, MoveReason, DEFAULT_DEFENSE_WEIGHT};
