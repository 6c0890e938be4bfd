//! Position evaluation for Caro
//!
//! Contains:
//! - Pattern score table for line shapes
//! - Single-cell heuristic evaluation used by the move selector

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_position, line_shape, LineShape};
pub use patterns::{line_score, PatternScore};
