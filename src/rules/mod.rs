//! Game rules for Caro
//!
//! Five or more consecutive marks in any line direction wins; a full board
//! with no such run is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_outcome, detect_win, is_draw, Outcome};
