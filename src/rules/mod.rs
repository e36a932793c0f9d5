//! Game rules for Gomoku
//!
//! This module implements the rule layer:
//! - Win condition (5-in-a-row along any of the 4 axes)
//! - Draw detection (full board, no winner)
//! - Move validation and application

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, GameError};
pub use win::{game_status, has_five_at, has_five_in_row, winner, GameStatus};
