//! Move validation and application
//!
//! The board layer assumes valid input; this is the layer that checks
//! bounds and occupancy and turns violations into explicit errors.

use thiserror::Error;

use crate::board::{Board, Pos, Stone};

/// Errors for caller-side precondition violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Row or column outside the board
    #[error("cell ({row}, {col}) is outside the board")]
    InvalidCell { row: i32, col: i32 },
    /// Target cell already holds a stone
    #[error("cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: u8, col: u8 },
    /// Move requested on a full board
    #[error("no candidate moves: the board is full")]
    NoCandidates,
}

/// Place a stone for `stone` at `(row, col)`.
///
/// Fails with [`GameError::InvalidCell`] when the coordinates are out of
/// range and [`GameError::OccupiedCell`] when the cell is not empty.
/// On success the board is mutated and the placed position returned.
pub fn apply_move(board: &mut Board, stone: Stone, row: i32, col: i32) -> Result<Pos, GameError> {
    if !Pos::is_valid(row, col) {
        return Err(GameError::InvalidCell { row, col });
    }
    let pos = Pos::new(row as u8, col as u8);
    if !board.is_empty(pos) {
        return Err(GameError::OccupiedCell {
            row: pos.row,
            col: pos.col,
        });
    }
    board.place_stone(pos, stone);
    Ok(pos)
}
