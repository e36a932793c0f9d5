//! Session facade over the search engine
//!
//! [`AiEngine`] owns the per-session search state (the transposition
//! table lives inside the searcher) and exposes the four operations the
//! UI layer drives the game with: apply a move, query win/draw status,
//! and compute the engine's move. The board itself stays owned by the
//! caller; it is only borrowed, and always handed back restored.
//!
//! The table's lifetime is tied to the session: [`AiEngine::new_game`]
//! clears it, nothing ever persists it.

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::rules::{self, GameError, GameStatus};
use crate::search::Searcher;

/// Game-session facade for the Gomoku AI
pub struct AiEngine {
    searcher: Searcher,
}

impl AiEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Start a new game: clears the transposition table. Call this
    /// whenever the caller resets its board.
    pub fn new_game(&mut self) {
        self.searcher.reset();
    }

    /// Play a stone for `stone` at `(row, col)`.
    ///
    /// Fails without mutating the board when the cell is out of range
    /// or occupied.
    pub fn apply_move(
        &self,
        board: &mut Board,
        stone: Stone,
        row: i32,
        col: i32,
    ) -> Result<Pos, GameError> {
        rules::apply_move(board, stone, row, col)
    }

    /// Whether `side` has 5-in-a-row
    #[must_use]
    pub fn is_win(&self, board: &Board, side: Stone) -> bool {
        rules::has_five_in_row(board, side)
    }

    /// Whether no empty cells remain
    #[must_use]
    pub fn is_full(&self, board: &Board) -> bool {
        board.is_full()
    }

    /// Win/draw/in-progress summary for the position
    #[must_use]
    pub fn status(&self, board: &Board) -> GameStatus {
        rules::game_status(board)
    }

    /// Compute the engine's move for `ai_side`.
    ///
    /// The board is mutated transiently during the search and restored
    /// exactly before returning. Fails with
    /// [`GameError::NoCandidates`] when the board is full.
    pub fn compute_ai_move(
        &mut self,
        board: &mut Board,
        ai_side: Stone,
    ) -> Result<Pos, GameError> {
        let result = self.searcher.select_move(board, ai_side);
        let pos = result.best_move.ok_or(GameError::NoCandidates)?;
        debug!(
            "ai selected ({}, {}) score {} nodes {}",
            pos.row, pos.col, result.score, result.nodes
        );
        Ok(pos)
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CENTER, TOTAL_CELLS};

    #[test]
    fn test_apply_and_status_flow() {
        let engine = AiEngine::new();
        let mut board = Board::new();

        engine.apply_move(&mut board, Stone::Black, 4, 4).unwrap();
        assert_eq!(engine.status(&board), GameStatus::InProgress);
        assert!(!engine.is_win(&board, Stone::Black));

        for c in 5..9 {
            engine.apply_move(&mut board, Stone::Black, 4, c).unwrap();
        }
        assert!(engine.is_win(&board, Stone::Black));
        assert_eq!(engine.status(&board), GameStatus::Won(Stone::Black));
    }

    #[test]
    fn test_apply_move_rejections() {
        let engine = AiEngine::new();
        let mut board = Board::new();

        assert_eq!(
            engine.apply_move(&mut board, Stone::Black, 10, 0),
            Err(GameError::InvalidCell { row: 10, col: 0 })
        );
        engine.apply_move(&mut board, Stone::Black, 0, 0).unwrap();
        assert_eq!(
            engine.apply_move(&mut board, Stone::White, 0, 0),
            Err(GameError::OccupiedCell { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_compute_ai_move_on_empty_board() {
        let mut engine = AiEngine::new();
        let mut board = Board::new();
        let pos = engine.compute_ai_move(&mut board, Stone::Black).unwrap();
        assert_eq!(pos, CENTER);
        // Compute does not place the stone
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_compute_ai_move_full_board_fails() {
        let mut engine = AiEngine::new();
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            board.place_stone(Pos::from_index(idx), Stone::White);
        }
        assert_eq!(
            engine.compute_ai_move(&mut board, Stone::Black),
            Err(GameError::NoCandidates)
        );
    }

    #[test]
    fn test_compute_ai_move_targets_empty_cell() {
        let mut engine = AiEngine::new();
        let mut board = Board::new();
        engine.apply_move(&mut board, Stone::Black, 4, 4).unwrap();
        engine.apply_move(&mut board, Stone::White, 5, 5).unwrap();

        let pos = engine.compute_ai_move(&mut board, Stone::Black).unwrap();
        assert!(board.is_empty(pos));
        engine.apply_move(&mut board, Stone::Black, i32::from(pos.row), i32::from(pos.col))
            .unwrap();
    }

    #[test]
    fn test_new_game_clears_session_state() {
        let mut engine = AiEngine::new();
        let mut board = Board::new();
        engine.apply_move(&mut board, Stone::Black, 4, 4).unwrap();
        engine.compute_ai_move(&mut board, Stone::White).unwrap();

        engine.new_game();
        board.reset();
        // A fresh game behaves like a fresh engine
        let pos = engine.compute_ai_move(&mut board, Stone::Black).unwrap();
        assert_eq!(pos, CENTER);
    }
}
