//! Gomoku AI engine: heuristic minimax on a 10x10 board
//!
//! The engine drives one side of a two-player five-in-a-row game with a
//! depth-bounded minimax search. The layered performance strategy:
//! - Candidate pruning: only empty cells near existing stones enter the
//!   search frontier
//! - Move ordering: tactical moves first, so alpha-beta cuts early
//! - Memoization: deep-node scores cached in a transposition table
//!
//! # Architecture
//!
//! - [`board`]: board representation and mutation primitives
//! - [`rules`]: win/draw detection, move validation
//! - [`eval`]: static heuristic evaluation at the search horizon
//! - [`search`]: candidate generation, move ordering, transposition
//!   table, minimax with alpha-beta pruning
//! - [`engine`]: session facade owning per-game search state
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AiEngine, Board, Stone};
//!
//! let mut engine = AiEngine::new();
//! let mut board = Board::new();
//!
//! // Human plays, then the AI responds
//! engine.apply_move(&mut board, Stone::White, 4, 4).unwrap();
//! let pos = engine.compute_ai_move(&mut board, Stone::Black).unwrap();
//! engine
//!     .apply_move(&mut board, Stone::Black, i32::from(pos.row), i32::from(pos.col))
//!     .unwrap();
//! ```
//!
//! The search is single-threaded and synchronous: the board is mutated
//! in place during a search and fully restored before the call returns,
//! so nothing else may touch it while a search is in flight. There is
//! no randomness anywhere in the engine; identical inputs always yield
//! identical moves.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::AiEngine;
pub use rules::{GameError, GameStatus};
pub use search::{SearchResult, Searcher};
