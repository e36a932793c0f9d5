//! Search module for the Gomoku AI
//!
//! Contains:
//! - Candidate move generation with proximity filtering
//! - Move ordering for stronger alpha-beta pruning
//! - Transposition table keyed on exact board contents
//! - Depth-bounded minimax with alpha-beta pruning and move selection

pub mod minimax;
pub mod movegen;
pub mod tt;

pub use minimax::{SearchResult, Searcher, MAX_DEPTH, SEARCH_DEPTH};
pub use movegen::{generate_candidates, order_moves};
pub use tt::{BoardKey, TranspositionTable};
