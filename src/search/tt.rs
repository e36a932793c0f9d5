//! Transposition table for caching search results
//!
//! Positions are keyed by the exact, order-sensitive contents of all
//! cells - lossless, since cell contents are the only board state. The
//! key deliberately ignores remaining search depth: a cached entry can
//! be reused by a node that reaches the same position with a different
//! depth budget. Cross-depth reuse trades a small scoring error for a
//! much higher hit rate; the depth gate (entries written only well
//! below the root) keeps that error away from the move decision.
//!
//! The table lives for one game session and is cleared on every
//! new-game reset.

use std::collections::HashMap;

use crate::board::{Board, Stone, TOTAL_CELLS};

/// Words needed to pack 2 bits per cell
const KEY_WORDS: usize = (TOTAL_CELLS * 2).div_ceil(64); // 4 for 10x10

/// Packed, order-sensitive encoding of the full board: 2 bits per cell
/// in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey([u64; KEY_WORDS]);

impl BoardKey {
    /// Encode the board losslessly
    pub fn from_board(board: &Board) -> Self {
        let mut words = [0u64; KEY_WORDS];
        for (idx, &cell) in board.cells().iter().enumerate() {
            let code: u64 = match cell {
                Stone::Empty => 0,
                Stone::Black => 1,
                Stone::White => 2,
            };
            let bit = idx * 2;
            words[bit / 64] |= code << (bit % 64);
        }
        Self(words)
    }
}

/// Score cache mapping board contents to a previously computed score
#[derive(Debug, Default)]
pub struct TranspositionTable {
    cache: HashMap<BoardKey, i32>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Look up the cached score for this exact position
    #[must_use]
    pub fn get(&self, board: &Board) -> Option<i32> {
        self.cache.get(&BoardKey::from_board(board)).copied()
    }

    /// Cache a score for this exact position. The caller enforces the
    /// depth gate (only deep nodes are written).
    pub fn set(&mut self, board: &Board, score: i32) {
        self.cache.insert(BoardKey::from_board(board), score);
    }

    /// Drop all entries. Invoked on new game / board reset only.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
