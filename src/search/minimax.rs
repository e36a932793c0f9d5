//! Depth-bounded minimax with alpha-beta pruning and move selection
//!
//! The searcher owns the per-session transposition table and exposes
//! two entry points:
//! - [`Searcher::search`]: raw minimax over one subtree, mutating the
//!   board in place and restoring it exactly before returning.
//! - [`Searcher::select_move`]: the orchestration layer - one-ply
//!   immediate-win and forced-block shortcuts, then a bounded search
//!   over the top ordered candidates.
//!
//! Terminal scores fold depth in so the search prefers faster wins and
//! slower losses: a win found at remaining depth `d` scores
//! `1_000_000 - d`, a loss `-1_000_000 + d`.

use log::debug;

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::eval::{evaluate, PatternScore};
use crate::rules::{has_five_at, has_five_in_row};

use super::movegen::{generate_candidates, order_moves};
use super::tt::TranspositionTable;

/// Nominal search depth budget. The selector searches each root
/// candidate at `MAX_DEPTH - 1` plies.
pub const MAX_DEPTH: i32 = 5;

/// Depth the move selector searches each root candidate at
pub const SEARCH_DEPTH: i32 = MAX_DEPTH - 1;

/// Transposition entries are read and written only at depths strictly
/// below this bound; shallow and root nodes are never cached.
const TT_DEPTH_BOUND: i32 = MAX_DEPTH - 2;

/// Infinity for alpha-beta bounds, above any reachable score
const INF: i32 = PatternScore::FIVE + 1;

/// Maximum candidates explored at an interior node
const MAX_NODE_MOVES: usize = 15;

/// Maximum candidates explored at the root
const MAX_ROOT_MOVES: usize = 8;

/// Result of a move selection with search statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Score of the chosen move (terminal scale for shortcut moves)
    pub score: i32,
    /// Search nodes visited
    pub nodes: u64,
}

/// Minimax searcher with per-session memoization.
///
/// Single-threaded and synchronous: a call runs to completion, and the
/// board it mutates must not be touched by anyone else while a search
/// is in flight. The board is always restored to its pre-call state.
pub struct Searcher {
    tt: TranspositionTable,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tt: TranspositionTable::new(),
            nodes: 0,
        }
    }

    /// Reset session state for a new game (clears the transposition
    /// table).
    pub fn reset(&mut self) {
        self.tt.clear();
        self.nodes = 0;
    }

    /// Cached positions in the transposition table
    #[must_use]
    pub fn tt_len(&self) -> usize {
        self.tt.len()
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `maximizing` nodes place stones for `ai_side`, minimizing nodes
    /// for the opponent. Returns the exact score of the subtree within
    /// the `(alpha, beta)` window.
    ///
    /// Transposition lookups ignore remaining depth by design: a hit
    /// may short-circuit with a score computed under a different depth
    /// budget for the same position. Entries are confined to depths
    /// strictly below `MAX_DEPTH - 2`, which keeps the approximation
    /// away from the root decision.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ai_side: Stone,
    ) -> i32 {
        self.nodes += 1;

        if depth < TT_DEPTH_BOUND {
            if let Some(score) = self.tt.get(board) {
                return score;
            }
        }

        let opponent = ai_side.opponent();

        // Terminal: someone already has five
        if has_five_in_row(board, ai_side) {
            return PatternScore::FIVE - depth;
        }
        if has_five_in_row(board, opponent) {
            return -PatternScore::FIVE + depth;
        }

        // Horizon or full board: static evaluation
        if depth == 0 || board.is_full() {
            let score = evaluate(board, ai_side);
            if depth < TT_DEPTH_BOUND {
                self.tt.set(board, score);
            }
            return score;
        }

        let mut moves = generate_candidates(board);
        order_moves(&mut moves, board, ai_side);
        moves.truncate(MAX_NODE_MOVES);

        let best = if maximizing {
            let mut best = -INF;
            for &pos in &moves {
                board.place_stone(pos, ai_side);
                let score = self.search(board, depth - 1, alpha, beta, false, ai_side);
                board.remove_stone(pos);

                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for &pos in &moves {
                board.place_stone(pos, opponent);
                let score = self.search(board, depth - 1, alpha, beta, true, ai_side);
                board.remove_stone(pos);

                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        };

        if depth < TT_DEPTH_BOUND {
            self.tt.set(board, best);
        }
        best
    }

    /// Pick the engine's move for `ai_side`.
    ///
    /// 1. Row-major scan for a cell that wins immediately.
    /// 2. Row-major scan for a cell the opponent would win on (forced
    ///    block).
    /// 3. Otherwise search the top [`MAX_ROOT_MOVES`] ordered
    ///    candidates at [`SEARCH_DEPTH`]; the highest score wins and
    ///    ties keep the first post-sort candidate.
    ///
    /// `best_move` is `None` only when the board is full; callers guard
    /// that precondition.
    pub fn select_move(&mut self, board: &mut Board, ai_side: Stone) -> SearchResult {
        self.nodes = 0;
        let opponent = ai_side.opponent();

        // One-ply tactical shortcuts
        if let Some(pos) = find_immediate_win(board, ai_side) {
            debug!("immediate win at ({}, {})", pos.row, pos.col);
            return SearchResult {
                best_move: Some(pos),
                score: PatternScore::FIVE,
                nodes: 0,
            };
        }
        if let Some(pos) = find_immediate_win(board, opponent) {
            debug!("forced block at ({}, {})", pos.row, pos.col);
            return SearchResult {
                best_move: Some(pos),
                score: 0,
                nodes: 0,
            };
        }

        let mut moves = generate_candidates(board);
        order_moves(&mut moves, board, ai_side);
        moves.truncate(MAX_ROOT_MOVES);

        // Root window deliberately stays open across candidates; the
        // pruning happens inside each subtree.
        let (alpha, beta) = (-INF, INF);

        let mut best_move = None;
        let mut best_score = -INF;

        for &pos in &moves {
            board.place_stone(pos, ai_side);
            let score = self.search(board, SEARCH_DEPTH, alpha, beta, false, ai_side);
            board.remove_stone(pos);

            // Strict comparison: ties keep the first post-sort candidate
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        debug!(
            "search selected {:?} score {} nodes {}",
            best_move, best_score, self.nodes
        );
        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first empty cell, in row-major order, whose placement gives
/// `side` five in a row. The board is restored before returning.
fn find_immediate_win(board: &mut Board, side: Stone) -> Option<Pos> {
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            if !board.is_empty(pos) {
                continue;
            }
            board.place_stone(pos, side);
            let wins = has_five_at(board, pos, side);
            board.remove_stone(pos);
            if wins {
                return Some(pos);
            }
        }
    }
    None
}
