//! Candidate move generation and move ordering
//!
//! The search never considers every empty cell: candidates are limited
//! to empty cells within Chebyshev distance 2 of an existing stone,
//! collected in a deterministic first-seen order. That order is the
//! tiebreak for the stable priority sort, so both sides of this module
//! must stay deterministic together.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
use crate::rules::has_five_at;

/// Neighborhood radius around existing stones (Chebyshev distance)
const CANDIDATE_RADIUS: i32 = 2;

/// Priority bonus for a move that wins immediately
const WIN_PRIORITY: i32 = 1000;
/// Priority bonus for a move that blocks an immediate opponent win
const BLOCK_PRIORITY: i32 = 500;

/// Generate candidate moves for the current position.
///
/// - Empty board: exactly one candidate, the center cell.
/// - Otherwise: for every occupied cell in row-major order, every empty
///   cell within Chebyshev distance 2 is collected once, in first-seen
///   order. The center is then inserted at the front if it is empty,
///   even when already collected; the duplicate is harmless (the search
///   revisits the same child) and removing it would shift the order of
///   every later candidate.
///
/// The result is empty only for a full board; callers exclude that case
/// before searching.
pub fn generate_candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![CENTER];
    }

    let mut moves = Vec::new();
    let mut considered = [[false; BOARD_SIZE]; BOARD_SIZE];

    for r in 0..BOARD_SIZE as i32 {
        for c in 0..BOARD_SIZE as i32 {
            if board.get(Pos::new(r as u8, c as u8)) == Stone::Empty {
                continue;
            }

            for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                    let nr = r + dr;
                    let nc = c + dc;
                    if !Pos::is_valid(nr, nc) {
                        continue;
                    }
                    let pos = Pos::new(nr as u8, nc as u8);
                    if !considered[nr as usize][nc as usize] && board.is_empty(pos) {
                        considered[nr as usize][nc as usize] = true;
                        moves.push(pos);
                    }
                }
            }
        }
    }

    if board.is_empty(CENTER) {
        moves.insert(0, CENTER);
    }

    moves
}

/// Sort candidates in place, best first.
///
/// Priority: +1000 for an immediate win, +500 for blocking an immediate
/// opponent win, plus a center-proximity bonus of
/// `BOARD_SIZE - manhattan distance to center` for every move. The sort
/// is stable: ties keep generator order, which makes the search fully
/// reproducible.
///
/// The board is mutated transiently (place, test, undo) and restored
/// exactly before returning.
pub fn order_moves(moves: &mut [Pos], board: &mut Board, color: Stone) {
    let opponent = color.opponent();
    let mut scored: Vec<(i32, Pos)> = moves
        .iter()
        .map(|&pos| (move_priority(board, pos, color, opponent), pos))
        .collect();

    // sort_by_key is stable; Reverse gives descending priority
    scored.sort_by_key(|&(priority, _)| std::cmp::Reverse(priority));

    for (slot, (_, pos)) in moves.iter_mut().zip(scored) {
        *slot = pos;
    }
}

fn move_priority(board: &mut Board, pos: Pos, color: Stone, opponent: Stone) -> i32 {
    let mut priority = 0;

    board.place_stone(pos, color);
    if has_five_at(board, pos, color) {
        priority += WIN_PRIORITY;
    }

    board.place_stone(pos, opponent);
    if has_five_at(board, pos, opponent) {
        priority += BLOCK_PRIORITY;
    }
    board.remove_stone(pos);

    priority + (BOARD_SIZE as i32 - pos.center_distance())
}
