//! Win condition checking
//!
//! A side wins with 5 or more consecutive stones along one of 4 axes.
//! `has_five_in_row` is the reference check used at every search node:
//! it scans every cell as a potential run start and only looks in the
//! forward direction per axis, so no run is counted twice. A run longer
//! than 5 still wins.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};

/// Direction vectors for line checking (4 directions).
/// Forward-only: scanning every start cell covers each axis once.
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if there's 5+ in a row for the given color.
///
/// Deterministic full-board scan; this is the win check the search
/// calls at every node.
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    if stone == Stone::Empty {
        return false;
    }

    for r in 0..BOARD_SIZE as i32 {
        for c in 0..BOARD_SIZE as i32 {
            if board.get(Pos::new(r as u8, c as u8)) != stone {
                continue;
            }

            for &(dr, dc) in &DIRECTIONS {
                // Run must fit on the board
                let end_r = r + dr * (WIN_LENGTH as i32 - 1);
                let end_c = c + dc * (WIN_LENGTH as i32 - 1);
                if !Pos::is_valid(end_r, end_c) {
                    continue;
                }

                let mut run = true;
                for i in 1..WIN_LENGTH as i32 {
                    let p = Pos::new((r + dr * i) as u8, (c + dc * i) as u8);
                    if board.get(p) != stone {
                        run = false;
                        break;
                    }
                }
                if run {
                    return true;
                }
            }
        }
    }
    false
}

/// Fast five-in-a-row check through a single position.
///
/// Only checks the 4 axes passing through `pos`, counting both
/// directions. After placing a stone at `pos` on a board with no
/// existing five, this is equivalent to `has_five_in_row`: any new five
/// must run through the placed stone. Used by move ordering and the
/// one-ply tactical shortcuts, never at interior search nodes.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, color: Stone) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1i32;

        // Positive direction
        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            count += 1;
            r += dr;
            c += dc;
        }

        // Negative direction
        r = i32::from(pos.row) - dr;
        c = i32::from(pos.col) - dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
            count += 1;
            r -= dr;
            c -= dc;
        }

        if count >= WIN_LENGTH as i32 {
            return true;
        }
    }
    false
}

/// Outcome summary for a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Neither side has five and empty cells remain
    InProgress,
    /// The given side has 5-in-a-row
    Won(Stone),
    /// The board is full with no winner
    Draw,
}

/// Check for a winner.
///
/// Returns `Some(Stone)` if either side has 5-in-a-row, `None` otherwise.
pub fn winner(board: &Board) -> Option<Stone> {
    for stone in [Stone::Black, Stone::White] {
        if has_five_in_row(board, stone) {
            return Some(stone);
        }
    }
    None
}

/// Classify the position as in-progress, won, or drawn
pub fn game_status(board: &Board) -> GameStatus {
    if let Some(stone) = winner(board) {
        return GameStatus::Won(stone);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
