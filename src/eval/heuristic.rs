//! Heuristic evaluation function for non-terminal positions
//!
//! The evaluation measures the *potential* of empty cells rather than
//! existing runs: for every empty cell and each of the 4 axes it counts
//! how many same-side stones feed that cell from both directions,
//! stopping at an opposing stone or the board edge. A line only scores
//! when the other side has no stone along the scan ("undefended lines
//! only") - a capped line is worthless because playing into the cell can
//! no longer complete five there.
//!
//! Scores are summed over the whole board from the perspective of
//! `color`; the result is antisymmetric between the two sides.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};

use super::patterns::line_weight;

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`, negative values favor the opponent.
/// Heuristic scores stay well below the terminal win scores used by the
/// search (roughly within +/-50_000).
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();
    let mut score = 0;

    for r in 0..BOARD_SIZE as i32 {
        for c in 0..BOARD_SIZE as i32 {
            if board.get(Pos::new(r as u8, c as u8)) != Stone::Empty {
                continue;
            }

            for &(dr, dc) in &DIRECTIONS {
                let (own, own_blocked) = line_counts(board, r, c, dr, dc, color);
                let (opp, opp_blocked) = line_counts(board, r, c, dr, dc, opponent);

                // Score only undefended lines: a scan that met an
                // opposing stone contributes nothing.
                if !own_blocked {
                    score += line_weight(own);
                }
                if !opp_blocked {
                    score -= line_weight(opp);
                }
            }
        }
    }

    score
}

/// Count `side` stones feeding the empty cell `(r, c)` along one axis.
///
/// Scans up to 4 steps outward in each direction. Same-side stones
/// extend the count; the first opposing stone stops the scan and marks
/// the line as blocked; an empty cell or the edge stops the scan
/// without a mark.
///
/// Returns `(count, blocked)`.
fn line_counts(board: &Board, r: i32, c: i32, dr: i32, dc: i32, side: Stone) -> (i32, bool) {
    let opponent = side.opponent();
    let mut count = 0;
    let mut blocked = false;

    for sign in [1, -1] {
        for i in 1..WIN_LENGTH as i32 {
            let nr = r + sign * i * dr;
            let nc = c + sign * i * dc;
            if !Pos::is_valid(nr, nc) {
                break;
            }
            let cell = board.get(Pos::new(nr as u8, nc as u8));
            if cell == side {
                count += 1;
            } else if cell == opponent {
                blocked = true;
                break;
            } else {
                break;
            }
        }
    }

    (count, blocked)
}
