//! Board structure: a flat grid of cells mutated in place
//!
//! The search mutates the board with `place_stone` / `remove_stone` and
//! restores it exactly before returning. Bounds and occupancy validation
//! happen one layer up (`rules::moves`); this layer assumes valid input.

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: row-major array of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()] == Stone::Empty
    }

    /// Place a stone. Overwrites whatever is in the cell; callers
    /// validate occupancy first (see `rules::moves::apply_move`).
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.to_index()] = stone;
    }

    /// Remove a stone (used to undo search placements)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = Stone::Empty;
    }

    /// Raw cell contents in row-major order
    #[inline]
    pub fn cells(&self) -> &[Stone; TOTAL_CELLS] {
        &self.cells
    }

    /// Check if no empty cells remain (draw when nobody has five)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Stone::Empty)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.cells.iter().filter(|&&cell| cell != Stone::Empty).count() as u32
    }

    /// Check if board has no stones at all
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Stone::Empty)
    }

    /// Clear all cells back to empty
    pub fn reset(&mut self) {
        self.cells = [Stone::Empty; TOTAL_CELLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
