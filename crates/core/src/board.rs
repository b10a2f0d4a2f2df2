//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of color codes (0 = empty) stored in a flat array
//! for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! The active piece is stamped into the grid while it falls, so transitions
//! always erase it first, test the new position, then stamp it back.
//! Rows that become full are flagged as pending and stay on the board until
//! [`Board::compact_pending_rows`] removes them.

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// Rows flagged as full and awaiting compaction
    pending: [bool; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
            pending: [false; HEIGHT],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check whether a piece cell may not sit at (x, y)
    ///
    /// Columns outside the board and rows below the floor are blocked. Rows
    /// above the top edge are open space as long as the column is valid.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Erase a piece's occupied cells
    ///
    /// Cells outside the grid (a piece still entering from above) are skipped.
    pub fn clear_piece_cells(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, EMPTY);
        }
    }

    /// Write a piece's color into its occupied cells
    ///
    /// Cells above the top edge or outside the columns are skipped, which lets
    /// a piece exist partly off-board while it spawns.
    pub fn stamp_piece_cells(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, piece.color);
        }
    }

    /// Check if a row is completely filled
    pub fn row_is_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|&cell| cell != EMPTY)
    }

    /// Flag every full row as pending, top to bottom
    ///
    /// Cell contents are left untouched. Returns whether any row was flagged.
    pub fn mark_full_rows(&mut self) -> bool {
        let mut any = false;
        for y in 0..HEIGHT {
            if self.row_is_full(y) {
                self.pending[y] = true;
                any = true;
            }
        }
        any
    }

    /// Remove all pending rows and shift the rows above them down
    ///
    /// Single bottom-up sweep with a read and a write cursor, so any mix of
    /// adjacent and separated rows is handled in one pass. Blank rows enter at
    /// the top. Returns the number of rows removed.
    pub fn compact_pending_rows(&mut self) -> usize {
        let mut write_y = HEIGHT;
        let mut removed = 0;

        for read_y in (0..HEIGHT).rev() {
            if self.pending[read_y] {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(EMPTY);
        self.pending = [false; HEIGHT];
        removed
    }

    pub fn has_pending_rows(&self) -> bool {
        self.pending.iter().any(|&p| p)
    }

    pub fn is_pending(&self, y: usize) -> bool {
        self.pending.get(y).copied().unwrap_or(false)
    }

    /// Copy of the pending-row flags
    pub fn pending_rows(&self) -> [bool; HEIGHT] {
        self.pending
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid as rows into `out`
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            row.copy_from_slice(&self.cells[start..start + WIDTH]);
        }
    }

    /// Clear the entire board and all pending flags
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
        self.pending = [false; HEIGHT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
