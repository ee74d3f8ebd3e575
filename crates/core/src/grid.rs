//! Grid module - occupancy mask for the playfield
//!
//! The grid is a 30x20 boolean mask tracking which cells the snake body
//! covers. Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..29 (left to right), y ranges 0..19
//! (top to bottom).
//!
//! Invariant: the mask holds exactly the cells of the body. `GameState` is
//! the only writer and keeps the two in sync on every step.

use crate::types::{Cell, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Occupancy mask over the playfield, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of flags, row-major order (y * WIDTH + x)
    occupied: [bool; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            occupied: [false; GRID_CELLS],
        }
    }

    /// Calculate flat index from a cell, `None` when out of bounds
    #[inline(always)]
    fn index(cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.x >= GRID_WIDTH || cell.y < 0 || cell.y >= GRID_HEIGHT {
            return None;
        }
        Some((cell.y as usize) * (GRID_WIDTH as usize) + (cell.x as usize))
    }

    /// Check whether a cell lies inside the playfield
    pub fn in_bounds(&self, cell: Cell) -> bool {
        Self::index(cell).is_some()
    }

    /// Check whether a cell is covered by the body
    ///
    /// Out-of-bounds cells report as unoccupied; bounds are checked
    /// separately by the caller.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        Self::index(cell).is_some_and(|idx| self.occupied[idx])
    }

    /// Mark a cell as covered. Returns false if out of bounds.
    pub fn occupy(&mut self, cell: Cell) -> bool {
        match Self::index(cell) {
            Some(idx) => {
                self.occupied[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Mark a cell as free. Returns false if out of bounds.
    pub fn vacate(&mut self, cell: Cell) -> bool {
        match Self::index(cell) {
            Some(idx) => {
                self.occupied[idx] = false;
                true
            }
            None => false,
        }
    }

    /// Number of cells not covered by the body
    pub fn free_cells(&self) -> usize {
        self.occupied.iter().filter(|&&o| !o).count()
    }

    /// The k-th free cell in row-major order
    ///
    /// Used as the deterministic fallback for food placement: with `k` drawn
    /// uniformly from `[0, free_cells())`, this is a uniform pick among the
    /// free cells.
    pub fn nth_free(&self, k: usize) -> Option<Cell> {
        let mut remaining = k;
        for (idx, &occupied) in self.occupied.iter().enumerate() {
            if occupied {
                continue;
            }
            if remaining == 0 {
                let x = (idx % GRID_WIDTH as usize) as i8;
                let y = (idx / GRID_WIDTH as usize) as i8;
                return Some(Cell::new(x, y));
            }
            remaining -= 1;
        }
        None
    }

    /// Mark every cell as free
    pub fn clear(&mut self) {
        self.occupied = [false; GRID_CELLS];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
