//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed grid:
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (10, 10), heading right
//!
//! # Timing
//!
//! The simulation advances on a fixed clock:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed timestep interval (10 steps per second) |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GRID_WIDTH, GRID_HEIGHT};
//!
//! let head = Cell::new(10, 10);
//! let (dx, dy) = Direction::Right.delta();
//! let next = head.offset(dx, dy);
//! assert_eq!(next, Cell::new(11, 10));
//!
//! assert_eq!(Direction::Right.opposite(), Direction::Left);
//!
//! assert_eq!(GRID_WIDTH, 30);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (30 columns)
pub const GRID_WIDTH: i8 = 30;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: i8 = 20;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Fixed timestep interval in milliseconds (100ms = 10 steps per second)
pub const TICK_MS: u64 = 100;

/// Snake spawn cell at the start of every session
pub const SPAWN: Cell = Cell::new(10, 10);

/// Heading at the start of every session
pub const SPAWN_HEADING: Direction = Direction::Right;

/// Random food placement attempts before falling back to a
/// deterministic scan of the free cells.
pub const FOOD_RETRY_LIMIT: u32 = 64;

/// A grid coordinate
///
/// `x` grows left to right, `y` grows top to bottom. Values outside
/// `[0, GRID_WIDTH) x [0, GRID_HEIGHT)` are representable so that
/// out-of-bounds moves can be computed and then rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement direction of the snake
///
/// Each direction is a unit step on the grid. The snake may never turn
/// directly into its own neck, so the state machine rejects a requested
/// direction equal to `opposite()` of the one applied at the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta `(dx, dy)` for one step in this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact reverse of this direction
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The two-state lifecycle of a play session
///
/// `Playing` is the initial state. A wall or self collision moves the
/// session to `GameOver`; only an explicit restart moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Discrete input events consumed by the state machine
///
/// Quit is handled by the input layer and never reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading for the next step
    Turn(Direction),
    /// Reset the session to its initial state
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_constants_match_original_layout() {
        // 600x400 window at 20px cells.
        assert_eq!(GRID_WIDTH, 30);
        assert_eq!(GRID_HEIGHT, 20);
        assert_eq!(GRID_CELLS, 600);
        assert_eq!(TICK_MS, 100);
    }

    #[test]
    fn spawn_is_inside_the_grid() {
        assert!(SPAWN.x >= 0 && SPAWN.x < GRID_WIDTH);
        assert!(SPAWN.y >= 0 && SPAWN.y < GRID_HEIGHT);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn delta_is_a_unit_step() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn cell_offset() {
        let c = Cell::new(5, 7);
        assert_eq!(c.offset(1, 0), Cell::new(6, 7));
        assert_eq!(c.offset(0, -1), Cell::new(5, 6));
        // Offsets may leave the grid; bounds are checked by the core.
        assert_eq!(Cell::new(0, 0).offset(-1, 0), Cell::new(-1, 0));
    }
}
