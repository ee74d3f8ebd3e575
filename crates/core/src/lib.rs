//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`grid`]: 30x20 occupancy mask with bounds checks and free-cell lookup
//! - [`game_state`]: Complete game state - body, heading, food, score, phase
//! - [`rng`]: Seeded LCG for food placement
//! - [`snapshot`]: Render-ready copies of the game state
//!
//! # Game Rules
//!
//! - The body advances one cell per tick in the current heading; the tail is
//!   dropped unless food was eaten, so eating grows the body by one.
//! - A requested heading equal to the reverse of the last applied heading is
//!   silently ignored (no instant reversal into the neck).
//! - Leaving the grid or stepping onto any body cell ends the session; only
//!   an explicit restart starts a new one.
//! - Food is placed uniformly at random on a free cell, never on the body.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Turn(Direction::Down));
//! game.tick();
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.body().len(), 1);
//! ```
//!
//! # Timing
//!
//! The core is untimed: the runner calls [`GameState::tick`] once per fixed
//! interval (`TICK_MS`) and applies queued inputs before each tick, with
//! last-write-wins semantics on the heading.

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
