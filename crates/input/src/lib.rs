//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. The runner
//! drains every queued event before each tick, so direction changes are
//! last-write-wins within a frame.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
