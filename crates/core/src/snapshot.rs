//! Render-ready copies of the game state.
//!
//! The view layer consumes snapshots only, keeping rendering decoupled from
//! the live state. `GameState::snapshot_into` fills an existing snapshot so
//! the render loop can reuse one buffer every frame.

use arrayvec::ArrayVec;

use crate::types::{Cell, Phase, GRID_CELLS};

/// One frame's worth of observable game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Ordered body cells, head first
    pub body: ArrayVec<Cell, GRID_CELLS>,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.body.clear();
        self.food = Cell::new(0, 0);
        self.score = 0;
        self.phase = Phase::Playing;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            body: ArrayVec::new(),
            food: Cell::new(0, 0),
            score: 0,
            phase: Phase::Playing,
            episode_id: 0,
            seed: 0,
        }
    }
}
