//! Game state module - manages the complete game state
//!
//! This module ties together the core components: body, occupancy grid, RNG,
//! and scoring. It owns the tick loop semantics - movement, growth, collision,
//! and the Playing/GameOver lifecycle.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
///
/// The body is an ordered list of cells, head first, with no duplicates
/// while the session is alive. The grid mirrors the body as a flat
/// occupancy mask for O(1) collision checks.
#[derive(Debug, Clone)]
pub struct GameState {
    body: ArrayVec<Cell, GRID_CELLS>,
    grid: Grid,
    /// Heading applied at the last step.
    heading: Direction,
    /// Heading requested for the next step (last-write-wins within a frame).
    pending: Direction,
    food: Cell,
    score: u32,
    phase: Phase,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            body: ArrayVec::new(),
            grid: Grid::new(),
            heading: SPAWN_HEADING,
            pending: SPAWN_HEADING,
            food: SPAWN,
            score: 0,
            phase: Phase::Playing,
            episode_id: 0,
            rng: SimpleRng::new(seed),
        };
        state.body.push(SPAWN);
        state.grid.occupy(SPAWN);
        state.spawn_food();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Ordered body cells, head first
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    /// The head cell (the body is never empty)
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Current RNG state (for restarting with the same stream)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Request a new heading for the next step
    ///
    /// The request is silently ignored when it is the exact reverse of the
    /// heading applied at the last step. Comparing against the applied
    /// heading (not the latest request) means two key presses within one
    /// frame can never turn the head into the neck.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested == self.heading.opposite() {
            return false;
        }
        self.pending = requested;
        true
    }

    /// Advance the simulation by one step
    ///
    /// No-op once the session is over. Returns whether the body moved.
    pub fn tick(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        self.heading = self.pending;
        let (dx, dy) = self.heading.delta();
        let new_head = self.head().offset(dx, dy);

        if !self.grid.in_bounds(new_head) {
            self.phase = Phase::GameOver;
            return false;
        }

        // The tail cell counts as a collision even though it is about to be
        // vacated this step.
        if self.grid.is_occupied(new_head) {
            self.phase = Phase::GameOver;
            return false;
        }

        // The body can only be full when every cell is occupied, in which
        // case the collision check above already ended the session.
        self.body.insert(0, new_head);
        self.grid.occupy(new_head);

        if new_head == self.food {
            self.score += 1;
            self.spawn_food();
        } else if let Some(tail) = self.body.pop() {
            self.grid.vacate(tail);
        }

        true
    }

    /// Place food on a uniformly random free cell
    ///
    /// Rejection-samples up to `FOOD_RETRY_LIMIT` cells, then falls back to
    /// indexing into the free cells directly, so placement always
    /// terminates. When the body covers the whole grid there is nowhere
    /// left to place food and the session ends.
    fn spawn_food(&mut self) -> bool {
        let free = self.grid.free_cells();
        if free == 0 {
            self.phase = Phase::GameOver;
            return false;
        }

        for _ in 0..FOOD_RETRY_LIMIT {
            let cell = Cell::new(
                self.rng.next_range(GRID_WIDTH as u32) as i8,
                self.rng.next_range(GRID_HEIGHT as u32) as i8,
            );
            if !self.grid.is_occupied(cell) {
                self.food = cell;
                return true;
            }
        }

        // Dense board: pick the k-th free cell, still uniform.
        let k = self.rng.next_range(free as u32) as usize;
        match self.grid.nth_free(k) {
            Some(cell) => {
                self.food = cell;
                true
            }
            None => {
                // Unreachable: free > 0 and k < free.
                self.phase = Phase::GameOver;
                false
            }
        }
    }

    /// Reset the session to its initial state
    ///
    /// The RNG stream continues, so food placement after a reset differs
    /// from the first session while the whole run stays reproducible from
    /// the original seed.
    pub fn reset(&mut self) {
        self.body.clear();
        self.grid.clear();
        self.body.push(SPAWN);
        self.grid.occupy(SPAWN);
        self.heading = SPAWN_HEADING;
        self.pending = SPAWN_HEADING;
        self.score = 0;
        self.phase = Phase::Playing;
        self.spawn_food();
    }

    /// Apply a game action. Returns whether the action changed state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => self.set_direction(direction),
            GameAction::Restart => {
                self.episode_id = self.episode_id.wrapping_add(1);
                self.reset();
                true
            }
        }
    }

    /// Place food at a fixed cell
    ///
    /// Scripted-scenario hook for tests and demos; gameplay placement goes
    /// through the seeded RNG.
    pub fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }

    /// Write a render-ready copy of the state into `out`
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.body.clear();
        for &cell in self.body.iter() {
            out.body.push(cell);
        }
        out.food = self.food;
        out.score = self.score;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.seed = self.rng.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Build a state with an explicit body and heading for scenario tests
    #[cfg(test)]
    fn with_body(seed: u32, cells: &[Cell], heading: Direction) -> Self {
        let mut state = Self::new(seed);
        state.body.clear();
        state.grid.clear();
        for &cell in cells {
            state.body.push(cell);
            state.grid.occupy(cell);
        }
        state.heading = heading;
        state.pending = heading;
        state
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
