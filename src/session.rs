//! Host-facing engine lifecycle
//!
//! Wraps the simulation behind the operations a hosting view calls, and owns
//! the fixed-timestep accumulator so a tick can never be scheduled against a
//! session that has left `Running`.

use crate::config::{Layout, Tuning};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{Ball, GameEvent, GamePhase, GameState, Paddle, TickInput, tick};

/// One play-through plus the frame scheduling around it.
///
/// The hosting view owns exactly one `GameSession` and mutates it only
/// through these methods; rendering reads go through the accessors.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    /// Pending input applied on each tick
    input: TickInput,
    /// Unconsumed frame time in seconds
    accumulator: f32,
}

impl GameSession {
    pub fn new(layout: Layout, tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(layout, tuning, seed),
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Begin a run: resets score, serves the ball, enters `Running`.
    /// No-op while a run is already in progress.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Running {
            return;
        }
        self.input.start = true;
        self.step();
        self.accumulator = 0.0;
    }

    /// Start over after a game over; only honored from `GameOver`.
    pub fn restart(&mut self) {
        if self.state.phase == GamePhase::GameOver {
            self.start();
        }
    }

    /// Route a pointer drag. The paddle snaps immediately (no interpolation);
    /// the coordinate is also kept as pending input so each subsequent tick
    /// sees the same pointer. Out-of-screen values are clamped, never
    /// rejected.
    pub fn pointer_move(&mut self, pointer_x: f32) {
        self.state
            .paddle
            .track_pointer(pointer_x, self.state.layout.screen_width);
        self.input.pointer_x = Some(pointer_x);
    }

    /// Run exactly one simulation tick with the pending input.
    /// Outside `Running` this leaves the session untouched.
    pub fn tick(&mut self) {
        self.step();
    }

    /// Advance wall-clock time, running whole ticks while `Running`.
    ///
    /// Returns the number of ticks executed. Time accumulated outside
    /// `Running` is discarded, and the loop stops the moment the session
    /// terminates mid-frame, so no tick outlives the run.
    pub fn advance(&mut self, dt_seconds: f32) -> u32 {
        if self.state.phase != GamePhase::Running {
            self.accumulator = 0.0;
            return 0;
        }

        // Cap a long frame instead of spiraling
        self.accumulator += dt_seconds.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.state.phase != GamePhase::Running {
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    /// Hand queued events (obstacle shake, game over) to the presentation
    /// layer, clearing the queue.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    fn step(&mut self) {
        let input = self.input;
        tick(&mut self.state, &input);
        // One-shot inputs are consumed by a single tick
        self.input.start = false;
    }

    // Read-only accessors for rendering

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.state.paddle
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn ticks(&self) -> u64 {
        self.state.time_ticks
    }

    pub fn layout(&self) -> &Layout {
        &self.state.layout
    }

    /// Full state snapshot, e.g. for serialization
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
