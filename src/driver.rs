//! Fixed-timestep simulation driver
//!
//! Owns the authoritative `GameState` and translates elapsed wall time into
//! fixed `AdvanceTick` steps, plus the derived commands the simulation does
//! not issue itself (level advance on horizontal progress). The driver has
//! no notion of rendering or timers — the host calls `advance` at whatever
//! cadence it has and everything downstream stays deterministic.

use crate::consts::*;
use crate::sim::{Command, GameState, reduce};

pub struct Driver {
    state: GameState,
    accumulator: f32,
}

impl Driver {
    /// Driver idling at the menu with the given seed on deck.
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::menu(seed),
            accumulator: 0.0,
        }
    }

    /// Read-only snapshot for renderers and HUDs.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Route any command through the reducer.
    pub fn dispatch(&mut self, command: Command) {
        let state = std::mem::replace(&mut self.state, GameState::menu(0));
        self.state = reduce(state, command);
    }

    /// Feed `elapsed` wall-clock seconds into the simulation.
    ///
    /// Elapsed time is capped (a backgrounded host resumes gracefully) and
    /// consumed in fixed `SIM_DT` steps, at most `MAX_SUBSTEPS` per call so a
    /// slow frame cannot spiral. After each step the level-advance threshold
    /// is checked and the derived command issued.
    pub fn advance(&mut self, elapsed: f32) {
        if !self.state.is_live() {
            return;
        }
        self.accumulator += elapsed.min(MAX_TICK_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.dispatch(Command::AdvanceTick { dt: SIM_DT });
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.progress_complete() {
                self.dispatch(Command::AdvanceLevel);
            }
            if !self.state.is_live() {
                break;
            }
        }
    }

    fn progress_complete(&self) -> bool {
        let threshold = if self.state.is_tutorial_level {
            TUTORIAL_ADVANCE_X
        } else {
            LEVEL_ADVANCE_X
        };
        self.state.is_live() && self.state.player.pos.x > threshold
    }
}
