/// Main configuration module.
///
/// Re-exports the gameplay constants and the validated run configuration
/// consumed by the simulation driver.
pub mod game;

use std::time::Duration;

use serde::Serialize;

use crate::error::SimulationError;
use game::{DEFAULT_FPS, DEFAULT_MAX_ROUNDS};

/// Round limit and cadence for one run of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationConfig {
    max_rounds: u32,
    fps: u32,
}

impl SimulationConfig {
    pub fn new(max_rounds: u32, fps: u32) -> Result<Self, SimulationError> {
        if max_rounds == 0 {
            return Err(SimulationError::ZeroRounds);
        }
        if fps == 0 {
            return Err(SimulationError::ZeroFrameRate);
        }
        Ok(Self { max_rounds, fps })
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Time between two ticks (`1000 / fps` milliseconds).
    pub fn tick_period(&self) -> Duration {
        Duration::from_nanos((1_000_000_000 / u64::from(self.fps)).max(1))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            fps: DEFAULT_FPS,
        }
    }
}
