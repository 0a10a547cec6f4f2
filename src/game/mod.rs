//! Simulation core: grid, bot registry, turn engine and scoring.

pub mod types;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;

pub use state::SimulationState;
pub use types::*;
