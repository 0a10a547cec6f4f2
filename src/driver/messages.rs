use actix::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SimulationConfig;
use crate::game::entities::Bot;
use crate::game::grid::Grid;
use crate::game::systems::GameResult;

/// Start a run, replacing any run in progress.
#[derive(Message)]
#[rtype(result = "()")]
pub struct StartSimulation {
    pub config: SimulationConfig,
}

/// Cancel the run in progress. No scoring happens.
#[derive(Message)]
#[rtype(result = "()")]
pub struct StopSimulation;

/// Cancel any run, then reallocate the grid and re-place every bot.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ResetArena;

/// Register an observer for [`SimulationEvent`]s.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe(pub Recipient<SimulationEvent>);

#[derive(Message)]
#[rtype(result = "SimulationSnapshot")]
pub struct GetSnapshot;

#[derive(Message)]
#[rtype(result = "DriverStatus")]
pub struct GetStatus;

/// What observers need to draw the arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub run_id: Uuid,
    pub turn: u32,
    pub max_rounds: u32,
    pub grid: Grid,
    pub bots: Vec<Bot>,
}

#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub enum SimulationEvent {
    /// Sent after every tick.
    Turn(SimulationSnapshot),
    /// Sent once, right after the final tick's `Turn`.
    Finished {
        snapshot: SimulationSnapshot,
        result: GameResult,
    },
    /// A run was cancelled by [`StopSimulation`].
    Stopped { run_id: Uuid },
    /// The arena was reinitialized by [`ResetArena`].
    Reset(SimulationSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverPhase {
    Idle,
    Running,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStatus {
    pub run_id: Uuid,
    pub phase: DriverPhase,
    pub turn: u32,
    pub max_rounds: u32,
    /// Result of the last run that reached its round limit.
    pub result: Option<GameResult>,
}
