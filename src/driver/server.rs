//! Simulation driver actor.
//!
//! Owns the simulation state and the turn clock, runs one turn per tick on an
//! interval timer and scores the arena once the round limit is reached.
//! Observers receive a [`SimulationEvent`] after every state change.

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};
use uuid::Uuid;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::game::entities::BotRegistration;
use crate::game::state::SimulationState;
use crate::game::systems::GameResult;
use super::messages::{
    DriverPhase, DriverStatus, GetSnapshot, GetStatus, ResetArena, SimulationEvent,
    SimulationSnapshot, StartSimulation, StopSimulation, Subscribe,
};

pub struct SimulationDriver {
    run_id: Uuid,
    state: SimulationState,
    config: SimulationConfig,
    /// Current turn, 1 when a run starts and 0 after a stop.
    turn: u32,
    /// Interval timer of the run in progress.
    ticker: Option<SpawnHandle>,
    observers: Vec<Recipient<SimulationEvent>>,
    result: Option<GameResult>,
}

impl Actor for SimulationDriver {
    type Context = Context<Self>;

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        debug!("[Driver] Actor stopped, run_id={}", self.run_id);
    }
}

impl SimulationDriver {
    pub fn new(state: SimulationState) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            state,
            config: SimulationConfig::default(),
            turn: 1,
            ticker: None,
            observers: Vec::new(),
            result: None,
        }
    }

    /// Register the bots with random start positions.
    pub fn from_registrations(registrations: Vec<BotRegistration>) -> Result<Self, SimulationError> {
        let state = SimulationState::new(registrations, &mut rand::rng())?;
        Ok(Self::new(state))
    }

    pub fn phase(&self) -> DriverPhase {
        if self.ticker.is_some() {
            DriverPhase::Running
        } else {
            DriverPhase::Idle
        }
    }

    fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            run_id: self.run_id,
            turn: self.turn,
            max_rounds: self.config.max_rounds(),
            grid: self.state.grid.clone(),
            bots: self.state.bots.clone(),
        }
    }

    fn broadcast(&self, event: SimulationEvent) {
        for observer in &self.observers {
            observer.do_send(event.clone());
        }
    }

    /// Cancel the interval timer. Returns whether a run was in progress.
    fn cancel_ticker(&mut self, ctx: &mut Context<Self>) -> bool {
        match self.ticker.take() {
            Some(handle) => {
                ctx.cancel_future(handle);
                true
            }
            None => false,
        }
    }

    fn start(&mut self, config: SimulationConfig, ctx: &mut Context<Self>) {
        if self.cancel_ticker(ctx) {
            info!("[Driver] Run {} replaced by a new run", self.run_id);
        }

        self.run_id = Uuid::new_v4();
        self.config = config;
        self.turn = 1;
        self.result = None;

        let handle = ctx.run_interval(config.tick_period(), |act, ctx| {
            act.tick(ctx);
        });
        self.ticker = Some(handle);

        info!(
            "[Driver] Run {} started: max_rounds={} fps={} bots={}",
            self.run_id,
            config.max_rounds(),
            config.fps(),
            self.state.bots.len()
        );
    }

    fn tick(&mut self, ctx: &mut Context<Self>) {
        // Guard against a tick racing a cancellation.
        if self.ticker.is_none() {
            return;
        }

        self.turn += 1;
        let terminal = self.turn >= self.config.max_rounds();
        if terminal {
            self.cancel_ticker(ctx);
        }

        self.state.advance_turn();
        debug!("[Driver] Run {} turn {}/{}", self.run_id, self.turn, self.config.max_rounds());
        self.broadcast(SimulationEvent::Turn(self.snapshot()));

        if terminal {
            let result = self.state.winners();
            info!("[Driver] Run {} finished at turn {}: {}", self.run_id, self.turn, result.summary());
            self.result = Some(result.clone());
            self.broadcast(SimulationEvent::Finished {
                snapshot: self.snapshot(),
                result,
            });
        }
    }

    fn stop(&mut self, ctx: &mut Context<Self>) {
        let was_running = self.cancel_ticker(ctx);
        self.turn = 0;
        if was_running {
            info!("[Driver] Run {} stopped", self.run_id);
            self.broadcast(SimulationEvent::Stopped { run_id: self.run_id });
        }
    }

    fn reset(&mut self, ctx: &mut Context<Self>) {
        if self.cancel_ticker(ctx) {
            info!("[Driver] Run {} cancelled by reset", self.run_id);
        }
        self.state.reinitialize(&mut rand::rng());
        self.turn = 1;
        self.result = None;
        info!("[Driver] Arena reset: {} bots", self.state.bots.len());
        self.broadcast(SimulationEvent::Reset(self.snapshot()));
    }
}

impl Handler<StartSimulation> for SimulationDriver {
    type Result = ();

    fn handle(&mut self, msg: StartSimulation, ctx: &mut Context<Self>) -> Self::Result {
        self.start(msg.config, ctx);
    }
}

impl Handler<StopSimulation> for SimulationDriver {
    type Result = ();

    fn handle(&mut self, _: StopSimulation, ctx: &mut Context<Self>) -> Self::Result {
        self.stop(ctx);
    }
}

impl Handler<ResetArena> for SimulationDriver {
    type Result = ();

    fn handle(&mut self, _: ResetArena, ctx: &mut Context<Self>) -> Self::Result {
        self.reset(ctx);
    }
}

impl Handler<Subscribe> for SimulationDriver {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        self.observers.push(msg.0);
    }
}

impl Handler<GetSnapshot> for SimulationDriver {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.snapshot())
    }
}

impl Handler<GetStatus> for SimulationDriver {
    type Result = MessageResult<GetStatus>;

    fn handle(&mut self, _: GetStatus, _: &mut Context<Self>) -> Self::Result {
        MessageResult(DriverStatus {
            run_id: self.run_id,
            phase: self.phase(),
            turn: self.turn,
            max_rounds: self.config.max_rounds(),
            result: self.result.clone(),
        })
    }
}
