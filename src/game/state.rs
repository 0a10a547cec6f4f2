use log::info;
use rand::Rng;

use crate::error::SimulationError;
use crate::game::entities::{random_start_positions, spawn_bots, Bot, BotRegistration, Strategy};
use crate::game::grid::Grid;
use crate::game::systems::{compute_winners, run_bots, GameResult};

/// Everything one simulation mutates: the grid, the bots and their strategies.
pub struct SimulationState {
    pub grid: Grid,
    pub bots: Vec<Bot>,
    pub(crate) strategies: Vec<Box<dyn Strategy>>,
}

impl SimulationState {
    /// Register the bots, place them and mark their start cells.
    pub fn new<R: Rng + ?Sized>(
        registrations: Vec<BotRegistration>,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let names: Vec<String> = registrations.iter().map(|r| r.name.clone()).collect();
        let grid = Grid::for_bots(names.len());
        let bots = spawn_bots(&names, grid.size(), rng)?;
        let strategies = registrations.into_iter().map(|r| r.strategy).collect();

        let mut state = SimulationState { grid, bots, strategies };
        state.mark_start_cells();
        info!("[Registry] {} bots registered on a {}x{} arena", state.bots.len(), state.arena_size(), state.arena_size());
        Ok(state)
    }

    /// Fresh grid and fresh start positions; ids, colours and strategies are kept.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = Grid::for_bots(self.bots.len());
        let positions = random_start_positions(self.bots.len(), self.grid.size(), rng);
        for (bot, pos) in self.bots.iter_mut().zip(positions) {
            bot.pos = pos;
        }
        self.mark_start_cells();
    }

    pub fn arena_size(&self) -> usize {
        self.grid.size()
    }

    /// Run one turn of the turn engine.
    pub fn advance_turn(&mut self) {
        run_bots(self);
    }

    pub fn winners(&self) -> GameResult {
        compute_winners(&self.grid, &self.bots)
    }

    fn mark_start_cells(&mut self) {
        for bot in &self.bots {
            self.grid.mark(bot.pos, bot.id);
        }
    }
}
