//! Turn engine.
//!
//! Bots act one after another in registration order, so a later bot marking
//! the same cell in the same turn owns it afterwards.

use log::trace;

use crate::game::state::SimulationState;
use crate::game::systems::movement::move_bot;
use crate::game::types::PenState;

/// Ask every bot for its action, move it, clamp it and mark its new cell if
/// the pen is down.
pub fn run_bots(state: &mut SimulationState) {
    let arena_size = state.grid.size();
    let SimulationState { grid, bots, strategies } = state;

    for (bot, strategy) in bots.iter_mut().zip(strategies.iter_mut()) {
        let action = strategy.decide(bot.id, grid);
        bot.pos = move_bot(bot.pos, action.direction, arena_size);

        if action.pen == PenState::Down {
            grid.mark(bot.pos, bot.id);
        }
        trace!(
            "[TurnEngine] Bot {} {:?} -> ({}, {})",
            bot.id, action, bot.pos.x, bot.pos.y
        );
    }
}
