//! Bot registry.
//!
//! Assigns ids, colours and random start positions to the registered bots.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::game::PALETTE;
use crate::error::SimulationError;
use crate::game::entities::strategy::Strategy;
use crate::game::types::{BotId, Position};

/// Runtime state of a registered bot, as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    pub id: BotId,
    pub name: String,
    pub color: String,
    pub pos: Position,
}

/// A bot as supplied by the host: display name plus decision function.
pub struct BotRegistration {
    pub name: String,
    pub strategy: Box<dyn Strategy>,
}

impl BotRegistration {
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            strategy: Box::new(strategy),
        }
    }
}

/// Build the bots for `names`: ids `1..=N` and palette colours in order,
/// start positions from [`random_start_positions`].
pub fn spawn_bots<R: Rng + ?Sized>(
    names: &[String],
    arena_size: usize,
    rng: &mut R,
) -> Result<Vec<Bot>, SimulationError> {
    if names.len() > PALETTE.len() {
        return Err(SimulationError::PaletteExhausted {
            count: names.len(),
            palette: PALETTE.len(),
        });
    }

    let positions = random_start_positions(names.len(), arena_size, rng);
    let bots = names
        .iter()
        .zip(positions)
        .enumerate()
        .map(|(index, (name, pos))| {
            let bot = Bot {
                id: (index + 1) as BotId,
                name: name.clone(),
                color: PALETTE[index].to_string(),
                pos,
            };
            debug!("[Registry] Bot {} '{}' ({}) starts at ({}, {})", bot.id, bot.name, bot.color, pos.x, pos.y);
            bot
        })
        .collect();

    Ok(bots)
}

/// Draw `count` positions uniformly in `[0, arena_size)²`.
///
/// A candidate is redrawn while its x matches any earlier x or its y matches any
/// earlier y. Axes are checked independently, not as pairs.
pub fn random_start_positions<R: Rng + ?Sized>(
    count: usize,
    arena_size: usize,
    rng: &mut R,
) -> Vec<Position> {
    debug_assert!(count <= arena_size, "not enough rows for {} bots", count);

    let mut placed: Vec<Position> = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = loop {
            let candidate = Position {
                x: rng.random_range(0..arena_size),
                y: rng.random_range(0..arena_size),
            };
            if !placed.iter().any(|p| p.x == candidate.x || p.y == candidate.y) {
                break candidate;
            }
        };
        placed.push(pos);
    }
    placed
}
