//! End-of-game area tally.

use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::game::entities::Bot;
use crate::game::grid::Grid;
use crate::game::types::BotId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotScore {
    pub id: BotId,
    pub name: String,
    pub color: String,
    pub cells: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Every bot, in registration order.
    pub scores: Vec<BotScore>,
    /// Bots holding the largest area, in registration order.
    pub winners: Vec<BotScore>,
    pub tie: bool,
}

impl GameResult {
    /// Human-readable result line, e.g. `"Alice wins!"` or `"Alice and Bob win!"`.
    pub fn summary(&self) -> String {
        match self.winners.as_slice() {
            [] => "No bots took part.".to_string(),
            [winner] => format!("{} wins!", winner.name),
            winners => {
                let names: Vec<&str> = winners.iter().map(|w| w.name.as_str()).collect();
                format!("{} win!", names.join(" and "))
            }
        }
    }
}

/// Count owned cells per bot and collect every bot tied at the maximum.
/// Bots without cells score 0, so an empty grid makes every bot a winner.
pub fn compute_winners(grid: &Grid, bots: &[Bot]) -> GameResult {
    let mut counts: HashMap<BotId, usize> = HashMap::new();
    for (_, id) in grid.owned_cells() {
        *counts.entry(id).or_insert(0) += 1;
    }

    let scores: Vec<BotScore> = bots
        .iter()
        .map(|bot| BotScore {
            id: bot.id,
            name: bot.name.clone(),
            color: bot.color.clone(),
            cells: counts.get(&bot.id).copied().unwrap_or(0),
        })
        .collect();

    let winners: Vec<BotScore> = match scores.iter().map(|s| s.cells).max() {
        Some(max_area) => scores.iter().filter(|s| s.cells == max_area).cloned().collect(),
        None => Vec::new(),
    };
    let tie = winners.len() > 1;

    info!(
        "[Scoring] Winners: {:?} (tie={})",
        winners.iter().map(|w| (&w.name, w.cells)).collect::<Vec<_>>(),
        tie
    );

    GameResult { scores, winners, tie }
}
