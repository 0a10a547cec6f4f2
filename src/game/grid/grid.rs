//! Square ownership grid.
//!
//! Cells are indexed `[x][y]` and hold the id of the last bot that marked them,
//! or [`UNOWNED`].

use serde::{Deserialize, Serialize};

use crate::config::game::ARENA_SCALE;
use crate::game::types::{BotId, Position, UNOWNED};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<BotId>>,
}

impl Grid {
    /// Zero-filled grid of `size × size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![UNOWNED; size]; size],
        }
    }

    /// Grid sized for `bot_count` bots.
    pub fn for_bots(bot_count: usize) -> Self {
        Self::new(arena_size(bot_count))
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size() && pos.y < self.size()
    }

    /// Raw cell value, `UNOWNED` outside the grid.
    pub fn get(&self, pos: Position) -> BotId {
        self.cells
            .get(pos.x)
            .and_then(|column| column.get(pos.y))
            .copied()
            .unwrap_or(UNOWNED)
    }

    pub fn owner(&self, pos: Position) -> Option<BotId> {
        match self.get(pos) {
            UNOWNED => None,
            id => Some(id),
        }
    }

    /// Overwrite the cell with `id`. Positions outside the grid are ignored.
    pub fn mark(&mut self, pos: Position, id: BotId) {
        if let Some(cell) = self.cells.get_mut(pos.x).and_then(|column| column.get_mut(pos.y)) {
            *cell = id;
        }
    }

    /// Columns of the grid, `columns()[x][y]`.
    pub fn columns(&self) -> &[Vec<BotId>] {
        &self.cells
    }

    /// Every owned cell with its owner.
    pub fn owned_cells(&self) -> impl Iterator<Item = (Position, BotId)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .filter(|&(_, &id)| id != UNOWNED)
                .map(move |(y, &id)| (Position { x, y }, id))
        })
    }
}

/// Side length of the arena for `bot_count` bots.
pub fn arena_size(bot_count: usize) -> usize {
    bot_count * ARENA_SCALE
}
