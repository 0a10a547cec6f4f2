//! Bot movement system.
//!
//! This module handles moving bots on the grid.

use crate::game::types::{Direction, Position};

/// Move one cell in `direction`, saturating at the arena edges.
///
/// `Left` increases x and `Right` decreases it.
pub fn move_bot(pos: Position, direction: Direction, arena_size: usize) -> Position {
    if arena_size == 0 {
        return pos;
    }
    let last = arena_size - 1;
    let mut new_pos = pos;

    match direction {
        Direction::Up => {
            new_pos.y = new_pos.y.saturating_sub(1);
        }
        Direction::Down => {
            new_pos.y = (new_pos.y + 1).min(last);
        }
        Direction::Left => {
            new_pos.x = (new_pos.x + 1).min(last);
        }
        Direction::Right => {
            new_pos.x = new_pos.x.saturating_sub(1);
        }
        Direction::Stay => {
            // No movement.
        }
    }

    new_pos
}
