//! Bot decision functions.
//!
//! A [`Strategy`] is called once per turn with the bot's id and a read-only view
//! of the grid. Calls are synchronous and made on the driver's thread, so a
//! strategy that blocks or never returns stalls the whole simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::grid::Grid;
use crate::game::types::{BotAction, BotId, Direction, PenState};

pub trait Strategy {
    fn decide(&mut self, id: BotId, grid: &Grid) -> BotAction;
}

impl<F> Strategy for F
where
    F: FnMut(BotId, &Grid) -> BotAction,
{
    fn decide(&mut self, id: BotId, grid: &Grid) -> BotAction {
        self(id, grid)
    }
}

/// Adapter for decision functions speaking the `"<pen>:<direction>"` protocol.
///
/// The response is parsed here, once; malformed responses become an idle move.
pub struct TextStrategy<F>(pub F);

impl<F> Strategy for TextStrategy<F>
where
    F: FnMut(BotId, &Grid) -> String,
{
    fn decide(&mut self, id: BotId, grid: &Grid) -> BotAction {
        BotAction::parse(&(self.0)(id, grid))
    }
}

const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

/// Random walk with the pen down most of the time.
pub struct Wanderer {
    rng: StdRng,
    pen_down_chance: f64,
}

impl Wanderer {
    pub fn new(pen_down_chance: f64) -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()), pen_down_chance)
    }

    pub fn seeded(seed: u64, pen_down_chance: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), pen_down_chance)
    }

    fn with_rng(rng: StdRng, pen_down_chance: f64) -> Self {
        Self {
            rng,
            pen_down_chance: pen_down_chance.clamp(0.0, 1.0),
        }
    }
}

impl Strategy for Wanderer {
    fn decide(&mut self, _id: BotId, _grid: &Grid) -> BotAction {
        let direction = DIRECTIONS[self.rng.random_range(0..DIRECTIONS.len())];
        let pen = if self.rng.random_bool(self.pen_down_chance) {
            PenState::Down
        } else {
            PenState::Up
        };
        BotAction::new(pen, direction)
    }
}

/// Paints an outward square spiral, starting over once a leg is longer than
/// the arena.
#[derive(Debug, Default)]
pub struct Spiral {
    leg: usize,
    steps: usize,
    turns: usize,
}

impl Spiral {
    pub fn new() -> Self {
        Self { leg: 1, steps: 0, turns: 0 }
    }
}

impl Strategy for Spiral {
    fn decide(&mut self, _id: BotId, grid: &Grid) -> BotAction {
        if self.leg == 0 || self.leg > grid.size() {
            *self = Self::new();
        }

        let direction = DIRECTIONS[[0, 2, 1, 3][self.turns % 4]];
        self.steps += 1;
        if self.steps == self.leg {
            self.steps = 0;
            self.turns += 1;
            // Two legs per length: 1, 1, 2, 2, 3, 3, ...
            if self.turns % 2 == 0 {
                self.leg += 1;
            }
        }
        BotAction::new(PenState::Down, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_strategy() {
        let mut strategy = |_: BotId, _: &Grid| BotAction::new(PenState::Down, Direction::Up);
        let grid = Grid::new(3);
        assert_eq!(strategy.decide(1, &grid), BotAction::new(PenState::Down, Direction::Up));
    }

    #[test]
    fn test_text_strategy_parses_once() {
        let mut strategy = TextStrategy(|id: BotId, _: &Grid| {
            if id == 1 { "pd:right".to_string() } else { "garbage".to_string() }
        });
        let grid = Grid::new(3);
        assert_eq!(strategy.decide(1, &grid), BotAction::new(PenState::Down, Direction::Right));
        assert_eq!(strategy.decide(2, &grid), BotAction::idle());
    }

    #[test]
    fn test_wanderer_always_down_when_certain() {
        let mut wanderer = Wanderer::seeded(7, 1.0);
        let grid = Grid::new(6);
        for _ in 0..20 {
            assert_eq!(wanderer.decide(1, &grid).pen, PenState::Down);
        }
    }

    #[test]
    fn test_spiral_leg_lengths() {
        let mut spiral = Spiral::new();
        let grid = Grid::new(30);
        let moves: Vec<Direction> = (0..6).map(|_| spiral.decide(1, &grid).direction).collect();
        assert_eq!(
            moves,
            vec![
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Down,
                Direction::Right,
                Direction::Right,
            ]
        );
    }
}
