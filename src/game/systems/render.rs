use crate::game::entities::Bot;
use crate::game::grid::Grid;
use crate::game::types::{BotId, Position, UNOWNED};

fn owner_char(id: BotId, at_bot: bool) -> char {
    if id == UNOWNED {
        return '.';
    }
    match char::from_u32('a' as u32 + id - 1) {
        Some(c) if id <= 26 => {
            if at_bot { c.to_ascii_uppercase() } else { c }
        }
        _ => '#',
    }
}

/// Text picture of the arena, one line per row (`y`), columns by `x`.
/// Painted cells are lowercase letters (`a` for bot 1), bots are uppercase.
pub fn render_arena(grid: &Grid, bots: &[Bot]) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));

    for y in 0..size {
        for x in 0..size {
            let pos = Position { x, y };
            // Later bots are drawn on top.
            let symbol = match bots.iter().rev().find(|b| b.pos == pos) {
                Some(bot) => owner_char(bot.id, true),
                None => owner_char(grid.get(pos), false),
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_and_bots() {
        let mut grid = Grid::new(3);
        grid.mark(Position { x: 0, y: 0 }, 1);
        grid.mark(Position { x: 2, y: 1 }, 2);
        let bots = vec![Bot {
            id: 2,
            name: "b".into(),
            color: "Bisque".into(),
            pos: Position { x: 1, y: 2 },
        }];

        assert_eq!(render_arena(&grid, &bots), "a..\n..b\n.B.\n");
    }
}
