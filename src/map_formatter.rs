use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{Contents, MapCell, Pos};
use crate::vec2d::Vec2d;

/// Renders the grid, optionally with the player and boxes.
pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    contents: Option<(Pos, &'a [Pos])>,
    format: Format,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(
        grid: &'a Vec2d<MapCell>,
        contents: Option<(Pos, &'a [Pos])>,
        format: Format,
    ) -> Self {
        Self {
            grid,
            contents,
            format,
        }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid: Vec2d<Contents> = self.grid.scratchpad();
        if let Some((player_pos, boxes)) = self.contents {
            // levels can be formatted before validation so skip what can't be drawn
            for &b in boxes {
                if self.can_hold_contents(b) {
                    state_grid[b] = Contents::Box;
                }
            }
            if self.can_hold_contents(player_pos) {
                state_grid[player_pos] = Contents::Player;
            }
        }

        for y in 0..self.grid.height() as i32 {
            // don't print trailing empty cells to match the input level strings
            let mut last_non_empty = 0;
            for x in 0..self.grid.width() as i32 {
                let pos = Pos::new(x, y);
                if self.grid[pos] != MapCell::Empty || state_grid[pos] != Contents::Empty {
                    last_non_empty = x;
                }
            }

            for x in 0..=last_non_empty {
                let pos = Pos::new(x, y);
                let cell = self.grid[pos];

                match self.format {
                    Format::Custom => Self::write_cell_custom(cell, state_grid[pos], f)?,
                    Format::Xsb => Self::write_cell_xsb(cell, state_grid[pos], f)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn can_hold_contents(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(false, |&cell| cell != MapCell::Wall)
    }

    fn write_cell_custom(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        if cell == MapCell::Wall {
            write!(f, "<>")?;
        } else {
            match contents {
                Contents::Empty => write!(f, " ")?,
                Contents::Box => write!(f, "B")?,
                Contents::Player => write!(f, "P")?,
            };
            match cell {
                MapCell::Empty => write!(f, " ")?,
                MapCell::Goal => write!(f, "_")?,
                MapCell::Wall => unreachable!("Wall again"),
            };
        }
        Ok(())
    }

    fn write_cell_xsb(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Empty, Contents::Empty) => write!(f, " "),
            (MapCell::Empty, Contents::Box) => write!(f, "$"),
            (MapCell::Empty, Contents::Player) => write!(f, "@"),
            (MapCell::Wall, Contents::Empty) => write!(f, "#"),
            (MapCell::Wall, _) => unreachable!("Wall with non-empty contents"),
            (MapCell::Goal, Contents::Empty) => write!(f, "."),
            (MapCell::Goal, Contents::Box) => write!(f, "*"),
            (MapCell::Goal, Contents::Player) => write!(f, "+"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
