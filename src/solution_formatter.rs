use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::level::Level;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;

/// Renders the initial position and then the position after each push
/// (or after every move with `include_steps`).
pub struct SolutionFormatter<'a> {
    level: &'a Level,
    moves: &'a Moves,
    include_steps: bool,
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        level: &'a Level,
        moves: &'a Moves,
        include_steps: bool,
        format: Format,
    ) -> Self {
        Self {
            level,
            moves,
            include_steps,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // somebody could pass moves from a different level
        let states = match self.level.replay(self.moves) {
            Some(states) => states,
            None => return writeln!(f, "Invalid solution: {}", self.moves),
        };

        for (i, state) in states.iter().enumerate() {
            let is_push = state.path().iter().last().map_or(false, |m| m.is_push);
            if i == 0 || is_push || self.include_steps {
                let contents = Some((state.player_pos(), state.boxes()));
                writeln!(
                    f,
                    "{}",
                    MapFormatter::new(&self.level.map.grid, contents, self.format)
                )?;
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
