use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;

use crate::config::Format;
use crate::data::Pos;
use crate::deadlock::NoDeadlocks;
use crate::expand::expand;
use crate::heuristic::{Heuristic, PushDistance};
use crate::map::GoalMap;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::solver::SolverErr;
use crate::state::State;

/// A level as loaded - not validated yet.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub map: GoalMap,
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
}

impl Level {
    pub fn new(map: GoalMap, player_pos: Pos, boxes: Vec<Pos>) -> Self {
        Level {
            map,
            player_pos,
            boxes,
        }
    }

    /// Checks everything the expansion relies on and creates the root of the search tree.
    pub fn initial_state<H: Heuristic + ?Sized>(&self, heuristic: &H) -> Result<State, SolverErr> {
        if self.map.is_wall(self.player_pos) || self.boxes.contains(&self.player_pos) {
            return Err(SolverErr::InvalidPlayer(self.player_pos));
        }

        let mut seen = FnvHashSet::default();
        for &b in &self.boxes {
            if self.map.is_wall(b) {
                return Err(SolverErr::InvalidBox(b));
            }
            if !seen.insert(b) {
                return Err(SolverErr::DuplicateBoxes(b));
            }
        }

        if self.boxes.len() != self.map.goals.len() {
            return Err(SolverErr::BoxesGoals);
        }

        Ok(State::root(
            &self.map,
            self.player_pos,
            self.boxes.clone(),
            heuristic,
        ))
    }

    /// Plays `moves` from the initial position, returns all states along the way including the first.
    ///
    /// `None` if the level is invalid or a move is impossible (e.g. walks into a wall).
    /// Moves into deadlocks are allowed here.
    pub fn replay(&self, moves: &Moves) -> Option<Vec<State>> {
        let mut states = vec![self.initial_state(&PushDistance).ok()?];
        for mov in moves {
            let cur = states.last()?;
            // some children may be missing so find the one by position
            let next = expand(&self.map, cur, &PushDistance, &NoDeadlocks)
                .into_iter()
                .find(|child| child.player_pos() == cur.player_pos() + mov.dir)?;
            states.push(next);
        }
        Some(states)
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(
            &self.map.grid,
            Some((self.player_pos, &self.boxes[..])),
            format,
        )
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        self.format(Format::Xsb)
    }

    pub fn custom(&self) -> MapFormatter<'_> {
        self.format(Format::Custom)
    }

    pub fn format_solution<'a>(
        &'a self,
        moves: &'a Moves,
        include_steps: bool,
        format: Format,
    ) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, moves, include_steps, format)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}
