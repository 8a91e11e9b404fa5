use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::map::GoalMap;
use crate::map_formatter::MapFormatter;
use crate::state::State;

/// Debugging view of a state - the map with player and boxes followed by the search data.
pub struct StateFormatter<'a> {
    map: &'a GoalMap,
    state: &'a State,
    format: Format,
}

impl<'a> StateFormatter<'a> {
    pub(crate) fn new(map: &'a GoalMap, state: &'a State, format: Format) -> Self {
        Self { map, state, format }
    }
}

impl Display for StateFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents = Some((self.state.player_pos(), self.state.boxes()));
        write!(f, "{}", MapFormatter::new(&self.map.grid, contents, self.format))?;
        writeln!(f, "Path: {}", self.state.path())?;
        writeln!(
            f,
            "Goals: {}/{}",
            self.state.goals_satisfied(),
            self.map.goals.len()
        )?;
        writeln!(f, "Heuristic: {}", self.state.heuristic())
    }
}

impl Debug for StateFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadlock::CornerDeadlock;
    use crate::expand::expand;
    use crate::heuristic::PushDistance;
    use crate::level::Level;

    #[test]
    fn formatting_state() {
        let level: Level = r"
#####
# @ #
# $ #
#  .#
#####
"
        .parse()
        .unwrap();
        let root = level.initial_state(&PushDistance).unwrap();
        let children = expand(&level.map, &root, &PushDistance, &CornerDeadlock);

        let expected = r"
#####
#   #
# @ #
# $.#
#####
Path: d
Goals: 0/1
Heuristic: 1
"
        .trim_start_matches('\n');
        assert_eq!(children[0].format(&level.map, Format::Xsb).to_string(), expected);

        let expected = r"
<><><><><>
<>    P <>
<>  B   <>
<>     _<>
<><><><><>
Path: r
Goals: 0/1
Heuristic: 2
"
        .trim_start_matches('\n');
        assert_eq!(children[2].format(&level.map, Format::Custom).to_string(), expected);
    }
}
