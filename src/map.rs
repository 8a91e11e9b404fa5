use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::vec2d::Vec2d;

/// Static part of a level - terrain and goals. Never changes after loading,
/// all states of a level borrow the same one.
#[derive(Clone, PartialEq, Eq)]
pub struct GoalMap {
    pub grid: Vec2d<MapCell>,
    pub goals: Vec<Pos>,
}

impl GoalMap {
    pub fn new(grid: Vec2d<MapCell>, goals: Vec<Pos>) -> Self {
        GoalMap { grid, goals }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Out of bounds counts as wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(true, |&cell| cell == MapCell::Wall)
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    pub fn count_goals(&self, boxes: &[Pos]) -> usize {
        boxes.iter().filter(|&&b| self.is_goal(b)).count()
    }

    pub fn format(&self, format: Format) -> MapFormatter<'_> {
        MapFormatter::new(&self.grid, None, format)
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Xsb))
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn walls_and_goals() {
        let level: Level = r"
#####
#@$.#
#####
"
        .parse()
        .unwrap();
        let map = &level.map;

        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 3);
        assert!(map.is_wall(Pos::new(0, 0)));
        assert!(!map.is_wall(Pos::new(1, 1)));
        assert!(map.is_wall(Pos::new(-1, 1)));
        assert!(map.is_wall(Pos::new(5, 1)));
        assert!(map.is_goal(Pos::new(3, 1)));
        assert!(!map.is_goal(Pos::new(2, 1)));
        assert!(!map.is_goal(Pos::new(3, 7)));

        assert_eq!(map.count_goals(&[Pos::new(2, 1)]), 0);
        assert_eq!(map.count_goals(&[Pos::new(3, 1)]), 1);
    }

    #[test]
    fn formatting_map() {
        let level: Level = r"
*###*
#@$.#
*###*#
"
        .parse()
        .unwrap();
        let expected = "
.###.
#  .#
.###.#
"
        .trim_start_matches('\n');
        assert_eq!(level.map.to_string(), expected);
        assert_eq!(format!("{:?}", level.map), expected);
    }
}
