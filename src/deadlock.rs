use crate::data::{Pos, DOWN, LEFT, RIGHT, UP};
use crate::map::GoalMap;

/// Decides whether a box pushed to `dest` can never reach a goal.
///
/// Must never flag a goal cell. Checked before a push state is created so
/// a `true` here removes the whole subtree.
pub trait DeadlockCheck {
    fn is_deadlocked(&self, map: &GoalMap, dest: Pos) -> bool;
}

impl<F> DeadlockCheck for F
where
    F: Fn(&GoalMap, Pos) -> bool,
{
    fn is_deadlocked(&self, map: &GoalMap, dest: Pos) -> bool {
        self(map, dest)
    }
}

/// A box in a corner that is not a goal can't be moved ever again.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerDeadlock;

impl DeadlockCheck for CornerDeadlock {
    fn is_deadlocked(&self, map: &GoalMap, dest: Pos) -> bool {
        is_corner_deadlock(map, dest)
    }
}

/// Never prunes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeadlocks;

impl DeadlockCheck for NoDeadlocks {
    fn is_deadlocked(&self, _: &GoalMap, _: Pos) -> bool {
        false
    }
}

pub fn is_corner_deadlock(map: &GoalMap, dest: Pos) -> bool {
    if map.is_goal(dest) {
        return false;
    }

    // walls on opposite sides (corridor) are fine, it takes two adjacent ones
    let up = map.is_wall(dest + UP);
    let down = map.is_wall(dest + DOWN);
    let left = map.is_wall(dest + LEFT);
    let right = map.is_wall(dest + RIGHT);
    (up || down) && (left || right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn corners() -> Level {
        r"
######
#  . #
#    #
#@ #.#
######
"
        .parse()
        .unwrap()
    }

    #[test]
    fn all_four_corners() {
        let level = corners();
        assert!(is_corner_deadlock(&level.map, Pos::new(1, 1))); // up left
        assert!(is_corner_deadlock(&level.map, Pos::new(4, 1))); // up right
        assert!(is_corner_deadlock(&level.map, Pos::new(1, 3))); // down left
        assert!(is_corner_deadlock(&level.map, Pos::new(2, 3))); // down right (inner wall)
    }

    #[test]
    fn goals_are_never_deadlocks() {
        let level = corners();
        // walls below, left and right
        assert!(!is_corner_deadlock(&level.map, Pos::new(4, 3)));
        // wall above only
        assert!(!is_corner_deadlock(&level.map, Pos::new(3, 1)));
    }

    #[test]
    fn single_and_opposite_walls() {
        let level = corners();
        // wall above only
        assert!(!is_corner_deadlock(&level.map, Pos::new(2, 1)));
        // wall to the left only
        assert!(!is_corner_deadlock(&level.map, Pos::new(1, 2)));
        // no walls
        assert!(!is_corner_deadlock(&level.map, Pos::new(2, 2)));
        // wall to the right only
        assert!(!is_corner_deadlock(&level.map, Pos::new(4, 2)));

        let corridor: Level = r"
#####
#@  .
#####
"
        .parse()
        .unwrap();
        // walls above and below
        assert!(!is_corner_deadlock(&corridor.map, Pos::new(2, 1)));
    }

    #[test]
    fn outside_of_grid_is_wall() {
        let level: Level = "@  .".parse().unwrap();
        assert!(is_corner_deadlock(&level.map, Pos::new(0, 0)));
        assert!(!is_corner_deadlock(&level.map, Pos::new(1, 0)));
        assert!(is_corner_deadlock(&level.map, Pos::new(0, 1)));
        assert!(!is_corner_deadlock(&level.map, Pos::new(3, 0)));
    }

    #[test]
    fn pluggable() {
        let level = corners();
        let only_first_column = |_: &GoalMap, dest: Pos| dest.x == 1;

        assert!(CornerDeadlock.is_deadlocked(&level.map, Pos::new(4, 1)));
        assert!(!NoDeadlocks.is_deadlocked(&level.map, Pos::new(4, 1)));
        assert!(only_first_column.is_deadlocked(&level.map, Pos::new(1, 2)));
        assert!(!only_first_column.is_deadlocked(&level.map, Pos::new(4, 1)));
    }
}
