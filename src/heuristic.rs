use crate::data::Pos;
use crate::map::GoalMap;
use crate::moves::Moves;

/// Cost estimate of a state, less is better.
///
/// Only used to order the frontier so it doesn't need to be admissible,
/// but it must be deterministic.
pub trait Heuristic {
    fn estimate(
        &self,
        map: &GoalMap,
        boxes: &[Pos],
        goals_satisfied: usize,
        path: &Moves,
        player_pos: Pos,
    ) -> i32;
}

impl<F> Heuristic for F
where
    F: Fn(&GoalMap, &[Pos], usize, &Moves, Pos) -> i32,
{
    fn estimate(
        &self,
        map: &GoalMap,
        boxes: &[Pos],
        goals_satisfied: usize,
        path: &Moves,
        player_pos: Pos,
    ) -> i32 {
        self(map, boxes, goals_satisfied, path, player_pos)
    }
}

/// Sum of distances from each box to its nearest goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushDistance;

impl Heuristic for PushDistance {
    fn estimate(&self, map: &GoalMap, boxes: &[Pos], _: usize, _: &Moves, _: Pos) -> i32 {
        goal_dist_sum(map, boxes)
    }
}

/// `PushDistance` plus the distance from the player to the nearest box that still needs pushing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveDistance;

impl Heuristic for MoveDistance {
    fn estimate(
        &self,
        map: &GoalMap,
        boxes: &[Pos],
        _: usize,
        _: &Moves,
        player_pos: Pos,
    ) -> i32 {
        let closest_box = boxes
            .iter()
            .filter(|&&b| !map.is_goal(b))
            .map(|&b| player_pos.dist(b))
            .min()
            .unwrap_or(0);

        closest_box + goal_dist_sum(map, boxes)
    }
}

fn goal_dist_sum(map: &GoalMap, boxes: &[Pos]) -> i32 {
    boxes
        .iter()
        .map(|&b| map.goals.iter().map(|&g| b.dist(g)).min().unwrap_or(0))
        .sum()
}
