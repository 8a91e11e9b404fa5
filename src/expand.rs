use log::trace;

use crate::data::DIRECTIONS;
use crate::deadlock::DeadlockCheck;
use crate::heuristic::Heuristic;
use crate::map::GoalMap;
use crate::moves::Move;
use crate::state::State;

/// All states reachable from `state` by a single step or push.
///
/// Directions are tried in the order of `DIRECTIONS` and the result keeps that order.
/// A direction that is blocked (wall, edge of the map, box behind box)
/// or that would push a box into a deadlock produces no state.
///
/// The heuristic is always evaluated on the new state - its boxes, goal count,
/// path including the new move and player position.
pub fn expand<H, D>(map: &GoalMap, state: &State, heuristic: &H, deadlock: &D) -> Vec<State>
where
    H: Heuristic + ?Sized,
    D: DeadlockCheck + ?Sized,
{
    let mut new_states = Vec::with_capacity(DIRECTIONS.len());

    let mut box_grid = map.grid.scratchpad_with_default(None);
    for (i, &b) in state.boxes().iter().enumerate() {
        box_grid[b] = Some(i);
    }

    for &dir in &DIRECTIONS {
        let new_player_pos = state.player_pos() + dir;
        // also true outside the map
        if map.is_wall(new_player_pos) {
            continue;
        }

        match box_grid[new_player_pos] {
            None => {
                // step
                let path = state.path().with(Move::new(dir, false));
                new_states.push(State::with_path(
                    map,
                    new_player_pos,
                    state.boxes().to_vec(),
                    path,
                    heuristic,
                ));
            }
            Some(box_index) => {
                // push
                let push_dest = new_player_pos + dir;
                if map.is_wall(push_dest) || box_grid[push_dest].is_some() {
                    continue;
                }
                if !map.is_goal(push_dest) && deadlock.is_deadlocked(map, push_dest) {
                    trace!("Pruned push {} to {}", dir, push_dest);
                    continue;
                }

                let mut new_boxes = state.boxes().to_vec();
                new_boxes[box_index] = push_dest;
                let path = state.path().with(Move::new(dir, true));
                new_states.push(State::with_path(
                    map,
                    new_player_pos,
                    new_boxes,
                    path,
                    heuristic,
                ));
            }
        }
    }

    new_states
}
