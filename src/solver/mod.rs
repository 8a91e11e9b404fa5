pub mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};

use crate::config::{Config, HeuristicKind, Method};
use crate::data::Pos;
use crate::deadlock::{CornerDeadlock, DeadlockCheck};
use crate::expand::expand;
use crate::heuristic::{Heuristic, MoveDistance, PushDistance};
use crate::level::Level;
use crate::map::GoalMap;
use crate::moves::Moves;
use crate::Solve;

use self::a_star::{SearchNode, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    InvalidPlayer(Pos),
    InvalidBox(Pos),
    DuplicateBoxes(Pos),
    BoxesGoals,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::InvalidPlayer(pos) => {
                write!(f, "Player at {} is on a wall, a box or outside the map", pos)
            }
            SolverErr::InvalidBox(pos) => write!(f, "Box at {} is on a wall or outside the map", pos),
            SolverErr::DuplicateBoxes(pos) => write!(f, "Multiple boxes at {}", pos),
            SolverErr::BoxesGoals => write!(f, "Different number of boxes and goals"),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, method: Method) -> Self {
        Self {
            moves,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", self.method, moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        solve(self, config)
    }
}

pub fn solve(level: &Level, config: &Config) -> Result<SolverOk, SolverErr> {
    debug!("Solving using {} with {} heuristic", config.method, config.heuristic);
    match config.heuristic {
        HeuristicKind::Pushes => search(level, config, &PushDistance, &CornerDeadlock),
        HeuristicKind::Moves => search(level, config, &MoveDistance, &CornerDeadlock),
    }
}

/// Best first search over whole states.
///
/// Duplicates are detected when a state is taken from the frontier, not when it's created,
/// so the first (cheapest) way to reach it wins.
pub fn search<H, D>(
    level: &Level,
    config: &Config,
    heuristic: &H,
    deadlock: &D,
) -> Result<SolverOk, SolverErr>
where
    H: Heuristic + ?Sized,
    D: DeadlockCheck + ?Sized,
{
    let map: &GoalMap = &level.map;
    let mut stats = Stats::new();
    let mut seq = 0;

    let mut to_visit = BinaryHeap::new();
    let mut closed = FnvHashSet::default();

    let start = SearchNode::new(level.initial_state(heuristic)?, config.method, seq);
    stats.add_created(&start);
    to_visit.push(Reverse(start));

    while let Some(Reverse(mut cur_node)) = to_visit.pop() {
        if !closed.insert(cur_node.state.fingerprint()) {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        cur_node.state.mark_visited();
        if stats.add_unique_visited(&cur_node) && config.print_status {
            println!("Visited new depth: {}", cur_node.dist());
            println!("{}", stats.status_line());
        }

        if cur_node.state.is_solved() {
            info!("Solved at depth {}", cur_node.dist());
            let moves = cur_node.state.path().clone();
            return Ok(SolverOk::new(Some(moves), stats, config.method));
        }

        for new_state in expand(map, &cur_node.state, heuristic, deadlock) {
            seq += 1;
            let next_node = SearchNode::new(new_state, config.method, seq);
            stats.add_created(&next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    info!("No solution, {} unique states visited", stats.total_unique_visited());
    Ok(SolverOk::new(None, stats, config.method))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadlock::NoDeadlocks;

    fn solve_str(level: &str, config: &Config) -> (Level, SolverOk) {
        let level: Level = level.parse().unwrap();
        let solution = level.solve(config).unwrap();
        (level, solution)
    }

    fn assert_solves(level: &Level, moves: &Moves) {
        let states = level.replay(moves).unwrap();
        assert!(states.last().unwrap().is_solved());
    }

    #[test]
    fn already_solved() {
        let (_, solution) = solve_str(
            r"
#####
#@ *#
#####
",
            &Config::default(),
        );
        assert_eq!(solution.moves.unwrap().move_cnt(), 0);
        assert_eq!(solution.stats.total_created(), 1);
        assert_eq!(solution.stats.total_unique_visited(), 1);
    }

    #[test]
    fn one_way() {
        let (level, solution) = solve_str(
            r"
###
#.#
# #
# #
#$#
#@#
###
",
            &Config::default(),
        );
        let moves = solution.moves.unwrap();
        assert_eq!(moves.to_string(), "uuu");
        assert_eq!(moves.push_cnt(), 3);
        assert_solves(&level, &moves);
        assert_eq!(solution.stats.total_created(), 6);
        assert_eq!(solution.stats.total_unique_visited(), 4);
        assert_eq!(solution.stats.total_reached_duplicates(), 0);
    }

    #[test]
    fn two_boxes() {
        let level = r"
#######
#     #
# $$  #
#@  ..#
#######
";
        for &method in &[Method::AStar, Method::Greedy] {
            for &heuristic in &[HeuristicKind::Pushes, HeuristicKind::Moves] {
                let config = Config {
                    method,
                    heuristic,
                    ..Config::default()
                };
                let (level, solution) = solve_str(level, &config);
                let moves = solution.moves.unwrap();
                assert_solves(&level, &moves);
            }
        }
    }

    #[test]
    fn no_solution() {
        // the box can only move along the top wall
        let (_, solution) = solve_str(
            r"
######
#@$  #
#    #
#   .#
######
",
            &Config::default(),
        );
        assert!(solution.moves.is_none());
        assert!(solution.stats.total_unique_visited() > 1);
    }

    #[test]
    fn pruning_reduces_search() {
        let level: Level = r"
######
#@$  #
#    #
#   .#
######
"
        .parse()
        .unwrap();
        let config = Config::default();
        let pruned = search(&level, &config, &PushDistance, &CornerDeadlock).unwrap();
        let full = search(&level, &config, &PushDistance, &NoDeadlocks).unwrap();
        assert!(pruned.moves.is_none());
        assert!(full.moves.is_none());
        assert!(pruned.stats.total_unique_visited() < full.stats.total_unique_visited());
    }

    #[test]
    fn invalid_level() {
        let level: Level = r"
######
#@$$.#
######
"
        .parse()
        .unwrap();
        assert_eq!(
            level.solve(&Config::default()).unwrap_err(),
            SolverErr::BoxesGoals
        );
    }
}
