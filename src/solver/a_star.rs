use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, row, Table};
use separator::Separatable;

use crate::config::Method;
use crate::state::State;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    /// Returns true if this is the first state at that depth.
    fn add(counts: &mut Vec<i32>, node: &SearchNode) -> bool {
        let depth = node.dist();
        let mut ret = false;

        // while because some depths might be skipped (e.g. no duplicates at depth 1)
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    pub(crate) fn status_line(&self) -> String {
        format!(
            "total created / unique visited / reached duplicates:\n{:<16}{:<17}{}\n",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(
            f,
            "Created but not reached total: {}",
            (created - visited - duplicates).separated_string()
        )?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(row!["Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"]);
        // created_states should be the longest vec
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            table.add_row(row![
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                (created - visited - duplicates).separated_string()
            ]);
        }
        write!(f, "{}", table)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        write!(f, "{}", self.status_line())
    }
}

/// Frontier entry - the state plus what's needed to order it.
#[derive(Debug)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    cost: i32,
    /// insertion order - makes ties deterministic (FIFO)
    seq: u64,
}

impl SearchNode {
    pub(crate) fn new(state: State, method: Method, seq: u64) -> Self {
        let cost = match method {
            Method::AStar => state.path().move_cnt() as i32 + state.heuristic(),
            Method::Greedy => state.heuristic(),
        };
        SearchNode { state, cost, seq }
    }

    pub(crate) fn dist(&self) -> usize {
        self.state.path().move_cnt()
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // use Reverse in BinaryHeap to get the lowest first
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use super::*;
    use crate::deadlock::CornerDeadlock;
    use crate::expand::expand;
    use crate::heuristic::PushDistance;
    use crate::level::Level;

    fn states() -> Vec<State> {
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
        // heuristics: d = 1, l = 2, r = 2
        expand(&level.map, &root, &PushDistance, &CornerDeadlock)
    }

    #[test]
    fn ordering() {
        let mut heap = BinaryHeap::new();
        for (seq, state) in states().into_iter().enumerate().rev() {
            heap.push(Reverse(SearchNode::new(state, Method::AStar, seq as u64)));
        }

        let order: Vec<_> = ::std::iter::from_fn(|| heap.pop())
            .map(|Reverse(node)| node.state.path().to_string())
            .collect();
        assert_eq!(order, vec!["d", "l", "r"]);
    }

    #[test]
    fn counting() {
        let mut stats = Stats::new();
        let nodes: Vec<_> = states()
            .into_iter()
            .map(|state| SearchNode::new(state, Method::Greedy, 0))
            .collect();

        assert!(stats.add_created(&nodes[0]));
        assert!(!stats.add_created(&nodes[1]));
        assert!(!stats.add_created(&nodes[2]));
        assert!(stats.add_unique_visited(&nodes[0]));
        assert!(stats.add_reached_duplicate(&nodes[1]));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.created_states, vec![0, 3]);
        assert_eq!(stats.visited_states, vec![0, 1]);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for node in states().into_iter().map(|s| SearchNode::new(s, Method::AStar, 0)) {
            stats.add_created(&node);
        }

        let text = stats.to_string();
        assert!(text.starts_with("States created total: 3\nUnique visited total: 0\n"));
        assert!(text.contains("Created but not reached total: 3\n"));
        assert!(text.contains("Depth"));
        assert!(text.contains("Unknown (not reached)"));

        // one table row per depth, the root's depth stays empty
        let rows: Vec<_> = text
            .lines()
            .skip_while(|line| !line.starts_with("Depth"))
            .skip(1)
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .collect();
        assert_eq!(rows, vec![vec!["0:", "0", "0", "0", "0"], vec!["1:", "3", "0", "0", "3"]]);
    }

    #[test]
    fn formatting_bigger_numbers() {
        let mut stats = Stats::new();
        let node = states()
            .into_iter()
            .map(|s| SearchNode::new(s, Method::AStar, 0))
            .next()
            .unwrap();
        for _ in 0..1234 {
            stats.add_created(&node);
        }
        stats.add_unique_visited(&node);

        let text = format!("{}", stats);
        assert!(text.starts_with("States created total: 1,234\n"));
        assert!(text.contains("Created but not reached total: 1,233\n"));
        assert!(text.lines().any(|line| line.split_whitespace().collect::<Vec<_>>()
            == vec!["1:", "1,234", "1", "0", "1,233"]));
    }
}
