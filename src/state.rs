use crate::config::Format;
use crate::data::Pos;
use crate::heuristic::Heuristic;
use crate::map::GoalMap;
use crate::moves::Moves;
use crate::state_formatter::StateFormatter;

/// One node of the search tree.
///
/// Owns everything that differs between branches - the map is borrowed from the level.
/// Apart from `visited`, a state never changes after it's created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    player_pos: Pos,
    boxes: Vec<Pos>,
    goals_satisfied: usize,
    path: Moves,
    heuristic: i32,
    visited: bool,
}

impl State {
    /// Initial state, the caller is responsible for the positions being valid (see `Level::initial_state`).
    pub fn root<H: Heuristic + ?Sized>(
        map: &GoalMap,
        player_pos: Pos,
        boxes: Vec<Pos>,
        heuristic: &H,
    ) -> State {
        State::with_path(map, player_pos, boxes, Moves::default(), heuristic)
    }

    pub(crate) fn with_path<H: Heuristic + ?Sized>(
        map: &GoalMap,
        player_pos: Pos,
        boxes: Vec<Pos>,
        path: Moves,
        heuristic: &H,
    ) -> State {
        let goals_satisfied = map.count_goals(&boxes);
        let heuristic = heuristic.estimate(map, &boxes, goals_satisfied, &path, player_pos);
        State {
            player_pos,
            boxes,
            goals_satisfied,
            path,
            heuristic,
            visited: false,
        }
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    /// Index of the box at `pos` in `boxes()`.
    pub fn box_at(&self, pos: Pos) -> Option<usize> {
        self.boxes.iter().position(|&b| b == pos)
    }

    pub fn goals_satisfied(&self) -> usize {
        self.goals_satisfied
    }

    pub fn is_solved(&self) -> bool {
        self.goals_satisfied == self.boxes.len()
    }

    pub fn path(&self) -> &Moves {
        &self.path
    }

    pub fn heuristic(&self) -> i32 {
        self.heuristic
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Only meaningful for this object - an equal state reached by another path
    /// is a different object with its own flag, use `fingerprint` to detect those.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(self.player_pos, self.boxes.clone())
    }

    pub fn format<'a>(&'a self, map: &'a GoalMap, format: Format) -> StateFormatter<'a> {
        StateFormatter::new(map, self, format)
    }
}

/// Player position and sorted boxes - equal for states that differ only in how they were reached.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Fingerprint {
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
}

impl Fingerprint {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> Fingerprint {
        boxes.sort(); // sort to detect equal states when we reorder boxes
        Fingerprint { player_pos, boxes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::PushDistance;
    use crate::level::Level;

    #[test]
    fn root_state() {
        let level: Level = r"
######
#@$*.#
######
"
        .parse()
        .unwrap();
        let state = State::root(&level.map, level.player_pos, level.boxes.clone(), &PushDistance);

        assert_eq!(state.player_pos(), Pos::new(1, 1));
        assert_eq!(state.boxes(), &[Pos::new(2, 1), Pos::new(3, 1)][..]);
        assert_eq!(state.goals_satisfied(), 1);
        assert!(!state.is_solved());
        assert!(state.path().is_empty());
        assert_eq!(state.heuristic(), 1);
        assert!(!state.visited());
    }

    #[test]
    fn box_lookup() {
        let level: Level = r"
######
#@$*.#
######
"
        .parse()
        .unwrap();
        let state = State::root(&level.map, level.player_pos, level.boxes.clone(), &PushDistance);

        assert_eq!(state.box_at(Pos::new(2, 1)), Some(0));
        assert_eq!(state.box_at(Pos::new(3, 1)), Some(1));
        assert_eq!(state.box_at(Pos::new(4, 1)), None);
        assert_eq!(state.box_at(Pos::new(1, 1)), None);
    }

    #[test]
    fn visited_is_per_object() {
        let level: Level = "@$.".parse().unwrap();
        let mut a = State::root(&level.map, level.player_pos, level.boxes.clone(), &PushDistance);
        let b = a.clone();

        a.mark_visited();
        assert!(a.visited());
        assert!(!b.visited());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_ignores_box_order() {
        let a = Fingerprint::new(Pos::new(1, 1), vec![Pos::new(3, 2), Pos::new(2, 2)]);
        let b = Fingerprint::new(Pos::new(1, 1), vec![Pos::new(2, 2), Pos::new(3, 2)]);
        let c = Fingerprint::new(Pos::new(1, 2), vec![Pos::new(2, 2), Pos::new(3, 2)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
