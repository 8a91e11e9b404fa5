use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Wall,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

impl Default for Contents {
    fn default() -> Self {
        Contents::Empty
    }
}

/// Grid coordinate - `x` is the column, `y` is the row (growing downwards).
///
/// Can point outside the grid after adding a `Dir`, use `Vec2d::contains` before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }

    pub fn dist(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn neighbors(self) -> [Pos; 4] {
        [
            self + DIRECTIONS[0],
            self + DIRECTIONS[1],
            self + DIRECTIONS[2],
            self + DIRECTIONS[3],
        ]
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One entry of the direction table - the vector and its label belong together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dir {
    pub dx: i32,
    pub dy: i32,
    pub label: char,
}

pub const UP: Dir = Dir {
    dx: 0,
    dy: -1,
    label: 'u',
};
pub const DOWN: Dir = Dir {
    dx: 0,
    dy: 1,
    label: 'd',
};
pub const LEFT: Dir = Dir {
    dx: -1,
    dy: 0,
    label: 'l',
};
pub const RIGHT: Dir = Dir {
    dx: 1,
    dy: 0,
    label: 'r',
};

/// Expansion order. Changing it changes the order of children and therefore which solution is found.
pub const DIRECTIONS: [Dir; 4] = [UP, DOWN, LEFT, RIGHT];

impl Dir {
    pub fn from_label(label: char) -> Option<Dir> {
        DIRECTIONS.iter().cloned().find(|dir| dir.label == label)
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos {
            x: self.x + dir.dx,
            y: self.y + dir.dy,
        }
    }
}
