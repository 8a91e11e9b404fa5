use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Custom,
    Xsb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Ordered by depth + heuristic.
    AStar,
    /// Ordered by heuristic only - usually much faster, solutions can be long.
    Greedy,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::AStar => write!(f, "a-star"),
            Method::Greedy => write!(f, "greedy"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicKind {
    Pushes,
    Moves,
}

impl Display for HeuristicKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            HeuristicKind::Pushes => write!(f, "pushes"),
            HeuristicKind::Moves => write!(f, "moves"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pushes" => Ok(HeuristicKind::Pushes),
            "moves" => Ok(HeuristicKind::Moves),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub method: Method,
    pub heuristic: HeuristicKind,
    pub format: Format,
    pub print_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            method: Method::AStar,
            heuristic: HeuristicKind::Pushes,
            format: Format::Xsb,
            print_status: false,
        }
    }
}
