use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::config::Format;
use crate::data::{MapCell, Pos};
use crate::level::Level;
use crate::map::GoalMap;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    /// Row, column (in characters).
    Pos(usize, usize),
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl ::std::error::Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

struct Parsed {
    grid: Vec<Vec<MapCell>>,
    goals: Vec<Pos>,
    boxes: Vec<Pos>,
    player_pos: Option<Pos>,
}

impl Parsed {
    fn new() -> Self {
        Parsed {
            grid: Vec::new(),
            goals: Vec::new(),
            boxes: Vec::new(),
            player_pos: None,
        }
    }

    fn set_player(&mut self, pos: Pos) -> Result<(), ParserErr> {
        if self.player_pos.is_some() {
            return Err(ParserErr::MultiplePlayers);
        }
        self.player_pos = Some(pos);
        Ok(())
    }
}

/// Detects the format - custom levels always contain walls (`<>`).
pub fn parse(level: &str) -> Result<Level, ParserErr> {
    if level.trim_start().contains('<') {
        parse_format(level, Format::Custom)
    } else {
        parse_format(level, Format::Xsb)
    }
}

pub fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let parsed = match format {
        Format::Custom => parse_custom(level)?,
        Format::Xsb => parse_xsb(level)?,
    };
    let player_pos = parsed.player_pos.ok_or(ParserErr::NoPlayer)?;
    let grid = Vec2d::new(&parsed.grid);
    debug!(
        "Parsed {}x{} level with {} boxes and {} goals",
        grid.width(),
        grid.height(),
        parsed.boxes.len(),
        parsed.goals.len()
    );

    Ok(Level::new(
        GoalMap::new(grid, parsed.goals),
        player_pos,
        parsed.boxes,
    ))
}

/// Parses my custom format - two chars per cell, `<>` is wall,
/// otherwise first is contents (` `, `B`, `P`), second is goal (`_`) or empty.
fn parse_custom(level: &str) -> Result<Parsed, ParserErr> {
    let mut parsed = Parsed::new();

    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        let mut chars = line.chars();
        loop {
            let (c1, c2) = match (chars.next(), chars.next()) {
                (Some(c1), Some(c2)) => (c1, c2),
                // trailing half cell
                (Some(' '), None) | (None, _) => break,
                (Some(_), None) => return Err(ParserErr::Pos(r, row.len() * 2)),
            };
            let c = row.len();
            let pos = Pos::new(c as i32, r as i32);

            match c1 {
                '<' => {
                    if c2 != '>' {
                        return Err(ParserErr::Pos(r, c * 2 + 1));
                    }
                    row.push(MapCell::Wall);
                    continue; // c2 is part of the wall
                }
                ' ' => {}
                'B' => parsed.boxes.push(pos),
                'P' => parsed.set_player(pos)?,
                _ => return Err(ParserErr::Pos(r, c * 2)),
            }
            match c2 {
                ' ' => row.push(MapCell::Empty),
                '_' => {
                    parsed.goals.push(pos);
                    row.push(MapCell::Goal);
                }
                _ => return Err(ParserErr::Pos(r, c * 2 + 1)),
            }
        }
        parsed.grid.push(row);
    }

    Ok(parsed)
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
fn parse_xsb(level: &str) -> Result<Parsed, ParserErr> {
    let mut parsed = Parsed::new();

    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(c as i32, r as i32);

            let cell = match cur_char {
                '#' => MapCell::Wall,
                'p' | '@' => {
                    parsed.set_player(pos)?;
                    MapCell::Empty
                }
                'P' | '+' => {
                    parsed.set_player(pos)?;
                    parsed.goals.push(pos);
                    MapCell::Goal
                }
                'b' | '$' => {
                    parsed.boxes.push(pos);
                    MapCell::Empty
                }
                'B' | '*' => {
                    parsed.boxes.push(pos);
                    parsed.goals.push(pos);
                    MapCell::Goal
                }
                '.' => {
                    parsed.goals.push(pos);
                    MapCell::Goal
                }
                ' ' | '-' | '_' => MapCell::Empty,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            row.push(cell);
        }
        parsed.grid.push(row);
    }

    Ok(parsed)
}
