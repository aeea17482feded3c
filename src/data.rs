use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub(crate) const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    South,
    West,
    East,
}

/// The order in which every puzzle expands directions.
pub const DIRECTIONS: [Dir; 4] = [Dir::North, Dir::South, Dir::West, Dir::East];

impl Dir {
    /// (row delta, column delta)
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Dir::North => (-1, 0),
            Dir::South => (1, 0),
            Dir::West => (0, -1),
            Dir::East => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::North => write!(f, "N"),
            Dir::South => write!(f, "S"),
            Dir::West => write!(f, "W"),
            Dir::East => write!(f, "E"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirParseErr(String);

impl Display for DirParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Not a direction: '{}' (expected N, S, E or W)", self.0)
    }
}

impl Error for DirParseErr {}

impl FromStr for Dir {
    type Err = DirParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Dir::North),
            "s" | "south" => Ok(Dir::South),
            "w" | "west" => Ok(Dir::West),
            "e" | "east" => Ok(Dir::East),
            _ => Err(DirParseErr(s.to_string())),
        }
    }
}
