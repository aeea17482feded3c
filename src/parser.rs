use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{Pos, MAX_SIZE};
use crate::tilt::{TiltCell, TiltConfig};
use crate::tipover::TipOverConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    NoHeader,
    HeaderLength(usize),
    /// line number (1-based), offending token
    Number(usize, String),
    EmptyBoard,
    TooLarge,
    RowCount(usize, usize),
    RowLength(usize),
    /// invalid cell at row, column
    Pos(usize, usize),
    TipperOffBoard,
    GoalOffBoard,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::NoHeader => write!(f, "Missing header line"),
            ParserErr::HeaderLength(n) => write!(f, "Expected 6 numbers in the header, got {}", n),
            ParserErr::Number(line, ref token) => {
                write!(f, "Invalid number '{}' on line {}", token, line)
            }
            ParserErr::EmptyBoard => write!(f, "Board has no cells"),
            ParserErr::TooLarge => write!(f, "Board larger than 255 rows/columns"),
            ParserErr::RowCount(expected, found) => {
                write!(f, "Expected {} rows, found {}", expected, found)
            }
            ParserErr::RowLength(r) => write!(f, "Wrong number of cells in row {}", r),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TipperOffBoard => write!(f, "Tipper is not on the board"),
            ParserErr::GoalOffBoard => write!(f, "Goal is not on the board"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for TipOverConfig {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tipover(s)
    }
}

impl FromStr for TiltConfig {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tilt(s)
    }
}

/// Header `rows cols tipperRow tipperCol goalRow goalCol`,
/// then `rows` lines of `cols` heights.
pub(crate) fn parse_tipover(board: &str) -> Result<TipOverConfig, ParserErr> {
    let lines = non_empty_lines(board);
    let (&header, body) = lines.split_first().ok_or(ParserErr::NoHeader)?;

    let header: Vec<usize> = parse_numbers(header, 1)?;
    if header.len() != 6 {
        return Err(ParserErr::HeaderLength(header.len()));
    }
    let (rows, cols) = (header[0], header[1]);
    check_size(rows, cols)?;
    if body.len() != rows {
        return Err(ParserErr::RowCount(rows, body.len()));
    }

    let mut grid = Vec::with_capacity(rows);
    for (r, line) in body.iter().enumerate() {
        let heights: Vec<u32> = parse_numbers(line, r + 2)?;
        if heights.len() != cols {
            return Err(ParserErr::RowLength(r));
        }
        grid.push(heights);
    }

    let tipper = to_pos(header[2], header[3], rows, cols).ok_or(ParserErr::TipperOffBoard)?;
    let goal = to_pos(header[4], header[5], rows, cols).ok_or(ParserErr::GoalOffBoard)?;
    TipOverConfig::new(grid, tipper, goal)
}

/// Header `size`, then `size` lines of `size` cell symbols.
pub(crate) fn parse_tilt(board: &str) -> Result<TiltConfig, ParserErr> {
    let lines = non_empty_lines(board);
    let (&header, body) = lines.split_first().ok_or(ParserErr::NoHeader)?;

    let header: Vec<usize> = parse_numbers(header, 1)?;
    if header.len() != 1 {
        return Err(ParserErr::HeaderLength(header.len()));
    }
    let size = header[0];
    check_size(size, size)?;
    if body.len() != size {
        return Err(ParserErr::RowCount(size, body.len()));
    }

    let mut grid = Vec::with_capacity(size);
    for (r, line) in body.iter().enumerate() {
        let mut row = Vec::with_capacity(size);
        for (c, token) in line.split_whitespace().enumerate() {
            let mut chars = token.chars();
            let cell = match (chars.next(), chars.next()) {
                (Some(symbol), None) => TiltCell::from_symbol(symbol),
                _ => None,
            };
            row.push(cell.ok_or(ParserErr::Pos(r, c))?);
        }
        if row.len() != size {
            return Err(ParserErr::RowLength(r));
        }
        grid.push(row);
    }

    Ok(TiltConfig::new(grid))
}

fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

fn parse_numbers<T: FromStr>(line: &str, line_number: usize) -> Result<Vec<T>, ParserErr> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| ParserErr::Number(line_number, token.to_string()))
        })
        .collect()
}

fn check_size(rows: usize, cols: usize) -> Result<(), ParserErr> {
    if rows == 0 || cols == 0 {
        Err(ParserErr::EmptyBoard)
    } else if rows > MAX_SIZE || cols > MAX_SIZE {
        Err(ParserErr::TooLarge)
    } else {
        Ok(())
    }
}

fn to_pos(r: usize, c: usize, rows: usize, cols: usize) -> Option<Pos> {
    if r < rows && c < cols {
        Some(Pos::new(r as u8, c as u8))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipover_simple() {
        let board: TipOverConfig = r"
3 5 2 0 2 4
0 0 0 0 0
0 0 0 0 0
2 0 0 1 1
"
        .parse()
        .unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 5);
        assert_eq!(board.tipper(), Pos::new(2, 0));
        assert_eq!(board.goal(), Pos::new(2, 4));
        assert_eq!(board.height(Pos::new(2, 0)), 2);
        assert_eq!(board.height(Pos::new(2, 3)), 1);
        assert_eq!(board.height(Pos::new(0, 0)), 0);
    }

    #[test]
    fn tipover_tall_towers() {
        let board: TipOverConfig = "1 3 0 0 0 2\n1 300 1".parse().unwrap();
        assert_eq!(board.height(Pos::new(0, 1)), 300);

        let board: TipOverConfig = "1 2 0 0 0 1\n4000000000 1".parse().unwrap();
        assert_eq!(board.height(Pos::new(0, 0)), 4_000_000_000);

        // beyond u32
        assert_eq!(
            "1 2 0 0 0 1\n99999999999 1".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::Number(2, "99999999999".to_string())
        );
    }

    #[test]
    fn tipover_failures() {
        assert_eq!("".parse::<TipOverConfig>().unwrap_err(), ParserErr::NoHeader);
        assert_eq!(
            "1 1 0 0 0".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::HeaderLength(5)
        );
        assert_eq!(
            "1 x 0 0 0 0\n1".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::Number(1, "x".to_string())
        );
        assert_eq!(
            "0 3 0 0 0 0".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::EmptyBoard
        );
        assert_eq!(
            "256 1 0 0 0 0".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::TooLarge
        );
        assert_eq!(
            "2 2 0 0 1 1\n1 1".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::RowCount(2, 1)
        );
        assert_eq!(
            "2 2 0 0 1 1\n1 1\n1".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::RowLength(1)
        );
        assert_eq!(
            "1 2 0 0 0 1\n1 -1".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::Number(2, "-1".to_string())
        );
        assert_eq!(
            "1 2 0 2 0 1\n1 1".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::TipperOffBoard
        );
        assert_eq!(
            "1 2 0 0 1 1\n1 1".parse::<TipOverConfig>().unwrap_err(),
            ParserErr::GoalOffBoard
        );
    }

    #[test]
    fn tilt_simple() {
        let board: TiltConfig = r"
3
G . *
B . O
. . .
"
        .parse()
        .unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.cell(Pos::new(0, 0)), TiltCell::Green);
        assert_eq!(board.cell(Pos::new(0, 2)), TiltCell::Blocker);
        assert_eq!(board.cell(Pos::new(1, 0)), TiltCell::Blue);
        assert_eq!(board.cell(Pos::new(1, 2)), TiltCell::Hole);
        assert_eq!(board.cell(Pos::new(2, 2)), TiltCell::Empty);
    }

    #[test]
    fn tilt_failures() {
        assert_eq!(
            "2\nG X\n. .".parse::<TiltConfig>().unwrap_err(),
            ParserErr::Pos(0, 1)
        );
        assert_eq!(
            "2\nG ..\n. .".parse::<TiltConfig>().unwrap_err(),
            ParserErr::Pos(0, 1)
        );
        assert_eq!(
            "2\nG . .\n. .".parse::<TiltConfig>().unwrap_err(),
            ParserErr::RowLength(0)
        );
        assert_eq!(
            "3\nG . .\n. . .".parse::<TiltConfig>().unwrap_err(),
            ParserErr::RowCount(3, 2)
        );
        assert_eq!("2 2".parse::<TiltConfig>().unwrap_err(), ParserErr::HeaderLength(2));
    }
}
