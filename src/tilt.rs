use std::cmp::Reverse;
use std::fmt::{self, Display, Formatter};

use crate::configuration::{Configuration, Neighbors};
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::game::{Event, Playable};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiltCell {
    Empty,
    Green,
    Blue,
    Blocker,
    Hole,
}

impl TiltCell {
    pub fn from_symbol(symbol: char) -> Option<TiltCell> {
        match symbol {
            '.' => Some(TiltCell::Empty),
            'G' => Some(TiltCell::Green),
            'B' => Some(TiltCell::Blue),
            '*' => Some(TiltCell::Blocker),
            'O' => Some(TiltCell::Hole),
            _ => None,
        }
    }

    pub fn to_symbol(self) -> char {
        match self {
            TiltCell::Empty => '.',
            TiltCell::Green => 'G',
            TiltCell::Blue => 'B',
            TiltCell::Blocker => '*',
            TiltCell::Hole => 'O',
        }
    }

    fn is_slider(self) -> bool {
        self == TiltCell::Green || self == TiltCell::Blue
    }
}

/// A square board whose sliders all move together when it's tilted.
///
/// Green sliders have to end up in a hole, a blue one must never fall in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TiltConfig {
    grid: Vec2d<TiltCell>,
}

impl TiltConfig {
    pub(crate) fn new(grid: Vec<Vec<TiltCell>>) -> Self {
        TiltConfig {
            grid: Vec2d::new(grid),
        }
    }

    pub fn size(&self) -> usize {
        usize::from(self.grid.rows())
    }

    pub fn cell(&self, pos: Pos) -> TiltCell {
        self.grid[pos]
    }

    pub fn greens_left(&self) -> usize {
        self.grid
            .positions()
            .filter(|&pos| self.grid[pos] == TiltCell::Green)
            .count()
    }

    /// The board after tilting towards `dir`, `None` if a blue slider would fall into a hole.
    pub fn tilt(&self, dir: Dir) -> Option<TiltConfig> {
        let mut grid = self.grid.clone();

        // sliders nearest the lower edge move first so the ones behind them stack up
        let mut order: Vec<Pos> = grid.positions().collect();
        match dir {
            Dir::North => order.sort_by_key(|pos| pos.r),
            Dir::South => order.sort_by_key(|pos| Reverse(pos.r)),
            Dir::West => order.sort_by_key(|pos| pos.c),
            Dir::East => order.sort_by_key(|pos| Reverse(pos.c)),
        }

        for pos in order {
            let slider = grid[pos];
            if !slider.is_slider() {
                continue;
            }

            let mut cur = pos;
            while let Some(next) = grid.step(cur, dir, 1) {
                match grid[next] {
                    TiltCell::Empty => {
                        grid[next] = slider;
                        grid[cur] = TiltCell::Empty;
                        cur = next;
                    }
                    TiltCell::Hole => {
                        if slider == TiltCell::Blue {
                            return None;
                        }
                        grid[cur] = TiltCell::Empty;
                        break;
                    }
                    _ => break,
                }
            }
        }

        Some(TiltConfig { grid })
    }
}

impl Configuration for TiltConfig {
    fn is_solution(&self) -> bool {
        self.greens_left() == 0
    }

    fn neighbors(&self) -> Neighbors<Self> {
        let mut neighbors = Neighbors::new();
        for &dir in &DIRECTIONS {
            if let Some(tilted) = self.tilt(dir) {
                neighbors.push(tilted);
            }
        }
        neighbors
    }
}

impl Playable for TiltConfig {
    const MOVE_COMMAND: &'static str = "tilt";

    fn play(&self, dir: Dir) -> Result<(Self, Event), Event> {
        self.tilt(dir)
            .map(|next| (next, Event::Tilted(dir)))
            .ok_or(Event::BlueInHole)
    }
}

impl Display for TiltConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            let symbols: Vec<String> = self
                .grid
                .row(r)
                .iter()
                .map(|cell| cell.to_symbol().to_string())
                .collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solve;

    fn board(s: &str) -> TiltConfig {
        s.parse().unwrap()
    }

    #[test]
    fn sliding() {
        let tilt = board("3\nG . .\n. * .\n. . O");

        assert_eq!(tilt.tilt(Dir::East).unwrap(), board("3\n. . G\n. * .\n. . O"));
        assert_eq!(tilt.tilt(Dir::South).unwrap(), board("3\n. . .\n. * .\nG . O"));
        // already against the edge
        assert_eq!(tilt.tilt(Dir::North).unwrap(), tilt);
        assert_eq!(tilt.tilt(Dir::West).unwrap(), tilt);
    }

    #[test]
    fn sliders_stack_up() {
        let tilt = board("3\nG B .\n. . .\n. . .");
        assert_eq!(tilt.tilt(Dir::East).unwrap(), board("3\n. G B\n. . .\n. . ."));

        let tilt = board("3\nG . .\nB . .\n. . .");
        assert_eq!(tilt.tilt(Dir::South).unwrap(), board("3\n. . .\nG . .\nB . ."));
    }

    #[test]
    fn blockers_stop_sliders() {
        let tilt = board("3\nG * .\n. . .\n* . .");
        assert_eq!(tilt.tilt(Dir::East).unwrap(), tilt);
        assert_eq!(tilt.tilt(Dir::South).unwrap(), board("3\n. * .\nG . .\n* . ."));
    }

    #[test]
    fn green_falls_into_hole() {
        let tilt = board("3\n. G O\n. . .\n. . .");
        let tilted = tilt.tilt(Dir::East).unwrap();
        assert_eq!(tilted, board("3\n. . O\n. . .\n. . ."));
        assert_eq!(tilted.greens_left(), 0);
        assert!(tilted.is_solution());
        assert!(!tilt.is_solution());
    }

    #[test]
    fn blue_in_hole_invalidates_tilt() {
        // the green falls in first, then the blue follows it
        let tilt = board("3\nB G O\n. . .\n. . .");
        assert_eq!(tilt.tilt(Dir::East), None);
        // blocked by the blue
        assert_eq!(tilt.tilt(Dir::West).unwrap(), tilt);

        let neighbors: Vec<_> = tilt.neighbors().into_iter().collect();
        assert_eq!(
            neighbors,
            vec![tilt.clone(), board("3\n. . O\n. . .\nB G .")]
        );
    }

    #[test]
    fn formatting() {
        let tilt = board("2\nG *\nB O");
        assert_eq!(tilt.to_string(), "G *\nB O\n");
    }

    #[test]
    fn solving() {
        let tilt = board("3\nG . .\n* . .\nB * O");
        let solution = tilt.solve(false);
        assert_eq!(
            solution.path,
            vec![
                tilt.clone(),
                board("3\n. . G\n* . .\nB * O"),
                board("3\n. . .\n* . .\nB * O"),
            ]
        );

        // the blue would follow the green into the hole
        let stuck = board("3\nB G O\n* * *\n* * *");
        let solution = stuck.solve(false);
        assert!(solution.path.is_empty());
        assert_eq!(solution.unique_states(), 1);
    }
}
