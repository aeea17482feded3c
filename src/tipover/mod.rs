use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::configuration::{Configuration, Neighbors};
use crate::data::{Dir, Pos, DIRECTIONS, MAX_SIZE};
use crate::game::{Event, Playable};
use crate::parser::ParserErr;
use crate::vec2d::Vec2d;

/// Outcome of trying to move the tipper in one direction.
///
/// Exactly one of these is produced for every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// Stepped onto an adjacent crate or tower, the board is unchanged.
    Moved(TipOverConfig),
    /// A tower was flattened into a run of crates.
    Tipped(TipOverConfig),
    /// The tower is blocked and there's nothing adjacent to step onto.
    CannotTip,
    OffBoard,
    NoCrateOrTower,
}

impl MoveResult {
    pub fn into_config(self) -> Option<TipOverConfig> {
        match self {
            MoveResult::Moved(config) | MoveResult::Tipped(config) => Some(config),
            _ => None,
        }
    }
}

/// A board of stacked crates and the tipper standing on one of them.
///
/// Cells hold heights: 0 is empty, 1 is a single crate, more is a tower.
/// Configurations that only moved the tipper share their grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TipOverConfig {
    grid: Rc<Vec2d<u32>>,
    tipper: Pos,
    goal: Pos,
}

impl TipOverConfig {
    pub fn new(heights: Vec<Vec<u32>>, tipper: Pos, goal: Pos) -> Result<Self, ParserErr> {
        let rows = heights.len();
        let cols = heights.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(ParserErr::EmptyBoard);
        }
        if rows > MAX_SIZE || cols > MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        if let Some(r) = heights.iter().position(|row| row.len() != cols) {
            return Err(ParserErr::RowLength(r));
        }

        let grid = Vec2d::new(heights);
        if !grid.contains(tipper) {
            return Err(ParserErr::TipperOffBoard);
        }
        if !grid.contains(goal) {
            return Err(ParserErr::GoalOffBoard);
        }
        Ok(TipOverConfig {
            grid: Rc::new(grid),
            tipper,
            goal,
        })
    }

    pub fn rows(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u8 {
        self.grid.cols()
    }

    pub fn tipper(&self) -> Pos {
        self.tipper
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn height(&self, pos: Pos) -> u32 {
        self.grid[pos]
    }

    pub fn is_tower(&self, pos: Pos) -> bool {
        self.grid[pos] > 1
    }

    pub fn attempt(&self, dir: Dir) -> MoveResult {
        if !self.is_tower(self.tipper) {
            return self.step(dir);
        }

        // a tower of height h needs h empty cells in a row to fall onto,
        // taller than the board means the scan runs off it first
        let height = self.grid[self.tipper] as usize;
        let mut run = Vec::new();
        for dist in 1..=height {
            match self.grid.step(self.tipper, dir, dist) {
                None => return MoveResult::OffBoard,
                Some(pos) if self.grid[pos] != 0 => {
                    return match self.step(dir) {
                        moved @ MoveResult::Moved(_) => moved,
                        _ => MoveResult::CannotTip,
                    };
                }
                Some(pos) => run.push(pos),
            }
        }
        MoveResult::Tipped(self.tip(&run))
    }

    fn step(&self, dir: Dir) -> MoveResult {
        match self.grid.step(self.tipper, dir, 1) {
            None => MoveResult::OffBoard,
            Some(pos) if self.grid[pos] == 0 => MoveResult::NoCrateOrTower,
            Some(pos) => MoveResult::Moved(TipOverConfig {
                grid: Rc::clone(&self.grid),
                tipper: pos,
                goal: self.goal,
            }),
        }
    }

    /// `run` must be non-empty, the tipper lands on its first cell.
    fn tip(&self, run: &[Pos]) -> TipOverConfig {
        let mut grid = Rc::clone(&self.grid);
        {
            let cells = Rc::make_mut(&mut grid);
            cells[self.tipper] = 0;
            for &pos in run {
                cells[pos] = 1;
            }
        }
        TipOverConfig {
            grid,
            tipper: run[0],
            goal: self.goal,
        }
    }
}

impl Configuration for TipOverConfig {
    fn is_solution(&self) -> bool {
        self.tipper == self.goal
    }

    fn neighbors(&self) -> Neighbors<Self> {
        let mut neighbors = Neighbors::new();
        neighbors.push(self.clone());
        for &dir in &DIRECTIONS {
            if let Some(next) = self.attempt(dir).into_config() {
                neighbors.push(next);
            }
        }
        neighbors
    }
}

impl Playable for TipOverConfig {
    const MOVE_COMMAND: &'static str = "move";

    fn play(&self, dir: Dir) -> Result<(Self, Event), Event> {
        match self.attempt(dir) {
            MoveResult::Moved(next) => Ok((next, Event::Moved(dir))),
            MoveResult::Tipped(next) => Ok((next, Event::Tipped(dir))),
            MoveResult::CannotTip => Err(Event::CannotTip),
            MoveResult::OffBoard => Err(Event::OffBoard),
            MoveResult::NoCrateOrTower => Err(Event::NoCrateOrTower),
        }
    }
}

impl Display for TipOverConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for c in 0..self.cols() {
            write!(f, "{:>3}", c)?;
        }
        writeln!(f)?;
        writeln!(f, "    {}", "-".repeat(3 * usize::from(self.cols())))?;

        for r in 0..self.rows() {
            write!(f, "{:>2} |", r)?;
            for (c, &height) in self.grid.row(r).iter().enumerate() {
                let pos = Pos::new(r, c as u8);
                let cell = if pos == self.tipper {
                    format!("*{}", height)
                } else if pos == self.goal {
                    format!("!{}", height)
                } else if height > 0 {
                    height.to_string()
                } else {
                    "_".to_string()
                };
                write!(f, "{:>3}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
