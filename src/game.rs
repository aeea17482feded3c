use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::{debug, info, warn};

use crate::configuration::Configuration;
use crate::data::Dir;
use crate::parser::ParserErr;
use crate::{LoadBoard, Solve};

/// What happened after a player's action, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Loaded(String),
    LoadFailed(String),
    Reset,
    Moved(Dir),
    Tipped(Dir),
    Tilted(Dir),
    Won,
    AlreadySolved,
    NoCrateOrTower,
    OffBoard,
    CannotTip,
    BlueInHole,
    Hint,
    NoSolution,
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Event::Loaded(ref file) => write!(f, "Loaded: {}", file),
            Event::LoadFailed(ref file) => write!(f, "Failed to load {}", file),
            Event::Reset => write!(f, "Puzzle reset!"),
            Event::Moved(dir) => write!(f, "Moved {}.", dir),
            Event::Tipped(_) => write!(f, "A tower has been tipped over."),
            Event::Tilted(dir) => write!(f, "Tilted {}.", dir),
            Event::Won => write!(f, "I WON!"),
            Event::AlreadySolved => write!(f, "Current board is already solved."),
            Event::NoCrateOrTower => write!(f, "No crate or tower there."),
            Event::OffBoard => write!(f, "Move goes off the board."),
            Event::CannotTip => write!(f, "Tower cannot be tipped over."),
            Event::BlueInHole => {
                write!(f, "Illegal move. A blue slider will fall through the hole!")
            }
            Event::Hint => write!(f, "Next step!"),
            Event::NoSolution => write!(f, "No solution"),
        }
    }
}

/// A board that can be played one direction at a time.
pub trait Playable: Configuration + Display + FromStr<Err = ParserErr> {
    /// Verb of the move command in the text interface.
    const MOVE_COMMAND: &'static str;

    /// The next board and what happened, or why the board stays as it is.
    fn play(&self, dir: Dir) -> Result<(Self, Event), Event>;
}

/// An interactive session: the board as loaded and the board as played.
#[derive(Debug, Clone)]
pub struct Game<B> {
    file: String,
    initial: B,
    current: B,
}

impl<B: Playable> Game<B> {
    pub fn new<S: Into<String>>(file: S, board: B) -> Self {
        Game {
            file: file.into(),
            initial: board.clone(),
            current: board,
        }
    }

    pub fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let board = path.load_board()?;
        Ok(Game::new(path, board))
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn board(&self) -> &B {
        &self.current
    }

    pub fn is_won(&self) -> bool {
        self.current.is_solution()
    }

    /// Replaces the puzzle, keeps the current one if `path` can't be loaded.
    pub fn load_file(&mut self, path: &str) -> Event {
        match path.load_board::<B>() {
            Ok(board) => {
                info!("Loaded {}", path);
                *self = Game::new(path, board);
                Event::Loaded(path.to_string())
            }
            Err(err) => {
                warn!("Failed to load {}: {}", path, err);
                Event::LoadFailed(path.to_string())
            }
        }
    }

    /// Back to the board as it was loaded.
    pub fn reset(&mut self) -> Event {
        self.current = self.initial.clone();
        Event::Reset
    }

    pub fn make_move(&mut self, dir: Dir) -> Vec<Event> {
        if self.is_won() {
            return vec![Event::AlreadySolved];
        }

        match self.current.play(dir) {
            Ok((next, event)) => {
                self.current = next;
                if self.is_won() {
                    vec![event, Event::Won]
                } else {
                    vec![event]
                }
            }
            Err(event) => vec![event],
        }
    }

    /// Solves from the current board and plays the first move of the solution.
    pub fn hint(&mut self) -> Vec<Event> {
        if self.is_won() {
            return vec![Event::AlreadySolved];
        }

        let solution = self.current.solve(false);
        debug!("Hint search: {:?}", solution);
        match solution.path.into_iter().nth(1) {
            None => vec![Event::NoSolution],
            Some(next) => {
                self.current = next;
                if self.is_won() {
                    vec![Event::Hint, Event::Won]
                } else {
                    vec![Event::Hint]
                }
            }
        }
    }
}
