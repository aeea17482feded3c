use std::fmt::{self, Display, Formatter};

/// The puzzles the solver knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Puzzle {
    Clock,
    Water,
    Tilt,
    TipOver,
}

impl Puzzle {
    pub const ALL: [Puzzle; 4] = [Puzzle::Clock, Puzzle::Water, Puzzle::Tilt, Puzzle::TipOver];

    pub fn from_name(name: &str) -> Option<Puzzle> {
        Puzzle::ALL.iter().cloned().find(|p| p.name() == name)
    }

    /// Also the name of the CLI subcommand.
    pub fn name(self) -> &'static str {
        match self {
            Puzzle::Clock => "clock",
            Puzzle::Water => "water",
            Puzzle::Tilt => "tilt",
            Puzzle::TipOver => "tipover",
        }
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
