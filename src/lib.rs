// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod clock;
pub mod config;
pub mod configuration;
pub mod data;
pub mod game;
pub mod parser;
pub mod ptui;
pub mod solver;
pub mod tilt;
pub mod tipover;
pub mod water;

mod fs;
mod vec2d;

use std::error::Error;
use std::path::Path;
use std::str::FromStr;

use crate::solver::SolverOk;

/// Reads a board file and parses it.
pub trait LoadBoard {
    fn load_board<B>(&self) -> Result<B, Box<dyn Error>>
    where
        B: FromStr,
        B::Err: Error + 'static;
}

impl<P: AsRef<Path> + ?Sized> LoadBoard for P {
    fn load_board<B>(&self) -> Result<B, Box<dyn Error>>
    where
        B: FromStr,
        B::Err: Error + 'static,
    {
        let text = fs::read_file(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve: Sized {
    fn solve(&self, print_status: bool) -> SolverOk<Self>;
}
