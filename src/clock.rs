use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::configuration::{Configuration, Neighbors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockErr {
    NoHours,
    HourOutOfRange(u32),
}

impl Display for ClockErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ClockErr::NoHours => write!(f, "The clock must have at least one hour"),
            ClockErr::HourOutOfRange(h) => write!(f, "Hour {} is not on the clock", h),
        }
    }
}

impl Error for ClockErr {}

/// A clock with `hours` positions numbered from 1, turned one hour at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockConfig {
    hours: u32,
    start: u32,
    end: u32,
}

impl ClockConfig {
    pub fn new(hours: u32, start: u32, end: u32) -> Result<Self, ClockErr> {
        if hours == 0 {
            return Err(ClockErr::NoHours);
        }
        for &hour in &[start, end] {
            if hour == 0 || hour > hours {
                return Err(ClockErr::HourOutOfRange(hour));
            }
        }
        Ok(ClockConfig { hours, start, end })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// The hour the clock currently shows.
    pub fn hour(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    fn with_hour(&self, start: u32) -> Self {
        ClockConfig { start, ..*self }
    }
}

impl Configuration for ClockConfig {
    fn is_solution(&self) -> bool {
        self.start == self.end
    }

    fn neighbors(&self) -> Neighbors<Self> {
        let back = if self.start == 1 { self.hours } else { self.start - 1 };
        let forward = if self.start == self.hours { 1 } else { self.start + 1 };

        let mut neighbors = Neighbors::new();
        neighbors.push(self.with_hour(back));
        neighbors.push(self.with_hour(forward));
        neighbors
    }
}

impl Display for ClockConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
