use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::configuration::{Configuration, Neighbors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterErr {
    NoBuckets,
}

impl Display for WaterErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            WaterErr::NoBuckets => write!(f, "At least one bucket is needed"),
        }
    }
}

impl Error for WaterErr {}

/// Buckets that can be filled, emptied or poured into each other
/// until one of them holds exactly `amount`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaterConfig {
    amount: u32,
    capacities: Rc<Vec<u32>>,
    buckets: Vec<u32>,
}

impl WaterConfig {
    /// All buckets start empty.
    pub fn new(amount: u32, capacities: Vec<u32>) -> Result<Self, WaterErr> {
        if capacities.is_empty() {
            return Err(WaterErr::NoBuckets);
        }
        let buckets = vec![0; capacities.len()];
        Ok(WaterConfig {
            amount,
            capacities: Rc::new(capacities),
            buckets,
        })
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn capacities(&self) -> &[u32] {
        &self.capacities
    }

    pub fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    fn with_buckets(&self, buckets: Vec<u32>) -> Self {
        WaterConfig {
            amount: self.amount,
            capacities: Rc::clone(&self.capacities),
            buckets,
        }
    }
}

impl Configuration for WaterConfig {
    fn is_solution(&self) -> bool {
        self.buckets.iter().any(|&b| b == self.amount)
    }

    fn neighbors(&self) -> Neighbors<Self> {
        let cnt = self.buckets.len();
        let mut neighbors = Neighbors::new();
        neighbors.push(self.clone());

        for i in 0..cnt {
            let cur = self.buckets[i];

            if cur != self.capacities[i] {
                let mut filled = self.buckets.clone();
                filled[i] = self.capacities[i];
                neighbors.push(self.with_buckets(filled));
            }

            if cur == 0 {
                continue;
            }

            let mut emptied = self.buckets.clone();
            emptied[i] = 0;
            neighbors.push(self.with_buckets(emptied));

            // pour into every other bucket, starting with the next one and wrapping around
            for j in (1..cnt).map(|offset| (i + offset) % cnt) {
                let space = self.capacities[j].saturating_sub(self.buckets[j]);
                if space == 0 {
                    continue;
                }
                let poured = space.min(cur);
                let mut new_buckets = self.buckets.clone();
                new_buckets[i] -= poured;
                new_buckets[j] += poured;
                neighbors.push(self.with_buckets(new_buckets));
            }
        }

        neighbors
    }
}

impl Display for WaterConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.buckets)
    }
}
