mod stats;

use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashMap;
use log::debug;
use typed_arena::Arena;

use crate::configuration::Configuration;
use crate::Solve;

pub use self::stats::Stats;

pub struct SolverOk<C> {
    /// From the initial state to a solution (both inclusive), empty if there's no solution.
    pub path: Vec<C>,
    pub stats: Stats,
}

impl<C> SolverOk<C> {
    fn new(path: Vec<C>, stats: Stats) -> Self {
        Self { path, stats }
    }

    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves (edges) in the solution.
    pub fn move_cnt(&self) -> Option<usize> {
        if self.path.is_empty() {
            None
        } else {
            Some(self.path.len() - 1)
        }
    }

    pub fn total_expansions(&self) -> u64 {
        self.stats.total_created()
    }

    pub fn unique_states(&self) -> u64 {
        self.stats.total_unique()
    }
}

impl<C> Debug for SolverOk<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.move_cnt() {
            None => writeln!(f, "No solution")?,
            Some(moves) => writeln!(f, "Moves: {}", moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl<C: Configuration> Solve for C {
    fn solve(&self, print_status: bool) -> SolverOk<Self> {
        solve(self, print_status)
    }
}

/// Breadth-first search from `initial` to the nearest state satisfying `is_solution`.
///
/// Among shortest paths, the one found first in `neighbors` order wins.
pub fn solve<C: Configuration>(initial: &C, print_status: bool) -> SolverOk<C> {
    debug!("Search called");

    // every distinct state lives here exactly once, the map and queue only hold references
    let arena = Arena::new();
    let mut stats = Stats::new();
    let mut prevs: FnvHashMap<&C, Option<&C>> = FnvHashMap::default();
    let mut to_visit = VecDeque::new();

    let start: &C = arena.alloc(initial.clone());
    stats.add_created(0);
    stats.add_unique(0);
    prevs.insert(start, None);
    to_visit.push_back((start, 0));

    while let Some((cur, depth)) = to_visit.pop_front() {
        if cur.is_solution() {
            debug!("Solved at depth {}, backtracking path", depth);
            let path = backtrack_path(&prevs, cur);
            return SolverOk::new(path, stats);
        }

        for neighbor in cur.neighbors() {
            stats.add_created(depth + 1);

            // insert when discovered, not when visited,
            // so a state is never queued twice through different parents
            if prevs.contains_key(&neighbor) {
                continue;
            }
            if stats.add_unique(depth + 1) && print_status {
                println!("Reached new depth: {}", depth + 1);
                println!("{:?}", stats);
            }

            let neighbor: &C = arena.alloc(neighbor);
            prevs.insert(neighbor, Some(cur));
            to_visit.push_back((neighbor, depth + 1));
        }
    }

    debug!(
        "State space exhausted after {} unique states, no solution",
        prevs.len()
    );
    SolverOk::new(Vec::new(), stats)
}

fn backtrack_path<'a, C: Configuration>(
    prevs: &FnvHashMap<&'a C, Option<&'a C>>,
    final_state: &'a C,
) -> Vec<C> {
    let mut ret = Vec::new();
    let mut state = final_state;
    loop {
        ret.push(state.clone());
        match prevs[state] {
            Some(prev) => state = prev,
            None => {
                ret.reverse();
                return ret;
            }
        }
    }
}
