use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

/// Counters of one search, kept per BFS depth.
///
/// `created` counts every state produced by the search (including the initial state
/// and duplicates), `unique` counts only states seen for the first time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    unique_states: Vec<u64>,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            created_states: vec![],
            unique_states: vec![],
        }
    }

    /// Total number of expansions including the initial state.
    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    /// Number of distinct states discovered.
    pub fn total_unique(&self) -> u64 {
        self.unique_states.iter().sum::<u64>()
    }

    pub fn total_duplicates(&self) -> u64 {
        self.total_created() - self.total_unique()
    }

    pub fn created_by_depth(&self) -> &[u64] {
        &self.created_states
    }

    pub fn unique_by_depth(&self) -> &[u64] {
        &self.unique_states
    }

    /// Returns true if this is the first state created at `depth`.
    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    /// Returns true if this is the first unique state at `depth`.
    pub(crate) fn add_unique(&mut self, depth: usize) -> bool {
        Self::add(&mut self.unique_states, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: usize) -> bool {
        let mut ret = false;

        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    /// Per-depth breakdown for printing.
    pub fn depth_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
        ]));

        // created_states is always at least as long as unique_states
        for (depth, &created) in self.created_states.iter().enumerate() {
            let unique = self.unique_states.get(depth).cloned().unwrap_or(0);
            table.add_row(Row::new(vec![
                Cell::new(&depth.to_string()),
                Cell::new(&created.separated_string()),
                Cell::new(&unique.separated_string()),
                Cell::new(&(created - unique).separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "unique by depth: {:?}", self.unique_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total unique: {}", self.total_unique().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total configs: {}", self.total_created().separated_string())?;
        writeln!(f, "Unique configs: {}", self.total_unique().separated_string())
    }
}
