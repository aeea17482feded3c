use std::ops::{Index, IndexMut};

use crate::data::{Dir, Pos};

/// Row-major grid. Both dimensions are at least 1 and at most `MAX_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    /// Rows must be non-empty and all of the same length (the parser guarantees it).
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        assert!(!grid.is_empty() && !grid[0].is_empty());
        let rows = grid.len();
        let cols = grid[0].len();
        assert!(grid.iter().all(|row| row.len() == cols), "Ragged grid");

        let data = grid.into_iter().flatten().collect();
        Vec2d {
            data,
            rows: rows as u8,
            cols: cols as u8,
        }
    }

    pub(crate) fn rows(&self) -> u8 {
        self.rows
    }

    pub(crate) fn cols(&self) -> u8 {
        self.cols
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r < self.rows && pos.c < self.cols
    }

    /// The cell `dist` cells away from `pos` in direction `dir`, if it's on the grid.
    ///
    /// This is the only place where bounds are checked using signed types.
    pub(crate) fn step(&self, pos: Pos, dir: Dir, dist: usize) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let dist = dist as i32;
        let r = i32::from(pos.r) + dr * dist;
        let c = i32::from(pos.c) + dc * dist;
        if r < 0 || c < 0 || r >= i32::from(self.rows) || c >= i32::from(self.cols) {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }

    pub(crate) fn row(&self, r: u8) -> &[T] {
        let start = usize::from(r) * usize::from(self.cols);
        &self.data[start..start + usize::from(self.cols)]
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = usize::from(index.r) * usize::from(self.cols) + usize::from(index.c);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = usize::from(index.r) * usize::from(self.cols) + usize::from(index.c);
        &mut self.data[index]
    }
}
