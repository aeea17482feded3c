use std::hash::Hash;

/// One immutable puzzle state.
///
/// Equal states must be interchangeable as map keys, so `Hash` has to agree with `Eq`,
/// and `neighbors` has to be deterministic or the search won't be reproducible.
pub trait Configuration: Clone + Eq + Hash {
    fn is_solution(&self) -> bool;

    /// States reachable by exactly one atomic move, in a fixed order.
    fn neighbors(&self) -> Neighbors<Self>;
}

/// Insertion-ordered set of successor states.
///
/// Neighbor sets are small (a handful of moves) so a linear scan beats hashing here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors<C>(Vec<C>);

impl<C: PartialEq> Neighbors<C> {
    pub fn new() -> Self {
        Neighbors(Vec::new())
    }

    /// Returns false (and drops `state`) if an equal state is already present.
    pub fn push(&mut self, state: C) -> bool {
        if self.0.contains(&state) {
            false
        } else {
            self.0.push(state);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, C> {
        self.0.iter()
    }
}

impl<C: PartialEq> Default for Neighbors<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> IntoIterator for Neighbors<C> {
    type Item = C;
    type IntoIter = ::std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a Neighbors<C> {
    type Item = &'a C;
    type IntoIter = ::std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
