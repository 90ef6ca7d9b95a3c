use crate::State;

/// Dense set of grid cells, indexed row-major for a fixed grid width.
// TODO: Bitset
#[derive(Debug, Clone)]
pub struct StateSet {
    width: usize,
    v: Vec<bool>,
    len: usize,
}

impl StateSet {
    pub fn new(width: usize) -> Self {
        Self::with_capacity(width, 0)
    }

    pub fn with_capacity(width: usize, capacity: usize) -> Self {
        Self {
            width,
            v: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    fn index(&self, s: State) -> usize {
        debug_assert!(s.col < self.width, "{s} is wider than {}", self.width);
        s.row * self.width + s.col
    }

    /// Returns true if `s` was not already in the set
    pub fn add(&mut self, s: State) -> bool {
        let i = self.index(s);
        if i >= self.v.len() {
            self.v.resize(i + 1, false);
        }
        let new = !self.v[i];
        if new {
            self.v[i] = true;
            self.len += 1;
        }
        new
    }

    pub fn has(&self, s: State) -> bool {
        let i = self.index(s);
        if i >= self.v.len() {
            false
        } else {
            self.v[i]
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in row-major order
    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        let width = self.width;
        self.v
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(move |(i, _)| State::new(i / width, i % width))
    }
}
