use crate::State;

/// Dense map from grid cells to `T`, indexed row-major for a fixed grid width.
#[derive(Debug, Clone)]
pub struct StateMap<T> {
    width: usize,
    v: Vec<Option<T>>,
    len: usize,
}

impl<T> StateMap<T> {
    pub fn new(width: usize) -> Self {
        Self::with_capacity(width, 0)
    }

    pub fn with_capacity(width: usize, cap: usize) -> Self {
        Self {
            width,
            v: Vec::with_capacity(cap),
            len: 0,
        }
    }

    fn index(&self, s: State) -> usize {
        debug_assert!(s.col < self.width, "{s} is wider than {}", self.width);
        s.row * self.width + s.col
    }

    /// Returns the previous value for `s`, if any
    pub fn insert(&mut self, s: State, t: T) -> Option<T> {
        let i = self.index(s);
        if i >= self.v.len() {
            self.v.resize_with(i + 1, || None);
        }
        let old = self.v[i].replace(t);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    pub fn has(&self, s: State) -> bool {
        self.get(s).is_some()
    }

    pub fn get(&self, s: State) -> Option<&T> {
        self.v.get(self.index(s))?.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (State, &T)> + '_ {
        let width = self.width;
        self.v
            .iter()
            .enumerate()
            .filter_map(move |(i, t)| Some((State::new(i / width, i % width), t.as_ref()?)))
    }
}

#[cfg(test)]
mod test {
    use crate::{State, StateMap};

    #[test]
    fn insert_replaces() {
        let mut map = StateMap::new(3);
        assert!(map.is_empty());
        assert_eq!(map.insert(State::new(2, 1), 'a'), None);
        assert_eq!(map.insert(State::new(2, 1), 'b'), Some('a'));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(State::new(2, 1)), Some(&'b'));
        assert!(!map.has(State::new(0, 0)));
    }

    #[test]
    fn get_past_the_end() {
        let mut map = StateMap::with_capacity(2, 4);
        map.insert(State::new(1, 0), 10);
        assert_eq!(map.get(State::new(1, 0)), Some(&10));
        assert_eq!(map.get(State::new(1, 1)), None);
        assert_eq!(map.get(State::new(7, 1)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let mut map = StateMap::new(3);
        map.insert(State::new(1, 2), "c");
        map.insert(State::new(0, 1), "a");
        map.insert(State::new(1, 0), "b");
        let entries: Vec<_> = map.iter().map(|(s, &v)| (s, v)).collect();
        assert_eq!(
            entries,
            vec![
                (State::new(0, 1), "a"),
                (State::new(1, 0), "b"),
                (State::new(1, 2), "c"),
            ]
        );
    }
}
