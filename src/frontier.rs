use crate::{Cost, NodeId, State};

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Generated but not yet expanded nodes, abstracted over removal order.
///
/// Entries carry their state so that membership can be checked without the arena.
pub trait Frontier {
    /// Ordering key supplied on insertion, `()` for frontiers ordered by insertion alone
    type Priority;

    fn add(&mut self, node: NodeId, state: State, priority: Self::Priority);
    fn remove(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;
    fn contains_state(&self, state: State) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO
#[derive(Debug, Default)]
pub struct StackFrontier {
    entries: Vec<(NodeId, State)>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    type Priority = ();

    fn add(&mut self, node: NodeId, state: State, _: ()) {
        self.entries.push((node, state));
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.entries.pop().map(|(n, _)| n)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains_state(&self, state: State) -> bool {
        self.entries.iter().any(|&(_, s)| s == state)
    }
}

/// FIFO
#[derive(Debug, Default)]
pub struct QueueFrontier {
    entries: VecDeque<(NodeId, State)>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    type Priority = ();

    fn add(&mut self, node: NodeId, state: State, _: ()) {
        self.entries.push_back((node, state));
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.entries.pop_front().map(|(n, _)| n)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains_state(&self, state: State) -> bool {
        self.entries.iter().any(|&(_, s)| s == state)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: Cost,
    seq: u64,
    node: NodeId,
    state: State,
}

impl PartialEq for Entry {
    fn eq(&self, o: &Self) -> bool {
        self.cmp(o) == Ordering::Equal
    }
}
impl Eq for Entry {}
impl Ord for Entry {
    // Reversed so that the max-heap pops the lowest priority, then the oldest entry.
    fn cmp(&self, o: &Self) -> Ordering {
        o.priority
            .total_cmp(&self.priority)
            .then_with(|| o.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue. Among equal priorities the earliest added entry is removed first.
///
/// The same state may be present several times; callers skip the superseded entries.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            queue: BinaryHeap::with_capacity(cap),
            next_seq: 0,
        }
    }

    /// The priority that the next [`Frontier::remove`] would return
    pub fn peek_priority(&self) -> Option<Cost> {
        self.queue.peek().map(|e| e.priority)
    }
}

impl Frontier for PriorityFrontier {
    type Priority = Cost;

    fn add(&mut self, node: NodeId, state: State, priority: Cost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            priority,
            seq,
            node,
            state,
        });
    }

    fn remove(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains_state(&self, state: State) -> bool {
        self.queue.iter().any(|e| e.state == state)
    }
}
