//! Plain 4-connected Dijkstra straight on the moving AI map, used to check the strategies.

use movingai::Coords2D;
use movingai::Map2D;
use movingai::MovingAiMap;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Debug)]
struct SearchNode {
    pub g: f64,
    pub current: Coords2D,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &SearchNode) -> bool {
        self.current == other.current
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &SearchNode) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &SearchNode) -> Ordering {
        // This is reversed on purpose to make the max-heap into min-heap.
        other.g.total_cmp(&self.g)
    }
}

fn neighbors(map: &MovingAiMap, (x, y): Coords2D) -> impl Iterator<Item = Coords2D> + '_ {
    let candidates = [
        y.checked_sub(1).map(|y| (x, y)),
        x.checked_sub(1).map(|x| (x, y)),
        Some((x + 1, y)),
        Some((x, y + 1)),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter(move |&(x, y)| x < map.width() && y < map.height())
        .filter(move |&c| map.is_traversable(c))
}

fn walk_backwards(
    start: Coords2D,
    goal: Coords2D,
    parents: &HashMap<Coords2D, Coords2D>,
) -> Vec<Coords2D> {
    let mut child = goal;
    let mut path = vec![goal];
    while child != start {
        child = parents[&child];
        path.push(child);
    }
    path.reverse();
    path
}

/// The cells of a cheapest unit-cost path, both ends included, and its cost
pub fn shortest_path(
    map: &MovingAiMap,
    start: Coords2D,
    goal: Coords2D,
) -> Option<(Vec<Coords2D>, f64)> {
    let mut heap = BinaryHeap::new();
    let mut best: HashMap<Coords2D, f64> = HashMap::new();
    let mut parents: HashMap<Coords2D, Coords2D> = HashMap::new();

    // We're at `start`, with a zero cost
    best.insert(start, 0.0);
    heap.push(SearchNode {
        g: 0.0,
        current: start,
    });

    while let Some(SearchNode { g, current }) = heap.pop() {
        if current == goal {
            return Some((walk_backwards(start, goal, &parents), g));
        }

        if best.get(&current).is_some_and(|&b| b < g) {
            continue;
        }

        for neigh in neighbors(map, current) {
            let next_g = g + 1.0;
            if best.get(&neigh).map_or(true, |&b| next_g < b) {
                best.insert(neigh, next_g);
                parents.insert(neigh, current);
                heap.push(SearchNode {
                    g: next_g,
                    current: neigh,
                });
            }
        }
    }

    None
}
