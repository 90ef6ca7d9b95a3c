use crate::{Action, Cost, Node, NodeArena, NodeId, Path, State, StateMap, StateSet};

/// What a search knew about the grid when it stopped
#[derive(Debug, Clone)]
pub enum Explored {
    /// Discovered states, for the unweighted strategies
    Visited(StateSet),
    /// The cheapest node found per state, for the cost-aware strategies
    Best(StateMap<Node>),
}

impl Explored {
    pub fn len(&self) -> usize {
        match self {
            Explored::Visited(set) => set.len(),
            Explored::Best(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, s: State) -> bool {
        match self {
            Explored::Visited(set) => set.has(s),
            Explored::Best(map) => map.has(s),
        }
    }

    /// Explored states in row-major order
    pub fn states(&self) -> Vec<State> {
        match self {
            Explored::Visited(set) => set.iter().collect(),
            Explored::Best(map) => map.iter().map(|(s, _)| s).collect(),
        }
    }

    /// The cheapest node known for `s`. Always `None` for [`Explored::Visited`].
    pub fn best(&self, s: State) -> Option<&Node> {
        match self {
            Explored::Visited(_) => None,
            Explored::Best(map) => map.get(s),
        }
    }
}

/// A path to the goal was found
#[derive(Debug, Clone)]
pub struct Solution {
    nodes: NodeArena,
    goal: NodeId,
    explored: Explored,
    expanded: usize,
}

impl Solution {
    pub(crate) fn new(nodes: NodeArena, goal: NodeId, explored: Explored, expanded: usize) -> Self {
        Self {
            nodes,
            goal,
            explored,
            expanded,
        }
    }

    pub fn goal_node(&self) -> &Node {
        &self.nodes[self.goal]
    }

    /// Every move from the start to the goal. Empty when the start is the goal.
    pub fn path(&self) -> Path {
        self.nodes.walk_backwards(self.goal)
    }

    pub fn actions(&self) -> Vec<Action> {
        self.path().into_iter().map(|s| s.action).collect()
    }

    /// Every cell on the path, start and goal included
    pub fn states(&self) -> Vec<State> {
        let mut states: Vec<State> = self.nodes.ancestors(self.goal).map(|n| n.state).collect();
        states.reverse();
        states
    }

    pub fn cost(&self) -> Cost {
        self.goal_node().cost
    }

    /// Number of moves in the path
    pub fn moves(&self) -> usize {
        self.goal_node().depth
    }

    pub fn nodes_explored(&self) -> usize {
        self.explored.len()
    }

    /// Number of nodes whose neighbors were generated
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn explored(&self) -> &Explored {
        &self.explored
    }

    /// Every node generated by the search, parents included
    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }
}

/// The frontier ran dry before the goal was reached
#[derive(Debug, Clone)]
pub struct NoSolution {
    explored: Explored,
    expanded: usize,
}

impl NoSolution {
    pub(crate) fn new(explored: Explored, expanded: usize) -> Self {
        Self { explored, expanded }
    }

    pub fn nodes_explored(&self) -> usize {
        self.explored.len()
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn explored(&self) -> &Explored {
        &self.explored
    }
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Solution(Solution),
    NoSolution(NoSolution),
}

impl SearchOutcome {
    pub fn is_solution(&self) -> bool {
        matches!(self, SearchOutcome::Solution(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solution(s) => Some(s),
            SearchOutcome::NoSolution(_) => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::Solution(s) => Some(s),
            SearchOutcome::NoSolution(_) => None,
        }
    }

    pub fn nodes_explored(&self) -> usize {
        self.explored().len()
    }

    pub fn expanded(&self) -> usize {
        match self {
            SearchOutcome::Solution(s) => s.expanded(),
            SearchOutcome::NoSolution(n) => n.expanded(),
        }
    }

    pub fn explored(&self) -> &Explored {
        match self {
            SearchOutcome::Solution(s) => s.explored(),
            SearchOutcome::NoSolution(n) => n.explored(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_step_solution() -> Solution {
        let mut nodes = NodeArena::new();
        let root = nodes.add_root(State::new(0, 0));
        let a = nodes.add_child(root, Action::Right, State::new(0, 1), 2.0);
        let b = nodes.add_child(a, Action::Down, State::new(1, 1), 5.0);
        let mut visited = StateSet::new(2);
        for n in [root, a, b] {
            visited.add(nodes[n].state);
        }
        Solution::new(nodes, b, Explored::Visited(visited), 2)
    }

    #[test]
    fn path_is_restartable() {
        let s = two_step_solution();
        let first = s.path();
        assert_eq!(first, s.path());
        assert_eq!(s.actions(), vec![Action::Right, Action::Down]);
        assert_eq!(
            s.states(),
            vec![State::new(0, 0), State::new(0, 1), State::new(1, 1)]
        );
        assert_eq!(s.cost(), 7.0);
        assert_eq!(s.moves(), 2);
        assert_eq!(s.nodes_explored(), 3);
    }

    #[test]
    fn outcome_accessors() {
        let found = SearchOutcome::Solution(two_step_solution());
        assert!(found.is_solution());
        assert_eq!(found.nodes_explored(), 3);
        assert_eq!(found.expanded(), 2);
        assert!(found.explored().contains(State::new(0, 1)));
        assert!(found.explored().best(State::new(0, 1)).is_none());

        let mut best = StateMap::new(1);
        let mut nodes = NodeArena::new();
        let root = nodes.add_root(State::new(0, 0));
        best.insert(State::new(0, 0), nodes[root]);
        let missing = SearchOutcome::NoSolution(NoSolution::new(Explored::Best(best), 1));
        assert!(!missing.is_solution());
        assert!(missing.solution().is_none());
        assert_eq!(missing.nodes_explored(), 1);
        assert_eq!(missing.explored().best(State::new(0, 0)).map(|n| n.cost), Some(0.0));
        assert_eq!(missing.explored().states(), vec![State::new(0, 0)]);
        assert!(missing.into_solution().is_none());
    }
}
