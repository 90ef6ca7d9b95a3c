use crate::{Action, Cost, State, Step};

/// Index of a [`Node`] in the [`NodeArena`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("N{}", self.0))
    }
}

/// A search-tree node.
///
/// `parent` and `action` are both `None` for the root and both `Some` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub state: State,
    /// Sum of the costs of every cell entered since the root
    pub cost: Cost,
    /// Number of moves since the root
    pub depth: usize,
    pub action: Option<Action>,
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only storage for every node generated by one search.
///
/// Parent links are indices into the arena, so they always point at an earlier node and
/// walking them terminates at the root.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl NodeArena {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn add_root(&mut self, state: State) -> NodeId {
        self.push(Node {
            state,
            cost: 0.0,
            depth: 0,
            action: None,
            parent: None,
        })
    }

    /// Add the node reached from `parent` by taking `action` into `state`, paying `step_cost`
    pub fn add_child(
        &mut self,
        parent: NodeId,
        action: Action,
        state: State,
        step_cost: Cost,
    ) -> NodeId {
        let p = self[parent];
        self.push(Node {
            state,
            cost: p.cost + step_cost,
            depth: p.depth + 1,
            action: Some(action),
            parent: Some(parent),
        })
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `id` followed by each of its ancestors up to and including the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        std::iter::successors(self.get(id), move |n| n.parent.and_then(|p| self.get(p)))
    }

    /// The moves leading from the root to `id`, in order
    pub fn walk_backwards(&self, id: NodeId) -> Vec<Step> {
        let mut path: Vec<Step> = self
            .ancestors(id)
            .filter_map(|n| {
                n.action.map(|action| Step {
                    action,
                    state: n.state,
                })
            })
            .collect();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod test {
    use crate::{Action, NodeArena, State, Step};

    #[test]
    fn root_has_no_parent() {
        let mut nodes = NodeArena::new();
        let root = nodes.add_root(State::new(0, 0));
        assert!(nodes[root].is_root());
        assert_eq!(nodes[root].cost, 0.0);
        assert!(nodes.walk_backwards(root).is_empty());
    }

    #[test]
    fn children_accumulate_cost_and_depth() {
        let mut nodes = NodeArena::with_capacity(4);
        let root = nodes.add_root(State::new(0, 0));
        let a = nodes.add_child(root, Action::Right, State::new(0, 1), 2.0);
        let b = nodes.add_child(a, Action::Down, State::new(1, 1), 3.0);
        assert_eq!(nodes[b].cost, 5.0);
        assert_eq!(nodes[b].depth, 2);
        assert_eq!(nodes[b].parent, Some(a));
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn siblings_share_ancestors() {
        let mut nodes = NodeArena::new();
        let root = nodes.add_root(State::new(1, 1));
        let up = nodes.add_child(root, Action::Up, State::new(0, 1), 1.0);
        let left = nodes.add_child(up, Action::Left, State::new(0, 0), 1.0);
        let right = nodes.add_child(up, Action::Right, State::new(0, 2), 1.0);

        assert_eq!(
            nodes.walk_backwards(left),
            vec![
                Step {
                    action: Action::Up,
                    state: State::new(0, 1)
                },
                Step {
                    action: Action::Left,
                    state: State::new(0, 0)
                },
            ]
        );
        let states: Vec<State> = nodes.ancestors(right).map(|n| n.state).collect();
        assert_eq!(
            states,
            vec![State::new(0, 2), State::new(0, 1), State::new(1, 1)]
        );
    }
}
