use crate::{Action, ConfigError, Cost, Node, State};

/// Scores a node against the goal for [`crate::gbfs`] and [`crate::a_star`].
///
/// Estimates must be non-negative. A* only returns minimum-cost paths when the estimate
/// never exceeds the true remaining cost; this is not checked.
pub trait Heuristic {
    fn estimate(&self, node: &Node, goal: State) -> Cost;
}

impl<F> Heuristic for F
where
    F: Fn(&Node, State) -> Cost,
{
    fn estimate(&self, node: &Node, goal: State) -> Cost {
        self(node, goal)
    }
}

/// Moves needed to reach `goal` on an empty grid. Admissible while every cell costs at least 1.
pub fn manhattan(node: &Node, goal: State) -> Cost {
    (node.state.row.abs_diff(goal.row) + node.state.col.abs_diff(goal.col)) as Cost
}

/// Always 0, which makes A* expand in the same order as uniform-cost search
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _: &Node, _: State) -> Cost {
        0.0
    }
}

/// Ranks nodes by the action that produced them, ignoring the goal.
///
/// The first action in the ranking scores 0, the next 1 and so on; the root scores 0.
/// This is not goal-directed and not admissible, so neither greedy search nor A* give any
/// quality guarantee with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionRank {
    ranks: [Cost; 4],
}

impl ActionRank {
    pub fn new(order: [Action; 4]) -> Result<Self, ConfigError> {
        Self::from_order(order)
    }

    /// Parse a ranking such as `["right", "down", "left", "up"]`
    pub fn from_labels<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let actions = labels
            .into_iter()
            .map(|l| l.as_ref().parse::<Action>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_order(actions)
    }

    fn from_order(order: impl IntoIterator<Item = Action>) -> Result<Self, ConfigError> {
        let mut ranks: [Option<Cost>; 4] = [None; 4];
        for (rank, action) in order.into_iter().enumerate() {
            let entry = &mut ranks[slot(action)];
            if entry.is_some() {
                return Err(ConfigError::DuplicateAction(action));
            }
            *entry = Some(rank as Cost);
        }
        let mut out = [0.0; 4];
        for action in Action::ALL {
            out[slot(action)] = ranks[slot(action)].ok_or(ConfigError::MissingAction(action))?;
        }
        Ok(Self { ranks: out })
    }

    pub fn rank(&self, action: Action) -> Cost {
        self.ranks[slot(action)]
    }
}

impl Default for ActionRank {
    fn default() -> Self {
        Self {
            ranks: [0.0, 1.0, 2.0, 3.0],
        }
    }
}

impl Heuristic for ActionRank {
    fn estimate(&self, node: &Node, _: State) -> Cost {
        node.action.map_or(0.0, |a| self.rank(a))
    }
}

fn slot(action: Action) -> usize {
    match action {
        Action::Up => 0,
        Action::Down => 1,
        Action::Left => 2,
        Action::Right => 3,
    }
}
