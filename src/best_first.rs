use crate::strategy::finish;
use crate::{
    Cost, Explored, Frontier, Grid, NoSolution, Node, NodeArena, PriorityFrontier, SearchOutcome,
    Solution, StateMap, Strategy,
};

/// The loop shared by uniform-cost, greedy and A* search; `priority` orders the frontier.
///
/// `explored` keeps the cheapest node per state. A child is queued only if its state is new
/// or it is strictly cheaper than the known node, and queued entries are never updated, so
/// a popped node that has since been beaten is skipped.
pub(crate) fn best_first(
    grid: &Grid,
    strategy: Strategy,
    priority: impl Fn(&Node) -> Cost,
) -> SearchOutcome {
    let (start, goal) = (grid.start(), grid.goal());
    let mut nodes = NodeArena::with_capacity(grid.len());
    let mut explored: StateMap<Node> = StateMap::with_capacity(grid.width(), grid.len());
    let mut frontier = PriorityFrontier::with_capacity(grid.len());
    let mut expanded = 0;

    let root = nodes.add_root(start);
    explored.insert(start, nodes[root]);
    frontier.add(root, start, priority(&nodes[root]));
    tracing::debug!(%strategy, %start, %goal, "search started");

    while let Some(cur) = frontier.remove() {
        let node = nodes[cur];
        if explored
            .get(node.state)
            .is_some_and(|best| best.cost < node.cost)
        {
            continue;
        }

        if node.state == goal {
            let solution = Solution::new(nodes, cur, Explored::Best(explored), expanded);
            return finish(strategy, SearchOutcome::Solution(solution));
        }

        expanded += 1;
        tracing::trace!(%strategy, state = %node.state, cost = node.cost, "expand");

        for (action, next) in grid.neighbors(node.state) {
            let step_cost = grid.cost(next);
            let start_to_next_cost = node.cost + step_cost;
            let improves = explored
                .get(next)
                .map_or(true, |best| start_to_next_cost < best.cost);
            if improves {
                let child = nodes.add_child(cur, action, next, step_cost);
                explored.insert(next, nodes[child]);
                frontier.add(child, next, priority(&nodes[child]));
            }
        }
    }

    let outcome = NoSolution::new(Explored::Best(explored), expanded);
    finish(strategy, SearchOutcome::NoSolution(outcome))
}
