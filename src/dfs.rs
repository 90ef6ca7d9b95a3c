use crate::strategy::finish;
use crate::{
    Explored, Frontier, Grid, NoSolution, NodeArena, SearchOutcome, Solution, StackFrontier,
    StateSet, Strategy,
};

/// Depth-first search.
///
/// The same state may be on the stack several times; it is expanded the first time it is
/// popped and skipped afterwards, which keeps cycles from looping forever. No guarantee on
/// either the number of moves or the cost of the path.
pub fn dfs(grid: &Grid) -> SearchOutcome {
    let strategy = Strategy::DepthFirst;
    let (start, goal) = (grid.start(), grid.goal());
    let mut nodes = NodeArena::with_capacity(grid.len());
    let mut explored = StateSet::with_capacity(grid.width(), grid.len());
    let mut frontier = StackFrontier::new();
    let mut expanded = 0;

    let root = nodes.add_root(start);
    frontier.add(root, start, ());
    tracing::debug!(%strategy, %start, %goal, "search started");

    while let Some(cur) = frontier.remove() {
        let state = nodes[cur].state;
        if state == goal {
            let solution = Solution::new(nodes, cur, Explored::Visited(explored), expanded);
            return finish(strategy, SearchOutcome::Solution(solution));
        }

        let new = explored.add(state);
        if !new {
            continue;
        }
        expanded += 1;
        tracing::trace!(%strategy, %state, "expand");

        for (action, next) in grid.neighbors(state) {
            if !explored.has(next) {
                let child = nodes.add_child(cur, action, next, grid.cost(next));
                frontier.add(child, next, ());
            }
        }
    }

    let outcome = NoSolution::new(Explored::Visited(explored), expanded);
    finish(strategy, SearchOutcome::NoSolution(outcome))
}
