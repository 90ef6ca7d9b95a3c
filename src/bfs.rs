use crate::strategy::finish;
use crate::{
    Explored, Frontier, Grid, NoSolution, NodeArena, QueueFrontier, SearchOutcome, Solution,
    StateSet, Strategy,
};

/// Breadth-first search.
///
/// Returns a path with the fewest moves, which is not necessarily the cheapest one when
/// cell costs differ. States are marked as explored when generated, so none is queued twice.
pub fn bfs(grid: &Grid) -> SearchOutcome {
    let strategy = Strategy::BreadthFirst;
    let (start, goal) = (grid.start(), grid.goal());
    let mut nodes = NodeArena::with_capacity(grid.len());
    let mut explored = StateSet::with_capacity(grid.width(), grid.len());
    let mut expanded = 0;

    let root = nodes.add_root(start);
    explored.add(start);
    tracing::debug!(%strategy, %start, %goal, "search started");

    if start == goal {
        let solution = Solution::new(nodes, root, Explored::Visited(explored), expanded);
        return finish(strategy, SearchOutcome::Solution(solution));
    }

    let mut frontier = QueueFrontier::new();
    frontier.add(root, start, ());

    while let Some(cur) = frontier.remove() {
        let state = nodes[cur].state;
        expanded += 1;
        tracing::trace!(%strategy, %state, "expand");

        for (action, next) in grid.neighbors(state) {
            let new = explored.add(next);
            if !new {
                continue;
            }

            let child = nodes.add_child(cur, action, next, grid.cost(next));
            if next == goal {
                let solution = Solution::new(nodes, child, Explored::Visited(explored), expanded);
                return finish(strategy, SearchOutcome::Solution(solution));
            }
            frontier.add(child, next, ());
        }
    }

    let outcome = NoSolution::new(Explored::Visited(explored), expanded);
    finish(strategy, SearchOutcome::NoSolution(outcome))
}

#[cfg(test)]
mod test {
    use crate::grid::from_rows;
    use crate::{bfs, Action, State};

    #[test]
    fn start_is_goal() {
        let g = crate::Grid::builder(2, 2)
            .start((0, 1))
            .goal((0, 1))
            .wall((0, 0))
            .build()
            .unwrap();
        let s = bfs(&g).into_solution().unwrap();
        assert!(s.path().is_empty());
        assert_eq!(s.cost(), 0.0);
        assert_eq!(s.nodes_explored(), 1);
    }

    #[test]
    fn fewest_moves_ignores_cost() {
        let g = from_rows(&[
            "S9G", //
            "...", //
        ]);
        let s = bfs(&g).into_solution().unwrap();
        assert_eq!(s.actions(), vec![Action::Right, Action::Right]);
        assert_eq!(s.cost(), 10.0);
    }

    #[test]
    fn goal_detected_on_generation() {
        let g = from_rows(&[
            "S.G", //
            "...", //
        ]);
        let s = bfs(&g).into_solution().unwrap();
        assert_eq!(s.moves(), 2);
        assert!(s.explored().contains(State::new(0, 2)));
        // (0, 1) was expanded to find the goal, (1, 1) and (1, 2) were not.
        assert_eq!(s.expanded(), 2);
    }

    #[test]
    fn exhausts_disconnected_grid() {
        let g = from_rows(&[
            "S.#.", //
            "..#G", //
        ]);
        let n = bfs(&g);
        assert!(!n.is_solution());
        assert_eq!(
            n.explored().states(),
            vec![
                State::new(0, 0),
                State::new(0, 1),
                State::new(1, 0),
                State::new(1, 1)
            ]
        );
    }
}
