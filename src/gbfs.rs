use crate::best_first::best_first;
use crate::{Grid, Heuristic, SearchOutcome, Strategy};

/// Greedy best-first search: the frontier is ordered by `heuristic` alone.
///
/// The cost so far is tracked for the returned path but never affects the order, so the
/// path can be arbitrarily more expensive than the cheapest one.
pub fn gbfs<H>(grid: &Grid, heuristic: &H) -> SearchOutcome
where
    H: Heuristic + ?Sized,
{
    let goal = grid.goal();
    best_first(grid, Strategy::GreedyBestFirst, |n| {
        heuristic.estimate(n, goal)
    })
}

#[cfg(test)]
mod test {
    use crate::grid::from_rows;
    use crate::{gbfs, manhattan, ucs, Action, ActionRank, Node, State};

    #[test]
    fn heads_straight_for_the_goal() {
        let g = from_rows(&[
            "S9G", //
            "...", //
        ]);
        let s = gbfs(&g, &manhattan).into_solution().unwrap();
        assert_eq!(s.actions(), vec![Action::Right, Action::Right]);
        assert_eq!(s.cost(), 10.0);
        assert!(s.cost() > ucs(&g).solution().unwrap().cost());
    }

    #[test]
    fn expands_less_than_uniform_cost() {
        let g = from_rows(&[
            "S......", //
            ".......", //
            ".......", //
            "......G", //
        ]);
        let greedy = gbfs(&g, &manhattan);
        let uniform = ucs(&g);
        assert_eq!(greedy.solution().unwrap().moves(), 9);
        assert!(greedy.expanded() < uniform.expanded());
    }

    #[test]
    fn action_rank_prefers_its_first_action() {
        let g = from_rows(&[
            "S..", //
            "...", //
            "..G", //
        ]);
        let h = ActionRank::new([Action::Right, Action::Down, Action::Left, Action::Up]).unwrap();
        let s = gbfs(&g, &h).into_solution().unwrap();
        assert_eq!(
            s.actions(),
            vec![Action::Right, Action::Right, Action::Down, Action::Down]
        );
        assert_eq!(g.walk(s.actions()), Some(g.goal()));
    }

    #[test]
    fn skips_entries_beaten_by_a_cheaper_path() {
        // (1, 1) is first reached through the expensive cell below the start, then again
        // through (0, 1) for less. Its child (1, 2) is queued once from each, and the
        // older, dearer entry comes out first and must not be expanded.
        let g = from_rows(&[
            "S.G", //
            "9..", //
        ]);
        let h = |n: &Node, _: State| match (n.state.row, n.state.col) {
            (0, 1) => 2.0,
            (1, 1) => 1.0,
            (1, 2) => 4.0,
            (0, 2) => 20.0,
            _ => 0.0,
        };
        let outcome = gbfs(&g, &h);
        assert_eq!(outcome.expanded(), 6);
        let s = outcome.into_solution().unwrap();
        assert_eq!(s.actions(), vec![Action::Right, Action::Right]);
        assert_eq!(s.cost(), 2.0);
        assert_eq!(s.nodes().len(), 8);
        let best = |row, col| s.explored().best(State::new(row, col)).map(|n| n.cost);
        assert_eq!(best(1, 1), Some(2.0));
        assert_eq!(best(1, 2), Some(3.0));
    }
}
