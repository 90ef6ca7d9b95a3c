use crate::best_first::best_first;
use crate::{Grid, Heuristic, SearchOutcome, Strategy};

/// A* search: the frontier is ordered by the cost so far plus `heuristic`.
///
/// Returns a minimum-cost path when `heuristic` never overestimates the remaining cost,
/// e.g. [`crate::manhattan`] on grids where every cell costs at least 1. A state that was
/// already expanded is expanded again if a strictly cheaper path to it turns up later.
pub fn a_star<H>(grid: &Grid, heuristic: &H) -> SearchOutcome
where
    H: Heuristic + ?Sized,
{
    let goal = grid.goal();
    best_first(grid, Strategy::AStar, |n| {
        n.cost + heuristic.estimate(n, goal)
    })
}
