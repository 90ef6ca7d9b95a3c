use crate::best_first::best_first;
use crate::{Grid, SearchOutcome, Strategy};

/// Uniform-cost search: the frontier is ordered by the cost so far.
///
/// The first time the goal is popped its cost is minimal.
pub fn ucs(grid: &Grid) -> SearchOutcome {
    best_first(grid, Strategy::UniformCost, |n| n.cost)
}
