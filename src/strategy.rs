use crate::{ConfigError, Grid, Heuristic, SearchOutcome};

use std::str::FromStr;

/// The five search strategies, for callers that pick one at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    GreedyBestFirst,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ];

    pub fn short_name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::GreedyBestFirst => "gbfs",
            Strategy::AStar => "astar",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first search",
            Strategy::DepthFirst => "depth-first search",
            Strategy::UniformCost => "uniform-cost search",
            Strategy::GreedyBestFirst => "greedy best-first search",
            Strategy::AStar => "A* search",
        }
    }

    /// Whether the strategy consults a heuristic
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::GreedyBestFirst | Strategy::AStar)
    }

    /// Whether returned paths have minimum cost. For A* this assumes an admissible heuristic.
    pub fn is_cost_optimal(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::AStar)
    }

    /// Run the strategy. `heuristic` is ignored by uninformed strategies.
    pub fn search<H>(self, grid: &Grid, heuristic: &H) -> SearchOutcome
    where
        H: Heuristic + ?Sized,
    {
        match self {
            Strategy::BreadthFirst => crate::bfs(grid),
            Strategy::DepthFirst => crate::dfs(grid),
            Strategy::UniformCost => crate::ucs(grid),
            Strategy::GreedyBestFirst => crate::gbfs(grid, heuristic),
            Strategy::AStar => crate::a_star(grid, heuristic),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "ucs" | "uniform-cost" | "dijkstra" => Ok(Strategy::UniformCost),
            "gbfs" | "greedy" | "greedy-best-first" => Ok(Strategy::GreedyBestFirst),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            _ => Err(ConfigError::UnknownStrategy(s.to_owned())),
        }
    }
}

/// Log how a search ended and hand the outcome back
pub(crate) fn finish(strategy: Strategy, outcome: SearchOutcome) -> SearchOutcome {
    match &outcome {
        SearchOutcome::Solution(s) => tracing::debug!(
            %strategy,
            cost = s.cost(),
            moves = s.moves(),
            explored = s.nodes_explored(),
            expanded = s.expanded(),
            "goal reached"
        ),
        SearchOutcome::NoSolution(n) => tracing::debug!(
            %strategy,
            explored = n.nodes_explored(),
            expanded = n.expanded(),
            "frontier exhausted"
        ),
    }
    outcome
}
