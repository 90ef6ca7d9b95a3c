use crate::{Action, Cost, State};

/// What a cell was configured as when it failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Start,
    Goal,
    Wall,
    Cost,
}

impl std::fmt::Display for CellRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CellRole::Start => "start",
            CellRole::Goal => "goal",
            CellRole::Wall => "wall",
            CellRole::Cost => "cost",
        })
    }
}

/// Errors raised while configuring a grid, heuristic or strategy.
///
/// None of these can happen once a search is running.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("a {width}x{height} grid has more cells than fit in memory")]
    GridTooLarge { width: usize, height: usize },
    #[error("grid has no {0} cell")]
    MissingEndpoint(CellRole),
    #[error("{role} cell {state} is outside the {width}x{height} grid")]
    OutOfBounds {
        role: CellRole,
        state: State,
        width: usize,
        height: usize,
    },
    #[error("{role} cell {state} is a wall")]
    Blocked { role: CellRole, state: State },
    #[error("cell {state} has cost {cost}, costs must be finite and positive")]
    InvalidCost { state: State, cost: Cost },
    #[error("default cell cost {0} must be finite and positive")]
    InvalidDefaultCost(Cost),
    #[error("unknown action label `{0}`, expected one of up, down, left, right")]
    UnknownAction(String),
    #[error("action `{0}` is ranked more than once")]
    DuplicateAction(Action),
    #[error("action ranking is missing `{0}`")]
    MissingAction(Action),
    #[error("unknown search strategy `{0}`, expected one of bfs, dfs, ucs, gbfs, astar")]
    UnknownStrategy(String),
}
