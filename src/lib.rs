//! Search strategies for 4-connected weighted grids.
//!
//! A [`Grid`] is built and validated once with [`Grid::builder`], then handed to one of
//! the strategies:
//!
//! | Strategy | Frontier | Guarantee |
//! |---|---|---|
//! | [`bfs`] | FIFO queue | fewest moves |
//! | [`dfs`] | LIFO stack | none |
//! | [`ucs`] | priority on g | minimum cost |
//! | [`gbfs`] | priority on h | none |
//! | [`a_star`] | priority on g + h | minimum cost if h is admissible |
//!
//! Every strategy returns a [`SearchOutcome`]. Not finding a path is a normal outcome
//! ([`NoSolution`]), not an error.

use std::str::FromStr;

mod astar;
mod best_first;
mod bfs;
mod dfs;
mod error;
mod frontier;
mod gbfs;
mod grid;
mod heuristic;
mod map;
mod node;
mod set;
mod solution;
mod strategy;
mod ucs;

pub use astar::a_star;
pub use bfs::bfs;
pub use dfs::dfs;
pub use error::{CellRole, ConfigError};
pub use frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use gbfs::gbfs;
pub use grid::{Grid, GridBuilder};
pub use heuristic::{manhattan, ActionRank, Heuristic, Zero};
pub use map::StateMap;
pub use node::{Node, NodeArena, NodeId};
pub use set::StateSet;
pub use solution::{Explored, NoSolution, SearchOutcome, Solution};
pub use strategy::Strategy;
pub use ucs::ucs;

/// Cost of entering a cell, and sums of such costs
pub type Cost = f32;

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub row: usize,
    pub col: usize,
}

impl State {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell one move away in direction `action`, if it does not underflow
    pub fn step(self, action: Action) -> Option<State> {
        let (dr, dc) = action.delta();
        Some(State {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl From<(usize, usize)> for State {
    fn from((row, col): (usize, usize)) -> Self {
        State { row, col }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 4-directional move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// In the row-major order of the cells they lead to
    pub const ALL: [Action; 4] = [Action::Up, Action::Left, Action::Right, Action::Down];

    /// (row, col) offset
    pub fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }

    pub fn reverse(self) -> Action {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Action::Up),
            "down" => Ok(Action::Down),
            "left" => Ok(Action::Left),
            "right" => Ok(Action::Right),
            _ => Err(ConfigError::UnknownAction(s.to_owned())),
        }
    }
}

/// One move of a path: the action taken and the cell it leads into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub action: Action,
    pub state: State,
}

pub type Path = Vec<Step>;
