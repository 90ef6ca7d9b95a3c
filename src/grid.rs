use crate::{Action, CellRole, ConfigError, Cost, State, StateSet};

/// A validated, immutable 4-connected grid.
///
/// Start and goal are always in bounds and never walls, and every cell has a finite,
/// positive cost.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    start: State,
    goal: State,
    costs: Vec<Cost>,
    walls: StateSet,
}

impl Grid {
    pub fn builder(width: usize, height: usize) -> GridBuilder {
        GridBuilder::new(width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, walls included
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn goal(&self) -> State {
        self.goal
    }

    pub fn in_bounds(&self, s: State) -> bool {
        s.row < self.height && s.col < self.width
    }

    pub fn is_wall(&self, s: State) -> bool {
        self.in_bounds(s) && self.walls.has(s)
    }

    pub fn is_passable(&self, s: State) -> bool {
        self.in_bounds(s) && !self.walls.has(s)
    }

    pub fn walls(&self) -> impl Iterator<Item = State> + '_ {
        self.walls.iter()
    }

    /// The cost charged for moving into `s`.
    ///
    /// # Panics
    ///
    /// If `s` is out of bounds. Every state yielded by [`Grid::neighbors`] is in bounds.
    pub fn cost(&self, s: State) -> Cost {
        assert!(self.in_bounds(s), "{s} is outside the grid");
        self.costs[s.row * self.width + s.col]
    }

    /// Passable cells adjacent to `s`, in the order of [`Action::ALL`]
    pub fn neighbors(&self, s: State) -> impl Iterator<Item = (Action, State)> + '_ {
        Action::ALL.into_iter().filter_map(move |action| {
            let next = s.step(action)?;
            self.is_passable(next).then_some((action, next))
        })
    }

    /// Replay `actions` from the start cell.
    ///
    /// Returns the cell reached, or `None` if any move leaves the grid or enters a wall.
    pub fn walk(&self, actions: impl IntoIterator<Item = Action>) -> Option<State> {
        actions.into_iter().try_fold(self.start, |cur, action| {
            self.neighbors(cur)
                .find(|&(a, _)| a == action)
                .map(|(_, next)| next)
        })
    }
}

/// Collects grid configuration and validates it in [`GridBuilder::build`]
#[derive(Debug, Clone)]
pub struct GridBuilder {
    width: usize,
    height: usize,
    start: Option<State>,
    goal: Option<State>,
    default_cost: Cost,
    costs: Vec<(State, Cost)>,
    walls: Vec<State>,
}

impl GridBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start: None,
            goal: None,
            default_cost: 1.0,
            costs: Vec::new(),
            walls: Vec::new(),
        }
    }

    pub fn start(mut self, s: impl Into<State>) -> Self {
        self.start = Some(s.into());
        self
    }

    pub fn goal(mut self, s: impl Into<State>) -> Self {
        self.goal = Some(s.into());
        self
    }

    /// Cost of every cell without an explicit [`GridBuilder::cost`]. Defaults to 1.
    pub fn default_cost(mut self, cost: Cost) -> Self {
        self.default_cost = cost;
        self
    }

    pub fn cost(mut self, s: impl Into<State>, cost: Cost) -> Self {
        self.costs.push((s.into(), cost));
        self
    }

    pub fn wall(mut self, s: impl Into<State>) -> Self {
        self.walls.push(s.into());
        self
    }

    pub fn walls<S: Into<State>>(mut self, walls: impl IntoIterator<Item = S>) -> Self {
        self.walls.extend(walls.into_iter().map(Into::into));
        self
    }

    fn check_bounds(&self, role: CellRole, state: State) -> Result<State, ConfigError> {
        if state.row < self.height && state.col < self.width {
            Ok(state)
        } else {
            Err(ConfigError::OutOfBounds {
                role,
                state,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn build(self) -> Result<Grid, ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        let cells = width
            .checked_mul(height)
            .ok_or(ConfigError::GridTooLarge { width, height })?;
        if !valid_cost(self.default_cost) {
            return Err(ConfigError::InvalidDefaultCost(self.default_cost));
        }

        let start = self.start.ok_or(ConfigError::MissingEndpoint(CellRole::Start))?;
        let start = self.check_bounds(CellRole::Start, start)?;
        let goal = self.goal.ok_or(ConfigError::MissingEndpoint(CellRole::Goal))?;
        let goal = self.check_bounds(CellRole::Goal, goal)?;

        let mut walls = StateSet::with_capacity(width, cells);
        for &w in &self.walls {
            walls.add(self.check_bounds(CellRole::Wall, w)?);
        }
        for (role, state) in [(CellRole::Start, start), (CellRole::Goal, goal)] {
            if walls.has(state) {
                return Err(ConfigError::Blocked { role, state });
            }
        }

        let mut costs = vec![self.default_cost; cells];
        for &(state, cost) in &self.costs {
            let state = self.check_bounds(CellRole::Cost, state)?;
            if !valid_cost(cost) {
                return Err(ConfigError::InvalidCost { state, cost });
            }
            costs[state.row * width + state.col] = cost;
        }

        Ok(Grid {
            width,
            height,
            start,
            goal,
            costs,
            walls,
        })
    }
}

fn valid_cost(c: Cost) -> bool {
    c.is_finite() && c > 0.0
}

/// Grids drawn as text, one string per row.
///
/// `S` start, `G` goal, `#` wall, `.` cost 1, `1`-`9` that cost.
#[cfg(test)]
pub(crate) fn from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut builder = Grid::builder(width, height);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), width, "ragged row {row}");
        for (col, c) in line.chars().enumerate() {
            let s = State::new(row, col);
            builder = match c {
                'S' => builder.start(s),
                'G' => builder.goal(s),
                '#' => builder.wall(s),
                '.' => builder,
                d if d.is_ascii_digit() => builder.cost(s, d.to_digit(10).unwrap() as Cost),
                other => panic!("unexpected cell {other:?}"),
            };
        }
    }
    builder.build().expect("test grid should be valid")
}

#[cfg(test)]
mod test {
    use super::from_rows;
    use crate::{Action, CellRole, ConfigError, Grid, State};

    #[test]
    fn neighbors_in_row_major_order() {
        let g = Grid::builder(3, 3).start((1, 1)).goal((0, 0)).build().unwrap();
        let n: Vec<(Action, State)> = g.neighbors(State::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![
                (Action::Up, State::new(0, 1)),
                (Action::Left, State::new(1, 0)),
                (Action::Right, State::new(1, 2)),
                (Action::Down, State::new(2, 1)),
            ]
        );
    }

    #[test]
    fn neighbors_skip_edges_and_walls() {
        let g = from_rows(&["S#", ".G"]);
        let n: Vec<(Action, State)> = g.neighbors(State::new(0, 0)).collect();
        assert_eq!(n, vec![(Action::Down, State::new(1, 0))]);
        assert!(g.is_wall(State::new(0, 1)));
        assert!(!g.is_passable(State::new(0, 1)));
        assert!(!g.is_passable(State::new(2, 0)));
    }

    #[test]
    fn costs_default_and_override() {
        let g = from_rows(&["S9", "3G"]);
        assert_eq!(g.cost(State::new(0, 0)), 1.0);
        assert_eq!(g.cost(State::new(0, 1)), 9.0);
        assert_eq!(g.cost(State::new(1, 0)), 3.0);

        let g = Grid::builder(2, 1)
            .start((0, 0))
            .goal((0, 1))
            .default_cost(2.5)
            .build()
            .unwrap();
        assert_eq!(g.cost(State::new(0, 1)), 2.5);
    }

    #[test]
    #[should_panic(expected = "is outside the grid")]
    fn cost_outside_the_grid_panics() {
        let g = from_rows(&["SG"]);
        g.cost(State::new(1, 0));
    }

    #[test]
    fn walk_replays_moves() {
        let g = from_rows(&["S.", "#G"]);
        assert_eq!(g.walk([Action::Right, Action::Down]), Some(State::new(1, 1)));
        assert_eq!(g.walk([Action::Down]), None);
        assert_eq!(g.walk([Action::Up]), None);
        assert_eq!(g.walk(std::iter::empty()), Some(g.start()));
    }

    #[test]
    fn rejects_empty_grid() {
        let err = Grid::builder(0, 3).start((0, 0)).goal((0, 0)).build();
        assert_eq!(
            err.unwrap_err(),
            ConfigError::EmptyGrid {
                width: 0,
                height: 3
            }
        );
    }

    #[test]
    fn rejects_grids_too_large_to_index() {
        let err = Grid::builder(usize::MAX, 2)
            .start((0, 0))
            .goal((0, 1))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::GridTooLarge {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn rejects_missing_endpoints() {
        let err = Grid::builder(2, 2).goal((0, 0)).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingEndpoint(CellRole::Start));
        let err = Grid::builder(2, 2).start((0, 0)).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingEndpoint(CellRole::Goal));
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let err = Grid::builder(2, 2)
            .start((0, 0))
            .goal((2, 0))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::OutOfBounds {
                role: CellRole::Goal,
                state: State::new(2, 0),
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn rejects_blocked_endpoints() {
        let err = Grid::builder(2, 2)
            .start((0, 0))
            .goal((1, 1))
            .wall((0, 0))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Blocked {
                role: CellRole::Start,
                state: State::new(0, 0)
            }
        );
        assert!(err.to_string().contains("start cell (0, 0) is a wall"));
    }

    #[test]
    fn rejects_bad_costs() {
        for cost in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = Grid::builder(2, 1)
                .start((0, 0))
                .goal((0, 1))
                .cost((0, 1), cost)
                .build();
            assert!(
                matches!(err, Err(ConfigError::InvalidCost { .. })),
                "{cost} accepted"
            );
        }
        let err = Grid::builder(2, 1)
            .start((0, 0))
            .goal((0, 1))
            .default_cost(0.0)
            .build();
        assert_eq!(err.unwrap_err(), ConfigError::InvalidDefaultCost(0.0));
    }

    #[test]
    fn rejects_out_of_bounds_walls() {
        let err = Grid::builder(2, 1)
            .start((0, 0))
            .goal((0, 1))
            .walls([(0, 5)])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfBounds {
                role: CellRole::Wall,
                ..
            }
        ));
    }
}
