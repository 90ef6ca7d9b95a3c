mod refimpl;

use gridsearch::{manhattan, ActionRank, Grid, GridBuilder, Heuristic, SearchOutcome, State, Strategy};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use movingai::{Coords2D, Map2D as _};
use movingai::{MovingAiMap, SceneRecord};

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    ActionRank,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// The path to a .scen file from moving AI, or a directory of .scen files
    scenario: PathBuf,
    /// Maps directory
    #[arg(long)]
    maps: PathBuf,
    /// Comma separated strategies to run: bfs, dfs, ucs, gbfs, astar. All of them by default.
    #[arg(long = "strategy", value_delimiter = ',')]
    strategies: Vec<Strategy>,
    /// Heuristic for gbfs and astar
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,
    /// Action ranking for the action-rank heuristic, best first
    #[arg(long, value_delimiter = ',', default_value = "up,down,left,right")]
    action_order: Vec<String>,
    #[arg(long)]
    output_map: Option<PathBuf>,
    /// Write the map and both paths of every mismatching scenario to dump/
    #[arg(long)]
    dump_failures: bool,
}

// Moving AI coordinates are (x, y), grid states are (row, col).
fn to_state((x, y): Coords2D) -> State {
    State::new(y, x)
}

mod dbg {
    use super::*;
    use anyhow::Context as _;

    pub fn dump_map_format(grid: &Grid, filepath: &Path) -> anyhow::Result<()> {
        dump_map_with_paths(grid, None, None, filepath)
    }

    pub fn dump_map_with_paths(
        grid: &Grid,
        computed_path: Option<&[State]>,
        reference_path: Option<&[State]>,
        filepath: &Path,
    ) -> anyhow::Result<()> {
        let width = grid.width();
        let mut data = vec!['.'; grid.len()];

        for w in grid.walls() {
            data[w.col + width * w.row] = 'T';
        }

        if let Some(computed_path) = computed_path {
            for s in computed_path {
                data[s.col + width * s.row] = '/';
            }
        }

        if let Some(reference_path) = reference_path {
            for s in reference_path {
                let entry = &mut data[s.col + width * s.row];
                if *entry == '/' {
                    *entry = 'X';
                } else {
                    *entry = '\\';
                }
            }
        }

        let mut contents = String::with_capacity(grid.len() + grid.height());
        for row in data.chunks(width) {
            contents.extend(row);
            contents.push('\n');
        }

        std::fs::write(filepath, contents)
            .with_context(|| format!("Bad path: {}", filepath.display()))
    }

    pub fn dump_failed_scenario(
        scenario_idx: usize,
        strategy: Strategy,
        grid: &Grid,
        outcome: &SearchOutcome,
        reference: Option<&[State]>,
    ) -> anyhow::Result<()> {
        let dump_dir = PathBuf::from(format!("dump/{scenario_idx}-{strategy}"));
        std::fs::create_dir_all(&dump_dir)
            .with_context(|| format!("Failed to create {}", dump_dir.display()))?;

        std::fs::write(dump_dir.join("refpath.txt"), format!("{:#?}", reference))?;

        let result_path = outcome.solution().map(|s| s.states());
        std::fs::write(dump_dir.join("failpath.txt"), format!("{:#?}", result_path))?;

        dump_map_with_paths(
            grid,
            result_path.as_deref(),
            reference,
            &dump_dir.join("failmap.txt"),
        )
    }
}

#[derive(Debug, Default)]
struct Totals {
    solved: usize,
    unsolved: usize,
    mismatches: usize,
    explored: usize,
    expanded: usize,
    elapsed: Duration,
}

/// Why a strategy's outcome disagrees with the reference, if it does
fn check(
    strategy: Strategy,
    grid: &Grid,
    outcome: &SearchOutcome,
    reference_cost: Option<f64>,
) -> Option<String> {
    match (outcome, reference_cost) {
        (SearchOutcome::NoSolution(_), None) => None,
        (SearchOutcome::NoSolution(_), Some(expected)) => {
            Some(format!("no path found, expected length {expected}"))
        }
        (SearchOutcome::Solution(_), None) => Some("found a path the reference did not".into()),
        (SearchOutcome::Solution(s), Some(expected)) => {
            if grid.walk(s.actions()) != Some(grid.goal()) {
                return Some("path does not replay to the goal".into());
            }
            // Every cell costs 1, so fewest moves is also cheapest.
            let optimal = strategy.is_cost_optimal() || strategy == Strategy::BreadthFirst;
            let cost = s.cost() as f64;
            let diff = (expected - cost).abs();
            if optimal && diff > 0.001 {
                Some(format!(
                    "shortest path mismatch. Expected length {expected}, got {cost}, diff {diff}"
                ))
            } else {
                None
            }
        }
    }
}

struct Run<'a> {
    strategies: &'a [Strategy],
    heuristic: &'a dyn Heuristic,
    dump_failures: bool,
    totals: Vec<Totals>,
}

impl Run<'_> {
    fn run_single_scenario(
        &mut self,
        scenario_idx: usize,
        scenario: &SceneRecord,
        base: &GridBuilder,
        raw_map: &MovingAiMap,
        pg: &indicatif::ProgressBar,
    ) -> anyhow::Result<()> {
        let grid = match base
            .clone()
            .start(to_state(scenario.start_pos))
            .goal(to_state(scenario.goal_pos))
            .build()
        {
            Ok(grid) => grid,
            Err(e) => {
                pg.println(format!("[{scenario_idx}] skipped: {e}"));
                return Ok(());
            }
        };

        let reference = refimpl::shortest_path(raw_map, scenario.start_pos, scenario.goal_pos);
        let reference_states: Option<Vec<State>> = reference
            .as_ref()
            .map(|(path, _)| path.iter().copied().map(to_state).collect());

        for (&strategy, totals) in self.strategies.iter().zip(&mut self.totals) {
            let start = Instant::now();
            let outcome = strategy.search(&grid, self.heuristic);
            totals.elapsed += start.elapsed();
            totals.explored += outcome.nodes_explored();
            totals.expanded += outcome.expanded();
            if outcome.is_solution() {
                totals.solved += 1;
            } else {
                totals.unsolved += 1;
            }

            if let Some(reason) = check(strategy, &grid, &outcome, reference.as_ref().map(|r| r.1)) {
                totals.mismatches += 1;
                pg.println(format!(
                    "[{scenario_idx}] {strategy}: {reason}. Start: {:?}, End: {:?}",
                    scenario.start_pos, scenario.goal_pos,
                ));
                if self.dump_failures {
                    dbg::dump_failed_scenario(
                        scenario_idx,
                        strategy,
                        &grid,
                        &outcome,
                        reference_states.as_deref(),
                    )?;
                }
            }
        }

        Ok(())
    }

    fn run_for_scenario_file(
        &mut self,
        scenario: &Path,
        maps: &Path,
        output_map: Option<&Path>,
    ) -> anyhow::Result<()> {
        let (scenarios, first_map) = parse_scenario_file(scenario)?;
        let path = maps.join(&first_map);

        let raw_map = movingai::parser::parse_map_file(&path)
            .with_context(|| format!("Failed to parse map {}", path.display()))?;
        let walls: Vec<State> = raw_map
            .coords()
            .filter(|&c| !raw_map.is_traversable(c))
            .map(to_state)
            .collect();
        let base = Grid::builder(raw_map.width(), raw_map.height()).walls(walls);

        if let Some(o) = output_map {
            let coords = raw_map.coords().find(|&c| raw_map.is_traversable(c));
            if let Some(cell) = coords.map(to_state) {
                let grid = base.clone().start(cell).goal(cell).build()?;
                dbg::dump_map_format(&grid, o)?;
            }
        }

        println!("Scenario count: {}", scenarios.len());
        println!("Grid size: {}x{}", raw_map.width(), raw_map.height());
        let pg = indicatif::ProgressBar::new(scenarios.len() as u64);
        for (scenario_idx, scenario) in scenarios.iter().enumerate() {
            pg.inc(1);
            self.run_single_scenario(scenario_idx, scenario, &base, &raw_map, &pg)?;
        }
        pg.finish_and_clear();
        Ok(())
    }
}

fn parse_scenario_file(file: &Path) -> anyhow::Result<(Vec<SceneRecord>, String)> {
    let scenarios = movingai::parser::parse_scen_file(file)
        .with_context(|| format!("Failed to parse scenarios {}", file.display()))?;
    let first_map = scenarios
        .first()
        .map(|s| s.map_file.clone())
        .with_context(|| format!("No scenarios in {}", file.display()))?;
    let same = scenarios.iter().all(|s| s.map_file == first_map);
    anyhow::ensure!(
        same,
        "All maps are not the same as {first_map} in {scenario}",
        scenario = file.display()
    );
    Ok((scenarios, first_map))
}

fn print_totals(run: &Run) {
    println!(
        "{:<6} {:>8} {:>8} {:>10} {:>12} {:>12} {:>10}",
        "", "solved", "unsolved", "mismatches", "explored", "expanded", "time (s)"
    );
    for (strategy, t) in run.strategies.iter().zip(&run.totals) {
        println!(
            "{:<6} {:>8} {:>8} {:>10} {:>12} {:>12} {:>10.3}",
            strategy.short_name(),
            t.solved,
            t.unsolved,
            t.mismatches,
            t.explored,
            t.expanded,
            t.elapsed.as_secs_f32()
        );
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let start = Instant::now();

    let strategies = if cli.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        cli.strategies.clone()
    };
    let heuristic: Box<dyn Heuristic> = match cli.heuristic {
        HeuristicArg::Manhattan => Box::new(manhattan),
        HeuristicArg::ActionRank => Box::new(ActionRank::from_labels(&cli.action_order)?),
    };
    tracing::info!(?strategies, heuristic = ?cli.heuristic, "configured");

    let mut run = Run {
        strategies: &strategies,
        heuristic: heuristic.as_ref(),
        dump_failures: cli.dump_failures,
        totals: strategies.iter().map(|_| Totals::default()).collect(),
    };

    let path = &cli.scenario;
    if path.is_dir() {
        let itr = std::fs::read_dir(path)
            .with_context(|| format!("Failed to read directory {}", path.display()))?;
        for entry in itr {
            let entry = entry.context("Failed to read path")?;
            if entry.file_name().to_string_lossy().ends_with(".scen") {
                println!(
                    "Running for scenarios in {p}. (cargo run --release -- {p} --maps {m})",
                    p = entry.path().display(),
                    m = cli.maps.display(),
                );
                run.run_for_scenario_file(&entry.path(), &cli.maps, cli.output_map.as_deref())?;
            }
        }
    } else {
        run.run_for_scenario_file(path, &cli.maps, cli.output_map.as_deref())?;
    }

    print_totals(&run);
    println!("Took {} s to run", start.elapsed().as_secs_f32());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}
