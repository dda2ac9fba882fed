use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::{travel, Agent, TravelOutcome};
use crate::config::Config;
use crate::error::SimulationError;
use crate::grid::{Grid, Scenario};
use crate::injector::ObstacleInjector;
use crate::search::{strategy_for_name, SearchContext, SearchRun, SearchStrategy, ALGORITHM_NAMES};
use crate::statistics::{optimal_path_length, Statistics};
use crate::view::TerminalView;

#[derive(Debug)]
pub struct AlgorithmResult {
    pub name: String,
    pub statistics: Statistics,
    pub outcome: TravelOutcome,
}

/// One full run: scenario setup, initial search, then agent movement with
/// replanning, all observed through a terminal view.
pub struct Simulation {
    grid: Grid,
    agent: Agent,
    strategy: Box<dyn SearchStrategy>,
    injector: ObstacleInjector,
    config: Config,
    stats: Statistics,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, SimulationError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let scenario = Scenario::parse(&config.scenario)?;
        let grid = Grid::generate(
            config.rows,
            config.cols,
            scenario,
            config.static_wall_prob,
            &mut rng,
        )?;
        let strategy = strategy_for_name(&config.algorithm, config.depth_limit, config.max_depth)?;
        // The injector draws from its own stream so a fixed seed reproduces
        // both the layout and the injection sequence.
        let injector = ObstacleInjector::new(config.dynamic_wall_prob, StdRng::seed_from_u64(rng.gen()));
        let stats = Statistics::new(&config.algorithm, optimal_path_length(&grid));
        let agent = Agent::new(grid.start);

        info!(
            "scenario {} on {}x{}: start ({}, {}), target ({}, {})",
            config.scenario,
            config.rows,
            config.cols,
            grid.start.row,
            grid.start.col,
            grid.target.row,
            grid.target.col
        );

        Ok(Simulation {
            grid,
            agent,
            strategy,
            injector,
            config,
            stats,
        })
    }

    pub fn run(&mut self) -> (Statistics, TravelOutcome) {
        let mut view = TerminalView::new(
            !self.config.no_visualization,
            self.config.delay_ms,
            self.config.step_budget,
        );
        let start = self.grid.start;
        let target = self.grid.target;

        let search_started = Instant::now();
        let mut ctx = SearchContext::new(
            &mut self.grid,
            &mut self.injector,
            &mut view,
            self.agent.position,
        );
        let path = self.strategy.search(&mut ctx, start, target);
        self.stats.search_time = search_started.elapsed();
        self.stats.initial_path_length = path.len();

        if !path.is_empty() {
            let done = SearchRun::new();
            let label = format!("{} (path found)", self.strategy.name());
            ctx.render(&done, &path, &label);
        }

        let report = travel(&mut ctx, &mut self.agent, self.strategy.as_mut(), path);

        self.stats.steps = view.steps;
        self.stats.total_moves = report.moves;
        self.stats.replans = report.replans;
        self.stats.reached_target = report.outcome == TravelOutcome::ReachedTarget;
        self.stats.calculate_efficiency();

        if !self.config.quiet {
            match report.outcome {
                TravelOutcome::ReachedTarget => println!("Target reached in {} moves", report.moves),
                TravelOutcome::Stranded => println!(
                    "Agent stranded at ({}, {})",
                    self.agent.position.row, self.agent.position.col
                ),
            }
        }

        (self.stats.clone(), report.outcome)
    }

    /// Runs every strategy against the same seeded environment: identical
    /// layout and identical injection stream, so the comparison isolates
    /// the algorithms.
    pub fn run_all_algorithms(config: Config) -> Result<Vec<AlgorithmResult>, SimulationError> {
        let run_seed = config.seed.unwrap_or_else(rand::random);
        println!("Environment seed: {} (for reproducibility)", run_seed);

        let mut results = Vec::new();
        for (i, name) in ALGORITHM_NAMES.iter().enumerate() {
            println!(
                "Running algorithm {} of {}: {}",
                i + 1,
                ALGORITHM_NAMES.len(),
                name
            );

            let mut algorithm_config = config.clone();
            algorithm_config.algorithm = name.to_string();
            algorithm_config.seed = Some(run_seed);
            algorithm_config.no_visualization = true;
            algorithm_config.quiet = true;

            let mut simulation = Simulation::new(algorithm_config)?;
            let (statistics, outcome) = simulation.run();
            results.push(AlgorithmResult {
                name: name.to_string(),
                statistics,
                outcome,
            });
        }
        Ok(results)
    }

    pub fn print_comparison_results(results: &[AlgorithmResult]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===\n");
        println!(
            "{:<15} {:<8} {:<8} {:<8} {:<8} {:<9} {:<12} {:<14}",
            "Algorithm", "Reached", "Moves", "Replans", "Steps", "Optimal", "Efficiency", "Search Time"
        );
        println!("{}", "-".repeat(88));

        for result in results {
            let reached = if result.outcome == TravelOutcome::ReachedTarget {
                "yes"
            } else {
                "no"
            };
            let optimal = match result.statistics.optimal_path_length {
                Some(len) => len.to_string(),
                None => "-".to_string(),
            };
            let efficiency = format!("{:.3}", result.statistics.route_efficiency);
            let search_time = format!("{:.2?}", result.statistics.search_time);
            println!(
                "{:<15} {:<8} {:<8} {:<8} {:<8} {:<9} {:<12} {:<14}",
                result.name,
                reached,
                result.statistics.total_moves,
                result.statistics.replans,
                result.statistics.steps,
                optimal,
                efficiency,
                search_time
            );
        }

        let reached: Vec<&AlgorithmResult> = results
            .iter()
            .filter(|r| r.outcome == TravelOutcome::ReachedTarget)
            .collect();
        if let Some(best) = reached.iter().min_by_key(|r| r.statistics.total_moves) {
            println!(
                "\nBest by moves: {} ({} moves)",
                best.name, best.statistics.total_moves
            );
        } else {
            println!("\nNo algorithm reached the target.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config(args: &[&str]) -> Config {
        use clap::Parser;
        let mut full = vec!["dynamic_search", "--no-visualization", "--quiet"];
        full.extend_from_slice(args);
        Config::parse_from(full)
    }

    #[test]
    fn test_unknown_algorithm_is_an_error() {
        let config = quiet_config(&["--algorithm", "a_star"]);
        assert!(matches!(
            Simulation::new(config),
            Err(SimulationError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_unknown_scenario_is_an_error() {
        let config = quiet_config(&["--scenario", "maze"]);
        assert!(matches!(
            Simulation::new(config),
            Err(SimulationError::UnknownScenario(_))
        ));
    }

    #[test]
    fn test_best_scenario_reaches_without_injection() {
        let config = quiet_config(&[
            "--scenario",
            "best",
            "--rows",
            "8",
            "--cols",
            "8",
            "--dynamic-wall-prob",
            "0.0",
            "--seed",
            "3",
        ]);
        let mut simulation = Simulation::new(config).unwrap();
        let (stats, outcome) = simulation.run();
        assert_eq!(outcome, TravelOutcome::ReachedTarget);
        assert_eq!(stats.total_moves, 2);
        assert_eq!(stats.replans, 0);
        assert!(stats.reached_target);
    }

    #[test]
    fn test_step_budget_cancels_initial_search() {
        let config = quiet_config(&[
            "--scenario",
            "best",
            "--rows",
            "8",
            "--cols",
            "8",
            "--dynamic-wall-prob",
            "0.0",
            "--seed",
            "3",
            "--step-budget",
            "0",
        ]);
        let mut simulation = Simulation::new(config).unwrap();
        let (stats, outcome) = simulation.run();
        assert_eq!(outcome, TravelOutcome::Stranded);
        assert_eq!(stats.initial_path_length, 0);
    }

    #[test]
    fn test_comparison_covers_all_six() {
        let config = quiet_config(&[
            "--scenario",
            "best",
            "--rows",
            "6",
            "--cols",
            "6",
            "--dynamic-wall-prob",
            "0.0",
            "--seed",
            "11",
        ]);
        let results = Simulation::run_all_algorithms(config).unwrap();
        assert_eq!(results.len(), 6);
        for result in &results {
            assert_eq!(result.outcome, TravelOutcome::ReachedTarget, "{}", result.name);
        }
    }
}
