use clap::Parser;

use dynamic_search::config::Config;
use dynamic_search::simulation::Simulation;

fn main() {
    env_logger::init();
    let config = Config::parse();

    println!("Starting grid search simulation...");
    println!("Grid size: {}x{}", config.rows, config.cols);
    println!(
        "Algorithm: {} | Scenario: {}",
        config.algorithm, config.scenario
    );

    if config.no_visualization {
        println!("Visualization disabled - running in fast mode");
    } else {
        println!("Visualization enabled with {}ms delay", config.delay_ms);
        println!("Press Ctrl+C to stop the simulation");
    }
    println!();

    if config.algorithm == "all" {
        match Simulation::run_all_algorithms(config) {
            Ok(results) => Simulation::print_comparison_results(&results),
            Err(e) => {
                eprintln!("Comparison failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Simulation::new(config) {
            Ok(mut simulation) => {
                let (stats, _outcome) = simulation.run();
                println!("\n=== FINAL RESULTS ===");
                print!("{}", stats);
            }
            Err(e) => {
                eprintln!("Failed to set up simulation: {}", e);
                std::process::exit(1);
            }
        }
    }
}
