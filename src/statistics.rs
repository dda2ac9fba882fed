use std::fmt;
use std::time::Duration;

use crate::grid::Grid;

/// Shortest path length in edges on the current grid state, computed with
/// an independent library breadth-first search. Used as the baseline for
/// route efficiency; `None` when the target is unreachable.
pub fn optimal_path_length(grid: &Grid) -> Option<usize> {
    pathfinding::prelude::bfs(&grid.start, |&p| grid.neighbors(p), |&p| p == grid.target)
        .map(|path| path.len() - 1)
}

#[derive(Debug, Clone)]
pub struct Statistics {
    pub algorithm: String,
    pub optimal_path_length: Option<usize>,
    pub initial_path_length: usize,
    pub total_moves: usize,
    pub replans: usize,
    pub steps: usize,
    pub search_time: Duration,
    pub reached_target: bool,
    pub route_efficiency: f64,
}

impl Statistics {
    pub fn new(algorithm: &str, optimal_path_length: Option<usize>) -> Self {
        Statistics {
            algorithm: algorithm.to_string(),
            optimal_path_length,
            initial_path_length: 0,
            total_moves: 0,
            replans: 0,
            steps: 0,
            search_time: Duration::ZERO,
            reached_target: false,
            route_efficiency: 0.0,
        }
    }

    /// Moves actually taken over the pre-injection optimal; 1.0 means the
    /// agent lost nothing to dynamic walls.
    pub fn calculate_efficiency(&mut self) {
        match self.optimal_path_length {
            Some(optimal) if optimal > 0 && self.total_moves > 0 => {
                self.route_efficiency = self.total_moves as f64 / optimal as f64;
            }
            _ => self.route_efficiency = 0.0,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Reached target: {}", if self.reached_target { "yes" } else { "no" })?;
        match self.optimal_path_length {
            Some(optimal) => writeln!(f, "Optimal path length (static): {}", optimal)?,
            None => writeln!(f, "Optimal path length (static): unreachable")?,
        }
        writeln!(f, "Initial path length: {}", self.initial_path_length)?;
        writeln!(f, "Total moves: {}", self.total_moves)?;
        writeln!(f, "Replans: {}", self.replans)?;
        writeln!(f, "Observed steps: {}", self.steps)?;
        writeln!(f, "Initial search time: {:.2?}", self.search_time)?;
        if self.route_efficiency > 0.0 {
            writeln!(f, "Route efficiency: {:.3}", self.route_efficiency)?;
        }
        Ok(())
    }
}
