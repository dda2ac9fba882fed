use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::grid::{Cell, Grid, Position};

/// Cells the injector must never wall: the run's endpoints and wherever the
/// agent currently stands.
#[derive(Debug, Clone, Copy)]
pub struct Protected {
    pub start: Position,
    pub target: Position,
    pub agent: Position,
}

impl Protected {
    pub fn contains(&self, pos: Position) -> bool {
        pos == self.start || pos == self.target || pos == self.agent
    }
}

/// Environment mutation seam. The engine calls this once per expansion step
/// and once per movement step; tests substitute scripted implementations.
pub trait DynamicWalls {
    fn maybe_inject(&mut self, grid: &mut Grid, protected: &Protected);
}

const INJECTION_ATTEMPTS: usize = 1000;

/// Walls a uniformly random eligible cell with fixed probability per
/// invocation. Failing to find an eligible cell within the attempt budget is
/// not an error; the invocation just does nothing.
pub struct ObstacleInjector {
    probability: f64,
    rng: StdRng,
}

impl ObstacleInjector {
    pub fn new(probability: f64, rng: StdRng) -> Self {
        ObstacleInjector { probability, rng }
    }
}

impl DynamicWalls for ObstacleInjector {
    fn maybe_inject(&mut self, grid: &mut Grid, protected: &Protected) {
        if self.rng.gen::<f64>() >= self.probability {
            return;
        }

        for _ in 0..INJECTION_ATTEMPTS {
            let pos = Position::new(
                self.rng.gen_range(0..grid.rows),
                self.rng.gen_range(0..grid.cols),
            );
            if grid.get(pos) == Cell::Empty && !protected.contains(pos) {
                grid.set_wall(pos);
                debug!("dynamic wall at ({}, {})", pos.row, pos.col);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn protected_for(grid: &Grid) -> Protected {
        Protected {
            start: grid.start,
            target: grid.target,
            agent: grid.start,
        }
    }

    #[test]
    fn test_never_walls_protected_cells() {
        let mut grid = Grid::empty(3, 3, Position::new(0, 0), Position::new(2, 2));
        let agent = Position::new(1, 1);
        let protected = Protected {
            start: grid.start,
            target: grid.target,
            agent,
        };
        let mut injector = ObstacleInjector::new(1.0, StdRng::seed_from_u64(99));

        for _ in 0..200 {
            injector.maybe_inject(&mut grid, &protected);
        }

        assert!(!grid.is_wall(grid.start));
        assert!(!grid.is_wall(grid.target));
        assert!(!grid.is_wall(agent));
    }

    #[test]
    fn test_probability_one_places_a_wall() {
        let mut grid = Grid::empty(4, 4, Position::new(0, 0), Position::new(3, 3));
        let protected = protected_for(&grid);
        let mut injector = ObstacleInjector::new(1.0, StdRng::seed_from_u64(5));

        injector.maybe_inject(&mut grid, &protected);

        let walls = (0..4)
            .flat_map(|r| (0..4).map(move |c| Position::new(r, c)))
            .filter(|&p| grid.is_wall(p))
            .count();
        assert_eq!(walls, 1);
    }

    #[test]
    fn test_probability_zero_never_mutates() {
        let mut grid = Grid::empty(4, 4, Position::new(0, 0), Position::new(3, 3));
        let protected = protected_for(&grid);
        let mut injector = ObstacleInjector::new(0.0, StdRng::seed_from_u64(5));

        for _ in 0..100 {
            injector.maybe_inject(&mut grid, &protected);
        }

        for r in 0..4 {
            for c in 0..4 {
                assert!(!grid.is_wall(Position::new(r, c)));
            }
        }
    }

    #[test]
    fn test_gives_up_silently_when_grid_is_full() {
        // Every non-protected cell already walled: the roll has nowhere to go.
        let mut grid = Grid::empty(2, 2, Position::new(0, 0), Position::new(1, 1));
        grid.set_wall(Position::new(0, 1));
        grid.set_wall(Position::new(1, 0));
        let protected = protected_for(&grid);
        let mut injector = ObstacleInjector::new(1.0, StdRng::seed_from_u64(5));

        injector.maybe_inject(&mut grid, &protected);

        assert!(!grid.is_wall(grid.start));
        assert!(!grid.is_wall(grid.target));
    }
}
