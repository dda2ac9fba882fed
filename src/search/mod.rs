//! The six traversal strategies and the step-observation contract they
//! share. Every node expansion passes through a single suspension point, in
//! fixed order: cancellation check, environment mutation, rendering.

use std::ops::ControlFlow;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::SimulationError;
use crate::grid::{Grid, Position};
use crate::injector::{DynamicWalls, Protected};

pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dls;
pub mod iddfs;
pub mod path;
pub mod ucs;

pub use bfs::Bfs;
pub use bidirectional::Bidirectional;
pub use dfs::Dfs;
pub use dls::Dls;
pub use iddfs::Iddfs;
pub use ucs::Ucs;

/// Everything the host gets to see after one step: the sets the strategy is
/// working with, the route (walked prefix during movement, empty while a
/// search is in flight), the agent, and a label for the header line.
pub struct SearchSnapshot<'a> {
    pub grid: &'a Grid,
    pub frontier: &'a FxHashSet<Position>,
    pub explored: &'a FxHashSet<Position>,
    pub path: &'a [Position],
    pub agent: Position,
    pub label: &'a str,
}

/// Host-side hook driven at every suspension point. Cancellation is
/// cooperative: the engine asks, never the other way around.
pub trait SearchObserver {
    fn cancel_requested(&mut self) -> bool {
        false
    }

    fn observe(&mut self, snapshot: &SearchSnapshot<'_>);
}

/// Per-invocation search state. Created fresh for every search (including
/// each replan and each iterative-deepening attempt) and discarded once the
/// path is extracted. Frontier and explored are disjoint whenever the
/// observer runs; a parent edge is written once, at first discovery.
pub struct SearchRun {
    pub frontier: FxHashSet<Position>,
    pub explored: FxHashSet<Position>,
    pub parents: FxHashMap<Position, Option<Position>>,
}

impl SearchRun {
    pub fn new() -> Self {
        SearchRun {
            frontier: FxHashSet::default(),
            explored: FxHashSet::default(),
            parents: FxHashMap::default(),
        }
    }
}

impl Default for SearchRun {
    fn default() -> Self {
        Self::new()
    }
}

/// The world a strategy runs against: the mutable grid, the wall injector,
/// the observer, and the agent position the injector must keep clear.
pub struct SearchContext<'a> {
    pub grid: &'a mut Grid,
    pub walls: &'a mut dyn DynamicWalls,
    pub observer: &'a mut dyn SearchObserver,
    pub agent: Position,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        grid: &'a mut Grid,
        walls: &'a mut dyn DynamicWalls,
        observer: &'a mut dyn SearchObserver,
        agent: Position,
    ) -> Self {
        SearchContext {
            grid,
            walls,
            observer,
            agent,
        }
    }

    /// Cancellation check followed by one injection roll. `Break` means the
    /// caller must abandon its search or walk and return empty-handed.
    pub fn checkpoint(&mut self) -> ControlFlow<()> {
        if self.observer.cancel_requested() {
            return ControlFlow::Break(());
        }
        let protected = Protected {
            start: self.grid.start,
            target: self.grid.target,
            agent: self.agent,
        };
        self.walls.maybe_inject(self.grid, &protected);
        ControlFlow::Continue(())
    }

    pub fn render(&mut self, run: &SearchRun, path: &[Position], label: &str) {
        self.observer.observe(&SearchSnapshot {
            grid: self.grid,
            frontier: &run.frontier,
            explored: &run.explored,
            path,
            agent: self.agent,
            label,
        });
    }

    /// The per-expansion suspension point.
    pub fn step(&mut self, run: &SearchRun, label: &str) -> ControlFlow<()> {
        if self.checkpoint().is_break() {
            return ControlFlow::Break(());
        }
        self.render(run, &[], label);
        ControlFlow::Continue(())
    }
}

/// Common contract of the six algorithms. An empty path means exhaustion or
/// cancellation; the engine does not tell the two apart.
pub trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn search(
        &mut self,
        ctx: &mut SearchContext<'_>,
        start: Position,
        target: Position,
    ) -> Vec<Position>;
}

pub const ALGORITHM_NAMES: [&str; 6] = ["bfs", "dfs", "ucs", "dls", "iddfs", "bidirectional"];

pub fn strategy_for_name(
    name: &str,
    depth_limit: usize,
    max_depth: usize,
) -> Result<Box<dyn SearchStrategy>, SimulationError> {
    match name {
        "bfs" => Ok(Box::new(Bfs)),
        "dfs" => Ok(Box::new(Dfs)),
        "ucs" => Ok(Box::new(Ucs)),
        "dls" => Ok(Box::new(Dls::new(depth_limit))),
        "iddfs" => Ok(Box::new(Iddfs::new(max_depth))),
        "bidirectional" => Ok(Box::new(Bidirectional)),
        other => Err(SimulationError::UnknownAlgorithm(other.to_string())),
    }
}
