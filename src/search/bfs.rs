use std::collections::VecDeque;

use log::debug;
use rustc_hash::FxHashSet;

use crate::grid::Position;
use crate::search::path::reconstruct;
use crate::search::{SearchContext, SearchRun, SearchStrategy};

/// Breadth-first search. Nodes are marked visited on enqueue so a cell is
/// never queued twice; the search succeeds the first time the target is
/// dequeued. Shortest in edge count under the all-unit-cost model.
pub struct Bfs;

impl SearchStrategy for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(
        &mut self,
        ctx: &mut SearchContext<'_>,
        start: Position,
        target: Position,
    ) -> Vec<Position> {
        let mut run = SearchRun::new();
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);
        run.parents.insert(start, None);
        run.frontier.insert(start);

        while let Some(current) = queue.pop_front() {
            run.frontier.remove(&current);
            run.explored.insert(current);

            if ctx.step(&run, self.name()).is_break() {
                return Vec::new();
            }

            if current == target {
                return reconstruct(&run.parents, target);
            }

            for neighbor in ctx.grid.neighbors(current) {
                if visited.insert(neighbor) {
                    run.parents.insert(neighbor, Some(current));
                    queue.push_back(neighbor);
                    run.frontier.insert(neighbor);
                }
            }
        }

        debug!("BFS exhausted after {} expansions", run.explored.len());
        Vec::new()
    }
}
