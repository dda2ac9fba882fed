use log::debug;
use rustc_hash::FxHashSet;

use crate::grid::Position;
use crate::search::path::reconstruct;
use crate::search::{SearchContext, SearchRun, SearchStrategy};

/// Depth-first search. Neighbors are pushed in reverse of the fixed
/// priority order so the pop restores it: the highest-priority branch is
/// always explored first. Visited is marked on pop, stale stack entries are
/// skipped, and a parent is only recorded at first discovery. Makes no
/// shortest-path promise.
pub struct Dfs;

impl SearchStrategy for Dfs {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(
        &mut self,
        ctx: &mut SearchContext<'_>,
        start: Position,
        target: Position,
    ) -> Vec<Position> {
        let mut run = SearchRun::new();
        let mut stack = vec![start];
        let mut visited = FxHashSet::default();

        run.parents.insert(start, None);
        run.frontier.insert(start);

        while let Some(current) = stack.pop() {
            run.frontier.remove(&current);
            if !visited.insert(current) {
                continue;
            }
            run.explored.insert(current);

            if ctx.step(&run, self.name()).is_break() {
                return Vec::new();
            }

            if current == target {
                return reconstruct(&run.parents, target);
            }

            let neighbors: Vec<Position> = ctx
                .grid
                .neighbors(current)
                .into_iter()
                .filter(|n| !visited.contains(n))
                .collect();

            for &neighbor in neighbors.iter().rev() {
                stack.push(neighbor);
                run.frontier.insert(neighbor);
                run.parents.entry(neighbor).or_insert(Some(current));
            }
        }

        debug!("DFS exhausted after {} expansions", run.explored.len());
        Vec::new()
    }
}
