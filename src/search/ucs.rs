use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::Position;
use crate::search::path::reconstruct;
use crate::search::{SearchContext, SearchRun, SearchStrategy};

/// Uniform-cost search over a min-heap keyed by accumulated cost, ties
/// resolved by position order. Stale heap entries are discarded lazily on
/// pop. Every edge costs 1, so the returned path length matches BFS — the
/// exploration order and data structure are still uniform-cost's own.
pub struct Ucs;

impl SearchStrategy for Ucs {
    fn name(&self) -> &'static str {
        "UCS"
    }

    fn search(
        &mut self,
        ctx: &mut SearchContext<'_>,
        start: Position,
        target: Position,
    ) -> Vec<Position> {
        let mut run = SearchRun::new();
        let mut heap: BinaryHeap<Reverse<(u32, Position)>> = BinaryHeap::new();
        let mut cost: FxHashMap<Position, u32> = FxHashMap::default();
        let mut visited = FxHashSet::default();

        heap.push(Reverse((0, start)));
        cost.insert(start, 0);
        run.parents.insert(start, None);
        run.frontier.insert(start);

        while let Some(Reverse((accumulated, current))) = heap.pop() {
            if !visited.insert(current) {
                continue;
            }
            run.frontier.remove(&current);
            run.explored.insert(current);

            if ctx.step(&run, self.name()).is_break() {
                return Vec::new();
            }

            if current == target {
                return reconstruct(&run.parents, target);
            }

            for neighbor in ctx.grid.neighbors(current) {
                let next = accumulated + 1;
                let improves = cost.get(&neighbor).map_or(true, |&known| next < known);
                if improves {
                    cost.insert(neighbor, next);
                    run.parents.insert(neighbor, Some(current));
                    heap.push(Reverse((next, neighbor)));
                    run.frontier.insert(neighbor);
                }
            }
        }

        debug!("UCS exhausted after {} expansions", run.explored.len());
        Vec::new()
    }
}
