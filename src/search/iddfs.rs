use log::debug;

use crate::grid::Position;
use crate::search::dls::{bounded_dfs, BoundedOutcome};
use crate::search::{SearchContext, SearchStrategy};

/// Iterative-deepening depth-first search: depth-limited passes at depth
/// 0, 1, 2, ... up to the maximum, with all run state rebuilt from scratch
/// between attempts. The first depth that reaches the target is the
/// shallowest, at the price of re-expanding earlier levels every round.
pub struct Iddfs {
    max_depth: usize,
}

impl Iddfs {
    pub fn new(max_depth: usize) -> Self {
        Iddfs { max_depth }
    }
}

impl SearchStrategy for Iddfs {
    fn name(&self) -> &'static str {
        "IDDFS"
    }

    fn search(
        &mut self,
        ctx: &mut SearchContext<'_>,
        start: Position,
        target: Position,
    ) -> Vec<Position> {
        for depth in 0..=self.max_depth {
            let label = format!("IDDFS (depth {depth})");
            match bounded_dfs(ctx, start, target, depth, &label) {
                BoundedOutcome::Found(path) => return path,
                BoundedOutcome::Exhausted => continue,
                BoundedOutcome::Cancelled => return Vec::new(),
            }
        }

        debug!("IDDFS exhausted max depth {}", self.max_depth);
        Vec::new()
    }
}
