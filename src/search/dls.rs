use log::debug;

use crate::grid::Position;
use crate::search::path::reconstruct;
use crate::search::{SearchContext, SearchRun, SearchStrategy};

/// One depth-bounded depth-first pass. Shared by [`Dls`] and the
/// iterative-deepening driver, which needs cancellation kept apart from
/// plain exhaustion so it can stop deepening.
pub(crate) enum BoundedOutcome {
    Found(Vec<Position>),
    Exhausted,
    Cancelled,
}

/// Depth-first traversal on an explicit stack of
/// `(position, remaining_depth, discovered_via)` frames, preserving the
/// expansion order of the recursive formulation: a node is marked explored
/// on entry, the target check precedes the depth check, and branches are
/// cut once the remaining depth hits zero.
pub(crate) fn bounded_dfs(
    ctx: &mut SearchContext<'_>,
    start: Position,
    target: Position,
    limit: usize,
    label: &str,
) -> BoundedOutcome {
    let mut run = SearchRun::new();
    let mut stack: Vec<(Position, usize, Option<Position>)> = vec![(start, limit, None)];
    run.frontier.insert(start);

    while let Some((current, remaining, via)) = stack.pop() {
        if run.explored.contains(&current) {
            continue;
        }
        run.frontier.remove(&current);
        run.parents.insert(current, via);
        run.explored.insert(current);

        if ctx.step(&run, label).is_break() {
            return BoundedOutcome::Cancelled;
        }

        if current == target {
            return BoundedOutcome::Found(reconstruct(&run.parents, target));
        }

        if remaining == 0 {
            continue;
        }

        let neighbors: Vec<Position> = ctx
            .grid
            .neighbors(current)
            .into_iter()
            .filter(|n| !run.explored.contains(n))
            .collect();

        for &neighbor in neighbors.iter().rev() {
            stack.push((neighbor, remaining - 1, Some(current)));
            run.frontier.insert(neighbor);
        }
    }

    BoundedOutcome::Exhausted
}

/// Depth-limited search: depth-first with a fixed cutoff. An exhausted
/// limit is a plain empty result, same as an unreachable target.
pub struct Dls {
    depth_limit: usize,
}

impl Dls {
    pub fn new(depth_limit: usize) -> Self {
        Dls { depth_limit }
    }
}

impl SearchStrategy for Dls {
    fn name(&self) -> &'static str {
        "DLS"
    }

    fn search(
        &mut self,
        ctx: &mut SearchContext<'_>,
        start: Position,
        target: Position,
    ) -> Vec<Position> {
        match bounded_dfs(ctx, start, target, self.depth_limit, self.name()) {
            BoundedOutcome::Found(path) => path,
            BoundedOutcome::Exhausted => {
                debug!("DLS exhausted at depth limit {}", self.depth_limit);
                Vec::new()
            }
            BoundedOutcome::Cancelled => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::harness::{assert_valid_path, grid_from_ascii, run_static};

    #[test]
    fn test_finds_target_within_limit() {
        let mut grid = grid_from_ascii(&["S...T"]);
        let path = run_static(&mut Dls::new(4), &mut grid);
        assert_valid_path(&grid, &path);
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn test_target_at_exact_limit_depth() {
        let mut grid = grid_from_ascii(&["S...T"]);
        let path = run_static(&mut Dls::new(4), &mut grid);
        assert_eq!(path.len(), 5);
        // One less than the distance misses it.
        let mut grid = grid_from_ascii(&["S...T"]);
        assert!(run_static(&mut Dls::new(3), &mut grid).is_empty());
    }

    #[test]
    fn test_limit_zero_only_matches_start() {
        let mut grid = grid_from_ascii(&["ST"]);
        assert!(run_static(&mut Dls::new(0), &mut grid).is_empty());
    }

    #[test]
    fn test_walled_off_target_returns_empty() {
        let mut grid = grid_from_ascii(&["S#T"]);
        assert!(run_static(&mut Dls::new(40), &mut grid).is_empty());
    }
}
