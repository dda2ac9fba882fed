use std::collections::VecDeque;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::Position;
use crate::search::path::{reconstruct, trace_back};
use crate::search::{SearchContext, SearchRun, SearchStrategy};

/// Two breadth-first frontiers, one rooted at each endpoint, advanced in
/// strict alternation: one start-side pop, then one target-side pop. Each
/// side keeps its own discovered set and parent map; a popped node already
/// discovered by the other side is the meeting point. The loop ends as soon
/// as either queue empties, since no meeting can happen after that.
pub struct Bidirectional;

struct Side {
    queue: VecDeque<Position>,
    visited: FxHashSet<Position>,
    parents: FxHashMap<Position, Option<Position>>,
}

impl Side {
    fn rooted_at(root: Position) -> Self {
        let mut side = Side {
            queue: VecDeque::new(),
            visited: FxHashSet::default(),
            parents: FxHashMap::default(),
        };
        side.queue.push_back(root);
        side.visited.insert(root);
        side.parents.insert(root, None);
        side
    }
}

enum Advance {
    Met(Position),
    Continue,
    Cancelled,
}

impl Bidirectional {
    /// One pop from `side`: expose the suspension point, test for a meeting
    /// with the opposite side, then expand.
    fn advance(
        ctx: &mut SearchContext<'_>,
        run: &mut SearchRun,
        side: &mut Side,
        other: &Side,
        label: &str,
    ) -> Advance {
        let Some(current) = side.queue.pop_front() else {
            return Advance::Continue;
        };
        run.frontier.remove(&current);
        run.explored.insert(current);

        if ctx.step(run, label).is_break() {
            return Advance::Cancelled;
        }

        if other.visited.contains(&current) {
            return Advance::Met(current);
        }

        for neighbor in ctx.grid.neighbors(current) {
            if side.visited.insert(neighbor) {
                side.parents.insert(neighbor, Some(current));
                side.queue.push_back(neighbor);
                run.frontier.insert(neighbor);
            }
        }
        Advance::Continue
    }

    /// Forward chain start -> meeting, then the target-side chain walked
    /// outward to the target, with the meeting node kept exactly once.
    fn join(meeting: Position, from_start: &Side, from_target: &Side) -> Vec<Position> {
        let mut path = reconstruct(&from_start.parents, meeting);
        path.extend(trace_back(&from_target.parents, meeting).into_iter().skip(1));
        path
    }
}

impl SearchStrategy for Bidirectional {
    fn name(&self) -> &'static str {
        "Bidirectional"
    }

    fn search(
        &mut self,
        ctx: &mut SearchContext<'_>,
        start: Position,
        target: Position,
    ) -> Vec<Position> {
        let mut run = SearchRun::new();
        let mut from_start = Side::rooted_at(start);
        let mut from_target = Side::rooted_at(target);
        run.frontier.insert(start);
        run.frontier.insert(target);

        while !from_start.queue.is_empty() && !from_target.queue.is_empty() {
            match Self::advance(ctx, &mut run, &mut from_start, &from_target, self.name()) {
                Advance::Met(meeting) => return Self::join(meeting, &from_start, &from_target),
                Advance::Cancelled => return Vec::new(),
                Advance::Continue => {}
            }

            match Self::advance(ctx, &mut run, &mut from_target, &from_start, self.name()) {
                Advance::Met(meeting) => return Self::join(meeting, &from_start, &from_target),
                Advance::Cancelled => return Vec::new(),
                Advance::Continue => {}
            }
        }

        debug!(
            "bidirectional search exhausted after {} expansions",
            run.explored.len()
        );
        Vec::new()
    }
}
