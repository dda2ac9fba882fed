use log::debug;

use crate::grid::Position;
use crate::search::{SearchContext, SearchRun, SearchStrategy};

pub struct Agent {
    pub position: Position,
}

impl Agent {
    pub fn new(start: Position) -> Self {
        Agent { position: start }
    }

    pub fn move_to(&mut self, next: Position) {
        self.position = next;
    }
}

/// Terminal state of one walk: either the agent stands on the target, or a
/// replan came back empty (the target is unreachable from where the agent
/// is) and it stopped where it was. Cancellation strands the agent too; a
/// host that cares about the difference tracks it in its observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelOutcome {
    ReachedTarget,
    Stranded,
}

#[derive(Debug, Clone, Copy)]
pub struct TravelReport {
    pub outcome: TravelOutcome,
    pub moves: usize,
    pub replans: usize,
}

/// Advances the agent one cell at a time along `path`, replanning from the
/// agent's current position whenever a wall lands on the remaining route.
///
/// Before every move the whole remaining suffix is rescanned against the
/// live grid; the injector runs once per movement step, so walls can appear
/// mid-walk. A replan either produces a fresh route (walking resumes on it)
/// or an empty one (terminal). Every replan rolls the injector again, so
/// reaching the target is only statistically guaranteed.
pub fn travel(
    ctx: &mut SearchContext<'_>,
    agent: &mut Agent,
    strategy: &mut dyn SearchStrategy,
    mut path: Vec<Position>,
) -> TravelReport {
    let mut report = TravelReport {
        outcome: TravelOutcome::Stranded,
        moves: 0,
        replans: 0,
    };
    let target = ctx.grid.target;
    let idle = SearchRun::new();
    let mut next = 1;

    if path.is_empty() {
        return report;
    }

    loop {
        if agent.position == target {
            report.outcome = TravelOutcome::ReachedTarget;
            return report;
        }
        if next >= path.len() {
            return report;
        }

        if ctx.checkpoint().is_break() {
            return report;
        }

        if path[next..].iter().any(|&cell| ctx.grid.is_wall(cell)) {
            debug!(
                "route blocked, replanning from ({}, {})",
                agent.position.row, agent.position.col
            );
            report.replans += 1;
            ctx.render(&idle, &[], &format!("{} (replan)", strategy.name()));

            let fresh = strategy.search(ctx, agent.position, target);
            if fresh.is_empty() {
                return report;
            }
            ctx.render(&idle, &fresh, &format!("{} (new path)", strategy.name()));
            path = fresh;
            next = 1;
            continue;
        }

        agent.move_to(path[next]);
        ctx.agent = agent.position;
        report.moves += 1;
        ctx.render(
            &idle,
            &path[..=next],
            &format!("{} (move)", strategy.name()),
        );

        if agent.position == target {
            report.outcome = TravelOutcome::ReachedTarget;
            return report;
        }
        next += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Position};
    use crate::injector::{DynamicWalls, Protected};
    use crate::search::harness::{grid_from_ascii, NoWalls, Recorder};
    use crate::search::Bfs;

    /// Walls a fixed cell on the n-th injection roll, protected cells
    /// permitting. Stands in for the probabilistic injector in scenarios
    /// that need a wall to land at an exact moment.
    struct ScriptedWall {
        cell: Position,
        on_invocation: usize,
        calls: usize,
    }

    impl DynamicWalls for ScriptedWall {
        fn maybe_inject(&mut self, grid: &mut Grid, protected: &Protected) {
            self.calls += 1;
            if self.calls == self.on_invocation && !protected.contains(self.cell) {
                grid.set_wall(self.cell);
            }
        }
    }

    fn straight_path(row: usize, cols: std::ops::RangeInclusive<usize>) -> Vec<Position> {
        cols.map(|c| Position::new(row, c)).collect()
    }

    #[test]
    fn test_follows_static_path_to_target() {
        let mut grid = grid_from_ascii(&["S...T"]);
        let path = straight_path(0, 0..=4);
        let mut agent = Agent::new(grid.start);
        let mut walls = NoWalls;
        let mut observer = Recorder::default();
        let start = grid.start;
        let mut ctx = SearchContext::new(&mut grid, &mut walls, &mut observer, start);

        let report = travel(&mut ctx, &mut agent, &mut Bfs, path);

        assert_eq!(report.outcome, TravelOutcome::ReachedTarget);
        assert_eq!(report.moves, 4);
        assert_eq!(report.replans, 0);
        assert_eq!(agent.position, Position::new(0, 4));
    }

    #[test]
    fn test_wall_on_remaining_route_triggers_replan_from_current_cell() {
        // Two-row grid so the replan can dodge through the second row. The
        // wall lands on the 4th path cell during the agent's third step,
        // after it has already passed the 2nd cell.
        let mut grid = grid_from_ascii(&["S...T", "....."]);
        let path = straight_path(0, 0..=4);
        let mut agent = Agent::new(grid.start);
        let mut walls = ScriptedWall {
            cell: Position::new(0, 3),
            on_invocation: 3,
            calls: 0,
        };
        let mut observer = Recorder::default();
        let start = grid.start;
        let mut ctx = SearchContext::new(&mut grid, &mut walls, &mut observer, start);

        let report = travel(&mut ctx, &mut agent, &mut Bfs, path);

        assert_eq!(report.outcome, TravelOutcome::ReachedTarget);
        assert_eq!(report.replans, 1);
        assert_eq!(agent.position, Position::new(0, 4));

        // The replan snapshot is taken while the agent still sits on the
        // cell it had reached, (0, 2).
        let replan_at = observer
            .labels
            .iter()
            .position(|l| l == "BFS (replan)")
            .expect("replan observed");
        assert_eq!(observer.agents[replan_at], Position::new(0, 2));
        assert!(observer.labels.iter().any(|l| l == "BFS (new path)"));
    }

    #[test]
    fn test_stranded_when_replan_finds_nothing() {
        // Single corridor: once the wall lands ahead there is no way around.
        let mut grid = grid_from_ascii(&["S...T"]);
        let path = straight_path(0, 0..=4);
        let mut agent = Agent::new(grid.start);
        let mut walls = ScriptedWall {
            cell: Position::new(0, 3),
            on_invocation: 2,
            calls: 0,
        };
        let mut observer = Recorder::default();
        let start = grid.start;
        let mut ctx = SearchContext::new(&mut grid, &mut walls, &mut observer, start);

        let report = travel(&mut ctx, &mut agent, &mut Bfs, path);

        assert_eq!(report.outcome, TravelOutcome::Stranded);
        assert_eq!(report.moves, 1);
        assert_eq!(agent.position, Position::new(0, 1));
    }

    #[test]
    fn test_empty_initial_path_is_terminal() {
        let mut grid = grid_from_ascii(&["S#T"]);
        let mut agent = Agent::new(grid.start);
        let mut walls = NoWalls;
        let mut observer = Recorder::default();
        let start = grid.start;
        let mut ctx = SearchContext::new(&mut grid, &mut walls, &mut observer, start);

        let report = travel(&mut ctx, &mut agent, &mut Bfs, Vec::new());

        assert_eq!(report.outcome, TravelOutcome::Stranded);
        assert_eq!(report.moves, 0);
        assert_eq!(agent.position, grid.start);
    }

    #[test]
    fn test_cancellation_strands_the_agent() {
        let mut grid = grid_from_ascii(&["S...T"]);
        let path = straight_path(0, 0..=4);
        let mut agent = Agent::new(grid.start);
        let mut walls = NoWalls;
        let mut observer = Recorder::cancelling_after(2);
        let start = grid.start;
        let mut ctx = SearchContext::new(&mut grid, &mut walls, &mut observer, start);

        let report = travel(&mut ctx, &mut agent, &mut Bfs, path);

        assert_eq!(report.outcome, TravelOutcome::Stranded);
        assert_eq!(report.moves, 2);
    }
}
