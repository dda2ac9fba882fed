use std::thread;
use std::time::Duration;

use crate::grid::{Cell, Grid, Position};
use crate::search::{SearchObserver, SearchSnapshot};

/// Terminal renderer for the per-step snapshots, and the host's channel for
/// cooperative cancellation: when a step budget is set, every step past it
/// answers the engine's cancellation check with yes.
pub struct TerminalView {
    render: bool,
    delay: Duration,
    step_budget: Option<usize>,
    pub steps: usize,
    pub cancelled: bool,
}

impl TerminalView {
    pub fn new(render: bool, delay_ms: u64, step_budget: Option<usize>) -> Self {
        TerminalView {
            render,
            delay: Duration::from_millis(delay_ms),
            step_budget,
            steps: 0,
            cancelled: false,
        }
    }

    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }

    fn glyph(snapshot: &SearchSnapshot<'_>, pos: Position) -> char {
        // Later overlays win: explored under frontier under path, endpoints
        // over everything, the agent on top.
        if pos == snapshot.agent {
            'A'
        } else if pos == snapshot.grid.target {
            'T'
        } else if pos == snapshot.grid.start {
            'S'
        } else if snapshot.path.contains(&pos) {
            '*'
        } else if snapshot.frontier.contains(&pos) {
            'o'
        } else if snapshot.explored.contains(&pos) {
            'x'
        } else {
            match snapshot.grid.get(pos) {
                Cell::Wall => '#',
                Cell::Empty => '.',
            }
        }
    }

    fn render_snapshot(&self, snapshot: &SearchSnapshot<'_>) {
        self.clear_screen();
        println!("{}", snapshot.label);
        println!(
            "Explored: {} | Frontier: {} | Path: {} | Step: {}",
            snapshot.explored.len(),
            snapshot.frontier.len(),
            snapshot.path.len(),
            self.steps
        );
        println!("Legend: S=Start, T=Target, A=Agent, #=Wall, o=Frontier, x=Explored, *=Path");
        println!();

        print!("   ");
        for c in 0..snapshot.grid.cols {
            print!("{:2}", c % 10);
        }
        println!();
        for r in 0..snapshot.grid.rows {
            print!("{:2} ", r);
            for c in 0..snapshot.grid.cols {
                print!("{} ", Self::glyph(snapshot, Position::new(r, c)));
            }
            println!();
        }
        println!();
    }
}

impl SearchObserver for TerminalView {
    fn cancel_requested(&mut self) -> bool {
        if let Some(budget) = self.step_budget {
            if self.steps >= budget {
                self.cancelled = true;
            }
        }
        self.cancelled
    }

    fn observe(&mut self, snapshot: &SearchSnapshot<'_>) {
        self.steps += 1;
        if self.render {
            self.render_snapshot(snapshot);
            thread::sleep(self.delay);
        }
    }
}
