use rand::rngs::StdRng;
use rand::Rng;

use crate::error::SimulationError;

/// Movement order. Every algorithm uses this as its only tie-break, so the
/// order determines DFS branch order and which of several equal-length
/// routes the other strategies return.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),  // Up
    (0, 1),   // Right
    (1, 0),   // Down
    (1, 1),   // Down-Right
    (0, -1),  // Left
    (-1, -1), // Up-Left
    (-1, 1),  // Top-Right
    (1, -1),  // Bottom-Left
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// How the initial grid is laid out before any dynamic walls appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Walls sprinkled at the static wall probability, random start/target.
    Random,
    /// No walls, start and target two columns apart.
    Best,
    /// Dense walls, start and target at opposite corners.
    Worst,
}

impl Scenario {
    pub fn parse(name: &str) -> Result<Self, SimulationError> {
        match name {
            "random" => Ok(Scenario::Random),
            "best" => Ok(Scenario::Best),
            "worst" => Ok(Scenario::Worst),
            other => Err(SimulationError::UnknownScenario(other.to_string())),
        }
    }
}

const WORST_WALL_PROB: f64 = 0.35;
const PLACEMENT_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<Vec<Cell>>,
    pub start: Position,
    pub target: Position,
}

impl Grid {
    /// Builds an all-empty grid with the given endpoints. Callers are
    /// responsible for the endpoints being distinct and in bounds.
    pub fn empty(rows: usize, cols: usize, start: Position, target: Position) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
            start,
            target,
        }
    }

    /// Generates the initial layout for a scenario. Start and target are
    /// guaranteed Empty; the random scenario draws them from open cells
    /// with a bounded number of attempts.
    pub fn generate(
        rows: usize,
        cols: usize,
        scenario: Scenario,
        static_wall_prob: f64,
        rng: &mut StdRng,
    ) -> Result<Self, SimulationError> {
        if rows < 2 || cols < 2 {
            return Err(SimulationError::GridTooSmall { rows, cols });
        }

        match scenario {
            Scenario::Best => {
                let start = Position::new(rows / 2, cols / 2 - 1);
                let target = Position::new(rows / 2, (cols / 2 + 1).min(cols - 1));
                Ok(Grid::empty(rows, cols, start, target))
            }
            Scenario::Worst => {
                let start = Position::new(0, 0);
                let target = Position::new(rows - 1, cols - 1);
                let mut grid = Grid::empty(rows, cols, start, target);
                for r in 0..rows {
                    for c in 0..cols {
                        if rng.gen::<f64>() < WORST_WALL_PROB {
                            grid.cells[r][c] = Cell::Wall;
                        }
                    }
                }
                grid.cells[start.row][start.col] = Cell::Empty;
                grid.cells[target.row][target.col] = Cell::Empty;
                Ok(grid)
            }
            Scenario::Random => {
                let mut cells = vec![vec![Cell::Empty; cols]; rows];
                for row in cells.iter_mut() {
                    for cell in row.iter_mut() {
                        if rng.gen::<f64>() < static_wall_prob {
                            *cell = Cell::Wall;
                        }
                    }
                }

                let start = Self::draw_open_cell(&cells, rows, cols, rng, None)
                    .ok_or(SimulationError::NoOpenCell("start"))?;
                let target = Self::draw_open_cell(&cells, rows, cols, rng, Some(start))
                    .ok_or(SimulationError::NoOpenCell("target"))?;

                Ok(Grid {
                    rows,
                    cols,
                    cells,
                    start,
                    target,
                })
            }
        }
    }

    fn draw_open_cell(
        cells: &[Vec<Cell>],
        rows: usize,
        cols: usize,
        rng: &mut StdRng,
        exclude: Option<Position>,
    ) -> Option<Position> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let pos = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
            if cells[pos.row][pos.col] == Cell::Empty && Some(pos) != exclude {
                return Some(pos);
            }
        }
        None
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == Cell::Wall
    }

    /// Walls are permanent once placed; the grid never loses them.
    pub fn set_wall(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Cell::Wall;
    }

    /// In-bounds, non-Wall neighbors in the fixed priority order. Cell state
    /// is read fresh on every call: a wall injected since the last
    /// suspension point is already respected here.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(8);
        let (row, col) = (pos.row as i32, pos.col as i32);

        for (dr, dc) in &DIRECTIONS {
            let nr = row + dr;
            let nc = col + dc;
            if nr >= 0 && nr < self.rows as i32 && nc >= 0 && nc < self.cols as i32 {
                let next = Position::new(nr as usize, nc as usize);
                if self.cells[next.row][next.col] != Cell::Wall {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }
}
