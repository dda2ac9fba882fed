use thiserror::Error;

/// Setup failures surfaced while building a simulation. Search failures are
/// not errors: an exhausted or cancelled search returns an empty path, and a
/// stranded agent is a terminal travel state.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("unknown algorithm '{0}', expected bfs, dfs, ucs, dls, iddfs, bidirectional, or all")]
    UnknownAlgorithm(String),

    #[error("unknown scenario '{0}', expected random, best, or worst")]
    UnknownScenario(String),

    #[error("grid must be at least 2x2, got {rows}x{cols}")]
    GridTooSmall { rows: usize, cols: usize },

    #[error("could not place {0} on an open cell, try lowering --static-wall-prob")]
    NoOpenCell(&'static str),
}
