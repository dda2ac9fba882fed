//! Uninformed graph search on a grid that mutates while the search runs.
//!
//! Six strategies (BFS, DFS, uniform-cost, depth-limited, iterative
//! deepening, bidirectional) share a step-observation contract: after every
//! node expansion the engine checks for cancellation, lets the obstacle
//! injector roll for a new wall, and hands the host a snapshot to render.
//! The movement controller walks the returned route and replans from the
//! agent's current cell whenever an injected wall lands on the remainder.

pub mod agent;
pub mod config;
pub mod error;
pub mod grid;
pub mod injector;
pub mod search;
pub mod simulation;
pub mod statistics;
pub mod view;
