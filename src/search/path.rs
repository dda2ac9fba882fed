use rustc_hash::FxHashMap;

use crate::grid::Position;

/// Walks child -> parent from `from` until a root (parent `None`),
/// collecting positions in walk order. A position missing from the map
/// yields an empty walk.
pub fn trace_back(
    parents: &FxHashMap<Position, Option<Position>>,
    from: Position,
) -> Vec<Position> {
    let mut chain = Vec::new();
    let mut current = Some(from);
    while let Some(pos) = current {
        match parents.get(&pos) {
            Some(&parent) => {
                chain.push(pos);
                current = parent;
            }
            None => break,
        }
    }
    chain
}

/// The route implied by a parent relation, ordered start -> goal.
pub fn reconstruct(
    parents: &FxHashMap<Position, Option<Position>>,
    goal: Position,
) -> Vec<Position> {
    let mut path = trace_back(parents, goal);
    path.reverse();
    path
}
