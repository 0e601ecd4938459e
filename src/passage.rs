//! Positions every solution must pass through.

use itertools::Itertools;

use crate::articulation::{hopcroft_tarjan, Biconnectivity};
use crate::board::Board;
use crate::path::Step;
use crate::position::Position;

/// A position every solution must pass through, located on a reconstructed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForcedPassage {
    /// Index of the position in the path.
    pub step: usize,
    /// The position at that step.
    pub position: Position,
}

/// Biconnectivity of the whole component of positions reachable from `start`, moves read as undirected edges.
///
/// Neighbours come from [`Board::neighbors`]. The whole component is traversed whatever the solution length,
/// so on puzzles with large components this dominates the cost of finding forced passages.
pub fn analyze(board: &Board, start: &Position) -> Biconnectivity<Position> {
    hopcroft_tarjan(start.clone(), |position| board.neighbors(position))
}

/// The steps of `path` whose position is an articulation point of `analysis`.
pub fn forced_passages(analysis: &Biconnectivity<Position>, path: &[Step]) -> Vec<ForcedPassage> {
    path.iter()
        .enumerate()
        .filter(|(_, step)| analysis.is_articulation_point(&step.position))
        .map(|(index, step)| ForcedPassage { step: index, position: step.position.clone() })
        .collect_vec()
}
