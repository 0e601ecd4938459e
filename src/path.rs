use itertools::Itertools;

use crate::board::Board;
use crate::moves::Move;
use crate::position::Position;
use crate::solver::{Origin, SearchTree};

/// One position along a reconstructed path, with the move played from it.
///
/// `played` is [`None`] only for the last step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The position reached.
    pub position: Position,
    /// The move leading to the next step.
    pub played: Option<Move>,
}

impl SearchTree {
    /// Walk parent links back from [`last_position`](Self::last_position) to the start.
    ///
    /// The result runs from the start position to the last position, both included,
    /// so it holds one more step than there are moves.
    pub fn shortest_path(&self) -> Vec<Step> {
        let mut steps = vec![Step { position: self.last.clone(), played: None }];
        let mut current = &self.last;
        while let Some(Origin::Move { from, mv }) = self.visited.get(current) {
            steps.push(Step { position: from.clone(), played: Some(*mv) });
            current = from;
        }
        steps.reverse();
        steps
    }
}

/// The moves of a path, in order.
pub fn moves_of(path: &[Step]) -> Vec<Move> {
    path.iter().filter_map(|step| step.played).collect_vec()
}

/// Play `moves` in order from `start`, returning every position passed through, `start` included.
///
/// Returns [`None`] as soon as a move is illegal.
pub fn replay(board: &Board, start: &Position, moves: impl IntoIterator<Item = Move>) -> Option<Vec<Position>> {
    let mut positions = vec![start.clone()];
    for mv in moves {
        let current = positions.last()?;
        let next = board.play(current, mv)?.position;
        positions.push(next);
    }
    Some(positions)
}
