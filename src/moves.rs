use std::collections::VecDeque;

use itertools::Itertools;
use strum::VariantArray;

use crate::board::Board;
use crate::position::{Position, TileIndex};
use crate::shape::Direction;

/// One move as played by the player: a tile pushed one step in a direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    /// The tile pushed.
    pub tile: TileIndex,
    /// Where it is pushed.
    pub direction: Direction,
}

impl Move {
    /// Push `tile` towards `direction`.
    pub fn new(tile: TileIndex, direction: Direction) -> Self {
        Self { tile, direction }
    }
}

/// The outcome of a successful [`Board::apply_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockMove {
    /// The position after the move.
    pub position: Position,
    /// Number of tiles that moved: 1 for a simple move, more when the pushed tile shoved others along.
    pub block_size: usize,
}

impl Board {
    /// Push tile `tile` of `position` one step in `direction`, shoving along any tile it runs into.
    ///
    /// Tiles move in the order they are reached. Each moved tile's new cells are checked against the
    /// tiles that have not been scheduled yet, and every one it now overlaps is scheduled to move too.
    /// No tile moves twice within one call.
    ///
    /// Returns [`None`] if any involved tile would leave the board or step onto a hole, or if `tile` does not exist.
    /// `position` itself is never modified.
    pub fn apply_move(&self, position: &Position, tile: TileIndex, direction: Direction) -> Option<BlockMove> {
        position.tile(tile)?;

        let mut tiles = position.tiles().to_vec();
        let mut scheduled = vec![false; tiles.len()];
        let mut to_move = VecDeque::from([tile]);
        scheduled[tile] = true;
        let mut block_size = 0;

        while let Some(index) = to_move.pop_front() {
            block_size += 1;
            let moved = self.translate(&tiles[index], direction)?;

            // propagate to the tiles this one now runs into, making it a "block move"
            for (other, other_tile) in tiles.iter().enumerate() {
                if !scheduled[other] && other_tile.overlaps(&moved) {
                    scheduled[other] = true;
                    to_move.push_back(other);
                }
            }
            tiles[index] = moved;
        }

        Some(BlockMove {
            position: Position::new(tiles),
            block_size,
        })
    }

    /// [`apply_move`](Self::apply_move) for a [`Move`].
    pub fn play(&self, position: &Position, mv: Move) -> Option<BlockMove> {
        self.apply_move(position, mv.tile, mv.direction)
    }

    /// Every legal move from `position`, tiles in index order and each tile in [`Direction::VARIANTS`] order.
    pub fn successors<'a>(&'a self, position: &'a Position) -> impl Iterator<Item = (Move, BlockMove)> + 'a {
        (0..position.len())
            .cartesian_product(Direction::VARIANTS.iter().copied())
            .filter_map(move |(tile, direction)| self.apply_move(position, tile, direction)
                .map(|outcome| (Move::new(tile, direction), outcome)))
    }

    /// Distinct positions one move away from `position`, in [`successors`](Self::successors) order.
    pub fn neighbors(&self, position: &Position) -> Vec<Position> {
        self.successors(position)
            .map(|(_, outcome)| outcome.position)
            .unique()
            .collect_vec()
    }
}
