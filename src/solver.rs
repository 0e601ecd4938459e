use std::collections::{HashMap, VecDeque};

use strum::VariantArray;

use crate::board::Board;
use crate::moves::{BlockMove, Move};
use crate::position::{Position, TileIndex};
use crate::shape::Direction;

/// When a search may stop.
pub enum Goal<'a> {
    /// The classic escape rule: the tile at `target` covers the board's exit cell.
    Escape {
        /// Index of the tile that must reach the exit.
        target: TileIndex,
    },
    /// Never stop early; enumerate the whole reachable component.
    Exhaust,
    /// Stop at the first settled position satisfying the predicate.
    Predicate(&'a dyn Fn(&Position) -> bool),
}

impl Goal<'_> {
    fn is_met(&self, board: &Board, position: &Position) -> bool {
        match self {
            Self::Escape { target } => position.occupies(*target, board.exit()),
            Self::Exhaust => false,
            Self::Predicate(predicate) => predicate(position),
        }
    }
}

/// Tuning for [`solve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up, reporting not found, once a position farther than this is dequeued.
    pub max_distance: Option<usize>,
    /// Charge a block move of N tiles as N moves.
    ///
    /// This changes the order positions are settled in, and so which of several tied paths is reported
    /// and what "shortest" is measured in. It never breaks optimality under the chosen metric.
    pub penalize_blocks: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_distance: None,
            penalize_blocks: true,
        }
    }
}

/// How a settled position was first reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The position the search started from.
    Root,
    /// Reached by playing `mv` from `from`.
    Move {
        /// The parent position.
        from: Position,
        /// The move played from the parent.
        mv: Move,
    },
}

impl Origin {
    /// The tile moved to get here, if any.
    pub fn moved_tile(&self) -> Option<TileIndex> {
        match self {
            Self::Root => None,
            Self::Move { mv, .. } => Some(mv.tile),
        }
    }
}

/// Everything a [`solve`] call explored: each settled position with its [`Origin`], and where the search ended.
#[derive(Clone, Debug)]
pub struct SearchTree {
    pub(crate) visited: HashMap<Position, Origin>,
    pub(crate) last: Position,
    last_distance: usize,
    found: bool,
}

impl SearchTree {
    /// Whether the goal was met. When it was, [`last_position`](Self::last_position) satisfies it.
    pub fn found(&self) -> bool {
        self.found
    }

    /// The most recently settled position: the terminal on success, otherwise the farthest one reached.
    pub fn last_position(&self) -> &Position {
        &self.last
    }

    /// Distance of [`last_position`](Self::last_position) from the start, in the metric the search used.
    pub fn last_distance(&self) -> usize {
        self.last_distance
    }

    /// Number of settled positions.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Whether nothing was settled. Never true for a finished search, which always settles its start.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Whether `position` was settled.
    pub fn contains(&self, position: &Position) -> bool {
        self.visited.contains_key(position)
    }

    /// How `position` was first reached, if it was settled.
    pub fn origin(&self, position: &Position) -> Option<&Origin> {
        self.visited.get(position)
    }

    /// Settled positions, in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.visited.keys()
    }
}

struct Pending {
    position: Position,
    // moves still to be "paid" before this entry may settle
    waiting: usize,
    origin: Origin,
    distance: usize,
}

/// Tiles in the order successors are generated: the tile moved last first, then every other tile ascending.
fn successor_order(previous: TileIndex, tile_count: usize) -> impl Iterator<Item = TileIndex> {
    let previous = (previous < tile_count).then_some(previous);
    previous.into_iter().chain((0..tile_count).filter(move |tile| Some(*tile) != previous))
}

/// Breadth-first search from `start` until `goal` is met, the frontier runs dry, or `options.max_distance` is passed.
///
/// A position settles, i.e. enters the visited map, is tested against `goal` and is expanded,
/// the first time it leaves the queue with no waiting left; later copies of it are dropped.
/// With [`penalize_blocks`](SearchOptions::penalize_blocks) a position reached by a block move of N tiles
/// is requeued N - 1 times, one distance step each, before it may settle.
///
/// Successors are generated by moving the previously moved tile first, then the other tiles in ascending order,
/// each in [`Direction::VARIANTS`] order. This favours runs of the same tile and decides between tied paths.
pub fn solve(board: &Board, start: &Position, goal: &Goal<'_>, options: SearchOptions) -> SearchTree {
    let mut frontier = VecDeque::from([Pending {
        position: start.clone(),
        waiting: 1,
        origin: Origin::Root,
        distance: 0,
    }]);
    let mut visited: HashMap<Position, Origin> = HashMap::new();
    let mut last = start.clone();
    let mut last_distance = 0;
    let mut layer = 0;

    log::debug!("search started from {:?} with {:?}", start, options);

    while let Some(Pending { position, waiting, origin, distance }) = frontier.pop_front() {
        if options.max_distance.is_some_and(|max| distance > max) {
            log::debug!("search passed distance {:?} after settling {} positions", options.max_distance, visited.len());
            return SearchTree { visited, last, last_distance, found: false };
        }

        if distance > layer {
            layer = distance;
            log::trace!("distance {} reached, {} settled, {} queued", layer, visited.len(), frontier.len());
        }

        if options.penalize_blocks && waiting > 1 {
            frontier.push_back(Pending { position, waiting: waiting - 1, origin, distance: distance + 1 });
            continue;
        }

        if visited.contains_key(&position) {
            // already reached along another path
            continue;
        }

        let previous = origin.moved_tile().unwrap_or(0);
        visited.insert(position.clone(), origin);
        if goal.is_met(board, &position) {
            log::debug!("goal met at distance {} after settling {} positions", distance, visited.len());
            return SearchTree { visited, last: position, last_distance: distance, found: true };
        }

        for tile in successor_order(previous, position.len()) {
            for direction in Direction::VARIANTS {
                let Some(BlockMove { position: next, block_size }) = board.apply_move(&position, tile, *direction) else {
                    continue;
                };
                if !visited.contains_key(&next) {
                    frontier.push_back(Pending {
                        position: next,
                        waiting: block_size,
                        origin: Origin::Move { from: position.clone(), mv: Move::new(tile, *direction) },
                        distance: distance + 1,
                    });
                }
            }
        }

        last = position;
        last_distance = distance;
    }

    log::debug!("search exhausted {} positions without meeting the goal", visited.len());
    SearchTree { visited, last, last_distance, found: false }
}
