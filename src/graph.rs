//! The reachable position graph, materialised.

use std::collections::{HashMap, VecDeque};

use petgraph::graphmap::UnGraphMap;

use crate::board::Board;
use crate::moves::Move;
use crate::position::Position;

/// Dense identifier of a position inside a [`ReachabilityGraph`].
pub type PositionId = usize;

/// The component of positions reachable from a start position, materialised as an undirected graph.
///
/// Nodes are [`PositionId`]s assigned in breadth-first discovery order, the start being 0.
/// Each edge carries the first [`Move`] seen joining its endpoints.
pub struct ReachabilityGraph {
    positions: Vec<Position>,
    ids: HashMap<Position, PositionId>,
    graph: UnGraphMap<PositionId, Move>,
}

impl ReachabilityGraph {
    /// Enumerate everything reachable from `start` on `board`.
    ///
    /// Memory grows with the component; prefer [`solve`](crate::solve) with a goal when only a path is needed.
    pub fn explore(board: &Board, start: &Position) -> Self {
        let mut positions = vec![start.clone()];
        let mut ids = HashMap::from([(start.clone(), 0)]);
        let mut graph = UnGraphMap::new();
        graph.add_node(0);
        let mut to_explore = VecDeque::from([0]);

        while let Some(id) = to_explore.pop_front() {
            let successors = board.successors(&positions[id]).collect::<Vec<_>>();
            for (mv, outcome) in successors {
                let next = match ids.get(&outcome.position) {
                    Some(next) => *next,
                    None => {
                        let next = positions.len();
                        ids.insert(outcome.position.clone(), next);
                        positions.push(outcome.position);
                        to_explore.push_back(next);
                        next
                    }
                };
                if !graph.contains_edge(id, next) {
                    graph.add_edge(id, next, mv);
                }
            }
        }

        log::debug!("reachability graph: {} positions, {} adjacencies", graph.node_count(), graph.edge_count());
        Self { positions, ids, graph }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: the start is part of its own component.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The position with id `id`.
    pub fn position(&self, id: PositionId) -> Option<&Position> {
        self.positions.get(id)
    }

    /// The id of `position`, if it is reachable.
    pub fn id_of(&self, position: &Position) -> Option<PositionId> {
        self.ids.get(position).copied()
    }

    /// The underlying graph, for analyses of its own.
    pub fn graph(&self) -> &UnGraphMap<PositionId, Move> {
        &self.graph
    }
}
