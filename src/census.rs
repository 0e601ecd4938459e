//! Reachability classes over every placement of a set of tiles.

use std::collections::HashMap;

use itertools::Itertools;

use crate::board::Board;
use crate::position::Position;
use crate::shape::{placements, Orientation, TileName};
use crate::solver::{solve, Goal, SearchOptions};

/// One class of mutually reachable positions found by [`census`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    /// The placement the class was first explored from.
    pub representative: Position,
    /// Number of positions labelled with this class.
    pub size: usize,
}

/// Every component found by [`census`], largest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentCensus {
    /// Components by size, largest first; ties keep discovery order.
    pub components: Vec<Component>,
}

impl ComponentCensus {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no valid placement exists.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component sizes, largest first.
    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(|component| component.size).collect_vec()
    }

    /// Total number of positions labelled.
    pub fn position_count(&self) -> usize {
        self.components.iter().map(|component| component.size).sum()
    }
}

/// Split every valid placement of `tiles` on `board` into classes of positions reachable from one another.
///
/// Each tile is tried in its given orientation with its anchor on every playable cell.
/// Placements are enumerated in lexicographic order (the last tile varies fastest); each valid placement not yet
/// labelled starts an exhaustive search, and every position that search settles takes a fresh label, replacing any
/// label it already had. Classes left with no positions are dropped.
pub fn census(board: &Board, tiles: &[(TileName, Orientation)]) -> ComponentCensus {
    if tiles.is_empty() {
        return ComponentCensus::default();
    }

    let candidates = tiles.iter()
        .map(|(name, orientation)| placements(*name, *orientation, board.playable_cells()))
        .collect_vec();

    let mut labels: HashMap<Position, usize> = HashMap::new();
    let mut representatives = Vec::new();
    for combination in candidates.into_iter().multi_cartesian_product() {
        let position = Position::new(combination);
        if labels.contains_key(&position) || !board.is_valid(&position) {
            continue;
        }

        let label = representatives.len();
        let tree = solve(board, &position, &Goal::Exhaust, SearchOptions::default());
        log::debug!("census component {} explored {} positions", label, tree.len());
        labels.extend(tree.positions().map(|reached| (reached.clone(), label)));
        representatives.push(position);
    }

    let mut sizes = vec![0; representatives.len()];
    for label in labels.values() {
        sizes[*label] += 1;
    }

    let components = representatives.into_iter()
        .zip(sizes)
        .filter(|(_, size)| *size > 0)
        .map(|(representative, size)| Component { representative, size })
        .sorted_by(|a, b| b.size.cmp(&a.size))
        .collect_vec();
    ComponentCensus { components }
}
