use std::collections::BTreeSet;

use itertools::Itertools;
use strum::VariantArray;

use crate::cell::{Cell, CELL_COUNT, EXIT_CELL};
use crate::error::PuzzleError;
use crate::position::{Position, Tile, TileIndex};
use crate::shape::Direction;

// Resulting location of each move from cells 0..25, indexed by `Direction::index`.
const DIAMOND_TRANSITIONS: [[Option<Cell>; CELL_COUNT]; 4] = {
    const N: Option<Cell> = None;
    [
        // nw
        [N, Some(0), N, N, N, Some(1), Some(2), Some(3), N, Some(5), Some(6), Some(7), Some(8),
            Some(9), Some(10), N, Some(12), Some(13), Some(14), Some(15), Some(16), Some(17), N, Some(19), Some(20), Some(21)],
        // ne
        [N, N, N, N, N, Some(2), Some(3), Some(4), Some(5), Some(6), Some(7), N, Some(9),
            Some(10), Some(11), Some(12), Some(13), Some(14), N, Some(16), Some(17), Some(18), Some(19), Some(20), Some(21), N],
        // sw
        [N, N, Some(5), Some(6), Some(7), Some(8), Some(9), Some(10), N, Some(12), Some(13), Some(14), Some(15),
            Some(16), Some(17), N, Some(19), Some(20), Some(21), Some(22), Some(23), Some(24), N, N, N, N],
        // se
        [Some(1), Some(5), Some(6), Some(7), N, Some(9), Some(10), Some(11), Some(12), Some(13), Some(14), N, Some(16),
            Some(17), Some(18), Some(19), Some(20), Some(21), N, Some(23), Some(24), Some(25), N, N, N, N],
    ]
};

/// Static adjacency of a board: for each [`Direction`], where a tile cell standing on a given cell ends up.
///
/// [`None`] means "off-board". Transitions can only ever be narrowed, never widened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    transitions: [Vec<Option<Cell>>; 4],
}

impl Topology {
    /// The 26-cell diamond of the physical game.
    pub fn diamond() -> Self {
        Self {
            transitions: DIAMOND_TRANSITIONS.map(|row| row.to_vec()),
        }
    }

    /// Build a topology from an explicit table, indexed by [`Direction::index`] then by cell.
    ///
    /// Returns [`None`] if the rows differ in length or a transition targets a cell outside the table.
    pub fn from_table(transitions: [Vec<Option<Cell>>; 4]) -> Option<Self> {
        let cell_count = transitions[0].len();
        let consistent = transitions.iter().all(|row| row.len() == cell_count
            && row.iter().flatten().all(|target| *target < cell_count));
        consistent.then_some(Self { transitions })
    }

    /// Number of cells the table covers.
    pub fn cell_count(&self) -> usize {
        self.transitions[0].len()
    }

    /// Where `cell` goes when moved in `direction`; [`None`] for off-board or for an unknown cell.
    #[inline]
    pub fn resulting_cell(&self, direction: Direction, cell: Cell) -> Option<Cell> {
        self.transitions[direction.index()].get(cell).copied().flatten()
    }

    /// Make `hole` unreachable from every direction, and leave it nowhere to go.
    fn close(&mut self, hole: Cell) {
        for row in self.transitions.iter_mut() {
            for target in row.iter_mut() {
                if *target == Some(hole) {
                    *target = None;
                }
            }
            if let Some(outgoing) = row.get_mut(hole) {
                *outgoing = None;
            }
        }
    }
}

/// A playing surface: a [`Topology`], the holes punched into it, and the exit cell.
///
/// Every board owns its own topology, so narrowing one board never affects another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    topology: Topology,
    holes: BTreeSet<Cell>,
    exit: Cell,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The hole-free diamond board with its exit at [`EXIT_CELL`].
    pub fn new() -> Self {
        Self {
            topology: Topology::diamond(),
            holes: BTreeSet::new(),
            exit: EXIT_CELL,
        }
    }

    /// A hole-free board over `topology`, escaping through `exit`.
    ///
    /// Returns [`None`] if `exit` is not a cell of `topology`.
    pub fn with_topology(topology: Topology, exit: Cell) -> Option<Self> {
        (exit < topology.cell_count()).then(|| Self {
            topology,
            holes: BTreeSet::new(),
            exit,
        })
    }

    /// The transitions left after holes were punched.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Number of cells, holes included.
    pub fn cell_count(&self) -> usize {
        self.topology.cell_count()
    }

    /// The cell the escape target must reach.
    pub fn exit(&self) -> Cell {
        self.exit
    }

    /// Holes in ascending order.
    pub fn holes(&self) -> impl Iterator<Item = Cell> + '_ {
        self.holes.iter().copied()
    }

    /// Whether `cell` is a hole.
    pub fn is_hole(&self, cell: Cell) -> bool {
        self.holes.contains(&cell)
    }

    /// Cells a tile may stand on: on the board and not a hole.
    pub fn playable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).filter(|cell| !self.is_hole(*cell))
    }

    /// See [`Topology::resulting_cell`].
    #[inline]
    pub fn resulting_cell(&self, direction: Direction, cell: Cell) -> Option<Cell> {
        self.topology.resulting_cell(direction, cell)
    }

    /// Punch holes at each of `holes`. This cannot be undone.
    ///
    /// Every transition into a hole becomes off-board, as does every transition out of it.
    /// Registering the same hole again changes nothing.
    /// Nothing is changed if any of `holes` lies outside the board.
    ///
    /// Holes may only be punched before the first search; [`Puzzle::set_holes`](crate::Puzzle::set_holes) and
    /// [`PuzzleBuilder::drop_location`](crate::PuzzleBuilder::drop_location) are the public ways in.
    pub(crate) fn set_holes(&mut self, holes: &[Cell]) -> Result<(), PuzzleError> {
        if let Some(cell) = holes.iter().find(|cell| **cell >= self.cell_count()) {
            return Err(PuzzleError::CellOutOfBounds { cell: *cell });
        }

        for hole in holes {
            if self.holes.insert(*hole) {
                self.topology.close(*hole);
            }
        }
        log::debug!("board holes now {:?}", self.holes);
        Ok(())
    }

    /// Translate every cell of `tile` one step in `direction`, or [`None`] if any cell would leave the board.
    pub fn translate(&self, tile: &Tile, direction: Direction) -> Option<Tile> {
        let cells = tile.cells().iter()
            .map(|cell| self.resulting_cell(direction, *cell))
            .collect::<Option<Vec<Cell>>>()?;
        Tile::from_cells(&cells)
    }

    /// Whether every cell of `tile` is on the board and not a hole.
    pub fn check_tile(&self, tile: &Tile) -> bool {
        !tile.is_empty() && tile.cells().iter().all(|cell| *cell < self.cell_count() && !self.is_hole(*cell))
    }

    /// Indices of the tiles of `position`, other than `index`, sharing a cell with the tile at `index`.
    pub fn overlapping(position: &Position, index: TileIndex) -> Vec<TileIndex> {
        let Some(reference) = position.tile(index) else {
            return Vec::new();
        };
        position.tiles().iter()
            .enumerate()
            .filter(|(other, tile)| *other != index && tile.overlaps(reference))
            .map(|(other, _)| other)
            .collect_vec()
    }

    /// Whether `position` is a legal game state here: no cell off-board or on a hole, and no two tiles sharing a cell.
    pub fn is_valid(&self, position: &Position) -> bool {
        position.tiles().iter().all(|tile| self.check_tile(tile))
            && position.tiles().iter().tuple_combinations().all(|(a, b)| !a.overlaps(b))
    }

    /// Whether any transition of this board, in any direction, leaves `cell`.
    pub fn has_exits(&self, cell: Cell) -> bool {
        Direction::VARIANTS.iter().any(|direction| self.resulting_cell(*direction, cell).is_some())
    }
}
