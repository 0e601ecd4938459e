use std::ops::Index;

use tinyvec::ArrayVec;

use crate::cell::Cell;

/// Stable index of a tile within a [`Position`], i.e. its registration order.
pub type TileIndex = usize;

/// Largest number of cells a single tile may cover.
pub const MAX_TILE_CELLS: usize = 4;

/// One placed tile: the ordered cells it covers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(ArrayVec<[Cell; MAX_TILE_CELLS]>);

impl Tile {
    /// Build a tile from its cells, in shape order.
    ///
    /// Returns [`None`] if `cells` is empty or longer than [`MAX_TILE_CELLS`].
    pub fn from_cells(cells: &[Cell]) -> Option<Self> {
        if cells.is_empty() || cells.len() > MAX_TILE_CELLS {
            return None;
        }
        let mut inner = ArrayVec::new();
        inner.extend_from_slice(cells);
        Some(Self(inner))
    }

    /// Covered cells, in shape order.
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a tile built by [`from_cells`](Self::from_cells).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the tile covers `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// Whether `self` and `other` share at least one cell.
    pub fn overlaps(&self, other: &Tile) -> bool {
        self.0.iter().any(|cell| other.contains(*cell))
    }
}

/// The full placement of every tracked tile: one game state.
///
/// Positions compare and hash structurally, tile by tile in index order,
/// so they serve directly as keys of a search's visited map.
/// A position is never mutated once built; moves produce new positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(Vec<Tile>);

impl Position {
    /// A position holding `tiles`, tile `i` at index `i`.
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self(tiles)
    }

    /// All tiles in index order.
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    /// The tile at `index`, if there is one.
    pub fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.0.get(index)
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tile is tracked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the tile at `index` covers `cell`.
    pub fn occupies(&self, index: TileIndex, cell: Cell) -> bool {
        self.tile(index).is_some_and(|tile| tile.contains(cell))
    }

    pub(crate) fn into_tiles(self) -> Vec<Tile> {
        self.0
    }
}

impl Index<TileIndex> for Position {
    type Output = Tile;

    fn index(&self, index: TileIndex) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<Tile> for Position {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
