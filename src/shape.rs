//! Move directions and the tile shape catalogue.

use itertools::Itertools;
use strum::{Display, EnumString, VariantArray};

use crate::cell::{cell_at, coord_of, Cell, LatticePoint};
use crate::position::Tile;

/// The four diagonal move directions.
///
/// [`VARIANTS`](VariantArray::VARIANTS) lists them in the fixed order every search tries them: NW, NE, SW, SE.
#[derive(Copy, Clone, VariantArray, Display, EnumString, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Up the `y` axis, towards the exit corner.
    Nw,
    /// Up the `x` axis.
    Ne,
    /// Down the `x` axis.
    Sw,
    /// Down the `y` axis, away from the exit corner.
    Se,
}

impl Direction {
    /// Position of `self` in [`VARIANTS`](VariantArray::VARIANTS); also the row of a transition table.
    pub fn index(self) -> usize {
        match self {
            Self::Nw => 0,
            Self::Ne => 1,
            Self::Sw => 2,
            Self::Se => 3,
        }
    }

    /// Step from `point` in the direction specified by `self`.
    pub fn attempt_from(self, point: LatticePoint) -> LatticePoint {
        let (x, y) = point;
        match self {
            Self::Nw => (x, y + 1),
            Self::Ne => (x + 1, y),
            Self::Sw => (x - 1, y),
            Self::Se => (x, y - 1),
        }
    }
}

/// The recognised tile keys, in registration order of the physical game.
///
/// The first variant is the default escape target.
/// Keys parse from and display as their lowercase names, e.g. `"red"`.
#[derive(Copy, Clone, VariantArray, Display, EnumString, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[strum(serialize_all = "lowercase")]
pub enum TileName {
    /// Two cells in a NW line; the escape target.
    Red,
    /// Two cells in a NE line.
    Blue,
    /// Three cells bent around the anchor.
    Orange,
    /// Two cells stacked vertically.
    Pink,
    /// Same shape as [`Pink`](Self::Pink).
    Forest,
    /// Three cells in a vertical line.
    Night,
    /// Three cells, two above the anchor.
    Purple,
    /// Three cells, one above and one diagonally below the anchor.
    Apple,
    /// Mirror of [`Apple`](Self::Apple).
    Yellow,
}

impl TileName {
    /// The tile that must escape through the exit under the default goal.
    pub const TARGET: Self = Self::Red;

    /// Lattice offsets of this tile's cells relative to its anchor, in upright orientation.
    pub fn offsets(self) -> &'static [LatticePoint] {
        match self {
            Self::Red => &[(0, 0), (0, 1)],
            Self::Blue => &[(0, 0), (1, 0)],
            Self::Forest | Self::Pink => &[(0, 0), (1, 1)],
            Self::Orange => &[(1, 0), (0, 0), (0, 1)],
            Self::Purple => &[(1, 1), (0, 0), (-1, 1)],
            Self::Apple => &[(0, 1), (0, 0), (-1, -1)],
            Self::Yellow => &[(0, 1), (0, 0), (1, -1)],
            Self::Night => &[(1, 1), (0, 0), (-1, -1)],
        }
    }

    /// Orientations this tile may take; the rest are excluded by the game or by symmetry.
    pub fn allowed_orientations(self) -> &'static [Orientation] {
        match self {
            Self::Red | Self::Blue => &[Orientation::Upright],
            Self::Forest | Self::Pink | Self::Night => &[Orientation::Upright, Orientation::QuarterTurn],
            Self::Orange | Self::Purple | Self::Apple | Self::Yellow => Orientation::VARIANTS,
        }
    }
}

/// Quarter-turn rotations of a tile shape on the lattice.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Orientation {
    /// The catalogue shape as listed by [`TileName::offsets`].
    Upright,
    /// `(x, y)` becomes `(y, -x)`.
    QuarterTurn,
    /// `(x, y)` becomes `(-x, -y)`.
    HalfTurn,
    /// `(x, y)` becomes `(-y, x)`.
    ThreeQuarterTurn,
}

impl Orientation {
    /// Rotate a relative offset.
    pub fn rotate(self, offset: LatticePoint) -> LatticePoint {
        let (x, y) = offset;
        match self {
            Self::Upright => (x, y),
            Self::QuarterTurn => (y, -x),
            Self::HalfTurn => (-x, -y),
            Self::ThreeQuarterTurn => (-y, x),
        }
    }
}

/// Place tile `name` in `orientation` with its anchor on `location`.
///
/// Cells come back in the order of [`TileName::offsets`].
/// Returns [`None`] if `location` is not a cell or any cell of the tile falls off the lattice.
/// Holes are not considered here; see [`Board::check_tile`](crate::Board::check_tile).
pub fn place_tile(name: TileName, orientation: Orientation, location: Cell) -> Option<Tile> {
    let (ax, ay) = coord_of(location)?;
    let cells = name.offsets().iter()
        .map(|offset| orientation.rotate(*offset))
        .map(|(dx, dy)| cell_at((ax + dx, ay + dy)))
        .collect::<Option<Vec<Cell>>>()?;
    Tile::from_cells(&cells)
}

/// Every on-lattice placement of `name` in `orientation` whose anchor lies in `locations`, in the order of `locations`.
pub fn placements(name: TileName, orientation: Orientation, locations: impl IntoIterator<Item = Cell>) -> Vec<Tile> {
    locations.into_iter()
        .filter_map(|location| place_tile(name, orientation, location))
        .collect_vec()
}
