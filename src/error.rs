use crate::cell::Cell;
use crate::shape::TileName;

/// Reasons a puzzle cannot be configured, or a request cannot be served.
///
/// Moves that would push a tile off the board are not errors; [`Board::apply_move`](crate::Board::apply_move)
/// simply yields [`None`]. A search that ends without meeting its goal is not an error either.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A tile key outside [`TileName`] was used.
    #[display("'{name}' is not a valid tile key")]
    UnknownTile {
        /// The key as given.
        name: String,
    },
    /// The same tile key was placed twice.
    #[display("tile '{name}' is placed more than once")]
    DuplicateTile {
        /// The repeated key.
        name: TileName,
    },
    /// A tile was given no cells.
    #[display("tile '{name}' covers no cells")]
    EmptyTile {
        /// The empty tile.
        name: TileName,
    },
    /// A tile was given more cells than a tile can hold.
    #[display("tile '{name}' covers {len} cells, more than a tile can hold")]
    OversizedTile {
        /// The oversized tile.
        name: TileName,
        /// Number of cells given.
        len: usize,
    },
    /// The escape goal was requested, but the initial position does not place the target tile.
    #[display("initial position does not place the escape target '{target}'")]
    MissingTarget {
        /// The tile the escape goal needs.
        target: TileName,
    },
    /// A cell index outside the board.
    #[display("cell {cell} is outside the board")]
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
    /// A tile shape anchored at `location` does not fit on the board.
    #[display("tile '{name}' does not fit on the board when anchored at {location}")]
    TileOffBoard {
        /// The tile being placed.
        name: TileName,
        /// Its anchor cell.
        location: Cell,
    },
    /// Tiles overlap, leave the board or stand on a hole.
    #[display("tiles overlap, leave the board or stand on a hole")]
    InvalidPosition,
    /// A replacement position does not have one tile per registered key.
    #[display("expected {expected} tiles, found {found}")]
    TileCountMismatch {
        /// Number of registered tiles.
        expected: usize,
        /// Number of tiles in the replacement.
        found: usize,
    },
    /// A path or forced passages were requested before any search was run.
    #[display("no search has been run yet")]
    NoSearch,
    /// Holes were added after a search already ran on the board.
    #[display("holes can only be set before the first search")]
    BoardLocked,
}
