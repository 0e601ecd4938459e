//! Cell numbering of the diamond board and its 2D lattice coordinates.

use std::sync::LazyLock;

use ndarray::Array2;

/// Index of a board location. The diamond board uses `0..CELL_COUNT`.
pub type Cell = usize;
/// Signed coordinate along one lattice axis.
pub type Coord = isize;
/// Lattice coordinates, `(x, y)` along the (NE, NW) axes with cell 13 at the origin.
pub type LatticePoint = (Coord, Coord);

/// Number of cells on the diamond board.
pub const CELL_COUNT: usize = 26;
/// The cell the escape target must reach.
pub const EXIT_CELL: Cell = 0;

// Locations are indexed as follows:
//  0
//    1   2   3   4
//      5   6   7
//    8   9  10  11
//     12  13  14
//   15  16  17  18
//     19  20  21
//   22  23  24  25
const LATTICE: [LatticePoint; CELL_COUNT] = [
    (0, 4),
    (0, 3), (1, 2), (2, 1), (3, 0),
    (0, 2), (1, 1), (2, 0),
    (-1, 2), (0, 1), (1, 0), (2, -1),
    (-1, 1), (0, 0), (1, -1),
    (-2, 1), (-1, 0), (0, -1), (1, -2),
    (-2, 0), (-1, -1), (0, -2),
    (-3, 0), (-2, -1), (-1, -2), (0, -3),
];

const MIN_X: Coord = -3;
const MAX_X: Coord = 3;
const MIN_Y: Coord = -3;
const MAX_Y: Coord = 4;

// rows are y, columns are x
static CELL_GRID: LazyLock<Array2<Option<Cell>>> = LazyLock::new(|| {
    let mut grid = Array2::from_elem(((MAX_Y - MIN_Y + 1) as usize, (MAX_X - MIN_X + 1) as usize), None);
    for (cell, (x, y)) in LATTICE.iter().enumerate() {
        grid[[(y - MIN_Y) as usize, (x - MIN_X) as usize]] = Some(cell);
    }
    grid
});

/// The lattice coordinates of `cell`, or [`None`] if it is not a cell of the diamond board.
pub fn coord_of(cell: Cell) -> Option<LatticePoint> {
    LATTICE.get(cell).copied()
}

/// The cell at lattice coordinates `point`, if there is one.
pub fn cell_at(point: LatticePoint) -> Option<Cell> {
    let (x, y) = point;
    if !(MIN_X..=MAX_X).contains(&x) || !(MIN_Y..=MAX_Y).contains(&y) {
        return None;
    }
    CELL_GRID.get(((y - MIN_Y) as usize, (x - MIN_X) as usize)).copied().flatten()
}
