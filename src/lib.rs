#![warn(missing_docs)]

//! # `antivirus`
//!
//! A solver for the sliding-tile escape puzzle sold as *Anti-Virus*: coloured tiles of one to four cells sit on a
//! diamond-shaped board of 26 cells, and the goal is to slide the red tile out through the exit corner.
//! Begin with a [`Puzzle`], either directly or through a [`PuzzleBuilder`], punch holes into its board, place tiles,
//! then call [`solve()`](Puzzle::solve) and read back the [`shortest_path()`](Puzzle::shortest_path).
//!
//! Tiles only ever move diagonally, one step at a time. A tile pushed into another pushes that one along, and so on;
//! the whole block moves or nothing does.
//!
//! # Internals
//! Positions are the vertices of an implicit undirected graph whose edges are single block moves.
//! [`solve()`] runs a breadth-first search over that graph, optionally charging a block move one step per tile it
//! carries, and records for every settled position the move that first reached it.
//!
//! Beyond a single path, [`hopcroft_tarjan()`] splits the whole reachable component into biconnected components.
//! An articulation point on the solution path is a [`ForcedPassage`]: a position every solution must cross.
//! [`census()`] partitions every placement of a set of tiles into mutually reachable classes.

pub use articulation::{hopcroft_tarjan, Biconnectivity, ComponentId};
pub use board::{Board, Topology};
pub use builder::PuzzleBuilder;
pub use cell::{Cell, CELL_COUNT, EXIT_CELL};
pub use census::{census, Component, ComponentCensus};
pub use error::PuzzleError;
pub use graph::{PositionId, ReachabilityGraph};
pub use moves::{BlockMove, Move};
pub use passage::{analyze, forced_passages, ForcedPassage};
pub use path::{moves_of, replay, Step};
pub use position::{Position, Tile, TileIndex, MAX_TILE_CELLS};
pub use puzzle::Puzzle;
pub use shape::{place_tile, Direction, Orientation, TileName};
pub use solver::{solve, Goal, Origin, SearchOptions, SearchTree};

pub mod articulation;
pub(crate) mod board;
pub mod builder;
pub mod cell;
pub mod census;
pub(crate) mod error;
pub mod graph;
pub(crate) mod moves;
pub mod passage;
pub(crate) mod path;
pub(crate) mod position;
pub(crate) mod puzzle;
pub mod shape;
pub(crate) mod solver;
