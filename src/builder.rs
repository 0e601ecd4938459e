//! Chainable construction of a [`Puzzle`](crate::Puzzle).

use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::PuzzleError;
use crate::position::{Position, Tile};
use crate::puzzle::Puzzle;
use crate::shape::{place_tile, Orientation, TileName};

/// A chainable way to set up a [`Puzzle`], collecting every configuration mistake instead of stopping at the first.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder is invalid, every further call does nothing; check [`is_valid`](Self::is_valid) or [`build`](Self::build) to see why.
#[derive(Clone, Debug, Default)]
pub struct PuzzleBuilder {
    board: Board,
    names: Vec<TileName>,
    tiles: Vec<Tile>,
    invalid_reasons: Vec<PuzzleError>,
}

impl PuzzleBuilder {
    /// Start from the hole-free diamond board.
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Start from `board`, keeping any holes it already has.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            names: Vec::new(),
            tiles: Vec::new(),
            invalid_reasons: Vec::new(),
        }
    }

    /// Add the tile keyed `key` covering exactly `cells`.
    ///
    /// May invalidate the builder with [`UnknownTile`](PuzzleError::UnknownTile), [`DuplicateTile`](PuzzleError::DuplicateTile),
    /// [`EmptyTile`](PuzzleError::EmptyTile), [`OversizedTile`](PuzzleError::OversizedTile) or
    /// [`InvalidPosition`](PuzzleError::InvalidPosition).
    pub fn add_tile(&mut self, key: &str, cells: &[Cell]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let Ok(name) = TileName::from_str(key) else {
            self.invalid_reasons.push(PuzzleError::UnknownTile { name: key.to_owned() });
            return self;
        };
        if cells.is_empty() {
            self.invalid_reasons.push(PuzzleError::EmptyTile { name });
            return self;
        }
        let Some(tile) = Tile::from_cells(cells) else {
            self.invalid_reasons.push(PuzzleError::OversizedTile { name, len: cells.len() });
            return self;
        };

        self.push_tile(name, tile)
    }

    /// Add tile `name` in its catalogue shape, rotated to `orientation` and anchored at `location`.
    ///
    /// May invalidate the builder with [`TileOffBoard`](PuzzleError::TileOffBoard) if the shape does not fit, or as
    /// [`add_tile`](Self::add_tile) does.
    pub fn place_tile(&mut self, name: TileName, orientation: Orientation, location: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match place_tile(name, orientation, location) {
            Some(tile) => self.push_tile(name, tile),
            None => {
                self.invalid_reasons.push(PuzzleError::TileOffBoard { name, location });
                self
            }
        }
    }

    /// Remove the most recently added tile.
    ///
    /// If the builder is in an invalid state or no tiles are present, this function does nothing.
    pub fn pop_tile(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.names.pop();
        self.tiles.pop();
        self
    }

    /// Punch a hole at `location`.
    ///
    /// May invalidate the builder with [`CellOutOfBounds`](PuzzleError::CellOutOfBounds), or with
    /// [`InvalidPosition`](PuzzleError::InvalidPosition) if a tile already stands there.
    pub fn drop_location(&mut self, location: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Err(reason) = self.board.set_holes(&[location]) {
            self.invalid_reasons.push(reason);
            return self;
        }
        self.check_position()
    }

    /// Shorthand for multiple calls to [`Self::drop_location`], with the same conditions.
    pub fn drop_locations(&mut self, locations: &[Cell]) -> &mut Self {
        for location in locations {
            self.drop_location(*location);
        }

        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<PuzzleError>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<PuzzleError>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Puzzle`] ready to search.
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`PuzzleError`] will indicate why.
    pub fn build(&self) -> Result<Puzzle, &Vec<PuzzleError>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Puzzle::from_parts(self.board.clone(), self.names.clone(), Position::new(self.tiles.clone())))
    }

    fn push_tile(&mut self, name: TileName, tile: Tile) -> &mut Self {
        if self.names.contains(&name) {
            self.invalid_reasons.push(PuzzleError::DuplicateTile { name });
            return self;
        }

        self.names.push(name);
        self.tiles.push(tile);
        self.check_position()
    }

    fn check_position(&mut self) -> &mut Self {
        let position = Position::new(self.tiles.clone());
        if !self.board.is_valid(&position) {
            self.invalid_reasons.push(PuzzleError::InvalidPosition);
        }

        self
    }
}
