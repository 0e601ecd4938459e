use std::str::FromStr;

use itertools::Itertools;

use crate::articulation::Biconnectivity;
use crate::board::Board;
use crate::cell::Cell;
use crate::error::PuzzleError;
use crate::passage::{analyze, forced_passages, ForcedPassage};
use crate::path::Step;
use crate::position::{Position, Tile, TileIndex};
use crate::shape::TileName;
use crate::solver::{solve, Goal, SearchOptions, SearchTree};

/// One puzzle: a board, named tiles placed on it, and the result of the latest search.
///
/// Holes must be set before the first search; the initial position may be replaced at any time,
/// which discards the previous search.
#[derive(Clone, Debug, Default)]
pub struct Puzzle {
    board: Board,
    names: Vec<TileName>,
    initial: Position,
    search: Option<SearchTree>,
    searched: bool,
}

impl Puzzle {
    /// An empty puzzle on the hole-free diamond board.
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// An empty puzzle on `board`, keeping any holes it already has.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            names: Vec::new(),
            initial: Position::default(),
            search: None,
            searched: false,
        }
    }

    /// Assemble a puzzle from parts already checked by the caller.
    pub(crate) fn from_parts(board: Board, names: Vec<TileName>, initial: Position) -> Self {
        Self {
            board,
            names,
            initial,
            search: None,
            searched: false,
        }
    }

    /// The board, holes included.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Registered tile keys, in tile index order.
    pub fn tile_names(&self) -> &[TileName] {
        &self.names
    }

    /// Where the next search starts.
    pub fn initial_position(&self) -> &Position {
        &self.initial
    }

    /// Index of the tile registered under `name`.
    pub fn tile_index(&self, name: TileName) -> Option<TileIndex> {
        self.names.iter().position(|registered| *registered == name)
    }

    /// The latest search, if one has run since the initial position was last set.
    pub fn search(&self) -> Option<&SearchTree> {
        self.search.as_ref()
    }

    /// Punch holes into the board. Irreversible, and refused once any search has run.
    pub fn set_holes(&mut self, holes: &[Cell]) -> Result<(), PuzzleError> {
        if self.searched {
            return Err(PuzzleError::BoardLocked);
        }
        self.board.set_holes(holes)
    }

    /// Place tiles by key, e.g. `[("red", [13, 17])]`. Tile indices follow the order given.
    ///
    /// Only the keys and tile sizes are checked here; see [`check_initial_position`](Self::check_initial_position)
    /// for the position itself. Nothing changes on error.
    pub fn set_initial_position<I, S, C>(&mut self, placements: I) -> Result<(), PuzzleError>
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: AsRef<[Cell]>,
    {
        let named = placements.into_iter()
            .map(|(key, cells)| TileName::from_str(key.as_ref())
                .map(|name| (name, cells))
                .map_err(|_| PuzzleError::UnknownTile { name: key.as_ref().to_owned() }))
            .collect::<Result<Vec<_>, PuzzleError>>()?;
        self.set_named_position(named)
    }

    /// [`set_initial_position`](Self::set_initial_position) with typed keys.
    pub fn set_named_position<I, C>(&mut self, placements: I) -> Result<(), PuzzleError>
    where
        I: IntoIterator<Item = (TileName, C)>,
        C: AsRef<[Cell]>,
    {
        let mut names = Vec::new();
        let mut tiles = Vec::new();
        for (name, cells) in placements {
            if names.contains(&name) {
                return Err(PuzzleError::DuplicateTile { name });
            }
            let cells = cells.as_ref();
            if cells.is_empty() {
                return Err(PuzzleError::EmptyTile { name });
            }
            let tile = Tile::from_cells(cells).ok_or(PuzzleError::OversizedTile { name, len: cells.len() })?;
            names.push(name);
            tiles.push(tile);
        }

        self.names = names;
        self.initial = Position::new(tiles);
        self.search = None;
        Ok(())
    }

    /// Replace the placement of the registered tiles with `position`, keeping their keys.
    pub fn reset_fast(&mut self, position: Position) -> Result<(), PuzzleError> {
        if position.len() != self.names.len() {
            return Err(PuzzleError::TileCountMismatch { expected: self.names.len(), found: position.len() });
        }
        let placements = self.names.iter().copied()
            .zip(position.into_tiles())
            .collect_vec();
        self.set_named_position(placements.iter().map(|(name, tile)| (*name, tile.cells())))
    }

    /// Whether the initial position is legal: on the board, off the holes, no overlaps. Solvability is not checked.
    pub fn check_initial_position(&self) -> bool {
        self.board.is_valid(&self.initial)
    }

    /// Search for the classic escape: the red tile reaching the exit.
    ///
    /// Returns whether a solution was found; the search is kept for [`shortest_path`](Self::shortest_path).
    pub fn solve(&mut self, options: SearchOptions) -> Result<bool, PuzzleError> {
        let target = self.tile_index(TileName::TARGET)
            .ok_or(PuzzleError::MissingTarget { target: TileName::TARGET })?;
        Ok(self.solve_until(&Goal::Escape { target }, options))
    }

    /// Search from the initial position until `goal` is met; see [`solve`](crate::solve).
    pub fn solve_until(&mut self, goal: &Goal<'_>, options: SearchOptions) -> bool {
        let tree = solve(&self.board, &self.initial, goal, options);
        let found = tree.found();
        self.search = Some(tree);
        self.searched = true;
        found
    }

    /// The path found by the latest search, start to end.
    pub fn shortest_path(&self) -> Result<Vec<Step>, PuzzleError> {
        self.search.as_ref()
            .map(SearchTree::shortest_path)
            .ok_or(PuzzleError::NoSearch)
    }

    /// Biconnectivity of everything reachable from the initial position.
    pub fn biconnectivity(&self) -> Biconnectivity<Position> {
        analyze(&self.board, &self.initial)
    }

    /// Positions on the latest path that every path between its ends must cross.
    ///
    /// This explores the whole reachable component; skip it when the component is large and the answer is not needed.
    pub fn forced_passages(&self) -> Result<Vec<ForcedPassage>, PuzzleError> {
        let path = self.shortest_path()?;
        Ok(forced_passages(&self.biconnectivity(), &path))
    }
}
