mod position;

pub use position::*;

use crate::{Player, RuleViolation, Token};

/// The number of rows, and also the number of columns.
pub const BOARD_SIZE: usize = 6;

pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A full row or column, in ascending order of the other coordinate.
pub type Line = [Option<Occupant>; BOARD_SIZE];

/// The content of an occupied cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub token: Token,
    /// The player who placed the token.
    pub player: Player,
}

/// The square playing grid.
///
/// Cells are stored in row-major order and addressed by a cell index in
/// `0..NUM_CELLS`. A [`Position`] is mapped to a cell index with
/// [`Self::resolve()`], which is where the [`BoardType`] comes into play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    board_type: BoardType,
    /// An occupied cell is never emptied again, except by [`Self::initialize()`].
    cells: [Option<Occupant>; NUM_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new(board_type: BoardType) -> Self {
        Self {
            board_type,
            cells: [None; NUM_CELLS],
        }
    }

    /// Empties all cells and switches to the given topology.
    pub fn initialize(&mut self, board_type: BoardType) {
        *self = Self::new(board_type);
    }

    pub fn board_type(&self) -> BoardType {
        self.board_type
    }

    /// Maps a position to a cell index.
    ///
    /// On a standard board this fails for coordinates outside of
    /// `0..BOARD_SIZE`, on a torus every position denotes some cell.
    pub fn resolve(&self, position: Position) -> Result<usize, RuleViolation> {
        let size = BOARD_SIZE as i32;
        let row = self.board_type.wrap(position.row, size);
        let col = self.board_type.wrap(position.col, size);
        match (row, col) {
            (Some(row), Some(col)) => Ok(row as usize * BOARD_SIZE + col as usize),
            _ => Err(RuleViolation::OutOfBounds { position }),
        }
    }

    /// Maps a row or column index onto `0..BOARD_SIZE`, following the same
    /// rules as [`Self::resolve()`].
    pub fn resolve_line(&self, index: i32) -> Result<usize, RuleViolation> {
        self.board_type
            .wrap(index, BOARD_SIZE as i32)
            .map(|i| i as usize)
            .ok_or(RuleViolation::LineOutOfBounds { index })
    }

    /// The row and column of a cell index.
    pub fn coordinates(index: usize) -> (usize, usize) {
        debug_assert!(index < NUM_CELLS);
        (index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Puts a token on an empty cell and returns the index of that cell.
    ///
    /// Nothing is changed if this returns an error.
    pub fn place(
        &mut self,
        position: Position,
        token: Token,
        player: Player,
    ) -> Result<usize, RuleViolation> {
        let index = self.resolve(position)?;
        if let Some(existing) = self.cells[index] {
            let (row, col) = Self::coordinates(index);
            return Err(RuleViolation::CellOccupied {
                row: row as i32,
                col: col as i32,
                existing: existing.token,
            });
        }
        self.cells[index] = Some(Occupant { token, player });
        Ok(index)
    }

    /// Returns the occupant of a cell index, if any.
    ///
    /// Panics if `index >= NUM_CELLS`.
    pub fn get(&self, index: usize) -> Option<Occupant> {
        self.cells[index]
    }

    /// Returns the occupant at a position, resolved according to the topology.
    pub fn get_at(&self, position: Position) -> Result<Option<Occupant>, RuleViolation> {
        self.resolve(position).map(|index| self.cells[index])
    }

    pub fn row_line(&self, index: i32) -> Result<Line, RuleViolation> {
        let row = self.resolve_line(index)?;
        Ok(std::array::from_fn(|col| self.cells[row * BOARD_SIZE + col]))
    }

    pub fn column_line(&self, index: i32) -> Result<Line, RuleViolation> {
        let col = self.resolve_line(index)?;
        Ok(std::array::from_fn(|row| self.cells[row * BOARD_SIZE + col]))
    }

    pub fn num_occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterates over the occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Occupant)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|occupant| (index, occupant)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardType::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::visualize_board(self))
    }
}
