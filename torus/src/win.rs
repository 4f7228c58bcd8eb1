//! Detection of winning lines around a freshly placed token.

use tracing::{debug, instrument};

use crate::{Attribute, Board, Position, Token, ATTRIBUTES, BOARD_SIZE};

/// The four directions a line can run in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// From the top left to the bottom right.
    Diagonal,
    /// From the bottom left to the top right.
    AntiDiagonal,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::Diagonal,
    Direction::AntiDiagonal,
];

impl Direction {
    /// The (row, column) step between two neighboring cells of a line.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

/// Decides which lines of tokens win.
///
/// A line of `line_length` occupied cells wins if its tokens all agree on at
/// least one of the listed attributes. Changing the table changes the game
/// variant without touching the board or the game flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WinRule {
    line_length: usize,
    attributes: &'static [Attribute],
}

impl WinRule {
    /// Four in a line sharing any one of the four attributes.
    pub const SHARED_ATTRIBUTE: WinRule = WinRule {
        line_length: 4,
        attributes: &ATTRIBUTES,
    };

    /// Panics if the line length is zero or doesn't fit on the board.
    pub fn new(line_length: usize, attributes: &'static [Attribute]) -> Self {
        assert!(
            (1..=BOARD_SIZE).contains(&line_length),
            "line length must be between 1 and {}",
            BOARD_SIZE
        );
        Self {
            line_length,
            attributes,
        }
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }

    pub fn attributes(&self) -> &'static [Attribute] {
        self.attributes
    }

    /// Whether all tokens agree on at least one attribute of the table.
    pub fn is_satisfied_by(&self, tokens: &[Token]) -> bool {
        let Some(first) = tokens.first() else {
            return false;
        };
        self.attributes.iter().any(|&attribute| {
            let expected = first.has(attribute);
            tokens.iter().all(|token| token.has(attribute) == expected)
        })
    }
}

impl Default for WinRule {
    fn default() -> Self {
        Self::SHARED_ATTRIBUTE
    }
}

/// Returns the directions in which the token at cell `index` is part of a winning line.
///
/// Every window of `line_length` consecutive cells that contains the cell is
/// considered. On a standard board, windows that leave the board are skipped,
/// on a torus they wrap around.
pub fn winning_lines(board: &Board, index: usize, rule: &WinRule) -> Vec<Direction> {
    if board.get(index).is_none() {
        return Vec::new();
    }
    DIRECTIONS
        .into_iter()
        .filter(|&direction| {
            (0..rule.line_length).any(|offset| window_wins(board, index, direction, offset, rule))
        })
        .collect()
}

/// Whether the token just placed at cell `index` completes a winning line.
///
/// This does not mutate anything and may be called any number of times.
#[instrument(skip(board))]
pub fn is_winning_move(board: &Board, index: usize, rule: &WinRule) -> bool {
    let lines = winning_lines(board, index, rule);
    if !lines.is_empty() {
        debug!(?lines, "winning lines found");
    }
    !lines.is_empty()
}

// The window starts `offset` steps before the cell at `index`.
fn window_wins(
    board: &Board,
    index: usize,
    direction: Direction,
    offset: usize,
    rule: &WinRule,
) -> bool {
    let (row, col) = Board::coordinates(index);
    let (d_row, d_col) = direction.step();
    let mut tokens = Vec::with_capacity(rule.line_length);
    for k in 0..rule.line_length {
        let steps = k as i32 - offset as i32;
        let position = Position::new(row as i32 + steps * d_row, col as i32 + steps * d_col);
        let occupant = match board.get_at(position) {
            Ok(Some(occupant)) => occupant,
            // Out of bounds or an empty cell
            _ => return false,
        };
        tokens.push(occupant.token);
    }
    rule.is_satisfied_by(&tokens)
}
