use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Separates the row from the column in the textual form of a [`Position`].
pub const COORDINATE_SEPARATOR: char = ';';

/// A pair of coordinates as entered by a player.
///
/// The coordinates are not validated on construction. Whether they denote a
/// cell, and which one, is up to the [`BoardType`] of the board they are used on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.row, COORDINATE_SEPARATOR, self.col)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Parses `<row>;<column>`, e.g. `2;-1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCoordinates {
            argument: String::from(s),
        };
        let (row, col) = s.split_once(COORDINATE_SEPARATOR).ok_or_else(invalid)?;
        if col.contains(COORDINATE_SEPARATOR) {
            return Err(invalid());
        }
        let row = row.parse::<i32>().map_err(|_| invalid())?;
        let col = col.parse::<i32>().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}

/// The topology of the board, chosen when a game is started.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    /// Coordinates outside of the grid are rejected.
    #[default]
    Standard,
    /// Coordinates wrap around at the edges, in both directions.
    Torus,
}

impl BoardType {
    pub fn name(self) -> &'static str {
        match self {
            BoardType::Standard => "standard",
            BoardType::Torus => "torus",
        }
    }

    /// Maps a single coordinate onto `0..size`, or `None` if this topology
    /// doesn't allow it.
    pub fn wrap(self, coordinate: i32, size: i32) -> Option<i32> {
        match self {
            BoardType::Standard => (0..size).contains(&coordinate).then_some(coordinate),
            BoardType::Torus => Some(coordinate.rem_euclid(size)),
        }
    }
}

impl std::fmt::Display for BoardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(BoardType::Standard),
            "torus" => Ok(BoardType::Torus),
            _ => Err(ParseError::UnknownBoardType {
                argument: String::from(s),
            }),
        }
    }
}
