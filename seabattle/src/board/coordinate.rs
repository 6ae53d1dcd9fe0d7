// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Coordinates of cells on the 10x10 board.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;

/// Matcher for an attack target such as `a1` or `J10`.
static TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(?P<row>[A-J])(?P<col>[0-9]{1,2})$").unwrap());

/// The coordinates of a cell in the board. Rows are labelled `A` to `J` and columns `1`
/// to `10` when displayed, but both are stored zero-based.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Row of the cell, `0` is row `A`.
    pub row: usize,
    /// Column of the cell, `0` is column `1`.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from a zero-based `row` and `col`. The result may be
    /// out of bounds; use [`Coordinate::in_bounds`] to check.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Construct a [`Coordinate`] from signed components, returning `None` if it would lie
    /// off the board.
    pub fn from_signed(row: isize, col: isize) -> Option<Self> {
        let size = BOARD_SIZE as isize;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Whether this coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Iterate over every coordinate of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate { row, col }))
    }
}

/// Convert a row letter to its zero-based index. Only `A`-`J` (either case) are accepted.
pub(crate) fn row_index(letter: &str) -> Option<usize> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            let idx = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            if idx < BOARD_SIZE {
                Some(idx)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Label used for the given zero-based row.
pub fn row_label(row: usize) -> char {
    if row < 26 {
        (b'A' + row as u8) as char
    } else {
        '?'
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", row_label(self.row), self.col + 1)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from a zero-based `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Error returned when a string is not a valid target such as `A1` or `J10`.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid coordinate {0:?}")]
pub struct ParseCoordinateError(String);

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse a row letter `A`-`J` followed by a column number `1`-`10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCoordinateError(s.to_owned());
        let captures = TARGET.captures(s.trim()).ok_or_else(invalid)?;
        let row = row_index(&captures["row"]).ok_or_else(invalid)?;
        let col: usize = captures["col"].parse().map_err(|_| invalid())?;
        if (1..=BOARD_SIZE).contains(&col) {
            Ok(Coordinate::new(row, col - 1))
        } else {
            Err(invalid())
        }
    }
}
