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
//! Parsing and validation of ship placement commands.
//!
//! A placement code is written `[length][row][column][direction]`, for example `5A1R`
//! places a ship of length 5 on `A1` through `A5`, and `3B10L` a ship of length 3 on
//! `B10` through `B8`. Besides codes, `x` clears the board and `xxx` quits.
use std::{fmt, str::FromStr};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    board::{row_index, row_label, Board, BoardError, Coordinate, ShipKey},
    errors::{Rejection, Violation},
    ships::{Fleet, ShipSpec},
};

/// Matcher for placement codes. Accepts 4 or 5 characters.
static PLACEMENT_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?xi)
        (?P<length>[0-9])
        (?P<row>[A-J])
        (?P<col>[0-9]{1,2})
        (?P<dir>[RLUD])$",
    )
    .unwrap()
});

/// Direction a ship extends in from its starting cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// Row and column offset of one step in this direction.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Up => (-1, 0),
            Orientation::Down => (1, 0),
            Orientation::Left => (0, -1),
            Orientation::Right => (0, 1),
        }
    }

    fn from_letter(letter: &str) -> Option<Self> {
        match letter.to_ascii_uppercase().as_str() {
            "U" => Some(Orientation::Up),
            "D" => Some(Orientation::Down),
            "L" => Some(Orientation::Left),
            "R" => Some(Orientation::Right),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            Orientation::Up => 'U',
            Orientation::Down => 'D',
            Orientation::Left => 'L',
            Orientation::Right => 'R',
        }
    }
}

/// A syntactically valid placement code. The column is kept as typed, so a parsed code
/// may still describe a ship that lies off the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlacementCode {
    length: usize,
    row: usize,
    column: usize,
    orientation: Orientation,
}

impl PlacementCode {
    /// Length of the ship to place.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Zero-based row of the starting cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column number of the starting cell as written, where `1` is the first column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Direction the ship extends in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Signed positions of every cell the ship would cover, starting at the origin.
    fn raw_cells(&self) -> impl Iterator<Item = (isize, isize)> {
        let (dr, dc) = self.orientation.step();
        let row = self.row as isize;
        let col = self.column as isize - 1;
        (0..self.length as isize).map(move |i| (row + dr * i, col + dc * i))
    }

    /// Cells the ship would cover, or `None` if any of them lies off the board.
    pub fn target_cells(&self) -> Option<Vec<Coordinate>> {
        self.raw_cells()
            .map(|(row, col)| Coordinate::from_signed(row, col))
            .collect()
    }
}

impl FromStr for PlacementCode {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = PLACEMENT_CODE
            .captures(s.trim())
            .ok_or(Violation::MalformedCode)?;
        let length = captures["length"]
            .parse()
            .map_err(|_| Violation::MalformedCode)?;
        let row = row_index(&captures["row"]).ok_or(Violation::MalformedCode)?;
        let column = captures["col"]
            .parse()
            .map_err(|_| Violation::MalformedCode)?;
        let orientation =
            Orientation::from_letter(&captures["dir"]).ok_or(Violation::MalformedCode)?;
        Ok(Self {
            length,
            row,
            column,
            orientation,
        })
    }
}

impl fmt::Display for PlacementCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.length,
            row_label(self.row),
            self.column,
            self.orientation.letter()
        )
    }
}

/// A command entered during the placement phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlacementCommand {
    /// Place a ship.
    Place(PlacementCode),
    /// Remove every ship and start over.
    Reset,
    /// Leave the game.
    Quit,
}

impl PlacementCommand {
    /// Parse raw input. Surrounding whitespace and letter case are ignored.
    pub fn parse(input: &str) -> Result<Self, Rejection> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("x") {
            Ok(PlacementCommand::Reset)
        } else if input.eq_ignore_ascii_case("xxx") {
            Ok(PlacementCommand::Quit)
        } else {
            Ok(PlacementCommand::Place(input.parse()?))
        }
    }
}

/// A ship that was successfully placed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Placed {
    /// Key of the ship on the player's board.
    pub key: ShipKey,
    /// Catalog entry that was taken from the fleet.
    pub ship: ShipSpec,
    /// Cells the ship now occupies.
    pub cells: Vec<Coordinate>,
}

/// Check whether `code` may be placed on `board` given the ships left in `fleet`.
/// Returns the cells the ship would cover, or every rule the placement breaks.
pub fn validate(code: &PlacementCode, board: &Board, fleet: &Fleet) -> Result<Vec<Coordinate>, Rejection> {
    let mut violations = Vec::new();

    if fleet.peek(code.length()).is_none() {
        violations.push(Violation::UnknownShipLength {
            requested: code.length(),
            available: fleet.lengths(),
        });
    }

    let cells = code.target_cells();
    if cells.is_none() {
        violations.push(Violation::OutOfBounds);
    }

    // Cells that are off the board still have on-board neighbours, so spacing is checked
    // from the raw positions rather than only the valid ones.
    let crowded = code
        .raw_cells()
        .flat_map(|(row, col)| {
            (-1isize..=1).flat_map(move |dr| {
                (-1isize..=1).filter_map(move |dc| Coordinate::from_signed(row + dr, col + dc))
            })
        })
        .any(|coord| board.is_occupied(coord));
    if crowded {
        violations.push(Violation::TooCloseToOtherShip);
    }

    match cells {
        Some(cells) if violations.is_empty() => Ok(cells),
        _ => Err(Rejection::new(violations)),
    }
}

/// Validate `code` and, if every rule holds, place the ship on `board` and remove it from
/// `fleet`. On failure neither is changed.
pub fn place(code: &PlacementCode, board: &mut Board, fleet: &mut Fleet) -> Result<Placed, Rejection> {
    let cells = validate(code, board, fleet)?;
    let ship = fleet.peek(code.length()).ok_or_else(|| {
        Rejection::from(Violation::UnknownShipLength {
            requested: code.length(),
            available: fleet.lengths(),
        })
    })?;
    let key = board.add_ship(ship, &cells).map_err(|err| {
        Rejection::from(match err {
            BoardError::Overlap(_) => Violation::TooCloseToOtherShip,
            BoardError::LengthMismatch { .. } => Violation::UnknownShipLength {
                requested: code.length(),
                available: fleet.lengths(),
            },
            BoardError::OutOfBounds(_) | BoardError::AlreadyStruck(_) => Violation::OutOfBounds,
        })
    })?;
    fleet.take(code.length());
    debug!("placed {} at {:?} with code {}", ship, cells, code);
    Ok(Placed { key, ship, cells })
}

/// Remove every ship from `board` and restore the full catalog to `fleet`.
pub fn reset(board: &mut Board, fleet: &mut Fleet) {
    board.reset();
    fleet.reset();
}
