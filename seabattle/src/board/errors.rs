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
//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when a board accessor is misused.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// The coordinate does not lie on the board.
    #[error("coordinate {0:?} is out of bounds")]
    OutOfBounds(Coordinate),

    /// The cell was already hit or missed.
    #[error("cell {0} was already struck")]
    AlreadyStruck(Coordinate),

    /// The number of cells given for a ship does not match its length.
    #[error("ship of length {expected} cannot cover {actual} cells")]
    LengthMismatch { expected: usize, actual: usize },

    /// The cell is already taken by another ship, or listed twice.
    #[error("cell {0} is already occupied")]
    Overlap(Coordinate),
}

impl BoardError {
    /// Get the coordinate that caused the error, if the error concerns a single cell.
    pub fn coord(&self) -> Option<Coordinate> {
        match *self {
            BoardError::OutOfBounds(coord)
            | BoardError::AlreadyStruck(coord)
            | BoardError::Overlap(coord) => Some(coord),
            BoardError::LengthMismatch { .. } => None,
        }
    }
}
