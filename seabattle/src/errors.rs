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
//! Reasons a submitted command can be turned down.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, game::Phase};

/// A single rule broken by a submitted command.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Violation {
    /// The placement code does not follow `[length][row][column][direction]`.
    #[error("code must be a length, a row from A-J, a column and a direction R, L, U or D (ex. 5a1d or 5a10d)")]
    MalformedCode,

    /// The attack target does not follow `[row][column]`.
    #[error("target must be a row from A-J followed by a column from 1-10 (ex. a1 or j10)")]
    MalformedCoordinate,

    /// No remaining ship has the requested length.
    #[error("invalid ship length {requested}, available lengths: {}", join(.available))]
    UnknownShipLength {
        /// Length given in the placement code.
        requested: usize,
        /// Lengths of the ships still to be placed.
        available: Vec<usize>,
    },

    /// Part of the ship would lie off the board.
    #[error("ship would be placed out of bounds")]
    OutOfBounds,

    /// The ship would touch, even diagonally, a ship that is already placed.
    #[error("ship must be at least one tile away from other ships")]
    TooCloseToOtherShip,

    /// The target was already hit or missed.
    #[error("{0} was already attacked, choose another target")]
    AlreadyAttacked(Coordinate),

    /// The command does not fit the current phase of the game, or it is not the
    /// player's turn.
    #[error("that command is not allowed while {0}")]
    InvalidPhaseAction(Phase),
}

fn join(lengths: &[usize]) -> String {
    let parts: Vec<_> = lengths.iter().map(usize::to_string).collect();
    parts.join(", ")
}

/// Error returned when a command is refused. Holds every rule the command broke, in the
/// order the rules are checked. Nothing is changed by a refused command.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("command rejected: {}", summarize(.violations))]
pub struct Rejection {
    violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    let parts: Vec<_> = violations.iter().map(Violation::to_string).collect();
    parts.join("; ")
}

impl Rejection {
    /// Construct a rejection from a non-empty list of violations.
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Get the rules the command broke.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Extract the rules the command broke.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Violation> for Rejection {
    fn from(violation: Violation) -> Self {
        Self::new(vec![violation])
    }
}

impl Debug for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(&self.violations).finish()
    }
}
