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
//! Resolution of attacks against an opponent's board.
use log::debug;

use crate::{
    board::{Board, BoardError, Coordinate, PlacedShip, Strike},
    errors::{Rejection, Violation},
    ships::ShipSpec,
};

/// A command entered during the battle phase.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackCommand {
    /// Fire at the given cell.
    Fire(Coordinate),
    /// Leave the game.
    Quit,
}

impl AttackCommand {
    /// Parse raw input such as `b7` or `J10`. Surrounding whitespace and letter case are
    /// ignored.
    pub fn parse(input: &str) -> Result<Self, Rejection> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("xxx") {
            Ok(AttackCommand::Quit)
        } else {
            input
                .parse()
                .map(AttackCommand::Fire)
                .map_err(|_| Violation::MalformedCoordinate.into())
        }
    }
}

/// Outcome of a shot that was fired.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// Nothing was hit.
    Miss,
    /// A ship was hit but it was not sunk.
    Hit,
    /// The given ship was hit and sunk, but the defender still has other ships.
    Sunk(ShipSpec),
    /// The given ship was hit and sunk, and the defender has no ships left.
    Victory(ShipSpec),
}

impl ShotOutcome {
    /// Returns true if the shot struck a ship.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Get the ship that was sunk by this shot, if any.
    pub fn sunk(&self) -> Option<ShipSpec> {
        match *self {
            ShotOutcome::Sunk(ship) | ShotOutcome::Victory(ship) => Some(ship),
            ShotOutcome::Miss | ShotOutcome::Hit => None,
        }
    }
}

/// Fire at `target` on the defender's `board`. A cell that was already attacked is
/// refused and left as it was.
pub fn resolve(target: Coordinate, board: &mut Board) -> Result<ShotOutcome, Rejection> {
    let outcome = match board.strike(target) {
        Ok(Strike::Miss) => ShotOutcome::Miss,
        Ok(Strike::Hit) => ShotOutcome::Hit,
        Ok(Strike::Sunk(key)) => match board.ship(key).map(PlacedShip::spec) {
            Some(ship) if board.defeated() => ShotOutcome::Victory(ship),
            Some(ship) => ShotOutcome::Sunk(ship),
            // A key the board does not know can't name a ship, so report a plain hit.
            None => ShotOutcome::Hit,
        },
        Err(BoardError::AlreadyStruck(coord)) => {
            return Err(Violation::AlreadyAttacked(coord).into())
        }
        Err(_) => return Err(Violation::MalformedCoordinate.into()),
    };
    debug!("shot at {} resolved as {:?}", target, outcome);
    Ok(outcome)
}
