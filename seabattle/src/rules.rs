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
//! Configurable rules of a game.
use std::str::FromStr;

use thiserror::Error;

use crate::{
    board::BOARD_SIZE,
    ships::{ShipSpec, STANDARD_FLEET},
};

/// What happens to the turn after a shot hits a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OnHit {
    /// The attacker fires again after a hit, including one that sinks a ship. A miss
    /// passes the turn.
    ShootAgain,
    /// Every shot passes the turn, hit or miss.
    PassTurn,
}

impl Default for OnHit {
    fn default() -> Self {
        OnHit::ShootAgain
    }
}

/// Error returned when parsing an [`OnHit`] rule fails.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown turn rule {0:?}, expected \"again\" or \"pass\"")]
pub struct ParseOnHitError(String);

impl FromStr for OnHit {
    type Err = ParseOnHitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" | "shoot-again" => Ok(OnHit::ShootAgain),
            "pass" | "pass-turn" => Ok(OnHit::PassTurn),
            _ => Err(ParseOnHitError(s.to_owned())),
        }
    }
}

/// Reason why a set of rules could not be built.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RulesError {
    /// The fleet has no ships, so nobody could ever lose.
    #[error("the fleet must contain at least one ship")]
    EmptyFleet,

    /// Placement codes carry a single-digit length that must also fit on the board.
    #[error("{name} has length {length}, lengths must be between 1 and 9")]
    UnplaceableShip {
        /// Name of the offending ship.
        name: &'static str,
        /// Its length.
        length: usize,
    },
}

/// Rules shared by both players of a game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rules {
    /// Ships each player must place, in catalog order.
    fleet: Vec<ShipSpec>,

    /// Turn handling after a hit.
    on_hit: OnHit,
}

impl Rules {
    /// Build rules with a custom fleet.
    pub fn new(fleet: Vec<ShipSpec>, on_hit: OnHit) -> Result<Self, RulesError> {
        if fleet.is_empty() {
            return Err(RulesError::EmptyFleet);
        }
        if let Some(bad) = fleet
            .iter()
            .find(|spec| !(1..=9).contains(&spec.length()) || spec.length() > BOARD_SIZE)
        {
            return Err(RulesError::UnplaceableShip {
                name: bad.name(),
                length: bad.length(),
            });
        }
        Ok(Self { fleet, on_hit })
    }

    /// Replace the turn rule.
    pub fn with_on_hit(mut self, on_hit: OnHit) -> Self {
        self.on_hit = on_hit;
        self
    }

    /// Ships each player must place.
    pub fn fleet(&self) -> &[ShipSpec] {
        &self.fleet
    }

    /// Turn handling after a hit.
    pub fn on_hit(&self) -> OnHit {
        self.on_hit
    }
}

impl Default for Rules {
    /// The standard five-ship fleet where a hit earns another shot.
    fn default() -> Self {
        Self {
            fleet: STANDARD_FLEET.to_vec(),
            on_hit: OnHit::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_turn_rules() {
        assert_eq!("again".parse(), Ok(OnHit::ShootAgain));
        assert_eq!("PASS".parse(), Ok(OnHit::PassTurn));
        assert!("sometimes".parse::<OnHit>().is_err());
    }

    #[test]
    fn rejects_unusable_fleets() {
        assert_eq!(
            Rules::new(Vec::new(), OnHit::PassTurn),
            Err(RulesError::EmptyFleet)
        );
        let raft = ShipSpec::new("Raft", 0);
        assert_eq!(
            Rules::new(vec![raft], OnHit::PassTurn),
            Err(RulesError::UnplaceableShip {
                name: "Raft",
                length: 0
            })
        );
        let dinghy = ShipSpec::new("Dinghy", 1);
        let rules = Rules::new(vec![dinghy], OnHit::PassTurn).unwrap();
        assert_eq!(rules.fleet(), &[dinghy]);
    }
}
