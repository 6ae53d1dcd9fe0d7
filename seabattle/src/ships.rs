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
//! Types used for defining ships and the fleet each player must place.
use std::fmt;

pub use self::fleet::Fleet;

mod fleet;

/// Catalog entry for a kind of ship: its name and how many cells it covers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    /// Construct a ship spec with the given name and length.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Name of the ship.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the ship covers.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for ShipSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name)
    }
}

/// Carrier: length 5.
pub const CARRIER: ShipSpec = ShipSpec::new("Carrier", 5);
/// Battleship: length 4.
pub const BATTLESHIP: ShipSpec = ShipSpec::new("Battleship", 4);
/// Cruiser: length 3.
pub const CRUISER: ShipSpec = ShipSpec::new("Cruiser", 3);
/// Submarine: length 3.
pub const SUBMARINE: ShipSpec = ShipSpec::new("Submarine", 3);
/// Destroyer: length 2.
pub const DESTROYER: ShipSpec = ShipSpec::new("Destroyer", 2);

/// The standard fleet, in declaration order. When two ships share a length, the one
/// declared first is placed first.
pub const STANDARD_FLEET: [ShipSpec; 5] = [CARRIER, BATTLESHIP, CRUISER, SUBMARINE, DESTROYER];
