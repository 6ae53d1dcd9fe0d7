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
use crate::ships::{ShipSpec, STANDARD_FLEET};

/// The ships a player still has to place. Starts out as the full catalog and shrinks as
/// ships are placed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fleet {
    /// Every ship this fleet started with, in catalog order.
    catalog: Vec<ShipSpec>,

    /// Ships not yet placed, in catalog order.
    remaining: Vec<ShipSpec>,
}

impl Fleet {
    /// Construct a fleet that must place every ship of `catalog`.
    pub fn new(catalog: Vec<ShipSpec>) -> Self {
        Self {
            remaining: catalog.clone(),
            catalog,
        }
    }

    /// Construct a fleet with the [`STANDARD_FLEET`].
    pub fn standard() -> Self {
        Self::new(STANDARD_FLEET.to_vec())
    }

    /// Ships that still need to be placed, in catalog order.
    pub fn remaining(&self) -> &[ShipSpec] {
        &self.remaining
    }

    /// All ships of the catalog this fleet was built from.
    pub fn catalog(&self) -> &[ShipSpec] {
        &self.catalog
    }

    /// Number of ships still to place.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Returns true once every ship has been placed.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Distinct lengths of the remaining ships, shortest first.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<_> = self.remaining.iter().map(ShipSpec::length).collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }

    /// The ship that would be placed next for the given length, if any remains.
    pub fn peek(&self, length: usize) -> Option<ShipSpec> {
        self.remaining
            .iter()
            .copied()
            .find(|spec| spec.length() == length)
    }

    /// Remove and return the first remaining ship with the given length.
    pub fn take(&mut self, length: usize) -> Option<ShipSpec> {
        let idx = self
            .remaining
            .iter()
            .position(|spec| spec.length() == length)?;
        Some(self.remaining.remove(idx))
    }

    /// Restore every ship of the catalog.
    pub fn reset(&mut self) {
        self.remaining.clone_from(&self.catalog);
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::{BATTLESHIP, CARRIER, CRUISER, DESTROYER, SUBMARINE};

    #[test]
    fn shared_lengths_are_taken_in_catalog_order() {
        let mut fleet = Fleet::standard();
        assert_eq!(fleet.take(3), Some(CRUISER));
        assert_eq!(fleet.take(3), Some(SUBMARINE));
        assert_eq!(fleet.take(3), None);
        assert_eq!(fleet.remaining(), &[CARRIER, BATTLESHIP, DESTROYER]);
    }

    #[test]
    fn lengths_are_distinct_and_sorted() {
        let mut fleet = Fleet::standard();
        assert_eq!(fleet.lengths(), vec![2, 3, 4, 5]);
        fleet.take(5);
        fleet.take(2);
        assert_eq!(fleet.lengths(), vec![3, 4]);
    }

    #[test]
    fn reset_restores_catalog() {
        let mut fleet = Fleet::standard();
        while let Some(spec) = fleet.remaining().first().copied() {
            fleet.take(spec.length());
        }
        assert!(fleet.is_empty());
        fleet.reset();
        assert_eq!(fleet, Fleet::standard());
        fleet.reset();
        assert_eq!(fleet, Fleet::standard());
    }
}
