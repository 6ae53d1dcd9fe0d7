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
//! Types that make up a player's board.

use crate::ships::ShipSpec;

use self::grid::{Grid, GridCell};
pub use self::{
    coordinate::{row_label, Coordinate, ParseCoordinateError, BOARD_SIZE},
    errors::BoardError,
};

mod coordinate;
mod errors;
mod grid;

pub(crate) use self::coordinate::row_index;

/// State of a single position on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// Nothing here, and never attacked.
    Empty,
    /// A ship is here and this position has not been attacked.
    Occupied,
    /// A ship is here and this position has been attacked.
    Hit,
    /// Nothing here, and this position has been attacked.
    Miss,
}

impl Cell {
    /// Whether a ship occupies this cell, hit or not.
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied | Cell::Hit)
    }

    /// Whether this cell has been attacked.
    pub fn is_attacked(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }

    /// The state as seen by the opponent: ships that have not been hit stay hidden.
    pub fn concealed(self) -> Self {
        match self {
            Cell::Occupied => Cell::Empty,
            other => other,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Identity of a ship placed on a particular board. Keys are only meaningful for the
/// board that issued them and are invalidated by [`Board::reset`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipKey(usize);

/// A ship that has been placed on a board, along with its damage.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlacedShip {
    key: ShipKey,
    spec: ShipSpec,
    cells: Vec<Coordinate>,
    hits: usize,
}

impl PlacedShip {
    /// Get the key of this ship.
    pub fn key(&self) -> ShipKey {
        self.key
    }

    /// Get the catalog entry this ship was placed from.
    pub fn spec(&self) -> ShipSpec {
        self.spec
    }

    /// Get the cells this ship occupies, in placement order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of this ship's cells that have been hit.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.hits >= self.spec.length()
    }
}

/// Result of striking a single cell with [`Board::strike`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Strike {
    /// The cell was empty.
    Miss,
    /// A ship was hit but is still afloat.
    Hit,
    /// The given ship was hit and that was its last intact cell.
    Sunk(ShipKey),
}

/// Represents a single player's side of the ocean: their ships and the shots fired at
/// them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Cell states and ship ownership.
    grid: Grid,

    /// Ships in the order they were placed. A ship's key is its index here.
    ships: Vec<PlacedShip>,

    /// Number of ships that are not yet sunk.
    afloat: usize,
}

impl Board {
    /// Construct an empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: Vec::new(),
            afloat: 0,
        }
    }

    fn cell(&self, coord: Coordinate) -> Result<&GridCell, BoardError> {
        self.grid.get(&coord).ok_or(BoardError::OutOfBounds(coord))
    }

    /// Get the state of the cell at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<Cell, BoardError> {
        self.cell(coord).map(|cell| cell.state)
    }

    /// Overwrite the state of the cell at `coord`. This does not change which ship, if
    /// any, owns the cell.
    pub fn set(&mut self, coord: Coordinate, state: Cell) -> Result<(), BoardError> {
        let cell = self
            .grid
            .get_mut(&coord)
            .ok_or(BoardError::OutOfBounds(coord))?;
        cell.state = state;
        Ok(())
    }

    /// Returns true if a ship occupies `coord`, whether or not it was hit. Coordinates off
    /// the board are never occupied.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.get(coord).map_or(false, Cell::is_occupied)
    }

    /// Clear every cell and forget all ships.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.ships.clear();
        self.afloat = 0;
    }

    /// Place a ship of the given spec over `cells`. Either every cell is marked
    /// [`Cell::Occupied`] and tagged with the new ship, or nothing changes.
    ///
    /// There must be exactly one cell per unit of length, each on the board and not
    /// already occupied. Spacing rules belong to the placement validator.
    pub fn add_ship(&mut self, spec: ShipSpec, cells: &[Coordinate]) -> Result<ShipKey, BoardError> {
        if cells.len() != spec.length() {
            return Err(BoardError::LengthMismatch {
                expected: spec.length(),
                actual: cells.len(),
            });
        }
        for (i, coord) in cells.iter().enumerate() {
            let cell = self.cell(*coord)?;
            if cell.state.is_occupied() || cell.ship.is_some() || cells[..i].contains(coord) {
                return Err(BoardError::Overlap(*coord));
            }
        }
        let key = ShipKey(self.ships.len());
        // Already ensured that every position is valid.
        for coord in cells {
            let cell = &mut self.grid[coord];
            cell.state = Cell::Occupied;
            cell.ship = Some(key);
        }
        self.ships.push(PlacedShip {
            key,
            spec,
            cells: cells.to_vec(),
            hits: 0,
        });
        self.afloat += 1;
        Ok(key)
    }

    /// Fire at `coord`, marking it hit or missed and updating the damage of the ship
    /// there.
    pub fn strike(&mut self, coord: Coordinate) -> Result<Strike, BoardError> {
        let cell = self
            .grid
            .get_mut(&coord)
            .ok_or(BoardError::OutOfBounds(coord))?;
        if cell.state.is_attacked() {
            return Err(BoardError::AlreadyStruck(coord));
        }
        if !cell.state.is_occupied() {
            cell.state = Cell::Miss;
            return Ok(Strike::Miss);
        }
        cell.state = Cell::Hit;
        let key = match cell.ship {
            Some(key) => key,
            // Occupied through `set` without an owning ship, so there is nothing to sink.
            None => return Ok(Strike::Hit),
        };
        let ship = &mut self.ships[key.0];
        ship.hits += 1;
        if ship.hits == ship.spec.length() {
            self.afloat -= 1;
            Ok(Strike::Sunk(key))
        } else {
            Ok(Strike::Hit)
        }
    }

    /// Get the ship with the given key, if it exists on this board.
    pub fn ship(&self, key: ShipKey) -> Option<&PlacedShip> {
        self.ships.get(key.0)
    }

    /// Get the ship that occupies `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&PlacedShip> {
        self.grid
            .get(&coord)
            .and_then(|cell| cell.ship)
            .and_then(|key| self.ship(key))
    }

    /// Get all ships on this board in the order they were placed.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Number of ships on this board that have not been sunk.
    pub fn ships_afloat(&self) -> usize {
        self.afloat
    }

    /// Returns true if this board has ships and all of them have been sunk.
    pub fn defeated(&self) -> bool {
        !self.ships.is_empty() && self.afloat == 0
    }

    /// Get an iterator over every occupied coordinate, in row-major order.
    pub fn occupied_cells(&self) -> impl '_ + Iterator<Item = Coordinate> {
        Coordinate::all().filter(move |coord| self.is_occupied(*coord))
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the
    /// cells of that row.
    pub fn rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Cell>> {
        (0..BOARD_SIZE).map(move |row| self.grid.row(row).iter().map(|cell| cell.state))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
