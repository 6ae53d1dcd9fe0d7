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
//! Defines the storage that backs a [`Board`][crate::board::Board].

use std::ops::{Index, IndexMut};

use crate::board::{Cell, Coordinate, ShipKey, BOARD_SIZE};

/// A single cell in the player's grid.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub(super) struct GridCell {
    /// Current state of the cell.
    pub(super) state: Cell,

    /// The ship that occupies this cell, if any.
    pub(super) ship: Option<ShipKey>,
}

/// Row-major storage for the cells of a board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|_| GridCell::default())
            .collect();
        Self { cells }
    }

    /// Convert a coordinate to a linear index, or `None` if it is out of bounds.
    fn linearize(coord: &Coordinate) -> Option<usize> {
        if coord.in_bounds() {
            Some(coord.row * BOARD_SIZE + coord.col)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<&GridCell> {
        Self::linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut GridCell> {
        Self::linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }

    /// Return every cell to its default, empty state.
    pub(super) fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = GridCell::default();
        }
    }

    /// Cells of the given row, left to right.
    pub(super) fn row(&self, row: usize) -> &[GridCell] {
        &self.cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE]
    }
}

impl Index<&Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: &Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<&Coordinate> for Grid {
    fn index_mut(&mut self, coord: &Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
