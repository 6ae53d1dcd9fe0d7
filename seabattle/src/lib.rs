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
//! Engine for the classic two-player game of Battleship on a 10x10 grid.
//!
//! Each player places the standard fleet (Carrier, Battleship, Cruiser, Submarine and
//! Destroyer) using placement codes such as `5A1R`, confirms the layout, and then the
//! players take turns firing at targets such as `B7` until one fleet is sunk.
//!
//! The engine performs no I/O. [`Game::submit`] takes raw input strings and returns an
//! [`Outcome`] or a [`Rejection`] listing every rule the input broke, and [`Game::play`]
//! drives a whole game through a [`Presenter`].
//!
//! ```
//! use seabattle::{Game, Phase, Player};
//!
//! let mut game = Game::new();
//! game.submit("5A1R").unwrap();
//! assert_eq!(game.fleet(Player::P1).len(), 4);
//!
//! let rejection = game.submit("3A5D").unwrap_err();
//! assert_eq!(rejection.violations().len(), 1);
//! assert_eq!(game.phase(), Phase::Placing(Player::P1));
//! ```

pub mod attack;
pub mod board;
mod errors;
pub mod game;
pub mod placement;
pub mod presenter;
pub mod rules;
pub mod ships;

pub use crate::{
    attack::ShotOutcome,
    board::{Board, Cell, Coordinate, BOARD_SIZE},
    errors::{Rejection, Violation},
    game::{Ending, Game, Outcome, Phase, Player},
    presenter::{Presenter, Prompt, View},
    rules::{OnHit, Rules},
    ships::{Fleet, ShipSpec},
};
