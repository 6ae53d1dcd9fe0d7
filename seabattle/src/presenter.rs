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
//! The seam between the engine and whatever displays the game and collects input.
use std::io;

use crate::{
    board::Board,
    errors::Rejection,
    game::{Outcome, Player},
    ships::Fleet,
};

/// How much of a board the viewer may see.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum View {
    /// The viewer owns the board and sees every ship.
    Own,
    /// The viewer is attacking the board; ships that were not hit must be shown as
    /// [`Cell::Empty`][crate::board::Cell::Empty]. See
    /// [`Cell::concealed`][crate::board::Cell::concealed].
    Target,
}

/// What the engine is waiting for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Prompt {
    /// A placement code, `x` to reset or `xxx` to quit.
    Placement,
    /// Whether the player is satisfied with their placement, `y` to confirm.
    Confirmation,
    /// A target such as `A1`, or `xxx` to quit.
    Attack,
}

/// Displays the game and reads raw input lines. The engine never performs I/O itself.
pub trait Presenter {
    /// Show `board` to `player` with the given visibility.
    fn show_board(&mut self, player: Player, board: &Board, view: View);

    /// Show the ships `player` still has to place.
    fn show_fleet(&mut self, player: Player, fleet: &Fleet);

    /// Report the result of an accepted command entered by `player`.
    fn announce(&mut self, player: Player, outcome: &Outcome);

    /// Report why a command entered by `player` was refused.
    fn show_rejection(&mut self, player: Player, rejection: &Rejection);

    /// Ask `player` for a line of input. The line is passed on to the engine unchanged.
    fn read_line(&mut self, player: Player, prompt: Prompt) -> io::Result<String>;
}
