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
//! Two-player game flow: each player places their fleet, then they take turns firing at
//! each other until one fleet is sunk.
use std::{fmt, io};

use log::{debug, info};

use crate::{
    attack::{self, AttackCommand, ShotOutcome},
    board::{Board, Coordinate},
    errors::{Rejection, Violation},
    placement::{self, PlacementCommand},
    presenter::{Presenter, Prompt, View},
    rules::{OnHit, Rules},
    ships::{Fleet, ShipSpec},
};

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// The player's number as shown to people, `1` or `2`.
    pub fn number(self) -> u8 {
        match self {
            Player::P1 => 1,
            Player::P2 => 2,
        }
    }

    fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// Where the game currently stands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// The player is placing ships.
    Placing(Player),
    /// The player has placed every ship and must confirm the layout.
    Confirming(Player),
    /// It is the player's turn to fire.
    Battling(Player),
    /// The player sank every opposing ship. Nothing else is accepted.
    Finished(Player),
}

impl Phase {
    /// The player who is expected to act, or the winner once the game is finished.
    pub fn player(self) -> Player {
        match self {
            Phase::Placing(p) | Phase::Confirming(p) | Phase::Battling(p) | Phase::Finished(p) => p,
        }
    }

    /// Returns true once the game has a winner.
    pub fn is_finished(self) -> bool {
        matches!(self, Phase::Finished(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::Placing(p) => write!(f, "{} is placing ships", p),
            Phase::Confirming(p) => write!(f, "{} is confirming their placement", p),
            Phase::Battling(p) => write!(f, "{} is attacking", p),
            Phase::Finished(p) => write!(f, "the game is over and {} won", p),
        }
    }
}

/// Result of a command the game accepted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// A ship was placed.
    Placed {
        /// The ship taken from the fleet.
        ship: ShipSpec,
        /// Cells it now occupies.
        cells: Vec<Coordinate>,
        /// Number of ships still to place. Once this is zero the player must confirm.
        remaining: usize,
    },
    /// The player's board was cleared and their fleet restored.
    PlacementReset,
    /// The player accepted their placement.
    PlacementConfirmed {
        /// Phase the game moved to.
        next: Phase,
    },
    /// A shot was fired.
    Shot {
        /// Cell that was fired at.
        target: Coordinate,
        /// What the shot did.
        outcome: ShotOutcome,
        /// Phase the game moved to.
        next: Phase,
    },
    /// The player asked to leave. The game is unchanged.
    Quit,
}

/// How a call to [`Game::play`] ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Ending {
    /// The given player won.
    Winner(Player),
    /// A player quit.
    Quit,
}

/// One player's own ships and the ships they still have to place.
#[derive(Debug, Clone, Eq, PartialEq)]
struct Side {
    board: Board,
    fleet: Fleet,
}

/// A game between two players.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    sides: [Side; 2],
    phase: Phase,
}

impl Game {
    /// Create a game with the default [`Rules`].
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Create a game with the given rules. Player 1 places first.
    pub fn with_rules(rules: Rules) -> Self {
        let side = || Side {
            board: Board::new(),
            fleet: Fleet::new(rules.fleet().to_vec()),
        };
        let sides = [side(), side()];
        info!("new game, fleet: {:?}, on hit: {:?}", rules.fleet(), rules.on_hit());
        Self {
            rules,
            sides,
            phase: Phase::Placing(Player::P1),
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the rules of this game.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get the winner, if the game is finished.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Finished(winner) => Some(winner),
            _ => None,
        }
    }

    /// Get the board holding `player`'s own ships.
    pub fn board(&self, player: Player) -> &Board {
        &self.sides[player.index()].board
    }

    /// Get the ships `player` still has to place.
    pub fn fleet(&self, player: Player) -> &Fleet {
        &self.sides[player.index()].fleet
    }

    fn side_mut(&mut self, player: Player) -> &mut Side {
        &mut self.sides[player.index()]
    }

    /// Reject a command that does not fit the current phase.
    fn out_of_phase(&self, player: Player) -> Rejection {
        debug!("{} acted out of phase while {}", player, self.phase);
        Violation::InvalidPhaseAction(self.phase).into()
    }

    /// Pass raw input to whichever action the current phase expects.
    pub fn submit(&mut self, input: &str) -> Result<Outcome, Rejection> {
        match self.phase {
            Phase::Placing(player) => self.place(player, input),
            Phase::Confirming(player) => self.confirm(player, input),
            Phase::Battling(player) => self.attack(player, input),
            Phase::Finished(winner) => Err(self.out_of_phase(winner)),
        }
    }

    /// Handle a placement command from `player`: a placement code, `x` to reset or `xxx`
    /// to quit.
    pub fn place(&mut self, player: Player, input: &str) -> Result<Outcome, Rejection> {
        if self.phase != Phase::Placing(player) {
            return Err(self.out_of_phase(player));
        }
        let side = self.side_mut(player);
        match PlacementCommand::parse(input).map_err(refused(player))? {
            PlacementCommand::Quit => Ok(Outcome::Quit),
            PlacementCommand::Reset => {
                placement::reset(&mut side.board, &mut side.fleet);
                info!("{} cleared their board", player);
                Ok(Outcome::PlacementReset)
            }
            PlacementCommand::Place(code) => {
                let placed = placement::place(&code, &mut side.board, &mut side.fleet)
                    .map_err(refused(player))?;
                let remaining = side.fleet.len();
                if remaining == 0 {
                    self.phase = Phase::Confirming(player);
                    info!("{} placed every ship", player);
                }
                Ok(Outcome::Placed {
                    ship: placed.ship,
                    cells: placed.cells,
                    remaining,
                })
            }
        }
    }

    /// Handle `player`'s answer to the confirmation question. `y` or `yes` accepts the
    /// layout, `xxx` quits, and anything else clears the board to start over.
    pub fn confirm(&mut self, player: Player, input: &str) -> Result<Outcome, Rejection> {
        if self.phase != Phase::Confirming(player) {
            return Err(self.out_of_phase(player));
        }
        match input.trim().to_ascii_lowercase().as_str() {
            "xxx" => Ok(Outcome::Quit),
            "y" | "yes" => {
                // The player who places second fires first.
                let next = match player {
                    Player::P1 => Phase::Placing(Player::P2),
                    Player::P2 => Phase::Battling(Player::P2),
                };
                self.phase = next;
                info!("{} confirmed their placement, now {}", player, next);
                Ok(Outcome::PlacementConfirmed { next })
            }
            _ => {
                let side = self.side_mut(player);
                placement::reset(&mut side.board, &mut side.fleet);
                self.phase = Phase::Placing(player);
                info!("{} rejected their placement and starts over", player);
                Ok(Outcome::PlacementReset)
            }
        }
    }

    /// Handle an attack command from `player`: a target such as `A1`, or `xxx` to quit.
    pub fn attack(&mut self, player: Player, input: &str) -> Result<Outcome, Rejection> {
        if self.phase != Phase::Battling(player) {
            return Err(self.out_of_phase(player));
        }
        let target = match AttackCommand::parse(input).map_err(refused(player))? {
            AttackCommand::Quit => return Ok(Outcome::Quit),
            AttackCommand::Fire(target) => target,
        };
        let defender = player.opponent();
        let outcome = attack::resolve(target, &mut self.side_mut(defender).board)
            .map_err(refused(player))?;
        let next = match outcome {
            ShotOutcome::Victory(_) => Phase::Finished(player),
            ShotOutcome::Miss => Phase::Battling(defender),
            ShotOutcome::Hit | ShotOutcome::Sunk(_) => match self.rules.on_hit() {
                OnHit::ShootAgain => Phase::Battling(player),
                OnHit::PassTurn => Phase::Battling(defender),
            },
        };
        self.phase = next;
        info!("{} fired at {}: {:?}, now {}", player, target, outcome, next);
        Ok(Outcome::Shot {
            target,
            outcome,
            next,
        })
    }

    /// Run the game to completion, rendering through `presenter` and reading every
    /// command from it. Refused commands are reported and the same player is asked again.
    pub fn play<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> io::Result<Ending> {
        loop {
            let (player, prompt) = match self.phase {
                Phase::Finished(winner) => return Ok(Ending::Winner(winner)),
                Phase::Placing(player) => {
                    presenter.show_board(player, self.board(player), View::Own);
                    presenter.show_fleet(player, self.fleet(player));
                    (player, Prompt::Placement)
                }
                Phase::Confirming(player) => {
                    presenter.show_board(player, self.board(player), View::Own);
                    (player, Prompt::Confirmation)
                }
                Phase::Battling(player) => {
                    presenter.show_board(player, self.board(player.opponent()), View::Target);
                    presenter.show_board(player, self.board(player), View::Own);
                    (player, Prompt::Attack)
                }
            };
            let line = presenter.read_line(player, prompt)?;
            match self.submit(&line) {
                Ok(Outcome::Quit) => {
                    info!("{} quit while {}", player, self.phase);
                    return Ok(Ending::Quit);
                }
                Ok(outcome) => presenter.announce(player, &outcome),
                Err(rejection) => presenter.show_rejection(player, &rejection),
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Log a refused command before handing the rejection back.
fn refused(player: Player) -> impl FnOnce(Rejection) -> Rejection {
    move |rejection| {
        debug!("{} command refused: {}", player, rejection);
        rejection
    }
}
