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

use std::{collections::VecDeque, io};

use seabattle::{
    ships::{ShipSpec, CARRIER, DESTROYER, SUBMARINE},
    Board, Cell, Ending, Fleet, Game, OnHit, Outcome, Phase, Player, Presenter, Prompt,
    Rejection, Rules, ShotOutcome, View, Violation,
};

/// Placement codes for a full, valid standard fleet.
const LAYOUT: [&str; 5] = ["5A1R", "4C1R", "3E1R", "3G1R", "2I1R"];

/// Every cell covered by [`LAYOUT`].
const LAYOUT_CELLS: [&str; 17] = [
    "A1", "A2", "A3", "A4", "A5", "C1", "C2", "C3", "C4", "E1", "E2", "E3", "G1", "G2", "G3",
    "I1", "I2",
];

fn place_all(game: &mut Game, player: Player) {
    for code in &LAYOUT {
        game.place(player, code).unwrap();
    }
    assert_eq!(game.phase(), Phase::Confirming(player));
    game.confirm(player, "y").unwrap();
}

fn battle_ready(rules: Rules) -> Game {
    let mut game = Game::with_rules(rules);
    place_all(&mut game, Player::P1);
    place_all(&mut game, Player::P2);
    game
}

#[test]
fn placement_moves_between_players_then_to_battle() {
    let mut game = Game::new();
    assert_eq!(game.phase(), Phase::Placing(Player::P1));

    for (i, code) in LAYOUT.iter().enumerate() {
        match game.submit(code).unwrap() {
            Outcome::Placed { remaining, .. } => assert_eq!(remaining, LAYOUT.len() - i - 1),
            other => panic!("unexpected outcome {:?}", other),
        }
    }
    assert_eq!(game.phase(), Phase::Confirming(Player::P1));
    assert_eq!(
        game.submit("Y"),
        Ok(Outcome::PlacementConfirmed {
            next: Phase::Placing(Player::P2)
        })
    );
    assert!(game.fleet(Player::P1).is_empty());
    assert_eq!(game.fleet(Player::P2), &Fleet::standard());

    for code in &LAYOUT {
        game.submit(code).unwrap();
    }
    assert_eq!(
        game.submit("yes"),
        Ok(Outcome::PlacementConfirmed {
            next: Phase::Battling(Player::P2)
        })
    );
    assert_eq!(game.board(Player::P2).occupied_cells().count(), LAYOUT_CELLS.len());
}

#[test]
fn declining_confirmation_starts_placement_over() {
    let mut game = Game::new();
    for code in &LAYOUT {
        game.submit(code).unwrap();
    }
    assert_eq!(game.submit("n"), Ok(Outcome::PlacementReset));
    assert_eq!(game.phase(), Phase::Placing(Player::P1));
    assert_eq!(game.board(Player::P1), &Board::new());
    assert_eq!(game.fleet(Player::P1), &Fleet::standard());
}

#[test]
fn reset_only_touches_the_acting_player() {
    let mut game = Game::new();
    place_all(&mut game, Player::P1);
    game.submit("5J1R").unwrap();
    assert_eq!(game.submit("x"), Ok(Outcome::PlacementReset));

    assert_eq!(game.board(Player::P2), &Board::new());
    assert_eq!(game.fleet(Player::P2).remaining().first(), Some(&CARRIER));
    assert_eq!(game.board(Player::P1).occupied_cells().count(), LAYOUT_CELLS.len());
}

#[test]
fn rejected_placement_keeps_the_turn() {
    let mut game = Game::new();
    game.submit("3A1R").unwrap();
    let rejection = game.submit("3A3D").unwrap_err();
    assert_eq!(rejection.violations(), &[Violation::TooCloseToOtherShip]);
    assert_eq!(game.phase(), Phase::Placing(Player::P1));
    assert_eq!(game.fleet(Player::P1).remaining().len(), 4);
    assert_eq!(game.fleet(Player::P1).remaining()[2], SUBMARINE);
}

#[test]
fn acting_out_of_turn_is_refused() {
    let mut game = Game::new();
    let refused = game.place(Player::P2, "5A1R").unwrap_err();
    assert_eq!(
        refused.violations(),
        &[Violation::InvalidPhaseAction(Phase::Placing(Player::P1))]
    );
    let refused = game.attack(Player::P1, "A1").unwrap_err();
    assert_eq!(
        refused.violations(),
        &[Violation::InvalidPhaseAction(Phase::Placing(Player::P1))]
    );
    assert!(game.confirm(Player::P1, "y").is_err());
    assert_eq!(game.board(Player::P2), &Board::new());

    let mut game = battle_ready(Rules::default());
    assert_eq!(game.phase(), Phase::Battling(Player::P2));
    assert!(game.attack(Player::P1, "A1").is_err());
    assert!(game.place(Player::P2, "x").is_err());
    assert_eq!(game.board(Player::P2).get("A1".parse().unwrap()), Ok(Cell::Occupied));
}

#[test]
fn hit_earns_another_shot_and_miss_passes() {
    let mut game = battle_ready(Rules::default());

    let outcome = game.submit("A1").unwrap();
    assert_eq!(
        outcome,
        Outcome::Shot {
            target: "A1".parse().unwrap(),
            outcome: ShotOutcome::Hit,
            next: Phase::Battling(Player::P2),
        }
    );
    assert_eq!(game.board(Player::P1).get("A1".parse().unwrap()), Ok(Cell::Hit));

    game.submit("J10").unwrap();
    assert_eq!(game.phase(), Phase::Battling(Player::P1));
    assert_eq!(game.board(Player::P1).get("J10".parse().unwrap()), Ok(Cell::Miss));
}

#[test]
fn pass_turn_rule_alternates_every_shot() {
    let mut game = battle_ready(Rules::default().with_on_hit(OnHit::PassTurn));
    game.submit("A1").unwrap();
    assert_eq!(game.phase(), Phase::Battling(Player::P1));
    game.submit("A1").unwrap();
    assert_eq!(game.phase(), Phase::Battling(Player::P2));
    game.submit("J10").unwrap();
    assert_eq!(game.phase(), Phase::Battling(Player::P1));
}

#[test]
fn invalid_targets_keep_the_same_attacker() {
    let mut game = battle_ready(Rules::default());
    game.submit("J10").unwrap();
    game.submit("B5").unwrap();
    assert_eq!(game.phase(), Phase::Battling(Player::P2));

    let rejection = game.submit("j10").unwrap_err();
    assert_eq!(
        rejection.violations(),
        &[Violation::AlreadyAttacked("J10".parse().unwrap())]
    );
    assert_eq!(game.phase(), Phase::Battling(Player::P2));

    let rejection = game.submit("Z99").unwrap_err();
    assert_eq!(rejection.violations(), &[Violation::MalformedCoordinate]);
    assert_eq!(game.phase(), Phase::Battling(Player::P2));
}

#[test]
fn sinking_every_ship_finishes_the_game() {
    let mut game = battle_ready(Rules::default());
    game.submit("J10").unwrap();
    assert_eq!(game.phase(), Phase::Battling(Player::P1));

    let (last, rest) = LAYOUT_CELLS.split_last().unwrap();
    for cell in rest {
        let outcome = game.submit(cell).unwrap();
        assert!(matches!(outcome, Outcome::Shot { next: Phase::Battling(Player::P1), .. }));
    }
    assert_eq!(game.board(Player::P2).ships_afloat(), 1);
    assert_eq!(
        game.submit(last),
        Ok(Outcome::Shot {
            target: last.parse().unwrap(),
            outcome: ShotOutcome::Victory(DESTROYER),
            next: Phase::Finished(Player::P1),
        })
    );
    assert_eq!(game.winner(), Some(Player::P1));
    assert!(game.board(Player::P2).defeated());

    let finished = Violation::InvalidPhaseAction(Phase::Finished(Player::P1));
    for input in &["B1", "xxx", "5A1R"] {
        assert_eq!(game.submit(input).unwrap_err().violations(), &[finished.clone()]);
    }
    assert_eq!(game.attack(Player::P2, "B1").unwrap_err().violations(), &[finished]);
    assert_eq!(game.board(Player::P1).get("B1".parse().unwrap()), Ok(Cell::Empty));
}

#[test]
fn one_cell_fleet_is_won_in_one_shot() {
    let dinghy = ShipSpec::new("Dinghy", 1);
    let mut game = Game::with_rules(Rules::new(vec![dinghy], OnHit::ShootAgain).unwrap());
    game.submit("1A1R").unwrap();
    game.submit("y").unwrap();
    game.submit("1J10U").unwrap();
    game.submit("y").unwrap();

    assert_eq!(
        game.submit("a1"),
        Ok(Outcome::Shot {
            target: "A1".parse().unwrap(),
            outcome: ShotOutcome::Victory(dinghy),
            next: Phase::Finished(Player::P2),
        })
    );
}

#[test]
fn quit_changes_nothing() {
    let mut game = Game::new();
    game.submit("5A1R").unwrap();
    let before = (game.board(Player::P1).clone(), game.fleet(Player::P1).clone());
    assert_eq!(game.submit("XXX"), Ok(Outcome::Quit));
    assert_eq!(game.phase(), Phase::Placing(Player::P1));
    assert_eq!((game.board(Player::P1).clone(), game.fleet(Player::P1).clone()), before);

    let mut game = battle_ready(Rules::default());
    assert_eq!(game.submit("xxx"), Ok(Outcome::Quit));
    assert_eq!(game.phase(), Phase::Battling(Player::P2));
}

/// Presenter that replays a fixed script and records what it was shown.
#[derive(Default)]
struct Scripted {
    lines: VecDeque<String>,
    prompts: Vec<(Player, Prompt)>,
    target_views: usize,
    leaked_ships: bool,
    announced: Vec<Outcome>,
    rejected: Vec<Rejection>,
}

impl Scripted {
    fn new<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            lines: lines.into_iter().map(str::to_owned).collect(),
            ..Default::default()
        }
    }
}

impl Presenter for Scripted {
    fn show_board(&mut self, _player: Player, board: &Board, view: View) {
        if view == View::Target {
            self.target_views += 1;
            let shown: Vec<Cell> = board.rows().flatten().map(Cell::concealed).collect();
            self.leaked_ships |= shown.contains(&Cell::Occupied);
        }
    }

    fn show_fleet(&mut self, _player: Player, _fleet: &Fleet) {}

    fn announce(&mut self, _player: Player, outcome: &Outcome) {
        self.announced.push(outcome.clone());
    }

    fn show_rejection(&mut self, _player: Player, rejection: &Rejection) {
        self.rejected.push(rejection.clone());
    }

    fn read_line(&mut self, player: Player, prompt: Prompt) -> io::Result<String> {
        self.prompts.push((player, prompt));
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script finished"))
    }
}

#[test]
fn play_runs_a_scripted_game_to_the_end() {
    let mut script: Vec<&str> = Vec::new();
    script.extend(&LAYOUT);
    script.push("y");
    script.push("9A1R");
    script.extend(&LAYOUT);
    script.push("y");
    // Player 2 misses, player 1 misses, player 2 repeats a target and then misses again.
    script.extend(&["J10", "J10", "J10", "J9"]);
    script.extend(&LAYOUT_CELLS);

    let mut presenter = Scripted::new(script);
    let mut game = Game::new();
    let ending = game.play(&mut presenter).unwrap();

    assert_eq!(ending, Ending::Winner(Player::P1));
    assert!(presenter.lines.is_empty());
    assert_eq!(presenter.prompts.first(), Some(&(Player::P1, Prompt::Placement)));
    assert_eq!(presenter.prompts[5], (Player::P1, Prompt::Confirmation));
    assert_eq!(presenter.prompts.last(), Some(&(Player::P1, Prompt::Attack)));
    assert_eq!(presenter.target_views, 4 + LAYOUT_CELLS.len());
    assert!(!presenter.leaked_ships);

    let rejected: Vec<_> = presenter
        .rejected
        .iter()
        .map(|rejection| rejection.violations().to_vec())
        .collect();
    assert_eq!(
        rejected,
        vec![
            vec![Violation::UnknownShipLength {
                requested: 9,
                available: vec![2, 3, 4, 5],
            }],
            vec![Violation::AlreadyAttacked("J10".parse().unwrap())],
        ]
    );
    assert!(matches!(
        presenter.announced.last(),
        Some(Outcome::Shot {
            outcome: ShotOutcome::Victory(_),
            ..
        })
    ));
}

#[test]
fn play_stops_when_a_player_quits() {
    let mut presenter = Scripted::new(vec!["5A1R", "xxx"]);
    let mut game = Game::new();
    assert_eq!(game.play(&mut presenter).unwrap(), Ending::Quit);
    assert_eq!(game.fleet(Player::P1).len(), 4);
    assert_eq!(presenter.announced.len(), 1);
}

#[test]
fn play_surfaces_presenter_errors() {
    let mut presenter = Scripted::new(vec!["5A1R"]);
    let mut game = Game::new();
    let err = game.play(&mut presenter).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(game.phase(), Phase::Placing(Player::P1));
}
