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

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg};
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{style, Color, StyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use log::{debug, info, warn};

use seabattle::{
    board::row_label, Board, Cell, Ending, Fleet, Game, OnHit, Outcome, Phase, Player,
    Presenter, Prompt, Rejection, Rules, ShotOutcome, View, BOARD_SIZE,
};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player command line battleship game.")
        .arg(
            Arg::with_name("on_hit")
                .long("on-hit")
                .value_name("RULE")
                .help("whether a hit earns another shot (\"again\") or passes the turn (\"pass\")")
                .takes_value(true)
                .possible_values(&["again", "pass"])
                .case_insensitive(true)
                .default_value("again"),
        )
        .arg(
            Arg::with_name("no_clear")
                .long("no-clear")
                .help("do not clear the screen between turns"),
        )
        .arg(
            Arg::with_name("no_color")
                .long("no-color")
                .help("print without colors"),
        )
        .get_matches();

    let on_hit: OnHit = matches
        .value_of("on_hit")
        .unwrap_or("again")
        .parse()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let rules = Rules::default().with_on_hit(on_hit);
    info!("starting with {:?}", rules);

    let stdin = io::stdin();
    let mut presenter = Terminal {
        input: InputReader::new(stdin.lock()),
        palette: Palette {
            enabled: !matches.is_present("no_color"),
        },
        clear: !matches.is_present("no_clear"),
        cleared: false,
    };
    let mut game = Game::with_rules(rules);

    match game.play(&mut presenter) {
        Ok(Ending::Winner(player)) => {
            println!();
            println!(
                "{}",
                presenter
                    .palette
                    .paint(format!("All ships sunk! {} wins!", PlayerName(player)), Color::Green)
            );
            Ok(())
        }
        Ok(Ending::Quit) => {
            println!();
            println!("Bye! Thanks for playing!");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            debug!("input closed, leaving the game");
            println!();
            println!("Bye! Thanks for playing!");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Colors terminal output, or leaves it plain when disabled.
#[derive(Debug, Copy, Clone)]
struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint<D: fmt::Display>(self, content: D, color: Color) -> StyledContent<D> {
        if self.enabled {
            style(content).with(color)
        } else {
            style(content)
        }
    }

    fn heading<D: fmt::Display>(self, content: D) -> StyledContent<D> {
        if self.enabled {
            style(content).with(Color::Magenta).bold().underlined()
        } else {
            style(content)
        }
    }
}

/// Presenter that plays both seats on one terminal.
struct Terminal<B> {
    input: InputReader<B>,
    palette: Palette,
    clear: bool,
    /// Whether the screen was already cleared for the current prompt.
    cleared: bool,
}

impl<B: BufRead> Terminal<B> {
    /// Wait for the player to acknowledge a message before the screen changes. A closed
    /// input is left for the next prompt to report.
    fn pause(&mut self) {
        let prompt = self.palette.paint("Press 'ENTER' to continue:", Color::Yellow);
        match self.input.read_input(prompt) {
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("input closed while paused");
            }
            Err(err) => warn!("failed to wait for the player: {}", err),
        }
    }

    /// Clear the screen once per prompt, so every board shown for it stays visible.
    fn clear_screen(&mut self) {
        if self.clear && !self.cleared {
            if let Err(err) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
                warn!("failed to clear the screen: {}", err);
            }
        }
        self.cleared = true;
    }
}

impl<B: BufRead> Presenter for Terminal<B> {
    fn show_board(&mut self, player: Player, board: &Board, view: View) {
        self.clear_screen();
        let title = match view {
            View::Own => format!("{}'s Board", PlayerName(player)),
            View::Target => format!("{}'s Targets", PlayerName(player)),
        };
        println!("{}", self.palette.heading(title));
        println!();
        let palette = self.palette;
        show_board(
            palette,
            board.rows().map(move |row| {
                row.map(move |cell| BoardCell {
                    cell: match view {
                        View::Own => cell,
                        View::Target => cell.concealed(),
                    },
                    palette,
                })
            }),
        );
        println!();
    }

    fn show_fleet(&mut self, _player: Player, fleet: &Fleet) {
        println!("{}", self.palette.paint("Available ships:", Color::Green));
        for ship in fleet.remaining() {
            println!("{}: {}", ship.name(), ship.length());
        }
        println!();
        println!("{}", self.palette.paint("Controls:", Color::Green));
        println!("Format: [length][row][column][direction]");
        println!("Examples: 5A1R (Carrier at A1 going right), 3B10L (Cruiser at B10 going left)");
        println!("Directions: R = right, L = left, U = up, D = down");
    }

    fn announce(&mut self, player: Player, outcome: &Outcome) {
        match outcome {
            Outcome::Placed { ship, remaining, .. } => {
                debug!("{} placed {}, {} left", player, ship, remaining);
            }
            Outcome::PlacementReset => {
                println!();
                println!(
                    "{}",
                    self.palette
                        .paint("All ships removed, place your ships again!", Color::Yellow)
                );
                self.pause();
            }
            Outcome::PlacementConfirmed { next } => {
                println!();
                println!("{}", self.palette.paint("Ship placement confirmed!", Color::Green));
                if let Phase::Battling(first) = next {
                    println!("Battle stations! {} fires first.", PlayerName(*first));
                } else {
                    println!("Pass the keyboard to {}.", PlayerName(next.player()));
                }
                self.pause();
            }
            Outcome::Shot {
                target,
                outcome,
                next,
            } => {
                println!();
                match outcome {
                    ShotOutcome::Miss => println!("{}: miss.", target),
                    ShotOutcome::Hit => {
                        println!("{}", self.palette.paint(format!("{}: hit!", target), Color::Red))
                    }
                    ShotOutcome::Sunk(ship) => println!(
                        "{}",
                        self.palette
                            .paint(format!("{}: hit! You sank the {}!", target, ship), Color::Red)
                    ),
                    ShotOutcome::Victory(ship) => println!(
                        "{}",
                        self.palette.paint(
                            format!("{}: hit! You sank the {}, the last ship!", target, ship),
                            Color::Red
                        )
                    ),
                }
                match next {
                    Phase::Battling(p) if *p == player => println!("Fire again."),
                    Phase::Battling(p) => println!("Pass the keyboard to {}.", PlayerName(*p)),
                    _ => {}
                }
                self.pause();
            }
            Outcome::Quit => {}
        }
    }

    fn show_rejection(&mut self, _player: Player, rejection: &Rejection) {
        for violation in rejection.violations() {
            println!();
            println!("{}", self.palette.paint(violation, Color::Red));
        }
        println!();
        self.pause();
    }

    fn read_line(&mut self, _player: Player, prompt: Prompt) -> io::Result<String> {
        if prompt == Prompt::Confirmation {
            println!("{}", self.palette.paint("All ships placed!", Color::Green));
        }
        let text = match prompt {
            Prompt::Placement => "Enter code (or 'x' to reset board, 'xxx' to quit):",
            Prompt::Confirmation => "Are you satisfied with your ship placement? (y/n):",
            Prompt::Attack => "Enter target (ex. a1 or j10, 'xxx' to quit):",
        };
        self.cleared = false;
        println!();
        self.input.read_input(self.palette.paint(text, Color::Yellow))
    }
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items. Rows are labelled with letters, columns with numbers along the bottom.
fn show_board(palette: Palette, rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    for (i, row) in rows.enumerate() {
        print!("{} ", palette.paint(row_label(i), Color::Magenta));
        for cell in row {
            print!("{} ", cell);
        }
        println!();
    }
    print!("  ");
    for i in 1..=BOARD_SIZE {
        print!("{} ", palette.paint(format!("{:>2}", i), Color::Magenta));
    }
    println!();
}

/// Display helper that prints a single board cell, two columns wide.
struct BoardCell {
    cell: Cell,
    palette: Palette,
}

impl fmt::Display for BoardCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (glyph, color) = match self.cell {
            Cell::Empty => ("-", Some(Color::Blue)),
            Cell::Occupied => ("#", Some(Color::Green)),
            Cell::Hit => ("X", Some(Color::Red)),
            Cell::Miss => ("o", None),
        };
        // Pad before coloring so escape codes don't count towards the width.
        let glyph = format!("{:>2}", glyph);
        match color {
            Some(color) => write!(f, "{}", self.palette.paint(glyph, color)),
            None => f.write_str(&glyph),
        }
    }
}

/// Display helper that prints a player's name with a capital letter.
struct PlayerName(Player);

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.0.number())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Print the prompt and read one line. Returns `UnexpectedEof` once input is closed.
    fn read_input(&mut self, prompt: impl fmt::Display) -> io::Result<String> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(self.buf.trim_end_matches(&['\r', '\n'][..]).to_owned())
    }
}
