use std::io::{BufRead, Write};

use fivehundred_core::game::session::{MenuChoice, SessionIo};
use fivehundred_core::game::table::Table;
use fivehundred_core::model::bid::all_bids;
use fivehundred_core::model::card::Card;
use tracing::{debug, info, warn};

/// Maps one line of menu input to a choice: y/yes plays, n/no quits,
/// anything else asks again.
pub fn parse_menu_answer(answer: &str) -> Option<MenuChoice> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(MenuChoice::Play),
        "n" | "no" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Terminal front end for a session: prompts on `input`, presents rounds on
/// `output`, and owns the table it deals from.
pub struct ConsoleIo<R, W> {
    input: R,
    output: W,
    table: Table,
    last_kitty: Vec<Card>,
}

impl<R, W> ConsoleIo<R, W> {
    pub fn new(table: Table, input: R, output: W) -> Self {
        Self {
            input,
            output,
            table,
            last_kitty: Vec::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    fn say(&mut self, text: &str) {
        let _ = write!(self.output, "{text}");
        let _ = self.output.flush();
    }

    fn say_line(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    fn show_bid_ladder(&mut self) {
        self.say_line("The bidding ladder:");
        let line = all_bids()
            .map(|bid| bid.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.say_line(&format!("  {line}"));
    }
}

impl<R: BufRead, W: Write> SessionIo for ConsoleIo<R, W> {
    fn main_menu(&mut self) -> MenuChoice {
        loop {
            self.say("Play a round? [y/n] ");
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    warn!("input closed at the menu, quitting");
                    return MenuChoice::Quit;
                }
                Ok(_) => match parse_menu_answer(&line) {
                    Some(choice) => {
                        debug!(?choice, "menu answered");
                        return choice;
                    }
                    None => self.say_line("Please answer yes or no."),
                },
                Err(error) => {
                    warn!(%error, "failed to read menu input, quitting");
                    return MenuChoice::Quit;
                }
            }
        }
    }

    fn play_round(&mut self) {
        if self.table.rounds_dealt() == 0 {
            self.show_bid_ladder();
        }

        self.last_kitty = self.table.deal_round();
        let round = self.table.rounds_dealt();
        info!(round, kitty = self.last_kitty.len(), "dealt round");

        self.say_line(&format!("--- Round {round} ---"));
        for seat in 0..self.table.players().len() {
            let player = &self.table.players()[seat];
            let cards = player
                .hand()
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let line = format!("{}: {cards}", player.name());
            self.say_line(&line);
        }
        let kitty = self
            .last_kitty
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.say_line(&format!("Kitty: {kitty}"));
    }

    fn round_summary(&mut self) {
        let line = format!(
            "Round {} complete; {} cards went to the kitty.",
            self.table.rounds_dealt(),
            self.last_kitty.len()
        );
        self.say_line(&line);
    }

    fn shutdown(&mut self) {
        info!(rounds = self.table.rounds_dealt(), "session over");
        self.say_line("Thanks for playing. Goodbye.");
    }
}
