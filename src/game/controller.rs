//! Game controller: owns the hunter and the current town, interprets commands and
//! decides when the hunt is over.
//!
//! Contract:
//! - A rejected command (missing shovel, already dug, already searched, unknown
//!   input) changes nothing and consumes no random draws.
//! - Terminal states are checked before every new command; once the hunt is won,
//!   lost or abandoned, further commands only repeat the closing narration.
//! - Moving on drops the current [`Town`] and generates a fresh one, so per-town
//!   counters never carry over.

use std::io::{self, Write};

use log::{debug, info};
use serde::Serialize;

use super::command::Command;
use super::dice::RandomSource;
use super::hunter::{Hunter, Treasure};
use super::input::CommandSource;
use super::render::{self, Palette, Tone};
use super::shop::{Shop, ShopChoice};
use super::town::{BrawlOutcome, Town};
use crate::config::Rules;
use crate::logutil::escape_input;

pub const WIN_TEXT: &str =
    "Congratulations, you have found the last of the three treasures, you win!";
pub const LOSS_TEXT: &str = "You've run out of gold and can't continue the hunt. Game over!";
pub const ALREADY_SEARCHED_TEXT: &str = "you have already searched this town";
pub const INVALID_TEXT: &str = "Yikes! That's an invalid option! Try again.";
pub const NO_SHOVEL_TEXT: &str =
    "You can't dig for gold without a shovel.\nYou need a shovel to dig, y'know ^^";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AtTown,
    Won,
    Lost,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    Won,
    Lost,
    Quit,
    InputClosed,
}

/// Outcome of one command. `ended` is set once the hunt is over, whatever the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub message: String,
    pub tone: Tone,
    pub ended: bool,
}

impl Turn {
    fn plain(message: impl Into<String>) -> Self {
        Self::toned(message, Tone::Plain)
    }

    fn toned(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
            ended: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub towns_visited: u32,
    pub turns: u32,
    pub brawls_won: u32,
    pub brawls_lost: u32,
    pub items_broken: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub name: String,
    pub mode: &'static str,
    pub gold: i32,
    pub treasures: Vec<Treasure>,
    pub kit: Vec<String>,
    pub stats: SessionStats,
    pub ending: Option<Ending>,
}

pub struct Game<R: RandomSource> {
    hunter: Hunter,
    town: Town,
    shop: Shop,
    rules: Rules,
    rng: R,
    news: String,
    tone: Tone,
    stats: SessionStats,
    ending: Option<Ending>,
}

impl<R: RandomSource> Game<R> {
    /// Start a session: outfit the hunter (test mode) and generate the first town.
    pub fn new(name: &str, rules: Rules, mut rng: R) -> Self {
        let mut hunter = Hunter::new(name, rules.starting_gold);
        if rules.modes.test {
            hunter.outfit_for_testing(rules.test_bonus_gold);
        }
        let town = Town::generate(rules.toughness, &mut rng);
        info!(
            "hunt started: hunter={} mode={} gold={}",
            hunter.name(),
            rules.modes.label(),
            hunter.gold()
        );
        Self::with_parts(hunter, town, rules, rng)
    }

    /// Assemble a session from prepared parts, e.g. a fixed town in tests.
    pub fn with_parts(hunter: Hunter, town: Town, rules: Rules, rng: R) -> Self {
        let news = town.welcome(&hunter);
        Self {
            hunter,
            town,
            shop: Shop::new(rules.markdown),
            rules,
            rng,
            news,
            tone: Tone::Plain,
            stats: SessionStats {
                towns_visited: 1,
                ..SessionStats::default()
            },
            ending: None,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Latest narration for the town screen.
    pub fn news(&self) -> &str {
        &self.news
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Loss wins over victory when both hold.
    pub fn status(&self) -> GameStatus {
        if self.hunter.gold() < 0 {
            GameStatus::Lost
        } else if self.hunter.has_all_treasures() {
            GameStatus::Won
        } else {
            GameStatus::AtTown
        }
    }

    /// Settle a terminal state, if one has been reached. Returns the session's ending.
    pub fn check_terminal(&mut self) -> Option<Ending> {
        if self.ending.is_none() {
            self.ending = match self.status() {
                GameStatus::Won => Some(Ending::Won),
                GameStatus::Lost => Some(Ending::Lost),
                GameStatus::AtTown => None,
            };
            if let Some(ending) = self.ending {
                info!("hunt over: hunter={} ending={:?}", self.hunter.name(), ending);
            }
        }
        self.ending
    }

    fn ending_text(&self, ending: Ending) -> String {
        match ending {
            Ending::Won => WIN_TEXT.to_string(),
            Ending::Lost => LOSS_TEXT.to_string(),
            Ending::Quit | Ending::InputClosed => format!("Fare thee well, {}!", self.hunter.name()),
        }
    }

    /// Parse and apply one line of player input.
    pub fn submit(&mut self, raw: &str) -> Turn {
        debug!("input: \"{}\"", escape_input(raw));
        self.apply(Command::parse(raw))
    }

    /// Apply one command and record its narration as the latest news.
    pub fn apply(&mut self, command: Command) -> Turn {
        if let Some(ending) = self.check_terminal() {
            let mut turn = Turn::plain(self.ending_text(ending));
            turn.ended = true;
            return turn;
        }
        let mut turn = match command {
            Command::Invalid(_) => Turn::plain(INVALID_TEXT),
            Command::Exit => {
                self.ending = Some(Ending::Quit);
                info!("hunt abandoned by {}", self.hunter.name());
                Turn::plain(self.ending_text(Ending::Quit))
            }
            other => {
                self.stats.turns += 1;
                self.act(other)
            }
        };
        turn.ended = self.ending.is_some() || self.status() != GameStatus::AtTown;
        self.news = turn.message.clone();
        self.tone = turn.tone;
        turn
    }

    fn act(&mut self, command: Command) -> Turn {
        let modes = self.rules.modes;
        match command {
            Command::Buy(item) => {
                Turn::plain(self.shop.enter(&mut self.hunter, ShopChoice::Buy, item.as_deref()))
            }
            Command::Sell(item) => {
                Turn::plain(self.shop.enter(&mut self.hunter, ShopChoice::Sell, item.as_deref()))
            }
            Command::Explore => Turn::plain(self.town.terrain().info_string()),
            Command::Move => self.move_on(),
            Command::LookForTrouble => {
                let brawl = self.town.look_for_trouble(&mut self.hunter, modes, &mut self.rng);
                let tone = match brawl.outcome {
                    BrawlOutcome::NoTrouble => Tone::Plain,
                    BrawlOutcome::Won(_) | BrawlOutcome::Yielded(_) => {
                        self.stats.brawls_won += 1;
                        Tone::Danger
                    }
                    BrawlOutcome::Lost(_) => {
                        self.stats.brawls_lost += 1;
                        Tone::Danger
                    }
                };
                Turn::toned(brawl.message, tone)
            }
            Command::Hunt => {
                if self.town.has_searched() {
                    return Turn::plain(ALREADY_SEARCHED_TEXT);
                }
                let before = self.hunter.treasures().count();
                let message = self.town.hunt_for_treasure(&mut self.hunter, &mut self.rng);
                let tone = if self.hunter.treasures().count() > before {
                    Tone::Reward
                } else {
                    Tone::Plain
                };
                Turn::toned(message, tone)
            }
            Command::Dig => {
                if !self.hunter.has_item("shovel") {
                    return Turn::plain(NO_SHOVEL_TEXT);
                }
                let before = self.hunter.gold();
                let message = self.town.dig(&mut self.hunter, &mut self.rng);
                let tone = if self.hunter.gold() > before {
                    Tone::Reward
                } else {
                    Tone::Plain
                };
                Turn::toned(message, tone)
            }
            Command::Exit | Command::Invalid(_) => Turn::plain(INVALID_TEXT),
        }
    }

    fn move_on(&mut self) -> Turn {
        let departure = self
            .town
            .leave(&mut self.hunter, self.rules.modes, &mut self.rng);
        if !departure.crossed {
            return Turn::plain(departure.message);
        }
        if departure.item_broke {
            self.stats.items_broken += 1;
        }
        self.town = Town::generate(self.rules.toughness, &mut self.rng);
        self.stats.towns_visited += 1;
        Turn::plain(format!(
            "{}\n{}",
            departure.message,
            self.town.welcome(&self.hunter)
        ))
    }

    /// Play until the hunt ends or the input runs dry.
    pub fn run(
        &mut self,
        input: &mut dyn CommandSource,
        out: &mut dyn Write,
        palette: Palette,
    ) -> io::Result<Ending> {
        loop {
            write!(
                out,
                "{}",
                render::screen(&self.news, self.tone, &self.hunter, &self.town, palette)
            )?;
            if let Some(ending) = self.check_terminal() {
                writeln!(out, "{}", self.ending_text(ending))?;
                return Ok(ending);
            }
            write!(out, "\n{}", render::PROMPT)?;
            out.flush()?;
            let Some(line) = input.next_command() else {
                self.ending = Some(Ending::InputClosed);
                writeln!(out, "\n{}", self.ending_text(Ending::InputClosed))?;
                return Ok(Ending::InputClosed);
            };
            let turn = self.submit(&line);
            if self.ending == Some(Ending::Quit) {
                writeln!(out, "{}", turn.message)?;
                return Ok(Ending::Quit);
            }
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            name: self.hunter.name().to_string(),
            mode: self.rules.modes.label(),
            gold: self.hunter.gold(),
            treasures: self.hunter.treasures().collect(),
            kit: self.hunter.kit().map(str::to_string).collect(),
            stats: self.stats.clone(),
            ending: self.ending,
        }
    }
}
