//! Text surface: the menu, status lines and optional ANSI colour.

use super::hunter::Hunter;
use super::town::Town;

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";

pub const MENU: [&str; 8] = [
    "(B)uy something at the shop.",
    "(S)ell something at the shop.",
    "(E)xplore surrounding terrain.",
    "(M)ove on to a different town.",
    "(L)ook for trouble!",
    "(H)unt for treasure",
    "(D)ig for gold",
    "Give up the hunt and e(X)it.",
];

pub const PROMPT: &str = "What's your next move? ";

/// How a message should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Brawl narration.
    Danger,
    /// Gold or treasure found.
    Reward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn terrain(&self, name: &str) -> String {
        self.wrap(CYAN, name)
    }

    pub fn toned(&self, tone: Tone, text: &str) -> String {
        match tone {
            Tone::Plain => text.to_string(),
            Tone::Danger => self.wrap(RED, text),
            Tone::Reward => self.wrap(YELLOW, text),
        }
    }
}

/// Status block shown above the menu every turn.
pub fn status(hunter: &Hunter, town: &Town, palette: Palette) -> String {
    format!(
        "***\n{}\n{}\nThis nice little town is surrounded by {}.",
        hunter.info_string(),
        hunter.treasure_string(),
        palette.terrain(town.terrain().name())
    )
}

pub fn menu() -> String {
    MENU.join("\n")
}

/// News, status and menu as printed before each prompt.
pub fn screen(news: &str, tone: Tone, hunter: &Hunter, town: &Town, palette: Palette) -> String {
    let mut out = String::from("\n");
    if !news.is_empty() {
        out.push_str(&palette.toned(tone, news));
        out.push('\n');
    }
    out.push_str(&status(hunter, town, palette));
    out.push('\n');
    out.push_str(&menu());
    out.push('\n');
    out
}
