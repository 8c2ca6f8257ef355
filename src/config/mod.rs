//! # Configuration
//!
//! Session settings come from three places, in increasing precedence:
//! built-in defaults, the TOML config file, and the command line.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - purse sizes and the probability knobs used by towns and the shop
//! - [`DisplayConfig`] - terminal presentation (ANSI colour)
//! - [`LoggingConfig`] - log level and optional log file
//!
//! The mode answer given at start-up ([`Modes`]) is combined with [`GameConfig`] into
//! [`Rules`], which stays fixed for the whole session.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! starting_gold = 20
//! toughness = 0.4
//! hard_toughness = 0.75
//! markdown = 0.25
//! hard_markdown = 0.5
//! test_bonus_gold = 80
//!
//! [display]
//! color = true
//!
//! [logging]
//! level = "warn"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Gold every hunter starts with.
    #[serde(default = "default_starting_gold")]
    pub starting_gold: i32,
    /// Chance a freshly generated town is tough.
    #[serde(default = "default_toughness")]
    pub toughness: f64,
    /// Toughness used in hard mode.
    #[serde(default = "default_hard_toughness")]
    pub hard_toughness: f64,
    /// Share of an item's price the shop keeps when buying it back.
    #[serde(default = "default_markdown")]
    pub markdown: f64,
    /// Markdown used in hard mode.
    #[serde(default = "default_hard_markdown")]
    pub hard_markdown: f64,
    /// Extra gold granted in test mode.
    #[serde(default = "default_test_bonus_gold")]
    pub test_bonus_gold: i32,
}

fn default_starting_gold() -> i32 {
    20
}

fn default_toughness() -> f64 {
    0.4
}

fn default_hard_toughness() -> f64 {
    0.75
}

fn default_markdown() -> f64 {
    0.25
}

fn default_hard_markdown() -> f64 {
    0.5
}

fn default_test_bonus_gold() -> i32 {
    80
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_gold: default_starting_gold(),
            toughness: default_toughness(),
            hard_toughness: default_hard_toughness(),
            markdown: default_markdown(),
            hard_markdown: default_hard_markdown(),
            test_bonus_gold: default_test_bonus_gold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colour terrain names and brawl narration with ANSI escapes.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level; unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Warn,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!(
                "Config file {} not found; using built-in defaults",
                path.display()
            );
            return Ok(Config::default());
        }
        Self::load(path)
    }

    /// Create a default configuration file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.game;
        for (field, value) in [
            ("game.toughness", g.toughness),
            ("game.hard_toughness", g.hard_toughness),
            ("game.markdown", g.markdown),
            ("game.hard_markdown", g.hard_markdown),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { field, value });
            }
        }
        if g.starting_gold < 0 {
            return Err(ConfigError::NegativeGold {
                field: "game.starting_gold",
                value: g.starting_gold,
            });
        }
        if g.test_bonus_gold < 0 {
            return Err(ConfigError::NegativeGold {
                field: "game.test_bonus_gold",
                value: g.test_bonus_gold,
            });
        }
        Ok(())
    }
}

/// Session mode flags chosen once at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modes {
    /// Items never break and trouble is easier to find (and win).
    pub easy: bool,
    /// Tougher towns and a stingier shop.
    pub hard: bool,
    /// Carrying a sword makes brawlers pay up without a fight.
    pub samurai: bool,
    /// Start rich and able to cross every terrain.
    pub test: bool,
}

impl Modes {
    /// Parse the start-up answer: `y` hard, `n` normal, `e` easy, `s` samurai, `test`.
    pub fn from_answer(answer: &str) -> Option<Self> {
        let modes = match answer.trim().to_lowercase().as_str() {
            "n" => Modes::default(),
            "y" => Modes {
                hard: true,
                ..Modes::default()
            },
            "e" => Modes {
                easy: true,
                ..Modes::default()
            },
            "s" => Modes {
                samurai: true,
                ..Modes::default()
            },
            "test" => Modes {
                test: true,
                ..Modes::default()
            },
            _ => return None,
        };
        Some(modes)
    }

    pub fn label(&self) -> &'static str {
        if self.test {
            "test"
        } else if self.samurai {
            "samurai"
        } else if self.hard {
            "hard"
        } else if self.easy {
            "easy"
        } else {
            "normal"
        }
    }
}

/// Immutable rule set for one session: modes plus the tuned numbers they select.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub modes: Modes,
    pub starting_gold: i32,
    pub toughness: f64,
    pub markdown: f64,
    pub test_bonus_gold: i32,
}

impl Rules {
    pub fn new(game: &GameConfig, modes: Modes) -> Self {
        let (toughness, markdown) = if modes.hard {
            (game.hard_toughness, game.hard_markdown)
        } else {
            (game.toughness, game.markdown)
        };
        Self {
            modes,
            starting_gold: game.starting_gold,
            toughness,
            markdown,
            test_bonus_gold: game.test_bonus_gold,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(&GameConfig::default(), Modes::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_answers() {
        assert_eq!(Modes::from_answer("N"), Some(Modes::default()));
        assert!(Modes::from_answer("y").unwrap().hard);
        assert!(Modes::from_answer(" e ").unwrap().easy);
        assert!(Modes::from_answer("s").unwrap().samurai);
        assert!(Modes::from_answer("TEST").unwrap().test);
        assert_eq!(Modes::from_answer("maybe"), None);
        assert_eq!(Modes::from_answer(""), None);
    }

    #[test]
    fn test_hard_rules_pick_hard_numbers() {
        let game = GameConfig::default();
        let hard = Rules::new(&game, Modes::from_answer("y").unwrap());
        assert_eq!(hard.toughness, 0.75);
        assert_eq!(hard.markdown, 0.5);
        let normal = Rules::new(&game, Modes::default());
        assert_eq!(normal.toughness, 0.4);
        assert_eq!(normal.markdown, 0.25);
        assert_eq!(normal.starting_gold, 20);
    }

    #[test]
    fn test_validate_rejects_bad_probability() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());
        config.game.toughness = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("game.toughness"));
    }

    #[test]
    fn test_validate_rejects_negative_gold() {
        let mut config = Config::default();
        config.game.starting_gold = -1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeGold { .. })
        ));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[game]\nstarting_gold = 50\n").unwrap();
        assert_eq!(config.game.starting_gold, 50);
        assert_eq!(config.game.toughness, 0.4);
        assert!(config.display.color);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_modes_serde() {
        let modes = Modes {
            samurai: true,
            ..Modes::default()
        };
        let serialized = serde_json::to_string(&modes).unwrap();
        assert!(serialized.contains("\"samurai\":true"));
        let back: Modes = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back, modes);
        assert_eq!(back.label(), "samurai");
    }
}
