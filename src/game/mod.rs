//! The hunt itself: a synchronous state machine driven one command at a time.
//!
//! - [`dice`] - random sources, seeded or scripted
//! - [`terrain`], [`hunter`], [`town`] - the world and the player
//! - [`shop`] - buying and selling kit
//! - [`command`], [`input`] - turning lines of text into commands
//! - [`controller`] - the [`Game`] loop and terminal states
//! - [`render`] - menu and status text

pub mod command;
pub mod controller;
pub mod dice;
pub mod hunter;
pub mod input;
pub mod render;
pub mod shop;
pub mod terrain;
pub mod town;

pub use command::Command;
pub use controller::{Ending, Game, GameStatus, SessionStats, SessionSummary, Turn};
pub use dice::{GameRng, RandomSource, ScriptedRolls};
pub use hunter::{Hunter, Treasure};
pub use input::{CommandSource, LineInput, ScriptedInput};
pub use render::{Palette, Tone};
pub use shop::{Shop, ShopChoice};
pub use terrain::Terrain;
pub use town::Town;
