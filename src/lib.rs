//! # Treasure Hunter - a small text adventure
//!
//! The hunter wanders from town to town looking for three treasures: a crown, a
//! trophy and a gem. Every town is ringed by terrain that needs the right kit to
//! cross, the locals may pick a fight, and a shovel lets you dig for gold once per
//! town. Run out of gold and the hunt is over.
//!
//! ## Features
//!
//! - **Single-letter commands**: buy, sell, explore, move, look for trouble, hunt, dig, exit.
//! - **Modes**: normal, hard (tougher towns, stingier shop), easy, samurai and a test mode.
//! - **Deterministic play**: all chance goes through an injectable [`game::RandomSource`],
//!   so a seed or a scripted roll list reproduces a session exactly.
//! - **Scripted input**: replay a command file instead of typing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use treasure_hunter::config::{Modes, Rules, GameConfig};
//! use treasure_hunter::game::{Game, GameRng, LineInput, Palette};
//!
//! fn main() -> std::io::Result<()> {
//!     let rules = Rules::new(&GameConfig::default(), Modes::default());
//!     let mut game = Game::new("ada", rules, GameRng::new(7));
//!     let mut input = LineInput::new(std::io::stdin().lock());
//!     let ending = game.run(&mut input, &mut std::io::stdout(), Palette::plain())?;
//!     println!("{:?}", ending);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - the hunt: terrain, hunter, towns, shop and the controller
//! - [`config`] - TOML configuration and the per-session [`config::Rules`]
//! - [`errors`] - error types for configuration and I/O outside the hunt
//! - [`logutil`] - log-safe escaping of player input

pub mod config;
pub mod errors;
pub mod game;
pub mod logutil;
