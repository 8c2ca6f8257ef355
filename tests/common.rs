//! Test utilities & fixtures shared by the integration tests.

use treasure_hunter::config::Rules;
use treasure_hunter::game::{Game, Hunter, ScriptedRolls, Terrain, Town};

/// A hunter with the given purse and kit.
pub fn hunter_with(name: &str, items: &[&str], gold: i32) -> Hunter {
    let mut hunter = Hunter::new(name, gold);
    for item in items {
        hunter.add_item(item);
    }
    hunter
}

/// A calm town surrounded by the named terrain.
pub fn town_of(terrain: &str, tough: bool) -> Town {
    Town::with_terrain(
        Terrain::named(terrain).unwrap_or_else(|| panic!("no terrain {}", terrain)),
        tough,
    )
}

/// A normal-mode game in a fixed town, drawing from the given rolls.
#[allow(dead_code)] // not every test binary drives a full game
pub fn game_at(town: Town, hunter: Hunter, rolls: &[f64]) -> Game<ScriptedRolls> {
    Game::with_parts(
        hunter,
        town,
        Rules::default(),
        ScriptedRolls::new(rolls.iter().copied()),
    )
}
