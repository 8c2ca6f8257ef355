//! A single town visit.
//!
//! A `Town` is generated on arrival and dropped when the hunter moves on, so the
//! one-shot counters (digs, treasure search) live here and start fresh with every
//! new town instead of being reset by hand.

use log::debug;

use super::dice::RandomSource;
use super::hunter::{Hunter, Treasure};
use super::terrain::Terrain;
use crate::config::Modes;

/// Digs allowed per town.
pub const MAX_DIGS: u32 = 1;
/// Chance a used crossing item breaks (skipped in easy mode).
pub const ITEM_BREAK_CHANCE: f64 = 0.5;
/// Brawl purse is drawn from `1..=BRAWL_PURSE`.
pub const BRAWL_PURSE: u32 = 10;
/// Dig jackpot is drawn from `1..=DIG_PURSE`.
pub const DIG_PURSE: u32 = 20;

/// Result of trying to leave town.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub crossed: bool,
    pub item_broke: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrawlOutcome {
    NoTrouble,
    Won(i32),
    Lost(i32),
    /// Samurai mode: the locals paid up at the sight of a sword.
    Yielded(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brawl {
    pub outcome: BrawlOutcome,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Town {
    terrain: Terrain,
    tough: bool,
    digs: u32,
    searched: bool,
}

impl Town {
    /// Generate a town: one draw for the terrain, one for toughness.
    pub fn generate(toughness: f64, rng: &mut dyn RandomSource) -> Self {
        let terrain = Terrain::random(rng);
        let tough = rng.chance(toughness);
        debug!(
            "town generated: terrain={} tough={} (toughness {:.2})",
            terrain.name(),
            tough,
            toughness
        );
        Self::with_terrain(terrain, tough)
    }

    pub fn with_terrain(terrain: Terrain, tough: bool) -> Self {
        Self {
            terrain,
            tough,
            digs: 0,
            searched: false,
        }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn digs(&self) -> u32 {
        self.digs
    }

    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn welcome(&self, hunter: &Hunter) -> String {
        let mut msg = format!("Welcome to town, {}.", hunter.name());
        if self.tough {
            msg.push_str("\nIt's pretty rough around here, so watch yourself.");
        } else {
            msg.push_str("\nWe're just a sleepy little town with mild mannered folk.");
        }
        msg
    }

    pub fn info_string(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }

    /// Try to cross the surrounding terrain.
    ///
    /// Fails without touching the hunter when the needed item is missing. On success the
    /// item may break (one draw) unless easy mode is on.
    pub fn leave(
        &self,
        hunter: &mut Hunter,
        modes: Modes,
        rng: &mut dyn RandomSource,
    ) -> Departure {
        let item = self.terrain.needed_item();
        if !hunter.has_item(item) {
            return Departure {
                crossed: false,
                item_broke: false,
                message: format!(
                    "You can't leave town, {}. You don't have a {}.",
                    hunter.name(),
                    item
                ),
            };
        }
        let mut message = format!(
            "You used your {} to cross the {}.",
            item,
            self.terrain.name()
        );
        let item_broke = !modes.easy && rng.chance(ITEM_BREAK_CHANCE);
        if item_broke {
            hunter.remove_item(item);
            message.push_str(&format!("\nUnfortunately, you lost your {}.", item));
        }
        Departure {
            crossed: true,
            item_broke,
            message,
        }
    }

    /// Chance of finding no trouble at all. Easy mode lowers it; samurai mode ignores easy mode.
    pub fn no_trouble_chance(&self, modes: Modes) -> f64 {
        match (self.tough, modes.easy && !modes.samurai) {
            (true, false) => 0.66,
            (false, false) => 0.33,
            (true, true) => 0.22,
            (false, true) => 0.11,
        }
    }

    /// Go looking for a fight.
    ///
    /// The first draw decides whether trouble is found at all; a purse of 1..=10 gold
    /// is then drawn, and a second, independent draw against the same threshold
    /// decides who pays. In samurai mode a hunter carrying a sword skips the fight
    /// and collects the purse.
    pub fn look_for_trouble(
        &self,
        hunter: &mut Hunter,
        modes: Modes,
        rng: &mut dyn RandomSource,
    ) -> Brawl {
        let no_trouble = self.no_trouble_chance(modes);
        if rng.unit() <= no_trouble {
            return Brawl {
                outcome: BrawlOutcome::NoTrouble,
                message: "You couldn't find any trouble".to_string(),
            };
        }

        let purse = rng.roll(BRAWL_PURSE) as i32;
        if modes.samurai && hunter.has_item("sword") {
            hunter.change_gold(purse);
            debug!("brawl: {} yielded to a sword, +{}", hunter.name(), purse);
            return Brawl {
                outcome: BrawlOutcome::Yielded(purse),
                message: format!(
                    "Okay, stranger! I see you got a Sword so I don't want any trouble. Here, take my gold.\nYou won the brawl and receive {} gold.",
                    purse
                ),
            };
        }

        let mut message = "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n".to_string();
        let outcome = if rng.unit() > no_trouble {
            hunter.change_gold(purse);
            message.push_str("Okay, stranger! You proved yer mettle. Here, take my gold.");
            message.push_str(&format!("\nYou won the brawl and receive {} gold.", purse));
            BrawlOutcome::Won(purse)
        } else {
            hunter.change_gold(-purse);
            message.push_str("That'll teach you to go lookin' fer trouble in MY town! Now pay up!");
            message.push_str(&format!("\nYou lost the brawl and pay {} gold.", purse));
            BrawlOutcome::Lost(purse)
        };
        debug!(
            "brawl: {} {:?}, gold now {}",
            hunter.name(),
            outcome,
            hunter.gold()
        );
        Brawl { outcome, message }
    }

    /// Search the town for treasure. One draw over four outcomes; the fourth is dust.
    ///
    /// Marks the town as searched. Callers enforce the once-per-town rule by checking
    /// [`Town::has_searched`] first.
    pub fn hunt_for_treasure(&mut self, hunter: &mut Hunter, rng: &mut dyn RandomSource) -> String {
        self.searched = true;
        let found = match rng.roll(4) {
            1 => Some(Treasure::Crown),
            2 => Some(Treasure::Trophy),
            3 => Some(Treasure::Gem),
            _ => None,
        };
        match found {
            Some(treasure) => {
                let new = hunter.add_treasure(treasure);
                debug!("treasure: {} found {} (new: {})", hunter.name(), treasure, new);
                let mut label = treasure.as_str().to_string();
                label[..1].make_ascii_uppercase();
                format!("You found a {}!", label)
            }
            None => "You found only dust.".to_string(),
        }
    }

    pub fn can_dig(&self) -> bool {
        self.digs < MAX_DIGS
    }

    /// Dig for gold. Callers check for a shovel first; a town that has been dug
    /// already refuses without drawing.
    pub fn dig(&mut self, hunter: &mut Hunter, rng: &mut dyn RandomSource) -> String {
        if !self.can_dig() {
            return "You already dug for gold in this town.\nPack up your kit and move elsewhere to find gold!"
                .to_string();
        }
        self.digs += 1;
        if rng.below(2) == 0 {
            return "You dug but all you found was dirt...".to_string();
        }
        let found = rng.roll(DIG_PURSE) as i32;
        hunter.change_gold(found);
        debug!("dig: {} found {} gold", hunter.name(), found);
        format!("JACKPOT! You won {} gold!", found)
    }
}
