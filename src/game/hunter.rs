//! The hunter: name, gold purse, kit of tools and the treasure ledger.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Items handed out by test mode on top of the starting purse.
pub const TEST_MODE_KIT: [&str; 6] = ["water", "rope", "machete", "horse", "boat", "boots"];

/// One of the three collectibles; holding all of them wins the hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
}

impl Treasure {
    pub const ALL: [Treasure; 3] = [Treasure::Crown, Treasure::Trophy, Treasure::Gem];

    pub fn as_str(&self) -> &'static str {
        match self {
            Treasure::Crown => "crown",
            Treasure::Trophy => "trophy",
            Treasure::Gem => "gem",
        }
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: i32,
    kit: BTreeSet<String>,
    treasures: BTreeSet<Treasure>,
}

fn item_key(item: &str) -> String {
    item.trim().to_lowercase()
}

impl Hunter {
    pub fn new(name: &str, gold: i32) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            gold,
            kit: BTreeSet::new(),
            treasures: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Add (or with a negative delta, take) gold. The purse may go negative.
    pub fn change_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
    }

    /// Item names in the kit, lower-cased and sorted.
    pub fn kit(&self) -> impl Iterator<Item = &str> {
        self.kit.iter().map(String::as_str)
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.kit.contains(&item_key(item))
    }

    /// Returns false if the item was already in the kit.
    pub fn add_item(&mut self, item: &str) -> bool {
        self.kit.insert(item_key(item))
    }

    /// Returns false if the item was not in the kit.
    pub fn remove_item(&mut self, item: &str) -> bool {
        self.kit.remove(&item_key(item))
    }

    pub fn treasures(&self) -> impl Iterator<Item = Treasure> + '_ {
        self.treasures.iter().copied()
    }

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&treasure)
    }

    /// Record a find. Returns false (and changes nothing) when it was already held.
    pub fn add_treasure(&mut self, treasure: Treasure) -> bool {
        self.treasures.insert(treasure)
    }

    pub fn has_all_treasures(&self) -> bool {
        Treasure::ALL.iter().all(|t| self.treasures.contains(t))
    }

    /// Test mode: extra gold and a kit that can cross every terrain.
    pub fn outfit_for_testing(&mut self, bonus_gold: i32) {
        self.change_gold(bonus_gold);
        for item in TEST_MODE_KIT {
            self.add_item(item);
        }
    }

    pub fn info_string(&self) -> String {
        let mut out = format!("{} has {} gold", self.name, self.gold);
        if !self.kit.is_empty() {
            let items: Vec<&str> = self.kit().collect();
            out.push_str(" and ");
            out.push_str(&items.join(" "));
        }
        out
    }

    pub fn treasure_string(&self) -> String {
        if self.treasures.is_empty() {
            return "Treasures found: none".to_string();
        }
        let found: Vec<String> = self.treasures().map(|t| format!("a {}", t)).collect();
        format!("Treasures found: {}", found.join(", "))
    }
}
