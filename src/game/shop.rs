//! The general store every town shares.
//!
//! The shop sits outside the hunt's state machine: it only moves gold and kit items
//! around and always answers with a line of text, never an error.

use log::debug;

use super::hunter::Hunter;

/// Store price list, cheapest first.
pub const PRICE_LIST: [(&str, i32); 8] = [
    ("water", 2),
    ("rope", 4),
    ("machete", 6),
    ("shovel", 8),
    ("boots", 8),
    ("sword", 10),
    ("horse", 12),
    ("boat", 20),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopChoice {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shop {
    markdown: f64,
}

fn price_of(item: &str) -> Option<(&'static str, i32)> {
    let key = item.trim().to_lowercase();
    PRICE_LIST.iter().copied().find(|(name, _)| *name == key)
}

impl Shop {
    /// `markdown` is the share of the price the shop keeps when buying an item back.
    pub fn new(markdown: f64) -> Self {
        Self {
            markdown: markdown.clamp(0.0, 1.0),
        }
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    /// What the shop pays for an item, if it trades in it at all.
    pub fn sell_price(&self, item: &str) -> Option<i32> {
        price_of(item).map(|(_, price)| (price as f64 * (1.0 - self.markdown)).floor() as i32)
    }

    pub fn buy_price(&self, item: &str) -> Option<i32> {
        price_of(item).map(|(_, price)| price)
    }

    pub fn inventory(&self, choice: ShopChoice) -> String {
        let mut out = match choice {
            ShopChoice::Buy => String::from("Welcome to the shop! We have the finest wares in town.\nCurrently we have the following items:"),
            ShopChoice::Sell => String::from("What're you lookin' to sell? We pay:"),
        };
        for (name, price) in PRICE_LIST {
            let shown = match choice {
                ShopChoice::Buy => price,
                ShopChoice::Sell => self.sell_price(name).unwrap_or(0),
            };
            out.push_str(&format!("\n{}: {} gold", name, shown));
        }
        out.push_str(match choice {
            ShopChoice::Buy => "\nType B <item> to buy.",
            ShopChoice::Sell => "\nType S <item> to sell.",
        });
        out
    }

    /// Run one shop transaction. Without an item the price list is returned.
    pub fn enter(&self, hunter: &mut Hunter, choice: ShopChoice, item: Option<&str>) -> String {
        let Some(item) = item.map(str::trim).filter(|i| !i.is_empty()) else {
            return self.inventory(choice);
        };
        match choice {
            ShopChoice::Buy => self.buy(hunter, item),
            ShopChoice::Sell => self.sell(hunter, item),
        }
    }

    fn buy(&self, hunter: &mut Hunter, item: &str) -> String {
        let Some((name, price)) = price_of(item) else {
            return format!("We ain't got none of those. ({})", item);
        };
        if hunter.has_item(name) {
            return format!("You already have a {}. One's plenty.", name);
        }
        if hunter.gold() < price {
            return format!(
                "Hmm, either you don't have enough gold or you've already got one of those!\nA {} costs {} gold.",
                name, price
            );
        }
        hunter.change_gold(-price);
        hunter.add_item(name);
        debug!("shop: {} bought {} for {}", hunter.name(), name, price);
        format!(
            "Ye' got yerself a {}. Come again soon.\nIt cost you {} gold.",
            name, price
        )
    }

    fn sell(&self, hunter: &mut Hunter, item: &str) -> String {
        let key = item.trim().to_lowercase();
        if !hunter.has_item(&key) {
            return format!("Stop stringin' me along! You don't have a {}.", key);
        }
        let Some(paid) = self.sell_price(&key) else {
            return format!("We don't buy {} here.", key);
        };
        hunter.remove_item(&key);
        hunter.change_gold(paid);
        debug!("shop: {} sold {} for {}", hunter.name(), key, paid);
        format!("Pleasure doin' business with you. You sold your {} for {} gold.", key, paid)
    }
}
