use serde::Serialize;

use super::dice::RandomSource;

/// Obstacle surrounding a town and the kit item needed to cross it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Terrain {
    name: &'static str,
    needed_item: &'static str,
}

/// The six terrains a town can be surrounded by, each picked with equal weight.
pub const TERRAINS: [Terrain; 6] = [
    Terrain::new("Mountains", "Rope"),
    Terrain::new("Ocean", "Boat"),
    Terrain::new("Plains", "Horse"),
    Terrain::new("Desert", "Water"),
    Terrain::new("Jungle", "Machete"),
    Terrain::new("Marsh", "Boots"),
];

impl Terrain {
    const fn new(name: &'static str, needed_item: &'static str) -> Self {
        Self { name, needed_item }
    }

    /// Pick one of [`TERRAINS`] uniformly. Consumes exactly one draw.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        TERRAINS[rng.below(TERRAINS.len() as u32) as usize]
    }

    /// Look a terrain up by name, ignoring case.
    pub fn named(name: &str) -> Option<Self> {
        TERRAINS
            .iter()
            .copied()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn needed_item(&self) -> &'static str {
        self.needed_item
    }

    pub fn info_string(&self) -> String {
        format!(
            "The terrain is {} and you need a {} to cross it.",
            self.name, self.needed_item
        )
    }
}
