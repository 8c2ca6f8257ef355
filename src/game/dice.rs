//! Random sources for the hunt.
//!
//! Every probabilistic outcome in the game pulls from a [`RandomSource`] handed to it
//! by the caller; nothing reaches for a process-wide generator. Two implementations:
//! - [`GameRng`]: seeded `StdRng`, used by the binary and by seed-driven tests
//! - [`ScriptedRolls`]: a fixed queue of unit draws, used to force specific branches
//!
//! Both count draws so tests can assert that a rejected command consumed none.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability to draw random numbers. One call to either draw method counts as one draw.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `0..n`. Returns 0 when `n` is 0.
    fn below(&mut self, n: u32) -> u32;

    /// Number of draws consumed so far.
    fn draws(&self) -> u64;

    /// Uniform integer in `1..=n`.
    fn roll(&mut self, n: u32) -> u32 {
        self.below(n) + 1
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

/// Seeded generator backing a real session.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
    draws: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            draws: 0,
        }
    }

    /// Fresh generator with a random seed; the seed is kept so a session can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.rng.gen::<f64>()
    }

    fn below(&mut self, n: u32) -> u32 {
        self.draws += 1;
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    fn draws(&self) -> u64 {
        self.draws
    }
}

/// Deterministic source that replays a fixed list of unit values.
///
/// `below(n)` maps the next value `v` to `floor(v * n)`, so `ScriptedRolls::pick(k, n)`
/// produces the value that yields `k`. Once the script runs dry every draw is `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: VecDeque<f64>,
    draws: u64,
}

impl ScriptedRolls {
    pub fn new<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Unit value that makes `below(n)` return `k`.
    pub fn pick(k: u32, n: u32) -> f64 {
        (k as f64 + 0.5) / n as f64
    }

    /// Unit value that makes `roll(n)` return `k` (1-based).
    pub fn roll_of(k: u32, n: u32) -> f64 {
        Self::pick(k.saturating_sub(1), n)
    }

    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next_value(&mut self) -> f64 {
        self.draws += 1;
        self.values.pop_front().unwrap_or(0.0).clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl RandomSource for ScriptedRolls {
    fn unit(&mut self) -> f64 {
        self.next_value()
    }

    fn below(&mut self, n: u32) -> u32 {
        let v = self.next_value();
        if n == 0 {
            return 0;
        }
        ((v * n as f64) as u32).min(n - 1)
    }

    fn draws(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..50 {
            assert_eq!(a.below(6), b.below(6));
            assert_eq!(a.unit().to_bits(), b.unit().to_bits());
        }
        assert_eq!(a.draws(), 100);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn roll_stays_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            let r = rng.roll(10);
            assert!((1..=10).contains(&r), "roll out of range: {}", r);
        }
    }

    #[test]
    fn scripted_pick_maps_back_to_index() {
        for n in [2u32, 4, 6, 10, 20] {
            for k in 0..n {
                let mut s = ScriptedRolls::new([ScriptedRolls::pick(k, n)]);
                assert_eq!(s.below(n), k, "k={} n={}", k, n);
            }
        }
        let mut s = ScriptedRolls::new([ScriptedRolls::roll_of(15, 20)]);
        assert_eq!(s.roll(20), 15);
    }

    #[test]
    fn exhausted_script_yields_zero_and_counts() {
        let mut s = ScriptedRolls::new([0.9]);
        assert!(s.unit() > 0.8);
        assert_eq!(s.unit(), 0.0);
        assert_eq!(s.below(6), 0);
        assert_eq!(s.draws(), 3);
        assert_eq!(s.remaining(), 0);
    }
}
