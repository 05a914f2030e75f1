use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random decision the office makes.
///
/// Production code rolls a real RNG; tests hand in a [`ScriptedDice`] so the
/// exact outcome of a break can be asserted.
pub trait Dice: Send {
    /// `true` with probability `p`. Values outside `0.0..=1.0` are clamped.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform integer in `lo..=hi`.
    fn between(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl RngDice<StdRng> {
    pub fn from_entropy() -> Self {
        RngDice { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        RngDice { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng + Send> Dice for RngDice<R> {
    fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            false
        } else if p >= 1.0 {
            true
        } else {
            self.rng.gen_bool(p)
        }
    }

    fn between(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays queued answers in order.
///
/// Once a queue runs dry the dice fall back to the "quiet" answer: `false`
/// for chances, the low bound for ranges and index 0 for picks. Queued values
/// are clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    chances: VecDeque<bool>,
    values: VecDeque<u32>,
    picks: VecDeque<usize>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.values.extend(values);
        self
    }

    pub fn picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }
}

impl Dice for ScriptedDice {
    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn between(&mut self, lo: u32, hi: u32) -> u32 {
        match self.values.pop_front() {
            Some(v) => v.clamp(lo, hi.max(lo)),
            None => lo,
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        match self.picks.pop_front() {
            Some(i) if len > 0 => i.min(len - 1),
            _ => 0,
        }
    }
}
