//! Randomness behind the simulator

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The random decisions a battle makes, behind an object-safe trait so
/// callers can swap the source: fresh entropy for real fights, a fixed seed
/// for reproducible ones, or scripted rolls for tests.
pub trait BattleRng {
    /// Uniform integer drawn from `[low, high]`, both ends inclusive
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Whether an event with probability `p` occurs
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index into a collection of `len` elements
    fn index(&mut self, len: usize) -> usize;
}

/// Default randomness source backed by [`SmallRng`].
#[derive(Debug)]
pub struct SmallRngSource {
    rng: SmallRng,
}

impl SmallRngSource {
    /// Fresh entropy; every battle rolls differently
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Fixed seed; the same seed replays the same battle
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for SmallRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRng for SmallRngSource {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Plays back queued rolls in order, one queue per trait method, falling back
/// to a fixed-seed [`SmallRngSource`] when a queue runs dry.
///
/// Queued values are returned exactly as pushed; it is up to the test to push
/// values that make sense for the call they will answer.
#[derive(Debug)]
pub struct ScriptedRng {
    ranges: VecDeque<u32>,
    chances: VecDeque<bool>,
    indices: VecDeque<usize>,
    fallback: SmallRngSource,
}

impl ScriptedRng {
    /// Empty script; everything falls through to the seed-0 fallback
    pub fn new() -> Self {
        Self {
            ranges: VecDeque::new(),
            chances: VecDeque::new(),
            indices: VecDeque::new(),
            fallback: SmallRngSource::seeded(0),
        }
    }

    /// Queue the next `range_inclusive` result (move power rolls)
    pub fn push_range(&mut self, value: u32) {
        self.ranges.push_back(value);
    }

    /// Queue the next `chance` result (paralysis skips and status inflictions,
    /// in the order the battle rolls them)
    pub fn push_chance(&mut self, value: bool) {
        self.chances.push_back(value);
    }

    /// Queue the next `index` result (which status an affliction lands on)
    pub fn push_index(&mut self, value: usize) {
        self.indices.push_back(value);
    }
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRng for ScriptedRng {
    fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        match self.ranges.pop_front() {
            Some(value) => value,
            None => self.fallback.range_inclusive(low, high),
        }
    }

    fn chance(&mut self, p: f64) -> bool {
        match self.chances.pop_front() {
            Some(value) => value,
            None => self.fallback.chance(p),
        }
    }

    fn index(&mut self, len: usize) -> usize {
        match self.indices.pop_front() {
            Some(value) => value,
            None => self.fallback.index(len),
        }
    }
}
