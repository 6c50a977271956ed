//! Dice sources.
//!
//! Random dice are backed by a seedable [`StdRng`]: pass `Some(seed)` for
//! reproducible rolls in tests, `None` for OS entropy. For exact replay,
//! wrap a live source in [`Recording`] and feed its log into a
//! [`FixedSequence`].

use crate::error::SetupError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Produces the next dice roll.
///
/// Sources are stateful (cursor, RNG, log) but never touch the game model.
pub trait DiceSource: std::fmt::Debug {
    /// Draws the next roll.
    fn roll(&mut self) -> u32;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// One six-sided die: uniform in `1..=6`.
#[derive(Debug, Clone)]
pub struct SingleDie {
    rng: StdRng,
}

impl SingleDie {
    /// Creates a die, seeded for reproducible rolls when `seed` is given.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: rng_from(seed) }
    }
}

impl DiceSource for SingleDie {
    fn roll(&mut self) -> u32 {
        self.rng.random_range(1..=6)
    }
}

/// Two six-sided dice summed: `2..=12`.
#[derive(Debug, Clone)]
pub struct DoubleDie {
    die: SingleDie,
}

impl DoubleDie {
    /// Creates a pair of dice, seeded for reproducible rolls when `seed` is given.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            die: SingleDie::new(seed),
        }
    }
}

impl DiceSource for DoubleDie {
    fn roll(&mut self) -> u32 {
        self.die.roll() + self.die.roll()
    }
}

/// Replays a fixed list of rolls, looping back to the start when exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSequence {
    rolls: Vec<u32>,
    cursor: usize,
}

impl FixedSequence {
    /// Creates a looping sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NoRolls`] for an empty list.
    #[instrument(skip(rolls), fields(len = rolls.len()))]
    pub fn new(rolls: Vec<u32>) -> Result<Self, SetupError> {
        if rolls.is_empty() {
            return Err(SetupError::NoRolls);
        }
        Ok(Self { rolls, cursor: 0 })
    }

    /// The rolls being replayed.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }
}

impl DiceSource for FixedSequence {
    fn roll(&mut self) -> u32 {
        let value = self.rolls[self.cursor];
        self.cursor = (self.cursor + 1) % self.rolls.len();
        trace!(value, cursor = self.cursor, "Fixed roll");
        value
    }
}

/// Wraps another source and logs every roll it produces.
#[derive(Debug, Clone)]
pub struct Recording<D> {
    inner: D,
    log: Vec<u32>,
}

impl<D: DiceSource> Recording<D> {
    /// Starts recording rolls from `inner`.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            log: Vec::new(),
        }
    }

    /// Every roll produced so far, in order.
    pub fn rolls(&self) -> &[u32] {
        &self.log
    }

    /// The wrapped source.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: DiceSource> DiceSource for Recording<D> {
    fn roll(&mut self) -> u32 {
        let value = self.inner.roll();
        self.log.push(value);
        value
    }
}

/// Which random dice a game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieKind {
    /// One die, `1..=6`.
    Single,
    /// Two dice summed, `2..=12`.
    #[default]
    Double,
}

impl DieKind {
    /// Creates a random source of this kind.
    #[instrument]
    pub fn source(self, seed: Option<u64>) -> Box<dyn DiceSource> {
        debug!("Creating random dice");
        match self {
            DieKind::Single => Box::new(SingleDie::new(seed)),
            DieKind::Double => Box::new(DoubleDie::new(seed)),
        }
    }
}
