//! Seedable simulation RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, and every random draw in the kernel goes
//! through it in a fixed order (infection rolls, then movement rolls, then
//! quarantine durations).  The same seed and config therefore reproduce a run
//! tick for tick.  Engines never hold their own RNG.
//!
//! Unseeded runs take their seed from OS entropy; the seed is kept so it can
//! be logged and replayed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG shared by all engines of one run.
///
/// Used only from the single-threaded tick body.  The optional parallel
/// contact query draws nothing.
pub struct SimRng {
    rng:  SmallRng,
    seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed), seed }
    }

    /// Seed from OS entropy.  Read the chosen seed back with [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    /// For `f64` this is uniform in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.rng.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// `-1.0` or `1.0` with equal probability.
    #[inline]
    pub fn sign(&mut self) -> f64 {
        if self.rng.gen_bool(0.5) { -1.0 } else { 1.0 }
    }
}
