//! The two sampling functions the kernel draws from.
//!
//! Both are pure functions of the RNG state so a seeded [`SimRng`] makes them
//! reproducible.

use rand::distributions::{Distribution, Uniform};

use crate::SimRng;

/// Per-waypoint movement speed bounds, units per tick.
pub const SPEED_MIN: f64 = 0.5;
pub const SPEED_MAX: f64 = 1.2;

/// Quarantine duration bounds, whole days, inclusive.
pub const QUARANTINE_DAYS_MIN: u32 = 5;
pub const QUARANTINE_DAYS_MAX: u32 = 14;

/// Uniform speed in `[0.5, 1.2]`, rounded to two decimal places.
pub fn uniform_speed(rng: &mut SimRng) -> f64 {
    let raw = Uniform::new_inclusive(SPEED_MIN, SPEED_MAX).sample(rng.inner());
    (raw * 100.0).round() / 100.0
}

/// Uniform whole number of days in `[5, 14]`.
pub fn uniform_quarantine_days(rng: &mut SimRng) -> u32 {
    Uniform::new_inclusive(QUARANTINE_DAYS_MIN, QUARANTINE_DAYS_MAX).sample(rng.inner())
}
