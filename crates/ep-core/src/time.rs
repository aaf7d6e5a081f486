//! Simulation time model.
//!
//! # Design
//!
//! Two clocks run side by side:
//!
//! - `Tick` counts completed simulation steps.  It is exact and is what output
//!   rows are keyed by.
//! - `SimClock::elapsed_days` is the simulated calendar.  Each tick advances it
//!   by `BASE_DAYS_PER_TICK * speed.factor()`, so a slow run covers half as
//!   many days per tick as a normal one.
//!
//! The unaware threshold lives on the clock because the quarantine allocator
//! asks the clock, not the config, whether detection has happened yet.

use std::fmt;
use std::str::FromStr;

/// Simulated days advanced by one tick at normal speed.
pub const BASE_DAYS_PER_TICK: f64 = 0.1;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A monotonically increasing count of completed ticks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimSpeed ──────────────────────────────────────────────────────────────────

/// Simulation speed.  Scales both days-per-tick and agent movement per tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SimSpeed {
    Slow,
    #[default]
    Normal,
}

impl SimSpeed {
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            SimSpeed::Slow   => 0.5,
            SimSpeed::Normal => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SimSpeed::Slow   => "slow",
            SimSpeed::Normal => "normal",
        }
    }
}

impl fmt::Display for SimSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimSpeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow"   => Ok(SimSpeed::Slow),
            "normal" => Ok(SimSpeed::Normal),
            other    => Err(format!("unknown speed {other:?}: expected \"slow\" or \"normal\"")),
        }
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks simulated days, the detection-delay threshold, and speed.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated days since the run started.
    pub elapsed_days: f64,
    /// Quarantine stays disabled while `elapsed_days` is below this.
    pub unaware_days: f64,
    pub speed: SimSpeed,
    /// Completed ticks.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(unaware_days: f64, speed: SimSpeed) -> Self {
        Self {
            elapsed_days: 0.0,
            unaware_days,
            speed,
            current_tick: Tick::ZERO,
        }
    }

    /// Simulated days covered by one tick at the current speed.
    #[inline]
    pub fn days_per_frame(&self) -> f64 {
        BASE_DAYS_PER_TICK * self.speed.factor()
    }

    #[inline]
    pub fn speed_factor(&self) -> f64 {
        self.speed.factor()
    }

    /// `true` while the outbreak has not been detected yet.
    #[inline]
    pub fn still_unaware(&self) -> bool {
        self.elapsed_days < self.unaware_days
    }

    /// Close out one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.elapsed_days += self.days_per_frame();
        self.current_tick = self.current_tick + 1;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {:.1})", self.current_tick, self.elapsed_days)
    }
}
