//! Run configuration.
//!
//! Validation is split in two:
//!
//! - [`SimConfig::validate`] rejects configs the kernel cannot run at all
//!   (more initial infections than agents, a moving percentage above 100, …).
//!   `ep-sim`'s builder always calls it.
//! - [`ConfigLimits::check`] enforces the product ranges exposed to users
//!   (population 300–2000, beds 10–100, …).  The run controller and the CLI
//!   call it; tests that need a ten-agent population do not.

use std::ops::RangeInclusive;

use crate::{EpError, EpResult, SimClock, SimSpeed};

/// Top-level simulation configuration.
///
/// Supplied once per run.  Live updates go through the run controller, which
/// pauses the run before applying them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of agents created (one per dataset node).
    pub total_population: u32,

    /// Agents that start the run infected, taken from the front of the dataset.
    pub initial_infected: u32,

    /// Maximum number of agents quarantined at the same time.
    pub bed_capacity: u32,

    /// Days before the outbreak is noticed and quarantine starts.
    pub unaware_days: u32,

    /// Percentage (0–100) of agents that attempt to move each tick.
    pub moving_percentage: u8,

    pub speed: SimSpeed,

    /// Agent sphere radius.  Two agents closer than twice this are in contact.
    pub agent_radius: f64,

    /// Master RNG seed.  `None` draws one from OS entropy at build time.
    pub seed: Option<u64>,

    /// Emit an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_population:      1_000,
            initial_infected:      10,
            bed_capacity:          10,
            unaware_days:          20,
            moving_percentage:     5,
            speed:                 SimSpeed::Normal,
            agent_radius:          1.0,
            seed:                  None,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Reject semantically invalid values.  Does not enforce product ranges.
    pub fn validate(&self) -> EpResult<()> {
        if self.initial_infected > self.total_population {
            return Err(EpError::InvalidConfiguration(format!(
                "initial_infected ({}) exceeds total_population ({})",
                self.initial_infected, self.total_population
            )));
        }
        if self.moving_percentage > 100 {
            return Err(EpError::InvalidConfiguration(format!(
                "moving_percentage must be at most 100, got {}",
                self.moving_percentage
            )));
        }
        if !self.agent_radius.is_finite() || self.agent_radius <= 0.0 {
            return Err(EpError::InvalidConfiguration(format!(
                "agent_radius must be a positive number, got {}",
                self.agent_radius
            )));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.unaware_days as f64, self.speed)
    }
}

// ── ConfigLimits ──────────────────────────────────────────────────────────────

/// Inclusive ranges a user-facing configuration must fall within.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigLimits {
    pub total_population:  RangeInclusive<u32>,
    pub initial_infected:  RangeInclusive<u32>,
    pub bed_capacity:      RangeInclusive<u32>,
    pub unaware_days:      RangeInclusive<u32>,
    pub moving_percentage: RangeInclusive<u8>,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConfigLimits {
    /// The ranges offered by the interactive front-end.
    pub fn standard() -> Self {
        Self {
            total_population:  300..=2_000,
            initial_infected:  0..=200,
            bed_capacity:      10..=100,
            unaware_days:      10..=30,
            moving_percentage: 0..=99,
        }
    }

    /// Check every limited field, then the semantic rules of
    /// [`SimConfig::validate`].
    pub fn check(&self, config: &SimConfig) -> EpResult<()> {
        check_range("total_population", config.total_population, &self.total_population)?;
        check_range("initial_infected", config.initial_infected, &self.initial_infected)?;
        check_range("bed_capacity", config.bed_capacity, &self.bed_capacity)?;
        check_range("unaware_days", config.unaware_days, &self.unaware_days)?;
        check_range("moving_percentage", config.moving_percentage, &self.moving_percentage)?;
        config.validate()
    }
}

fn check_range<T>(name: &str, value: T, range: &RangeInclusive<T>) -> EpResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(EpError::InvalidConfiguration(format!(
            "{name} must be within {}..={}, got {value}",
            range.start(),
            range.end()
        )))
    }
}
