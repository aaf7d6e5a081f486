//! Start / pause / resume / stop for hosts that drive the kernel
//! interactively.
//!
//! ```text
//!              start                     outcome
//! NotStarted ────────▶ Running ─────────────────────▶ Won / Lost
//!     ▲                 │   ▲                              │
//!     │           pause │   │ resume                       │
//!     │  stop           ▼   │                              │
//!     └───────────────  Paused  ◀── live parameter update  │
//!     └────────────────────────────────────────────────────┘ stop
//! ```
//!
//! `Running` is reported as `SpreadingUnnoticed` or `Suppressing` depending
//! on whether the unaware period is over.

use ep_core::{ConfigLimits, SimConfig, SimSpeed};
use ep_spatial::Dataset;

use crate::{Sim, SimBuilder, SimError, SimResult, SimStatus, Snapshot, TickOutcome};

pub struct SimController {
    limits:  ConfigLimits,
    /// Configuration the next `start` uses.  Live updates land here too.
    pending: SimConfig,
    run:     Option<Sim>,
    paused:  bool,
}

impl Default for SimController {
    fn default() -> Self {
        Self::new(ConfigLimits::standard())
    }
}

impl SimController {
    pub fn new(limits: ConfigLimits) -> Self {
        Self { limits, pending: SimConfig::default(), run: None, paused: false }
    }

    pub fn config(&self) -> &SimConfig {
        &self.pending
    }

    pub fn sim(&self) -> Option<&Sim> {
        self.run.as_ref()
    }

    pub fn status(&self) -> SimStatus {
        match &self.run {
            None => SimStatus::NotStarted,
            Some(sim) => match sim.outcome() {
                Some(outcome) => outcome.into(),
                None if self.paused => SimStatus::Paused,
                None if sim.clock.still_unaware() => SimStatus::SpreadingUnnoticed,
                None => SimStatus::Suppressing,
            },
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Check `config` against the limits and start a fresh run on a
    /// synthetic dataset.  Any current run is discarded.  On error nothing
    /// changes.
    pub fn start(&mut self, config: SimConfig) -> SimResult<()> {
        self.limits.check(&config)?;
        let sim = SimBuilder::new(config.clone()).build()?;
        self.install(config, sim);
        Ok(())
    }

    /// Like [`start`](Self::start) but on a caller-supplied dataset.  The
    /// dataset's node count replaces `total_population` and is checked
    /// against the population limit.
    pub fn start_with_dataset(&mut self, config: SimConfig, dataset: Dataset) -> SimResult<()> {
        let nodes = u32::try_from(dataset.node_count())
            .map_err(|_| SimError::PopulationTooLarge(dataset.node_count()))?;
        self.limits.check(&SimConfig { total_population: nodes, ..config.clone() })?;
        let sim = SimBuilder::new(config).dataset(dataset).build()?;
        self.install(sim.config.clone(), sim);
        Ok(())
    }

    fn install(&mut self, config: SimConfig, sim: Sim) {
        if self.run.is_some() {
            tracing::info!("previous run discarded");
        }
        self.pending = config;
        self.run = Some(sim);
        self.paused = false;
    }

    /// Hold the current run.  No-op if nothing is running.
    pub fn pause(&mut self) {
        if self.is_resumable() {
            self.paused = true;
        }
    }

    /// Continue a paused run from exactly where it stopped.
    pub fn resume(&mut self) {
        if self.is_resumable() {
            self.paused = false;
        }
    }

    /// Discard the run.  The next `start` re-creates the population.
    pub fn stop(&mut self) {
        self.run = None;
        self.paused = false;
    }

    /// Same as [`stop`](Self::stop).
    pub fn reset(&mut self) {
        self.stop();
    }

    /// Advance the run by one tick.  Returns `None` while nothing is running
    /// or the run is paused.
    pub fn step(&mut self) -> SimResult<Option<TickOutcome>> {
        if self.paused {
            return Ok(None);
        }
        match self.run.as_mut() {
            Some(sim) => sim.step().map(Some),
            None => Ok(None),
        }
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.run.as_ref().map(Sim::snapshot)
    }

    fn is_resumable(&self) -> bool {
        self.run.as_ref().is_some_and(|sim| sim.outcome().is_none())
    }

    // ── Live parameter updates ────────────────────────────────────────────
    //
    // Each one is checked against the limits, stored for the next start,
    // applied to the current run, and pauses it.  The population size is
    // fixed at start and is not re-checked here.

    pub fn set_moving_percentage(&mut self, percent: u8) -> SimResult<()> {
        self.update(|c| c.moving_percentage = percent)?;
        if let Some(sim) = self.run.as_mut() {
            sim.set_moving_percentage(percent)?;
        }
        Ok(())
    }

    pub fn set_bed_capacity(&mut self, beds: u32) -> SimResult<()> {
        self.update(|c| c.bed_capacity = beds)?;
        if let Some(sim) = self.run.as_mut() {
            sim.set_bed_capacity(beds);
        }
        Ok(())
    }

    pub fn set_unaware_days(&mut self, days: u32) -> SimResult<()> {
        self.update(|c| c.unaware_days = days)?;
        if let Some(sim) = self.run.as_mut() {
            sim.set_unaware_days(days);
        }
        Ok(())
    }

    pub fn set_speed(&mut self, speed: SimSpeed) -> SimResult<()> {
        self.update(|c| c.speed = speed)?;
        if let Some(sim) = self.run.as_mut() {
            sim.set_speed(speed);
        }
        Ok(())
    }

    fn update(&mut self, apply: impl FnOnce(&mut SimConfig)) -> SimResult<()> {
        let mut next = self.pending.clone();
        apply(&mut next);
        let live = ConfigLimits { total_population: 0..=u32::MAX, ..self.limits.clone() };
        live.check(&next)?;
        self.pending = next;
        self.pause();
        Ok(())
    }
}
