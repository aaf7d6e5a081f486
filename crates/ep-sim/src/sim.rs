//! The `Sim` struct and its tick loop.

use ep_agent::Population;
use ep_core::{EpError, HealthCounts, SimClock, SimConfig, SimRng, SimSpeed};
use ep_health::{BedAllocator, InfectionEngine};
use ep_mobility::MovementEngine;
use ep_spatial::EdgeRecord;

use crate::{Outcome, SimObserver, SimResult, Snapshot, TickSummary};

/// Result of one call to [`Sim::step`].
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The tick body ran.
    Advanced(TickSummary),
    /// The termination check fired (now or on an earlier call); nothing ran.
    Finished(Outcome),
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One run of the epidemic kernel.
///
/// Each [`step`](Self::step):
///
/// 1. **Termination check** on the counts left by the previous tick: win if
///    nobody is infected, loss if the healthy share is ≤ 30 %.  Once an
///    outcome is reached the run is frozen.
/// 2. **Infection** — proximity transmission from infected to healthy.
/// 3. **Movement** — random-waypoint steps for non-quarantined agents.
/// 4. **Quarantine** — discharge finished stays, fill free beds (only once
///    the unaware period is over).
/// 5. **Clock** — `elapsed_days += 0.1 * speed_factor`.
///
/// Every random draw comes from the one `SimRng` owned by the run, in that
/// order, so a seed replays a run exactly.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Configuration in force.  Live updates write through the `set_*`
    /// methods so this always reflects what the engines use.
    pub config: SimConfig,

    pub clock: SimClock,

    pub population: Population,

    /// Dataset edges.  Carried for hosts that draw them; no engine reads them.
    pub edges: Vec<EdgeRecord>,

    pub(crate) rng:       SimRng,
    pub(crate) infection: InfectionEngine,
    pub(crate) movement:  MovementEngine,
    pub(crate) beds:      BedAllocator,
    pub(crate) outcome:   Option<Outcome>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick, or report the outcome if the run is over.
    pub fn step(&mut self) -> SimResult<TickOutcome> {
        if let Some(outcome) = self.outcome {
            return Ok(TickOutcome::Finished(outcome));
        }

        let counts = self.population.counts();
        if let Some(outcome) = Outcome::evaluate(&counts) {
            self.outcome = Some(outcome);
            tracing::info!(
                %outcome,
                tick = %self.clock.current_tick,
                days = self.clock.elapsed_days,
                healthy = counts.healthy,
                infected = counts.infected_total(),
                "run finished"
            );
            return Ok(TickOutcome::Finished(outcome));
        }

        let summary = self.process_tick()?;
        debug_assert!(
            self.population.check_invariants().is_ok(),
            "{:?}",
            self.population.check_invariants()
        );
        Ok(TickOutcome::Advanced(summary))
    }

    /// Run up to `n` ticks, stopping early on an outcome.
    ///
    /// Returns the outcome if the run is (or already was) finished.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Option<Outcome>> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }
        for _ in 0..n {
            if let Some(outcome) = self.step_observed(observer)? {
                return Ok(Some(outcome));
            }
        }
        Ok(None)
    }

    /// Run until the termination check fires or `max_ticks` ticks have run
    /// (`None` = no limit).  Calls `on_sim_end` once at the end.
    pub fn run_until_outcome<O: SimObserver>(
        &mut self,
        max_ticks: Option<u64>,
        observer:  &mut O,
    ) -> SimResult<Option<Outcome>> {
        let mut ran = 0u64;
        let result = loop {
            if self.outcome.is_some() {
                break self.outcome;
            }
            if max_ticks.is_some_and(|max| ran >= max) {
                break None;
            }
            if let Some(outcome) = self.step_observed(observer)? {
                break Some(outcome);
            }
            ran += 1;
        };
        observer.on_sim_end(self.clock.current_tick);
        Ok(result)
    }

    /// `Some` once the run has ended.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn counts(&self) -> HealthCounts {
        self.population.counts()
    }

    /// The RNG seed of this run, for replaying it.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Owned view of every agent as of the last completed tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.population, self.clock.current_tick, self.clock.elapsed_days)
    }

    // ── Live parameter updates ────────────────────────────────────────────
    //
    // Take effect from the next tick.  Range checks are the caller's job
    // (see `SimController`); these only reject what the kernel cannot run.

    pub fn set_moving_percentage(&mut self, percent: u8) -> SimResult<()> {
        if percent > 100 {
            return Err(EpError::InvalidConfiguration(format!(
                "moving_percentage must be at most 100, got {percent}"
            ))
            .into());
        }
        self.config.moving_percentage = percent;
        Ok(())
    }

    /// Lowering capacity below the current occupancy evicts nobody.
    pub fn set_bed_capacity(&mut self, beds: u32) {
        self.config.bed_capacity = beds;
        self.beds.set_bed_capacity(beds);
    }

    pub fn set_unaware_days(&mut self, days: u32) {
        self.config.unaware_days = days;
        self.clock.unaware_days = f64::from(days);
    }

    pub fn set_speed(&mut self, speed: SimSpeed) {
        self.config.speed = speed;
        self.clock.speed = speed;
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Outcome>> {
        match self.step()? {
            TickOutcome::Advanced(summary) => {
                observer.on_tick_end(&summary);
                let interval = self.config.output_interval_ticks;
                if interval > 0 && summary.tick.0.is_multiple_of(interval) {
                    observer.on_snapshot(summary.tick, &self.population.store);
                }
                Ok(None)
            }
            TickOutcome::Finished(outcome) => {
                observer.on_outcome(self.clock.current_tick, outcome);
                Ok(Some(outcome))
            }
        }
    }

    fn process_tick(&mut self) -> SimResult<TickSummary> {
        let now = self.clock.current_tick;

        // ── Phase 1: infection ────────────────────────────────────────────
        let newly_infected = self.infection.step(&mut self.population, &mut self.rng)?;

        // ── Phase 2: movement ─────────────────────────────────────────────
        let moved = self.movement.step(
            &mut self.population,
            self.config.moving_percentage,
            self.clock.speed_factor(),
            &mut self.rng,
        );

        // ── Phase 3: quarantine ───────────────────────────────────────────
        let report = self.beds.step(&mut self.population, &self.clock, &mut self.rng)?;

        // ── Phase 4: clock ────────────────────────────────────────────────
        self.clock.advance();

        let summary = TickSummary {
            tick:           now,
            elapsed_days:   self.clock.elapsed_days,
            counts:         self.population.counts(),
            newly_infected: newly_infected.len(),
            moved,
            admitted:       report.admitted.len(),
            discharged:     report.discharged.len(),
        };
        tracing::debug!(
            tick = %now,
            days = summary.elapsed_days,
            healthy = summary.counts.healthy,
            infected = summary.counts.infected,
            quarantined = summary.counts.quarantined,
            new = summary.newly_infected,
            moved,
            admitted = summary.admitted,
            discharged = summary.discharged,
            "tick complete"
        );
        Ok(summary)
    }
}
