//! Simulation observer trait for progress reporting and data collection.

use ep_agent::AgentStore;
use ep_core::{HealthCounts, Tick};

use crate::Outcome;

/// Everything that happened in one completed tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSummary {
    /// The tick that was just processed (the first tick is `T0`).
    pub tick:           Tick,
    /// Simulated days elapsed at the end of the tick.
    pub elapsed_days:   f64,
    /// Partition sizes at the end of the tick.
    pub counts:         HealthCounts,
    pub newly_infected: usize,
    pub moved:          usize,
    pub admitted:       usize,
    pub discharged:     usize,
}

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] and
/// [`Sim::run_until_outcome`][crate::Sim::run_until_outcome].
///
/// Every callback fires after a tick has fully completed, so observers never
/// see a half-applied tick.  All methods default to no-ops.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         if summary.tick.0 % self.interval == 0 {
///             println!("{}: {:?}", summary.tick, summary.counts);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to the agent arrays (positions, health, labels).
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once, when the termination check first reports an outcome.
    /// `tick` is the tick that would have run next.
    fn on_outcome(&mut self, _tick: Tick, _outcome: Outcome) {}

    /// Called once after `run_until_outcome` stops.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
