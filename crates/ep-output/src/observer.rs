//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ep_agent::AgentStore;
use ep_core::Tick;
use ep_sim::{Outcome, SimObserver, TickSummary};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    outcome:    Option<Outcome>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, outcome: None, last_error: None }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// The outcome reported to this observer, if the run ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::error!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:           summary.tick.0,
            elapsed_days:   summary.elapsed_days,
            healthy:        summary.counts.healthy as u64,
            infected:       summary.counts.infected as u64,
            quarantined:    summary.counts.quarantined as u64,
            newly_infected: summary.newly_infected as u64,
            moved:          summary.moved as u64,
            admitted:       summary.admitted as u64,
            discharged:     summary.discharged as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|id| {
                let i = id.index();
                let pos = agents.positions[i];
                AgentSnapshotRow {
                    agent_id: id.0,
                    label:    agents.labels[i].clone(),
                    tick:     tick.0,
                    x:        pos.x,
                    y:        pos.y,
                    z:        pos.z,
                    health:   agents.health(id),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_outcome(&mut self, _tick: Tick, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
