//! Owned per-tick views for hosts that render or serialise the population.

use ep_agent::Population;
use ep_core::{AgentId, HealthCounts, HealthState, Tick, Vec3};

/// One agent as seen from outside the kernel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub id:       AgentId,
    /// Dataset node id the agent was created from.
    pub label:    String,
    pub position: Vec3,
    pub health:   HealthState,
}

/// The whole population after a completed tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Number of completed ticks.
    pub tick:         Tick,
    pub elapsed_days: f64,
    pub counts:       HealthCounts,
    pub agents:       Vec<AgentView>,
}

impl Snapshot {
    pub(crate) fn capture(population: &Population, tick: Tick, elapsed_days: f64) -> Self {
        let store = &population.store;
        let agents = store
            .agent_ids()
            .map(|id| AgentView {
                id,
                label:    store.labels[id.index()].clone(),
                position: store.positions[id.index()],
                health:   store.health(id),
            })
            .collect();
        Self { tick, elapsed_days, counts: population.counts(), agents }
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentView> {
        self.agents.get(id.index())
    }
}
