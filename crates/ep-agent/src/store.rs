//! Core agent storage.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let pos = store.positions[agent.index()];  // O(1), cache-friendly
//! ```

use ep_core::{AgentId, HealthState, Vec3, Waypoint};

/// Structure-of-Arrays storage for all agent state.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Dataset node id each agent was created from.  Renderers key their own
    /// visual handles on this.
    pub labels: Vec<String>,

    // ── Movement state ────────────────────────────────────────────────────
    /// Current position.
    pub positions: Vec<Vec3>,

    /// Current waypoint.  `None` until the agent first moves.
    pub waypoints: Vec<Option<Waypoint>>,

    // ── Health state (written only through `Population`) ──────────────────
    pub(crate) health: Vec<HealthState>,

    /// Remaining quarantine days.  `Some` iff `health == Quarantined`.
    pub(crate) quarantine_days: Vec<Option<f64>>,
}

impl AgentStore {
    pub(crate) fn new(labels: Vec<String>, positions: Vec<Vec3>) -> Self {
        debug_assert_eq!(labels.len(), positions.len());
        let count = positions.len();
        Self {
            count,
            labels,
            positions,
            waypoints:       vec![None; count],
            health:          vec![HealthState::Healthy; count],
            quarantine_days: vec![None; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    #[inline]
    pub fn health(&self, agent: AgentId) -> HealthState {
        self.health[agent.index()]
    }

    /// Read-only view of every agent's health state.
    #[inline]
    pub fn health_states(&self) -> &[HealthState] {
        &self.health
    }

    #[inline]
    pub fn quarantine_days(&self, agent: AgentId) -> Option<f64> {
        self.quarantine_days[agent.index()]
    }

    /// Split borrow for the movement engine: health is read-only, positions
    /// and waypoints are writable.
    pub fn movement_view(&mut self) -> (&[HealthState], &mut [Vec3], &mut [Option<Waypoint>]) {
        (&self.health, &mut self.positions, &mut self.waypoints)
    }

    pub(crate) fn clear(&mut self) {
        self.count = 0;
        self.labels.clear();
        self.positions.clear();
        self.waypoints.clear();
        self.health.clear();
        self.quarantine_days.clear();
    }
}
