//! `Population` — the agent registry.
//!
//! Owns the SoA [`AgentStore`] plus three disjoint [`Partition`]s, one per
//! [`HealthState`].  Every agent is in exactly one partition, and that
//! partition always matches `store.health[agent]`.
//!
//! The only legal transitions are:
//!
//! ```text
//! Healthy ──mark_infected──▶ Infected ──admit──▶ Quarantined
//!    ▲                                               │
//!    └──────────mark_healthy_after_recovery──────────┘
//! ```

use ep_core::{AgentId, EpError, EpResult, HealthCounts, HealthState, Vec3, Waypoint};

use crate::{AgentStore, Partition};

pub struct Population {
    pub store:   AgentStore,
    healthy:     Partition,
    infected:    Partition,
    quarantined: Partition,
}

impl Population {
    /// Every agent starts `Healthy`; partitions follow `labels` order.
    pub(crate) fn new(labels: Vec<String>, positions: Vec<Vec3>) -> Self {
        let store = AgentStore::new(labels, positions);
        let count = store.count;
        let mut healthy = Partition::new(count);
        for agent in store.agent_ids() {
            healthy.insert(agent);
        }
        Self {
            store,
            healthy,
            infected:    Partition::new(count),
            quarantined: Partition::new(count),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn counts(&self) -> HealthCounts {
        HealthCounts {
            healthy:     self.healthy.len(),
            infected:    self.infected.len(),
            quarantined: self.quarantined.len(),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Healthy → Infected.  Returns `Ok(false)` (no-op) if the agent is
    /// already infected or quarantined.
    pub fn mark_infected(&mut self, agent: AgentId) -> EpResult<bool> {
        self.check_known(agent)?;
        if !self.healthy.remove(agent) {
            return Ok(false);
        }
        self.infected.insert(agent);
        self.store.health[agent.index()] = HealthState::Infected;
        Ok(true)
    }

    /// Infected → Quarantined with `days` of stay remaining.  Returns
    /// `Ok(false)` if the agent is not currently in the Infected partition.
    pub fn admit(&mut self, agent: AgentId, days: f64) -> EpResult<bool> {
        self.check_known(agent)?;
        if !days.is_finite() || days <= 0.0 {
            return Err(EpError::InconsistentState(format!(
                "quarantine duration for {agent} must be positive, got {days}"
            )));
        }
        if !self.infected.remove(agent) {
            return Ok(false);
        }
        self.quarantined.insert(agent);
        let i = agent.index();
        self.store.health[i] = HealthState::Quarantined;
        self.store.quarantine_days[i] = Some(days);
        Ok(true)
    }

    /// Quarantined → Healthy.  Clears the remaining-days counter.  Returns
    /// `Ok(false)` if the agent is not quarantined.
    pub fn mark_healthy_after_recovery(&mut self, agent: AgentId) -> EpResult<bool> {
        self.check_known(agent)?;
        if !self.quarantined.remove(agent) {
            return Ok(false);
        }
        self.healthy.insert(agent);
        let i = agent.index();
        self.store.health[i] = HealthState::Healthy;
        self.store.quarantine_days[i] = None;
        Ok(true)
    }

    /// Subtract `days` from a quarantined agent's remaining stay and return
    /// what is left (may be ≤ 0; the caller decides when to discharge).
    pub fn count_down_quarantine(&mut self, agent: AgentId, days: f64) -> EpResult<f64> {
        self.check_known(agent)?;
        match self.store.quarantine_days[agent.index()].as_mut() {
            Some(remaining) => {
                *remaining -= days;
                Ok(*remaining)
            }
            None => Err(EpError::InconsistentState(format!("{agent} is not quarantined"))),
        }
    }

    /// Drop every agent and every partition membership.
    pub fn reset(&mut self) {
        self.store.clear();
        self.healthy.clear();
        self.infected.clear();
        self.quarantined.clear();
    }

    // ── Partition views (insertion order) ─────────────────────────────────

    pub fn healthy(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.healthy.iter()
    }

    /// Infected agents *not* in quarantine, in the order they were infected.
    pub fn infected(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.infected.iter()
    }

    pub fn quarantined(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.quarantined.iter()
    }

    /// Infected followed by quarantined: every agent that can transmit.
    pub fn infected_all(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.infected.iter().chain(self.quarantined.iter())
    }

    // ── Per-agent accessors ───────────────────────────────────────────────

    pub fn health(&self, agent: AgentId) -> EpResult<HealthState> {
        self.check_known(agent)?;
        Ok(self.store.health(agent))
    }

    pub fn position(&self, agent: AgentId) -> EpResult<Vec3> {
        self.check_known(agent)?;
        Ok(self.store.positions[agent.index()])
    }

    pub fn waypoint(&self, agent: AgentId) -> EpResult<Option<Waypoint>> {
        self.check_known(agent)?;
        Ok(self.store.waypoints[agent.index()])
    }

    pub fn label(&self, agent: AgentId) -> EpResult<&str> {
        self.check_known(agent)?;
        Ok(&self.store.labels[agent.index()])
    }

    pub fn quarantine_days(&self, agent: AgentId) -> EpResult<Option<f64>> {
        self.check_known(agent)?;
        Ok(self.store.quarantine_days(agent))
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Verify that partitions are disjoint, cover every agent, and agree with
    /// the SoA health array.  O(N); intended for tests and debug builds.
    pub fn check_invariants(&self) -> EpResult<()> {
        let counts = self.counts();
        if counts.total() != self.len() {
            return Err(EpError::InconsistentState(format!(
                "partition sizes {counts:?} do not sum to population {}",
                self.len()
            )));
        }
        for agent in self.store.agent_ids() {
            let state = self.store.health(agent);
            let member = [
                (HealthState::Healthy, self.healthy.contains(agent)),
                (HealthState::Infected, self.infected.contains(agent)),
                (HealthState::Quarantined, self.quarantined.contains(agent)),
            ];
            for (partition, present) in member {
                if present != (partition == state) {
                    return Err(EpError::InconsistentState(format!(
                        "{agent} is {state} but membership of {partition} partition is {present}"
                    )));
                }
            }
            let has_days = self.store.quarantine_days(agent).is_some();
            if has_days != (state == HealthState::Quarantined) {
                return Err(EpError::InconsistentState(format!(
                    "{agent} is {state} but has quarantine days = {has_days}"
                )));
            }
        }
        Ok(())
    }

    #[inline]
    fn check_known(&self, agent: AgentId) -> EpResult<()> {
        if self.store.contains(agent) {
            Ok(())
        } else {
            Err(EpError::AgentNotFound(agent))
        }
    }
}
