//! Proximity-based transmission.
//!
//! # Phases
//!
//! 1. **Roll** (sequential): walk every infected agent (quarantined ones
//!    after the free ones) and draw its skip rolls from the run RNG.  The
//!    positions of agents that pass become contact sources.
//! 2. **Query** (parallel with `--features parallel`): bulk-load the healthy
//!    agents into a [`ContactIndex`] and collect every healthy agent within
//!    the contact distance of any source.  Read-only, draws nothing.
//! 3. **Apply** (sequential): infect the candidates in ascending id order.
//!
//! The scan sees only the pre-tick state: an agent infected in phase 3 does
//! not transmit until the next tick.

use std::collections::BTreeSet;

use ep_agent::Population;
use ep_core::{AgentId, EpResult, HealthState, SimRng, Vec3};
use ep_spatial::ContactIndex;

/// Probability that an infected agent sits out a tick.
pub const SKIP_PROBABILITY: f64 = 0.3;

/// Extra probability that a quarantined agent sits out, applied after
/// [`SKIP_PROBABILITY`].
pub const QUARANTINE_SKIP_PROBABILITY: f64 = 0.95;

#[derive(Clone, Debug)]
pub struct InfectionEngine {
    agent_radius: f64,
}

impl InfectionEngine {
    pub fn new(agent_radius: f64) -> Self {
        Self { agent_radius }
    }

    #[inline]
    pub fn agent_radius(&self) -> f64 {
        self.agent_radius
    }

    /// Two agents are in contact when their centres are at most this far
    /// apart (the spheres touch or overlap).
    #[inline]
    pub fn contact_distance(&self) -> f64 {
        2.0 * self.agent_radius
    }

    /// Run one infection pass.  Returns the newly infected agents in
    /// ascending id order.
    pub fn step(&self, population: &mut Population, rng: &mut SimRng) -> EpResult<Vec<AgentId>> {
        let sources = self.roll_sources(population, rng);
        if sources.is_empty() || population.counts().healthy == 0 {
            return Ok(Vec::new());
        }

        let index = ContactIndex::build(
            population.healthy().map(|a| (a, population.store.positions[a.index()])),
        );
        let candidates = self.query(&index, &sources);

        for &agent in &candidates {
            population.mark_infected(agent)?;
        }
        tracing::trace!(sources = sources.len(), infected = candidates.len(), "infection step");
        Ok(candidates.into_iter().collect())
    }

    fn roll_sources(&self, population: &Population, rng: &mut SimRng) -> Vec<Vec3> {
        let mut sources = Vec::new();
        for agent in population.infected_all() {
            if rng.gen_bool(SKIP_PROBABILITY) {
                continue;
            }
            if population.store.health(agent) == HealthState::Quarantined
                && rng.gen_bool(QUARANTINE_SKIP_PROBABILITY)
            {
                continue;
            }
            sources.push(population.store.positions[agent.index()]);
        }
        sources
    }

    #[cfg(not(feature = "parallel"))]
    fn query(&self, index: &ContactIndex, sources: &[Vec3]) -> BTreeSet<AgentId> {
        let d = self.contact_distance();
        sources.iter().flat_map(|&c| index.within(c, d)).collect()
    }

    #[cfg(feature = "parallel")]
    fn query(&self, index: &ContactIndex, sources: &[Vec3]) -> BTreeSet<AgentId> {
        use rayon::prelude::*;

        let d = self.contact_distance();
        sources
            .par_iter()
            .flat_map_iter(|&c| index.within(c, d))
            .collect()
    }
}
