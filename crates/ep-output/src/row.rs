//! Plain data row types written by output backends.

use ep_core::HealthState;

/// One agent's position and health state at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    /// Dataset node id the agent was created from.
    pub label:    String,
    pub tick:     u64,
    pub x:        f64,
    pub y:        f64,
    pub z:        f64,
    pub health:   HealthState,
}

/// Aggregate counts and activity for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    /// Simulated days elapsed at the end of the tick.
    pub elapsed_days:   f64,
    pub healthy:        u64,
    /// Infected and not quarantined.
    pub infected:       u64,
    pub quarantined:    u64,
    pub newly_infected: u64,
    pub moved:          u64,
    pub admitted:       u64,
    pub discharged:     u64,
}
