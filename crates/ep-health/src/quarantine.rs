//! Bed-limited quarantine: discharge, then admit.

use ep_agent::Population;
use ep_core::{AgentId, EpResult, SimClock, SimRng, uniform_quarantine_days};

/// What one allocator step changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuarantineReport {
    /// Agents that finished their stay and are Healthy again.
    pub discharged: Vec<AgentId>,
    /// Agents moved from Infected into a bed, in admission order.
    pub admitted: Vec<AgentId>,
}

impl QuarantineReport {
    pub fn is_empty(&self) -> bool {
        self.discharged.is_empty() && self.admitted.is_empty()
    }
}

/// Assigns beds to infected agents and releases them when their stay ends.
///
/// Nothing happens while the clock is still inside the unaware period.
/// Lowering the capacity below the current occupancy evicts nobody; new
/// admissions simply wait until discharges free a bed.
#[derive(Clone, Debug)]
pub struct BedAllocator {
    bed_capacity: u32,
}

impl BedAllocator {
    pub fn new(bed_capacity: u32) -> Self {
        Self { bed_capacity }
    }

    #[inline]
    pub fn bed_capacity(&self) -> u32 {
        self.bed_capacity
    }

    pub fn set_bed_capacity(&mut self, beds: u32) {
        self.bed_capacity = beds;
    }

    pub fn step(
        &self,
        population: &mut Population,
        clock:      &SimClock,
        rng:        &mut SimRng,
    ) -> EpResult<QuarantineReport> {
        let mut report = QuarantineReport::default();
        if clock.still_unaware() {
            return Ok(report);
        }

        // Discharge.
        let days = clock.days_per_frame();
        let occupants: Vec<AgentId> = population.quarantined().collect();
        for agent in occupants {
            if population.count_down_quarantine(agent, days)? <= 0.0 {
                population.mark_healthy_after_recovery(agent)?;
                report.discharged.push(agent);
            }
        }

        // Admit in order of infection.
        let free = (self.bed_capacity as usize).saturating_sub(population.counts().quarantined);
        let waiting: Vec<AgentId> = population.infected().take(free).collect();
        for agent in waiting {
            let stay = uniform_quarantine_days(rng);
            population.admit(agent, f64::from(stay))?;
            report.admitted.push(agent);
        }

        Ok(report)
    }
}
