//! Agent health states and aggregate counts.

/// Which partition an agent currently belongs to.
///
/// `Quarantined` agents are conceptually still infected: they count towards
/// the infected total for win/lose evaluation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Healthy,
    /// Infected and not (yet) admitted to a bed.
    Infected,
    /// Infected and occupying a bed.
    Quarantined,
}

impl HealthState {
    /// `true` for `Infected` and `Quarantined`.
    #[inline]
    pub fn is_infected(self) -> bool {
        !matches!(self, HealthState::Healthy)
    }

    /// Label used in CSV/SQLite output columns.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Healthy     => "healthy",
            HealthState::Infected    => "infected",
            HealthState::Quarantined => "quarantined",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sizes of the three disjoint partitions.
///
/// `infected` excludes quarantined agents; use [`infected_total`] for the
/// superset.
///
/// [`infected_total`]: HealthCounts::infected_total
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthCounts {
    pub healthy:     usize,
    pub infected:    usize,
    pub quarantined: usize,
}

impl HealthCounts {
    /// Infected agents including those in quarantine.
    #[inline]
    pub fn infected_total(&self) -> usize {
        self.infected + self.quarantined
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.healthy + self.infected + self.quarantined
    }

    /// Fraction of the population currently healthy.  An empty population
    /// reports `1.0`.
    pub fn healthy_fraction(&self) -> f64 {
        match self.total() {
            0 => 1.0,
            n => self.healthy as f64 / n as f64,
        }
    }
}
