//! Run status and termination rules.

use ep_core::HealthCounts;

/// The run is lost once the healthy share drops to this fraction or below.
pub const LOSS_HEALTHY_FRACTION: f64 = 0.3;

/// How a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// No infected agents remain (quarantined included).
    Won,
    /// Too few healthy agents remain.
    Lost,
}

impl Outcome {
    /// Evaluate the termination rules against end-of-tick counts.
    ///
    /// The win rule is checked first, so an empty population is a win.
    pub fn evaluate(counts: &HealthCounts) -> Option<Outcome> {
        if counts.infected_total() == 0 {
            Some(Outcome::Won)
        } else if counts.healthy_fraction() <= LOSS_HEALTHY_FRACTION {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Won  => "won",
            Outcome::Lost => "lost",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a front-end shows about the current run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimStatus {
    #[default]
    NotStarted,
    /// Running, quarantine not yet active.
    SpreadingUnnoticed,
    /// Running, quarantine active.
    Suppressing,
    /// A resumable run is on hold.
    Paused,
    Won,
    Lost,
}

impl SimStatus {
    /// `true` for `Won` and `Lost`.
    pub fn is_finished(self) -> bool {
        matches!(self, SimStatus::Won | SimStatus::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SimStatus::NotStarted         => "not started",
            SimStatus::SpreadingUnnoticed => "spreading unnoticed",
            SimStatus::Suppressing        => "suppressing",
            SimStatus::Paused             => "paused",
            SimStatus::Won                => "won",
            SimStatus::Lost               => "lost",
        }
    }
}

impl From<Outcome> for SimStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won  => SimStatus::Won,
            Outcome::Lost => SimStatus::Lost,
        }
    }
}

impl std::fmt::Display for SimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
