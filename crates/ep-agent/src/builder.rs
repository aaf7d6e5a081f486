//! Fluent builder for a [`Population`].
//!
//! # Usage
//!
//! ```rust
//! use ep_agent::PopulationBuilder;
//! use ep_core::Vec3;
//!
//! let pop = PopulationBuilder::with_capacity(3)
//!     .agent("mesh0", Vec3::new(0.0, 0.0, 0.0))
//!     .agent("mesh1", Vec3::new(1.0, 0.0, 0.0))
//!     .agent("mesh2", Vec3::new(2.0, 0.0, 0.0))
//!     .initial_infected(1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(pop.counts().infected, 1);
//! assert_eq!(pop.counts().healthy, 2);
//! ```

use ep_core::{AgentId, EpError, EpResult, Vec3};

use crate::Population;

#[derive(Default)]
pub struct PopulationBuilder {
    labels:           Vec<String>,
    positions:        Vec<Vec3>,
    initial_infected: usize,
}

impl PopulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            labels:           Vec::with_capacity(n),
            positions:        Vec::with_capacity(n),
            initial_infected: 0,
        }
    }

    /// Append one agent.  Agent ids follow call order.
    pub fn agent(mut self, label: impl Into<String>, position: Vec3) -> Self {
        self.labels.push(label.into());
        self.positions.push(position);
        self
    }

    /// Append agents from `(label, position)` pairs.
    pub fn agents<I, S>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec3)>,
        S: Into<String>,
    {
        for (label, position) in iter {
            self.labels.push(label.into());
            self.positions.push(position);
        }
        self
    }

    /// The first `n` agents (by id) start infected.
    pub fn initial_infected(mut self, n: usize) -> Self {
        self.initial_infected = n;
        self
    }

    /// Fails with `InvalidConfiguration` if more agents are to be infected
    /// than exist.
    pub fn build(self) -> EpResult<Population> {
        let n = self.positions.len();
        if self.initial_infected > n {
            return Err(EpError::InvalidConfiguration(format!(
                "initial_infected ({}) exceeds population ({n})",
                self.initial_infected
            )));
        }
        let mut pop = Population::new(self.labels, self.positions);
        for i in 0..self.initial_infected as u32 {
            pop.mark_infected(AgentId(i))?;
        }
        Ok(pop)
    }
}

/// One agent per node; agents `0..initial_infected` start infected.
pub fn create_population<I, S>(nodes: I, initial_infected: usize) -> EpResult<Population>
where
    I: IntoIterator<Item = (S, Vec3)>,
    S: Into<String>,
{
    PopulationBuilder::new()
        .agents(nodes)
        .initial_infected(initial_infected)
        .build()
}
