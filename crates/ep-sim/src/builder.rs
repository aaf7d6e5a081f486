//! Fluent builder for constructing a [`Sim`].

use ep_agent::create_population;
use ep_core::{SimConfig, SimRng};
use ep_health::{BedAllocator, InfectionEngine};
use ep_mobility::MovementEngine;
use ep_spatial::Dataset;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Inputs
///
/// | Method          | Default                                                 |
/// |-----------------|---------------------------------------------------------|
/// | `new(config)`   | required                                                |
/// | `.dataset(d)`   | `Dataset::synthetic(config.total_population, rng)`      |
///
/// The run RNG is seeded from `config.seed`, or from OS entropy when that is
/// `None`.  A synthetic dataset is drawn from the same RNG, so one seed fixes
/// both the starting positions and the run.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig { seed: Some(7), ..Default::default() })
///     .build()?;
/// sim.run_until_outcome(None, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    dataset: Option<Dataset>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, dataset: None }
    }

    /// Use a loaded dataset instead of generating one.  The population size
    /// becomes the dataset's node count.
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Validate the configuration, create the population, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let mut config = self.config;
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };

        let dataset = match self.dataset {
            Some(dataset) => {
                let nodes = u32::try_from(dataset.node_count())
                    .map_err(|_| SimError::PopulationTooLarge(dataset.node_count()))?;
                if nodes != config.total_population {
                    tracing::warn!(
                        configured = config.total_population,
                        nodes,
                        "population size taken from the dataset"
                    );
                    config.total_population = nodes;
                    config.validate()?;
                }
                dataset
            }
            None => Dataset::synthetic(config.total_population as usize, &mut rng),
        };

        let population = create_population(
            dataset.nodes().iter().map(|n| (n.id.clone(), n.position)),
            config.initial_infected as usize,
        )?;
        let edges = dataset.edges().to_vec();

        tracing::info!(
            seed = rng.seed(),
            agents = population.len(),
            edges = edges.len(),
            initial_infected = config.initial_infected,
            beds = config.bed_capacity,
            unaware_days = config.unaware_days,
            moving_percentage = config.moving_percentage,
            speed = %config.speed,
            "run created"
        );

        Ok(Sim {
            clock:     config.make_clock(),
            infection: InfectionEngine::new(config.agent_radius),
            movement:  MovementEngine::new(population.len()),
            beds:      BedAllocator::new(config.bed_capacity),
            config,
            population,
            edges,
            rng,
            outcome:   None,
        })
    }
}
