//! outbreak — run the rust_ep epidemic kernel from the command line.
//!
//! Generates the synthetic dataset (or loads `--nodes`/`--edges` CSVs), runs
//! until the outbreak is won or lost, and optionally writes per-tick CSV
//! output.
//!
//! ```text
//! outbreak --population 1500 --beds 40 --seed 7 --output output/run7
//! RUST_LOG=ep_sim=debug outbreak --speed slow
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ep_agent::AgentStore;
use ep_core::{ConfigLimits, SimConfig, SimSpeed, Tick};
use ep_output::{CsvWriter, SimOutputObserver};
use ep_sim::{Outcome, SimBuilder, SimObserver, TickSummary};
use ep_spatial::load_dataset_csv;

#[derive(Parser, Debug)]
#[command(name = "outbreak")]
#[command(about = "Simulate an outbreak among moving agents with limited quarantine beds", long_about = None)]
struct Args {
    /// Number of agents (ignored when --nodes is given)
    #[arg(short, long, default_value_t = 1_000)]
    population: u32,

    /// Agents infected at the start
    #[arg(short, long, default_value_t = 10)]
    infected: u32,

    /// Quarantine beds
    #[arg(short, long, default_value_t = 10)]
    beds: u32,

    /// Days before the outbreak is noticed and quarantine starts
    #[arg(short, long, default_value_t = 20)]
    unaware_days: u32,

    /// Percentage of agents that try to move each tick
    #[arg(short, long, default_value_t = 5)]
    moving: u8,

    /// Simulation speed (slow, normal)
    #[arg(long, default_value = "normal")]
    speed: SimSpeed,

    /// Agent sphere radius
    #[arg(long, default_value_t = 1.0)]
    radius: f64,

    /// RNG seed (random if omitted; the chosen seed is logged)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the run is undecided
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Directory for agent_snapshots.csv and tick_summaries.csv
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write an agent snapshot every N ticks (0 = never)
    #[arg(long, default_value_t = 10)]
    output_interval: u64,

    /// Node CSV (id,x,y,z) to use instead of the synthetic dataset
    #[arg(long)]
    nodes: Option<PathBuf>,

    /// Edge CSV (id,from,to); requires --nodes
    #[arg(long, requires = "nodes")]
    edges: Option<PathBuf>,

    /// Skip the interactive range checks (population 300–2000, …)
    #[arg(long)]
    unchecked: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs a progress line every `interval` ticks and forwards everything to the
/// CSV observer when one is configured.
struct Progress {
    output:   Option<SimOutputObserver<CsvWriter>>,
    interval: u64,
    last:     Option<TickSummary>,
}

impl SimObserver for Progress {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        if summary.tick.0.is_multiple_of(self.interval) {
            info!(
                day = summary.elapsed_days,
                healthy = summary.counts.healthy,
                infected = summary.counts.infected,
                quarantined = summary.counts.quarantined,
                "{}",
                summary.tick
            );
        }
        if let Some(out) = self.output.as_mut() {
            out.on_tick_end(summary);
        }
        self.last = Some(summary.clone());
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        if let Some(out) = self.output.as_mut() {
            out.on_snapshot(tick, agents);
        }
    }

    fn on_outcome(&mut self, tick: Tick, outcome: Outcome) {
        if let Some(out) = self.output.as_mut() {
            out.on_outcome(tick, outcome);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(out) = self.output.as_mut() {
            out.on_sim_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("install tracing subscriber")?;

    let config = SimConfig {
        total_population:      args.population,
        initial_infected:      args.infected,
        bed_capacity:          args.beds,
        unaware_days:          args.unaware_days,
        moving_percentage:     args.moving,
        speed:                 args.speed,
        agent_radius:          args.radius,
        seed:                  args.seed,
        output_interval_ticks: args.output_interval,
    };

    // 1. Dataset and sim.
    let mut builder = SimBuilder::new(config.clone());
    let mut checked = config;
    if let Some(nodes) = &args.nodes {
        let dataset = load_dataset_csv(nodes, args.edges.as_deref())
            .with_context(|| format!("load dataset from {}", nodes.display()))?;
        info!(nodes = dataset.node_count(), edges = dataset.edge_count(), "dataset loaded");
        // The dataset decides the population.
        checked.total_population =
            u32::try_from(dataset.node_count()).context("dataset has too many nodes")?;
        builder = builder.dataset(dataset);
    }
    if args.unchecked {
        warn!("range checks disabled");
    } else {
        ConfigLimits::standard().check(&checked)?;
    }
    let mut sim = builder.build()?;

    // 2. Output.
    let output = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
            Some(SimOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = Progress { output, interval: 100, last: None };

    // 3. Run.
    let t0 = Instant::now();
    let outcome = sim.run_until_outcome(Some(args.max_ticks), &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.as_mut().and_then(|o| o.take_error()) {
        warn!("output error: {e}");
    }

    // 4. Summary.
    let counts = sim.counts();
    println!();
    println!("Seed           : {}", sim.seed());
    println!("Result         : {}", outcome.map_or("undecided", Outcome::as_str));
    println!("Ticks          : {}", sim.clock.current_tick.0);
    println!("Days           : {:.1}", sim.clock.elapsed_days);
    println!("Healthy        : {}", counts.healthy);
    println!("Infected       : {}", counts.infected);
    println!("Quarantined    : {}", counts.quarantined);
    if let Some(last) = &obs.last {
        println!("Last tick      : {} new, {} moved", last.newly_infected, last.moved);
    }
    println!("Wall time      : {:.3} s", elapsed.as_secs_f64());
    if let Some(dir) = &args.output {
        println!("Output         : {}", dir.display());
    }

    Ok(())
}
