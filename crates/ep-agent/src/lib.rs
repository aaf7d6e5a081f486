//! `ep-agent` — the agent registry for the `rust_ep` kernel.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays: position, waypoint, health, …)  |
//! | [`partition`]   | `Partition` — insertion-ordered id set                    |
//! | [`population`]  | `Population` — store + the three health partitions        |
//! | [`builder`]     | `PopulationBuilder` (fluent construction)                 |
//!
//! # Ownership of mutations
//!
//! Positions and waypoints are plain `pub` SoA fields that the movement
//! engine writes directly.  Health state and quarantine durations can only be
//! changed through `Population`'s transition methods, which keep the
//! partitions and the SoA arrays in step.

pub mod builder;
pub mod partition;
pub mod population;
pub mod store;


pub use builder::{PopulationBuilder, create_population};
pub use partition::Partition;
pub use population::Population;
pub use store::AgentStore;
