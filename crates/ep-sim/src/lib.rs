//! `ep-sim` — tick orchestrator and run controller for the rust_ep kernel.
//!
//! # Tick
//!
//! ```text
//! step():
//!   ⓪ Check     — Won if no infected remain, Lost if healthy share ≤ 0.3.
//!                 A finished run never mutates again.
//!   ① Infection — contact sources roll their skips; healthy agents within
//!                 2 × radius of a source become infected.
//!   ② Movement  — random-waypoint steps (quarantined agents stay put).
//!   ③ Quarantine— after the unaware period: discharge, then fill beds.
//!   ④ Clock     — elapsed_days += 0.1 × speed factor.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Contact queries in ① run on Rayon's thread pool.       |
//! | `serde`    | `Serialize`/`Deserialize` for statuses and snapshots.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ep_core::SimConfig;
//! use ep_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let outcome = sim.run_until_outcome(Some(10_000), &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod control;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod status;


pub use builder::SimBuilder;
pub use control::SimController;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::{Sim, TickOutcome};
pub use snapshot::{AgentView, Snapshot};
pub use status::{LOSS_HEALTHY_FRACTION, Outcome, SimStatus};
