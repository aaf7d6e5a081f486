//! `ep-core` — foundational types for the `rust_ep` epidemic simulation kernel.
//!
//! This crate is a dependency of every other `ep-*` crate.  It intentionally
//! has no `ep-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module              | Contents                                          |
//! |---------------------|---------------------------------------------------|
//! | [`ids`]             | `AgentId`                                         |
//! | [`geo`]             | `Vec3`, `Waypoint`, Euclidean distance            |
//! | [`health`]          | `HealthState`, `HealthCounts`                     |
//! | [`time`]            | `Tick`, `SimClock`, `SimSpeed`                    |
//! | [`config`]          | `SimConfig`, `ConfigLimits`                       |
//! | [`rng`]             | `SimRng` (seedable, process-wide per run)         |
//! | [`distributions`]   | `uniform_speed`, `uniform_quarantine_days`        |
//! | [`error`]           | `EpError`, `EpResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod distributions;
pub mod error;
pub mod geo;
pub mod health;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConfigLimits, SimConfig};
pub use distributions::{uniform_quarantine_days, uniform_speed};
pub use error::{EpError, EpResult};
pub use geo::{Vec3, Waypoint};
pub use health::{HealthCounts, HealthState};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, SimSpeed, Tick, BASE_DAYS_PER_TICK};
