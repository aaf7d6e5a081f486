//! `ep-health` — the two engines that change health state.
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`infection`]   | `InfectionEngine` — Healthy → Infected by proximity      |
//! | [`quarantine`]  | `BedAllocator` — Infected → Quarantined → Healthy        |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Contact queries run on Rayon.  Results are identical.       |

pub mod infection;
pub mod quarantine;


pub use infection::{InfectionEngine, QUARANTINE_SKIP_PROBABILITY, SKIP_PROBABILITY};
pub use quarantine::{BedAllocator, QuarantineReport};
