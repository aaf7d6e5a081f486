//! `ep-mobility` — random-waypoint agent movement.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`engine`]  | `MovementEngine` — waypoint generation and stepping   |
//!
//! Positions live in the registry's SoA arrays (`AgentStore::positions`,
//! `AgentStore::waypoints`); the engine holds no per-agent state of its own,
//! only the waypoint range derived from the population size.

pub mod engine;


pub use engine::{ARRIVAL_TOLERANCE, MovementEngine};
