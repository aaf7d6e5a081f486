//! Random-waypoint movement.

use ep_agent::Population;
use ep_core::{HealthState, SimRng, Vec3, Waypoint, uniform_speed};

/// Per-axis distance at which an agent counts as having reached its waypoint.
pub const ARRIVAL_TOLERANCE: f64 = 1.0;

/// Moves non-quarantined agents toward randomly drawn waypoints.
///
/// Waypoint targets are drawn per axis as `floor(u * range) * (±1)` with
/// `u ∈ [0, 1)` and `range = ceil(sqrt(population)) * 2`, so they land on
/// integer coordinates inside the same cube the synthetic dataset fills.
#[derive(Clone, Debug)]
pub struct MovementEngine {
    range: f64,
}

impl MovementEngine {
    pub fn new(population_size: usize) -> Self {
        Self { range: (population_size as f64).sqrt().ceil() * 2.0 }
    }

    /// Half-width of the waypoint cube.
    #[inline]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Draw a fresh waypoint: three axis targets, then a speed.
    pub fn random_waypoint(&self, rng: &mut SimRng) -> Waypoint {
        let x = self.random_axis(rng);
        let y = self.random_axis(rng);
        let z = self.random_axis(rng);
        Waypoint { target: Vec3::new(x, y, z), speed: uniform_speed(rng) }
    }

    fn random_axis(&self, rng: &mut SimRng) -> f64 {
        (rng.random::<f64>() * self.range).floor() * rng.sign()
    }

    /// Advance one tick.  Returns the number of agents whose position changed.
    ///
    /// Agents are visited in id order.  Quarantined agents are skipped without
    /// consuming a roll.  Every other agent moves with probability
    /// `moving_percentage / 100`:
    ///
    /// - no waypoint yet → draw one, then continue as below;
    /// - within [`ARRIVAL_TOLERANCE`] of the target on every axis → draw a new
    ///   waypoint and stay put this tick;
    /// - otherwise every axis further than the tolerance steps
    ///   `speed * speed_factor` toward the target.  Overshoot is allowed.
    pub fn step(
        &self,
        population:        &mut Population,
        moving_percentage: u8,
        speed_factor:      f64,
        rng:               &mut SimRng,
    ) -> usize {
        let p = f64::from(moving_percentage) / 100.0;
        let (health, positions, waypoints) = population.store.movement_view();
        let mut moved = 0;

        for i in 0..positions.len() {
            if health[i] == HealthState::Quarantined {
                continue;
            }
            if !rng.gen_bool(p) {
                continue;
            }

            let wp = match waypoints[i] {
                Some(wp) => wp,
                None => {
                    let wp = self.random_waypoint(rng);
                    waypoints[i] = Some(wp);
                    wp
                }
            };

            let pos = &mut positions[i];
            if pos.within_box(wp.target, ARRIVAL_TOLERANCE) {
                waypoints[i] = Some(self.random_waypoint(rng));
                continue;
            }

            let stride = wp.speed * speed_factor;
            step_axis(&mut pos.x, wp.target.x, stride);
            step_axis(&mut pos.y, wp.target.y, stride);
            step_axis(&mut pos.z, wp.target.z, stride);
            moved += 1;
        }

        tracing::trace!(moved, "movement step");
        moved
    }
}

#[inline]
fn step_axis(coord: &mut f64, target: f64, stride: f64) {
    let delta = target - *coord;
    if delta.abs() > ARRIVAL_TOLERANCE {
        *coord += stride * delta.signum();
    }
}
