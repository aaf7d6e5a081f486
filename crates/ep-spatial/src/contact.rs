//! R-tree index over agent positions for contact queries.
//!
//! The infection engine bulk-loads one index per tick from the healthy agents
//! and then asks, for every transmitting agent, which healthy agents lie
//! within the contact distance.  Bulk loading is O(N log N) and each query is
//! logarithmic plus the size of the answer, which beats the all-pairs scan as
//! soon as more than a handful of agents are infected.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use ep_core::{AgentId, Vec3};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct AgentEntry {
    point: [f64; 3],
    id:    AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── ContactIndex ──────────────────────────────────────────────────────────────

/// Immutable point index.  Build, query, drop; it is never updated in place.
pub struct ContactIndex {
    tree: RTree<AgentEntry>,
}

impl ContactIndex {
    /// Bulk-load from `(agent, position)` pairs.
    pub fn build<I>(agents: I) -> Self
    where
        I: IntoIterator<Item = (AgentId, Vec3)>,
    {
        let entries: Vec<AgentEntry> = agents
            .into_iter()
            .map(|(id, pos)| AgentEntry { point: pos.to_array(), id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Every indexed agent whose distance to `center` is at most `radius`
    /// (boundary inclusive).  Order is unspecified.
    pub fn within(&self, center: Vec3, radius: f64) -> impl Iterator<Item = AgentId> + '_ {
        self.tree
            .locate_within_distance(center.to_array(), radius * radius)
            .map(|e| e.id)
    }
}
