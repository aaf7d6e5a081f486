//! The node/edge dataset a population is created from.
//!
//! Nodes become agents one-to-one, in dataset order.  Edges are validated and
//! carried along for future graph features but no engine reads them.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use ep_core::{SimRng, Vec3};

/// One dataset node: a stable string id and a starting position.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRecord {
    pub id:       String,
    pub position: Vec3,
}

/// One undirected link between two nodes, referenced by node id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub id:   String,
    pub from: String,
    pub to:   String,
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// A validated set of nodes and edges.
///
/// Do not construct directly; use [`DatasetBuilder`] or one of the loaders.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

impl Dataset {
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Starting positions in dataset order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.nodes.iter().map(|n| n.position)
    }

    /// Half-width of the cube nodes are scattered in: `ceil(sqrt(n)) * 2`.
    ///
    /// The movement engine uses the same value for its waypoint range.
    pub fn spread_for(node_count: usize) -> f64 {
        (node_count as f64).sqrt().ceil() * 2.0
    }

    /// Generate `total` nodes named `mesh0..` scattered uniformly in
    /// `±spread` on each axis, plus `total / 100` random edges between
    /// distinct nodes.
    pub fn synthetic(total: usize, rng: &mut SimRng) -> Self {
        let spread = Self::spread_for(total);
        let mut b = DatasetBuilder::with_capacity(total, total / 100);

        for i in 0..total {
            let x = spread * rng.random::<f64>() * rng.sign();
            let y = spread * rng.random::<f64>() * rng.sign();
            let z = spread * rng.random::<f64>() * rng.sign();
            b.add_node(format!("mesh{i}"), Vec3::new(x, y, z));
        }

        let wanted = total / 100;
        while b.edge_count() < wanted {
            let a = rng.gen_range(0..total);
            let c = rng.gen_range(0..total);
            if a != c {
                b.add_edge(format!("{a}-{c}"), format!("mesh{a}"), format!("mesh{c}"));
            }
        }

        b.build()
    }
}

// ── DatasetBuilder ────────────────────────────────────────────────────────────

/// Accumulate nodes and edges, dropping anything that would make the dataset
/// inconsistent.
///
/// - A repeated node id keeps the first occurrence.
/// - An edge whose id repeats, or whose endpoint is unknown at the time it is
///   added, is dropped with a warning.  Add nodes before edges.
///
/// # Example
///
/// ```
/// use ep_core::Vec3;
/// use ep_spatial::DatasetBuilder;
///
/// let mut b = DatasetBuilder::new();
/// b.add_node("a", Vec3::ZERO);
/// b.add_node("b", Vec3::new(1.0, 0.0, 0.0));
/// assert!(b.add_edge("a-b", "a", "b"));
/// assert!(!b.add_edge("a-x", "a", "x"));
/// let ds = b.build();
/// assert_eq!(ds.node_count(), 2);
/// assert_eq!(ds.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct DatasetBuilder {
    nodes:    Vec<NodeRecord>,
    edges:    Vec<EdgeRecord>,
    node_ids: HashMap<String, usize>,
    edge_ids: HashSet<String>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:    Vec::with_capacity(nodes),
            edges:    Vec::with_capacity(edges),
            node_ids: HashMap::with_capacity(nodes),
            edge_ids: HashSet::with_capacity(edges),
        }
    }

    /// Add a node.  Returns `false` (and changes nothing) if `id` exists.
    pub fn add_node(&mut self, id: impl Into<String>, position: Vec3) -> bool {
        let id = id.into();
        if self.node_ids.contains_key(&id) {
            return false;
        }
        self.node_ids.insert(id.clone(), self.nodes.len());
        self.nodes.push(NodeRecord { id, position });
        true
    }

    /// Add an edge between two known nodes.  Returns `false` if it was dropped.
    pub fn add_edge(
        &mut self,
        id:   impl Into<String>,
        from: impl Into<String>,
        to:   impl Into<String>,
    ) -> bool {
        let (id, from, to) = (id.into(), from.into(), to.into());
        if self.edge_ids.contains(&id) {
            return false;
        }
        if !self.node_ids.contains_key(&from) {
            warn!(edge = %id, node = %from, "edge source node is not in the dataset; dropped");
            return false;
        }
        if !self.node_ids.contains_key(&to) {
            warn!(edge = %id, node = %to, "edge target node is not in the dataset; dropped");
            return false;
        }
        self.edge_ids.insert(id.clone());
        self.edges.push(EdgeRecord { id, from, to });
        true
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    pub fn build(self) -> Dataset {
        Dataset { nodes: self.nodes, edges: self.edges }
    }
}
