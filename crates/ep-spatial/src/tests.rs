//! Unit tests for ep-spatial.
//!
//! All tests use in-memory data so they run without any files on disk.

#[cfg(test)]
mod builder {
    use ep_core::Vec3;

    use crate::DatasetBuilder;

    #[test]
    fn empty_build() {
        let ds = DatasetBuilder::new().build();
        assert!(ds.is_empty());
        assert_eq!(ds.edge_count(), 0);
    }

    #[test]
    fn duplicate_node_keeps_first() {
        let mut b = DatasetBuilder::new();
        assert!(b.add_node("a", Vec3::new(1.0, 2.0, 3.0)));
        assert!(!b.add_node("a", Vec3::ZERO));
        let ds = b.build();
        assert_eq!(ds.node_count(), 1);
        assert_eq!(ds.nodes()[0].position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn dangling_and_duplicate_edges_dropped() {
        let mut b = DatasetBuilder::new();
        b.add_node("a", Vec3::ZERO);
        b.add_node("b", Vec3::ZERO);
        assert!(b.add_edge("e1", "a", "b"));
        assert!(!b.add_edge("e1", "b", "a"), "repeated id");
        assert!(!b.add_edge("e2", "zz", "a"), "unknown source");
        assert!(!b.add_edge("e3", "a", "zz"), "unknown target");
        assert_eq!(b.build().edge_count(), 1);
    }

    #[test]
    fn node_order_is_insertion_order() {
        let mut b = DatasetBuilder::new();
        for name in ["c", "a", "b"] {
            b.add_node(name, Vec3::ZERO);
        }
        let ids: Vec<_> = b.build().nodes().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}

#[cfg(test)]
mod synthetic {
    use ep_core::SimRng;

    use crate::Dataset;

    #[test]
    fn node_and_edge_counts() {
        let mut rng = SimRng::new(1);
        let ds = Dataset::synthetic(1_000, &mut rng);
        assert_eq!(ds.node_count(), 1_000);
        assert_eq!(ds.edge_count(), 10);
        assert_eq!(ds.nodes()[0].id, "mesh0");
        assert_eq!(ds.nodes()[999].id, "mesh999");
    }

    #[test]
    fn positions_within_spread() {
        let mut rng = SimRng::new(2);
        let ds = Dataset::synthetic(400, &mut rng);
        let spread = Dataset::spread_for(400);
        assert_eq!(spread, 40.0);
        for p in ds.positions() {
            assert!(p.x.abs() <= spread && p.y.abs() <= spread && p.z.abs() <= spread);
        }
    }

    #[test]
    fn edges_link_distinct_nodes() {
        let mut rng = SimRng::new(3);
        let ds = Dataset::synthetic(500, &mut rng);
        for e in ds.edges() {
            assert_ne!(e.from, e.to);
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        let a = Dataset::synthetic(300, &mut SimRng::new(9));
        let b = Dataset::synthetic(300, &mut SimRng::new(9));
        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn tiny_population_has_no_edges() {
        let ds = Dataset::synthetic(10, &mut SimRng::new(4));
        assert_eq!(ds.node_count(), 10);
        assert_eq!(ds.edge_count(), 0);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_edges_reader, load_nodes_reader, DatasetBuilder, SpatialError};

    const NODES: &str = "id,x,y,z\nmesh0,1.5,-2,0\nmesh1,0,0,3.25\nmesh0,9,9,9\n";
    const EDGES: &str = "id,from,to\n0-1,mesh0,mesh1\n0-9,mesh0,mesh9\n";

    #[test]
    fn nodes_and_edges_load() {
        let mut b = DatasetBuilder::new();
        assert_eq!(load_nodes_reader(Cursor::new(NODES), &mut b).unwrap(), 2);
        assert_eq!(load_edges_reader(Cursor::new(EDGES), &mut b).unwrap(), 1);
        let ds = b.build();
        assert_eq!(ds.nodes()[0].position.x, 1.5);
        assert_eq!(ds.nodes()[1].position.z, 3.25);
        assert_eq!(ds.edges()[0].to, "mesh1");
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let mut b = DatasetBuilder::new();
        let err = load_nodes_reader(Cursor::new("id,x,y,z\nmesh0,abc,0,0\n"), &mut b).unwrap_err();
        assert!(matches!(err, SpatialError::Parse(_)), "{err}");
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let mut b = DatasetBuilder::new();
        let err = load_nodes_reader(Cursor::new("id,x,y,z\nmesh0,inf,0,0\n"), &mut b).unwrap_err();
        assert!(matches!(err, SpatialError::Parse(_)), "{err}");
    }
}

#[cfg(test)]
mod contact {
    use ep_core::{AgentId, Vec3};

    use crate::ContactIndex;

    fn sorted(mut v: Vec<AgentId>) -> Vec<AgentId> {
        v.sort();
        v
    }

    #[test]
    fn empty_index() {
        let idx = ContactIndex::build(std::iter::empty());
        assert!(idx.is_empty());
        assert_eq!(idx.within(Vec3::ZERO, 10.0).count(), 0);
    }

    #[test]
    fn radius_query_is_inclusive() {
        let idx = ContactIndex::build([
            (AgentId(0), Vec3::new(0.0, 0.0, 0.0)),
            (AgentId(1), Vec3::new(2.0, 0.0, 0.0)),
            (AgentId(2), Vec3::new(0.0, 2.5, 0.0)),
        ]);
        assert_eq!(idx.len(), 3);
        let hits = sorted(idx.within(Vec3::ZERO, 2.0).collect());
        assert_eq!(hits, vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn matches_brute_force() {
        let points: Vec<(AgentId, Vec3)> = (0..200u32)
            .map(|i| {
                let f = i as f64;
                (AgentId(i), Vec3::new((f * 7.3) % 20.0, (f * 3.1) % 20.0, (f * 1.7) % 20.0))
            })
            .collect();
        let idx = ContactIndex::build(points.iter().copied());
        let center = Vec3::new(10.0, 10.0, 10.0);
        let expected: Vec<AgentId> = points
            .iter()
            .filter(|(_, p)| p.distance(center) <= 4.0)
            .map(|&(id, _)| id)
            .collect();
        assert_eq!(sorted(idx.within(center, 4.0).collect()), expected);
    }
}
