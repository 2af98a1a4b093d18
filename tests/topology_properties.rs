#[cfg(test)]
mod topology_properties {
    use std::collections::{BTreeMap, HashSet};

    use simtopo::graph::{EdgeRole, NodeRole, TopologyType};
    use simtopo::topology::{
        chord_topology, dumbbell_topology, full_mesh_topology, generate, k_ary_tree_topology,
        line_topology, ring_topology, star_topology, ParamValue, TopologyKind,
    };
    use simtopo::ErrorKind;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Ring: n nodes, n edges for n > 2, connected, every node of degree 2
    #[test]
    fn test_ring_properties() {
        init_logging();
        for n in 3..=40 {
            let ring = ring_topology(n).unwrap();
            assert_eq!(ring.node_count(), n as usize);
            assert_eq!(ring.edge_count(), n as usize);
            assert!(ring.is_connected());
            assert!(ring.nodes().all(|v| ring.degree(v) == 2), "ring({}) degree", n);
        }
    }

    /// Line: a connected path with two endpoints
    #[test]
    fn test_line_properties() {
        init_logging();
        for n in 2..=30 {
            let line = line_topology(n).unwrap();
            assert_eq!(line.edge_count(), n as usize - 1);
            assert!(line.is_connected());
            let endpoints = line.nodes().filter(|&v| line.degree(v) == 1).count();
            assert_eq!(endpoints, 2);
        }
    }

    /// Star: root 0, leaves 1..=n, every edge incident to node 0
    #[test]
    fn test_star_properties() {
        init_logging();
        for n in 1..=25 {
            let star = star_topology(n).unwrap();
            let n = n as usize;
            assert_eq!(star.node_count(), n + 1);
            assert_eq!(star.edge_count(), n);
            assert_eq!(star.nodes_with_role(NodeRole::Root), vec![0]);
            assert_eq!(star.nodes_with_role(NodeRole::Leaf), (1..=n).collect::<Vec<_>>());
            assert!(star.edges().iter().all(|(a, b, _)| *a == 0 || *b == 0));
        }
    }

    #[test]
    fn test_full_mesh_properties() {
        init_logging();
        for n in 1..=15 {
            let mesh = full_mesh_topology(n).unwrap();
            let n = n as usize;
            assert_eq!(mesh.edge_count(), n * (n - 1) / 2);
            assert!(mesh.nodes().all(|v| mesh.degree(v) == n - 1));
        }
    }

    /// Tree: one root at depth 0, k^d nodes at depth d, leaves exactly at depth h
    #[test]
    fn test_k_ary_tree_properties() {
        init_logging();
        for k in 2..=5_i64 {
            for h in 1..=4_i64 {
                let tree = k_ary_tree_topology(k, h).unwrap();
                let expected = ((k.pow(h as u32 + 1) - 1) / (k - 1)) as usize;
                assert_eq!(tree.node_count(), expected);
                assert_eq!(tree.edge_count(), expected - 1);
                assert!(tree.is_connected());
                assert_eq!(tree.topology_type(), Some(TopologyType::Tree));

                let roots = tree.nodes_with_role(NodeRole::Root);
                assert_eq!(roots, vec![0]);
                assert_eq!(tree.node(0).unwrap().depth, Some(0));

                let mut per_depth: BTreeMap<u32, usize> = BTreeMap::new();
                for v in tree.nodes() {
                    let attrs = tree.node(v).unwrap();
                    *per_depth.entry(attrs.depth.unwrap()).or_default() += 1;
                    let is_leaf = attrs.role == Some(NodeRole::Leaf);
                    assert_eq!(is_leaf, attrs.depth == Some(h as u32), "tree({},{}) node {}", k, h, v);
                }
                for d in 1..=h as u32 {
                    assert_eq!(per_depth[&d], k.pow(d) as usize);
                }

                let partitioned = tree.nodes_with_role(NodeRole::Root).len()
                    + tree.nodes_with_role(NodeRole::Intermediate).len()
                    + tree.nodes_with_role(NodeRole::Leaf).len();
                assert_eq!(partitioned, expected);
            }
        }
    }

    /// Dumbbell: bells of m1 leaves, star-shaped, separated once core edges go
    #[test]
    fn test_dumbbell_properties() {
        init_logging();
        for m1 in 2..=6_i64 {
            for m2 in 1..=5_i64 {
                let dumbbell = dumbbell_topology(m1, m2).unwrap();
                let (bell, path) = (m1 as usize, m2 as usize);
                assert_eq!(dumbbell.node_count(), 2 * bell + path);
                assert!(dumbbell.is_connected());

                let left = dumbbell.nodes_with_role(NodeRole::LeftBell);
                let right = dumbbell.nodes_with_role(NodeRole::RightBell);
                assert_eq!(left.len(), bell);
                assert_eq!(right.len(), bell);

                // left bell plus hub is a star centred on the hub
                let hub = bell;
                for &v in &left {
                    assert_eq!(dumbbell.neighbors(v), vec![hub]);
                }
                let left_edges = dumbbell.edges_with_role(EdgeRole::LeftBell);
                assert_eq!(left_edges.len(), bell);
                assert!(left_edges.iter().all(|&(a, b)| b == hub && a < hub));

                let split = dumbbell.without_edges_of_role(EdgeRole::Core);
                let components = split.connected_components();
                let component_of = |v: usize| components.iter().position(|c| c.contains(&v));
                if path > 1 {
                    assert_ne!(component_of(left[0]), component_of(right[0]));
                    assert!(!split.is_connected());
                } else {
                    // a single core node is shared by both bells
                    assert!(dumbbell.edges_with_role(EdgeRole::Core).is_empty());
                }
            }
        }
    }

    /// Chord: 2^m nodes, every finger present, expected out-degree
    #[test]
    fn test_chord_properties() {
        init_logging();
        for m in 2..=6_i64 {
            let n = 1_usize << m;
            for r in [1, 2, 3, 5, 7, (n as i64) - 1] {
                if r > (n as i64) - 1 {
                    continue;
                }
                let chord = chord_topology(m, r).unwrap();
                assert_eq!(chord.node_count(), n);
                assert!(chord.is_directed());

                for v in chord.nodes() {
                    let fingers: HashSet<usize> = (0..m).map(|u| (v + (1_usize << u)) % n).collect();
                    for &target in &fingers {
                        assert!(chord.contains_edge(v, target), "chord({},{}) {} -> {}", m, r, v, target);
                    }

                    let mut expected = fingers.clone();
                    if r > 2 {
                        expected.extend((3..=r as usize).map(|offset| (v + offset) % n));
                    }
                    assert_eq!(chord.out_degree(v), expected.len());
                    if r <= 2 {
                        assert_eq!(chord.out_degree(v), m as usize);
                    }
                }
            }
        }
    }

    #[test]
    fn test_chord_scenario() {
        let chord = chord_topology(2, 1).unwrap();
        assert_eq!(chord.node_count(), 4);
        assert_eq!(chord.out_neighbors(0), vec![1, 2]);
        assert_eq!(chord.out_neighbors(3), vec![0, 1]);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(ring_topology(9).unwrap(), ring_topology(9).unwrap());
        assert_eq!(k_ary_tree_topology(3, 3).unwrap(), k_ary_tree_topology(3, 3).unwrap());
        assert_eq!(dumbbell_topology(4, 3).unwrap(), dumbbell_topology(4, 3).unwrap());
        assert_eq!(chord_topology(5, 6).unwrap(), chord_topology(5, 6).unwrap());
        assert_ne!(ring_topology(9).unwrap(), line_topology(9).unwrap());
    }

    #[test]
    fn test_boundary_rejection() {
        assert_eq!(ring_topology(0).unwrap_err().kind(), ErrorKind::InvalidParameter);
        assert_eq!(k_ary_tree_topology(1, 2).unwrap_err().kind(), ErrorKind::InvalidParameter);
        assert_eq!(dumbbell_topology(1, 5).unwrap_err().kind(), ErrorKind::InvalidParameter);
        assert_eq!(chord_topology(1, 1).unwrap_err().kind(), ErrorKind::InvalidParameter);

        let mut params = BTreeMap::new();
        params.insert("n".to_string(), ParamValue::Float(2.5));
        let err = generate(TopologyKind::Ring, &params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}
