//! Attributed graph primitive.
//!
//! This module contains the graph type every generator returns, the
//! fixed-shape attribute records attached to nodes, edges and the graph
//! itself, and the builder used to populate them.

pub mod attributes;
pub mod builder;
pub mod topology;

// Re-export key types for easier access
pub use attributes::{EdgeAttrs, EdgeRole, GraphMeta, NodeAttrs, NodeRole, TopologyType};
pub use builder::{balanced_tree_order, TopologyBuilder};
pub use topology::{DirectedTopology, Topology, TopologyGraph, TopologySummary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::GeneratedTopology;
    use petgraph::{Directed, Undirected};

    fn two_triangles() -> Topology {
        let mut builder = TopologyBuilder::<Undirected>::new();
        for (a, b) in [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)] {
            builder.add_edge(a, b, EdgeAttrs::default());
        }
        builder.add_edge(2, 3, EdgeAttrs::with_role(EdgeRole::Core));
        builder.build()
    }

    #[test]
    fn test_components_and_role_removal() {
        let topology = two_triangles();
        assert!(topology.is_connected());
        assert_eq!(topology.edges_with_role(EdgeRole::Core), vec![(2, 3)]);

        let split = topology.without_edges_of_role(EdgeRole::Core);
        assert_eq!(split.node_count(), 6);
        assert_eq!(split.edge_count(), 6);
        assert_eq!(
            split.connected_components(),
            vec![vec![0, 1, 2], vec![3, 4, 5]]
        );
        assert!(!split.is_connected());

        // The original is untouched
        assert_eq!(topology.edge_count(), 7);
    }

    #[test]
    fn test_edges_are_normalized_and_sorted() {
        let topology = two_triangles();
        let edges: Vec<(usize, usize)> = topology.edges().into_iter().map(|(a, b, _)| (a, b)).collect();
        assert_eq!(
            edges,
            vec![(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (3, 5), (4, 5)]
        );
    }

    #[test]
    fn test_summary_display() {
        let mut builder = TopologyBuilder::<Undirected>::path(3);
        builder.set_name("line_topology(3)").set_type(TopologyType::Line);
        let summary = builder.build().summary();
        assert_eq!(
            summary.to_string(),
            "line_topology(3) (line, undirected): 3 nodes, 2 edges"
        );
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let topology = TopologyBuilder::<Undirected>::new().build();
        assert!(topology.connected_components().is_empty());
        assert!(topology.is_connected());
    }

    #[test]
    fn test_directed_role_removal_keeps_orientation() {
        let mut builder = TopologyBuilder::<Directed>::new();
        builder.add_edge(0, 1, EdgeAttrs::default());
        builder.add_edge(1, 2, EdgeAttrs::with_role(EdgeRole::Core));
        builder.add_edge(2, 0, EdgeAttrs::with_role(EdgeRole::Core));
        let topology: DirectedTopology = builder.build();

        let split = topology.without_edges_of_role(EdgeRole::Core);
        assert_eq!(split.edge_count(), 1);
        assert!(split.contains_edge(0, 1));
        assert!(!split.contains_edge(1, 0));
        assert_eq!(split.connected_components(), vec![vec![0, 1], vec![2]]);
        assert_eq!(topology.edge_count(), 3);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_topologies_are_send_and_sync() {
        assert_send_sync::<Topology>();
        assert_send_sync::<DirectedTopology>();
        assert_send_sync::<GeneratedTopology>();
        assert_send_sync::<TopologyBuilder<Undirected>>();
    }
}
