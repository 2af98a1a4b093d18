//! Finished, read-only topology graphs.

use petgraph::graphmap::GraphMap;
use petgraph::unionfind::UnionFind;
use petgraph::{Directed, Direction, EdgeType, Undirected};
use std::collections::BTreeMap;
use std::fmt;

use super::attributes::{EdgeAttrs, EdgeRole, GraphMeta, NodeAttrs, NodeRole, TopologyType};

/// Undirected topology
pub type Topology = TopologyGraph<Undirected>;

/// Directed topology
pub type DirectedTopology = TopologyGraph<Directed>;

/// A labeled graph produced by one of the generators.
///
/// Node ids are dense `usize` values starting at 0. Every node has a
/// [`NodeAttrs`] record and every edge an [`EdgeAttrs`] record. Instances are
/// only created through [`TopologyBuilder`](super::TopologyBuilder).
#[derive(Debug, Clone)]
pub struct TopologyGraph<Ty: EdgeType> {
    pub(super) name: String,
    pub(super) meta: GraphMeta,
    pub(super) graph: GraphMap<usize, EdgeAttrs, Ty>,
    pub(super) nodes: BTreeMap<usize, NodeAttrs>,
}

/// Short description of a topology, used for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologySummary {
    pub name: String,
    pub topology_type: Option<TopologyType>,
    pub directed: bool,
    pub nodes: usize,
    pub edges: usize,
}

impl fmt::Display for TopologySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.topology_type.map_or("untyped", |t| t.as_str());
        let direction = if self.directed { "directed" } else { "undirected" };
        write!(
            f,
            "{} ({}, {}): {} nodes, {} edges",
            self.name, kind, direction, self.nodes, self.edges
        )
    }
}

impl<Ty: EdgeType> TopologyGraph<Ty> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta(&self) -> &GraphMeta {
        &self.meta
    }

    pub fn topology_type(&self) -> Option<TopologyType> {
        self.meta.topology_type
    }

    /// Family-specific integer parameter stored in the graph metadata
    pub fn graph_attr(&self, key: &str) -> Option<u64> {
        self.meta.params.get(key).copied()
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node ids in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.keys().copied()
    }

    pub fn contains_node(&self, id: usize) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: usize) -> Option<&NodeAttrs> {
        self.nodes.get(&id)
    }

    /// All edges with their attributes, sorted by endpoints.
    ///
    /// Undirected edges are reported with the smaller id first.
    pub fn edges(&self) -> Vec<(usize, usize, EdgeAttrs)> {
        let mut edges: Vec<_> = self
            .graph
            .all_edges()
            .map(|(a, b, attrs)| {
                if !Ty::is_directed() && b < a {
                    (b, a, *attrs)
                } else {
                    (a, b, *attrs)
                }
            })
            .collect();
        edges.sort_unstable_by_key(|&(a, b, _)| (a, b));
        edges
    }

    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.graph.contains_edge(a, b)
    }

    pub fn edge(&self, a: usize, b: usize) -> Option<&EdgeAttrs> {
        self.graph.edge_weight(a, b)
    }

    /// Neighbors of `id` in ascending order (successors for directed graphs).
    ///
    /// A self-loop lists the node once.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        if !self.graph.contains_node(id) {
            return Vec::new();
        }
        let mut neighbors: Vec<usize> = self.graph.neighbors(id).collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Ids of all nodes carrying `role`, ascending
    pub fn nodes_with_role(&self, role: NodeRole) -> Vec<usize> {
        self.nodes
            .iter()
            .filter(|(_, attrs)| attrs.role == Some(role))
            .map(|(id, _)| *id)
            .collect()
    }

    /// All edges carrying `role`, in the order of [`edges`](Self::edges)
    pub fn edges_with_role(&self, role: EdgeRole) -> Vec<(usize, usize)> {
        self.edges()
            .into_iter()
            .filter(|(_, _, attrs)| attrs.role == Some(role))
            .map(|(a, b, _)| (a, b))
            .collect()
    }

    /// Copy of this topology with every edge carrying `role` removed
    pub fn without_edges_of_role(&self, role: EdgeRole) -> Self
    where
        Ty: Clone,
    {
        let mut copy = self.clone();
        for (a, b) in self.edges_with_role(role) {
            copy.graph.remove_edge(a, b);
        }
        copy
    }

    /// Connected components (weakly connected for directed graphs).
    ///
    /// Each component lists its node ids in ascending order; components are
    /// ordered by their smallest id.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let bound = match self.nodes.keys().next_back() {
            Some(max) => max + 1,
            None => return Vec::new(),
        };
        let mut sets = UnionFind::<usize>::new(bound);
        for (a, b, _) in self.graph.all_edges() {
            sets.union(a, b);
        }

        let mut components: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for id in self.nodes.keys() {
            components.entry(sets.find(*id)).or_default().push(*id);
        }
        let mut components: Vec<Vec<usize>> = components.into_values().collect();
        components.sort_unstable_by_key(|c| c.first().copied());
        components
    }

    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    pub fn summary(&self) -> TopologySummary {
        TopologySummary {
            name: self.name.clone(),
            topology_type: self.meta.topology_type,
            directed: Ty::is_directed(),
            nodes: self.node_count(),
            edges: self.edge_count(),
        }
    }
}

impl Topology {
    /// Number of incident edges, counting a self-loop once
    pub fn degree(&self, id: usize) -> usize {
        self.neighbors(id).len()
    }
}

impl DirectedTopology {
    pub fn out_neighbors(&self, id: usize) -> Vec<usize> {
        self.neighbors(id)
    }

    pub fn in_neighbors(&self, id: usize) -> Vec<usize> {
        if !self.graph.contains_node(id) {
            return Vec::new();
        }
        let mut neighbors: Vec<usize> = self
            .graph
            .neighbors_directed(id, Direction::Incoming)
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    pub fn out_degree(&self, id: usize) -> usize {
        self.out_neighbors(id).len()
    }

    pub fn in_degree(&self, id: usize) -> usize {
        self.in_neighbors(id).len()
    }
}

impl<Ty: EdgeType> PartialEq for TopologyGraph<Ty> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.meta == other.meta
            && self.nodes == other.nodes
            && self.edges() == other.edges()
    }
}

impl<Ty: EdgeType> Eq for TopologyGraph<Ty> {}
