//! Topology construction.
//!
//! Generators own a [`TopologyBuilder`] for the duration of a single call,
//! issue a deterministic sequence of insertions and finish with
//! [`TopologyBuilder::build`]. Inserting a node or edge that already exists
//! never duplicates it: node attributes are merged and edge attributes are
//! replaced, last write wins.

use petgraph::graphmap::GraphMap;
use petgraph::EdgeType;
use std::collections::BTreeMap;

use super::attributes::{EdgeAttrs, GraphMeta, NodeAttrs, TopologyType};
use super::topology::TopologyGraph;

/// Single-use builder for a [`TopologyGraph`]
#[derive(Debug)]
pub struct TopologyBuilder<Ty: EdgeType> {
    name: String,
    meta: GraphMeta,
    graph: GraphMap<usize, EdgeAttrs, Ty>,
    nodes: BTreeMap<usize, NodeAttrs>,
}

impl<Ty: EdgeType> Default for TopologyBuilder<Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ty: EdgeType> TopologyBuilder<Ty> {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            meta: GraphMeta::default(),
            graph: GraphMap::new(),
            nodes: BTreeMap::new(),
        }
    }

    /// Path `0 - 1 - ... - (n-1)`
    pub fn path(n: usize) -> Self {
        let mut builder = Self::new();
        for v in 0..n {
            builder.add_node(v, NodeAttrs::default());
        }
        for v in 1..n {
            builder.add_edge(v - 1, v, EdgeAttrs::default());
        }
        builder
    }

    /// Hub 0 connected to each of the spokes `1..=n`
    pub fn star(n: usize) -> Self {
        let mut builder = Self::new();
        builder.add_node(0, NodeAttrs::default());
        for v in 1..=n {
            builder.add_edge(0, v, EdgeAttrs::default());
        }
        builder
    }

    /// Every pair of the nodes `0..n` connected once
    pub fn complete(n: usize) -> Self {
        let mut builder = Self::new();
        for v in 0..n {
            builder.add_node(v, NodeAttrs::default());
        }
        for u in 0..n {
            for v in u + 1..n {
                builder.add_edge(u, v, EdgeAttrs::default());
            }
        }
        builder
    }

    /// Balanced tree with branching factor `k` and height `h`.
    ///
    /// Ids are assigned breadth-first: the root is 0 and the children of node
    /// `i` are `k*i+1 ..= k*i+k`, so every depth level occupies a contiguous,
    /// ascending id range. A tree with `k == 0` is the lone root.
    ///
    /// Returns `None` when the node count overflows `usize`.
    pub fn balanced_tree(k: usize, h: u32) -> Option<Self> {
        let order = balanced_tree_order(k, h)?;
        let mut builder = Self::new();
        builder.add_node(0, NodeAttrs::default());
        for child in 1..order {
            builder.add_edge((child - 1) / k, child, EdgeAttrs::default());
        }
        Some(builder)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_type(&mut self, topology_type: TopologyType) -> &mut Self {
        self.meta.topology_type = Some(topology_type);
        self
    }

    pub fn set_graph_attr(&mut self, key: impl Into<String>, value: u64) -> &mut Self {
        self.meta.params.insert(key.into(), value);
        self
    }

    /// Add `id`, or merge `attrs` into it if it already exists.
    pub fn add_node(&mut self, id: usize, attrs: NodeAttrs) {
        self.graph.add_node(id);
        self.nodes.entry(id).or_default().merge(attrs);
    }

    /// Add the edge `a -> b` (or `a - b`), adding missing endpoints.
    ///
    /// Returns `false` when the edge already existed; its attributes are then
    /// replaced by `attrs`.
    pub fn add_edge(&mut self, a: usize, b: usize, attrs: EdgeAttrs) -> bool {
        self.nodes.entry(a).or_default();
        self.nodes.entry(b).or_default();
        self.graph.add_edge(a, b, attrs).is_none()
    }

    pub fn build(self) -> TopologyGraph<Ty> {
        TopologyGraph {
            name: self.name,
            meta: self.meta,
            graph: self.graph,
            nodes: self.nodes,
        }
    }
}

/// Node count `(k^(h+1)-1)/(k-1)` of a balanced `k`-ary tree of height `h`.
///
/// Returns `None` when the count does not fit in `usize`.
pub fn balanced_tree_order(k: usize, h: u32) -> Option<usize> {
    let mut order: usize = 1;
    let mut level: usize = 1;
    for _ in 0..h {
        level = level.checked_mul(k)?;
        order = order.checked_add(level)?;
    }
    Some(order)
}
