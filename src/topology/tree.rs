//! Balanced k-ary tree topology.

use log::debug;
use petgraph::Undirected;

use crate::error::TopologyError;
use crate::graph::{balanced_tree_order, NodeAttrs, NodeRole, Topology, TopologyBuilder, TopologyType};
use crate::utils::validation::{require_at_least, require_buildable};

/// Balanced k-ary tree of height `h`.
///
/// The tree has `(k^(h+1)-1)/(k-1)` nodes with ids assigned breadth-first,
/// so each depth level is a contiguous run of ids. Every node carries:
///  * `type`: `root` for node 0, `leaf` at depth `h`, `intermediate` otherwise
///  * `depth`: distance from the root, `0..=h`
///
/// The graph metadata stores `k` and `h`.
///
/// # Errors
/// `InvalidParameter` if `k <= 1`, `h < 1`, or the tree is too large to build.
pub fn k_ary_tree_topology(k: i64, h: i64) -> Result<Topology, TopologyError> {
    let branching = require_at_least("k", k, 2, "Invalid k parameter. It should be > 1")?;
    let height = require_at_least("h", h, 1, "Invalid h parameter. It should be >= 1")?;
    let height = u32::try_from(height)
        .map_err(|_| TopologyError::invalid("h", h, "tree is too deep to be represented"))?;
    let order = balanced_tree_order(branching, height);
    require_buildable("h", h, order, order.map(|n| n - 1))?;

    let mut builder = TopologyBuilder::<Undirected>::balanced_tree(branching, height)
        .ok_or_else(|| TopologyError::invalid("h", h, "tree has too many nodes to be represented"))?;
    builder
        .set_name(format!("k_ary_tree_topology({},{})", k, h))
        .set_type(TopologyType::Tree)
        .set_graph_attr("k", k as u64)
        .set_graph_attr("h", h as u64);

    builder.add_node(0, NodeAttrs::with_role_and_depth(NodeRole::Root, 0));

    // Level d holds the next k^d ids
    let mut v = 1;
    let mut level_size = 1;
    for depth in 1..=height {
        let role = if depth == height {
            NodeRole::Leaf
        } else {
            NodeRole::Intermediate
        };
        level_size *= branching;
        for _ in 0..level_size {
            builder.add_node(v, NodeAttrs::with_role_and_depth(role, depth));
            v += 1;
        }
    }

    let topology = builder.build();
    debug!("Generated {}", topology.summary());
    Ok(topology)
}
