//! Ring, line, star and full mesh topologies.
//!
//! These families take a single node count `n >= 1` and differ only in how
//! the nodes are connected.

use log::debug;
use petgraph::Undirected;

use crate::error::TopologyError;
use crate::graph::{EdgeAttrs, NodeAttrs, NodeRole, Topology, TopologyBuilder, TopologyType};
use crate::utils::validation::{require_at_least, require_buildable};

const POSITIVE_N: &str = "n argument must be a positive integer";

/// Ring topology of `n` nodes.
///
/// Node `v` is connected to `v+1` and node `n-1` closes the cycle back to
/// node 0. A single node gets a self-loop; two nodes share one edge.
///
/// # Errors
/// `InvalidParameter` if `n < 1` or the topology is too large to build.
pub fn ring_topology(n: i64) -> Result<Topology, TopologyError> {
    let nodes = require_at_least("n", n, 1, POSITIVE_N)?;
    require_buildable("n", n, Some(nodes), Some(nodes))?;

    let mut builder = TopologyBuilder::<Undirected>::path(nodes);
    builder.add_edge(nodes - 1, 0, EdgeAttrs::default());
    builder
        .set_name(format!("ring_topology({})", n))
        .set_type(TopologyType::Ring);

    let topology = builder.build();
    debug!("Generated {}", topology.summary());
    Ok(topology)
}

/// Line topology of `n` nodes: the path `0 - 1 - ... - (n-1)`.
///
/// # Errors
/// `InvalidParameter` if `n < 1` or the topology is too large to build.
pub fn line_topology(n: i64) -> Result<Topology, TopologyError> {
    let nodes = require_at_least("n", n, 1, POSITIVE_N)?;
    require_buildable("n", n, Some(nodes), Some(nodes - 1))?;

    let mut builder = TopologyBuilder::<Undirected>::path(nodes);
    builder
        .set_name(format!("line_topology({})", n))
        .set_type(TopologyType::Line);

    let topology = builder.build();
    debug!("Generated {}", topology.summary());
    Ok(topology)
}

/// Star (hub-and-spoke) topology of `n+1` nodes.
///
/// The hub has id 0 and role `root`; the spokes `1..=n` have role `leaf`.
///
/// # Errors
/// `InvalidParameter` if `n < 1` or the topology is too large to build.
pub fn star_topology(n: i64) -> Result<Topology, TopologyError> {
    let leaves = require_at_least("n", n, 1, POSITIVE_N)?;
    require_buildable("n", n, leaves.checked_add(1), Some(leaves))?;

    let mut builder = TopologyBuilder::<Undirected>::star(leaves);
    builder.add_node(0, NodeAttrs::with_role(NodeRole::Root));
    for v in 1..=leaves {
        builder.add_node(v, NodeAttrs::with_role(NodeRole::Leaf));
    }
    builder
        .set_name(format!("star_topology({})", n))
        .set_type(TopologyType::Star);

    let topology = builder.build();
    debug!("Generated {}", topology.summary());
    Ok(topology)
}

/// Fully connected mesh of `n` nodes.
///
/// # Errors
/// `InvalidParameter` if `n < 1` or the topology is too large to build.
pub fn full_mesh_topology(n: i64) -> Result<Topology, TopologyError> {
    let nodes = require_at_least("n", n, 1, POSITIVE_N)?;
    let edges = nodes.checked_mul(nodes - 1).map(|pairs| pairs / 2);
    require_buildable("n", n, Some(nodes), edges)?;

    let mut builder = TopologyBuilder::<Undirected>::complete(nodes);
    builder
        .set_name(format!("full_mesh_topology({})", n))
        .set_type(TopologyType::FullMesh);

    let topology = builder.build();
    debug!("Generated {}", topology.summary());
    Ok(topology)
}
