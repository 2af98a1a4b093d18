//! Dumbbell topology: two star-shaped bells joined by a path.

use log::debug;
use petgraph::Undirected;

use crate::error::TopologyError;
use crate::graph::{EdgeAttrs, EdgeRole, NodeAttrs, NodeRole, Topology, TopologyBuilder, TopologyType};
use crate::utils::validation::{require_at_least, require_buildable};

/// Dumbbell topology of `2*m1 + m2` nodes.
///
/// The nodes are numbered in three zones:
///  * `0 .. m1`: left bell leaves, each connected to node `m1`
///  * `m1 .. m1+m2`: the core path, node `v` connected to `v+1`
///  * `m1+m2 .. 2*m1+m2`: right bell leaves, each connected to node `m1+m2-1`
///
/// The first and last core nodes double as the hubs of the left and right
/// bells. Nodes and edges are tagged `left_bell`, `core` or `right_bell`.
/// This differs from a barbell graph, whose bells are complete graphs.
///
/// # Errors
/// `InvalidParameter` if `m1 < 2`, `m2 < 1`, or the topology is too large to
/// build.
pub fn dumbbell_topology(m1: i64, m2: i64) -> Result<Topology, TopologyError> {
    let bell = require_at_least("m1", m1, 2, "Invalid graph description, m1 should be >= 2")?;
    let path = require_at_least("m2", m2, 1, "Invalid graph description, m2 should be >= 1")?;
    let order = bell.checked_mul(2).and_then(|n| n.checked_add(path));
    let (param, value) = if m2 > m1 { ("m2", m2) } else { ("m1", m1) };
    let order = require_buildable(param, value, order, order.map(|n| n - 1))?;

    let left_hub = bell;
    let right_hub = bell + path - 1;

    let mut builder = TopologyBuilder::<Undirected>::new();
    builder
        .set_name(format!("dumbbell_topology({},{})", m1, m2))
        .set_type(TopologyType::Dumbbell);

    // left bell
    builder.add_node(left_hub, NodeAttrs::default());
    for v in 0..bell {
        builder.add_node(v, NodeAttrs::with_role(NodeRole::LeftBell));
        builder.add_edge(v, left_hub, EdgeAttrs::with_role(EdgeRole::LeftBell));
    }

    // right bell
    for v in right_hub + 1..order {
        builder.add_node(v, NodeAttrs::with_role(NodeRole::RightBell));
        builder.add_edge(v, right_hub, EdgeAttrs::with_role(EdgeRole::RightBell));
    }

    // connecting path; with m2 == 1 both hubs are the same node
    for v in left_hub..right_hub {
        builder.add_node(v, NodeAttrs::with_role(NodeRole::Core));
        builder.add_edge(v, v + 1, EdgeAttrs::with_role(EdgeRole::Core));
    }
    builder.add_node(right_hub, NodeAttrs::with_role(NodeRole::Core));

    let topology = builder.build();
    debug!("Generated {}", topology.summary());
    Ok(topology)
}
