//! Chord distributed hash table overlay.
//!
//! In Chord both nodes and keys are identified by `m`-bit values placed on a
//! ring of `2^m` positions. Each node keeps a finger table of `m` entries, the
//! `u`-th pointing `2^u` positions ahead, which lets a lookup resolve in at
//! most `m` hops. Nodes may also keep a list of their `r` nearest successors
//! so the ring survives node failures.
//!
//! This generator only covers the fully populated ring (`n = 2^m` nodes).
//!
//! Reference: I. Stoica, R. Morris, D. Karger, M. F. Kaashoek,
//! H. Balakrishnan, "Chord: A Scalable Peer-to-peer Lookup Service for
//! Internet Applications", ACM SIGCOMM 2001.

use log::debug;
use petgraph::Directed;

use crate::error::TopologyError;
use crate::graph::{DirectedTopology, EdgeAttrs, NodeAttrs, TopologyBuilder};
use crate::utils::validation::{require_at_least, require_buildable, require_in_range};

/// Successor list length used when none is requested
pub const DEFAULT_SUCCESSORS: i64 = 1;

/// Chord topology with `m`-bit keys and an `r`-entry successor list.
///
/// Every node `v` gets a directed edge to `(v + 2^u) mod 2^m` for each
/// `u` in `0..m`. When `r > 2` it also gets edges to `(v + j) mod 2^m` for
/// `j` in `3..=r`; smaller successor lists are already covered by the
/// fingers. Offsets that coincide produce a single edge.
///
/// # Errors
/// `InvalidParameter` if `m < 2`, `r` is outside `1..=2^m-1`, or the overlay
/// is too large to build.
pub fn chord_topology(m: i64, r: i64) -> Result<DirectedTopology, TopologyError> {
    let bits = require_at_least("m", m, 2, "m must be an integer >= 2")?;
    let n = u32::try_from(bits)
        .ok()
        .and_then(|bits| 1usize.checked_shl(bits))
        .filter(|n| i64::try_from(*n).is_ok())
        .ok_or_else(|| TopologyError::invalid("m", m, "2^m nodes cannot be represented"))?;
    let successors = require_in_range(
        "r",
        r,
        1,
        n as i64 - 1,
        "r must be an integer and 1 <= r <= 2^m - 1",
    )?;

    require_buildable("m", m, Some(n), n.checked_mul(bits))?;
    require_buildable("r", r, Some(n), n.checked_mul(bits + successors.saturating_sub(2)))?;

    let mut builder = TopologyBuilder::<Directed>::new();
    builder
        .set_name(format!("chord_topology({},{})", m, r))
        .set_graph_attr("m", m as u64)
        .set_graph_attr("r", r as u64);

    for v in 0..n {
        builder.add_node(v, NodeAttrs::default());
    }

    // finger table
    for v in 0..n {
        for u in 0..bits {
            builder.add_edge(v, (v + (1 << u)) % n, EdgeAttrs::default());
        }
    }

    // successor list
    if successors > 2 {
        for v in 0..n {
            for offset in 3..=successors {
                builder.add_edge(v, (v + offset) % n, EdgeAttrs::default());
            }
        }
    }

    let topology = builder.build();
    debug!("Generated {}", topology.summary());
    Ok(topology)
}

/// Chord topology with the default successor list length
pub fn chord_topology_default(m: i64) -> Result<DirectedTopology, TopologyError> {
    chord_topology(m, DEFAULT_SUCCESSORS)
}
