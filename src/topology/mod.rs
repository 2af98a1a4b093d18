//! Network topology generators.
//!
//! This module contains the generators for the seven canonical topology
//! families and the dynamic entry point used by configuration files.
//!
//! | Generator | Parameters | Result |
//! |---|---|---|
//! | [`ring_topology`] | `n` | undirected, `n` nodes |
//! | [`line_topology`] | `n` | undirected, `n` nodes |
//! | [`star_topology`] | `n` | undirected, `n+1` nodes |
//! | [`full_mesh_topology`] | `n` | undirected, `n` nodes |
//! | [`k_ary_tree_topology`] | `k`, `h` | undirected, `(k^(h+1)-1)/(k-1)` nodes |
//! | [`dumbbell_topology`] | `m1`, `m2` | undirected, `2*m1+m2` nodes |
//! | [`chord_topology`] | `m`, `r` | directed, `2^m` nodes |

pub mod chord;
pub mod dumbbell;
pub mod generate;
pub mod simple;
pub mod tree;
pub mod types;

// Re-export key types and functions for easier access
pub use chord::{chord_topology, chord_topology_default, DEFAULT_SUCCESSORS};
pub use dumbbell::dumbbell_topology;
pub use generate::generate;
pub use simple::{full_mesh_topology, line_topology, ring_topology, star_topology};
pub use tree::k_ary_tree_topology;
pub use types::{GeneratedTopology, ParamValue, TopologyKind};
