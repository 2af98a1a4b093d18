//! # Simtopo - Canonical network topologies for network simulations
//!
//! This library generates deterministic, labeled network topology graphs for
//! use as inputs to network simulators and analysis tools.
//!
//! ## Overview
//!
//! Each generator is a pure function of a few integer parameters. It
//! validates them, builds a graph, tags nodes and edges with the structural
//! metadata downstream simulation logic needs (role, depth, segment), and
//! returns the graph. Identical parameters always produce identical graphs.
//!
//! ## Topology Families
//!
//! - **Ring / Line**: cycle or path of `n` nodes
//! - **Star**: hub `0` tagged `root` with `n` spokes tagged `leaf`
//! - **Full mesh**: complete graph of `n` nodes
//! - **k-ary tree**: balanced tree, nodes tagged `root`/`intermediate`/`leaf` with their depth
//! - **Dumbbell**: two star-shaped bells joined by a path, tagged `left_bell`/`core`/`right_bell`
//! - **Chord**: directed DHT overlay with finger tables and optional successor lists
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `graph`: attributed graph type, attribute records and builder
//! - `topology`: the generators and the dynamic entry point
//! - `config`: topology request documents
//! - `config_loader`: YAML/JSON loading and batch generation
//! - `utils`: parameter validation helpers
//! - `error`: error types
//!
//! ## Example Usage
//!
//! ```rust
//! use simtopo::graph::NodeRole;
//! use simtopo::topology::{chord_topology, k_ary_tree_topology};
//!
//! let tree = k_ary_tree_topology(2, 3)?;
//! assert_eq!(tree.node_count(), 15);
//! assert_eq!(tree.nodes_with_role(NodeRole::Leaf).len(), 8);
//!
//! let chord = chord_topology(2, 1)?;
//! assert_eq!(chord.out_neighbors(3), vec![0, 1]);
//! # Ok::<(), simtopo::TopologyError>(())
//! ```
//!
//! ## Configuration Format
//!
//! Batches of topologies can be described in YAML (or JSON):
//!
//! ```yaml
//! topologies:
//!   - name: backbone
//!     kind: k_ary_tree
//!     params: { k: 2, h: 3 }
//!   - kind: chord
//!     params: { m: 4, r: 3 }
//! ```
//!
//! ```rust,no_run
//! use simtopo::config_loader;
//! use std::path::Path;
//!
//! let generated = config_loader::load_and_generate(Path::new("topologies.yaml"))?;
//! for entry in &generated {
//!     println!("{}: {}", entry.label, entry.topology.summary());
//! }
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```
//!
//! ## Error Handling
//!
//! Generators return [`TopologyError`], which distinguishes parameters of
//! the wrong type from integers outside the accepted range. Errors are
//! raised before any graph is built. Configuration loading returns
//! `color_eyre::Result` with context describing the failing file or request.

pub mod config;
pub mod config_loader;
pub mod error;
pub mod graph;
pub mod topology;
pub mod utils;

pub use error::{ErrorKind, TopologyError};
pub use graph::{DirectedTopology, Topology};
