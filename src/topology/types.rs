//! Topology type definitions.
//!
//! This file contains the family names accepted by the dynamic generator
//! entry point, the loosely-typed parameter values it consumes, and the
//! undirected-or-directed result it returns.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::{DirectedTopology, Topology, TopologySummary};

/// Topology family to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    /// Cycle of `n` nodes
    Ring,
    /// Path of `n` nodes
    Line,
    /// Hub with `n` spokes
    Star,
    /// Complete graph of `n` nodes
    FullMesh,
    /// Balanced tree with branching factor `k` and height `h`
    KAryTree,
    /// Two `m1`-leaf bells joined by an `m2`-node path
    Dumbbell,
    /// Chord overlay with `m`-bit keys and `r` nearest successors
    Chord,
}

impl TopologyKind {
    pub const ALL: [TopologyKind; 7] = [
        Self::Ring,
        Self::Line,
        Self::Star,
        Self::FullMesh,
        Self::KAryTree,
        Self::Dumbbell,
        Self::Chord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Line => "line",
            Self::Star => "star",
            Self::FullMesh => "full_mesh",
            Self::KAryTree => "k_ary_tree",
            Self::Dumbbell => "dumbbell",
            Self::Chord => "chord",
        }
    }

    /// Names of the parameters the generator accepts, in call order
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Self::Ring | Self::Line | Self::Star | Self::FullMesh => &["n"],
            Self::KAryTree => &["k", "h"],
            Self::Dumbbell => &["m1", "m2"],
            Self::Chord => &["m", "r"],
        }
    }

    /// Returns true if the family produces a directed topology
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Chord)
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generator parameter as read from a configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "int {}", v),
            Self::Float(v) => write!(f, "float {}", v),
            Self::Bool(v) => write!(f, "bool {}", v),
            Self::Text(v) => write!(f, "string {:?}", v),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Result of the dynamic generator entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedTopology {
    Undirected(Topology),
    Directed(DirectedTopology),
}

impl GeneratedTopology {
    pub fn name(&self) -> &str {
        match self {
            Self::Undirected(t) => t.name(),
            Self::Directed(t) => t.name(),
        }
    }

    pub fn summary(&self) -> TopologySummary {
        match self {
            Self::Undirected(t) => t.summary(),
            Self::Directed(t) => t.summary(),
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed(_))
    }

    pub fn node_count(&self) -> usize {
        match self {
            Self::Undirected(t) => t.node_count(),
            Self::Directed(t) => t.node_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            Self::Undirected(t) => t.edge_count(),
            Self::Directed(t) => t.edge_count(),
        }
    }

    pub fn as_undirected(&self) -> Option<&Topology> {
        match self {
            Self::Undirected(t) => Some(t),
            Self::Directed(_) => None,
        }
    }

    pub fn as_directed(&self) -> Option<&DirectedTopology> {
        match self {
            Self::Directed(t) => Some(t),
            Self::Undirected(_) => None,
        }
    }
}

impl From<Topology> for GeneratedTopology {
    fn from(topology: Topology) -> Self {
        Self::Undirected(topology)
    }
}

impl From<DirectedTopology> for GeneratedTopology {
    fn from(topology: DirectedTopology) -> Self {
        Self::Directed(topology)
    }
}
