//! Node, edge and graph attribute records.
//!
//! Every topology family uses the same fixed-shape records. Fields that a
//! family does not use stay `None`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Role of a node within its topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Hub of a star or root of a tree
    Root,
    /// Non-root, non-leaf tree node
    Intermediate,
    /// Spoke of a star or deepest tree node
    Leaf,
    /// Leaf of the left dumbbell bell
    LeftBell,
    /// Node on the dumbbell path
    Core,
    /// Leaf of the right dumbbell bell
    RightBell,
}

impl NodeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Intermediate => "intermediate",
            Self::Leaf => "leaf",
            Self::LeftBell => "left_bell",
            Self::Core => "core",
            Self::RightBell => "right_bell",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Segment an edge belongs to (dumbbell only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRole {
    LeftBell,
    Core,
    RightBell,
}

impl EdgeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftBell => "left_bell",
            Self::Core => "core",
            Self::RightBell => "right_bell",
        }
    }
}

impl fmt::Display for EdgeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Family tag stored in the graph metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyType {
    Ring,
    Line,
    Star,
    FullMesh,
    Tree,
    Dumbbell,
}

impl TopologyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Line => "line",
            Self::Star => "star",
            Self::FullMesh => "full_mesh",
            Self::Tree => "tree",
            Self::Dumbbell => "dumbbell",
        }
    }
}

impl fmt::Display for TopologyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes carried by every node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttrs {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role: Option<NodeRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

impl NodeAttrs {
    pub fn with_role(role: NodeRole) -> Self {
        Self {
            role: Some(role),
            depth: None,
        }
    }

    pub fn with_role_and_depth(role: NodeRole, depth: u32) -> Self {
        Self {
            role: Some(role),
            depth: Some(depth),
        }
    }

    /// Overwrite the fields that are set in `other`, keeping the rest.
    pub fn merge(&mut self, other: NodeAttrs) {
        if other.role.is_some() {
            self.role = other.role;
        }
        if other.depth.is_some() {
            self.depth = other.depth;
        }
    }
}

/// Attributes carried by every edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role: Option<EdgeRole>,
}

impl EdgeAttrs {
    pub fn with_role(role: EdgeRole) -> Self {
        Self { role: Some(role) }
    }
}

/// Graph-level metadata: the family tag plus family-specific parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMeta {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub topology_type: Option<TopologyType>,
    #[serde(flatten)]
    pub params: BTreeMap<String, u64>,
}
