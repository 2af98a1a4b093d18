use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::TopologyError;
use crate::topology::{generate, GeneratedTopology, ParamValue, TopologyKind};

/// A document listing the topologies to generate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyConfig {
    pub topologies: Vec<TopologyRequest>,
}

/// One topology to generate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyRequest {
    /// Optional label, unique within the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: TopologyKind,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

impl TopologyConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topologies.is_empty() {
            return Err(ConfigError::EmptyConfig);
        }

        let mut seen = HashSet::new();
        for name in self.topologies.iter().filter_map(|t| t.name.as_deref()) {
            if name.is_empty() {
                return Err(ConfigError::InvalidRequest(
                    "topology name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateName(name.to_string()));
            }
        }

        Ok(())
    }
}

impl TopologyRequest {
    pub fn new(kind: TopologyKind) -> Self {
        Self {
            name: None,
            kind,
            params: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Generate the requested topology
    pub fn generate(&self) -> Result<GeneratedTopology, TopologyError> {
        generate(self.kind, &self.params)
    }

    /// The label if one was given, the family name otherwise
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.kind.as_str())
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration lists no topologies")]
    EmptyConfig,
    #[error("Duplicate topology name: {0}")]
    DuplicateName(String),
    #[error("Invalid topology request: {0}")]
    InvalidRequest(String),
}
