use crate::config::TopologyConfig;
use crate::topology::GeneratedTopology;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use std::path::Path;

/// Edge count above which a generated topology is reported as large
pub const LARGE_TOPOLOGY_EDGES: usize = 100_000;

/// Format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are read as JSON, everything else as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// A generated topology together with the label of its request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledTopology {
    pub label: String,
    pub topology: GeneratedTopology,
}

/// Parse and validate a configuration document
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<TopologyConfig> {
    let config: TopologyConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str::<TopologyConfig>(content)
            .wrap_err("Failed to parse YAML configuration")?,
        ConfigFormat::Json => serde_json::from_str::<TopologyConfig>(content)
            .wrap_err("Failed to parse JSON configuration")?,
    };

    config.validate()?;

    Ok(config)
}

/// Load and parse configuration from a YAML or JSON file
pub fn load_config(config_path: &Path) -> Result<TopologyConfig> {
    info!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)
        .wrap_err_with(|| format!("Failed to read configuration file '{}'", config_path.display()))?;

    let config = parse_config(&content, ConfigFormat::from_path(config_path))
        .wrap_err_with(|| format!("Invalid configuration file '{}'", config_path.display()))?;

    info!("Configuration lists {} topologies", config.topologies.len());

    Ok(config)
}

/// Generate every topology listed in the configuration, in order
pub fn generate_all(config: &TopologyConfig) -> Result<Vec<LabeledTopology>> {
    let mut generated = Vec::with_capacity(config.topologies.len());

    for (index, request) in config.topologies.iter().enumerate() {
        let topology = request.generate().wrap_err_with(|| {
            format!(
                "Failed to generate topology #{} '{}' ({})",
                index,
                request.label(),
                request.kind
            )
        })?;

        info!("Generated '{}': {}", request.label(), topology.summary());
        if topology.edge_count() > LARGE_TOPOLOGY_EDGES {
            warn!(
                "Topology '{}' has {} edges; downstream simulations may be slow",
                request.label(),
                topology.edge_count()
            );
        }

        generated.push(LabeledTopology {
            label: request.label().to_string(),
            topology,
        });
    }

    Ok(generated)
}

/// Load a configuration file and generate every topology it lists
pub fn load_and_generate(config_path: &Path) -> Result<Vec<LabeledTopology>> {
    let config = load_config(config_path)?;
    generate_all(&config)
}
