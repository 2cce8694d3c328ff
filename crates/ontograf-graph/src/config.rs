//! # Ontograf Configuration
//!
//! Knobs for keyword resolution and rendering. Every section has defaults, so a
//! partial JSON document is enough.

use ontograf_core::OntografError;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OntografConfig {
    /// Keyword resolution
    pub resolver: ResolverConfig,

    /// Renderer hand-off
    pub render: RenderConfig,
}

impl OntografConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, OntografError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| OntografError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), OntografError> {
        self.resolver.validate()
    }
}

/// String similarity used to rank class names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// Ratcliff/Obershelp matching-blocks ratio
    #[default]
    SequenceRatio,
    JaroWinkler,
    NormalizedLevenshtein,
}

/// Keyword resolution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Number of ranked candidates kept
    pub max_candidates: usize,

    /// Minimum similarity in `0.0..=1.0`
    pub cutoff: f64,

    pub metric: SimilarityMetric,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_candidates: 3,
            cutoff: 0.6,
            metric: SimilarityMetric::SequenceRatio,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), OntografError> {
        if self.max_candidates == 0 {
            return Err(OntografError::ConfigError("max_candidates must be > 0".to_string()));
        }
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(OntografError::ConfigError(format!(
                "cutoff must be in [0.0, 1.0], got {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Name of the emitted digraph
    pub graph_name: String,

    /// Graphviz node shape
    pub node_shape: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            graph_name: "KG".to_string(),
            node_shape: "box".to_string(),
        }
    }
}
