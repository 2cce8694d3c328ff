//! Renderer hand-off
//!
//! Layout and image generation belong to external tools; this module only turns
//! a [`NamedGraph`] into text those tools consume.

use crate::config::RenderConfig;
use crate::edge::NamedGraph;
use itertools::Itertools;
use ontograf_core::OntografError;
use std::fmt::Write;

/// Turns a display-level graph into a textual artifact
pub trait GraphRenderer {
    fn render(&self, graph: &NamedGraph) -> Result<String, OntografError>;
}

/// Graphviz DOT: one node per distinct name, one labeled directed edge per triple
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    config: RenderConfig,
}

impl DotRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &NamedGraph) -> Result<String, OntografError> {
        let mut dot = String::new();
        write_dot(&mut dot, &self.config, graph).map_err(|e| OntografError::RenderError(e.to_string()))?;
        Ok(dot)
    }
}

fn write_dot(out: &mut String, config: &RenderConfig, graph: &NamedGraph) -> std::fmt::Result {
    writeln!(out, "digraph {} {{", quote(&config.graph_name))?;
    writeln!(out, "\tnode [shape={}]", quote(&config.node_shape))?;

    let nodes = graph
        .iter()
        .flat_map(|edge| [edge.source.as_str(), edge.target.as_str()])
        .unique();
    for node in nodes {
        writeln!(out, "\t{}", quote(node))?;
    }

    for edge in graph {
        writeln!(
            out,
            "\t{} -> {} [label={}]",
            quote(&edge.source),
            quote(&edge.target),
            quote(&edge.label)
        )?;
    }

    writeln!(out, "}}")
}

/// DOT double-quoted ID
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// JSON array of `{source, label, target}` objects
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl GraphRenderer for JsonRenderer {
    fn render(&self, graph: &NamedGraph) -> Result<String, OntografError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(graph)
        } else {
            serde_json::to_string(graph)
        };
        result.map_err(|e| OntografError::RenderError(e.to_string()))
    }
}
