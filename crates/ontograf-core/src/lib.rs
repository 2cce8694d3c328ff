//! Ontograf core
//!
//! Shared vocabulary for the neighborhood-graph stack:
//! - classified ontology values ([`model::ClassExpression`], [`model::Restriction`])
//! - the [`store::OntologyStore`] adapter trait
//! - error types

pub mod model;
pub mod store;

pub use model::{ClassExpression, EntityId, EntityKind, Filler, Restriction, RestrictionKind, Triple};
pub use store::{FacetResult, OntologyStore};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Per-entity accessor of an ontology store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Subclasses,
    IsA,
    EquivalentTo,
    Instances,
    PrimaryType,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facet::Subclasses => "subclasses",
            Facet::IsA => "is_a",
            Facet::EquivalentTo => "equivalent_to",
            Facet::Instances => "instances",
            Facet::PrimaryType => "primary_type",
        };
        f.write_str(name)
    }
}

/// A facet could not be read for an entity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("facet {facet} unavailable for {entity}: {reason}")]
pub struct FacetUnavailable {
    pub entity: EntityId,
    pub facet: Facet,
    pub reason: String,
}

impl FacetUnavailable {
    pub fn new(entity: EntityId, facet: Facet, reason: impl Into<String>) -> Self {
        Self {
            entity,
            facet,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum OntografError {
    #[error("Loader error: {0}")]
    LoaderError(String),

    #[error("Facet error: {0}")]
    Facet(#[from] FacetUnavailable),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, OntografError>;
