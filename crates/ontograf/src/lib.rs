//! # Ontograf - Ontology Neighborhood Graphs
//!
//! Ontograf extracts a bounded, human-inspectable neighborhood graph around one
//! concept of an OWL class hierarchy. The starting concept is found from a
//! free-text keyword by approximate string matching; the result is a
//! deduplicated list of `(source, label, target)` name triples ready for
//! directed-graph rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use ontograf::prelude::*;
//!
//! let mut onto = MemoryOntology::new();
//! let topping = onto.add_class("Topping");
//! let cheese = onto.add_class("Cheese");
//! let tomato = onto.add_class("Tomato");
//! onto.add_is_a(topping, Restriction::only("hasIngredient", [cheese, tomato]));
//!
//! let graph = build_neighborhood("Toping", &onto);
//! assert_eq!(graph.len(), 2);
//! assert_eq!(graph.edges()[0].label, "hasIngredient, only");
//! ```
//!
//! ## Architecture
//!
//! - **`ontograf-core`**: classified ontology values and the `OntologyStore` trait
//! - **`ontograf-store`**: in-memory store and OWL triple loader
//! - **`ontograf-graph`**: resolution, extraction, pairing, expansion, filtering,
//!   stringification and DOT/JSON hand-off
//!
//! ## Feature Flags
//!
//! - `full` (default): all crates
//! - `core`: data model only
//! - `store`: data model and stores
//! - `graph`: data model and engine

#[cfg(feature = "ontograf-core")]
pub use ontograf_core as core;

#[cfg(feature = "ontograf-store")]
pub use ontograf_store as store;

#[cfg(feature = "ontograf-graph")]
pub use ontograf_graph as graph;

#[cfg(feature = "ontograf-core")]
pub use ontograf_core::{model, OntografError};

#[cfg(feature = "ontograf-graph")]
pub use ontograf_graph::{build_neighborhood, Neighborhood, NeighborhoodBuilder};

// Commonly used external dependencies
pub use anyhow;
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "ontograf-core")]
    pub use ontograf_core::{
        ClassExpression, EntityId, Facet, Filler, OntografError, OntologyStore, Restriction, RestrictionKind,
        Triple,
    };

    #[cfg(feature = "ontograf-store")]
    pub use ontograf_store::{MemoryOntology, OntologyLoader, TripleOntologyLoader};

    #[cfg(feature = "ontograf-graph")]
    pub use ontograf_graph::{
        build_neighborhood, DotRenderer, Edge, EntityResolver, Graph, GraphFilter, GraphRenderer, JsonRenderer,
        NamedEdge, NamedGraph, Neighborhood, NeighborhoodBuilder, NeighborhoodExpander, Node, OntografConfig,
        Relation, RelationExtractor, Resolution, Stringifier,
    };
}
