//! Ontograf graph engine
//!
//! Extracts a bounded, human-inspectable neighborhood graph around one class of
//! an ontology:
//! - [`resolver`]: keyword → class by approximate string matching
//! - [`extractor`]: hierarchy, restriction and individual edges of one entity
//! - [`pairing`]: `subclass_of` / `has_subclass` closure
//! - [`expander`]: one-hop back-edge recovery
//! - [`filter`]: drops individual-sourced edges
//! - [`stringify`]: handles → comma-escaped display names
//! - [`render`]: DOT / JSON hand-off to external renderers
//!
//! ```rust
//! use ontograf_graph::build_neighborhood;
//! use ontograf_store::MemoryOntology;
//!
//! let mut onto = MemoryOntology::new();
//! let animal = onto.add_class("Animal");
//! let dog = onto.add_class("Dog");
//! onto.add_subclass_of(dog, animal);
//!
//! let graph = build_neighborhood("Dgo", &onto);
//! assert_eq!(graph.len(), 2);
//! ```

pub mod config;
pub mod edge;
pub mod expander;
pub mod extractor;
pub mod filter;
pub mod pairing;
pub mod pipeline;
pub mod render;
pub mod resolver;
pub mod stringify;

pub use config::{OntografConfig, RenderConfig, ResolverConfig, SimilarityMetric};
pub use edge::{Edge, Graph, NamedEdge, NamedGraph, Node, Relation};
pub use expander::NeighborhoodExpander;
pub use extractor::RelationExtractor;
pub use filter::GraphFilter;
pub use pipeline::{build_neighborhood, Neighborhood, NeighborhoodBuilder};
pub use render::{DotRenderer, GraphRenderer, JsonRenderer};
pub use resolver::{close_matches, sequence_ratio, Candidate, EntityResolver, Resolution};
pub use stringify::{escape_commas, Stringifier};
