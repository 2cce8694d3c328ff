//! Ontograf store
//!
//! Concrete [`OntologyStore`](ontograf_core::OntologyStore) implementations:
//! - [`MemoryOntology`]: insertion-ordered in-memory ontology with a builder API
//! - [`TripleOntologyLoader`]: classifies OWL-in-RDF triples into a [`MemoryOntology`]

pub mod loader;
pub mod memory;

pub use loader::{local_name, vocabulary, OntologyLoader, TripleOntologyLoader};
pub use memory::MemoryOntology;
