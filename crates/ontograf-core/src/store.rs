//! Ontology store adapter
//!
//! The engine never talks to an ontology library directly. Whatever backs the
//! ontology implements [`OntologyStore`] and hands back already-classified
//! values; any accessor may report [`FacetUnavailable`] instead of data.

use crate::model::{ClassExpression, EntityId};
use crate::FacetUnavailable;

/// Result of a per-entity facet read
pub type FacetResult<T> = Result<T, FacetUnavailable>;

/// Read-only view over a loaded ontology
pub trait OntologyStore {
    /// Display name of an entity
    fn name(&self, entity: EntityId) -> Option<&str>;

    /// All named classes, in declaration order
    fn classes(&self) -> Vec<EntityId>;

    /// All individuals, in declaration order
    fn individuals(&self) -> Vec<EntityId>;

    /// Direct subclasses of a class
    fn subclasses(&self, entity: EntityId) -> FacetResult<Vec<EntityId>>;

    /// Directly asserted is-a items (named parents and restrictions)
    fn is_a(&self, entity: EntityId) -> FacetResult<Vec<ClassExpression>>;

    /// Equivalence expressions of a class
    fn equivalent_to(&self, entity: EntityId) -> FacetResult<Vec<ClassExpression>>;

    /// Individuals typed by the class or by any of its descendants
    fn instances(&self, entity: EntityId) -> FacetResult<Vec<EntityId>>;

    /// First declared type of an individual
    fn primary_type(&self, individual: EntityId) -> FacetResult<Option<EntityId>>;

    /// Resolve a display name back to the first class carrying it
    fn class_named(&self, name: &str) -> Option<EntityId> {
        self.classes()
            .into_iter()
            .find(|id| self.name(*id) == Some(name))
    }

    /// Display names of all classes, aligned with [`OntologyStore::classes`]
    fn class_names(&self) -> Vec<String> {
        self.classes()
            .into_iter()
            .map(|id| self.name(id).map(str::to_string).unwrap_or_else(|| id.to_string()))
            .collect()
    }
}

impl<S: OntologyStore + ?Sized> OntologyStore for &S {
    fn name(&self, entity: EntityId) -> Option<&str> {
        (**self).name(entity)
    }

    fn classes(&self) -> Vec<EntityId> {
        (**self).classes()
    }

    fn individuals(&self) -> Vec<EntityId> {
        (**self).individuals()
    }

    fn subclasses(&self, entity: EntityId) -> FacetResult<Vec<EntityId>> {
        (**self).subclasses(entity)
    }

    fn is_a(&self, entity: EntityId) -> FacetResult<Vec<ClassExpression>> {
        (**self).is_a(entity)
    }

    fn equivalent_to(&self, entity: EntityId) -> FacetResult<Vec<ClassExpression>> {
        (**self).equivalent_to(entity)
    }

    fn instances(&self, entity: EntityId) -> FacetResult<Vec<EntityId>> {
        (**self).instances(entity)
    }

    fn primary_type(&self, individual: EntityId) -> FacetResult<Option<EntityId>> {
        (**self).primary_type(individual)
    }
}
