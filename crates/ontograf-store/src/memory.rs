//! In-memory ontology store

use ontograf_core::model::{ClassExpression, EntityId, EntityKind};
use ontograf_core::store::{FacetResult, OntologyStore};
use ontograf_core::{Facet, FacetUnavailable};
use std::collections::{HashMap, HashSet, VecDeque};

/// Stored entity with its asserted facets
#[derive(Debug, Clone)]
struct EntityRecord {
    name: String,
    kind: EntityKind,
    /// Asserted is-a items (classes only)
    is_a: Vec<ClassExpression>,
    /// Asserted equivalence expressions (classes only)
    equivalent_to: Vec<ClassExpression>,
    /// Declared types in assertion order (individuals only)
    types: Vec<EntityId>,
}

/// Insertion-ordered ontology held in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryOntology {
    /// IRI of the ontology itself
    iri: Option<String>,
    /// Entity table, indexed by `EntityId`
    entities: Vec<EntityRecord>,
    /// IRI index
    iri_index: HashMap<String, EntityId>,
    /// Facets that report unavailable for an entity
    unavailable: HashSet<(EntityId, Facet)>,
}

impl MemoryOntology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iri(iri: impl Into<String>) -> Self {
        Self {
            iri: Some(iri.into()),
            ..Self::default()
        }
    }

    pub fn iri(&self) -> Option<&str> {
        self.iri.as_deref()
    }

    /// Add (or look up) a class whose IRI is its name
    pub fn add_class(&mut self, name: &str) -> EntityId {
        self.add_class_with_iri(name, name)
    }

    /// Add (or look up) a class by IRI
    pub fn add_class_with_iri(&mut self, iri: &str, name: &str) -> EntityId {
        self.insert(iri, name, EntityKind::Class)
    }

    /// Add (or look up) an individual and append declared types
    pub fn add_individual(&mut self, name: &str, types: &[EntityId]) -> EntityId {
        self.add_individual_with_iri(name, name, types)
    }

    pub fn add_individual_with_iri(&mut self, iri: &str, name: &str, types: &[EntityId]) -> EntityId {
        let id = self.insert(iri, name, EntityKind::Individual);
        for ty in types {
            self.add_type(id, *ty);
        }
        id
    }

    /// Declare an additional type for an individual
    pub fn add_type(&mut self, individual: EntityId, class: EntityId) {
        if let Some(record) = self.entities.get_mut(individual.index()) {
            if !record.types.contains(&class) {
                record.types.push(class);
            }
        }
    }

    /// child ⊑ parent
    pub fn add_subclass_of(&mut self, child: EntityId, parent: EntityId) {
        self.add_is_a(child, ClassExpression::Named(parent));
    }

    /// Assert an is-a item (named parent or restriction)
    pub fn add_is_a(&mut self, entity: EntityId, expression: impl Into<ClassExpression>) {
        let expression = expression.into();
        if let Some(record) = self.entities.get_mut(entity.index()) {
            if !record.is_a.contains(&expression) {
                record.is_a.push(expression);
            }
        }
    }

    /// Assert an equivalence expression
    pub fn add_equivalent(&mut self, entity: EntityId, expression: impl Into<ClassExpression>) {
        let expression = expression.into();
        if let Some(record) = self.entities.get_mut(entity.index()) {
            if !record.equivalent_to.contains(&expression) {
                record.equivalent_to.push(expression);
            }
        }
    }

    /// Make a facet accessor report unavailable for an entity
    pub fn mark_unavailable(&mut self, entity: EntityId, facet: Facet) {
        self.unavailable.insert((entity, facet));
    }

    pub fn lookup(&self, iri: &str) -> Option<EntityId> {
        self.iri_index.get(iri).copied()
    }

    pub fn kind(&self, entity: EntityId) -> Option<EntityKind> {
        self.record(entity).map(|r| r.kind)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn insert(&mut self, iri: &str, name: &str, kind: EntityKind) -> EntityId {
        if let Some(id) = self.iri_index.get(iri) {
            return *id;
        }

        let id = EntityId::new(self.entities.len() as u32);
        self.entities.push(EntityRecord {
            name: name.to_string(),
            kind,
            is_a: Vec::new(),
            equivalent_to: Vec::new(),
            types: Vec::new(),
        });
        self.iri_index.insert(iri.to_string(), id);
        id
    }

    fn record(&self, entity: EntityId) -> Option<&EntityRecord> {
        self.entities.get(entity.index())
    }

    /// Record lookup guarded by the availability table
    fn facet(&self, entity: EntityId, facet: Facet) -> FacetResult<&EntityRecord> {
        if self.unavailable.contains(&(entity, facet)) {
            return Err(FacetUnavailable::new(entity, facet, "marked unavailable"));
        }
        self.record(entity)
            .ok_or_else(|| FacetUnavailable::new(entity, facet, "unknown entity"))
    }

    fn class_facet(&self, entity: EntityId, facet: Facet) -> FacetResult<&EntityRecord> {
        let record = self.facet(entity, facet)?;
        match record.kind {
            EntityKind::Class => Ok(record),
            EntityKind::Individual => Err(FacetUnavailable::new(entity, facet, "not a class")),
        }
    }

    fn ids_of_kind(&self, kind: EntityKind) -> Vec<EntityId> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, r)| r.kind == kind)
            .map(|(i, _)| EntityId::new(i as u32))
            .collect()
    }

    fn direct_subclasses(&self, entity: EntityId) -> Vec<EntityId> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, r)| r.kind == EntityKind::Class)
            .filter(|(_, r)| r.is_a.iter().any(|e| e.as_named() == Some(entity)))
            .map(|(i, _)| EntityId::new(i as u32))
            .collect()
    }

    /// The class and all its descendants (cycle-safe)
    fn descendants(&self, entity: EntityId) -> HashSet<EntityId> {
        let mut seen = HashSet::from([entity]);
        let mut queue = VecDeque::from([entity]);
        while let Some(current) = queue.pop_front() {
            for sub in self.direct_subclasses(current) {
                if seen.insert(sub) {
                    queue.push_back(sub);
                }
            }
        }
        seen
    }

    /// Classes reachable through named equivalences (cycle-safe)
    fn equivalence_closure(&self, entity: EntityId) -> Vec<EntityId> {
        let mut order = vec![entity];
        let mut seen = HashSet::from([entity]);
        let mut i = 0;
        while i < order.len() {
            let current = order[i];
            i += 1;
            // Named equivalence is symmetric: look at both sides
            let forward = self
                .record(current)
                .map(|r| r.equivalent_to.iter().filter_map(|e| e.as_named()).collect::<Vec<_>>())
                .unwrap_or_default();
            let backward = self
                .entities
                .iter()
                .enumerate()
                .filter(|(_, r)| r.equivalent_to.iter().any(|e| e.as_named() == Some(current)))
                .map(|(idx, _)| EntityId::new(idx as u32));
            for next in forward.into_iter().chain(backward) {
                if seen.insert(next) {
                    order.push(next);
                }
            }
        }
        order
    }
}

impl OntologyStore for MemoryOntology {
    fn name(&self, entity: EntityId) -> Option<&str> {
        self.record(entity).map(|r| r.name.as_str())
    }

    fn classes(&self) -> Vec<EntityId> {
        self.ids_of_kind(EntityKind::Class)
    }

    fn individuals(&self) -> Vec<EntityId> {
        self.ids_of_kind(EntityKind::Individual)
    }

    fn subclasses(&self, entity: EntityId) -> FacetResult<Vec<EntityId>> {
        self.class_facet(entity, Facet::Subclasses)?;
        Ok(self.direct_subclasses(entity))
    }

    fn is_a(&self, entity: EntityId) -> FacetResult<Vec<ClassExpression>> {
        let record = self.facet(entity, Facet::IsA)?;
        match record.kind {
            EntityKind::Class => Ok(record.is_a.clone()),
            // An individual's is-a list is its declared types
            EntityKind::Individual => Ok(record.types.iter().copied().map(ClassExpression::Named).collect()),
        }
    }

    fn equivalent_to(&self, entity: EntityId) -> FacetResult<Vec<ClassExpression>> {
        self.class_facet(entity, Facet::EquivalentTo)?;

        let mut expressions = Vec::new();
        for class in self.equivalence_closure(entity) {
            if let Some(record) = self.record(class) {
                for expression in &record.equivalent_to {
                    if expression.as_named() == Some(entity) || expressions.contains(expression) {
                        continue;
                    }
                    expressions.push(expression.clone());
                }
            }
        }
        Ok(expressions)
    }

    fn instances(&self, entity: EntityId) -> FacetResult<Vec<EntityId>> {
        self.class_facet(entity, Facet::Instances)?;

        let classes = self.descendants(entity);
        Ok(self
            .entities
            .iter()
            .enumerate()
            .filter(|(_, r)| r.kind == EntityKind::Individual)
            .filter(|(_, r)| r.types.iter().any(|t| classes.contains(t)))
            .map(|(i, _)| EntityId::new(i as u32))
            .collect())
    }

    fn primary_type(&self, individual: EntityId) -> FacetResult<Option<EntityId>> {
        let record = self.facet(individual, Facet::PrimaryType)?;
        Ok(record.types.first().copied())
    }
}
