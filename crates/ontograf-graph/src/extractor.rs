//! Local relation extraction for a single entity

use crate::edge::{Edge, Graph, Node, Relation};
use crate::pairing;
use itertools::Itertools;
use ontograf_core::model::{ClassExpression, EntityId, Filler, Restriction, RestrictionKind};
use ontograf_core::store::{FacetResult, OntologyStore};
use tracing::{debug, warn};

/// Builds the local edge set of one entity
pub struct RelationExtractor<'s, S: OntologyStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: OntologyStore + ?Sized> RelationExtractor<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Hierarchy, decomposed equivalences, direct restrictions and individuals,
    /// closed under subclass pairing
    pub fn extract(&self, entity: EntityId) -> Graph {
        let mut graph = Graph::new();

        self.subclasses(entity, &mut graph);
        self.equivalences(entity, &mut graph);
        self.is_a(entity, &mut graph);
        self.individuals(entity, &mut graph);

        pairing::normalize(&mut graph);

        debug!("Extracted {} local edges for {}", graph.len(), entity);
        graph
    }

    fn subclasses(&self, entity: EntityId, graph: &mut Graph) {
        for sub in or_empty(self.store.subclasses(entity)) {
            graph.insert(Edge::new(entity, Relation::HasSubclass, sub));
            graph.insert(Edge::new(sub, Relation::SubclassOf, entity));
        }
    }

    /// Only conjunctions are decomposed, and only their restriction members
    fn equivalences(&self, entity: EntityId, graph: &mut Graph) {
        for expression in or_empty(self.store.equivalent_to(entity)) {
            if let ClassExpression::Intersection(members) = expression {
                for member in members {
                    if let ClassExpression::Restriction(restriction) = member {
                        self.restriction(entity, &restriction, graph);
                    }
                }
            }
        }
    }

    fn is_a(&self, entity: EntityId, graph: &mut Graph) {
        for item in or_empty(self.store.is_a(entity)) {
            match item {
                ClassExpression::Named(parent) => {
                    graph.insert(Edge::new(entity, Relation::SubclassOf, parent));
                }
                ClassExpression::Restriction(restriction) => {
                    self.restriction(entity, &restriction, graph);
                }
                ClassExpression::Union(_) | ClassExpression::Intersection(_) => {
                    debug!("Skipping anonymous is-a expression on {}", entity);
                }
            }
        }
    }

    /// Individuals whose most specific declared type is exactly `entity`
    fn individuals(&self, entity: EntityId, graph: &mut Graph) {
        for individual in or_empty(self.store.instances(entity)) {
            let primary = self.store.primary_type(individual).unwrap_or_else(|e| {
                warn!("{}", e);
                None
            });
            if primary == Some(entity) {
                graph.insert(Edge::new(entity, Relation::HasIndividual, individual));
            }
        }
    }

    /// `only` fans out over the union of fillers; every other kind is one edge
    fn restriction(&self, entity: EntityId, restriction: &Restriction, graph: &mut Graph) {
        let relation = Relation::restriction(restriction.property.clone(), restriction.kind);

        let expression = match &restriction.filler {
            Filler::Literal(value) => {
                graph.insert(Edge::new(entity, relation, Node::Literal(value.clone())));
                return;
            }
            Filler::Class(expression) => expression,
        };

        let targets: Vec<EntityId> = expression.named_members().into_iter().unique().collect();
        match targets.len() {
            0 => {
                warn!("Restriction {} on {} has no named filler, skipped", relation, entity);
            }
            1 => {
                graph.insert(Edge::new(entity, relation, targets[0]));
            }
            _ if restriction.kind == RestrictionKind::Only => {
                for target in targets {
                    graph.insert(Edge::new(entity, relation.clone(), target));
                }
            }
            _ => {
                debug!("Union filler of {} on {} kept as one target", relation, entity);
                graph.insert(Edge::new(entity, relation, Node::Union(targets)));
            }
        }
    }
}

/// Absent facets read as empty
fn or_empty<T>(result: FacetResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!("{}", e);
        Vec::new()
    })
}
