//! Presentation filter: individuals are never edge sources

use crate::edge::{Graph, Node};
use ontograf_core::model::EntityId;
use ontograf_core::store::OntologyStore;
use std::collections::HashSet;
use tracing::debug;

/// Removes edges sourced at an individual
///
/// Edges whose *target* is an individual are kept.
#[derive(Debug, Clone, Default)]
pub struct GraphFilter {
    individuals: HashSet<EntityId>,
}

impl GraphFilter {
    pub fn new(individuals: impl IntoIterator<Item = EntityId>) -> Self {
        Self {
            individuals: individuals.into_iter().collect(),
        }
    }

    pub fn from_store<S: OntologyStore + ?Sized>(store: &S) -> Self {
        Self::new(store.individuals())
    }

    pub fn is_individual(&self, node: &Node) -> bool {
        node.as_entity().map_or(false, |id| self.individuals.contains(&id))
    }

    pub fn apply(&self, mut graph: Graph) -> Graph {
        let before = graph.len();
        graph.retain(|edge| !self.is_individual(&edge.source));
        debug!("Filtered {} individual-sourced edges", before - graph.len());
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::{Edge, Relation};

    const DOG: EntityId = EntityId(0);
    const REX: EntityId = EntityId(1);

    fn graph() -> Graph {
        vec![
            Edge::new(DOG, Relation::HasIndividual, REX),
            Edge::new(REX, Relation::SubclassOf, DOG),
            Edge::new(DOG, Relation::HasSubclass, REX),
        ]
        .into()
    }

    #[test]
    fn test_removes_individual_sources_only() {
        let filtered = GraphFilter::new([REX]).apply(graph());
        assert_eq!(
            filtered.edges(),
            &[Edge::new(DOG, Relation::HasIndividual, REX), Edge::new(DOG, Relation::HasSubclass, REX)]
        );
    }

    #[test]
    fn test_idempotent() {
        let filter = GraphFilter::new([REX]);
        let once = filter.apply(graph());
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_individual_set_keeps_everything() {
        assert_eq!(GraphFilter::default().apply(graph()), graph());
    }
}
