//! One-hop back-edge recovery
//!
//! Hierarchy and restriction facts are recorded at their source, so a relation
//! asserted on a neighbour and pointing at the origin is invisible from the
//! origin's own traversal. Re-extracting every neighbour once brings those
//! edges back.

use crate::edge::{Edge, Graph, Node};
use crate::extractor::RelationExtractor;
use ontograf_core::model::EntityId;
use ontograf_core::store::OntologyStore;
use tracing::debug;

pub struct NeighborhoodExpander<'s, S: OntologyStore + ?Sized> {
    extractor: RelationExtractor<'s, S>,
}

impl<'s, S: OntologyStore + ?Sized> NeighborhoodExpander<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            extractor: RelationExtractor::new(store),
        }
    }

    /// `local` plus every `(candidate, label, origin)` found in a candidate's
    /// own local graph, where candidates are the entity targets of `local`
    pub fn expand(&self, origin: EntityId, local: Graph) -> Graph {
        let origin_node = Node::Entity(origin);
        let candidates: Vec<EntityId> = local
            .targets()
            .filter_map(Node::as_entity)
            .filter(|candidate| *candidate != origin)
            .collect();

        let mut graph = local;
        let mut recovered = 0;
        for candidate in candidates {
            let sub_graph = self.extractor.extract(candidate);
            for edge in sub_graph.iter().filter(|e| e.target == origin_node) {
                if graph.insert(Edge::new(candidate, edge.relation.clone(), origin)) {
                    recovered += 1;
                }
            }
        }

        debug!("Recovered {} back-edges into {}", recovered, origin);
        graph
    }
}
