//! Entity handles → display names
//!
//! Runs last: every structural stage before it compares handles, never names.

use crate::edge::{Graph, NamedEdge, NamedGraph, Node};
use itertools::Itertools;
use ontograf_core::model::EntityId;
use ontograf_core::store::OntologyStore;
use tracing::{debug, warn};

pub struct Stringifier<'s, S: OntologyStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: OntologyStore + ?Sized> Stringifier<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Distinct entities sharing a display name collapse into one edge
    pub fn stringify(&self, graph: &Graph) -> NamedGraph {
        let named: NamedGraph = graph
            .iter()
            .map(|edge| {
                NamedEdge::new(
                    escape_commas(&self.node_name(&edge.source)),
                    escape_commas(&edge.relation.label()),
                    escape_commas(&self.node_name(&edge.target)),
                )
            })
            .collect();

        if named.len() < graph.len() {
            debug!("{} edges collapsed by display name", graph.len() - named.len());
        }
        named
    }

    fn node_name(&self, node: &Node) -> String {
        match node {
            Node::Entity(id) => self.entity_name(*id),
            Node::Union(members) => members.iter().map(|id| self.entity_name(*id)).join(" or "),
            Node::Literal(value) => value.clone(),
        }
    }

    fn entity_name(&self, id: EntityId) -> String {
        match self.store.name(id) {
            Some(name) => name.to_string(),
            None => {
                warn!("No display name for {}", id);
                id.to_string()
            }
        }
    }
}

/// `,` → `, ` so names stay distinguishable from `<property>,<kind>` labels
pub fn escape_commas(text: &str) -> String {
    text.replace(',', ", ")
}
