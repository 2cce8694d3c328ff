//! Neighborhood query orchestration
//!
//! keyword → resolve → extract + pair → expand → filter → stringify

use crate::config::OntografConfig;
use crate::edge::NamedGraph;
use crate::expander::NeighborhoodExpander;
use crate::extractor::RelationExtractor;
use crate::filter::GraphFilter;
use crate::render::{DotRenderer, GraphRenderer};
use crate::resolver::{EntityResolver, Resolution};
use crate::stringify::Stringifier;
use ontograf_core::model::EntityId;
use ontograf_core::store::OntologyStore;
use ontograf_core::OntografError;
use serde::Serialize;
use tracing::info;

/// Result of a neighborhood query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighborhood {
    /// Resolved focus class
    pub focus: Resolution,
    pub graph: NamedGraph,
}

impl Neighborhood {
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Runs neighborhood queries against one store
pub struct NeighborhoodBuilder<'s, S: OntologyStore + ?Sized> {
    store: &'s S,
    config: OntografConfig,
}

impl<'s, S: OntologyStore + ?Sized> NeighborhoodBuilder<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            config: OntografConfig::default(),
        }
    }

    pub fn with_config(mut self, config: OntografConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &OntografConfig {
        &self.config
    }

    /// Resolve `keyword` and build the neighborhood of the best match;
    /// an unresolved keyword yields an empty graph
    pub fn build(&self, keyword: &str) -> Neighborhood {
        let focus = EntityResolver::new(self.config.resolver.clone()).resolve(keyword, self.store);
        let graph = match focus.entity() {
            Some(entity) => self.build_for(entity),
            None => NamedGraph::new(),
        };

        info!("Neighborhood for '{}': {:?}, {} edges", keyword, focus.entity(), graph.len());
        Neighborhood { focus, graph }
    }

    /// Neighborhood of an already-known entity
    pub fn build_for(&self, entity: EntityId) -> NamedGraph {
        let local = RelationExtractor::new(self.store).extract(entity);
        let full = NeighborhoodExpander::new(self.store).expand(entity, local);
        let filtered = GraphFilter::from_store(self.store).apply(full);
        Stringifier::new(self.store).stringify(&filtered)
    }

    /// Build and render as Graphviz DOT
    pub fn render_dot(&self, keyword: &str) -> Result<String, OntografError> {
        let neighborhood = self.build(keyword);
        DotRenderer::new(self.config.render.clone()).render(&neighborhood.graph)
    }
}

/// Neighborhood graph of the class best matching `keyword`, with default settings
pub fn build_neighborhood<S: OntologyStore + ?Sized>(keyword: &str, store: &S) -> NamedGraph {
    NeighborhoodBuilder::new(store).build(keyword).graph
}
