//! Edges and insertion-ordered unique edge sets

use ontograf_core::model::{EntityId, RestrictionKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Edge endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    Entity(EntityId),
    /// Anonymous union of named classes, kept as one target
    Union(Vec<EntityId>),
    /// Data value or unqualified cardinality
    Literal(String),
}

impl Node {
    pub fn as_entity(&self) -> Option<EntityId> {
        match self {
            Node::Entity(id) => Some(*id),
            Node::Union(_) | Node::Literal(_) => None,
        }
    }
}

impl From<EntityId> for Node {
    fn from(id: EntityId) -> Self {
        Node::Entity(id)
    }
}

/// Edge label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    SubclassOf,
    HasSubclass,
    HasIndividual,
    Restriction { property: String, kind: RestrictionKind },
}

impl Relation {
    pub const SUBCLASS_OF: &'static str = "subclass_of";
    pub const HAS_SUBCLASS: &'static str = "has_subclass";
    pub const HAS_INDIVIDUAL: &'static str = "has_individual";

    pub fn restriction(property: impl Into<String>, kind: RestrictionKind) -> Self {
        Relation::Restriction {
            property: property.into(),
            kind,
        }
    }

    /// The paired hierarchy relation, if any
    pub fn inverse(&self) -> Option<Relation> {
        match self {
            Relation::SubclassOf => Some(Relation::HasSubclass),
            Relation::HasSubclass => Some(Relation::SubclassOf),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::SubclassOf => f.write_str(Self::SUBCLASS_OF),
            Relation::HasSubclass => f.write_str(Self::HAS_SUBCLASS),
            Relation::HasIndividual => f.write_str(Self::HAS_INDIVIDUAL),
            Relation::Restriction { property, kind } => write!(f, "{},{}", property, kind),
        }
    }
}

/// Structural edge over entity handles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: Node,
    pub relation: Relation,
    pub target: Node,
}

impl Edge {
    pub fn new(source: impl Into<Node>, relation: Relation, target: impl Into<Node>) -> Self {
        Self {
            source: source.into(),
            relation,
            target: target.into(),
        }
    }

    /// The paired hierarchy edge, if the relation has one
    pub fn inverse(&self) -> Option<Edge> {
        self.relation.inverse().map(|relation| Edge {
            source: self.target.clone(),
            relation,
            target: self.source.clone(),
        })
    }
}

/// Display-level edge handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEdge {
    pub source: String,
    pub label: String,
    pub target: String,
}

impl NamedEdge {
    pub fn new(source: impl Into<String>, label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            target: target.into(),
        }
    }

    pub fn as_tuple(&self) -> (&str, &str, &str) {
        (&self.source, &self.label, &self.target)
    }
}

/// Ordered sequence of unique edges
#[derive(Debug, Clone)]
pub struct Graph<E: Eq + Hash + Clone = Edge> {
    edges: Vec<E>,
    seen: HashSet<E>,
}

/// Graph of display names
pub type NamedGraph = Graph<NamedEdge>;

impl<E: Eq + Hash + Clone> Graph<E> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Append an edge unless an equal one is already present
    pub fn insert(&mut self, edge: E) -> bool {
        if self.seen.contains(&edge) {
            return false;
        }
        self.seen.insert(edge.clone());
        self.edges.push(edge);
        true
    }

    pub fn contains(&self, edge: &E) -> bool {
        self.seen.contains(edge)
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Keep edges matching the predicate, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&E) -> bool) {
        let seen = &mut self.seen;
        self.edges.retain(|edge| {
            let kept = keep(edge);
            if !kept {
                seen.remove(edge);
            }
            kept
        });
    }

    pub fn into_edges(self) -> Vec<E> {
        self.edges
    }
}

impl Graph<Edge> {
    /// Edge targets in first-seen order, without repeats
    pub fn targets(&self) -> impl Iterator<Item = &Node> {
        use itertools::Itertools;
        self.edges.iter().map(|e| &e.target).unique()
    }
}

impl<E: Eq + Hash + Clone> Default for Graph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Eq + Hash + Clone> PartialEq for Graph<E> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges
    }
}

impl<E: Eq + Hash + Clone> Eq for Graph<E> {}

impl<E: Eq + Hash + Clone> Extend<E> for Graph<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for edge in iter {
            self.insert(edge);
        }
    }
}

impl<E: Eq + Hash + Clone> FromIterator<E> for Graph<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<E: Eq + Hash + Clone> From<Vec<E>> for Graph<E> {
    fn from(edges: Vec<E>) -> Self {
        edges.into_iter().collect()
    }
}

impl<E: Eq + Hash + Clone> From<Graph<E>> for Vec<E> {
    fn from(graph: Graph<E>) -> Self {
        graph.edges
    }
}

impl<E: Eq + Hash + Clone + Serialize> Serialize for Graph<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.edges.serialize(serializer)
    }
}

impl<'de, E: Eq + Hash + Clone + Deserialize<'de>> Deserialize<'de> for Graph<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<E>::deserialize(deserializer).map(Graph::from)
    }
}

impl<E: Eq + Hash + Clone> IntoIterator for Graph<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a, E: Eq + Hash + Clone> IntoIterator for &'a Graph<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
