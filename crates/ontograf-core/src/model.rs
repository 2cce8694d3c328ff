//! Ontology data model
//!
//! Everything the engine reads from an ontology is classified into the closed
//! variant set defined here before it reaches the traversal code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable handle for a named entity (class or individual).
///
/// Structural stages compare entities through this handle only; display names
/// are looked up at the very end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of named entity a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Class,
    Individual,
}

/// Restriction kind (∃, ∀, cardinalities, hasValue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestrictionKind {
    /// Existential: ∃R.C
    Some,
    /// Universal: ∀R.C
    Only,
    /// Exact cardinality: =n R.C
    Exactly,
    /// Minimum cardinality: ≥n R.C
    Min,
    /// Maximum cardinality: ≤n R.C
    Max,
    /// Has value: ∃R.{i}
    Value,
}

impl RestrictionKind {
    pub const ALL: [RestrictionKind; 6] = [
        RestrictionKind::Some,
        RestrictionKind::Only,
        RestrictionKind::Exactly,
        RestrictionKind::Min,
        RestrictionKind::Max,
        RestrictionKind::Value,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RestrictionKind::Some => "some",
            RestrictionKind::Only => "only",
            RestrictionKind::Exactly => "exactly",
            RestrictionKind::Min => "min",
            RestrictionKind::Max => "max",
            RestrictionKind::Value => "value",
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value side of a restriction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filler {
    /// A class expression (named class, union, ...)
    Class(Box<ClassExpression>),
    /// A data value or an unqualified cardinality
    Literal(String),
}

impl Filler {
    pub fn named(entity: EntityId) -> Self {
        Filler::Class(Box::new(ClassExpression::Named(entity)))
    }

    pub fn union(members: impl IntoIterator<Item = EntityId>) -> Self {
        Filler::Class(Box::new(ClassExpression::Union(
            members.into_iter().map(ClassExpression::Named).collect(),
        )))
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Filler::Literal(value.into())
    }
}

/// Property restriction: (property, kind, filler)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Restriction {
    /// Display name of the restricted property
    pub property: String,
    pub kind: RestrictionKind,
    pub filler: Filler,
}

impl Restriction {
    pub fn new(property: impl Into<String>, kind: RestrictionKind, filler: Filler) -> Self {
        Self {
            property: property.into(),
            kind,
            filler,
        }
    }

    pub fn some(property: impl Into<String>, value: EntityId) -> Self {
        Self::new(property, RestrictionKind::Some, Filler::named(value))
    }

    pub fn only(property: impl Into<String>, members: impl IntoIterator<Item = EntityId>) -> Self {
        Self::new(property, RestrictionKind::Only, Filler::union(members))
    }
}

/// Class expression, classified at the store boundary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassExpression {
    /// Named entity
    Named(EntityId),
    /// Property restriction
    Restriction(Restriction),
    /// C1 ⊔ C2 ⊔ ... ⊔ Cn
    Union(Vec<ClassExpression>),
    /// C1 ⊓ C2 ⊓ ... ⊓ Cn
    Intersection(Vec<ClassExpression>),
}

impl ClassExpression {
    pub fn as_named(&self) -> Option<EntityId> {
        match self {
            ClassExpression::Named(id) => Some(*id),
            _ => None,
        }
    }

    /// Named members of a union, or the entity itself for a named expression.
    pub fn named_members(&self) -> Vec<EntityId> {
        match self {
            ClassExpression::Named(id) => vec![*id],
            ClassExpression::Union(members) => members.iter().filter_map(|m| m.as_named()).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Restriction> for ClassExpression {
    fn from(restriction: Restriction) -> Self {
        ClassExpression::Restriction(restriction)
    }
}

/// RDF triple as handed over by an external parser
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}
