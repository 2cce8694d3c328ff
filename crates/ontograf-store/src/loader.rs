//! OWL ontology loader
//!
//! Builds a [`MemoryOntology`] from already-parsed OWL-in-RDF triples. Blank-node
//! class expressions are classified into [`ClassExpression`] variants here so the
//! engine only ever sees the closed variant set.

use crate::memory::MemoryOntology;
use ontograf_core::model::{ClassExpression, EntityId, Filler, Restriction, RestrictionKind, Triple};
use ontograf_core::OntografError;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// OWL/RDF vocabulary IRIs
pub mod vocabulary {
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    pub const OWL_UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    pub const OWL_INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    pub const OWL_ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";
    pub const OWL_SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    pub const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    pub const OWL_HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
    pub const OWL_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
    pub const OWL_QUALIFIED_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#qualifiedCardinality";
    pub const OWL_MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
    pub const OWL_MIN_QUALIFIED_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minQualifiedCardinality";
    pub const OWL_MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
    pub const OWL_MAX_QUALIFIED_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxQualifiedCardinality";

    /// Namespaces whose terms are never user classes
    pub const RESERVED_NAMESPACES: [&str; 3] = [
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        "http://www.w3.org/2000/01/rdf-schema#",
        "http://www.w3.org/2002/07/owl#",
    ];

    pub fn is_reserved(iri: &str) -> bool {
        RESERVED_NAMESPACES.iter().any(|ns| iri.starts_with(ns))
    }
}

/// Nesting limit for blank-node class expressions
const MAX_EXPRESSION_DEPTH: usize = 64;

/// Ontology loader trait
pub trait OntologyLoader {
    fn load_triples(&self, triples: &[Triple]) -> Result<MemoryOntology, OntografError>;
}

/// Default OWL triple loader
#[derive(Debug, Default, Clone, Copy)]
pub struct TripleOntologyLoader;

impl OntologyLoader for TripleOntologyLoader {
    fn load_triples(&self, triples: &[Triple]) -> Result<MemoryOntology, OntografError> {
        use vocabulary::*;

        let index = SubjectIndex::new(triples);
        let mut ontology = match triples
            .iter()
            .find(|t| t.predicate == RDF_TYPE && t.object == OWL_ONTOLOGY)
        {
            Some(t) => MemoryOntology::with_iri(t.subject.clone()),
            None => MemoryOntology::new(),
        };

        // Pass 1: declarations, so entity order follows the document
        let mut assertions = Vec::new();
        for triple in triples {
            if is_blank(&triple.subject) {
                continue;
            }

            if triple.predicate == RDF_TYPE {
                match triple.object.as_str() {
                    OWL_CLASS => {
                        declare_class(&mut ontology, &triple.subject);
                    }
                    OWL_NAMED_INDIVIDUAL => {
                        ontology.add_individual_with_iri(&triple.subject, local_name(&triple.subject), &[]);
                    }
                    object if !is_reserved(object) && !is_blank(object) => {
                        let class = declare_class(&mut ontology, object);
                        let individual =
                            ontology.add_individual_with_iri(&triple.subject, local_name(&triple.subject), &[]);
                        assertions.push((individual, class));
                    }
                    _ => {}
                }
            } else if triple.predicate == RDFS_SUBCLASS_OF || triple.predicate == OWL_EQUIVALENT_CLASS {
                declare_class(&mut ontology, &triple.subject);
                if !is_blank(&triple.object) {
                    declare_class(&mut ontology, &triple.object);
                }
            }
        }

        // Pass 2: hierarchy and class expressions
        for triple in triples {
            if is_blank(&triple.subject) {
                continue;
            }

            if triple.predicate == RDFS_SUBCLASS_OF {
                let subject = declare_class(&mut ontology, &triple.subject);
                if let Some(expression) = index.expression(&mut ontology, &triple.object, 0)? {
                    ontology.add_is_a(subject, expression);
                }
            } else if triple.predicate == OWL_EQUIVALENT_CLASS {
                let subject = declare_class(&mut ontology, &triple.subject);
                if let Some(expression) = index.expression(&mut ontology, &triple.object, 0)? {
                    ontology.add_equivalent(subject, expression);
                }
            }
        }

        for (individual, class) in assertions {
            ontology.add_type(individual, class);
        }

        info!("Loaded ontology with {} entities from {} triples", ontology.len(), triples.len());
        Ok(ontology)
    }
}

/// Triples grouped by subject, in document order
struct SubjectIndex<'t> {
    by_subject: HashMap<&'t str, Vec<(&'t str, &'t str)>>,
}

impl<'t> SubjectIndex<'t> {
    fn new(triples: &'t [Triple]) -> Self {
        let mut by_subject: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
        for t in triples {
            by_subject
                .entry(t.subject.as_str())
                .or_default()
                .push((t.predicate.as_str(), t.object.as_str()));
        }
        Self { by_subject }
    }

    fn value(&self, subject: &str, predicate: &str) -> Option<&'t str> {
        self.by_subject
            .get(subject)?
            .iter()
            .find(|(p, _)| *p == predicate)
            .map(|(_, o)| *o)
    }

    /// Classify a class-expression node
    fn expression(
        &self,
        ontology: &mut MemoryOntology,
        node: &str,
        depth: usize,
    ) -> Result<Option<ClassExpression>, OntografError> {
        use vocabulary::*;

        if depth > MAX_EXPRESSION_DEPTH {
            return Err(OntografError::LoaderError(format!(
                "class expression {} nested deeper than {}",
                node, MAX_EXPRESSION_DEPTH
            )));
        }

        if !is_blank(node) {
            return Ok(Some(ClassExpression::Named(declare_class(ontology, node))));
        }

        if let Some(list) = self.value(node, OWL_UNION_OF) {
            let members = self.members(ontology, list, depth)?;
            return Ok(Some(ClassExpression::Union(members)));
        }

        if let Some(list) = self.value(node, OWL_INTERSECTION_OF) {
            let members = self.members(ontology, list, depth)?;
            return Ok(Some(ClassExpression::Intersection(members)));
        }

        if self.value(node, OWL_ON_PROPERTY).is_some() || self.value(node, RDF_TYPE) == Some(OWL_RESTRICTION) {
            return self.restriction(ontology, node, depth).map(Some);
        }

        debug!("Skipping unsupported class expression {}", node);
        Ok(None)
    }

    fn members(
        &self,
        ontology: &mut MemoryOntology,
        list: &'t str,
        depth: usize,
    ) -> Result<Vec<ClassExpression>, OntografError> {
        let mut members = Vec::new();
        for item in self.list(list)? {
            if let Some(expression) = self.expression(ontology, item, depth + 1)? {
                members.push(expression);
            }
        }
        Ok(members)
    }

    fn restriction(
        &self,
        ontology: &mut MemoryOntology,
        node: &str,
        depth: usize,
    ) -> Result<ClassExpression, OntografError> {
        use vocabulary::*;

        let property = self
            .value(node, OWL_ON_PROPERTY)
            .ok_or_else(|| OntografError::LoaderError(format!("restriction {} has no owl:onProperty", node)))?;
        let property = local_name(property);

        let class_filler = |index: &Self, ontology: &mut MemoryOntology, value: &str| -> Result<Filler, OntografError> {
            match index.expression(ontology, value, depth + 1)? {
                Some(expression) => Ok(Filler::Class(Box::new(expression))),
                None => Err(OntografError::LoaderError(format!(
                    "restriction {} has an unsupported filler {}",
                    node, value
                ))),
            }
        };

        if let Some(value) = self.value(node, OWL_SOME_VALUES_FROM) {
            let filler = class_filler(self, ontology, value)?;
            return Ok(Restriction::new(property, RestrictionKind::Some, filler).into());
        }

        if let Some(value) = self.value(node, OWL_ALL_VALUES_FROM) {
            let filler = class_filler(self, ontology, value)?;
            return Ok(Restriction::new(property, RestrictionKind::Only, filler).into());
        }

        if let Some(value) = self.value(node, OWL_HAS_VALUE) {
            let filler = match literal_value(value) {
                Some(literal) => Filler::Literal(literal.to_string()),
                None => match ontology.lookup(value) {
                    Some(id) => Filler::named(id),
                    None => Filler::named(ontology.add_individual_with_iri(value, local_name(value), &[])),
                },
            };
            return Ok(Restriction::new(property, RestrictionKind::Value, filler).into());
        }

        let cardinalities = [
            (OWL_CARDINALITY, RestrictionKind::Exactly),
            (OWL_QUALIFIED_CARDINALITY, RestrictionKind::Exactly),
            (OWL_MIN_CARDINALITY, RestrictionKind::Min),
            (OWL_MIN_QUALIFIED_CARDINALITY, RestrictionKind::Min),
            (OWL_MAX_CARDINALITY, RestrictionKind::Max),
            (OWL_MAX_QUALIFIED_CARDINALITY, RestrictionKind::Max),
        ];
        for (predicate, kind) in cardinalities {
            let Some(raw) = self.value(node, predicate) else {
                continue;
            };
            let text = literal_value(raw).unwrap_or(raw);
            let cardinality: u32 = text.trim().parse().map_err(|_| {
                OntografError::LoaderError(format!("restriction {} has invalid cardinality {}", node, raw))
            })?;
            let filler = match self.value(node, OWL_ON_CLASS) {
                Some(class) => class_filler(self, ontology, class)?,
                None => Filler::Literal(cardinality.to_string()),
            };
            return Ok(Restriction::new(property, kind, filler).into());
        }

        Err(OntografError::LoaderError(format!("restriction {} has no filler", node)))
    }

    /// Walk an RDF collection
    fn list(&self, head: &'t str) -> Result<Vec<&'t str>, OntografError> {
        use vocabulary::*;

        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut current = head;
        while current != RDF_NIL {
            if !seen.insert(current) {
                return Err(OntografError::LoaderError(format!("RDF list {} is cyclic", head)));
            }
            let first = self
                .value(current, RDF_FIRST)
                .ok_or_else(|| OntografError::LoaderError(format!("RDF list node {} has no rdf:first", current)))?;
            items.push(first);
            current = self
                .value(current, RDF_REST)
                .ok_or_else(|| OntografError::LoaderError(format!("RDF list node {} has no rdf:rest", current)))?;
        }
        Ok(items)
    }
}

fn declare_class(ontology: &mut MemoryOntology, iri: &str) -> EntityId {
    match ontology.lookup(iri) {
        Some(id) => id,
        None => ontology.add_class_with_iri(iri, local_name(iri)),
    }
}

fn is_blank(node: &str) -> bool {
    node.starts_with("_:")
}

/// Text of a quoted literal (`"2"^^xsd:int` -> `2`)
fn literal_value(node: &str) -> Option<&str> {
    let rest = node.strip_prefix('"')?;
    let end = rest.rfind('"')?;
    Some(&rest[..end])
}

/// Display name of an IRI: fragment after `#`, else last path segment
pub fn local_name(iri: &str) -> &str {
    let trimmed = iri.trim_start_matches('<').trim_end_matches('>');
    let name = match trimmed.rfind('#') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed.rsplit('/').next().unwrap_or(trimmed),
    };
    if name.is_empty() {
        trimmed
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("http://example.org/pizza#Margherita"), "Margherita");
        assert_eq!(local_name("http://example.org/pizza/Topping"), "Topping");
        assert_eq!(local_name("<http://example.org/a#B>"), "B");
        assert_eq!(local_name("http://example.org/"), "http://example.org/");
        assert_eq!(local_name("Plain"), "Plain");
    }

    #[test]
    fn test_literal_value() {
        assert_eq!(literal_value("\"2\"^^<http://www.w3.org/2001/XMLSchema#int>"), Some("2"));
        assert_eq!(literal_value("\"hot\""), Some("hot"));
        assert_eq!(literal_value("http://example.org/x"), None);
    }

    #[test]
    fn test_reserved_namespaces() {
        assert!(vocabulary::is_reserved(vocabulary::OWL_CLASS));
        assert!(!vocabulary::is_reserved("http://example.org/Dog"));
    }
}
