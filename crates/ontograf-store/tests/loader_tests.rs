use ontograf_core::model::{ClassExpression, Filler, Restriction, RestrictionKind, Triple};
use ontograf_core::{OntografError, OntologyStore};
use ontograf_store::vocabulary::*;
use ontograf_store::{OntologyLoader, TripleOntologyLoader};

const NS: &str = "http://example.org/pizza#";

fn iri(name: &str) -> String {
    format!("{}{}", NS, name)
}

fn class(name: &str) -> Triple {
    Triple::new(iri(name), RDF_TYPE, OWL_CLASS)
}

fn subclass(child: &str, parent: &str) -> Triple {
    Triple::new(iri(child), RDFS_SUBCLASS_OF, iri(parent))
}

/// RDF collection `head -> items...`
fn list(head: &str, items: &[String]) -> Vec<Triple> {
    let mut triples = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let node = if i == 0 { head.to_string() } else { format!("{}_{}", head, i) };
        let rest = if i + 1 == items.len() {
            RDF_NIL.to_string()
        } else {
            format!("{}_{}", head, i + 1)
        };
        triples.push(Triple::new(node.clone(), RDF_FIRST, item.clone()));
        triples.push(Triple::new(node, RDF_REST, rest));
    }
    triples
}

fn pizza_triples() -> Vec<Triple> {
    let mut triples = vec![
        Triple::new("http://example.org/pizza", RDF_TYPE, OWL_ONTOLOGY),
        class("Pizza"),
        class("Topping"),
        class("Cheese"),
        class("Tomato"),
        class("Margherita"),
        class("CheesyPizza"),
        subclass("Cheese", "Topping"),
        subclass("Tomato", "Topping"),
        subclass("Margherita", "Pizza"),
        // Margherita ⊑ ∀hasTopping.(Cheese ⊔ Tomato)
        Triple::new(iri("Margherita"), RDFS_SUBCLASS_OF, "_:r1"),
        Triple::new("_:r1", RDF_TYPE, OWL_RESTRICTION),
        Triple::new("_:r1", OWL_ON_PROPERTY, iri("hasTopping")),
        Triple::new("_:r1", OWL_ALL_VALUES_FROM, "_:u1"),
        Triple::new("_:u1", RDF_TYPE, OWL_CLASS),
        Triple::new("_:u1", OWL_UNION_OF, "_:l1"),
        // CheesyPizza ≡ Pizza ⊓ ∃hasTopping.Cheese
        Triple::new(iri("CheesyPizza"), OWL_EQUIVALENT_CLASS, "_:i1"),
        Triple::new("_:i1", OWL_INTERSECTION_OF, "_:l2"),
        Triple::new("_:r2", RDF_TYPE, OWL_RESTRICTION),
        Triple::new("_:r2", OWL_ON_PROPERTY, iri("hasTopping")),
        Triple::new("_:r2", OWL_SOME_VALUES_FROM, iri("Cheese")),
        // Individual
        Triple::new(iri("mozzarella"), RDF_TYPE, OWL_NAMED_INDIVIDUAL),
        Triple::new(iri("mozzarella"), RDF_TYPE, iri("Cheese")),
    ];
    triples.extend(list("_:l1", &[iri("Cheese"), iri("Tomato")]));
    triples.extend(list("_:l2", &[iri("Pizza"), "_:r2".to_string()]));
    triples
}

#[test]
fn test_load_empty() {
    let onto = TripleOntologyLoader.load_triples(&[]).unwrap();
    assert!(onto.is_empty());
    assert!(onto.iri().is_none());
}

#[test]
fn test_load_pizza_declarations() {
    let onto = TripleOntologyLoader.load_triples(&pizza_triples()).unwrap();

    assert_eq!(onto.iri(), Some("http://example.org/pizza"));
    assert_eq!(
        onto.class_names(),
        vec!["Pizza", "Topping", "Cheese", "Tomato", "Margherita", "CheesyPizza"]
    );

    let mozzarella = onto.lookup(&iri("mozzarella")).unwrap();
    assert_eq!(onto.individuals(), vec![mozzarella]);
    assert_eq!(onto.primary_type(mozzarella).unwrap(), onto.lookup(&iri("Cheese")));
}

#[test]
fn test_load_only_restriction_over_union() {
    let onto = TripleOntologyLoader.load_triples(&pizza_triples()).unwrap();
    let margherita = onto.lookup(&iri("Margherita")).unwrap();
    let pizza = onto.lookup(&iri("Pizza")).unwrap();
    let cheese = onto.lookup(&iri("Cheese")).unwrap();
    let tomato = onto.lookup(&iri("Tomato")).unwrap();

    let is_a = onto.is_a(margherita).unwrap();
    assert_eq!(is_a.len(), 2);
    assert_eq!(is_a[0], ClassExpression::Named(pizza));
    assert_eq!(
        is_a[1],
        ClassExpression::Restriction(Restriction::only("hasTopping", [cheese, tomato]))
    );
}

#[test]
fn test_load_equivalent_intersection() {
    let onto = TripleOntologyLoader.load_triples(&pizza_triples()).unwrap();
    let cheesy = onto.lookup(&iri("CheesyPizza")).unwrap();
    let pizza = onto.lookup(&iri("Pizza")).unwrap();
    let cheese = onto.lookup(&iri("Cheese")).unwrap();

    let equivalents = onto.equivalent_to(cheesy).unwrap();
    assert_eq!(
        equivalents,
        vec![ClassExpression::Intersection(vec![
            ClassExpression::Named(pizza),
            ClassExpression::Restriction(Restriction::some("hasTopping", cheese)),
        ])]
    );
}

#[test]
fn test_load_cardinality_and_has_value() {
    let triples = vec![
        class("Pizza"),
        Triple::new(iri("Pizza"), RDFS_SUBCLASS_OF, "_:c"),
        Triple::new("_:c", RDF_TYPE, OWL_RESTRICTION),
        Triple::new("_:c", OWL_ON_PROPERTY, iri("hasBase")),
        Triple::new("_:c", OWL_CARDINALITY, "\"1\"^^<http://www.w3.org/2001/XMLSchema#nonNegativeInteger>"),
        Triple::new(iri("Pizza"), RDFS_SUBCLASS_OF, "_:v"),
        Triple::new("_:v", OWL_ON_PROPERTY, iri("hasSpiciness")),
        Triple::new("_:v", OWL_HAS_VALUE, iri("Mild")),
    ];
    let onto = TripleOntologyLoader.load_triples(&triples).unwrap();
    let pizza = onto.lookup(&iri("Pizza")).unwrap();
    let mild = onto.lookup(&iri("Mild")).unwrap();

    let is_a = onto.is_a(pizza).unwrap();
    assert_eq!(
        is_a[0],
        ClassExpression::Restriction(
            Restriction::new("hasBase", RestrictionKind::Exactly, Filler::literal("1"))
        )
    );
    assert_eq!(
        is_a[1],
        ClassExpression::Restriction(Restriction::new("hasSpiciness", RestrictionKind::Value, Filler::named(mild)))
    );
}

#[test]
fn test_restriction_without_property_is_rejected() {
    let triples = vec![
        class("Pizza"),
        Triple::new(iri("Pizza"), RDFS_SUBCLASS_OF, "_:r"),
        Triple::new("_:r", RDF_TYPE, OWL_RESTRICTION),
        Triple::new("_:r", OWL_SOME_VALUES_FROM, iri("Cheese")),
    ];
    let err = TripleOntologyLoader.load_triples(&triples).unwrap_err();
    assert!(matches!(err, OntografError::LoaderError(msg) if msg.contains("onProperty")));
}

#[test]
fn test_cyclic_list_is_rejected() {
    let triples = vec![
        class("Pizza"),
        Triple::new(iri("Pizza"), OWL_EQUIVALENT_CLASS, "_:u"),
        Triple::new("_:u", OWL_UNION_OF, "_:l"),
        Triple::new("_:l", RDF_FIRST, iri("Cheese")),
        Triple::new("_:l", RDF_REST, "_:l"),
    ];
    let err = TripleOntologyLoader.load_triples(&triples).unwrap_err();
    assert!(err.to_string().contains("cyclic"));
}

#[test]
fn test_unsupported_expression_is_skipped() -> anyhow::Result<()> {
    let triples = vec![
        class("Pizza"),
        Triple::new(iri("Pizza"), RDFS_SUBCLASS_OF, "_:n"),
        Triple::new("_:n", "http://www.w3.org/2002/07/owl#complementOf", iri("Topping")),
    ];
    let onto = TripleOntologyLoader.load_triples(&triples)?;
    let pizza = onto.lookup(&iri("Pizza")).unwrap();
    assert!(onto.is_a(pizza)?.is_empty());
    Ok(())
}
