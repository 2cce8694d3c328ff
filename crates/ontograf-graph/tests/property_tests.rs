use ontograf_core::model::{EntityId, Filler, Restriction, RestrictionKind};
use ontograf_core::OntologyStore;
use ontograf_graph::*;
use ontograf_store::MemoryOntology;
use proptest::prelude::*;
use std::collections::HashSet;

/// Shape of a generated ontology, by class index
#[derive(Debug, Clone)]
struct OntologyShape {
    classes: usize,
    parents: Vec<(usize, usize)>,
    restrictions: Vec<(usize, usize, Vec<usize>)>,
    individuals: Vec<Vec<usize>>,
}

fn ontology_shape() -> impl Strategy<Value = OntologyShape> {
    (2usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, 0..n), 0..12),
            prop::collection::vec((0..n, 0..RestrictionKind::ALL.len(), prop::collection::vec(0..n, 1..3)), 0..8),
            prop::collection::vec(prop::collection::vec(0..n, 1..3), 0..5),
        )
            .prop_map(move |(parents, restrictions, individuals)| OntologyShape {
                classes: n,
                parents,
                restrictions,
                individuals,
            })
    })
}

fn build(shape: &OntologyShape) -> (MemoryOntology, Vec<EntityId>) {
    let mut onto = MemoryOntology::new();
    let classes: Vec<EntityId> = (0..shape.classes).map(|i| onto.add_class(&format!("C{}", i))).collect();

    for (child, parent) in &shape.parents {
        if child != parent {
            onto.add_subclass_of(classes[*child], classes[*parent]);
        }
    }
    for (i, (class, kind, members)) in shape.restrictions.iter().enumerate() {
        let kind = RestrictionKind::ALL[*kind];
        let filler = Filler::union(members.iter().map(|m| classes[*m]));
        onto.add_is_a(classes[*class], Restriction::new(format!("p{}", i % 3), kind, filler));
    }
    for (i, types) in shape.individuals.iter().enumerate() {
        let types: Vec<EntityId> = types.iter().map(|t| classes[*t]).collect();
        onto.add_individual(&format!("i{}", i), &types);
    }

    (onto, classes)
}

fn assert_pairing_closed(graph: &Graph) {
    for edge in graph {
        if let Some(inverse) = edge.inverse() {
            assert!(graph.contains(&inverse), "missing inverse of {:?}", edge);
        }
    }
}

proptest! {
    #[test]
    fn extraction_is_unique_and_paired(shape in ontology_shape()) {
        let (onto, classes) = build(&shape);
        let extractor = RelationExtractor::new(&onto);

        for class in classes {
            let graph = extractor.extract(class);
            let distinct: HashSet<&Edge> = graph.iter().collect();
            prop_assert_eq!(distinct.len(), graph.len());
            assert_pairing_closed(&graph);
        }
    }

    #[test]
    fn normalization_is_idempotent(shape in ontology_shape()) {
        let (onto, classes) = build(&shape);
        let expander = NeighborhoodExpander::new(&onto);

        for class in classes {
            let expanded = expander.expand(class, RelationExtractor::new(&onto).extract(class));
            let once = pairing::normalized(expanded);
            let twice = pairing::normalized(once.clone());
            prop_assert_eq!(&once, &twice);
            assert_pairing_closed(&once);
        }
    }

    #[test]
    fn filtering_is_idempotent_and_removes_individual_sources(shape in ontology_shape()) {
        let (onto, classes) = build(&shape);
        let individuals: HashSet<EntityId> = onto.individuals().into_iter().collect();
        let filter = GraphFilter::from_store(&onto);

        for class in classes {
            let expanded = NeighborhoodExpander::new(&onto).expand(class, RelationExtractor::new(&onto).extract(class));
            let once = filter.apply(expanded);
            for edge in &once {
                prop_assert!(edge.source.as_entity().map_or(true, |id| !individuals.contains(&id)));
            }
            let twice = filter.apply(once.clone());
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn stringified_neighborhood_is_unique(shape in ontology_shape(), keyword in "C[0-9]") {
        let (onto, _) = build(&shape);
        let graph = build_neighborhood(&keyword, &onto);

        let distinct: HashSet<&NamedEdge> = graph.iter().collect();
        prop_assert_eq!(distinct.len(), graph.len());
        for edge in &graph {
            prop_assert!(!edge.source.starts_with('i'));
        }
    }
}
