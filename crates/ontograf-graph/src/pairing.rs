//! Subclass pairing closure
//!
//! `(A, subclass_of, B)` and `(B, has_subclass, A)` always appear together.

use crate::edge::Graph;

/// Add every missing inverse hierarchy edge. Idempotent.
///
/// A single scan suffices: inverses introduce no new entities and their own
/// inverse is the edge that produced them.
pub fn normalize(graph: &mut Graph) {
    let mut i = 0;
    while i < graph.len() {
        if let Some(inverse) = graph.edges()[i].inverse() {
            graph.insert(inverse);
        }
        i += 1;
    }
}

/// Owned variant of [`normalize`]
pub fn normalized(mut graph: Graph) -> Graph {
    normalize(&mut graph);
    graph
}
