use crate::{
    edge,
    graph::{EdgeSpec, Graph},
};

/// Walking distances (meters) between buildings on the GSU downtown campus.
pub fn campus_edges() -> Vec<EdgeSpec> {
    vec![
        edge!("Library South", "Langdale Hall", 137),
        edge!("Langdale Hall", "25 Park Place", 483),
        edge!("25 Park Place", "55 Park Place", 644),
        edge!("55 Park Place", "Petit Science Center", 2897),
        edge!("Petit Science Center", "Aderhold", 966),
        edge!("Aderhold", "University Commons", 805),
        edge!("University Commons", "University Lofts", 483),
        edge!("University Lofts", "Library South", 805),
        edge!("25 Park Place", "Aderhold", 644),
        edge!("Langdale Hall", "Aderhold", 644),
    ]
}

pub fn campus_graph() -> Graph {
    Graph::build(campus_edges()).expect("Built-in campus map is invalid")
}

#[cfg(test)]
pub fn generate_disconnected_graph() -> Graph {
    // A - B - C    D - E    Island
    Graph::build_with_nodes(
        ["Island"],
        vec![
            edge!("A", "B", 1),
            edge!("B", "C", 2),
            edge!("D", "E", 3),
        ],
    )
    .unwrap()
}

#[cfg(test)]
pub fn generate_complex_graph() -> Graph {
    Graph::build(vec![
        edge!("A", "B", 3),
        edge!("A", "C", 5),
        edge!("A", "K", 3),
        edge!("B", "D", 5),
        edge!("B", "C", 3),
        edge!("C", "D", 2),
        edge!("C", "J", 2),
        edge!("D", "J", 4),
        edge!("D", "E", 7),
        edge!("E", "J", 3),
        edge!("E", "F", 6),
        edge!("F", "H", 2),
        edge!("F", "G", 4),
        edge!("G", "H", 3),
        edge!("G", "I", 5),
        edge!("H", "I", 3),
        edge!("H", "J", 2),
        edge!("I", "J", 4),
        edge!("I", "K", 6),
        edge!("J", "K", 3),
    ])
    .unwrap()
}
