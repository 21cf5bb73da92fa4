//! The classic 9-node textbook graph, kept as a fixture for the CLI and tests.
//! Every edge is listed from both ends. From node 0 the shortest distances are
//! `[0, 4, 12, 19, 21, 11, 9, 8, 14]`.
use crate::graph::Graph;

pub fn textbook_targets() -> Vec<Vec<usize>> {
    vec![
        vec![1, 7],
        vec![0, 2, 7],
        vec![1, 3, 5, 8],
        vec![2, 4, 5],
        vec![3, 5],
        vec![2, 3, 4, 6],
        vec![5, 7, 8],
        vec![0, 1, 6, 8],
        vec![2, 6, 7],
    ]
}

pub fn textbook_weights() -> Vec<Vec<f64>> {
    vec![
        vec![4.0, 8.0],
        vec![4.0, 8.0, 11.0],
        vec![8.0, 7.0, 4.0, 2.0],
        vec![7.0, 9.0, 14.0],
        vec![9.0, 10.0],
        vec![4.0, 14.0, 10.0, 2.0],
        vec![2.0, 1.0, 6.0],
        vec![8.0, 11.0, 1.0, 7.0],
        vec![2.0, 6.0, 7.0],
    ]
}

pub fn textbook_graph() -> Graph {
    // The rows above are well formed, so construction cannot fail.
    match Graph::from_parallel_lists(textbook_targets(), textbook_weights()) {
        Ok(graph) => graph,
        Err(e) => unreachable!("textbook graph is malformed: {e}"),
    }
}
