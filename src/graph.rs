// Read-only adjacency-list graph. Every constructor validates its input, so a
// `Graph` that exists only references nodes in [0, N) with finite, non-negative
// weights.
use crate::error::{Result, SsspError};

pub type NodeIndex = usize;
pub type Weight = f64;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    pub weight: Weight,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

fn check_edge(from: NodeIndex, to: NodeIndex, weight: Weight, node_count: usize) -> Result<Edge> {
    if to >= node_count {
        return Err(SsspError::TargetOutOfRange { from, to, node_count });
    }
    if !weight.is_finite() {
        return Err(SsspError::NonFiniteWeight { from, to, weight });
    }
    if weight < 0.0 {
        return Err(SsspError::NegativeWeight { from, to, weight });
    }
    Ok(Edge { target: to, weight })
}

impl Graph {
    /// Builds a graph from one row of targets and one row of weights per node.
    /// Row `v` of each list describes the outgoing edges of node `v`, pairwise.
    pub fn from_parallel_lists(targets: Vec<Vec<NodeIndex>>, weights: Vec<Vec<Weight>>) -> Result<Self> {
        if targets.len() != weights.len() {
            return Err(SsspError::RowCountMismatch {
                targets: targets.len(),
                weights: weights.len(),
            });
        }
        let node_count = targets.len();
        let mut adjacency = Vec::with_capacity(node_count);
        for (node, (row_targets, row_weights)) in targets.iter().zip(weights.iter()).enumerate() {
            if row_targets.len() != row_weights.len() {
                return Err(SsspError::RowLengthMismatch {
                    node,
                    targets: row_targets.len(),
                    weights: row_weights.len(),
                });
            }
            let row = row_targets
                .iter()
                .zip(row_weights.iter())
                .map(|(&to, &w)| check_edge(node, to, w, node_count))
                .collect::<Result<Vec<_>>>()?;
            adjacency.push(row);
        }
        Ok(Self { adjacency })
    }

    /// Builds a graph from `(target, weight)` rows, one per node.
    pub fn from_adjacency(adj: Vec<Vec<(NodeIndex, Weight)>>) -> Result<Self> {
        let node_count = adj.len();
        let adjacency = adj
            .into_iter()
            .enumerate()
            .map(|(node, row)| {
                row.into_iter()
                    .map(|(to, w)| check_edge(node, to, w, node_count))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { adjacency })
    }

    /// Directed graph with `node_count` nodes from `(from, to, weight)` triples.
    pub fn from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex, Weight)]) -> Result<Self> {
        Self::build(node_count, edges, false)
    }

    /// Same as [`Graph::from_edges`] but every edge is added in both directions.
    pub fn from_undirected_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex, Weight)]) -> Result<Self> {
        Self::build(node_count, edges, true)
    }

    fn build(node_count: usize, edges: &[(NodeIndex, NodeIndex, Weight)], undirected: bool) -> Result<Self> {
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); node_count];
        for &(u, v, w) in edges {
            if u >= node_count {
                return Err(SsspError::TargetOutOfRange { from: u, to: v, node_count });
            }
            adjacency[u].push(check_edge(u, v, w, node_count)?);
            if undirected && u != v {
                adjacency[v].push(Edge { target: u, weight: w });
            }
        }
        Ok(Self { adjacency })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Outgoing edges of `node`, in insertion order.
    ///
    /// Panics if `node` is not in `[0, node_count)`.
    pub fn neighbors(&self, node: NodeIndex) -> &[Edge] {
        &self.adjacency[node]
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        node < self.adjacency.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_lists_keep_edge_order() {
        let graph = Graph::from_parallel_lists(
            vec![vec![1, 2], vec![2], vec![]],
            vec![vec![4.0, 1.5], vec![0.0], vec![]],
        )
        .unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.neighbors(0),
            &[Edge { target: 1, weight: 4.0 }, Edge { target: 2, weight: 1.5 }]
        );
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Graph::from_parallel_lists(vec![vec![1], vec![0]], vec![vec![1.0], vec![]]).unwrap_err();
        assert!(matches!(
            err,
            SsspError::RowLengthMismatch { node: 1, targets: 1, weights: 0 }
        ));

        let err = Graph::from_parallel_lists(vec![vec![], vec![]], vec![vec![]]).unwrap_err();
        assert!(matches!(err, SsspError::RowCountMismatch { targets: 2, weights: 1 }));
    }

    #[test]
    fn bad_targets_and_weights_are_rejected() {
        let err = Graph::from_adjacency(vec![vec![(3, 1.0)], vec![]]).unwrap_err();
        assert!(matches!(err, SsspError::TargetOutOfRange { from: 0, to: 3, node_count: 2 }));

        let err = Graph::from_adjacency(vec![vec![(1, -2.0)], vec![]]).unwrap_err();
        assert!(matches!(err, SsspError::NegativeWeight { from: 0, to: 1, .. }));

        let err = Graph::from_edges(2, &[(0, 1, f64::NAN)]).unwrap_err();
        assert!(matches!(err, SsspError::NonFiniteWeight { from: 0, to: 1, .. }));

        let err = Graph::from_edges(2, &[(5, 1, 1.0)]).unwrap_err();
        assert!(matches!(err, SsspError::TargetOutOfRange { from: 5, to: 1, .. }));
    }

    #[test]
    fn undirected_edges_go_both_ways() {
        let graph = Graph::from_undirected_edges(3, &[(0, 1, 2.0), (1, 2, 3.0), (2, 2, 1.0)]).unwrap();
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.neighbors(1).len(), 2);
        assert_eq!(graph.neighbors(2), &[Edge { target: 1, weight: 3.0 }, Edge { target: 2, weight: 1.0 }]);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::from_adjacency(Vec::new()).unwrap();
        assert!(graph.is_empty());
        assert!(!graph.contains(0));
    }
}
