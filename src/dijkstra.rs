// Lazy-deletion Dijkstra. The heap never has keys decreased in place; a cheaper
// path to a node just pushes another entry, and entries for nodes that were
// already settled are dropped when popped. That costs up to E extra heap
// entries, so a run is O((V + E) log E).
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::error::{Result, SsspError};
use crate::graph::{Graph, NodeIndex, Weight};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct State {
    cost: OrderedFloat<Weight>,
    node_id: NodeIndex,
}

// Min-heap by cost, then by node id.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessors from one source.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    source: NodeIndex,
    dist: Vec<Weight>,
    prev: Vec<Option<NodeIndex>>,
    settle_order: Vec<NodeIndex>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Final distance to `node`, `f64::INFINITY` when it cannot be reached.
    pub fn distance(&self, node: NodeIndex) -> Weight {
        self.dist[node]
    }

    pub fn distances(&self) -> &[Weight] {
        &self.dist
    }

    pub fn into_distances(self) -> Vec<Weight> {
        self.dist
    }

    /// Node preceding `node` on a shortest path. `None` for the source and for
    /// unreachable nodes.
    pub fn predecessor(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.prev[node]
    }

    pub fn predecessors(&self) -> &[Option<NodeIndex>] {
        &self.prev
    }

    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.dist[node].is_finite()
    }

    pub fn reachable_count(&self) -> usize {
        self.settle_order.len()
    }

    /// Nodes in the order they were settled. Their distances never decrease
    /// along this sequence.
    pub fn settle_order(&self) -> &[NodeIndex] {
        &self.settle_order
    }

    /// Shortest path from the source to `node`, source first.
    pub fn path_to(&self, node: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.is_reachable(node) {
            return None;
        }
        let mut path = vec![node];
        let mut cur = node;
        while let Some(p) = self.prev[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra from `source` over `graph`.
///
/// Nodes the source cannot reach keep an infinite distance; running out of
/// queue entries before every node is settled is the normal way a search over
/// a disconnected graph ends.
pub fn compute_sssp(graph: &Graph, source: NodeIndex) -> Result<ShortestPaths> {
    let n = graph.node_count();
    if source >= n {
        return Err(SsspError::InvalidSource {
            node: source,
            node_count: n,
        });
    }

    // `best_known` is provisional and may drop several times; `finalized` is
    // written exactly once per node, when it is settled.
    let mut best_known = vec![Weight::INFINITY; n];
    let mut finalized = vec![Weight::INFINITY; n];
    let mut prev = vec![None; n];
    let mut visited = vec![false; n];
    let mut settle_order = Vec::with_capacity(n);
    let mut heap = BinaryHeap::new();

    best_known[source] = 0.0;
    heap.push(State {
        cost: OrderedFloat(0.0),
        node_id: source,
    });

    while settle_order.len() < n {
        let Some(State { cost, node_id }) = heap.pop() else {
            break;
        };
        if visited[node_id] {
            continue;
        }
        visited[node_id] = true;
        finalized[node_id] = cost.0;
        settle_order.push(node_id);

        for edge in graph.neighbors(node_id) {
            let next = edge.target;
            let next_cost = cost.0 + edge.weight;
            if !visited[next] && next_cost < best_known[next] {
                best_known[next] = next_cost;
                prev[next] = Some(node_id);
                heap.push(State {
                    cost: OrderedFloat(next_cost),
                    node_id: next,
                });
            }
        }
    }

    Ok(ShortestPaths {
        source,
        dist: finalized,
        prev,
        settle_order,
    })
}

/// Dijkstra from `start` to all nodes. Returns distances only,
/// `f64::INFINITY` when unreachable.
pub fn dijkstra_all(graph: &Graph, start: NodeIndex) -> Result<Vec<Weight>> {
    compute_sssp(graph, start).map(ShortestPaths::into_distances)
}
