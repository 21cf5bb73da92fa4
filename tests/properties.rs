use dijkstra_sssp::reference::{textbook_graph, textbook_targets, textbook_weights};
use dijkstra_sssp::{compute_sssp, dijkstra_all, Graph, ShortestPaths};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, n: usize, m: usize) -> (Graph, Vec<(usize, usize, f64)>) {
    let edges: Vec<_> = (0..m)
        .map(|_| {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Integer weights keep sums exact so distances compare with ==.
            let w = rng.gen_range(0..20) as f64;
            (u, v, w)
        })
        .collect();
    (Graph::from_edges(n, &edges).unwrap(), edges)
}

fn bellman_ford(n: usize, edges: &[(usize, usize, f64)], source: usize) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;
    for _ in 0..n {
        let mut changed = false;
        for &(u, v, w) in edges {
            if dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn check_prev_chains(graph: &Graph, paths: &ShortestPaths) {
    for node in 0..graph.node_count() {
        let Some(path) = paths.path_to(node) else {
            assert_eq!(paths.predecessor(node), None);
            continue;
        };
        assert_eq!(path[0], paths.source());
        assert_eq!(*path.last().unwrap(), node);
        let total: f64 = path
            .windows(2)
            .map(|pair| {
                graph
                    .neighbors(pair[0])
                    .iter()
                    .filter(|e| e.target == pair[1])
                    .map(|e| e.weight)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum();
        assert_eq!(total, paths.distance(node), "path {:?}", path);
    }
}

#[test]
fn textbook_acceptance() {
    let dist = dijkstra_all(&textbook_graph(), 0).unwrap();
    assert_eq!(dist, vec![0.0, 4.0, 12.0, 19.0, 21.0, 11.0, 9.0, 8.0, 14.0]);

    let graph = Graph::from_parallel_lists(textbook_targets(), textbook_weights()).unwrap();
    let paths = compute_sssp(&graph, 0).unwrap();
    assert_eq!(paths.path_to(4), Some(vec![0, 7, 6, 5, 4]));
    check_prev_chains(&graph, &paths);
}

#[test]
fn matches_bellman_ford_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..200 {
        let n = rng.gen_range(1..40);
        let m = rng.gen_range(0..n * 4);
        let (graph, edges) = random_graph(&mut rng, n, m);
        let source = rng.gen_range(0..n);

        let paths = compute_sssp(&graph, source).unwrap();
        assert_eq!(paths.distance(source), 0.0);
        assert_eq!(
            paths.distances(),
            bellman_ford(n, &edges, source).as_slice(),
            "round {round}"
        );
        check_prev_chains(&graph, &paths);
    }
}

#[test]
fn settled_distances_never_decrease() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let (graph, _) = random_graph(&mut rng, 30, 90);
        let paths = compute_sssp(&graph, 0).unwrap();
        let settled: Vec<f64> = paths.settle_order().iter().map(|&v| paths.distance(v)).collect();
        assert!(settled.windows(2).all(|w| w[0] <= w[1]), "{:?}", settled);
        assert_eq!(settled.len(), paths.distances().iter().filter(|d| d.is_finite()).count());
    }
}

#[test]
fn repeated_runs_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    let (graph, _) = random_graph(&mut rng, 25, 60);
    let first = compute_sssp(&graph, 4).unwrap();
    let second = compute_sssp(&graph, 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn concurrent_runs_share_one_graph() {
    let graph = textbook_graph();
    let expected: Vec<_> = (0..graph.node_count())
        .map(|s| dijkstra_all(&graph, s).unwrap())
        .collect();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..graph.node_count())
            .map(|s| {
                let graph = &graph;
                scope.spawn(move || dijkstra_all(graph, s).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);

    // Undirected graph: distances are symmetric.
    for (u, row) in expected.iter().enumerate() {
        for (v, d) in row.iter().enumerate() {
            assert_eq!(*d, expected[v][u]);
        }
    }
}

#[test]
fn undirected_chain_with_isolated_node() {
    let graph = Graph::from_undirected_edges(4, &[(0, 1, 1.0), (1, 2, 2.5)]).unwrap();
    let dist = dijkstra_all(&graph, 2).unwrap();
    assert_eq!(dist, vec![3.5, 2.5, 0.0, f64::INFINITY]);
}
