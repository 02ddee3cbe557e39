//! Reference implementations and random instances for cross-checking the algorithms.

use fxhash::FxHashMap;
use itertools::Itertools;
use rand::Rng;

use crate::{gens::*, prelude::*, weight::Distance};

/// Creates a graph on the vertices `0..n` with `m` random edges (no self-loops) of weight `1..=20`
pub(crate) fn random_weighted_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: NumNodes,
    directed: bool,
) -> Graph<Node, u64> {
    let mut graph = Graph::new(directed);
    for u in 0..n {
        graph.add_vertex(u);
    }

    graph.add_edges(
        Gnm::new()
            .nodes(n)
            .edges(m as NumEdges)
            .weights(1u64, 20)
            .generate(rng),
    );
    graph
}

/// Creates a connected matrix graph: a random tree plus up to `m - n + 1` further random edges,
/// all with weight `1..=20`
pub(crate) fn random_connected_matrix<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: NumNodes,
) -> WeightedGraph<u64> {
    let mut graph = WeightedGraph::new(n);
    for v in 1..n {
        let u = rng.random_range(0..v);
        graph.add_edge(u, v, rng.random_range(1..=20));
    }

    let extra = (m as NumEdges).saturating_sub(n as NumEdges - 1);
    for WeightedEdge(u, v, w) in Gnm::new()
        .nodes(n)
        .edges(extra)
        .weights(1u64, 20)
        .generate(rng)
    {
        graph.add_edge(u, v, w);
    }
    graph
}

/// All-pairs distances by Floyd-Warshall, keyed by `(source, target)`
pub(crate) fn floyd_warshall(graph: &Graph<Node, u64>) -> FxHashMap<(Node, Node), Distance<u64>> {
    let vertices = graph.vertices().copied().collect_vec();

    let mut dist: FxHashMap<(Node, Node), Distance<u64>> = vertices
        .iter()
        .cartesian_product(vertices.iter())
        .map(|(&u, &v)| {
            let d = if u == v {
                Distance::Finite(0)
            } else {
                Distance::Unreachable
            };
            ((u, v), d)
        })
        .collect();

    for WeightedEdge(u, v, w) in graph.edges() {
        let entry = dist.entry((u, v)).or_insert(Distance::Unreachable);
        if Distance::Finite(w) < *entry {
            *entry = Distance::Finite(w);
        }
    }

    for &k in &vertices {
        for &u in &vertices {
            for &v in &vertices {
                let Distance::Finite(uk) = dist[&(u, k)] else {
                    continue;
                };
                let via = dist[&(k, v)].extended_by(uk);
                if via < dist[&(u, v)] {
                    dist.insert((u, v), via);
                }
            }
        }
    }

    dist
}

/// Total weight along `path`, using the lightest edge between consecutive vertices
pub(crate) fn path_weight(graph: &Graph<Node, u64>, path: &[Node]) -> Option<u64> {
    path.iter().tuple_windows().try_fold(0, |total, (u, v)| {
        let w = graph
            .neighbors_of(u)
            .iter()
            .filter(|(x, _)| x == v)
            .map(|&(_, w)| w)
            .min()?;
        Some(total + w)
    })
}

/// Minimum spanning tree weight by enumerating all `(n-1)`-subsets of edges.
/// Returns `None` if the graph is disconnected.
pub(crate) fn brute_force_mst_weight(graph: &WeightedGraph<u64>) -> Option<u64> {
    let n = graph.len();
    if n <= 1 {
        return Some(0);
    }

    let edges = graph
        .vertices_range()
        .flat_map(|u| {
            graph
                .neighbors_of(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| (u, v, w))
        })
        .collect_vec();

    edges
        .iter()
        .combinations(n - 1)
        .filter(|tree| {
            let mut component = (0..n).collect_vec();
            tree.iter().all(|&&(u, v, _)| {
                let (cu, cv) = (component[u as usize], component[v as usize]);
                if cu == cv {
                    return false;
                }
                component.iter_mut().filter(|c| **c == cv).for_each(|c| *c = cu);
                true
            })
        })
        .map(|tree| tree.iter().map(|&&(_, _, w)| w).sum())
        .min()
}
