/*!
# Weighted Shortest Paths

Single-source shortest paths via Dijkstra's algorithm.

The solver is a configurable struct ([`Dijkstra`]) producing a [`ShortestPathTree`]; the common
cases are additionally exposed on every graph through [`ShortestPaths`].

# Precondition
All edge weights must be **non-negative**. This is not checked: with negative weights the
returned distances and paths are unspecified.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use fxhash::{FxHashMap, FxHashSet};
use num::Zero;
use tracing::debug;

use super::*;

/// Entry of the priority queue. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// the entry with the smallest `(distance, vertex)` is popped first.
struct QueueEntry<V, W> {
    distance: W,
    vertex: V,
}

impl<V: Ord, W: PartialOrd> Ord for QueueEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<V: Ord, W: PartialOrd> PartialOrd for QueueEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord, W: PartialOrd> PartialEq for QueueEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord, W: PartialOrd> Eq for QueueEntry<V, W> {}

/// Configurable single-source shortest path computation.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*, weight::Distance};
///
/// let g: Graph<&str> = Graph::from_edges(false, [("A", "B", 4), ("A", "C", 1), ("C", "B", 2)]);
///
/// let tree = Dijkstra::new(&g, "A").run();
/// assert_eq!(tree.distance_to(&"B"), Distance::Finite(3));
/// assert_eq!(tree.path_to(&"B"), Some(vec!["A", "C", "B"]));
/// ```
pub struct Dijkstra<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    source: G::Vertex,
    target: Option<G::Vertex>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a solver computing distances from `source` to all vertices
    pub fn new(graph: &'a G, source: G::Vertex) -> Self {
        Self {
            graph,
            source,
            target: None,
        }
    }

    /// Sets a target vertex. Once it is finalized, the computation stops;
    /// distances of vertices that were not finalized by then may not be minimal.
    pub fn set_stop_at(&mut self, target: G::Vertex) {
        self.target = Some(target);
    }

    /// Sets a target vertex. Once it is finalized, the computation stops;
    /// distances of vertices that were not finalized by then may not be minimal.
    pub fn stop_at(mut self, target: G::Vertex) -> Self {
        self.set_stop_at(target);
        self
    }

    /// Runs the computation.
    ///
    /// Every vertex of the graph receives an entry in the distance map (`Unreachable` unless
    /// reached); the source always has distance zero, even if it is unknown to the graph.
    pub fn run(&self) -> ShortestPathTree<G::Vertex, G::Weight> {
        let mut distances: FxHashMap<G::Vertex, Distance<G::Weight>> = self
            .graph
            .vertices()
            .map(|u| (u.clone(), Distance::Unreachable))
            .collect();
        let mut predecessors: FxHashMap<G::Vertex, G::Vertex> = FxHashMap::default();
        let mut finalized: FxHashSet<G::Vertex> = FxHashSet::default();

        distances.insert(self.source.clone(), Distance::zero());
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            distance: G::Weight::zero(),
            vertex: self.source.clone(),
        });

        while let Some(QueueEntry { distance, vertex }) = queue.pop() {
            // stale entry of an already finalized vertex
            if finalized.contains(&vertex) {
                continue;
            }
            finalized.insert(vertex.clone());

            if self.target.as_ref() == Some(&vertex) {
                break;
            }

            for (v, w) in self.graph.neighbors_of(&vertex) {
                let candidate = Distance::Finite(distance + *w);
                let current = distances.entry(v.clone()).or_insert(Distance::Unreachable);
                if candidate < *current {
                    *current = candidate;
                    predecessors.insert(v.clone(), vertex.clone());
                    queue.push(QueueEntry {
                        distance: distance + *w,
                        vertex: v.clone(),
                    });
                }
            }
        }

        debug!(
            source = ?self.source,
            target = ?self.target,
            finalized = finalized.len(),
            "dijkstra finished"
        );

        ShortestPathTree {
            source: self.source.clone(),
            distances,
            predecessors,
        }
    }
}

/// Result of a [`Dijkstra`] run: distances and shortest-path predecessors from a single source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V, W> {
    source: V,
    distances: FxHashMap<V, Distance<W>>,
    predecessors: FxHashMap<V, V>,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Returns the source vertex
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the distance to `target`; `Unreachable` for unknown vertices
    pub fn distance_to(&self, target: &V) -> Distance<W> {
        self.distances
            .get(target)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Returns the shortest-path predecessor of `target`, if any
    pub fn predecessor_of(&self, target: &V) -> Option<&V> {
        self.predecessors.get(target)
    }

    /// Reconstructs a shortest path from the source to `target` (both included)
    /// by walking the predecessors backwards. Returns `None` if `target` is unreachable.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.distance_to(target).is_reachable() {
            return None;
        }

        let mut path = vec![target.clone()];
        while let Some(p) = self.predecessors.get(path.last()?) {
            path.push(p.clone());
        }
        path.reverse();
        Some(path)
    }

    /// Returns the distance map
    pub fn distances(&self) -> &FxHashMap<V, Distance<W>> {
        &self.distances
    }

    /// Consumes the tree and returns the distance map
    pub fn into_distances(self) -> FxHashMap<V, Distance<W>> {
        self.distances
    }
}

/// Provides weighted shortest paths on graphs with non-negative edge weights
pub trait ShortestPaths: AdjacencyList {
    /// Computes the distances from `start` to all vertices.
    /// Vertices that cannot be reached map to [`Distance::Unreachable`].
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, weight::Distance};
    ///
    /// let mut g: Graph<u8> = Graph::from_edges(true, [(0, 1, 5), (1, 2, 1)]);
    /// g.add_vertex(3);
    ///
    /// let dist = g.dijkstra(0);
    /// assert_eq!(dist[&2], Distance::Finite(6));
    /// assert_eq!(dist[&3], Distance::Unreachable);
    /// ```
    fn dijkstra(&self, start: Self::Vertex) -> FxHashMap<Self::Vertex, Distance<Self::Weight>> {
        Dijkstra::new(self, start).run().into_distances()
    }

    /// Computes a shortest path from `start` to `end` and its total weight.
    /// Stops as soon as the distance of `end` is final.
    ///
    /// Returns `(None, Distance::Unreachable)` if there is no path.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, weight::Distance};
    ///
    /// let g: Graph<u8> = Graph::from_edges(true, [(0, 1, 5), (1, 2, 1), (0, 2, 9)]);
    ///
    /// assert_eq!(g.dijkstra_to(0, 2), (Some(vec![0, 1, 2]), Distance::Finite(6)));
    /// assert_eq!(g.dijkstra_to(2, 0), (None, Distance::Unreachable));
    /// ```
    fn dijkstra_to(
        &self,
        start: Self::Vertex,
        end: Self::Vertex,
    ) -> (Option<Vec<Self::Vertex>>, Distance<Self::Weight>) {
        let tree = Dijkstra::new(self, start).stop_at(end.clone()).run();
        (tree.path_to(&end), tree.distance_to(&end))
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn example() -> Graph<&'static str> {
        Graph::from_edges(
            false,
            [
                ("A", "B", 1),
                ("A", "C", 2),
                ("B", "D", 3),
                ("C", "D", 1),
                ("D", "E", 2),
            ],
        )
    }

    #[test]
    fn path_with_target() {
        let g = example();
        let (path, distance) = g.dijkstra_to("A", "E");
        assert_eq!(path, Some(vec!["A", "C", "D", "E"]));
        assert_eq!(distance, Distance::Finite(5));

        // the reported distance is the weight of the reported path
        let walked = path
            .unwrap()
            .iter()
            .tuple_windows()
            .map(|(u, v)| g.edge_weight(u, v).unwrap())
            .sum::<u64>();
        assert_eq!(distance, Distance::Finite(walked));
        assert_eq!(g.dijkstra("A")[&"E"], distance);
        assert_eq!(g.dijkstra_to("A", "A"), (Some(vec!["A"]), Distance::Finite(0)));
        assert_eq!(g.dijkstra_to("A", "Z"), (None, Distance::Unreachable));
    }

    #[test]
    fn all_distances() {
        let mut g = example();
        g.add_vertex("F");

        let dist = g.dijkstra("A");
        assert_eq!(dist.len(), 6);
        assert_eq!(dist[&"A"], Distance::Finite(0));
        assert_eq!(dist[&"B"], Distance::Finite(1));
        assert_eq!(dist[&"C"], Distance::Finite(2));
        assert_eq!(dist[&"D"], Distance::Finite(3));
        assert_eq!(dist[&"E"], Distance::Finite(5));
        assert_eq!(dist[&"F"], Distance::Unreachable);
    }

    #[test]
    fn unknown_source() {
        let g = example();
        let dist = g.dijkstra("X");
        assert_eq!(dist[&"X"], Distance::Finite(0));
        assert!(
            dist.iter()
                .filter(|(u, _)| **u != "X")
                .all(|(_, d)| *d == Distance::Unreachable)
        );
    }

    #[test]
    fn float_weights_and_parallel_edges() {
        let g: Graph<u8, f64> = Graph::from_edges(
            true,
            [(0, 1, 2.5), (0, 1, 0.5), (1, 2, 0.25), (0, 2, 1.0)],
        );
        let tree = Dijkstra::new(&g, 0).run();
        assert_eq!(tree.distance_to(&2), Distance::Finite(0.75));
        assert_eq!(tree.path_to(&2), Some(vec![0, 1, 2]));
        assert_eq!(tree.predecessor_of(&1), Some(&0));
        assert_eq!(tree.source(), &0);
    }

    #[test]
    fn early_termination_finalizes_target() {
        let g: Graph<u8> = Graph::from_edges(true, [(0, 1, 1), (1, 2, 1), (0, 3, 10), (3, 4, 1)]);
        let tree = Dijkstra::new(&g, 0).stop_at(1).run();
        assert_eq!(tree.distance_to(&1), Distance::Finite(1));
        // 4 is never reached before stopping
        assert_eq!(tree.distance_to(&4), Distance::Unreachable);
    }

    #[test]
    fn directed_cycle() {
        let g: Graph<u8> = Graph::from_edges(true, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert_eq!(g.dijkstra_to(1, 0), (Some(vec![1, 2, 0]), Distance::Finite(2)));
    }

    #[test]
    fn matches_floyd_warshall() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for n in [5, 10, 25] {
                for _ in 0..10 {
                    let g = random_weighted_graph(rng, n, 3 * n, directed);
                    let reference = floyd_warshall(&g);

                    for u in g.vertices().copied().collect_vec() {
                        let dist = g.dijkstra(u);
                        for v in g.vertices() {
                            assert_eq!(dist[v], reference[&(u, *v)]);

                            let (path, d) = g.dijkstra_to(u, *v);
                            assert_eq!(d, reference[&(u, *v)]);
                            if let Some(path) = path {
                                assert_eq!(path_weight(&g, &path), d.finite());
                            } else {
                                assert!(!d.is_reachable());
                            }
                        }
                    }
                }
            }
        }
    }
}
