/*!
# Bipartite Graph Algorithms

This module provides traits and algorithms for working with **bipartite graphs**.

Functionality includes:
- Defining and handling bipartitions of a graph
- Testing whether a graph is bipartite
- Computing a valid bipartition if one exists
*/

use std::collections::BTreeSet;

use fxhash::FxHashSet;

use super::{traversal::*, *};

/// A trait for representing a bipartition of the vertex set.
///
/// - Vertices in the set are considered to be on the **right** (1) side
/// - Vertices not in the set are considered to be on the **left** (0) side
pub trait Bipartition<V> {
    /// Returns `true` if the vertex is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: &V) -> bool;

    /// Returns `true` if the vertex is on the left (0) side of the partition.
    #[inline]
    fn is_on_left_side(&self, u: &V) -> bool {
        !self.is_on_right_side(u)
    }
}

impl<V: VertexId> Bipartition<V> for FxHashSet<V> {
    #[inline]
    fn is_on_right_side(&self, u: &V) -> bool {
        self.contains(u)
    }
}

impl<V: VertexId> Bipartition<V> for BTreeSet<V> {
    #[inline]
    fn is_on_right_side(&self, u: &V) -> bool {
        self.contains(u)
    }
}

/// A trait for testing and computing bipartitions in graphs.
///
/// Only outgoing adjacency is followed; on directed graphs, every edge is nevertheless checked
/// once as part of the neighborhood of its source.
pub trait BipartiteTest: AdjacencyList {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. every edge connects both sides. A self-loop is never valid.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use wgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g: Graph<u32> = Graph::new_undirected();
    /// g.connect_path(0..10);
    ///
    /// assert!(g.is_bipartition(&BTreeSet::from([0, 2, 4, 6, 8])));
    /// assert!(!g.is_bipartition(&BTreeSet::from([0, 1])));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition<Self::Vertex>,
    {
        self.edges().all(|WeightedEdge(u, v, _)| {
            bipartition.is_on_left_side(&u) != bipartition.is_on_left_side(&v)
        })
    }

    /// Computes a valid bipartition of the graph, if one exists, and returns its right side.
    /// The smallest vertex of every breadth-first tree is placed on the left side.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g: Graph<u32> = Graph::new_undirected();
    /// g.connect_path(0..10);
    ///
    /// let right = g.compute_bipartition().unwrap();
    /// assert_eq!(right.len(), 5);
    /// assert!(right.contains(&1));
    /// ```
    fn compute_bipartition(&self) -> Option<FxHashSet<Self::Vertex>> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }

    /// Tests whether the graph is bipartite.
    /// Graphs without edges (including the empty graph) are bipartite.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g: Graph<u32> = Graph::new_undirected();
    /// g.connect_cycle(0..4);
    /// assert!(g.is_bipartite());
    ///
    /// g.add_unit_edge(0, 2);
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList {}

/// Computes a candidate bipartition of the graph using BFS traversal.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> FxHashSet<G::Vertex>
where
    G: AdjacencyList,
{
    let mut bfs = BfsWithPredecessor::unrooted(graph);
    let mut bipartition = FxHashSet::default();

    while bfs.try_restart_at_unvisited() {
        for (pred, node) in bfs
            .by_ref()
            .filter_map(|(pred, node)| Some((pred?, node)))
        {
            if !bipartition.contains(&pred) {
                bipartition.insert(node);
            }
        }
    }

    bipartition
}
