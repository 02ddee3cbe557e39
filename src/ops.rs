use num::One;

use crate::{edge::*, node::*, weight::*};

/// Provides the orientation of a graph.
///
/// In contrast to dense index-based libraries, the orientation is a runtime property that is
/// fixed when the graph is constructed.
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge `(u, v)` implies an edge `(v, u)`
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphNodeOrder {
    /// Identifier type of vertices
    type Vertex: VertexId;

    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> usize;

    /// Returns an iterator over V in ascending order.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Returns *true* if `u` is a known vertex
    fn contains_vertex(&self, u: &Self::Vertex) -> bool;

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Weight type of edges
    type Weight: Weight;

    /// Returns the (outgoing) neighborhood of a given vertex as `(neighbor, weight)`-pairs
    /// in insertion order. Parallel edges show up as repeated entries.
    ///
    /// Unknown vertices have an empty neighborhood; looking them up never fails.
    fn neighbors_of(&self, u: &Self::Vertex) -> &[(Self::Vertex, Self::Weight)];

    /// Returns the number of (outgoing) adjacency entries of `u`
    fn degree_of(&self, u: &Self::Vertex) -> usize {
        self.neighbors_of(u).len()
    }

    /// Returns *true* if there is at least one edge from `u` to `v`.
    /// Runs in `O(deg(u))`.
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.neighbors_of(u).iter().any(|(x, _)| x == v)
    }

    /// Returns the weight of the first edge from `u` to `v`, if any
    fn edge_weight(&self, u: &Self::Vertex, v: &Self::Vertex) -> Option<Self::Weight> {
        self.neighbors_of(u)
            .iter()
            .find_map(|(x, w)| (x == v).then_some(*w))
    }

    /// Returns the number of edges. For undirected graphs each edge is counted once.
    fn number_of_edges(&self) -> usize {
        let entries: usize = self.vertices().map(|u| self.degree_of(u)).sum();
        if self.is_directed() {
            entries
        } else {
            entries / 2
        }
    }

    /// Returns an iterator over all adjacency entries of the graph as edges.
    /// Vertices are visited in ascending order, entries of a vertex in insertion order.
    ///
    /// Note that undirected edges are reported in both orientations.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Vertex, Self::Weight>> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .iter()
                .map(move |(v, w)| WeightedEdge(u.clone(), v.clone(), *w))
        })
    }
}

/// Provides functions to insert/delete vertices and edges
pub trait GraphEdgeEditing: AdjacencyList {
    /// Adds the vertex `u` if it is not present yet. Calling it again is a non-op.
    fn add_vertex(&mut self, u: Self::Vertex);

    /// Adds the edge `(u, v)` with the given weight; both endpoints become vertices.
    /// In undirected graphs, `(v, u)` is added by the same call.
    ///
    /// Edges are never deduplicated: adding the same edge twice creates a parallel edge.
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex, weight: Self::Weight);

    /// Adds the edge `(u, v)` with weight `1`
    fn add_unit_edge(&mut self, u: Self::Vertex, v: Self::Vertex) {
        self.add_edge(u, v, Self::Weight::one());
    }

    /// Adds all edges of the collection
    fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Self::Vertex, Self::Weight>>,
    {
        for e in edges {
            let WeightedEdge(u, v, w) = e.into();
            self.add_edge(u, v, w);
        }
    }

    /// Removes *all* edges from `u` to `v` regardless of their weight
    /// (and from `v` to `u` in undirected graphs). Missing edges are ignored.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex);

    /// Removes `u` and every edge referencing it. Runs in `O(n + m)`.
    fn remove_vertex(&mut self, u: &Self::Vertex);
}
