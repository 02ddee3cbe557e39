use std::{collections::BTreeSet, fmt::Display};

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::trace;

use super::*;

/// Adjacency-list graph over caller-chosen vertex identifiers.
///
/// - Vertices are kept in an ordered set; whole-graph scans visit them in ascending order.
/// - Every vertex owns a list of `(neighbor, weight)`-pairs in insertion order, which determines
///   the visiting order of all traversals.
/// - Parallel edges are kept (the graph is a multigraph).
/// - In undirected mode, each edge is stored in the lists of both endpoints.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g: Graph<&str> = Graph::new_undirected();
/// g.add_edge("A", "B", 3);
/// g.add_vertex("C");
///
/// assert_eq!(g.number_of_nodes(), 3);
/// assert_eq!(g.neighbors_of(&"B"), &[("A", 3)]);
/// assert!(g.neighbors_of(&"unknown").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V, W = u64>
where
    V: VertexId,
{
    vertices: BTreeSet<V>,
    adjacency: FxHashMap<V, Vec<(V, W)>>,
    directed: bool,
}

impl<V, W> Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Creates an empty graph with the given orientation
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: BTreeSet::new(),
            adjacency: FxHashMap::default(),
            directed,
        }
    }

    /// Creates an empty directed graph
    pub fn new_directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph
    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    /// Creates a graph with the given orientation from a list of weighted edges
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g: Graph<u8, f32> = Graph::from_edges(true, [(0, 1, 0.5), (1, 2, 1.5)]);
    /// assert_eq!(g.number_of_edges(), 2);
    /// assert_eq!(g.edge_weight(&1, &2), Some(1.5));
    /// assert!(!g.has_edge(&1, &0));
    /// ```
    pub fn from_edges<I, E>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<V, W>>,
    {
        let mut graph = Self::new(directed);
        graph.add_edges(edges);
        graph
    }

    fn adjacency_entry(&mut self, u: V) -> &mut Vec<(V, W)> {
        self.vertices.insert(u.clone());
        self.adjacency.entry(u).or_default()
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn default() -> Self {
        Self::new_undirected()
    }
}

impl<V, W> GraphType for Graph<V, W>
where
    V: VertexId,
{
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<V, W> GraphNodeOrder for Graph<V, W>
where
    V: VertexId,
{
    type Vertex = V;

    fn number_of_nodes(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    fn contains_vertex(&self, u: &V) -> bool {
        self.vertices.contains(u)
    }
}

impl<V, W> AdjacencyList for Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    type Weight = W;

    fn neighbors_of(&self, u: &V) -> &[(V, W)] {
        self.adjacency.get(u).map_or(&[][..], Vec::as_slice)
    }
}

impl<V, W> GraphEdgeEditing for Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn add_vertex(&mut self, u: V) {
        self.adjacency_entry(u);
    }

    fn add_edge(&mut self, u: V, v: V, weight: W) {
        if self.directed {
            self.adjacency_entry(v.clone());
            self.adjacency_entry(u).push((v, weight));
        } else {
            self.adjacency_entry(u.clone()).push((v.clone(), weight));
            self.adjacency_entry(v).push((u, weight));
        }
    }

    fn remove_edge(&mut self, u: &V, v: &V) {
        if let Some(nbs) = self.adjacency.get_mut(u) {
            nbs.retain(|(x, _)| x != v);
        }

        if !self.directed {
            if let Some(nbs) = self.adjacency.get_mut(v) {
                nbs.retain(|(x, _)| x != u);
            }
        }
    }

    fn remove_vertex(&mut self, u: &V) {
        self.vertices.remove(u);

        let mut removed = 0usize;
        for nbs in self.adjacency.values_mut() {
            let before = nbs.len();
            nbs.retain(|(x, _)| x != u);
            removed += before - nbs.len();
        }

        if let Some(own) = self.adjacency.remove(u) {
            removed += own.len();
        }

        trace!(vertex = ?u, removed_entries = removed, "removed vertex");
    }
}

/// One line per vertex in ascending order: `vertex: [(neighbor, weight), ...]`
impl<V, W> Display for Graph<V, W>
where
    V: VertexId + Display,
    W: Weight + Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self.vertices().map(|u| {
            let nbs = self
                .neighbors_of(u)
                .iter()
                .map(|(v, w)| format!("({v}, {w})"))
                .join(", ");
            format!("{u}: [{nbs}]")
        });
        write!(f, "{}", lines.format("\n"))
    }
}

/// Undirected list form of a dense graph: every vertex `0..n`, one edge per nonzero cell
/// `(u, v)` with `u <= v`.
impl<W> From<&WeightedGraph<W>> for Graph<Node, W>
where
    W: Weight,
{
    fn from(matrix: &WeightedGraph<W>) -> Self {
        let mut graph = Graph::new_undirected();
        for u in matrix.vertices_range() {
            graph.add_vertex(u);
        }
        for u in matrix.vertices_range() {
            for (v, w) in matrix.neighbors_of(u).filter(|&(v, _)| u <= v) {
                graph.add_edge(u, v, w);
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g: Graph<&str> = Graph::new_directed();
        g.add_edge("a", "b", 2);

        g.add_vertex("a");
        let before = g.clone();
        g.add_vertex("a");
        assert_eq!(g, before);
        assert_eq!(g.neighbors_of(&"a"), &[("b", 2)]);

        g.add_vertex("c");
        g.add_vertex("c");
        assert_eq!(g.number_of_nodes(), 3);
        assert!(g.neighbors_of(&"c").is_empty());
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let mut g: Graph<u32> = Graph::new_undirected();
        g.add_edge(1, 2, 7);
        g.add_unit_edge(2, 3);

        assert!(g.has_edge(&1, &2));
        assert!(g.has_edge(&2, &1));
        assert_eq!(g.edge_weight(&1, &2), Some(7));
        assert_eq!(g.edge_weight(&2, &1), Some(7));
        assert_eq!(g.edge_weight(&3, &2), Some(1));
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g: Graph<u32> = Graph::new_directed();
        g.add_edge(1, 2, 7);

        assert!(g.has_edge(&1, &2));
        assert!(!g.has_edge(&2, &1));
        assert!(g.contains_vertex(&2));
        assert!(g.neighbors_of(&2).is_empty());
    }

    #[test]
    fn parallel_edges_are_kept_and_removed_together() {
        let mut g: Graph<char> = Graph::new_undirected();
        g.add_edge('a', 'b', 1);
        g.add_edge('a', 'b', 5);
        g.add_edge('a', 'c', 2);

        assert_eq!(g.degree_of(&'a'), 3);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.edge_weight(&'a', &'b'), Some(1));

        g.remove_edge(&'b', &'a');
        assert!(!g.has_edge(&'a', &'b'));
        assert!(!g.has_edge(&'b', &'a'));
        assert_eq!(g.neighbors_of(&'a'), &[('c', 2)]);

        // removing a missing edge is fine and creates nothing
        g.remove_edge(&'x', &'y');
        assert!(!g.contains_vertex(&'x'));
    }

    #[test]
    fn remove_vertex_purges_references() {
        let mut g: Graph<u8> = Graph::new_directed();
        g.add_edges([(0, 1, 1), (1, 2, 1), (2, 1, 1), (3, 1, 4), (1, 3, 1)]);

        g.remove_vertex(&1);

        assert!(!g.contains_vertex(&1));
        assert_eq!(g.number_of_nodes(), 3);
        for u in [0, 2, 3] {
            assert!(g.neighbors_of(&u).iter().all(|(v, _)| *v != 1));
        }
        assert!(g.neighbors_of(&1).is_empty());
        assert_eq!(g.number_of_edges(), 0);

        // unknown vertices are ignored
        g.remove_vertex(&42);
        assert_eq!(g.number_of_nodes(), 3);
    }

    #[test]
    fn self_loops() {
        let mut g: Graph<u8> = Graph::new_undirected();
        g.add_unit_edge(0, 0);
        assert_eq!(g.degree_of(&0), 2);
        assert_eq!(g.number_of_edges(), 1);
        assert!(g.edges().all(|e| e.is_loop()));
    }

    #[test]
    fn degrees() {
        let g: Graph<u8> =
            Graph::from_edges(false, [(0, 1, 1), (0, 2, 1), (0, 3, 1), (4, 5, 1)]);
        assert_eq!(g.degree_of(&0), 3);
        assert_eq!(g.degree_of(&5), 1);
        assert_eq!(g.degree_of(&9), 0);
    }

    #[test]
    fn display() {
        let g: Graph<&str> = Graph::from_edges(false, [("B", "A", 1), ("A", "C", 2)]);
        assert_eq!(g.to_string(), "A: [(B, 1), (C, 2)]\nB: [(A, 1)]\nC: [(A, 2)]");
    }

    #[test]
    fn from_matrix() {
        let mut m = WeightedGraph::new(4);
        m.add_edge(0, 1, 3u32);
        m.add_edge(2, 1, 4);

        let g = Graph::from(&m);
        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.edge_weight(&1, &0), Some(3));
        assert_eq!(g.edge_weight(&1, &2), Some(4));
        assert!(g.neighbors_of(&3).is_empty());
    }
}
