use std::ops::Range;

use super::*;
use crate::error::{GraphError, Result};

/// Dense, undirected graph over the vertices `0..n` stored as a symmetric weight matrix.
///
/// The number of vertices is fixed at construction and the matrix is never resized.
///
/// # Limitation
/// A cell holding `W::zero()` means "no edge". Consequently, an edge of weight zero cannot be
/// represented: adding one is indistinguishable from removing the edge.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = WeightedGraph::new(3);
/// g.add_edge(0, 2, 5u32);
///
/// assert_eq!(g.weight(2, 0), Some(5));
/// assert_eq!(g.weight(0, 1), None);
/// assert_eq!(g.number_of_edges(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<W = u64> {
    n: NumNodes,
    matrix: Vec<W>,
}

impl<W> WeightedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `n` vertices and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            matrix: vec![W::zero(); n as usize * n as usize],
        }
    }

    /// Creates a graph with `n` vertices and the given edges
    ///
    /// # Panics
    /// Panics if any endpoint is `>= n`.
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<Node, W>>,
    {
        let mut graph = Self::new(n);
        for e in edges {
            let WeightedEdge(u, v, w) = e.into();
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the number of vertices as usize
    pub fn len(&self) -> usize {
        self.n as usize
    }

    /// Returns *true* if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns the range `0..n` of all vertices
    pub fn vertices_range(&self) -> Range<Node> {
        0..self.n
    }

    #[inline]
    fn cell(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }

    /// Sets the weight of the undirected edge `{u, v}`, overwriting any previous weight.
    ///
    /// # Panics
    /// Panics if `u >= n` or `v >= n`; see [`WeightedGraph::try_add_edge`] for a checked variant.
    pub fn add_edge(&mut self, u: Node, v: Node, weight: W) {
        assert!(u < self.n && v < self.n, "edge ({u},{v}) out of range");
        let (uv, vu) = (self.cell(u, v), self.cell(v, u));
        self.matrix[uv] = weight;
        self.matrix[vu] = weight;
    }

    /// Checked variant of [`WeightedGraph::add_edge`]
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, error::GraphError};
    ///
    /// let mut g = WeightedGraph::new(2);
    /// assert!(g.try_add_edge(0, 1, 1u8).is_ok());
    /// assert_eq!(
    ///     g.try_add_edge(0, 2, 1),
    ///     Err(GraphError::VertexOutOfRange { vertex: 2, n: 2 })
    /// );
    /// ```
    pub fn try_add_edge(&mut self, u: Node, v: Node, weight: W) -> Result<()> {
        if let Some(&vertex) = [u, v].iter().find(|&&x| x >= self.n) {
            return Err(GraphError::VertexOutOfRange { vertex, n: self.n });
        }
        self.add_edge(u, v, weight);
        Ok(())
    }

    /// Returns the raw matrix cell `(u, v)`; `W::zero()` if there is no edge.
    ///
    /// # Panics
    /// Panics if `u >= n` or `v >= n`.
    pub fn raw_weight(&self, u: Node, v: Node) -> W {
        assert!(u < self.n && v < self.n, "edge ({u},{v}) out of range");
        self.matrix[self.cell(u, v)]
    }

    /// Returns the weight of the edge `{u, v}` or `None` if the cell holds the zero-sentinel.
    ///
    /// # Panics
    /// Panics if `u >= n` or `v >= n`.
    pub fn weight(&self, u: Node, v: Node) -> Option<W> {
        let w = self.raw_weight(u, v);
        (!w.is_zero()).then_some(w)
    }

    /// Returns *true* if the cell `(u, v)` is not the zero-sentinel
    ///
    /// # Panics
    /// Panics if `u >= n` or `v >= n`.
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight(u, v).is_some()
    }

    /// Returns an iterator over all `(neighbor, weight)`-pairs of `u` in ascending order
    ///
    /// # Panics
    /// Panics if `u >= n`.
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        assert!(u < self.n, "vertex {u} out of range");
        let row = &self.matrix[self.cell(u, 0)..self.cell(u, 0) + self.n as usize];
        row.iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(|(v, w)| (v as Node, *w))
    }

    /// Returns the number of undirected edges (self-loops included)
    pub fn number_of_edges(&self) -> usize {
        self.vertices_range()
            .map(|u| self.neighbors_of(u).filter(|&(v, _)| u <= v).count())
            .sum()
    }
}
