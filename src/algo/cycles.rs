/*!
# Cycles & Topological Orderings

- [`Cycles::has_cycle`] detects whether the graph contains a cycle (directed or undirected
  depending on the graph).
- [`Cycles::topological_sort`] orders the vertices of a directed graph such that every edge points
  forward, provided the graph is acyclic.

Both scan all vertices in ascending order and use every unvisited vertex as a new root.
*/

use fxhash::FxHashSet;
use tracing::debug;

use super::{traversal::*, *};
use crate::error::{GraphError, Result};

/// Frame of the explicit depth-first search used for cycle detection
struct Frame<'a, V> {
    vertex: &'a V,
    parent: Option<&'a V>,
    next: usize,
}

impl<'a, V> Frame<'a, V> {
    fn new(vertex: &'a V, parent: Option<&'a V>) -> Self {
        Self {
            vertex,
            parent,
            next: 0,
        }
    }
}

/// Directed graphs: an edge into a vertex whose frame is still open closes a cycle.
fn has_directed_cycle<G: AdjacencyList>(graph: &G) -> bool {
    let mut visited: FxHashSet<&G::Vertex> = FxHashSet::default();
    let mut on_stack: FxHashSet<&G::Vertex> = FxHashSet::default();
    let mut stack = Vec::new();

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }
        on_stack.insert(root);
        stack.push(Frame::new(root, None));

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let Some((v, _)) = graph.neighbors_of(u).get(frame.next) else {
                on_stack.remove(u);
                stack.pop();
                continue;
            };
            frame.next += 1;

            if on_stack.contains(v) {
                return true;
            }

            if visited.insert(v) {
                on_stack.insert(v);
                stack.push(Frame::new(v, Some(u)));
            }
        }
    }

    false
}

/// Undirected graphs: an edge into a visited vertex other than the parent closes a cycle.
/// A second copy of a tree edge is seen from the parent's side, so parallel edges are reported.
fn has_undirected_cycle<G: AdjacencyList>(graph: &G) -> bool {
    let mut visited: FxHashSet<&G::Vertex> = FxHashSet::default();
    let mut stack = Vec::new();

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }
        stack.push(Frame::new(root, None));

        while let Some(frame) = stack.last_mut() {
            let (u, parent) = (frame.vertex, frame.parent);
            let Some((v, _)) = graph.neighbors_of(u).get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            if visited.insert(v) {
                stack.push(Frame::new(v, Some(u)));
            } else if parent != Some(v) {
                return true;
            }
        }
    }

    false
}

/// Provides cycle detection and topological sorting
pub trait Cycles: AdjacencyList {
    /// Returns *true* if the graph contains a cycle.
    ///
    /// In directed graphs, self-loops are cycles. In undirected graphs, self-loops, triangles and
    /// parallel edges between the same two vertices are cycles.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: Graph<u8> = Graph::from_edges(true, [(0, 1, 1), (1, 2, 1)]);
    /// assert!(!g.has_cycle());
    ///
    /// g.add_edge(2, 0, 1);
    /// assert!(g.has_cycle());
    /// ```
    fn has_cycle(&self) -> bool {
        let found = if self.is_directed() {
            has_directed_cycle(self)
        } else {
            has_undirected_cycle(self)
        };

        debug!(
            directed = self.is_directed(),
            vertices = self.number_of_nodes(),
            found,
            "cycle detection finished"
        );
        found
    }

    /// Returns all vertices in reversed depth-first post-order, roots taken in ascending order.
    /// If the graph is acyclic, every edge `(u, v)` has `u` before `v`.
    /// Acyclicity is *not* checked: on cyclic input some ordering is returned nonetheless.
    ///
    /// Returns [`GraphError::UndirectedTopologicalSort`] for undirected graphs.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, error::GraphError};
    ///
    /// let g: Graph<char> = Graph::from_edges(true, [('b', 'a', 1), ('a', 'c', 1)]);
    /// assert_eq!(g.topological_sort(), Ok(vec!['b', 'a', 'c']));
    ///
    /// let h: Graph<char> = Graph::from_edges(false, [('b', 'a', 1)]);
    /// assert_eq!(h.topological_sort(), Err(GraphError::UndirectedTopologicalSort));
    /// ```
    fn topological_sort(&self) -> Result<Vec<Self::Vertex>> {
        if self.is_undirected() {
            return Err(GraphError::UndirectedTopologicalSort);
        }

        let mut order = Vec::with_capacity(self.number_of_nodes());
        let mut search = DfsPostOrder::unrooted(self);
        while search.try_restart_at_unvisited() {
            order.extend(search.by_ref());
        }
        order.reverse();

        debug!(vertices = order.len(), "topological sort finished");
        Ok(order)
    }
}

impl<G> Cycles for G where G: AdjacencyList {}
