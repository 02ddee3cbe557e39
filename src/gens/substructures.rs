/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**

All added edges have unit weight, and all given vertices are added to the graph even if no
edge ends up touching them.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g: Graph<u32> = Graph::new_directed();
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique(&[0, 2, 4], false);

assert_eq!(g.number_of_edges(), 11);
assert_eq!(g.neighbors_of(&4), &[(2, 1), (0, 1), (2, 1)]);
```
*/

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures: GraphEdgeEditing {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// Each consecutive pair of vertices is connected by a single edge.
    ///
    /// # Example
    /// ```rust
    /// use wgraphs::{prelude::*, gens::*};
    ///
    /// let mut g: Graph<char> = Graph::new_undirected();
    /// g.connect_path(['a', 'b', 'c']);
    ///
    /// assert!(g.has_edge(&'a', &'b'));
    /// assert!(g.has_edge(&'c', &'b'));
    /// assert!(!g.has_edge(&'a', &'c'));
    /// ```
    fn connect_path<P>(&mut self, vertices_on_path: P)
    where
        P: IntoIterator<Item = Self::Vertex>,
    {
        let mut prev: Option<Self::Vertex> = None;
        for u in vertices_on_path {
            self.add_vertex(u.clone());
            if let Some(p) = prev.replace(u.clone()) {
                self.add_unit_edge(p, u);
            }
        }
    }

    /// Connects the given vertices with a **cycle**.
    ///
    /// - Consecutive vertices are connected by edges.
    /// - Additionally, the last vertex is connected back to the first
    ///   (a single vertex thus receives a self-loop).
    ///
    /// # Example
    /// ```rust
    /// use wgraphs::{prelude::*, gens::*};
    ///
    /// let mut g: Graph<u8> = Graph::new_directed();
    /// g.connect_cycle([0, 1, 2]);
    ///
    /// assert!(g.has_edge(&0, &1));
    /// assert!(g.has_edge(&1, &2));
    /// assert!(g.has_edge(&2, &0));
    /// ```
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C)
    where
        C: IntoIterator<Item = Self::Vertex>,
    {
        let mut iter = vertices_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            self.add_vertex(first.clone());
            let mut prev = first.clone();
            for cur in iter {
                self.add_unit_edge(prev, cur.clone());
                prev = cur;
            }

            self.add_unit_edge(prev, first);
        }
    }

    /// Connects all given vertices into a **clique** (complete subgraph).
    ///
    /// - If `with_loops` is `true`, each vertex also gets a self-loop.
    /// - In undirected graphs, every pair is connected once; in directed graphs, in both directions.
    ///
    /// # Example
    /// ```rust
    /// use wgraphs::{prelude::*, gens::*};
    ///
    /// let mut g: Graph<u8> = Graph::new_undirected();
    /// g.connect_clique(&[0, 1, 2], false);
    ///
    /// assert_eq!(g.number_of_edges(), 3);
    /// assert!(g.has_edge(&2, &0));
    /// ```
    fn connect_clique(&mut self, vertices: &[Self::Vertex], with_loops: bool) {
        for (i, u) in vertices.iter().enumerate() {
            self.add_vertex(u.clone());

            let partners = if self.is_undirected() {
                &vertices[i..]
            } else {
                vertices
            };

            for v in partners {
                if u == v && !with_loops {
                    continue;
                }
                self.add_unit_edge(u.clone(), v.clone());
            }
        }
    }
}

impl<G> GeneratorSubstructures for G where G: GraphEdgeEditing {}
