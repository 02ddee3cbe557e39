/*!
`wgraphs` is a graph data structure & algorithms library for graphs that are
- **labelled** : Vertices are arbitrary identifiers such as `&str`, `String` or integers
- **weighted** : Every edge carries a numeric weight (integers or floats)
- **directed or undirected** : The orientation is chosen when constructing the graph

# Representation

Vertices of the adjacency-list [`Graph`](crate::repr::Graph) can be any type implementing
[`VertexId`](crate::node::VertexId) (`Clone + Ord + Hash + Debug`).
The vertex set is kept ordered: every whole-graph scan visits vertices in ascending order,
which makes the results of all algorithms deterministic.
For **edges**, we use a simple tuple-struct `WeightedEdge(source, target, weight)`.

### Directed vs Undirected

- In an **undirected** graph, adding `(u, v, w)` makes `v` a neighbor of `u` and vice versa.
- In a **directed** graph, the edge has orientation, so only `v` becomes a neighbor of `u`.

Parallel edges are kept in both modes.

### Available Representations

See the [`repr`] module:

- [`Graph`](crate::repr::Graph): adjacency lists over labelled vertices
- [`WeightedGraph`](crate::repr::WeightedGraph): dense, undirected weight matrix over `0..n`

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs
using either the *Builder* / *Setter* pattern before calling the configured algorithm on a
provided graph. Alternatively, the most important and commonly used functionalities are
implemented via traits on the graph itself, making them usable without configuring the algorithm
beforehand.

Queries never fail on unknown vertices: they simply have no neighbors. Unreachable targets are
reported via `None` and [`Distance::Unreachable`](crate::weight::Distance). The only errors
(see [`error`]) concern operations that are not applicable at all.

Algorithms emit [`tracing`](https://docs.rs/tracing) events; install a subscriber to see them.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, weights, basic graph operations, and all
  graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS
  (`graph.bfs(start)`), Dijkstra, cycle detection, topological sorting, bipartiteness checks,
  connected components and minimum spanning trees,
- [`gens`] includes random edge generators and deterministic substructures such as
  paths/cycles/cliques.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*, weight::Distance};

let g: Graph<&str> = Graph::from_edges(
    false,
    [("A", "B", 1), ("A", "C", 2), ("B", "D", 3), ("C", "D", 1), ("D", "E", 2)],
);

assert_eq!(g.bfs("A").collect::<Vec<_>>(), vec!["A", "B", "C", "D", "E"]);
assert_eq!(g.dijkstra_to("A", "E"), (Some(vec!["A", "C", "D", "E"]), Distance::Finite(5)));
assert!(g.has_cycle());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod weight;

/// `wgraphs::prelude` includes definitions for vertices, edges and weights, all basic graph
/// operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*, weight::*};
}
