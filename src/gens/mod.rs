/*!
# Graph Generators

This module provides builder-style random edge generators and helpers to add deterministic
substructures (paths, cycles, cliques) to existing graphs.

The typical usage workflow of a random generator is:

1. Create a generator instance (e.g., `Gnm::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).edges(m)`).
3. Generate edges via `generate()` or `stream()` and feed them into a graph.

```
use wgraphs::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(1);
let edges = Gnm::new().nodes(10).edges(20).weights(1u32, 9).generate(rng);

let g: Graph<Node, u32> = Graph::from_edges(false, edges);
assert!(g.number_of_nodes() <= 10);
assert_eq!(g.number_of_edges(), 20);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnm;
mod substructures;

pub use gnm::*;
pub use substructures::*;

/// Number of edges requested from a generator
pub type NumEdges = usize;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Weight type of generated edges
    type Weight: Weight;

    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<Node, Self::Weight>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<Node, Self::Weight>>
    where
        R: Rng;
}
