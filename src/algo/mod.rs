/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest paths, cycle detection, bipartiteness, connectivity and
spanning trees.
Algorithms over adjacency lists are provided as extension traits implemented for every
[`AdjacencyList`](crate::ops::AdjacencyList); where it makes sense, results are **iterators**,
making it easy to consume them lazily.

None of the algorithms mutate the graph, and none of them recurse on the native call stack:
depth-first routines keep an explicit, heap-allocated stack of frames.
*/

mod bipartite;
mod connectivity;
mod cycles;
mod mst;
mod shortest_path;
pub mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use connectivity::*;
pub use cycles::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;
