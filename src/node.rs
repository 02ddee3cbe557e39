/*!
# Vertex Representation

Vertices of a [`Graph`](crate::repr::Graph) are caller-chosen identifiers: anything that can be
cloned, ordered, hashed and debug-printed qualifies (see [`VertexId`]).
The ordering is not a convenience: every algorithm that scans *all* vertices (cycle detection,
topological sorting, bipartiteness, connected components) does so in ascending order, which makes
their results deterministic.

The dense [`WeightedGraph`](crate::repr::WeightedGraph) instead numbers its vertices `0` to
`n - 1` using [`Node`].
*/

use std::{fmt::Debug, hash::Hash};

use stream_bitset::bitset::BitSetImpl;

/// Bound for vertex identifiers of adjacency-list graphs.
///
/// Blanket-implemented, so `&str`, `String`, integers, tuples of those, ... all work out of the box.
pub trait VertexId: Clone + Ord + Hash + Debug {}

impl<T> VertexId for T where T: Clone + Ord + Hash + Debug {}

/// Index of a vertex in a dense representation: `0` to `n - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a dense graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
