/*!
# Graph Representations

- [`Graph`]: adjacency-list store over caller-chosen vertex identifiers; directed or undirected,
  parallel edges allowed. All algorithms in [`algo`](crate::algo) run on it.
- [`WeightedGraph`]: dense symmetric adjacency matrix over the vertices `0..n`; the input of
  [`MinimumSpanningTree`](crate::algo::MinimumSpanningTree).

A [`WeightedGraph`] can be converted into an undirected [`Graph`] via `Graph::from(&matrix)`
to run the remaining algorithms on it.
*/

use crate::{edge::*, node::*, ops::*, weight::*};

mod adj_list;
mod adj_matrix;

pub use adj_list::*;
pub use adj_matrix::*;
