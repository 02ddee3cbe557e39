use std::iter::FusedIterator;

use itertools::Itertools;

use super::{traversal::*, *};

/// Provides an iterator over connected components
pub trait Connectivity: AdjacencyList {
    /// Returns an iterator over the connected components of the graph.
    ///
    /// Every component is the depth-first pre-order starting at the smallest vertex not yet
    /// assigned to a component. Only outgoing edges are followed: on directed graphs, the
    /// components are therefore *not* strongly (or weakly) connected components.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: Graph<u8> = Graph::from_edges(false, [(0, 2, 1), (2, 1, 1), (3, 4, 1)]);
    /// g.add_vertex(5);
    ///
    /// let ccs: Vec<Vec<u8>> = g.connected_components().collect();
    /// assert_eq!(ccs, vec![vec![0, 2, 1], vec![3, 4], vec![5]]);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }
}

impl<G> Connectivity for G where G: AdjacencyList {}

/// Iterator over the connected components of a graph; see [`Connectivity::connected_components`]
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    dfs: Dfs<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    /// Creates an iterator over the connected components of `graph`, discovered in ascending
    /// order of their smallest vertex
    pub fn new(graph: &'a G) -> Self {
        Self {
            dfs: Dfs::unrooted(graph),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.dfs.try_restart_at_unvisited() {
            return None;
        }
        Some(self.dfs.by_ref().collect_vec())
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;

    #[test]
    fn undirected_components() {
        let mut g: Graph<&str> = Graph::new_undirected();
        g.connect_path(["d", "b", "a"]);
        g.connect_cycle(["x", "e", "f"]);
        g.add_vertex("c");

        let ccs = g.connected_components().collect_vec();
        assert_eq!(
            ccs,
            vec![vec!["a", "b", "d"], vec!["c"], vec!["e", "x", "f"]]
        );
        assert_eq!(ccs.iter().map(Vec::len).sum::<usize>(), g.number_of_nodes());
    }

    #[test]
    fn directed_follows_outgoing_edges_only() {
        // 1 cannot reach 2, so 2 starts a component of its own
        let g: Graph<u8> = Graph::from_edges(true, [(2, 1, 1), (1, 3, 1)]);
        assert_eq!(
            g.connected_components().collect_vec(),
            vec![vec![1, 3], vec![2]]
        );
    }

    #[test]
    fn constructed_directly() {
        let g: Graph<u8> = Graph::from_edges(false, [(4, 3, 1), (1, 0, 1)]);
        let ccs = ConnectedComponents::new(&g).collect_vec();
        assert_eq!(ccs, vec![vec![0, 1], vec![3, 4]]);
        assert_eq!(ccs, g.connected_components().collect_vec());
    }

    #[test]
    fn empty_and_fused() {
        let g: Graph<u8> = Graph::new_undirected();
        let mut ccs = g.connected_components();
        assert!(ccs.next().is_none());
        assert!(ccs.next().is_none());
    }

    #[test]
    fn components_partition_vertices() {
        let mut g: Graph<u32> = Graph::new_undirected();
        for k in 0..10u32 {
            g.connect_clique(&(10 * k..10 * k + k + 1).collect_vec(), false);
        }

        let ccs = g.connected_components().collect_vec();
        assert_eq!(ccs.len(), 10);
        for (k, cc) in ccs.into_iter().enumerate() {
            assert_eq!(cc.len(), k + 1);
            assert!(cc.iter().all(|&u| u / 10 == k as u32));
        }
    }
}
