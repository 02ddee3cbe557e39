/*!
# Minimum Spanning Trees

Prim's algorithm on the dense [`WeightedGraph`] in `O(n^2)`: well suited for the matrix
representation, where scanning a full row is as cheap as it gets anyway.
*/

use tracing::{debug, trace};

use super::*;

/// Computes minimum spanning trees of weighted, undirected graphs
pub trait MinimumSpanningTree {
    /// Weight type of the spanning tree edges
    type Weight;

    /// Computes a minimum spanning tree with Prim's algorithm, grown from vertex `0`.
    ///
    /// Returns the tree edges `(parent, child, weight)` in the order in which the children were
    /// selected. Among vertices with equal key, the smallest index is selected first.
    /// Only cells with a weight greater than zero are considered edges.
    ///
    /// The input is expected to be connected. If it is not, every vertex that cannot be
    /// reached from the trees built so far starts a new tree (again the smallest index first),
    /// and the result is a minimum spanning *forest* with `n - #components` edges.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedGraph::from_edges(3, [(0, 1, 4u32), (1, 2, 1), (0, 2, 2)]);
    ///
    /// assert_eq!(
    ///     g.prim_mst(),
    ///     vec![WeightedEdge(0, 2, 2), WeightedEdge(2, 1, 1)]
    /// );
    /// assert_eq!(g.mst_weight(), 3);
    /// ```
    fn prim_mst(&self) -> Vec<WeightedEdge<Node, Self::Weight>>;

    /// Returns the total weight of [`MinimumSpanningTree::prim_mst`]
    fn mst_weight(&self) -> Self::Weight;
}

impl<W> MinimumSpanningTree for WeightedGraph<W>
where
    W: Weight,
{
    type Weight = W;

    fn prim_mst(&self) -> Vec<WeightedEdge<Node, W>> {
        let n = self.number_of_nodes();
        if n == 0 {
            return Vec::new();
        }

        let mut selected = NodeBitSet::new(n);
        let mut parent = vec![INVALID_NODE; n as usize];
        let mut key = vec![Distance::<W>::Unreachable; n as usize];
        key[0] = Distance::zero();

        let mut tree = Vec::with_capacity(n as usize - 1);
        for _ in 0..n {
            // first minimum wins; if no key is finite, this is the smallest unselected index
            let mut best: Option<Node> = None;
            for v in self.vertices_range() {
                if selected.get_bit(v) {
                    continue;
                }
                if best.is_none_or(|b| key[v as usize] < key[b as usize]) {
                    best = Some(v);
                }
            }

            let Some(u) = best else {
                break;
            };
            selected.set_bit(u);

            let p = parent[u as usize];
            if p == INVALID_NODE {
                if u != 0 {
                    trace!(root = u, "input is disconnected; starting a new tree");
                }
            } else {
                tree.push(WeightedEdge(p, u, self.raw_weight(p, u)));
            }

            for (v, w) in self.neighbors_of(u) {
                if w > W::zero() && !selected.get_bit(v) && Distance::Finite(w) < key[v as usize] {
                    key[v as usize] = Distance::Finite(w);
                    parent[v as usize] = u;
                }
            }
        }

        debug!(vertices = n, tree_edges = tree.len(), "prim finished");
        tree
    }

    fn mst_weight(&self) -> W {
        self.prim_mst()
            .into_iter()
            .fold(W::zero(), |total, WeightedEdge(_, _, w)| total + w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn example() -> WeightedGraph<u64> {
        WeightedGraph::from_edges(
            5,
            [
                (0, 1, 2),
                (0, 3, 6),
                (1, 2, 3),
                (1, 3, 8),
                (1, 4, 5),
                (2, 4, 7),
                (3, 4, 9),
            ],
        )
    }

    #[test]
    fn example_tree() {
        let g = example();
        let tree = g.prim_mst();

        assert_eq!(
            tree,
            vec![
                WeightedEdge(0, 1, 2),
                WeightedEdge(1, 2, 3),
                WeightedEdge(1, 4, 5),
                WeightedEdge(0, 3, 6),
            ]
        );
        assert_eq!(tree.len(), g.len() - 1);
        assert_eq!(g.mst_weight(), 16);
        assert_eq!(brute_force_mst_weight(&g), Some(16));
    }

    #[test]
    fn tiny_graphs() {
        assert!(WeightedGraph::<u8>::new(0).prim_mst().is_empty());
        assert!(WeightedGraph::<u8>::new(1).prim_mst().is_empty());
        assert_eq!(WeightedGraph::<u8>::new(0).mst_weight(), 0);

        // self-loops never end up in a tree
        let g = WeightedGraph::from_edges(2, [(0, 0, 1u8), (0, 1, 3), (1, 1, 1)]);
        assert_eq!(g.prim_mst(), vec![WeightedEdge(0, 1, 3)]);
    }

    #[test]
    fn ties_prefer_smaller_index() {
        let g = WeightedGraph::from_edges(3, [(0, 1, 1u32), (0, 2, 1), (1, 2, 1)]);
        assert_eq!(
            g.prim_mst(),
            vec![WeightedEdge(0, 1, 1), WeightedEdge(0, 2, 1)]
        );
    }

    #[test]
    fn disconnected_input_yields_forest() {
        let g = WeightedGraph::from_edges(5, [(0, 1, 1u32), (2, 3, 4), (3, 4, 2)]);
        assert_eq!(
            g.prim_mst(),
            vec![
                WeightedEdge(0, 1, 1),
                WeightedEdge(2, 3, 4),
                WeightedEdge(3, 4, 2),
            ]
        );
        assert_eq!(g.mst_weight(), 7);
    }

    #[test]
    fn float_weights() {
        let g = WeightedGraph::from_edges(3, [(0, 1, 0.5f64), (1, 2, 0.25), (0, 2, 1.0)]);
        assert_eq!(g.mst_weight(), 0.75);
    }

    #[test]
    fn matches_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in 2..=7 {
            for _ in 0..20 {
                let g = random_connected_matrix(rng, n, 3 * n);
                let tree = g.prim_mst();

                assert_eq!(tree.len(), n as usize - 1);
                for e in &tree {
                    assert_eq!(g.weight(e.0, e.1), Some(e.2));
                }
                assert_eq!(Some(g.mst_weight()), brute_force_mst_weight(&g));
            }
        }
    }
}
