use rand_distr::{Uniform, uniform::SampleUniform};

use super::*;

/// Generator for random multigraph edge lists with `n` nodes and `m` edges.
///
/// Both endpoints of every edge are drawn independently and uniformly from `0..n`, rejecting
/// self-loops; the same pair may be drawn more than once. Weights are drawn uniformly from the
/// inclusive range set with [`Gnm::weights`], or are `1` if no range was set.
///
/// The generator can be parameterized via:
/// - `.nodes(n)`: total number of nodes
/// - `.edges(m)`: total number of edges
/// - `.weights(lo, hi)`: inclusive weight range
#[derive(Debug, Copy, Clone)]
pub struct Gnm<W = u64> {
    n: NumNodes,
    m: NumEdges,
    weights: Option<(W, W)>,
}

impl<W> Default for Gnm<W> {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            weights: None,
        }
    }
}

impl<W> Gnm<W>
where
    W: Weight + SampleUniform,
{
    /// Creates a new generator without nodes and edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive range `[lo, hi]` edge weights are drawn from
    pub fn set_weights(&mut self, lo: W, hi: W) {
        self.weights = Some((lo, hi));
    }

    /// Sets the inclusive range `[lo, hi]` edge weights are drawn from
    pub fn weights(mut self, lo: W, hi: W) -> Self {
        self.set_weights(lo, hi);
        self
    }
}

impl<W> NumNodesGen for Gnm<W> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<W> NumEdgesGen for Gnm<W> {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl<W> GraphGenerator for Gnm<W>
where
    W: Weight + SampleUniform,
{
    type Weight = W;

    /// Returns a stream of exactly `m` random edges.
    ///
    /// # Panics
    /// - If `m > 0` and `n < 2` (no edge without self-loop exists)
    /// - If the weight range is empty (`lo > hi`)
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<Node, W>>
    where
        R: Rng,
    {
        assert!(
            self.m == 0 || self.n >= 2,
            "At least two nodes are required to generate edges!"
        );

        let weight_gen = self
            .weights
            .map(|(lo, hi)| match Uniform::new_inclusive(lo, hi) {
                Ok(distr) => distr,
                Err(e) => panic!("Invalid weight range: {e}"),
            });

        let n = self.n;
        (0..self.m).map(move |_| {
            let u = rng.random_range(0..n);
            // draw from n - 1 candidates and skip u to avoid loops
            let mut v = rng.random_range(0..n - 1);
            if v >= u {
                v += 1;
            }

            let w = weight_gen.as_ref().map_or(W::one(), |distr| rng.sample(distr));
            WeightedEdge(u, v, w)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn edge_count_and_ranges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 5, 20] {
            for m in [0, 1, 10, 100] {
                let edges = Gnm::new().nodes(n).edges(m).weights(3u32, 7).generate(rng);
                assert_eq!(edges.len(), m);
                for WeightedEdge(u, v, w) in edges {
                    assert!(u < n && v < n);
                    assert_ne!(u, v);
                    assert!((3..=7).contains(&w));
                }
            }
        }
    }

    #[test]
    fn unit_weights_by_default() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let edges = Gnm::<f64>::new().nodes(4).edges(30).generate(rng);
        assert!(edges.iter().all(|e| *e.weight() == 1.0));
    }

    #[test]
    fn pairs_repeat_in_small_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let edges = Gnm::<u8>::new().nodes(2).edges(10).generate(rng);
        let pairs = edges.iter().map(|e| (e.0.min(e.1), e.0.max(e.1))).unique().count();
        assert_eq!(pairs, 1);
    }

    #[test]
    fn deterministic_under_seed() {
        let gen_with = |seed| {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            Gnm::new().nodes(50).edges(50).weights(1u64, 100).generate(rng)
        };
        assert_eq!(gen_with(9), gen_with(9));
    }

    #[test]
    #[should_panic]
    fn single_node_panics() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let _ = Gnm::<u8>::new().nodes(1).edges(1).generate(rng);
    }
}
