use std::fmt::{Debug, Display};

/// A weighted edge is defined by two endpoints and a weight: `WeightedEdge(source, target, weight)`.
/// It is up to the graph whether an edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge<V, W>(pub V, pub V, pub W);

impl<V: Display, W: Display> Display for WeightedEdge<V, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.0, self.1, self.2)
    }
}

impl<V: Debug, W: Debug> Debug for WeightedEdge<V, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?};{:?})", self.0, self.1, self.2)
    }
}

impl<V, W> WeightedEdge<V, W> {
    /// Returns the source of the edge
    pub fn source(&self) -> &V {
        &self.0
    }

    /// Returns the target of the edge
    pub fn target(&self) -> &V {
        &self.1
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> &W {
        &self.2
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(self) -> Self {
        WeightedEdge(self.1, self.0, self.2)
    }
}

impl<V, W> From<(V, V, W)> for WeightedEdge<V, W> {
    fn from(value: (V, V, W)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<V: Clone, W: Copy> From<&(V, V, W)> for WeightedEdge<V, W> {
    fn from(value: &(V, V, W)) -> Self {
        WeightedEdge(value.0.clone(), value.1.clone(), value.2)
    }
}

impl<V, W> From<WeightedEdge<V, W>> for (V, V, W) {
    fn from(value: WeightedEdge<V, W>) -> Self {
        (value.0, value.1, value.2)
    }
}
