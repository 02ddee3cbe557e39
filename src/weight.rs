/*!
# Edge Weights & Distances

Edge weights can be any copyable, partially ordered numeric type with a zero and a one
(see [`Weight`]); integers and floats qualify.

Shortest-path results are expressed as [`Distance`], which carries an explicit
[`Distance::Unreachable`] value instead of overloading some "large" weight.
*/

use std::{
    fmt::{Debug, Display},
    ops::Add,
};

use num::{One, Zero};

/// Bound for edge weights.
///
/// `W::one()` is the weight of edges added without an explicit weight,
/// `W::zero()` is the distance of a source to itself (and the "no edge" marker of the
/// [`WeightedGraph`](crate::repr::WeightedGraph)).
pub trait Weight: Copy + PartialOrd + Debug + Zero + One + Add<Output = Self> {}

impl<W> Weight for W where W: Copy + PartialOrd + Debug + Zero + One + Add<Output = W> {}

/// Length of a shortest path.
///
/// Every finite distance compares smaller than [`Distance::Unreachable`]:
/// ```
/// use wgraphs::weight::Distance;
///
/// assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
/// assert!(Distance::Finite(1.5) < Distance::Finite(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    /// The target can be reached with this total weight
    Finite(W),
    /// There is no path to the target
    Unreachable,
}

impl<W> Distance<W> {
    /// Returns *true* if the distance is finite
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite distance or `None` if unreachable
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }
}

impl<W: Weight> Distance<W> {
    /// Distance of a vertex to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    /// Extends the distance by an edge of weight `w`; unreachable stays unreachable
    pub fn extended_by(self, w: W) -> Self {
        match self {
            Distance::Finite(d) => Distance::Finite(d + w),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{w}"),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}
