/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Traversal iterators: BFS (with and without predecessor tracking), pre-order DFS and post-order DFS.
- Restartable searches (`try_restart_at_unvisited`) that let whole-graph scans such as
  connected components or topological sorting reuse the same iterators.
- The unweighted shortest path between two vertices.
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.

All searches visit neighbors in adjacency-list (i.e. insertion) order, so their output is
deterministic. Starting a search at a vertex unknown to the graph yields exactly that vertex.
*/

use super::*;
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use std::{collections::VecDeque, vec::IntoIter};

/// Common interface for querying visited-states during a traversal.
pub trait TraversalState<V> {
    /// Returns a reference to the set of visited vertices.
    fn visited(&self) -> &FxHashSet<V>;

    /// Checks if a given vertex `u` has already been visited.
    fn did_visit_node(&self, u: &V) -> bool
    where
        V: VertexId,
    {
        self.visited().contains(u)
    }
}

/// Item yielded by predecessor-tracking traversals: `(predecessor, vertex)`.
/// The predecessor is `None` for the root of every search tree.
pub type PredecessorOf<V> = (Option<V>, V);

/// Lazily materialized list of all vertices in ascending order, used to find
/// restart points for whole-graph scans.
struct RootScan<V> {
    pending: Option<IntoIter<V>>,
}

impl<V: VertexId> RootScan<V> {
    fn new() -> Self {
        Self { pending: None }
    }

    /// Returns the smallest vertex not yet in `visited`.
    /// Vertices are inspected at most once over the lifetime of the scan.
    fn next_unvisited<G>(&mut self, graph: &G, visited: &FxHashSet<V>) -> Option<V>
    where
        G: GraphNodeOrder<Vertex = V>,
    {
        self.pending
            .get_or_insert_with(|| graph.vertices().cloned().collect_vec().into_iter())
            .find(|u| !visited.contains(u))
    }
}

/// Breadth-first search that additionally yields the predecessor of every vertex,
/// i.e. the edges of the implied BFS tree.
///
/// Vertices are marked as visited when they are enqueued.
pub struct BfsWithPredecessor<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<G::Vertex>,
    queue: VecDeque<PredecessorOf<G::Vertex>>,
    roots: RootScan<G::Vertex>,
}

impl<'a, G> BfsWithPredecessor<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search starting from `start`.
    pub fn new(graph: &'a G, start: G::Vertex) -> Self {
        let mut search = Self::unrooted(graph);
        search.visited.insert(start.clone());
        search.queue.push_back((None, start));
        search
    }

    /// Creates a search without a start vertex; it yields nothing until
    /// [`BfsWithPredecessor::try_restart_at_unvisited`] is called.
    pub fn unrooted(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            queue: VecDeque::new(),
            roots: RootScan::new(),
        }
    }

    /// Tries to restart the search at the smallest yet unvisited vertex and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.roots.next_unvisited(self.graph, &self.visited) {
            None => false,
            Some(root) => {
                self.visited.insert(root.clone());
                self.queue.push_back((None, root));
                true
            }
        }
    }
}

impl<G> TraversalState<G::Vertex> for BfsWithPredecessor<'_, G>
where
    G: AdjacencyList,
{
    fn visited(&self) -> &FxHashSet<G::Vertex> {
        &self.visited
    }
}

impl<G> Iterator for BfsWithPredecessor<'_, G>
where
    G: AdjacencyList,
{
    type Item = PredecessorOf<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let (predecessor, u) = self.queue.pop_front()?;

        for (v, _) in self.graph.neighbors_of(&u) {
            if !self.visited.contains(v) {
                self.visited.insert(v.clone());
                self.queue.push_back((Some(u.clone()), v.clone()));
            }
        }

        Some((predecessor, u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

/// A BFS traversal iterator over the graph, visiting vertices in
/// breadth-first order from a given starting vertex.
pub struct Bfs<'a, G>(BfsWithPredecessor<'a, G>)
where
    G: AdjacencyList;

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new BFS starting from `start`.
    pub fn new(graph: &'a G, start: G::Vertex) -> Self {
        Self(BfsWithPredecessor::new(graph, start))
    }

    /// See [`BfsWithPredecessor::try_restart_at_unvisited`]
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        self.0.try_restart_at_unvisited()
    }
}

impl<G> TraversalState<G::Vertex> for Bfs<'_, G>
where
    G: AdjacencyList,
{
    fn visited(&self) -> &FxHashSet<G::Vertex> {
        self.0.visited()
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, u)| u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Event of a depth-first search
enum DfsStep<V> {
    /// The vertex is visited for the first time
    Enter(V),
    /// All neighbors of the vertex have been explored
    Leave(V),
}

/// Explicit-stack emulation of a recursive depth-first search.
///
/// Every frame holds a vertex and the index of the next neighbor to explore, so the
/// exploration order matches the recursive formulation exactly while the call stack stays flat.
struct DfsFrames<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<G::Vertex>,
    stack: Vec<(G::Vertex, usize)>,
    root: Option<G::Vertex>,
    roots: RootScan<G::Vertex>,
}

impl<'a, G> DfsFrames<'a, G>
where
    G: AdjacencyList,
{
    fn unrooted(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            stack: Vec::new(),
            root: None,
            roots: RootScan::new(),
        }
    }

    fn new(graph: &'a G, start: G::Vertex) -> Self {
        let mut frames = Self::unrooted(graph);
        frames.visited.insert(start.clone());
        frames.root = Some(start);
        frames
    }

    fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.stack.is_empty() && self.root.is_none());
        match self.roots.next_unvisited(self.graph, &self.visited) {
            None => false,
            Some(root) => {
                self.visited.insert(root.clone());
                self.root = Some(root);
                true
            }
        }
    }

    fn next_step(&mut self) -> Option<DfsStep<G::Vertex>> {
        if let Some(root) = self.root.take() {
            self.stack.push((root.clone(), 0));
            return Some(DfsStep::Enter(root));
        }

        let graph = self.graph;
        loop {
            let (u, next) = self.stack.last_mut()?;
            match graph.neighbors_of(u).get(*next) {
                Some((v, _)) => {
                    *next += 1;
                    if !self.visited.contains(v) {
                        self.visited.insert(v.clone());
                        self.stack.push((v.clone(), 0));
                        return Some(DfsStep::Enter(v.clone()));
                    }
                }
                None => {
                    let (u, _) = self.stack.pop()?;
                    return Some(DfsStep::Leave(u));
                }
            }
        }
    }
}

/// A DFS traversal iterator over the graph, yielding vertices in
/// depth-first **pre-order** (a vertex is emitted before its descendants).
pub struct Dfs<'a, G>(DfsFrames<'a, G>)
where
    G: AdjacencyList;

impl<'a, G> Dfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new DFS starting from `start`.
    pub fn new(graph: &'a G, start: G::Vertex) -> Self {
        Self(DfsFrames::new(graph, start))
    }

    /// Creates a DFS without a start vertex; it yields nothing until
    /// [`Dfs::try_restart_at_unvisited`] is called.
    pub fn unrooted(graph: &'a G) -> Self {
        Self(DfsFrames::unrooted(graph))
    }

    /// Tries to restart the search at the smallest yet unvisited vertex and returns
    /// true iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        self.0.try_restart_at_unvisited()
    }
}

impl<G> TraversalState<G::Vertex> for Dfs<'_, G>
where
    G: AdjacencyList,
{
    fn visited(&self) -> &FxHashSet<G::Vertex> {
        &self.0.visited
    }
}

impl<G> Iterator for Dfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let DfsStep::Enter(u) = self.0.next_step()? {
                return Some(u);
            }
        }
    }
}

/// A DFS traversal iterator yielding vertices in **post-order**:
/// a vertex is emitted once all of its descendants have been emitted.
pub struct DfsPostOrder<'a, G>(DfsFrames<'a, G>)
where
    G: AdjacencyList;

impl<'a, G> DfsPostOrder<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new post-order DFS starting from `start`.
    pub fn new(graph: &'a G, start: G::Vertex) -> Self {
        Self(DfsFrames::new(graph, start))
    }

    /// Creates a post-order DFS without a start vertex; it yields nothing until
    /// [`DfsPostOrder::try_restart_at_unvisited`] is called.
    pub fn unrooted(graph: &'a G) -> Self {
        Self(DfsFrames::unrooted(graph))
    }

    /// See [`Dfs::try_restart_at_unvisited`]
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        self.0.try_restart_at_unvisited()
    }
}

impl<G> Iterator for DfsPostOrder<'_, G>
where
    G: AdjacencyList,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let DfsStep::Leave(u) = self.0.next_step()? {
                return Some(u);
            }
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS, unweighted shortest paths)
pub trait Traversal: AdjacencyList {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<char> = Graph::from_edges(false, [('a', 'c', 1), ('a', 'b', 1), ('b', 'd', 1)]);
    ///
    /// let order: Vec<_> = g.bfs('a').collect();
    /// assert_eq!(order, vec!['a', 'c', 'b', 'd']);
    /// ```
    fn bfs(&self, start: Self::Vertex) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<u8> = Graph::from_edges(false, [(0, 1, 1)]);
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next(), Some((None, 0)));
    /// assert_eq!(it.next(), Some((Some(0), 1)));
    /// ```
    fn bfs_with_predecessor(&self, start: Self::Vertex) -> BfsWithPredecessor<'_, Self> {
        BfsWithPredecessor::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<char> = Graph::from_edges(false, [('a', 'c', 1), ('a', 'b', 1), ('b', 'd', 1)]);
    ///
    /// let order: Vec<_> = g.dfs('a').collect();
    /// assert_eq!(order, vec!['a', 'c', 'b', 'd']);
    ///
    /// let order: Vec<_> = g.dfs('b').collect();
    /// assert_eq!(order, vec!['b', 'a', 'c', 'd']);
    /// ```
    fn dfs(&self, start: Self::Vertex) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) post-order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<char> = Graph::from_edges(true, [('a', 'b', 1), ('b', 'c', 1), ('a', 'd', 1)]);
    ///
    /// let order: Vec<_> = g.dfs_post_order('a').collect();
    /// assert_eq!(order, vec!['c', 'b', 'd', 'a']);
    /// ```
    fn dfs_post_order(&self, start: Self::Vertex) -> DfsPostOrder<'_, Self> {
        DfsPostOrder::new(self, start)
    }

    /// Computes a path with the **fewest edges** from `start` to `end` using BFS.
    ///
    /// - Returns `Some(path)` including both endpoints if a path exists;
    ///   `Some(vec![start])` if `start == end`.
    /// - Among several shortest paths, the first one discovered in adjacency-list order wins.
    /// - Returns `None` if `end` cannot be reached.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: Graph<u8> = Graph::from_edges(false, [(0, 1, 1), (1, 2, 1), (0, 3, 1), (3, 2, 1)]);
    ///
    /// assert_eq!(g.shortest_path_bfs(0, 2), Some(vec![0, 1, 2]));
    /// assert_eq!(g.shortest_path_bfs(2, 2), Some(vec![2]));
    /// assert_eq!(g.shortest_path_bfs(0, 9), None);
    /// ```
    fn shortest_path_bfs(&self, start: Self::Vertex, end: Self::Vertex) -> Option<Vec<Self::Vertex>> {
        if start == end {
            return Some(vec![start]);
        }

        let mut bfs = self.bfs_with_predecessor(start);
        // `bfs` first returns `start` which has no predecessor
        bfs.next();

        let mut parent: FxHashMap<Self::Vertex, Self::Vertex> = FxHashMap::default();
        for (predecessor, u) in bfs {
            let predecessor = predecessor?;
            if u == end {
                let mut path = vec![u, predecessor];
                while let Some(p) = parent.get(path.last()?) {
                    path.push(p.clone());
                }
                path.reverse();
                return Some(path);
            }
            parent.insert(u, predecessor);
        }

        None
    }
}

impl<G> Traversal for G where G: AdjacencyList {}
