//! The graph store every engine reads from.
//!
//! [`Graph`] wraps a `petgraph` undirected graph and adds an id index so that
//! callers can address nodes by their own identifiers (integers, strings, ...)
//! instead of `NodeIndex`.
//!
//! ## Canonical order
//!
//! Nodes iterate in insertion order. Every tie-break in this crate (degree
//! extrema, Top-N, partition renumbering) is resolved against this order, so
//! two graphs built from the same edge list in the same order always rank
//! identically.
//!
//! ## Immutability
//!
//! No engine mutates a graph. Results are returned as fresh values
//! ([`ScoreMap`](crate::ScoreMap), [`Partition`](crate::Partition)); derived
//! views such as [`Graph::induced_subgraph`] are new graphs.

use crate::error::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier bound for graph nodes.
///
/// Blanket-implemented for anything cloneable, hashable and printable.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// Simple undirected graph: no self-loops, no parallel edges.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    pub(crate) graph: UnGraph<N, ()>,
    index: HashMap<N, NodeIndex>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
        }
    }

    /// Create an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Build a graph from an edge list, inserting endpoints as they appear.
    ///
    /// Duplicate edges are ignored; a self-loop fails with [`Error::SelfLoop`].
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Add a node, returning its index. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.index.insert(node, idx);
        idx
    }

    /// Add an undirected edge, inserting missing endpoints.
    ///
    /// Returns `Ok(false)` when the edge already existed.
    pub fn add_edge(&mut self, a: N, b: N) -> Result<bool> {
        if a == b {
            return Err(Error::SelfLoop(format!("{a:?}")));
        }
        let ia = self.add_node(a);
        let ib = self.add_node(b);
        if self.graph.find_edge(ia, ib).is_some() {
            return Ok(false);
        }
        self.graph.add_edge(ia, ib, ());
        Ok(true)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// True if `node` is in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Index of `node`, if present.
    pub fn index_of(&self, node: &N) -> Option<NodeIndex> {
        self.index.get(node).copied()
    }

    /// Index of `node`, failing with [`Error::InvalidNode`] if absent.
    pub(crate) fn require(&self, node: &N) -> Result<NodeIndex> {
        self.index_of(node).ok_or_else(|| Error::invalid_node(node))
    }

    /// Nodes in canonical order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph.node_weights()
    }

    /// Edges as endpoint pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()]))
    }

    /// Neighbors of `node`.
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = &N> + '_> {
        let idx = self.require(node)?;
        Ok(self.graph.neighbors(idx).map(|n| &self.graph[n]))
    }

    /// Number of edges incident to `node`.
    pub fn degree(&self, node: &N) -> Result<usize> {
        let idx = self.require(node)?;
        Ok(self.graph.edges(idx).count())
    }

    /// Index-space adjacency lists, `adj[i]` sorted ascending.
    pub(crate) fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.graph.node_count()];
        for edge in self.graph.edge_references() {
            let (i, j) = (edge.source().index(), edge.target().index());
            adj[i].push(j);
            adj[j].push(i);
        }
        for list in &mut adj {
            list.sort_unstable();
        }
        adj
    }

    /// Restrict the graph to `nodes` and the edges entirely within them.
    ///
    /// Kept nodes stay in this graph's canonical order; duplicates in `nodes`
    /// are ignored. Fails with [`Error::InvalidNode`] on an unknown node.
    pub fn induced_subgraph<'a, I>(&self, nodes: I) -> Result<Graph<N>>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let mut keep: HashSet<NodeIndex> = HashSet::new();
        for node in nodes {
            keep.insert(self.require(node)?);
        }
        Ok(self.filtered(&keep))
    }

    fn filtered(&self, keep: &HashSet<NodeIndex>) -> Graph<N> {
        let graph = self.graph.filter_map(
            |idx, node| keep.contains(&idx).then(|| node.clone()),
            |_, _| Some(()),
        );
        let index = graph
            .node_indices()
            .map(|idx| (graph[idx].clone(), idx))
            .collect();
        Graph { graph, index }
    }

    /// Connected component label for every node, indexed by `NodeIndex::index()`.
    ///
    /// Labels are contiguous in `0..c`, numbered in first-seen order.
    pub fn connected_components(&self) -> Vec<usize> {
        let mut sets = UnionFind::new(self.graph.node_count());
        for edge in self.graph.edge_references() {
            sets.union(edge.source().index(), edge.target().index());
        }
        let mut labels = sets.into_labeling();
        renumber(&mut labels);
        labels
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        self.connected_components()
            .into_iter()
            .max()
            .map_or(0, |last| last + 1)
    }

    /// True if the graph is non-empty and has a single component.
    pub fn is_connected(&self) -> bool {
        !self.is_empty() && self.component_count() == 1
    }

    /// The largest connected component as its own graph.
    ///
    /// Ties go to the component seen first in canonical order.
    pub fn largest_component(&self) -> Result<Graph<N>> {
        if self.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let labels = self.connected_components();
        let n_comp = labels.iter().copied().max().map_or(0, |m| m + 1);
        let mut sizes = vec![0usize; n_comp];
        for &l in &labels {
            sizes[l] += 1;
        }
        let mut best = 0;
        for (c, &size) in sizes.iter().enumerate() {
            if size > sizes[best] {
                best = c;
            }
        }
        let keep: HashSet<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|idx| labels[idx.index()] == best)
            .collect();
        Ok(self.filtered(&keep))
    }
}

/// Renumber arbitrary labels to `0..k` in first-seen order. Returns k.
pub(crate) fn renumber(labels: &mut [usize]) -> usize {
    let mut map: HashMap<usize, usize> = HashMap::new();
    let mut next = 0usize;
    for l in labels.iter_mut() {
        let id = *map.entry(*l).or_insert_with(|| {
            let cur = next;
            next += 1;
            cur
        });
        *l = id;
    }
    next
}
