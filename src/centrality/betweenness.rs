//! Betweenness centrality: measuring brokerage and bridging.
//!
//! # Intuition
//!
//! Betweenness measures how often a node lies on shortest paths between
//! other nodes. In a social network: the person who connects different
//! friend groups.
//!
//! # Definition
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! Where σ_st is the number of shortest s→t paths and σ_st(v) the number of
//! those passing through v.
//!
//! # Brandes' Algorithm (2001)
//!
//! 1. BFS from each source s, tracking σ_sv and the predecessor sets P_s(v)
//! 2. Walk the BFS order backwards accumulating dependencies:
//!
//! ```text
//! δ_s(v) = Σ_{w: v∈P_s(w)} (σ_sv/σ_sw) × (1 + δ_s(w))
//! ```
//!
//! Summing δ_s over all sources counts every unordered pair twice on an
//! undirected graph, so the total is halved.
//!
//! # Normalization
//!
//! Scores are raw by default. [`BetweennessConfig::normalized`] rescales by
//! `2 / ((n-1)(n-2))` for `n > 2`.
//!
//! Unreachable pairs contribute nothing; disconnected graphs are fine.

use crate::centrality::ScoreMap;
use crate::graph::{Graph, NodeId};
use std::collections::VecDeque;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Configuration for betweenness centrality.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BetweennessConfig {
    /// Rescale by `2 / ((n-1)(n-2))`.
    pub normalized: bool,
}

impl BetweennessConfig {
    /// Raw (unnormalized) scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set normalization.
    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }
}

/// Raw betweenness centrality of every node.
#[must_use]
pub fn betweenness_centrality<N: NodeId>(graph: &Graph<N>) -> ScoreMap<N> {
    betweenness_centrality_with(graph, BetweennessConfig::default())
}

/// Betweenness centrality with explicit configuration.
///
/// # Complexity
///
/// - Time: O(VE)
/// - Space: O(V + E)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality_with<N: NodeId>(
    graph: &Graph<N>,
    config: BetweennessConfig,
) -> ScoreMap<N> {
    let n = graph.node_count();
    let adj = graph.adjacency();

    // Per-source dependencies are independent; sum them in any order.
    #[cfg(feature = "parallel")]
    let mut betweenness = (0..n)
        .into_par_iter()
        .map(|s| source_dependencies(&adj, s))
        .reduce(|| vec![0.0; n], add_into);

    #[cfg(not(feature = "parallel"))]
    let mut betweenness = (0..n)
        .map(|s| source_dependencies(&adj, s))
        .fold(vec![0.0; n], add_into);

    let scale = if config.normalized && n > 2 {
        1.0 / ((n - 1) * (n - 2)) as f64
    } else {
        0.5
    };
    for b in &mut betweenness {
        *b *= scale;
    }

    ScoreMap::from_graph(graph, betweenness)
}

fn add_into(mut acc: Vec<f64>, part: Vec<f64>) -> Vec<f64> {
    for (a, p) in acc.iter_mut().zip(part) {
        *a += p;
    }
    acc
}

/// Dependencies δ_s(v) of source `s` on every node (δ_s(s) = 0).
fn source_dependencies(adj: &[Vec<usize>], s: usize) -> Vec<f64> {
    let (sigma, predecessors, order) = bfs_shortest_paths(adj, s);
    let mut delta = vec![0.0_f64; adj.len()];

    // Farthest first
    for &w in order.iter().rev() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
    }
    delta[s] = 0.0;
    delta
}

/// BFS from `source`.
///
/// Returns σ (shortest path counts), predecessor lists, and the visit order.
fn bfs_shortest_paths(
    adj: &[Vec<usize>],
    source: usize,
) -> (Vec<f64>, Vec<Vec<usize>>, Vec<usize>) {
    let n = adj.len();
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![usize::MAX; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);

    sigma[source] = 1.0;
    dist[source] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let next = dist[v] + 1;
        for &w in &adj[v] {
            if dist[w] == usize::MAX {
                dist[w] = next;
                queue.push_back(w);
            }
            if dist[w] == next {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    (sigma, predecessors, order)
}
